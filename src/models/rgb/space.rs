//! Tags for the RGB color spaces and the matrices that take their linear
//! light values to CIE-XYZ.

use std::sync::LazyLock;

use crate::{
    color::Components,
    math::{matrix, transform, transform_3x3, Transform},
    models::xyz::{self, Reference},
    white_point::{Chromaticity, WhitePoint},
};

/// An RGB color space defined by its primaries and reference white.
pub trait RgbSpace: Clone + std::fmt::Debug {
    /// The reference white of the space.
    type White: Reference;

    /// Linear light RGB to CIE-XYZ relative to [`RgbSpace::White`].
    fn to_xyz_matrix() -> &'static Transform;

    /// CIE-XYZ relative to [`RgbSpace::White`] to linear light RGB.
    fn from_xyz_matrix() -> &'static Transform;
}

/// Derive the linear light RGB to XYZ matrix of a space from the
/// chromaticities of its primaries and white. Returns `None` if the
/// primaries are collinear.
pub fn primaries_to_xyz(
    white: WhitePoint,
    red: Chromaticity,
    green: Chromaticity,
    blue: Chromaticity,
) -> Option<Transform> {
    let Components(xr, yr, zr) = red.to_xyz();
    let Components(xg, yg, zg) = green.to_xyz();
    let Components(xb, yb, zb) = blue.to_xyz();

    let primaries = matrix([[xr, xg, xb], [yr, yg, yb], [zr, zg, zb]]);
    let Components(sr, sg, sb) = transform(&primaries.inverse()?, white.xyz());

    Some(matrix([
        [xr * sr, xg * sg, xb * sb],
        [yr * sr, yg * sg, yb * sb],
        [zr * sr, zg * sg, zb * sb],
    ]))
}

macro_rules! rgb_space {
    ($(#[$meta:meta])* $name:ident, $white:ty, $to_xyz:expr, $from_xyz:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name;

        impl RgbSpace for $name {
            type White = $white;

            fn to_xyz_matrix() -> &'static Transform {
                $to_xyz
            }

            fn from_xyz_matrix() -> &'static Transform {
                $from_xyz
            }
        }
    };
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static SRGB_TO_XYZ: Transform = transform_3x3(
    0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
    0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
    0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static XYZ_TO_SRGB: Transform = transform_3x3(
     3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
    -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
    -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
);

rgb_space!(
    /// Tag for the sRGB color space.
    Srgb, xyz::D65, &SRGB_TO_XYZ, &XYZ_TO_SRGB
);

rgb_space!(
    /// Tag for ITU-R BT.709. The primaries and white are those of sRGB, only
    /// the transfer function differs.
    Bt709, xyz::D65, &SRGB_TO_XYZ, &XYZ_TO_SRGB
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static DISPLAY_P3_TO_XYZ: Transform = transform_3x3(
    0.48657094864821626, 0.22897456406974884, 0.0,
    0.26566769316909294, 0.6917385218365062,  0.045113381858902575,
    0.1982172852343625,  0.079286914093745,   1.0439443689009757,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static XYZ_TO_DISPLAY_P3: Transform = transform_3x3(
     2.4934969119414245,  -0.829488969561575,    0.035845830243784335,
    -0.9313836179191236,   1.7626640603183468,  -0.07617238926804171,
    -0.40271078445071684,  0.02362468584194359,  0.9568845240076873,
);

rgb_space!(
    /// Tag for the Display-P3 color space.
    DisplayP3, xyz::D65, &DISPLAY_P3_TO_XYZ, &XYZ_TO_DISPLAY_P3
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static A98_RGB_TO_XYZ: Transform = transform_3x3(
    0.5766690429101308,  0.29734497525053616, 0.027031361386412378,
    0.18555823790654627, 0.627363566255466,   0.07068885253582714,
    0.18822864623499472, 0.07529145849399789, 0.9913375368376389,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static XYZ_TO_A98_RGB: Transform = transform_3x3(
     2.041587903810746,  -0.9692436362808798,   0.013444280632031024,
    -0.5650069742788596,  1.8759675015077206,  -0.11836239223101824,
    -0.3447313507783295,  0.04155505740717561,  1.0151749943912054,
);

rgb_space!(
    /// Tag for the a98-rgb (Adobe RGB 1998) color space.
    A98Rgb, xyz::D65, &A98_RGB_TO_XYZ, &XYZ_TO_A98_RGB
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static PRO_PHOTO_RGB_TO_XYZ: Transform = transform_3x3(
    0.7977604896723027,  0.2880711282292934,     0.0,
    0.13518583717574031, 0.7118432178101014,     0.0,
    0.0313493495815248,  0.00008565396060525902, 0.8251046025104601,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static XYZ_TO_PRO_PHOTO_RGB: Transform = transform_3x3(
     1.3457989731028281,  -0.5446224939028347,  0.0,
    -0.25558010007997534,  1.5082327413132781,  0.0,
    -0.05110628506753401,  0.02053603239147973, 1.2119675456389454,
);

rgb_space!(
    /// Tag for the ProPhoto RGB color space.
    ProPhotoRgb, xyz::D50, &PRO_PHOTO_RGB_TO_XYZ, &XYZ_TO_PRO_PHOTO_RGB
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static REC2020_TO_XYZ: Transform = transform_3x3(
    0.6369580483012913,  0.26270021201126703,  0.0,
    0.14461690358620838, 0.677998071518871,    0.028072693049087508,
    0.16888097516417205, 0.059301716469861945, 1.0609850577107909,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static XYZ_TO_REC2020: Transform = transform_3x3(
     1.7166511879712676, -0.666684351832489,    0.017639857445310915,
    -0.3556707837763924,  1.616481236634939,   -0.042770613257808655,
    -0.2533662813736598,  0.01576854581391113,  0.942103121235474,
);

rgb_space!(
    /// Tag for the Rec.2020 color space.
    Rec2020, xyz::D65, &REC2020_TO_XYZ, &XYZ_TO_REC2020
);

/// Matrices for a space only known by its primaries. The primaries are
/// constants, so failing to invert them is a programming error.
struct Derived {
    to_xyz: Transform,
    from_xyz: Transform,
}

impl Derived {
    fn new(white: WhitePoint, primaries: [(f64, f64); 3]) -> Self {
        let [red, green, blue] =
            primaries.map(|(x, y)| Chromaticity::new(x as _, y as _));
        let to_xyz = primaries_to_xyz(white, red, green, blue)
            .expect("primaries of a registered RGB space are not collinear");
        let from_xyz = to_xyz
            .inverse()
            .expect("RGB to XYZ matrix of a registered space is invertible");
        Self { to_xyz, from_xyz }
    }
}

static ACES_AP0: LazyLock<Derived> = LazyLock::new(|| {
    Derived::new(
        WhitePoint::Aces,
        [(0.7347, 0.2653), (0.0, 1.0), (0.0001, -0.077)],
    )
});

static ACES_AP1: LazyLock<Derived> = LazyLock::new(|| {
    Derived::new(
        WhitePoint::Aces,
        [(0.713, 0.293), (0.165, 0.830), (0.128, 0.044)],
    )
});

rgb_space!(
    /// Tag for ACES2065-1, the AP0 primaries.
    Aces2065, xyz::Aces, &ACES_AP0.to_xyz, &ACES_AP0.from_xyz
);

rgb_space!(
    /// Tag for ACEScg, the AP1 primaries.
    AcesCg, xyz::Aces, &ACES_AP1.to_xyz, &ACES_AP1.from_xyz
);

rgb_space!(
    /// Tag for ACEScc, a logarithmic encoding of the AP1 primaries.
    AcesCc, xyz::Aces, &ACES_AP1.to_xyz, &ACES_AP1.from_xyz
);

rgb_space!(
    /// Tag for ACEScct, ACEScc with a linear toe near black.
    AcesCct, xyz::Aces, &ACES_AP1.to_xyz, &ACES_AP1.from_xyz
);

static DCI_P3: LazyLock<Derived> = LazyLock::new(|| {
    Derived::new(
        WhitePoint::Dci,
        [(0.680, 0.320), (0.265, 0.690), (0.150, 0.060)],
    )
});

rgb_space!(
    /// Tag for DCI-P3, the Display-P3 primaries with the projector white.
    DciP3, xyz::Dci, &DCI_P3.to_xyz, &DCI_P3.from_xyz
);
