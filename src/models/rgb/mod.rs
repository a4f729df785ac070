//! Model a color in one of the RGB color spaces.

use crate::{
    color::{Component, HasSpace, Space},
    math::transform,
    models::{xyz::Xyz, Connect},
};

mod gamma;
pub mod space;

pub use gamma::TransferFunction;
pub use space::{primaries_to_xyz, RgbSpace};

pub mod encoding {
    //! Tags for the way RGB components are encoded.

    /// Identifies tags that specify how components are encoded.
    pub trait Encoding: Clone + std::fmt::Debug {}

    /// Components are encoded with the transfer function of their space.
    #[derive(Clone, Debug)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Debug)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

use encoding::{Encoding, GammaEncoded, LinearLight};

chromata_macros::gen_model! {
    /// A color specified in an RGB color space.
    pub struct Rgb<S: RgbSpace, E: Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl<S: RgbSpace + TransferFunction> Rgb<S, GammaEncoded> {
    /// Decode the components of this color to linear light.
    pub fn to_linear_light(&self) -> Rgb<S, LinearLight> {
        S::to_linear_light(&self.to_components()).into()
    }
}

impl<S: RgbSpace + TransferFunction> Rgb<S, LinearLight> {
    /// Encode the components of this color with the transfer function of
    /// its space.
    pub fn to_gamma_encoded(&self) -> Rgb<S, GammaEncoded> {
        S::to_gamma_encoded(&self.to_components()).into()
    }
}

impl<S: RgbSpace> Connect for Rgb<S, LinearLight> {
    type White = S::White;

    fn to_xyz(&self) -> Xyz<S::White> {
        transform(S::to_xyz_matrix(), self.to_components()).into()
    }

    fn from_xyz(xyz: &Xyz<S::White>) -> Self {
        transform(S::from_xyz_matrix(), xyz.to_components()).into()
    }
}

impl<S: RgbSpace + TransferFunction> Connect for Rgb<S, GammaEncoded> {
    type White = S::White;

    fn to_xyz(&self) -> Xyz<S::White> {
        self.to_linear_light().to_xyz()
    }

    fn from_xyz(xyz: &Xyz<S::White>) -> Self {
        Rgb::<S, LinearLight>::from_xyz(xyz).to_gamma_encoded()
    }
}

macro_rules! rgb_model {
    ($(#[$meta:meta])* $name:ident = $space:ident, $encoding:ident) => {
        $(#[$meta])*
        pub type $name = Rgb<space::$space, $encoding>;

        impl HasSpace for $name {
            const SPACE: Space = Space::$name;
        }
    };
}

rgb_model!(
    /// Model for a color in the sRGB color space.
    Srgb = Srgb, GammaEncoded
);
rgb_model!(
    /// Model for a color in the sRGB color space with linear light.
    SrgbLinear = Srgb, LinearLight
);
rgb_model!(
    /// Model for a color in the Display-P3 color space.
    DisplayP3 = DisplayP3, GammaEncoded
);
rgb_model!(
    /// Model for a color in the a98-rgb color space.
    A98Rgb = A98Rgb, GammaEncoded
);
rgb_model!(
    /// Model for a color in the ProPhoto RGB color space.
    ProPhotoRgb = ProPhotoRgb, GammaEncoded
);
rgb_model!(
    /// Model for a color in the Rec.2020 color space.
    Rec2020 = Rec2020, GammaEncoded
);
rgb_model!(
    /// Model for a color in ITU-R BT.709.
    Bt709 = Bt709, GammaEncoded
);
rgb_model!(
    /// Model for a color in DCI-P3.
    DciP3 = DciP3, GammaEncoded
);
rgb_model!(
    /// Model for a color in ACEScc.
    AcesCc = AcesCc, GammaEncoded
);
rgb_model!(
    /// Model for a color in ACEScct.
    AcesCct = AcesCct, GammaEncoded
);
rgb_model!(
    /// Model for a color in ACES2065-1. Always linear light.
    Aces2065 = Aces2065, LinearLight
);
rgb_model!(
    /// Model for a color in ACEScg. Always linear light.
    AcesCg = AcesCg, LinearLight
);

// The linear light forms of the wide gamut spaces are not registered as a
// [`Space`], so they can not be held in a `Color`. They still connect to
// CIE-XYZ like any other model.

/// Display-P3 with linear light.
pub type DisplayP3Linear = Rgb<space::DisplayP3, LinearLight>;
/// a98-rgb with linear light.
pub type A98RgbLinear = Rgb<space::A98Rgb, LinearLight>;
/// ProPhoto RGB with linear light.
pub type ProPhotoRgbLinear = Rgb<space::ProPhotoRgb, LinearLight>;
/// Rec.2020 with linear light.
pub type Rec2020Linear = Rgb<space::Rec2020, LinearLight>;
