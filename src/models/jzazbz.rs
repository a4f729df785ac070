//! Model a color in the JzAzBz color space.
//!
//! M. Safdar, G. Cui, Y. Kim, and M. Luo, "Perceptually uniform color space
//! for image signals including high dynamic range and wide gamut,"
//! Opt. Express 25, 15131-15151 (2017).
//!
//! XYZ values are taken as absolute luminance where `Y = 1` is 1 cd/m².

use std::sync::LazyLock;

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::{matrix, transform, Transform},
    models::{
        lab::{tag, Polar, Rectangular},
        xyz::{Xyz, D65},
        Connect,
    },
};

/// The model for a color specified in the JzAzBz color space. The
/// `lightness`, `a` and `b` fields hold Jz, az and bz.
pub type JzAzBz = Rectangular<tag::JzAzBz>;

impl HasSpace for JzAzBz {
    const SPACE: Space = Space::JzAzBz;
}

/// The model for a color specified in the JzAzBz color space with the
/// cylindrical polar form.
pub type JzCzHz = Polar<tag::JzAzBz>;

impl HasSpace for JzCzHz {
    const SPACE: Space = Space::JzCzHz;
}

#[allow(clippy::excessive_precision)]
const D0: Component = 1.6295499532821566e-11;

const N: Component = 0.1593017578125;
const P: Component = 134.034375;
const C1: Component = 0.8359375;
const C2: Component = 18.8515625;
const C3: Component = 18.6875;

#[rustfmt::skip]
static XYZ_TO_LMS: Transform = matrix([
    [0.674207838, 0.382799340, -0.047570458],
    [0.149284160, 0.739628340,  0.083327300],
    [0.070941080, 0.174768000,  0.670970020],
]);

#[rustfmt::skip]
static LMS_TO_IAB: Transform = matrix([
    [0.5,       0.5,       0.0],
    [3.524000, -4.066708,  0.542708],
    [0.199076,  1.096799, -1.295875],
]);

static LMS_TO_XYZ: LazyLock<Transform> = LazyLock::new(|| {
    XYZ_TO_LMS
        .inverse()
        .expect("JzAzBz cone response matrix is invertible")
});

static IAB_TO_LMS: LazyLock<Transform> = LazyLock::new(|| {
    LMS_TO_IAB
        .inverse()
        .expect("JzAzBz opponent matrix is invertible")
});

/// Perceptual quantizer with the JzAzBz exponent. Values without a real
/// result map to 0.
fn pq(x: Component) -> Component {
    let xx = (x * 1.0e-4).powf(N);
    let v = ((C1 + C2 * xx) / (1.0 + C3 * xx)).powf(P);
    if v.is_nan() {
        0.0
    } else {
        v
    }
}

fn pq_inverse(x: Component) -> Component {
    let xx = x.powf(1.0 / P);
    let v = 1.0e4 * ((C1 - xx) / (C3 * xx - C2)).powf(1.0 / N);
    if v.is_nan() {
        0.0
    } else {
        v
    }
}

impl Connect for JzAzBz {
    type White = D65;

    fn to_xyz(&self) -> Xyz<D65> {
        let jz = self.lightness + D0;
        let iz = jz / (0.44 + 0.56 * jz);

        let lms = transform(&IAB_TO_LMS, Components(iz, self.a, self.b)).map(pq_inverse);
        transform(&LMS_TO_XYZ, lms).into()
    }

    fn from_xyz(xyz: &Xyz<D65>) -> Self {
        let lms = transform(&XYZ_TO_LMS, xyz.to_components()).map(pq);
        let Components(iz, a, b) = transform(&LMS_TO_IAB, lms);
        JzAzBz::new((0.44 * iz) / (1.0 - 0.56 * iz) - D0, a, b)
    }
}
