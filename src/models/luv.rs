//! Model a color in the CIE-Luv color space, relative to D65.

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::cbrt,
    models::{
        lab::{tag, Polar, Rectangular},
        xyz::{Reference, Xyz, D65},
        Connect,
    },
};

/// The model for a color specified in the CIE-Luv color space with the
/// rectangular orthogonal form. The `a` and `b` fields hold u and v.
pub type Luv = Rectangular<tag::Luv>;

impl HasSpace for Luv {
    const SPACE: Space = Space::Luv;
}

/// The model for a color specified in the CIE-Luv color space with the
/// cylindrical polar form.
pub type LchUv = Polar<tag::Luv>;

impl HasSpace for LchUv {
    const SPACE: Space = Space::LchUv;
}

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

/// The u'v' chromaticity of XYZ tristimulus values, or `None` for black.
fn uv_prime(Components(x, y, z): Components) -> Option<(Component, Component)> {
    let denominator = x + 15.0 * y + 3.0 * z;
    if denominator == 0.0 {
        return None;
    }
    Some((4.0 * x / denominator, 9.0 * y / denominator))
}

fn white_uv_prime() -> (Component, Component) {
    // The white point is never black.
    uv_prime(D65::WHITE_POINT.xyz()).unwrap_or_default()
}

impl Connect for Luv {
    type White = D65;

    fn to_xyz(&self) -> Xyz<D65> {
        let lightness = self.lightness;
        if lightness <= 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }

        let y = if lightness > KAPPA * EPSILON {
            let f = (lightness + 16.0) / 116.0;
            f * f * f
        } else {
            lightness / KAPPA
        } * D65::WHITE_POINT.xyz().1;

        let (uw, vw) = white_uv_prime();
        let u = self.a / (13.0 * lightness) + uw;
        let v = self.b / (13.0 * lightness) + vw;
        if v == 0.0 {
            return Xyz::new(0.0, y, 0.0);
        }

        let x = y * 9.0 * u / (4.0 * v);
        let z = y * (12.0 - 3.0 * u - 20.0 * v) / (4.0 * v);
        Xyz::new(x, y, z)
    }

    fn from_xyz(xyz: &Xyz<D65>) -> Self {
        let relative_y = xyz.y / D65::WHITE_POINT.xyz().1;
        let lightness = if relative_y > EPSILON {
            116.0 * cbrt(relative_y) - 16.0
        } else {
            KAPPA * relative_y
        };

        let Some((u, v)) = uv_prime(xyz.to_components()) else {
            return Luv::new(lightness, 0.0, 0.0);
        };

        let (uw, vw) = white_uv_prime();
        Luv::new(
            lightness,
            13.0 * lightness * (u - uw),
            13.0 * lightness * (v - vw),
        )
    }
}
