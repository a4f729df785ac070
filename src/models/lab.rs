//! Models for rectangular and polar coordinate systems shared by the
//! opponent color spaces (CIE-Lab, CIE-Luv, Oklab and JzAzBz), and the
//! CIE-Lab model itself.

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::{cbrt, from_polar, to_polar},
    models::{
        xyz::{Reference, Xyz, D50},
        Connect,
    },
};

/// Identifies tags of opponent color spaces: one lightness axis and two
/// chromatic axes.
pub trait OpponentSpace: Clone + std::fmt::Debug {}

pub mod tag {
    //! Tags for the opponent color spaces.

    use super::OpponentSpace;

    /// CIE-Lab.
    #[derive(Clone, Debug)]
    pub struct Lab;
    impl OpponentSpace for Lab {}

    /// CIE-Luv.
    #[derive(Clone, Debug)]
    pub struct Luv;
    impl OpponentSpace for Luv {}

    /// Oklab.
    #[derive(Clone, Debug)]
    pub struct Oklab;
    impl OpponentSpace for Oklab {}

    /// JzAzBz.
    #[derive(Clone, Debug)]
    pub struct JzAzBz;
    impl OpponentSpace for JzAzBz {}
}

chromata_macros::gen_model! {
    /// The model for a color specified in the rectangular orthogonal form.
    pub struct Rectangular<S: OpponentSpace> {
        /// The lightness component.
        pub lightness: Component,
        /// The first opponent axis (a, u or az).
        pub a: Component,
        /// The second opponent axis (b, v or bz).
        pub b: Component,
    }
}

impl<S: OpponentSpace> Rectangular<S> {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form. The hue is NaN (powerless) when the chroma is close to zero.
    pub fn to_polar(&self) -> Polar<S> {
        let (chroma, hue) = to_polar(self.a, self.b);
        Polar::new(self.lightness, chroma, hue)
    }
}

chromata_macros::gen_model! {
    /// The model for a color specified in the cylindrical polar form.
    pub struct Polar<S: OpponentSpace> {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component, in degrees.
        pub hue: Component,
    }
}

impl<S: OpponentSpace> Polar<S> {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form. A NaN hue is treated as 0.
    pub fn to_rectangular(&self) -> Rectangular<S> {
        let (a, b) = from_polar(self.chroma, self.hue);
        Rectangular::new(self.lightness, a, b)
    }
}

impl<S: OpponentSpace> Connect for Polar<S>
where
    Rectangular<S>: Connect,
{
    type White = <Rectangular<S> as Connect>::White;

    fn to_xyz(&self) -> Xyz<Self::White> {
        self.to_rectangular().to_xyz()
    }

    fn from_xyz(xyz: &Xyz<Self::White>) -> Self {
        Rectangular::<S>::from_xyz(xyz).to_polar()
    }
}

/// The model for a color specified in the CIE-Lab color space with the
/// rectangular orthogonal form.
pub type Lab = Rectangular<tag::Lab>;

impl HasSpace for Lab {
    const SPACE: Space = Space::Lab;
}

/// The model for a color specified in the CIE-Lab color space with the
/// cylindrical polar form.
pub type Lch = Polar<tag::Lab>;

impl HasSpace for Lch {
    const SPACE: Space = Space::Lch;
}

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

impl Connect for Lab {
    type White = D50;

    fn to_xyz(&self) -> Xyz<D50> {
        let f1 = (self.lightness + 16.0) / 116.0;
        let f0 = f1 + self.a / 500.0;
        let f2 = f1 - self.b / 200.0;

        let inverse_f = |f: Component| {
            let cubed = f * f * f;
            if cubed > EPSILON {
                cubed
            } else {
                (116.0 * f - 16.0) / KAPPA
            }
        };

        let y = if self.lightness > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            self.lightness / KAPPA
        };

        let Components(wx, wy, wz) = D50::WHITE_POINT.xyz();
        Xyz::new(inverse_f(f0) * wx, y * wy, inverse_f(f2) * wz)
    }

    fn from_xyz(xyz: &Xyz<D50>) -> Self {
        let Components(wx, wy, wz) = D50::WHITE_POINT.xyz();
        let relative = Components(xyz.x / wx, xyz.y / wy, xyz.z / wz);

        let Components(f0, f1, f2) = relative.map(|v| {
            if v > EPSILON {
                cbrt(v)
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        Lab::new(116.0 * f1 - 16.0, 500.0 * (f0 - f1), 200.0 * (f1 - f2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, models::xyz::XyzD50};

    #[test]
    fn converting_to_polar_should_set_hue_to_missing_for_small_a_b_values() {
        let lab = Lab::new(50.0, 0.0, 0.0);
        let polar = lab.to_polar();

        assert!(polar.hue.is_nan());
        assert_eq!(polar.chroma, 0.0);
    }

    #[test]
    fn polar_form() {
        let lch = Lab::new(56.629300, 39.237080, 57.553769).to_polar();
        assert_component_eq!(lch.chroma, 69.656190, 1.0e-4);
        assert_component_eq!(lch.hue, 55.715927, 1.0e-4);

        let lab = lch.to_rectangular();
        assert_component_eq!(lab.a, 39.237080, 1.0e-9);
        assert_component_eq!(lab.b, 57.553769, 1.0e-9);
    }

    #[test]
    fn white_has_full_lightness() {
        let lab = Lab::from_xyz(&XyzD50::from(D50::WHITE_POINT.xyz()));
        assert_component_eq!(lab.lightness, 100.0, 1.0e-9);
        assert_component_eq!(lab.a, 0.0, 1.0e-9);
        assert_component_eq!(lab.b, 0.0, 1.0e-9);
    }

    #[test]
    fn xyz_round_trip() {
        for (x, y, z) in [(0.337301, 0.245449, 0.031959), (0.001, 0.002, 0.003)] {
            let lab = Lab::from_xyz(&XyzD50::new(x, y, z));
            let back = lab.to_xyz();
            assert_component_eq!(back.x, x, 1.0e-9);
            assert_component_eq!(back.y, y, 1.0e-9);
            assert_component_eq!(back.z, z, 1.0e-9);
        }
    }

    #[test]
    fn lch_connects_through_lab() {
        let xyz = XyzD50::new(0.337301, 0.245449, 0.031959);
        let lch = Lch::from_xyz(&xyz);
        assert_component_eq!(lch.lightness, 56.629300, 1.0e-4);
        assert_component_eq!(lch.chroma, 69.656190, 1.0e-3);
        assert_component_eq!(lch.hue, 55.715927, 1.0e-3);
    }
}
