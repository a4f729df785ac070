//! Model a color with CIE xyY coordinates, relative to D65.

use crate::{
    color::{Component, HasSpace, Space},
    models::{
        xyz::{Reference, Xyz, D65},
        Connect,
    },
};

chromata_macros::gen_model! {
    /// A color given by its CIE 1931 chromaticity and its luminance.
    pub struct XyY {
        /// The x chromaticity coordinate.
        pub x: Component,
        /// The y chromaticity coordinate.
        pub y: Component,
        /// The luminance, the same as Y in CIE-XYZ.
        pub luminance: Component,
    }
}

impl HasSpace for XyY {
    const SPACE: Space = Space::XyY;
}

impl Connect for XyY {
    type White = D65;

    fn to_xyz(&self) -> Xyz<D65> {
        if self.y == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }

        let scale = self.luminance / self.y;
        Xyz::new(
            self.x * scale,
            self.luminance,
            (1.0 - self.x - self.y) * scale,
        )
    }

    /// Black has no chromaticity and takes the chromaticity of the white.
    fn from_xyz(xyz: &Xyz<D65>) -> Self {
        let sum = xyz.x + xyz.y + xyz.z;
        if sum == 0.0 {
            let white = D65::WHITE_POINT.chromaticity();
            return XyY::new(white.x, white.y, 0.0);
        }

        XyY::new(xyz.x / sum, xyz.y / sum, xyz.y)
    }
}
