//! Model a color with the CMYK notation, using the naive device independent
//! formulas against sRGB.

use crate::{
    color::{Component, HasSpace, Space},
    models::{
        rgb::Srgb,
        xyz::{Xyz, D65},
        Connect,
    },
};

chromata_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black) inks.
    pub struct Cmyk {
        /// The cyan component of the color.
        pub cyan: Component,
        /// The magenta component of the color.
        pub magenta: Component,
        /// The yellow component of the color.
        pub yellow: Component,
        /// The key (black) component of the color.
        pub key: Component,
    }
}

impl HasSpace for Cmyk {
    const SPACE: Space = Space::Cmyk;
}

impl Cmyk {
    /// Convert this color to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        let white = 1.0 - self.key;
        Srgb::new(
            (1.0 - self.cyan) * white,
            (1.0 - self.magenta) * white,
            (1.0 - self.yellow) * white,
        )
    }
}

impl Srgb {
    /// Convert a color in the sRGB color space to CMYK. Black is always
    /// carried entirely by the key component.
    pub fn to_cmyk(&self) -> Cmyk {
        let key = 1.0 - self.red.max(self.green).max(self.blue);
        if key >= 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 1.0);
        }

        let ink = |v: Component| (1.0 - v - key) / (1.0 - key);
        Cmyk::new(ink(self.red), ink(self.green), ink(self.blue), key)
    }
}

impl Connect for Cmyk {
    type White = D65;

    fn to_xyz(&self) -> Xyz<D65> {
        self.to_srgb().to_xyz()
    }

    fn from_xyz(xyz: &Xyz<D65>) -> Self {
        Srgb::from_xyz(xyz).to_cmyk()
    }
}
