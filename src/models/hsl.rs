//! Model colors with the HSL, HSV and HWB notations in the sRGB color space.
//!
//! All three connect to the rest of the models through sRGB. Achromatic
//! colors have a powerless (NaN) hue.

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::{almost_zero, normalize, wrap_degrees},
    models::{
        rgb::Srgb,
        xyz::{Xyz, D65},
        Connect,
    },
};

chromata_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The lightness component of the color.
        pub lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}

chromata_macros::gen_model! {
    /// A color specified with the HSV (HSB) notation in the sRGB color space.
    pub struct Hsv {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The value (brightness) component of the color.
        pub value: Component,
    }
}

impl HasSpace for Hsv {
    const SPACE: Space = Space::Hsv;
}

chromata_macros::gen_model! {
    /// A color specified with the HWB notation in the sRGB color space.
    pub struct Hwb {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The whiteness component of the color.
        pub whiteness: Component,
        /// The blackness component of the color.
        pub blackness: Component,
    }
}

impl HasSpace for Hwb {
    const SPACE: Space = Space::Hwb;
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn to_hsl(&self) -> Hsl {
        let (hue, min, max) = hue_with_min_max(&self.to_components());

        let lightness = (min + max) / 2.0;
        let saturation = if almost_zero(max - min)
            || almost_zero(lightness)
            || almost_zero(1.0 - lightness)
        {
            0.0
        } else {
            (max - lightness) / lightness.min(1.0 - lightness)
        };

        Hsl::new(hue, saturation, lightness)
    }

    /// Convert a color specified in the sRGB color space to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let (hue, min, max) = hue_with_min_max(&self.to_components());

        let saturation = if almost_zero(max) {
            0.0
        } else {
            (max - min) / max
        };

        Hsv::new(hue, saturation, max)
    }

    /// Convert a color specified in the sRGB color space to the HWB notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hwb>
    pub fn to_hwb(&self) -> Hwb {
        let (hue, min, max) = hue_with_min_max(&self.to_components());
        Hwb::new(hue, min, 1.0 - max)
    }
}

/// The hue of RGB components along with the smallest and largest component.
/// The hue is NaN if all components are equal.
fn hue_with_min_max(from: &Components) -> (Component, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;

    if delta == 0.0 {
        return (Component::NAN, min, max);
    }

    let sector = if max == red {
        (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
    } else if max == green {
        (blue - red) / delta + 2.0
    } else {
        (red - green) / delta + 4.0
    };

    (sector * 60.0, min, max)
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn to_srgb(&self) -> Srgb {
        let Components(hue, saturation, lightness) = self.to_components().map(normalize);

        if saturation <= 0.0 {
            return Srgb::new(lightness, lightness, lightness);
        }

        let hue = wrap_degrees(hue);
        let a = saturation * lightness.min(1.0 - lightness);
        let f = |n: Component| {
            let k = (n + hue / 30.0) % 12.0;
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        Srgb::new(f(0.0), f(8.0), f(4.0))
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        let Components(hue, saturation, value) = self.to_components().map(normalize);

        if saturation <= 0.0 {
            return Srgb::new(value, value, value);
        }

        let sector = wrap_degrees(hue) / 60.0;
        let f = |n: Component| {
            let k = (n + sector) % 6.0;
            value - value * saturation * k.min(4.0 - k).min(1.0).max(0.0)
        };

        Srgb::new(f(5.0), f(3.0), f(1.0))
    }
}

impl Hwb {
    /// Convert this color from the HWB notation to the sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
    pub fn to_srgb(&self) -> Srgb {
        let Components(hue, whiteness, blackness) = self.to_components().map(normalize);

        if whiteness + blackness >= 1.0 {
            let gray = whiteness / (whiteness + blackness);
            return Srgb::new(gray, gray, gray);
        }

        let pure = Hsl::new(hue, 1.0, 0.5).to_srgb().to_components();
        pure.map(|v| v * (1.0 - whiteness - blackness) + whiteness)
            .into()
    }
}

macro_rules! connect_through_srgb {
    ($($model:ident => $to:ident),*) => {
        $(
            impl Connect for $model {
                type White = D65;

                fn to_xyz(&self) -> Xyz<D65> {
                    self.to_srgb().to_xyz()
                }

                fn from_xyz(xyz: &Xyz<D65>) -> Self {
                    Srgb::from_xyz(xyz).$to()
                }
            }
        )*
    };
}

connect_through_srgb!(Hsl => to_hsl, Hsv => to_hsv, Hwb => to_hwb);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, color::Flags, models::Model};

    #[test]
    fn nan_components_are_missing() {
        let c = Hsl::new(Component::NAN, Component::NAN, Component::NAN).to_color(None);
        assert_eq!(
            c.flags(),
            Flags::C0_IS_NONE | Flags::C1_IS_NONE | Flags::C2_IS_NONE | Flags::ALPHA_IS_NONE
        );
    }

    #[test]
    fn srgb_to_hsl() {
        let hsl = Srgb::new(0.46, 0.52, 0.28).to_hsl();
        assert_component_eq!(hsl.hue, 75.0);
        assert_component_eq!(hsl.saturation, 0.3);
        assert_component_eq!(hsl.lightness, 0.4);
    }

    #[test]
    fn grays_have_powerless_hue() {
        for v in [0.0, 0.5, 1.0] {
            let gray = Srgb::new(v, v, v);
            assert!(gray.to_hsl().hue.is_nan());
            assert!(gray.to_hsv().hue.is_nan());
            assert!(gray.to_hwb().hue.is_nan());
        }
    }

    #[test]
    fn hwb_to_srgb() {
        let srgb = Hwb::new(40.0, 0.3, 0.4).to_srgb();
        assert_component_eq!(srgb.red, 0.6);
        assert_component_eq!(srgb.green, 0.5);
        assert_component_eq!(srgb.blue, 0.3);
    }

    #[test]
    fn hwb_with_too_much_white_and_black_is_gray() {
        let srgb = Hwb::new(120.0, 0.6, 0.6).to_srgb();
        assert_component_eq!(srgb.red, 0.5);
        assert_component_eq!(srgb.green, 0.5);
        assert_component_eq!(srgb.blue, 0.5);
    }

    #[test]
    fn hsv_to_srgb() {
        let srgb = Hsv::new(90.0, 0.5, 0.75).to_srgb();
        assert_component_eq!(srgb.red, 0.5625);
        assert_component_eq!(srgb.green, 0.75);
        assert_component_eq!(srgb.blue, 0.375);
    }

    #[test]
    fn hsv_round_trip() {
        let srgb = Srgb::new(0.823529, 0.411765, 0.117647);
        let hsv = srgb.to_hsv();
        assert_component_eq!(hsv.hue, 25.0, 1.0e-4);
        assert_component_eq!(hsv.value, 0.823529);

        let back = hsv.to_srgb();
        assert_component_eq!(back.red, srgb.red, 1.0e-9);
        assert_component_eq!(back.green, srgb.green, 1.0e-9);
        assert_component_eq!(back.blue, srgb.blue, 1.0e-9);
    }

    #[test]
    fn connects_through_srgb() {
        let hsl = Hsl::new(25.0, 0.75, 0.470588);
        let xyz = hsl.to_xyz();
        assert_component_eq!(xyz.x, 0.318634);
        assert_component_eq!(xyz.y, 0.239006);
        assert_component_eq!(xyz.z, 0.041637);

        let hwb = Hwb::from_xyz(&xyz);
        assert_component_eq!(hwb.hue, 25.0, 1.0e-4);
        assert_component_eq!(hwb.whiteness, 0.117647);
        assert_component_eq!(hwb.blackness, 0.176471);
    }
}
