//! Model colors with the HSLuv and HPLuv notations of CIE LCHuv.
//! <https://www.hsluv.org/math/>
//!
//! Both scale the chroma of LCHuv against the edge of the sRGB gamut. HSLuv
//! uses the largest chroma for the lightness and hue, so every saturation up
//! to 100 is a valid sRGB color. HPLuv uses the largest chroma that is valid
//! for every hue at the lightness, which keeps the colors pastel.

use crate::{
    color::{Component, HasSpace, Space},
    math::normalize,
    models::{
        luv::LchUv,
        rgb::{space::Srgb, RgbSpace},
        xyz::{Xyz, D65},
        Connect,
    },
};

chromata_macros::gen_model! {
    /// A color specified with the HSLuv notation.
    pub struct Hsluv {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The saturation component of the color, in `[0, 100]`.
        pub saturation: Component,
        /// The lightness component of the color, in `[0, 100]`.
        pub lightness: Component,
    }
}

impl HasSpace for Hsluv {
    const SPACE: Space = Space::Hsluv;
}

chromata_macros::gen_model! {
    /// A color specified with the HPLuv notation.
    pub struct Hpluv {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The pastel saturation component of the color, in `[0, 100]`.
        pub saturation: Component,
        /// The lightness component of the color, in `[0, 100]`.
        pub lightness: Component,
    }
}

impl HasSpace for Hpluv {
    const SPACE: Space = Space::Hpluv;
}

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

/// Lightness above `WHITE` is white and below `BLACK` is black. Neither has
/// a saturation.
const WHITE: Component = 99.9999;
const BLACK: Component = 0.00001;

/// A line `y = slope * x + intercept` in the chroma plane of LCHuv.
#[derive(Clone, Copy, Debug, Default)]
struct Line {
    slope: Component,
    intercept: Component,
}

/// The six lines where one of the sRGB channels reaches 0 or 1 at the given
/// lightness. The gamut is the area they enclose around the pole.
fn gamut_bounds(lightness: Component) -> [Line; 6] {
    let sub1 = (lightness + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON {
        sub1
    } else {
        lightness / KAPPA
    };

    // One row of the XYZ to linear sRGB matrix per channel.
    let m = Srgb::from_xyz_matrix();
    let rows = [
        [m.m11, m.m21, m.m31],
        [m.m12, m.m22, m.m32],
        [m.m13, m.m23, m.m33],
    ];

    let mut lines = [Line::default(); 6];
    for (channel, [m1, m2, m3]) in rows.into_iter().enumerate() {
        for (bound, t) in [0.0, 1.0].into_iter().enumerate() {
            let top1 = (284_517.0 * m1 - 94_839.0 * m3) * sub2;
            let top2 = (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1) * lightness * sub2
                - 769_860.0 * t * lightness;
            let bottom = (632_260.0 * m3 - 126_452.0 * m2) * sub2 + 126_452.0 * t;

            lines[channel * 2 + bound] = Line {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }
    lines
}

/// The largest chroma inside sRGB for the lightness and hue.
fn max_chroma(lightness: Component, hue: Component) -> Component {
    let (sin, cos) = hue.to_radians().sin_cos();
    gamut_bounds(lightness)
        .into_iter()
        .map(|line| line.intercept / (sin - line.slope * cos))
        .filter(|length| *length >= 0.0)
        .fold(Component::MAX, Component::min)
}

/// The largest chroma inside sRGB for the lightness at any hue.
fn max_safe_chroma(lightness: Component) -> Component {
    gamut_bounds(lightness)
        .into_iter()
        .map(|Line { slope, intercept }| {
            // Distance from the pole to the closest point on the line.
            let x = intercept / (-1.0 / slope - slope);
            let y = intercept + x * slope;
            (x * x + y * y).sqrt()
        })
        .fold(Component::MAX, Component::min)
}

impl LchUv {
    /// Convert this color to the HSLuv notation.
    pub fn to_hsluv(&self) -> Hsluv {
        let (lightness, chroma, hue) = (self.lightness, self.chroma, self.hue);

        if lightness > WHITE {
            return Hsluv::new(hue, 0.0, 100.0);
        }
        if lightness < BLACK {
            return Hsluv::new(hue, 0.0, 0.0);
        }

        let max = max_chroma(lightness, normalize(hue));
        Hsluv::new(hue, chroma / max * 100.0, lightness)
    }

    /// Convert this color to the HPLuv notation.
    pub fn to_hpluv(&self) -> Hpluv {
        let (lightness, chroma, hue) = (self.lightness, self.chroma, self.hue);

        if lightness > WHITE {
            return Hpluv::new(hue, 0.0, 100.0);
        }
        if lightness < BLACK {
            return Hpluv::new(hue, 0.0, 0.0);
        }

        Hpluv::new(hue, chroma / max_safe_chroma(lightness) * 100.0, lightness)
    }
}

impl Hsluv {
    /// Convert this color from the HSLuv notation to CIE LCHuv.
    pub fn to_lchuv(&self) -> LchUv {
        let (hue, saturation, lightness) = (self.hue, self.saturation, self.lightness);

        if lightness > WHITE {
            return LchUv::new(100.0, 0.0, hue);
        }
        if lightness < BLACK {
            return LchUv::new(0.0, 0.0, hue);
        }

        let max = max_chroma(lightness, normalize(hue));
        LchUv::new(lightness, max / 100.0 * saturation, hue)
    }
}

impl Hpluv {
    /// Convert this color from the HPLuv notation to CIE LCHuv.
    pub fn to_lchuv(&self) -> LchUv {
        let (hue, saturation, lightness) = (self.hue, self.saturation, self.lightness);

        if lightness > WHITE {
            return LchUv::new(100.0, 0.0, hue);
        }
        if lightness < BLACK {
            return LchUv::new(0.0, 0.0, hue);
        }

        LchUv::new(
            lightness,
            max_safe_chroma(lightness) / 100.0 * saturation,
            hue,
        )
    }
}

macro_rules! connect_through_lchuv {
    ($($model:ident => $to:ident),*) => {
        $(
            impl Connect for $model {
                type White = D65;

                fn to_xyz(&self) -> Xyz<D65> {
                    self.to_lchuv().to_xyz()
                }

                fn from_xyz(xyz: &Xyz<D65>) -> Self {
                    LchUv::from_xyz(xyz).$to()
                }
            }
        )*
    };
}

connect_through_lchuv!(Hsluv => to_hsluv, Hpluv => to_hpluv);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, models::Srgb};

    #[test]
    fn lchuv_to_hsluv() {
        let cases = [
            ((0.18, 0.18, 64.8), 86.24411410293375),
            ((0.40, 0.50, 216.0), 138.871331171819),
            ((1.00, 1.00, 0.0), 36.33223336102162),
        ];

        for ((l, c, h), saturation) in cases {
            let hsluv = LchUv::new(l, c, h).to_hsluv();
            assert_component_eq!(hsluv.hue, h, 1.0e-12);
            assert_component_eq!(hsluv.saturation, saturation, 1.0e-6);
            assert_component_eq!(hsluv.lightness, l, 1.0e-12);
        }
    }

    #[test]
    fn lchuv_to_hpluv() {
        let cases = [
            ((0.18, 0.18, 64.8), 126.8934854430029),
            ((0.40, 0.50, 216.0), 158.6168568037536),
            ((1.00, 1.00, 0.0), 126.89348544300287),
        ];

        for ((l, c, h), saturation) in cases {
            let hpluv = LchUv::new(l, c, h).to_hpluv();
            assert_component_eq!(hpluv.hue, h, 1.0e-12);
            assert_component_eq!(hpluv.saturation, saturation, 1.0e-6);
            assert_component_eq!(hpluv.lightness, l, 1.0e-12);
        }
    }

    #[test]
    fn black_and_white_have_no_saturation() {
        let black = LchUv::new(0.0, 0.0, Component::NAN).to_hsluv();
        assert!(black.hue.is_nan());
        assert_eq!((black.saturation, black.lightness), (0.0, 0.0));

        let white = LchUv::new(100.0, 0.01, 30.0).to_hpluv();
        assert_eq!((white.saturation, white.lightness), (0.0, 100.0));
    }

    #[test]
    fn full_saturation_is_on_the_srgb_gamut() {
        for hue in (0..360).step_by(15) {
            let srgb = Srgb::from_xyz(&Hsluv::new(hue as Component, 100.0, 60.0).to_xyz());
            let channels = [srgb.red, srgb.green, srgb.blue];
            assert!(channels.iter().all(|c| (-1.0e-9..=1.0 + 1.0e-9).contains(c)));
            assert!(channels.iter().any(|c| *c < 1.0e-9 || *c > 1.0 - 1.0e-9));
        }
    }

    #[test]
    fn round_trip() {
        let hsluv = Hsluv::new(0.1, 0.011, 0.012);
        let back = Hsluv::from_xyz(&hsluv.to_xyz());
        assert_component_eq!(back.hue, 0.1, 1.0e-6);
        assert_component_eq!(back.saturation, 0.011, 1.0e-6);
        assert_component_eq!(back.lightness, 0.012, 1.0e-9);

        let hpluv = Hpluv::new(250.0, 80.0, 40.0);
        let back = Hpluv::from_xyz(&hpluv.to_xyz());
        assert_component_eq!(back.hue, 250.0, 1.0e-9);
        assert_component_eq!(back.saturation, 80.0, 1.0e-9);
        assert_component_eq!(back.lightness, 40.0, 1.0e-9);
    }
}
