//! The registry of supported color spaces and their descriptors.

use std::{fmt, str::FromStr};

use crate::{color::Component, error::Error, white_point::WhitePoint};

/// Every color space/model supported by the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Space {
    /// The sRGB color space.
    /// <https://drafts.csswg.org/css-color-4/#numeric-srgb>
    Srgb = 0,
    /// The sRGB color space with no gamma encoding.
    /// <https://drafts.csswg.org/css-color-4/#predefined-sRGB-linear>
    SrgbLinear = 1,
    /// display-p3
    DisplayP3 = 2,
    /// a98-rgb
    A98Rgb = 3,
    /// prophoto-rgb
    ProPhotoRgb = 4,
    /// rec2020
    Rec2020 = 5,
    /// ACES2065-1, linear with the AP0 primaries.
    Aces2065 = 6,
    /// ACEScg, linear with the AP1 primaries.
    AcesCg = 7,
    /// The HSL (hue, saturation, lightness) notation of sRGB.
    /// <https://drafts.csswg.org/css-color-4/#the-hsl-notation>
    Hsl = 8,
    /// The HSV (hue, saturation, value) notation of sRGB.
    Hsv = 9,
    /// The HWB (hue, whiteness, blackness) notation of sRGB.
    /// <https://drafts.csswg.org/css-color-4/#the-hwb-notation>
    Hwb = 10,
    /// Device CMYK, derived from sRGB without a color profile.
    Cmyk = 11,
    /// CIE Lab
    Lab = 12,
    /// CIE LCH, the polar form of CIE Lab.
    Lch = 13,
    /// CIE Luv
    Luv = 14,
    /// CIE LCHuv, the polar form of CIE Luv.
    LchUv = 15,
    /// Oklab
    Oklab = 16,
    /// Oklch
    Oklch = 17,
    /// JzAzBz
    JzAzBz = 18,
    /// JzCzHz, the polar form of JzAzBz.
    JzCzHz = 19,
    /// ICtCp as defined by ITU-R BT.2100.
    ICtCp = 20,
    /// xyz-d50
    XyzD50 = 21,
    /// xyz-d65
    XyzD65 = 22,
    /// ITU-R BT.709, the primaries of sRGB with the video transfer function.
    Bt709 = 23,
    /// DCI-P3, the digital cinema projector space.
    DciP3 = 24,
    /// ACEScc, a logarithmic encoding of ACEScg for color grading.
    AcesCc = 25,
    /// ACEScct, ACEScc with a linear toe near black.
    AcesCct = 26,
    /// CIE xyY, the chromaticity and luminance of xyz-d65.
    XyY = 27,
    /// HSLuv, the CIE LCHuv chroma scaled to the edge of the sRGB gamut.
    /// <https://www.hsluv.org>
    Hsluv = 28,
    /// HPLuv, the pastel variant of HSLuv.
    Hpluv = 29,
}

/// Implemented by typed models to name the space they belong to.
pub trait HasSpace {
    /// The space of the model.
    const SPACE: Space;
}

/// Describes one component of a color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComponentInfo {
    /// Short name of the component.
    pub name: &'static str,
    /// Lower bound of the component's nominal range.
    pub min: Component,
    /// Upper bound of the component's nominal range.
    pub max: Component,
    /// True for angular components that wrap around at 360 degrees.
    pub circular: bool,
}

impl ComponentInfo {
    const fn linear(name: &'static str, min: Component, max: Component) -> Self {
        Self {
            name,
            min,
            max,
            circular: false,
        }
    }

    const fn hue() -> Self {
        Self {
            name: "h",
            min: 0.0,
            max: 360.0,
            circular: true,
        }
    }

    /// Whether `value` is inside the range of this component. Circular
    /// components accept any value.
    pub fn contains(&self, value: Component) -> bool {
        self.circular || (value >= self.min && value <= self.max)
    }
}

/// Static metadata for a color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Descriptor {
    /// The space described.
    pub space: Space,
    /// Canonical lower case name, as used by CSS where CSS defines one.
    pub name: &'static str,
    /// The components in declared order.
    pub components: &'static [ComponentInfo],
    /// The reference white the space is defined relative to. Spaces derived
    /// from sRGB report the sRGB white.
    pub white_point: WhitePoint,
    /// Spaces bounded by a physical device gamut.
    pub bounded: bool,
}

impl Descriptor {
    /// Index of the first circular component, if any.
    pub fn hue_index(&self) -> Option<usize> {
        self.components.iter().position(|c| c.circular)
    }
}

const RGB: [ComponentInfo; 3] = [
    ComponentInfo::linear("r", 0.0, 1.0),
    ComponentInfo::linear("g", 0.0, 1.0),
    ComponentInfo::linear("b", 0.0, 1.0),
];

const HSL: [ComponentInfo; 3] = [
    ComponentInfo::hue(),
    ComponentInfo::linear("s", 0.0, 1.0),
    ComponentInfo::linear("l", 0.0, 1.0),
];

const HSV: [ComponentInfo; 3] = [
    ComponentInfo::hue(),
    ComponentInfo::linear("s", 0.0, 1.0),
    ComponentInfo::linear("v", 0.0, 1.0),
];

const HWB: [ComponentInfo; 3] = [
    ComponentInfo::hue(),
    ComponentInfo::linear("w", 0.0, 1.0),
    ComponentInfo::linear("b", 0.0, 1.0),
];

const CMYK: [ComponentInfo; 4] = [
    ComponentInfo::linear("c", 0.0, 1.0),
    ComponentInfo::linear("m", 0.0, 1.0),
    ComponentInfo::linear("y", 0.0, 1.0),
    ComponentInfo::linear("k", 0.0, 1.0),
];

const LAB: [ComponentInfo; 3] = [
    ComponentInfo::linear("l", 0.0, 100.0),
    ComponentInfo::linear("a", -125.0, 125.0),
    ComponentInfo::linear("b", -125.0, 125.0),
];

const LCH: [ComponentInfo; 3] = [
    ComponentInfo::linear("l", 0.0, 100.0),
    ComponentInfo::linear("c", 0.0, 150.0),
    ComponentInfo::hue(),
];

const LUV: [ComponentInfo; 3] = [
    ComponentInfo::linear("l", 0.0, 100.0),
    ComponentInfo::linear("u", -100.0, 100.0),
    ComponentInfo::linear("v", -100.0, 100.0),
];

const LCH_UV: [ComponentInfo; 3] = [
    ComponentInfo::linear("l", 0.0, 100.0),
    ComponentInfo::linear("c", 0.0, 150.0),
    ComponentInfo::hue(),
];

const OKLAB: [ComponentInfo; 3] = [
    ComponentInfo::linear("l", 0.0, 1.0),
    ComponentInfo::linear("a", -0.4, 0.4),
    ComponentInfo::linear("b", -0.4, 0.4),
];

const OKLCH: [ComponentInfo; 3] = [
    ComponentInfo::linear("l", 0.0, 1.0),
    ComponentInfo::linear("c", 0.0, 0.4),
    ComponentInfo::hue(),
];

const JZAZBZ: [ComponentInfo; 3] = [
    ComponentInfo::linear("jz", 0.0, 1.0),
    ComponentInfo::linear("az", -1.0, 1.0),
    ComponentInfo::linear("bz", -1.0, 1.0),
];

const JZCZHZ: [ComponentInfo; 3] = [
    ComponentInfo::linear("jz", 0.0, 1.0),
    ComponentInfo::linear("cz", 0.0, 1.0),
    ComponentInfo::hue(),
];

const ICTCP: [ComponentInfo; 3] = [
    ComponentInfo::linear("i", 0.0, 1.0),
    ComponentInfo::linear("ct", -0.5, 0.5),
    ComponentInfo::linear("cp", -0.5, 0.5),
];

// Bounded by the reference white, which no object color exceeds.
#[allow(clippy::excessive_precision)]
const XYZ_D50: [ComponentInfo; 3] = [
    ComponentInfo::linear("x", 0.0, 0.9642956764295677),
    ComponentInfo::linear("y", 0.0, 1.0),
    ComponentInfo::linear("z", 0.0, 0.8251046025104602),
];

#[allow(clippy::excessive_precision)]
const XYZ_D65: [ComponentInfo; 3] = [
    ComponentInfo::linear("x", 0.0, 0.9504559270516716),
    ComponentInfo::linear("y", 0.0, 1.0),
    ComponentInfo::linear("z", 0.0, 1.0890577507598784),
];

const XYY: [ComponentInfo; 3] = [
    ComponentInfo::linear("x", 0.0, 1.0),
    ComponentInfo::linear("y", 0.0, 1.0),
    ComponentInfo::linear("Y", 0.0, 1.0),
];

const HSLUV: [ComponentInfo; 3] = [
    ComponentInfo::hue(),
    ComponentInfo::linear("s", 0.0, 100.0),
    ComponentInfo::linear("l", 0.0, 100.0),
];

const HPLUV: [ComponentInfo; 3] = [
    ComponentInfo::hue(),
    ComponentInfo::linear("p", 0.0, 100.0),
    ComponentInfo::linear("l", 0.0, 100.0),
];

const fn descriptor(
    space: Space,
    name: &'static str,
    components: &'static [ComponentInfo],
    white_point: WhitePoint,
    bounded: bool,
) -> Descriptor {
    Descriptor {
        space,
        name,
        components,
        white_point,
        bounded,
    }
}

/// Indexed by the discriminant of [`Space`].
static DESCRIPTORS: [Descriptor; Space::ALL.len()] = {
    use Space as S;
    use WhitePoint::{Aces, Dci, D50, D65};

    [
        descriptor(S::Srgb, "srgb", &RGB, D65, true),
        descriptor(S::SrgbLinear, "srgb-linear", &RGB, D65, true),
        descriptor(S::DisplayP3, "display-p3", &RGB, D65, true),
        descriptor(S::A98Rgb, "a98-rgb", &RGB, D65, true),
        descriptor(S::ProPhotoRgb, "prophoto-rgb", &RGB, D50, true),
        descriptor(S::Rec2020, "rec2020", &RGB, D65, true),
        descriptor(S::Aces2065, "aces2065-1", &RGB, Aces, true),
        descriptor(S::AcesCg, "acescg", &RGB, Aces, true),
        descriptor(S::Hsl, "hsl", &HSL, D65, true),
        descriptor(S::Hsv, "hsv", &HSV, D65, true),
        descriptor(S::Hwb, "hwb", &HWB, D65, true),
        descriptor(S::Cmyk, "cmyk", &CMYK, D65, true),
        descriptor(S::Lab, "lab", &LAB, D50, false),
        descriptor(S::Lch, "lch", &LCH, D50, false),
        descriptor(S::Luv, "luv", &LUV, D65, false),
        descriptor(S::LchUv, "lchuv", &LCH_UV, D65, false),
        descriptor(S::Oklab, "oklab", &OKLAB, D65, false),
        descriptor(S::Oklch, "oklch", &OKLCH, D65, false),
        descriptor(S::JzAzBz, "jzazbz", &JZAZBZ, D65, false),
        descriptor(S::JzCzHz, "jzczhz", &JZCZHZ, D65, false),
        descriptor(S::ICtCp, "ictcp", &ICTCP, D65, false),
        descriptor(S::XyzD50, "xyz-d50", &XYZ_D50, D50, false),
        descriptor(S::XyzD65, "xyz-d65", &XYZ_D65, D65, false),
        descriptor(S::Bt709, "bt709", &RGB, D65, true),
        descriptor(S::DciP3, "dci-p3", &RGB, Dci, true),
        descriptor(S::AcesCc, "acescc", &RGB, Aces, true),
        descriptor(S::AcesCct, "acescct", &RGB, Aces, true),
        descriptor(S::XyY, "xyy", &XYY, D65, false),
        descriptor(S::Hsluv, "hsluv", &HSLUV, D65, true),
        descriptor(S::Hpluv, "hpluv", &HPLUV, D65, true),
    ]
};

impl Space {
    /// Every registered space, in discriminant order.
    pub const ALL: [Space; 30] = [
        Self::Srgb,
        Self::SrgbLinear,
        Self::DisplayP3,
        Self::A98Rgb,
        Self::ProPhotoRgb,
        Self::Rec2020,
        Self::Aces2065,
        Self::AcesCg,
        Self::Hsl,
        Self::Hsv,
        Self::Hwb,
        Self::Cmyk,
        Self::Lab,
        Self::Lch,
        Self::Luv,
        Self::LchUv,
        Self::Oklab,
        Self::Oklch,
        Self::JzAzBz,
        Self::JzCzHz,
        Self::ICtCp,
        Self::XyzD50,
        Self::XyzD65,
        Self::Bt709,
        Self::DciP3,
        Self::AcesCc,
        Self::AcesCct,
        Self::XyY,
        Self::Hsluv,
        Self::Hpluv,
    ];

    /// Static metadata for this space.
    pub fn descriptor(self) -> &'static Descriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Canonical name of the space.
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Number of color components, excluding alpha.
    pub fn component_count(self) -> usize {
        self.descriptor().components.len()
    }

    /// The reference white the components are relative to.
    pub fn white_point(self) -> WhitePoint {
        self.descriptor().white_point
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = Error;

    /// Look up a space by its canonical name, ignoring case. `xyz` is
    /// accepted for `xyz-d65` as in CSS.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("xyz") {
            return Ok(Space::XyzD65);
        }

        Space::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownModel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_are_indexed_by_discriminant() {
        for space in Space::ALL {
            assert_eq!(space.descriptor().space, space);
        }
    }

    #[test]
    fn names_round_trip() {
        for space in Space::ALL {
            assert_eq!(space.to_string().parse::<Space>(), Ok(space));
        }
        assert_eq!("Display-P3".parse::<Space>(), Ok(Space::DisplayP3));
        assert_eq!("xyz".parse::<Space>(), Ok(Space::XyzD65));
        assert_eq!("HSLuv".parse::<Space>(), Ok(Space::Hsluv));
        assert_eq!("DCI-P3".parse::<Space>(), Ok(Space::DciP3));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "cielab".parse::<Space>(),
            Err(Error::UnknownModel("cielab".to_string()))
        );
    }

    #[test]
    fn component_counts() {
        assert_eq!(Space::Cmyk.component_count(), 4);
        for space in Space::ALL.into_iter().filter(|s| *s != Space::Cmyk) {
            assert_eq!(space.component_count(), 3, "{space}");
        }
    }

    #[test]
    fn hue_components_are_circular() {
        assert_eq!(Space::Hsl.descriptor().hue_index(), Some(0));
        assert_eq!(Space::Lch.descriptor().hue_index(), Some(2));
        assert_eq!(Space::Oklch.descriptor().hue_index(), Some(2));
        assert_eq!(Space::Lab.descriptor().hue_index(), None);
        assert_eq!(Space::Hsluv.descriptor().hue_index(), Some(0));
        assert_eq!(Space::XyY.descriptor().hue_index(), None);
        assert!(Space::Hwb.descriptor().components[0].contains(-720.0));
    }
}
