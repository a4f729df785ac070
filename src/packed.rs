//! Colors packed into a 32-bit integer, as used by most platform APIs.

use std::{fmt, str::FromStr};

use crate::{
    color::{Color, Component},
    error::{Error, Result},
    space::Space,
};

/// An sRGB color packed into a `u32` with 8 bits per channel, in ARGB order
/// (alpha in the most significant byte).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbInt(pub u32);

impl RgbInt {
    /// Pack the given channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Wrap an integer in ARGB order.
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Read an integer in RGBA order (alpha in the least significant byte).
    pub const fn from_rgba(rgba: u32) -> Self {
        Self(rgba.rotate_right(8))
    }

    /// The packed value in ARGB order.
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// The packed value in RGBA order.
    pub const fn to_rgba(self) -> u32 {
        self.0.rotate_left(8)
    }

    /// The red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The blue channel.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// The alpha channel.
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Unpack to an sRGB [`Color`].
    pub fn to_color(self) -> Color {
        let unit = |channel: u8| channel as Component / 255.0;
        Color::new(
            Space::Srgb,
            unit(self.red()),
            unit(self.green()),
            unit(self.blue()),
            unit(self.alpha()),
        )
    }

    /// Convert any color to sRGB and pack it. Channels are rounded and
    /// clamped to `0..=255`; missing components pack as 0 and a missing alpha
    /// as fully opaque.
    pub fn from_color(color: &Color) -> Self {
        let srgb = color.to_space(Space::Srgb);
        let byte = |value: Option<Component>| match value {
            Some(value) if !value.is_nan() => (value * 255.0).round().clamp(0.0, 255.0) as u8,
            _ => 0,
        };
        Self::new(
            byte(srgb.c0()),
            byte(srgb.c1()),
            byte(srgb.c2()),
            srgb.alpha().map_or(255, |alpha| byte(Some(alpha))),
        )
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when `with_alpha` is set.
    pub fn to_hex(self, with_alpha: bool) -> String {
        if with_alpha {
            format!("#{:08x}", self.to_rgba())
        } else {
            format!("#{:06x}", self.0 & 0x00ff_ffff)
        }
    }
}

impl From<RgbInt> for Color {
    fn from(value: RgbInt) -> Self {
        value.to_color()
    }
}

impl fmt::Display for RgbInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex(self.alpha() != u8::MAX))
    }
}

impl FromStr for RgbInt {
    type Err = Error;

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`. The `#` is optional.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidHex(s.to_string());

        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        let short = |index: usize| value(index..index + 1).map(|v| v * 0x11);

        match digits.len() {
            3 => Ok(Self::new(short(0)?, short(1)?, short(2)?, u8::MAX)),
            4 => Ok(Self::new(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Ok(Self::new(value(0..2)?, value(2..4)?, value(4..6)?, u8::MAX)),
            8 => Ok(Self::new(value(0..2)?, value(2..4)?, value(4..6)?, value(6..8)?)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_order() {
        let packed = RgbInt::new(1, 2, 3, 4);
        assert_eq!(packed.argb(), 0x04010203);
        assert_eq!(packed.to_rgba(), 0x01020304);
        assert_eq!(RgbInt::from_rgba(0x01020304), packed);
        assert_eq!(
            (packed.red(), packed.green(), packed.blue(), packed.alpha()),
            (1, 2, 3, 4)
        );
    }

    #[test]
    fn opaque_blue_round_trip() {
        let blue = RgbInt::from_argb(0xFF0000FF);
        let color = blue.to_color();
        assert_eq!(color.space(), Space::Srgb);
        assert_eq!(color.values(), &[0.0, 0.0, 1.0]);
        assert_eq!(color.alpha(), Some(1.0));

        assert_eq!(RgbInt::from_color(&color), blue);
    }

    #[test]
    fn from_color_in_other_space() {
        let color = Color::new(Space::Srgb, 0.2, 0.4, 0.6, 0.5).to_space(Space::Oklch);
        assert_eq!(RgbInt::from_color(&color), RgbInt::new(51, 102, 153, 128));
    }

    #[test]
    fn from_color_clamps_and_defaults() {
        let color = Color::new(Space::Srgb, 1.5, None, -0.2, None);
        assert_eq!(RgbInt::from_color(&color), RgbInt::new(255, 0, 0, 255));
    }

    #[test]
    fn parse_hex() {
        assert_eq!("#f00".parse::<RgbInt>(), Ok(RgbInt::new(255, 0, 0, 255)));
        assert_eq!("#f008".parse::<RgbInt>(), Ok(RgbInt::new(255, 0, 0, 0x88)));
        assert_eq!("#d2691e".parse::<RgbInt>(), Ok(RgbInt::new(210, 105, 30, 255)));
        assert_eq!("D2691E80".parse::<RgbInt>(), Ok(RgbInt::new(210, 105, 30, 128)));
    }

    #[test]
    fn parse_invalid_hex() {
        for input in ["", "#", "#12", "#12345", "#ggg", "#1234567", "#+12"] {
            assert_eq!(
                input.parse::<RgbInt>(),
                Err(Error::InvalidHex(input.to_string()))
            );
        }
    }

    #[test]
    fn format_hex() {
        let color = RgbInt::new(210, 105, 30, 255);
        assert_eq!(color.to_hex(false), "#d2691e");
        assert_eq!(color.to_hex(true), "#d2691eff");
        assert_eq!(color.to_string(), "#d2691e");
        assert_eq!(RgbInt::new(0, 0, 0, 0).to_string(), "#00000000");
    }
}
