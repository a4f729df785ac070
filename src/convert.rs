//! Conversion of a [`Color`] between any two color spaces.
//!
//! Every model connects to CIE-XYZ relative to its own reference white (see
//! [`Connect`]). Converting goes through that connection, adapting between
//! the two whites only when they differ. Colors that share a base (the sRGB
//! notations, the two forms of an opponent space, the encodings of an RGB
//! space) are converted directly.

use crate::{
    color::{Color, Component, HasSpace, Space},
    models::{
        self,
        encoding::{GammaEncoded, LinearLight},
        Connect, Model, OpponentSpace, Polar, Rectangular, Reference, Rgb, RgbSpace,
        TransferFunction, Xyz,
    },
    white_point,
};

/// Run `$body` with `$m` naming the model type of `$space`.
macro_rules! with_model {
    ($space:expr, $m:ident => $body:expr) => {
        match $space {
            Space::Srgb => { type $m = models::Srgb; $body }
            Space::SrgbLinear => { type $m = models::SrgbLinear; $body }
            Space::DisplayP3 => { type $m = models::DisplayP3; $body }
            Space::A98Rgb => { type $m = models::A98Rgb; $body }
            Space::ProPhotoRgb => { type $m = models::ProPhotoRgb; $body }
            Space::Rec2020 => { type $m = models::Rec2020; $body }
            Space::Aces2065 => { type $m = models::Aces2065; $body }
            Space::AcesCg => { type $m = models::AcesCg; $body }
            Space::Hsl => { type $m = models::Hsl; $body }
            Space::Hsv => { type $m = models::Hsv; $body }
            Space::Hwb => { type $m = models::Hwb; $body }
            Space::Cmyk => { type $m = models::Cmyk; $body }
            Space::Lab => { type $m = models::Lab; $body }
            Space::Lch => { type $m = models::Lch; $body }
            Space::Luv => { type $m = models::Luv; $body }
            Space::LchUv => { type $m = models::LchUv; $body }
            Space::Oklab => { type $m = models::Oklab; $body }
            Space::Oklch => { type $m = models::Oklch; $body }
            Space::JzAzBz => { type $m = models::JzAzBz; $body }
            Space::JzCzHz => { type $m = models::JzCzHz; $body }
            Space::ICtCp => { type $m = models::ICtCp; $body }
            Space::XyzD50 => { type $m = models::XyzD50; $body }
            Space::XyzD65 => { type $m = models::XyzD65; $body }
            Space::Bt709 => { type $m = models::Bt709; $body }
            Space::DciP3 => { type $m = models::DciP3; $body }
            Space::AcesCc => { type $m = models::AcesCc; $body }
            Space::AcesCct => { type $m = models::AcesCct; $body }
            Space::XyY => { type $m = models::XyY; $body }
            Space::Hsluv => { type $m = models::Hsluv; $body }
            Space::Hpluv => { type $m = models::Hpluv; $body }
        }
    };
}

impl Color {
    /// Convert this color from its current color space/notation to the
    /// specified color space/notation.
    ///
    /// Missing components enter the conversion as 0.0. Components that come
    /// out powerless (an achromatic hue) are missing in the result. The
    /// alpha, missing or not, is carried over untouched.
    pub fn to_space(&self, space: Space) -> Self {
        if self.space() == space {
            return self.clone();
        }

        tracing::trace!(from = %self.space(), to = %space, "converting color");

        if let Some(color) = self.convert_directly(space) {
            return color;
        }

        let (xyz, white) = with_model!(self.space(), M => (
            M::from_color(self).to_xyz().to_components(),
            <<M as Connect>::White as Reference>::WHITE_POINT,
        ));

        with_model!(space, M => {
            let target = <<M as Connect>::White as Reference>::WHITE_POINT;
            let xyz = white_point::adapt(xyz, white, target);
            M::from_xyz(&Xyz::from(xyz)).to_color(self.alpha())
        })
    }

    /// Convert this color into the typed model `M`.
    pub fn to_model<M: Model + HasSpace>(&self) -> M {
        M::from_color(&self.to_space(M::SPACE))
    }

    fn convert_directly(&self, space: Space) -> Option<Self> {
        use models::rgb_space as rgb;
        use models::opponent;
        use Space as S;

        if let Some(srgb) = self.srgb_notation() {
            if let Some(color) = from_srgb_notation(&srgb, space, self.alpha()) {
                return Some(color);
            }
        }

        Some(match (self.space(), space) {
            (S::Srgb, S::SrgbLinear) => decode::<rgb::Srgb>(self),
            (S::SrgbLinear, S::Srgb) => encode::<rgb::Srgb>(self),
            (S::Lab, S::Lch) => polar::<opponent::Lab>(self),
            (S::Lch, S::Lab) => rectangular::<opponent::Lab>(self),
            (S::Luv, S::LchUv) => polar::<opponent::Luv>(self),
            (S::LchUv, S::Luv) => rectangular::<opponent::Luv>(self),
            (S::Oklab, S::Oklch) => polar::<opponent::Oklab>(self),
            (S::Oklch, S::Oklab) => rectangular::<opponent::Oklab>(self),
            (S::JzAzBz, S::JzCzHz) => polar::<opponent::JzAzBz>(self),
            (S::JzCzHz, S::JzAzBz) => rectangular::<opponent::JzAzBz>(self),
            (S::LchUv, S::Hsluv) => models::LchUv::from_color(self)
                .to_hsluv()
                .to_color(self.alpha()),
            (S::LchUv, S::Hpluv) => models::LchUv::from_color(self)
                .to_hpluv()
                .to_color(self.alpha()),
            (S::Hsluv, S::LchUv) => models::Hsluv::from_color(self)
                .to_lchuv()
                .to_color(self.alpha()),
            (S::Hpluv, S::LchUv) => models::Hpluv::from_color(self)
                .to_lchuv()
                .to_color(self.alpha()),
            _ => return None,
        })
    }

    /// The sRGB value of a color in one of the sRGB notations.
    fn srgb_notation(&self) -> Option<models::Srgb> {
        Some(match self.space() {
            Space::Srgb => models::Srgb::from_color(self),
            Space::Hsl => models::Hsl::from_color(self).to_srgb(),
            Space::Hsv => models::Hsv::from_color(self).to_srgb(),
            Space::Hwb => models::Hwb::from_color(self).to_srgb(),
            Space::Cmyk => models::Cmyk::from_color(self).to_srgb(),
            _ => return None,
        })
    }
}

fn from_srgb_notation(
    srgb: &models::Srgb,
    space: Space,
    alpha: Option<Component>,
) -> Option<Color> {
    Some(match space {
        Space::Srgb => srgb.to_color(alpha),
        Space::Hsl => srgb.to_hsl().to_color(alpha),
        Space::Hsv => srgb.to_hsv().to_color(alpha),
        Space::Hwb => srgb.to_hwb().to_color(alpha),
        Space::Cmyk => srgb.to_cmyk().to_color(alpha),
        _ => return None,
    })
}

fn decode<S: RgbSpace + TransferFunction>(color: &Color) -> Color
where
    Rgb<S, GammaEncoded>: HasSpace,
    Rgb<S, LinearLight>: HasSpace,
{
    Rgb::<S, GammaEncoded>::from_color(color)
        .to_linear_light()
        .to_color(color.alpha())
}

fn encode<S: RgbSpace + TransferFunction>(color: &Color) -> Color
where
    Rgb<S, GammaEncoded>: HasSpace,
    Rgb<S, LinearLight>: HasSpace,
{
    Rgb::<S, LinearLight>::from_color(color)
        .to_gamma_encoded()
        .to_color(color.alpha())
}

fn polar<S: OpponentSpace>(color: &Color) -> Color
where
    Rectangular<S>: HasSpace,
    Polar<S>: HasSpace,
{
    Rectangular::<S>::from_color(color)
        .to_polar()
        .to_color(color.alpha())
}

fn rectangular<S: OpponentSpace>(color: &Color) -> Color
where
    Rectangular<S>: HasSpace,
    Polar<S>: HasSpace,
{
    Polar::<S>::from_color(color)
        .to_rectangular()
        .to_color(color.alpha())
}
