//! WCAG relative luminance and contrast.
//! <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>

use crate::{
    color::{Color, Component},
    math::normalize,
    space::Space,
};

impl Color {
    /// The relative luminance of this color, `0.0` for the darkest black and
    /// `1.0` for the lightest white. Out of gamut colors are not clamped.
    pub fn wcag_luminance(&self) -> Component {
        let linear = self.to_space(Space::SrgbLinear);
        let [r, g, b, _] = (*linear.raw_values()).map(normalize);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// The contrast ratio between two colors, from `1.0` up to `21.0`. The
    /// ratio is symmetric.
    /// <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>
    pub fn wcag_contrast_ratio(&self, other: &Color) -> Component {
        let l1 = self.wcag_luminance();
        let l2 = other.wcag_luminance();
        (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
    }

    /// The color with the highest contrast ratio against this one. Returns
    /// `None` if `colors` is empty. Ties go to the earliest color.
    pub fn most_contrasting<'a>(&self, colors: &'a [Color]) -> Option<&'a Color> {
        let mut best: Option<(&Color, Component)> = None;
        for color in colors {
            let ratio = self.wcag_contrast_ratio(color);
            if best.map_or(true, |(_, r)| ratio > r) {
                best = Some((color, ratio));
            }
        }
        best.map(|(color, _)| color)
    }

    /// The first color whose contrast ratio against this one is at least
    /// `target`.
    pub fn first_with_contrast<'a>(
        &self,
        colors: &'a [Color],
        target: Component,
    ) -> Option<&'a Color> {
        colors
            .iter()
            .find(|color| self.wcag_contrast_ratio(color) >= target)
    }

    /// Like [`Color::first_with_contrast`], but falls back to sRGB white or
    /// black, whichever contrasts more, when no color reaches `target`.
    pub fn first_with_contrast_or_black_white(
        &self,
        colors: &[Color],
        target: Component,
    ) -> Color {
        if let Some(color) = self.first_with_contrast(colors, target) {
            return color.clone();
        }

        tracing::trace!(target, "no color reaches the contrast, using black or white");

        let white = Color::new(Space::Srgb, 1.0, 1.0, 1.0, 1.0);
        let black = Color::new(Space::Srgb, 0.0, 0.0, 0.0, 1.0);
        if self.wcag_contrast_ratio(&white) >= self.wcag_contrast_ratio(&black) {
            white
        } else {
            black
        }
    }
}
