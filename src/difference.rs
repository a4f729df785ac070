//! Color difference (ΔE) metrics.
//!
//! Every metric converts both colors into the space it is defined in first,
//! so colors from any space can be compared. Missing components count as 0.

use crate::{
    color::{Color, Component, Components},
    math::wrap_degrees,
    space::Space,
};

/// Weighting factors for the CIE94 difference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cie94Weights {
    /// Weights for graphic arts.
    #[default]
    GraphicArts,
    /// Weights for textiles.
    Textiles,
}

impl Cie94Weights {
    /// The (kL, K1, K2) factors.
    fn factors(self) -> (Component, Component, Component) {
        match self {
            Self::GraphicArts => (1.0, 0.045, 0.015),
            Self::Textiles => (2.0, 0.048, 0.014),
        }
    }
}

fn components_in(color: &Color, space: Space) -> Components {
    let converted = color.to_space(space);
    let values = converted.values();
    Components(values[0], values[1], values[2])
}

fn euclidean(a: Components, b: Components) -> Component {
    let (d0, d1, d2) = (a.0 - b.0, a.1 - b.1, a.2 - b.2);
    (d0 * d0 + d1 * d1 + d2 * d2).sqrt()
}

fn cos_degrees(degrees: Component) -> Component {
    degrees.to_radians().cos()
}

fn sin_degrees(degrees: Component) -> Component {
    degrees.to_radians().sin()
}

impl Color {
    /// CIE76: the euclidean distance in CIE-Lab.
    /// <http://brucelindbloom.com/Eqn_DeltaE_CIE76.html>
    pub fn delta_e76(&self, other: &Color) -> Component {
        euclidean(components_in(self, Space::Lab), components_in(other, Space::Lab))
    }

    /// CIE94, with `self` as the reference color.
    /// <http://brucelindbloom.com/Eqn_DeltaE_CIE94.html>
    pub fn delta_e94(&self, other: &Color, weights: Cie94Weights) -> Component {
        let Components(l1, a1, b1) = components_in(self, Space::Lab);
        let Components(l2, a2, b2) = components_in(other, Space::Lab);
        let (kl, k1, k2) = weights.factors();

        let c1 = a1.hypot(b1);
        let c2 = a2.hypot(b2);
        let dl = l1 - l2;
        let dc = c1 - c2;
        let (da, db) = (a1 - a2, b1 - b2);
        let dh = (da * da + db * db - dc * dc).max(0.0).sqrt();

        let sc = 1.0 + k1 * c1;
        let sh = 1.0 + k2 * c1;

        let (x, y, z) = (dl / kl, dc / sc, dh / sh);
        (x * x + y * y + z * z).sqrt()
    }

    /// CIEDE2000.
    /// <http://brucelindbloom.com/Eqn_DeltaE_CIE2000.html>
    pub fn delta_e2000(&self, other: &Color) -> Component {
        const POW_25_7: Component = 6103515625.0;

        let Components(l1, a1, b1) = components_in(self, Space::Lab);
        let Components(l2, a2, b2) = components_in(other, Space::Lab);

        let mean_l = (l1 + l2) / 2.0;
        let mean_c = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
        let mean_c7 = mean_c.powi(7);
        let g = 1.0 - (mean_c7 / (mean_c7 + POW_25_7)).sqrt();

        let ap1 = a1 * (1.0 + g);
        let ap2 = a2 * (1.0 + g);
        let cp1 = ap1.hypot(b1);
        let cp2 = ap2.hypot(b2);
        let mean_cp = (cp1 + cp2) / 2.0;

        let hp1 = wrap_degrees(b1.atan2(ap1).to_degrees());
        let hp2 = wrap_degrees(b2.atan2(ap2).to_degrees());
        let hue_gap = (hp1 - hp2).abs();

        let mean_hp = if hue_gap > 180.0 {
            (hp1 + hp2 + 360.0) / 2.0
        } else {
            (hp1 + hp2) / 2.0
        };

        let t = 1.0 - 0.17 * cos_degrees(mean_hp - 30.0)
            + 0.24 * cos_degrees(2.0 * mean_hp)
            + 0.32 * cos_degrees(3.0 * mean_hp + 6.0)
            - 0.20 * cos_degrees(4.0 * mean_hp - 63.0);

        let dhp = if hue_gap <= 180.0 {
            hp2 - hp1
        } else if hp2 <= hp1 {
            hp2 - hp1 + 360.0
        } else {
            hp2 - hp1 - 360.0
        };

        let dlp = l2 - l1;
        let dcp = cp2 - cp1;
        let dhp = 2.0 * (cp1 * cp2).sqrt() * sin_degrees(dhp / 2.0);

        let l50 = (mean_l - 50.0) * (mean_l - 50.0);
        let sl = 1.0 + (0.015 * l50) / (20.0 + l50).sqrt();
        let sc = 1.0 + 0.045 * mean_cp;
        let sh = 1.0 + 0.015 * mean_cp * t;

        let d_theta = 30.0 * (-((mean_hp - 275.0) / 25.0).powi(2)).exp();
        let mean_cp7 = mean_cp.powi(7);
        let rc = (mean_cp7 / (mean_cp7 + POW_25_7)).sqrt();
        let rt = -2.0 * rc * sin_degrees(2.0 * d_theta);

        let (x, y, z) = (dlp / sl, dcp / sc, dhp / sh);
        (x * x + y * y + z * z + rt * y * z).sqrt()
    }

    /// CMC l:c, with `self` as the reference color. The customary weights
    /// are 2:1 for acceptability and 1:1 for perceptibility.
    pub fn delta_ecmc(&self, other: &Color, lightness: Component, chroma: Component) -> Component {
        let Components(l1, a1, b1) = components_in(self, Space::Lab);
        let Components(l2, a2, b2) = components_in(other, Space::Lab);

        let c1 = a1.hypot(b1);
        let c2 = a2.hypot(b2);
        let dl = l1 - l2;
        let dc = c1 - c2;
        let (da, db) = (a1 - a2, b1 - b2);
        let dh2 = da * da + db * db - dc * dc;

        let h1 = wrap_degrees(b1.atan2(a1).to_degrees());
        let t = if (164.0..=345.0).contains(&h1) {
            0.56 + (0.2 * cos_degrees(h1 + 168.0)).abs()
        } else {
            0.36 + (0.4 * cos_degrees(h1 + 35.0)).abs()
        };
        let c1_4 = c1.powi(4);
        let f = (c1_4 / (c1_4 + 1900.0)).sqrt();

        let sl = if l1 < 16.0 {
            0.511
        } else {
            0.040975 * l1 / (1.0 + 0.01765 * l1)
        };
        let sc = 0.0638 * c1 / (1.0 + 0.0131 * c1) + 0.638;
        let sh = sc * (f * t + 1.0 - f);

        let x = dl / (lightness * sl);
        let y = dc / (chroma * sc);
        (x * x + y * y + dh2 / (sh * sh)).sqrt()
    }

    /// ΔEOK: the euclidean distance in Oklab.
    /// <https://drafts.csswg.org/css-color-4/#color-difference-OK>
    pub fn delta_eok(&self, other: &Color) -> Component {
        euclidean(
            components_in(self, Space::Oklab),
            components_in(other, Space::Oklab),
        )
    }

    /// ΔEz: the difference in JzCzHz.
    pub fn delta_ez(&self, other: &Color) -> Component {
        let Components(j1, c1, h1) = components_in(self, Space::JzCzHz);
        let Components(j2, c2, h2) = components_in(other, Space::JzCzHz);

        let dj = j2 - j1;
        let dc = c2 - c1;
        // (ΔHz)²
        let dh2 = 2.0 * c1 * c2 * (1.0 - cos_degrees(h2 - h1));
        (dj * dj + dc * dc + dh2).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn lab(l: Component, a: Component, b: Component) -> Color {
        Color::new(Space::Lab, l, a, b, None)
    }

    fn reference() -> Color {
        lab(100.0, 21.57210357, 272.22819350)
    }

    fn samples() -> [Color; 3] {
        [
            lab(100.0, 426.67945353, 72.39590835),
            lab(100.0, 74.05216981, 276.45318193),
            lab(100.0, 8.32281957, -73.58297716),
        ]
    }

    #[test]
    fn cie76() {
        let expected = [451.713301974, 52.6498611564, 346.064891718];
        for (sample, expected) in samples().iter().zip(expected) {
            assert_component_eq!(reference().delta_e76(sample), expected, 1.0e-4);
        }
    }

    #[test]
    fn cie94() {
        let graphic_arts = [83.77922550, 10.05393195, 57.53545370];
        let textiles = [88.33555305, 10.61265789, 60.36868726];
        for (i, sample) in samples().iter().enumerate() {
            assert_component_eq!(
                reference().delta_e94(sample, Cie94Weights::GraphicArts),
                graphic_arts[i],
                1.0e-5
            );
            assert_component_eq!(
                reference().delta_e94(sample, Cie94Weights::Textiles),
                textiles[i],
                1.0e-5
            );
        }
    }

    #[test]
    fn ciede2000() {
        let expected = [94.0356490267, 14.8790641937, 68.2309487895];
        for (sample, expected) in samples().iter().zip(expected) {
            assert_component_eq!(reference().delta_e2000(sample), expected, 1.0e-5);
        }
    }

    #[test]
    fn cmc() {
        let expected = [172.70477128656017, 20.5973271673546, 121.71841479123384];
        for (sample, expected) in samples().iter().zip(expected) {
            assert_component_eq!(reference().delta_ecmc(sample, 2.0, 1.0), expected, 1.0e-6);
        }
    }

    #[test]
    fn identical_colors_have_no_difference() {
        let color = Color::new(Space::Srgb, 0.2, 0.4, 0.6, None);
        assert_eq!(color.delta_e76(&color), 0.0);
        assert_eq!(color.delta_e2000(&color), 0.0);
        assert_eq!(color.delta_eok(&color), 0.0);
        assert_component_eq!(color.delta_ez(&color), 0.0, 1.0e-12);
    }

    #[test]
    fn compares_across_spaces() {
        let srgb = Color::new(Space::Srgb, 0.2, 0.4, 0.6, None);
        let oklch = srgb.to_space(Space::Oklch);
        assert_component_eq!(srgb.delta_eok(&oklch), 0.0, 1.0e-9);
        assert_component_eq!(srgb.delta_e76(&oklch), 0.0, 1.0e-6);
    }

    #[test]
    fn black_and_white_are_far_apart() {
        let black = Color::new(Space::Srgb, 0.0, 0.0, 0.0, None);
        let white = Color::new(Space::Srgb, 1.0, 1.0, 1.0, None);
        assert_component_eq!(black.delta_eok(&white), 1.0, 1.0e-4);
        assert_component_eq!(black.delta_e76(&white), 100.0, 1.0e-3);
        assert!(black.delta_ez(&white) > 0.0);
    }
}
