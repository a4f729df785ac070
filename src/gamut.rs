//! Gamut checks and mapping.
//! <https://drafts.csswg.org/css-color-4/#gamut-mapping>

use crate::{
    color::{Color, Component},
    math::clamp,
    space::Space,
};

impl Color {
    /// Returns true if every present component lies within the declared
    /// range of its space. Circular components and missing components always
    /// pass. The alpha is not checked.
    pub fn in_gamut(&self) -> bool {
        self.space()
            .descriptor()
            .components
            .iter()
            .zip(self.components())
            .all(|(info, value)| value.map_or(true, |value| info.contains(value)))
    }

    /// Return a color with every component clamped to the declared range of
    /// its space. Circular and missing components are left alone, so is the
    /// alpha. NaN values clamp to the lower bound.
    ///
    /// NOTE: This is a lossy operation.
    pub fn clamp(&self) -> Self {
        let values = self
            .space()
            .descriptor()
            .components
            .iter()
            .zip(self.components())
            .map(|(info, value)| match value {
                Some(value) if !info.circular => Some(clamp(value, info.min, info.max)),
                other => other,
            })
            .collect::<Vec<_>>();

        Color::from_values(self.space(), &values, self.alpha())
    }

    /// If this color is not within the gamut of a device bounded space, map
    /// it into the gamut by reducing its Oklch chroma until clipping it is
    /// visually indistinguishable. Colors in unbounded spaces (CIE-Lab, Oklab,
    /// XYZ and friends) are returned as is.
    /// <https://drafts.csswg.org/css-color-4/#binsearch>
    pub fn map_into_gamut_limits(&self) -> Self {
        const JND: Component = 0.02;
        const EPSILON: Component = 1.0e-4;

        let space = self.space();
        if !space.descriptor().bounded || self.in_gamut() {
            return self.clone();
        }

        let origin = self.to_space(Space::Oklch);
        let lightness = origin.values()[0];

        if lightness >= 1.0 {
            return Color::new(Space::Srgb, 1.0, 1.0, 1.0, self.alpha())
                .to_space(space)
                .clamp();
        }
        if lightness <= 0.0 {
            return Color::new(Space::Srgb, 0.0, 0.0, 0.0, self.alpha())
                .to_space(space)
                .clamp();
        }

        tracing::debug!(%space, "searching for a chroma inside the gamut");

        let hue = origin.c2();
        let with_chroma = |chroma: Component| {
            Color::from_values(
                Space::Oklch,
                &[Some(lightness), Some(chroma), hue],
                self.alpha(),
            )
        };

        // Clipping might already be close enough.
        let clipped = self.clamp();
        if clipped.delta_eok(&origin) < JND {
            return clipped;
        }

        let mut min = 0.0;
        let mut max = origin.values()[1];
        let mut min_in_gamut = true;
        let mut clipped = clipped;

        while max - min > EPSILON {
            let chroma = (min + max) / 2.0;
            let candidate = with_chroma(chroma);
            let current = candidate.to_space(space);

            if min_in_gamut && current.in_gamut() {
                clipped = current;
                min = chroma;
                continue;
            }

            clipped = current.clamp();
            let e = clipped.delta_eok(&candidate);
            if e < JND {
                if JND - e < EPSILON {
                    return clipped;
                }
                min_in_gamut = false;
                min = chroma;
            } else {
                max = chroma;
            }
        }

        clipped
    }
}
