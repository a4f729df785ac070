//! Interpolation between colors and multi-stop gradients.
//! <https://drafts.csswg.org/css-color-4/#interpolation>

use crate::{
    color::{Color, Component, MAX_COMPONENTS},
    easing::Easing,
    math::{lerp, wrap_degrees},
    space::Space,
};

/// How the hue of polar spaces travels between two colors.
/// <https://drafts.csswg.org/css-color-4/#hue-interpolation>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HueInterpolation {
    /// Take the shorter arc, at most 180 degrees. Hues exactly 180 degrees
    /// apart travel in the direction of increasing angle.
    #[default]
    Shorter,
    /// Take the longer arc, at least 180 degrees, unless the hues are equal.
    Longer,
    /// Always travel in the direction of increasing angle.
    Increasing,
    /// Always travel in the direction of decreasing angle.
    Decreasing,
    /// Interpolate the raw values without any wrapping.
    Specified,
}

impl HueInterpolation {
    /// Adjust a pair of hues so that linear interpolation between them takes
    /// the requested path.
    fn adjust(self, from: Component, to: Component) -> (Component, Component) {
        if self == Self::Specified {
            return (from, to);
        }

        let from = wrap_degrees(from);
        let delta = wrap_degrees(to) - from;

        let delta = match self {
            Self::Shorter if delta > 180.0 => delta - 360.0,
            Self::Shorter if delta <= -180.0 => delta + 360.0,
            Self::Longer if delta > 0.0 && delta < 180.0 => delta - 360.0,
            Self::Longer if delta < 0.0 && delta > -180.0 => delta + 360.0,
            Self::Increasing if delta < 0.0 => delta + 360.0,
            Self::Decreasing if delta > 0.0 => delta - 360.0,
            _ => delta,
        };

        (from, from + delta)
    }

    /// Bring an interpolated hue back into `[0, 360)`.
    fn finish(self, hue: Component) -> Component {
        if self == Self::Specified {
            hue
        } else {
            wrap_degrees(hue)
        }
    }
}

/// How each channel of a [`Gradient`] is interpolated through its stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMethod {
    /// Straight lines between neighbouring stops.
    #[default]
    Linear,
    /// A monotone cubic spline through all the stops, which never overshoots
    /// between two stops. Positions outside the stops follow the end curves.
    /// Gradients with fewer than three stops are linear.
    /// <https://ui.adsabs.harvard.edu/abs/1990A%26A...239..443S>
    MonotoneSpline {
        /// Choose the end slopes from a parabola through the three outer
        /// stops instead of the slope of the outer segment.
        parabolic_endpoints: bool,
    },
}

/// Mix two colors that are already in the same space.
fn mix(
    start: &Color,
    end: &Color,
    t: Component,
    hue_interpolation: HueInterpolation,
    premultiplied: bool,
) -> Color {
    debug_assert_eq!(start.space(), end.space());

    let space = start.space();
    let hue_index = space.descriptor().hue_index();

    // A value declared on one side only is kept as is.
    let alpha = match (start.alpha(), end.alpha()) {
        (Some(a), _) if t == 0.0 => Some(a),
        (_, Some(b)) if t == 1.0 => Some(b),
        (Some(a), Some(b)) => Some(lerp(a, b, t)),
        (a, b) => a.or(b),
    };

    // Premultiplication treats a color with no alpha as opaque.
    let (alpha_start, alpha_end) = match (start.alpha(), end.alpha()) {
        (a, b) if premultiplied => {
            let filled = a.or(b).unwrap_or(1.0);
            (a.unwrap_or(filled), b.unwrap_or(filled))
        }
        _ => (1.0, 1.0),
    };
    let alpha_mixed = lerp(alpha_start, alpha_end, t);

    let mut values = [None; MAX_COMPONENTS];
    for (index, value) in values.iter_mut().enumerate().take(space.component_count()) {
        let (a, b) = match (start.component(index), end.component(index)) {
            (Some(a), Some(b)) => (a, b),
            (a, b) => {
                *value = a.or(b);
                continue;
            }
        };

        *value = Some(if t == 0.0 {
            a
        } else if t == 1.0 {
            b
        } else if Some(index) == hue_index {
            let (a, b) = hue_interpolation.adjust(a, b);
            hue_interpolation.finish(lerp(a, b, t))
        } else {
            let mixed = lerp(a * alpha_start, b * alpha_end, t);
            if alpha_mixed == 0.0 {
                mixed
            } else {
                mixed / alpha_mixed
            }
        });
    }

    Color::from_values(space, &values[..space.component_count()], alpha)
}

impl Color {
    /// Linearly interpolate from this color to `other` in the space of this
    /// color, using `t` as the progress between them. Hues take the shorter
    /// arc and the components are not premultiplied. `t` outside `[0, 1]`
    /// extrapolates.
    ///
    /// ```rust
    /// use chromata::{Color, Space};
    /// let red = Color::new(Space::Srgb, 1.0, 0.0, 0.0, None);
    /// let blue = Color::new(Space::Srgb, 0.0, 0.0, 1.0, None);
    /// assert_eq!(red.lerp(&blue, 0.5).values(), &[0.5, 0.0, 0.5]);
    /// ```
    pub fn lerp(&self, other: &Color, t: Component) -> Color {
        self.interpolate(other, self.space())
            .premultiplied(false)
            .at(t)
    }

    /// Set up an interpolation from this color to `other` in `space`. Both
    /// colors are converted up front. Components are premultiplied by alpha
    /// unless turned off with [`Interpolation::premultiplied`].
    pub fn interpolate(&self, other: &Color, space: Space) -> Interpolation {
        Interpolation {
            start: self.to_space(space),
            end: other.to_space(space),
            hue_interpolation: HueInterpolation::default(),
            premultiplied: true,
            easing: Easing::Linear,
        }
    }
}

/// An interpolation between two colors in a fixed space. Created with
/// [`Color::interpolate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation {
    start: Color,
    end: Color,
    hue_interpolation: HueInterpolation,
    premultiplied: bool,
    easing: Easing,
}

impl Interpolation {
    /// Use the given hue interpolation method. Only polar spaces are
    /// affected.
    pub fn hue_interpolation(mut self, hue_interpolation: HueInterpolation) -> Self {
        self.hue_interpolation = hue_interpolation;
        self
    }

    /// Interpolate with the components multiplied by the alpha.
    pub fn premultiplied(mut self, premultiplied: bool) -> Self {
        self.premultiplied = premultiplied;
        self
    }

    /// Reshape the progress with `easing` before mixing.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The space the interpolation happens in.
    pub fn space(&self) -> Space {
        self.start.space()
    }

    /// The color at `t`.
    pub fn at(&self, t: Component) -> Color {
        mix(
            &self.start,
            &self.end,
            self.easing.ease(t),
            self.hue_interpolation,
            self.premultiplied,
        )
    }

    /// The colors at each of the `fractions`. The returned iterator can be
    /// cloned to walk the gradient again.
    pub fn gradient<I>(&self, fractions: I) -> impl Iterator<Item = Color> + Clone + '_
    where
        I: IntoIterator<Item = Component>,
        I::IntoIter: Clone + 'static,
    {
        fractions.into_iter().map(move |t| self.at(t))
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Stop {
    position: Component,
    color: Color,
    /// Easing of the segment that starts at this stop.
    easing: Option<Easing>,
}

/// A gradient through any number of color stops.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    space: Space,
    stops: Vec<Stop>,
    hue_interpolation: HueInterpolation,
    premultiplied: bool,
    easing: Easing,
    method: InterpolationMethod,
}

impl Gradient {
    /// A gradient with the `colors` evenly distributed over `[0, 1]`.
    pub fn new(space: Space, colors: impl IntoIterator<Item = Color>) -> Self {
        let colors = colors.into_iter().collect::<Vec<_>>();
        let last = colors.len().saturating_sub(1).max(1) as Component;

        Self::with_positions(
            space,
            colors
                .into_iter()
                .enumerate()
                .map(|(i, color)| (i as Component / last, color)),
        )
    }

    /// A gradient with explicit stop positions. A position before the
    /// position of a previous stop is moved up to it.
    pub fn with_positions(
        space: Space,
        stops: impl IntoIterator<Item = (Component, Color)>,
    ) -> Self {
        let mut previous = Component::NEG_INFINITY;
        let stops = stops
            .into_iter()
            .map(|(position, color)| {
                previous = position.max(previous);
                Stop {
                    position: previous,
                    color: color.to_space(space),
                    easing: None,
                }
            })
            .collect();

        Self {
            space,
            stops,
            hue_interpolation: HueInterpolation::default(),
            premultiplied: true,
            easing: Easing::Linear,
            method: InterpolationMethod::default(),
        }
    }

    /// Use the given hue interpolation method between each pair of stops.
    pub fn hue_interpolation(mut self, hue_interpolation: HueInterpolation) -> Self {
        self.hue_interpolation = hue_interpolation;
        self
    }

    /// Interpolate with the components multiplied by the alpha. On by
    /// default.
    pub fn premultiplied(mut self, premultiplied: bool) -> Self {
        self.premultiplied = premultiplied;
        self
    }

    /// Ease every segment that has no easing of its own.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Ease the segment that starts at the stop at `index`. Does nothing if
    /// there is no such stop.
    pub fn stop_easing(mut self, index: usize, easing: Easing) -> Self {
        if let Some(stop) = self.stops.get_mut(index) {
            stop.easing = Some(easing);
        }
        self
    }

    /// Interpolate the channels with `method`.
    pub fn method(mut self, method: InterpolationMethod) -> Self {
        self.method = method;
        self
    }

    /// The space the gradient is interpolated in.
    pub fn space(&self) -> Space {
        self.space
    }

    /// The color at `t`. With linear interpolation, positions before the
    /// first stop or after the last take the color of that stop. Returns
    /// `None` for a gradient without stops.
    pub fn at(&self, t: Component) -> Option<Color> {
        let first = self.stops.first()?;
        if t.is_nan() || self.stops.len() == 1 {
            return Some(first.color.clone());
        }

        match self.method {
            InterpolationMethod::Linear => self.linear_at(t),
            InterpolationMethod::MonotoneSpline {
                parabolic_endpoints,
            } => Some(self.spline_at(t, parabolic_endpoints)),
        }
    }

    /// `count` colors evenly spaced over `[0, 1]`, including both ends.
    pub fn steps(&self, count: usize) -> impl Iterator<Item = Color> + Clone + '_ {
        let last = count.saturating_sub(1).max(1) as Component;
        (0..count).filter_map(move |i| self.at(i as Component / last))
    }

    /// The index of the stop that starts the segment holding `t`, with the
    /// eased progress through that segment. `None` outside the stops.
    fn segment(&self, t: Component) -> Option<(usize, Component)> {
        let (first, last) = (self.stops.first()?, self.stops.last()?);
        if !(t > first.position && t < last.position) {
            return None;
        }

        // At least one stop is at or before `t` and one is after it.
        let index = self.stops.partition_point(|stop| stop.position <= t) - 1;
        let (start, end) = (&self.stops[index], &self.stops[index + 1]);
        let local = (t - start.position) / (end.position - start.position);

        Some((index, start.easing.unwrap_or(self.easing).ease(local)))
    }

    fn linear_at(&self, t: Component) -> Option<Color> {
        let Some((index, local)) = self.segment(t) else {
            let first = self.stops.first()?;
            let stop = if t <= first.position {
                first
            } else {
                self.stops.last()?
            };
            return Some(stop.color.clone());
        };

        Some(mix(
            &self.stops[index].color,
            &self.stops[index + 1].color,
            local,
            self.hue_interpolation,
            self.premultiplied,
        ))
    }

    fn spline_at(&self, t: Component, parabolic_endpoints: bool) -> Color {
        let method = InterpolationMethod::MonotoneSpline {
            parabolic_endpoints,
        };

        // Easing moves the position within its segment.
        let position = match self.segment(t) {
            Some((index, local)) => lerp(
                self.stops[index].position,
                self.stops[index + 1].position,
                local,
            ),
            None => t,
        };

        let alphas = self
            .stops
            .iter()
            .filter_map(|stop| Some((stop.position, stop.color.alpha()?)))
            .collect::<Vec<_>>();
        let alpha = self.channel_at(&alphas, position, method);

        // The weight of each stop when premultiplying. A stop without alpha
        // takes the alpha of the gradient at its position.
        let weights = self
            .stops
            .iter()
            .map(|stop| match stop.color.alpha() {
                _ if !self.premultiplied => 1.0,
                Some(alpha) => alpha,
                None => self.channel_at(&alphas, stop.position, method).unwrap_or(1.0),
            })
            .collect::<Vec<_>>();
        let divisor = match alpha {
            Some(alpha) if self.premultiplied && alpha != 0.0 => alpha,
            _ => 1.0,
        };

        let hue_index = self.space.descriptor().hue_index();
        let mut values = [None; MAX_COMPONENTS];
        for (index, value) in values
            .iter_mut()
            .enumerate()
            .take(self.space.component_count())
        {
            let is_hue = Some(index) == hue_index;

            let mut points = self
                .stops
                .iter()
                .zip(&weights)
                .filter_map(|(stop, weight)| {
                    let value = stop.color.component(index)?;
                    Some((stop.position, if is_hue { value } else { value * weight }))
                })
                .collect::<Vec<_>>();

            if is_hue {
                // Unwrap the hues so that each pair of neighbours follows the
                // hue interpolation method.
                for i in 1..points.len() {
                    let (from, to) = self.hue_interpolation.adjust(points[i - 1].1, points[i].1);
                    points[i].1 = points[i - 1].1 + (to - from);
                }
                *value = self
                    .channel_at(&points, position, method)
                    .map(|hue| self.hue_interpolation.finish(hue));
            } else {
                *value = self
                    .channel_at(&points, position, method)
                    .map(|mixed| mixed / divisor);
            }
        }

        Color::from_values(
            self.space,
            &values[..self.space.component_count()],
            alpha,
        )
    }

    /// Interpolate one channel given by the stops that declare it. A channel
    /// missing at the outer stops holds the nearest declared value there.
    fn channel_at(
        &self,
        points: &[(Component, Component)],
        t: Component,
        method: InterpolationMethod,
    ) -> Option<Component> {
        let (first, last) = (points.first()?, points.last()?);
        let mut t = t;
        if self.stops.first().is_some_and(|stop| stop.position < first.0) {
            t = t.max(first.0);
        }
        if self.stops.last().is_some_and(|stop| stop.position > last.0) {
            t = t.min(last.0);
        }

        Some(match method {
            InterpolationMethod::MonotoneSpline {
                parabolic_endpoints,
            } => match MonotoneSpline::new(points, parabolic_endpoints) {
                Some(spline) => spline.at(t),
                None => linear_channel_at(points, t),
            },
            InterpolationMethod::Linear => linear_channel_at(points, t),
        })
    }
}

/// Linear interpolation through `points`, holding the end values outside
/// them. `points` must not be empty.
fn linear_channel_at(points: &[(Component, Component)], t: Component) -> Component {
    let after = points.partition_point(|(x, _)| *x <= t);
    if after == 0 {
        return points[0].1;
    }

    let (x0, y0) = points[after - 1];
    if x0 == t || after == points.len() {
        return y0;
    }

    let (x1, y1) = points[after];
    lerp(y0, y1, (t - x0) / (x1 - x0))
}

fn signum(value: Component) -> Component {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Steffen's monotone cubic interpolation.
struct MonotoneSpline<'a> {
    points: &'a [(Component, Component)],
    /// Slope of each segment.
    slopes: Vec<Component>,
    /// Derivative at each point.
    tangents: Vec<Component>,
}

impl<'a> MonotoneSpline<'a> {
    /// `None` for fewer than three points or when two points share a
    /// position.
    fn new(points: &'a [(Component, Component)], parabolic_endpoints: bool) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }
        let n = points.len() - 1;

        let widths = points
            .windows(2)
            .map(|pair| pair[1].0 - pair[0].0)
            .collect::<Vec<_>>();
        if widths.iter().any(|width| *width <= 0.0) {
            return None;
        }
        let slopes = points
            .windows(2)
            .zip(&widths)
            .map(|(pair, width)| (pair[1].1 - pair[0].1) / width)
            .collect::<Vec<_>>();

        // Slope of the parabola through a point and its two neighbours, or
        // through the two points after (or before) an end point.
        let parabola = |i: usize| -> Component {
            let (h, s) = (&widths, &slopes);
            if i == 0 {
                s[0] * (1.0 + h[0] / (h[0] + h[1])) - s[1] * h[0] / (h[0] + h[1])
            } else if i == n {
                s[n - 1] * (1.0 + h[n - 1] / (h[n - 1] + h[n - 2]))
                    - s[n - 2] * h[n - 1] / (h[n - 1] + h[n - 2])
            } else {
                (s[i - 1] * h[i] + s[i] * h[i - 1]) / (h[i - 1] + h[i])
            }
        };

        let tangents = (0..=n)
            .map(|i| {
                if i == 0 || i == n {
                    let slope = slopes[if i == 0 { 0 } else { n - 1 }];
                    if !parabolic_endpoints {
                        return slope;
                    }
                    let p = parabola(i);
                    if p * slope <= 0.0 {
                        0.0
                    } else if p.abs() > 2.0 * slope.abs() {
                        2.0 * slope
                    } else {
                        p
                    }
                } else {
                    let (before, after) = (slopes[i - 1], slopes[i]);
                    (signum(before) + signum(after))
                        * before.abs().min(after.abs()).min(parabola(i).abs() / 2.0)
                }
            })
            .collect();

        Some(Self {
            points,
            slopes,
            tangents,
        })
    }

    fn at(&self, t: Component) -> Component {
        let n = self.points.len() - 1;
        let i = self
            .points
            .partition_point(|(x, _)| *x <= t)
            .saturating_sub(1)
            .min(n - 1);

        let (x, y) = self.points[i];
        let offset = t - x;
        if offset == 0.0 {
            return y;
        }

        let width = self.points[i + 1].0 - x;
        let (slope, from, to) = (self.slopes[i], self.tangents[i], self.tangents[i + 1]);
        let a = (from + to - 2.0 * slope) / (width * width);
        let b = (3.0 * slope - 2.0 * from - to) / width;
        let value = ((a * offset + b) * offset + from) * offset + y;

        if value.is_finite() {
            value
        } else {
            linear_channel_at(self.points, t)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, packed::RgbInt};

    fn hsl(hue: Component) -> Color {
        Color::new(Space::Hsl, hue, 0.5, 0.5, None)
    }

    #[test]
    fn basic() {
        let left = Color::new(Space::Srgb, 0.1, 0.2, 0.3, 1.0);
        let right = Color::new(Space::Srgb, 0.5, 0.6, 0.7, 1.0);
        let mixed = left.lerp(&right, 0.5);
        assert_component_eq!(mixed.values()[0], 0.3);
        assert_component_eq!(mixed.values()[1], 0.4);
        assert_component_eq!(mixed.values()[2], 0.5);
        assert_eq!(mixed.alpha(), Some(1.0));
        assert_eq!(mixed.space(), Space::Srgb);
    }

    #[test]
    fn red_to_blue() {
        let red = Color::new(Space::Srgb, 1.0, 0.0, 0.0, None);
        let blue = Color::new(Space::Srgb, 0.0, 0.0, 1.0, None);
        assert_eq!(red.lerp(&blue, 0.5).values(), &[0.5, 0.0, 0.5]);
    }

    #[test]
    fn endpoints_are_exact() {
        let polar = Space::ALL
            .into_iter()
            .filter_map(|space| Some((space, space.descriptor().hue_index()?)));

        for (space, hue_index) in polar {
            let color = |values: [Component; MAX_COMPONENTS], hue, alpha| {
                let mut values = values.map(Some);
                values[hue_index] = Some(hue);
                Color::from_values(space, &values[..space.component_count()], Some(alpha))
            };
            let a = color([0.7, 0.1, 0.3, 0.2], 370.0, 0.25);
            let b = color([0.3, 0.2, 0.6, 0.1], 120.3, 0.75);

            for premultiplied in [false, true] {
                let interpolation = a.interpolate(&b, space).premultiplied(premultiplied);
                assert_eq!(interpolation.at(0.0), a, "{space}");
                assert_eq!(interpolation.at(1.0), b, "{space}");
            }
        }
    }

    #[test]
    fn shorter_hue_wraps_around() {
        assert_eq!(hsl(10.0).lerp(&hsl(350.0), 0.5).c0(), Some(0.0));
        assert_eq!(hsl(350.0).lerp(&hsl(10.0), 0.5).c0(), Some(0.0));
        assert_component_eq!(hsl(350.0).lerp(&hsl(10.0), 0.25).values()[0], 355.0);
    }

    #[test]
    fn half_turn_goes_up() {
        assert_eq!(hsl(0.0).lerp(&hsl(180.0), 0.5).c0(), Some(90.0));
        assert_eq!(hsl(180.0).lerp(&hsl(0.0), 0.5).c0(), Some(270.0));
    }

    #[test]
    fn hue_interpolation_methods() {
        // (from, to, expected midpoint) for each method.
        let cases = [
            (HueInterpolation::Shorter, [(0.0, 300.0, 330.0), (300.0, 50.0, 355.0)]),
            (HueInterpolation::Longer, [(0.0, 300.0, 150.0), (50.0, 0.0, 205.0)]),
            (HueInterpolation::Increasing, [(0.0, 300.0, 150.0), (300.0, 50.0, 355.0)]),
            (HueInterpolation::Decreasing, [(0.0, 300.0, 330.0), (50.0, 100.0, 255.0)]),
            (HueInterpolation::Specified, [(0.0, 300.0, 150.0), (300.0, 50.0, 175.0)]),
        ];

        for (method, pairs) in cases {
            for (from, to, expected) in pairs {
                let mixed = hsl(from)
                    .interpolate(&hsl(to), Space::Hsl)
                    .hue_interpolation(method)
                    .at(0.5);
                assert_component_eq!(mixed.values()[0], expected);
            }
        }
    }

    #[test]
    fn hue_is_only_adjusted_in_polar_spaces() {
        let a = Color::new(Space::Srgb, 0.0, 0.2, 0.9, None);
        let b = Color::new(Space::Srgb, 0.8, 0.2, 0.1, None);
        let mixed = a
            .interpolate(&b, Space::Srgb)
            .hue_interpolation(HueInterpolation::Decreasing)
            .at(0.5);
        assert_component_eq!(mixed.values()[0], 0.4);
        assert_component_eq!(mixed.values()[2], 0.5);
    }

    #[test]
    fn missing_components_take_the_other_side() {
        let gray = Color::new(Space::Oklch, 0.5, 0.0, None, None);
        let blue = Color::new(Space::Oklch, 0.4, 0.2, 264.0, None);

        let mixed = gray.lerp(&blue, 0.5);
        assert_eq!(mixed.c2(), Some(264.0));
        assert_component_eq!(mixed.values()[0], 0.45);

        let both = gray.lerp(&gray.with_alpha(0.5), 0.5);
        assert_eq!(both.c2(), None);
    }

    #[test]
    fn one_sided_components_are_kept() {
        let gray = Color::new(Space::Oklch, 0.5, 0.0, None, 0.2);
        let blue = Color::new(Space::Oklch, 0.4, 0.2, 264.123456789, 0.9);

        for t in [0.3, 0.1, 0.9] {
            assert_eq!(gray.lerp(&blue, t).c2(), Some(264.123456789));
            let premultiplied = gray.interpolate(&blue, Space::Oklch).at(t);
            assert_eq!(premultiplied.c2(), Some(264.123456789));
        }
    }

    #[test]
    fn alpha() {
        let a = Color::new(Space::Srgb, 0.0, 0.0, 0.0, 0.2);
        let b = Color::new(Space::Srgb, 1.0, 1.0, 1.0, 0.6);
        let none = Color::new(Space::Srgb, 1.0, 1.0, 1.0, None);

        assert_component_eq!(a.lerp(&b, 0.5).alpha().unwrap(), 0.4);
        assert_eq!(a.lerp(&none, 0.5).alpha(), Some(0.2));
        assert_eq!(none.lerp(&a, 0.5).alpha(), Some(0.2));
        assert_eq!(none.lerp(&none, 0.5).alpha(), None);
    }

    #[test]
    fn one_sided_alpha_is_kept() {
        let with = |alpha| Color::new(Space::Srgb, 0.2, 0.4, 0.6, alpha);
        let none = Color::new(Space::Srgb, 0.8, 0.6, 0.4, None);

        assert_eq!(with(0.1).lerp(&none, 0.3).alpha(), Some(0.1));
        assert_eq!(none.lerp(&with(0.3), 0.1).alpha(), Some(0.3));
        assert_eq!(with(0.123456789).lerp(&none, 0.9).alpha(), Some(0.123456789));

        let premultiplied = none.interpolate(&with(0.123456789), Space::Srgb).at(0.9);
        assert_eq!(premultiplied.alpha(), Some(0.123456789));
    }

    #[test]
    fn extrapolation() {
        let a = Color::new(Space::Srgb, 0.2, 0.4, 0.6, 0.5);
        let b = Color::new(Space::Srgb, 0.4, 0.5, 0.6, 1.0);

        let beyond = a.lerp(&b, 2.0);
        assert_component_eq!(beyond.values()[0], 0.6);
        assert_component_eq!(beyond.values()[1], 0.6);
        assert_component_eq!(beyond.values()[2], 0.6);
        assert_eq!(beyond.alpha(), Some(1.5));

        let before = a.lerp(&b, -1.0);
        assert_component_eq!(before.values()[0], 0.0);
        assert_eq!(before.alpha(), Some(0.0));

        let far = a.lerp(&b, -2.0);
        assert_eq!(far.alpha(), Some(-0.5));
    }

    #[test]
    fn premultiplied() {
        let red = Color::new(Space::Srgb, 1.0, 0.0, 0.0, 1.0);
        let clear_blue = Color::new(Space::Srgb, 0.0, 0.0, 1.0, 0.0);

        let plain = red.lerp(&clear_blue, 0.5);
        assert_eq!(plain.values(), &[0.5, 0.0, 0.5]);

        let plain = red
            .interpolate(&clear_blue, Space::Srgb)
            .premultiplied(false)
            .at(0.5);
        assert_eq!(plain.values(), &[0.5, 0.0, 0.5]);

        // Premultiplied is the default.
        let mixed = red.interpolate(&clear_blue, Space::Srgb).at(0.5);
        assert_eq!(mixed.values(), &[1.0, 0.0, 0.0]);
        assert_eq!(mixed.alpha(), Some(0.5));

        let gradient = Gradient::new(Space::Srgb, [red.clone(), clear_blue.clone()]);
        assert_eq!(gradient.at(0.5), Some(mixed));
    }

    #[test]
    fn interpolation_easing() {
        let black = Color::new(Space::Srgb, 0.0, 0.0, 0.0, None);
        let white = Color::new(Space::Srgb, 1.0, 1.0, 1.0, None);
        let interpolation = black
            .interpolate(&white, Space::Srgb)
            .easing(Easing::Midpoint(0.2));

        assert_component_eq!(interpolation.at(0.1).values()[0], 0.25);
        assert_component_eq!(interpolation.at(0.6).values()[0], 0.75);
        assert_eq!(interpolation.at(1.0), white);
    }

    #[test]
    fn interpolates_in_the_requested_space() {
        let red = Color::new(Space::Srgb, 1.0, 0.0, 0.0, None);
        let blue = Color::new(Space::Srgb, 0.0, 0.0, 1.0, None);

        let interpolation = red.interpolate(&blue, Space::Oklab);
        assert_eq!(interpolation.space(), Space::Oklab);

        let mixed = interpolation.at(0.5);
        let expected = red.to_space(Space::Oklab).lerp(&blue.to_space(Space::Oklab), 0.5);
        assert_eq!(mixed, expected);
    }

    #[test]
    fn gradient_is_restartable() {
        let red = Color::new(Space::Srgb, 1.0, 0.0, 0.0, None);
        let blue = Color::new(Space::Srgb, 0.0, 0.0, 1.0, None);
        let interpolation = red.interpolate(&blue, Space::Oklch);

        let gradient = interpolation.gradient([0.0, 0.25, 0.5, 0.75, 1.0]);
        let first = gradient.clone().collect::<Vec<_>>();
        let second = gradient.collect::<Vec<_>>();

        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
        assert_eq!(first[0], red.to_space(Space::Oklch));
        assert_eq!(first[2], interpolation.at(0.5));
    }

    #[test]
    fn gradient_stops() {
        let gradient = Gradient::new(Space::Hsl, [0.0, 300.0, 50.0, 0.0, 100.0].map(hsl))
            .hue_interpolation(HueInterpolation::Increasing);

        let hues = gradient
            .steps(9)
            .map(|color| color.values()[0])
            .collect::<Vec<_>>();
        let expected = [0.0, 150.0, 300.0, 355.0, 50.0, 205.0, 0.0, 50.0, 100.0];
        assert_eq!(hues.len(), expected.len());
        for (hue, expected) in hues.into_iter().zip(expected) {
            assert_component_eq!(hue, expected);
        }
    }

    #[test]
    fn gradient_positions() {
        let black = Color::new(Space::Srgb, 0.0, 0.0, 0.0, None);
        let white = Color::new(Space::Srgb, 1.0, 1.0, 1.0, None);
        let red = Color::new(Space::Srgb, 1.0, 0.0, 0.0, None);

        // The red stop is moved up to 0.5.
        let gradient = Gradient::with_positions(
            Space::Srgb,
            [(0.2, black.clone()), (0.5, white.clone()), (0.3, red.clone())],
        );

        assert_eq!(gradient.at(0.0), Some(black.clone()));
        assert_eq!(gradient.at(0.1), Some(black));
        assert_component_eq!(gradient.at(0.35).unwrap().values()[1], 0.5);
        assert_eq!(gradient.at(0.6), Some(red.clone()));
        assert_eq!(gradient.at(1.5), Some(red));
    }

    #[test]
    fn empty_gradient() {
        let gradient = Gradient::new(Space::Srgb, []);
        assert_eq!(gradient.at(0.5), None);
        assert_eq!(gradient.steps(4).count(), 0);
    }

    #[test]
    fn single_stop_gradient() {
        let red = Color::new(Space::Srgb, 1.0, 0.0, 0.0, None);
        let gradient = Gradient::new(Space::Oklab, [red.clone()]);
        assert_eq!(gradient.at(0.7), Some(red.to_space(Space::Oklab)));
        assert_eq!(gradient.steps(3).count(), 3);
    }

    #[test]
    fn nan_position_takes_the_first_stop() {
        let red = Color::new(Space::Srgb, 1.0, 0.0, 0.0, None);
        let blue = Color::new(Space::Srgb, 0.0, 0.0, 1.0, None);

        let single = Gradient::new(Space::Srgb, [red.clone()]);
        assert_eq!(single.at(Component::NAN), Some(red.clone()));

        let spline = Gradient::new(Space::Srgb, [red.clone(), blue.clone(), red.clone()])
            .method(InterpolationMethod::MonotoneSpline {
                parabolic_endpoints: false,
            });
        assert_eq!(spline.at(Component::NAN), Some(red.clone()));

        let linear = Gradient::new(Space::Srgb, [red.clone(), blue]);
        assert_eq!(linear.at(Component::NAN), Some(red));
    }

    fn hex(s: &str) -> Color {
        s.parse::<RgbInt>().unwrap().to_color()
    }

    fn to_hex(color: Option<Color>) -> String {
        RgbInt::from_color(&color.unwrap()).to_hex(false)
    }

    #[test]
    fn stops_at_the_same_position() {
        let gradient = Gradient::with_positions(
            Space::Srgb,
            [
                (0.1, hex("#111")),
                (0.2, hex("#333")),
                (0.8, hex("#333")),
                (0.8, hex("#555")),
            ],
        );

        assert_eq!(to_hex(gradient.at(0.15)), "#222222");
        assert_eq!(to_hex(gradient.at(0.5)), "#333333");
        assert_eq!(to_hex(gradient.at(0.8)), "#555555");
        assert_eq!(to_hex(gradient.at(0.9)), "#555555");
    }

    #[test]
    fn stop_easing_applies_to_the_following_segment() {
        let gradient = Gradient::new(Space::Srgb, ["#000", "#800", "#888"].map(hex))
            .stop_easing(1, Easing::Midpoint(0.2));

        assert_eq!(to_hex(gradient.at(0.25)), "#440000");
        assert_eq!(to_hex(gradient.at(0.55)), "#882222");
        assert_eq!(to_hex(gradient.at(0.6)), "#884444");
        assert_eq!(to_hex(gradient.at(0.8)), "#886666");
    }

    #[test]
    fn gradient_easing_is_overridden_per_stop() {
        let gradient = Gradient::new(Space::Srgb, ["#000", "#888", "#000"].map(hex))
            .easing(Easing::Midpoint(0.2))
            .stop_easing(1, Easing::Linear)
            .stop_easing(7, Easing::EASE);

        assert_eq!(to_hex(gradient.at(0.1)), "#444444");
        assert_eq!(to_hex(gradient.at(0.75)), "#444444");
    }

    fn spline(parabolic_endpoints: bool) -> Gradient {
        Gradient::new(Space::Srgb, ["#000", "#bbb", "#444", "#fff", "#888"].map(hex)).method(
            InterpolationMethod::MonotoneSpline {
                parabolic_endpoints,
            },
        )
    }

    #[test]
    fn monotone_spline() {
        let expected = [
            (0.05, 0.17013, 0.24693),
            (0.1, 0.36373, 0.45013),
            (0.15, 0.5456, 0.6032),
            (0.2, 0.68053, 0.69973),
            (0.4, 0.43093, 0.43093),
            (0.5, 0.26667, 0.26667),
            (0.6, 0.5248, 0.5248),
            (0.8, 0.9664, 0.98133),
            (1.0, 0.53333, 0.53333),
        ];

        for (t, default, parabolic) in expected {
            let color = spline(false).at(t).unwrap();
            assert_component_eq!(color.values()[0], default, 1.0e-5);
            assert_component_eq!(color.values()[2], default, 1.0e-5);
            assert_eq!(color.alpha(), Some(1.0));

            let color = spline(true).at(t).unwrap();
            assert_component_eq!(color.values()[1], parabolic, 1.0e-5);
        }
    }

    #[test]
    fn monotone_spline_with_uneven_stops() {
        let gradient = Gradient::with_positions(
            Space::Srgb,
            [
                (0.1, hex("#000")),
                (0.2, hex("#444")),
                (0.4, hex("#222")),
                (0.9, hex("#aaa")),
            ],
        )
        .method(InterpolationMethod::MonotoneSpline {
            parabolic_endpoints: false,
        });

        let expected = [
            (0.0, 0.26666662),
            (0.15, 0.16666669),
            (0.3, 0.2),
            (0.5, 0.17173335),
            (1.0, 0.7477335),
        ];
        for (t, value) in expected {
            assert_component_eq!(gradient.at(t).unwrap().values()[0], value, 1.0e-6);
        }
    }

    #[test]
    fn monotone_spline_with_two_stops_is_linear() {
        let gradient = Gradient::new(Space::Srgb, ["#000", "#fff"].map(hex)).method(
            InterpolationMethod::MonotoneSpline {
                parabolic_endpoints: true,
            },
        );
        assert_component_eq!(gradient.at(0.25).unwrap().values()[0], 0.25);
        assert_eq!(gradient.at(1.5).unwrap().values()[0], 1.0);
    }

    #[test]
    fn monotone_spline_with_missing_hues() {
        let gradient = Gradient::with_positions(
            Space::Oklch,
            [
                (0.0, Color::new(Space::Oklch, 0.5, 0.0, None, None)),
                (0.4, Color::new(Space::Oklch, 0.5, 0.1, 80.0, None)),
                (0.5, Color::new(Space::Oklch, 0.5, 0.1, 200.0, None)),
                (0.6, Color::new(Space::Oklch, 0.5, 0.1, 100.0, None)),
                (1.0, Color::new(Space::Oklch, 0.5, 0.0, None, None)),
            ],
        )
        .method(InterpolationMethod::MonotoneSpline {
            parabolic_endpoints: false,
        });

        assert_eq!(gradient.at(0.1).unwrap().c2(), Some(80.0));
        assert_eq!(gradient.at(0.5).unwrap().c2(), Some(200.0));
        assert_component_eq!(gradient.at(0.8).unwrap().values()[2], 100.0, 1.0e-9);
    }

    #[test]
    fn monotone_spline_unwraps_hues() {
        let gradient = Gradient::new(Space::Hsl, [350.0, 10.0, 30.0].map(hsl)).method(
            InterpolationMethod::MonotoneSpline {
                parabolic_endpoints: false,
            },
        );

        // The hues run 350, 370, 390 on a straight line.
        assert_component_eq!(gradient.at(0.25).unwrap().values()[0], 0.0);
        assert_component_eq!(gradient.at(0.75).unwrap().values()[0], 20.0);
    }

    #[test]
    fn premultiplied_spline_keeps_a_constant_color() {
        let gradient = Gradient::new(
            Space::Srgb,
            [1.0, 0.2, 0.9, 0.5].map(|alpha| Color::new(Space::Srgb, 1.0, 0.0, 0.5, alpha)),
        )
        .method(InterpolationMethod::MonotoneSpline {
            parabolic_endpoints: false,
        });

        for t in [0.1, 0.5, 0.9] {
            let color = gradient.at(t).unwrap();
            assert_component_eq!(color.values()[0], 1.0, 1.0e-12);
            assert_component_eq!(color.values()[1], 0.0, 1.0e-12);
            assert_component_eq!(color.values()[2], 0.5, 1.0e-12);
        }
    }
}
