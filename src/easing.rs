//! Easing functions that reshape the progress between two gradient stops.
//! <https://drafts.csswg.org/css-easing-1/>

use crate::{
    color::Component,
    error::{Error, Result},
};

/// Maps the progress `t` through a transition to an eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Progress is left unchanged.
    #[default]
    Linear,
    /// Move the halfway point of the transition to the given progress, the
    /// way a color hint does in CSS gradients.
    Midpoint(Component),
    /// A CSS `cubic-bezier()` curve.
    CubicBezier(CubicBezier),
}

impl Easing {
    /// CSS `ease`.
    pub const EASE: Self = Self::CubicBezier(CubicBezier::new_unchecked(0.25, 0.1, 0.25, 1.0));
    /// CSS `ease-in`.
    pub const EASE_IN: Self = Self::CubicBezier(CubicBezier::new_unchecked(0.42, 0.0, 1.0, 1.0));
    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::CubicBezier(CubicBezier::new_unchecked(0.0, 0.0, 0.58, 1.0));
    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: Self =
        Self::CubicBezier(CubicBezier::new_unchecked(0.42, 0.0, 0.58, 1.0));

    /// A cubic bezier easing. Fails if `x1` or `x2` is outside `[0, 1]`.
    pub fn cubic_bezier(
        x1: Component,
        y1: Component,
        x2: Component,
        y2: Component,
    ) -> Result<Self> {
        CubicBezier::new(x1, y1, x2, y2).map(Self::CubicBezier)
    }

    /// The eased progress at `t`.
    pub fn ease(&self, t: Component) -> Component {
        match self {
            Self::Linear => t,
            Self::Midpoint(position) => midpoint(*position, t),
            Self::CubicBezier(curve) => curve.ease(t),
        }
    }
}

fn midpoint(position: Component, t: Component) -> Component {
    if position <= 0.0 {
        1.0
    } else if position >= 1.0 {
        0.0
    } else if t <= position {
        t / position / 2.0
    } else {
        0.5 + (t - position) / (1.0 - position) / 2.0
    }
}

/// A cubic bezier curve from `(0, 0)` to `(1, 1)` with two control points.
/// <https://drafts.csswg.org/css-easing-1/#cubic-bezier-easing-functions>
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier {
    x1: Component,
    y1: Component,
    x2: Component,
    y2: Component,
}

impl CubicBezier {
    const EPSILON: Component = 1.0e-7;
    const NEWTON_ITERATIONS: usize = 5;
    const BISECTION_ITERATIONS: usize = 64;

    const fn new_unchecked(x1: Component, y1: Component, x2: Component, y2: Component) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a curve with control points `(x1, y1)` and `(x2, y2)`.
    pub fn new(x1: Component, y1: Component, x2: Component, y2: Component) -> Result<Self> {
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            tracing::debug!(x1, x2, "cubic bezier control points out of range");
            return Err(Error::InvalidCubicBezier { x1, x2 });
        }
        Ok(Self::new_unchecked(x1, y1, x2, y2))
    }

    /// Polynomial coefficients `(a, b, c)` of `a*t^3 + b*t^2 + c*t` for one
    /// axis.
    fn coefficients(p1: Component, p2: Component) -> (Component, Component, Component) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        (1.0 - c - b, b, c)
    }

    fn sample(p1: Component, p2: Component, t: Component) -> Component {
        let (a, b, c) = Self::coefficients(p1, p2);
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative_x(&self, t: Component) -> Component {
        let (a, b, c) = Self::coefficients(self.x1, self.x2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Find the curve parameter where the x coordinate is `x`.
    fn solve_x(&self, x: Component) -> Component {
        let mut t = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < Self::EPSILON {
                return t;
            }
            let derivative = self.sample_derivative_x(t);
            if derivative.abs() < 1.0e-6 {
                break;
            }
            t -= error / derivative;
        }

        // Newton did not converge, fall back to bisection.
        let (mut lo, mut hi, mut t) = (0.0, 1.0, x);
        for _ in 0..Self::BISECTION_ITERATIONS {
            let sampled = Self::sample(self.x1, self.x2, t);
            if (sampled - x).abs() < Self::EPSILON {
                break;
            }
            if x > sampled {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// The eased progress at `x`. Outside `[0, 1]` the curve continues along
    /// the tangent at the nearest end.
    pub fn ease(&self, x: Component) -> Component {
        let Self { x1, y1, x2, y2 } = *self;

        if x < 0.0 {
            return if x1 > 0.0 {
                y1 / x1 * x
            } else if x2 > 0.0 {
                y2 / x2 * x
            } else {
                0.0
            };
        }

        if x > 1.0 {
            return if x2 < 1.0 {
                1.0 + (y2 - 1.0) / (x2 - 1.0) * (x - 1.0)
            } else if x1 < 1.0 {
                1.0 + (y1 - 1.0) / (x1 - 1.0) * (x - 1.0)
            } else {
                1.0
            };
        }

        Self::sample(y1, y2, self.solve_x(x))
    }
}
