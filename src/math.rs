//! Scalar and matrix helpers shared by every color model.
//!
//! The functions here are implemented once for both storage precisions so
//! that the `f32` and `f64` builds round the same way.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 matrix stored in a 4x4 transform. Only the upper-left 3x3 block is
/// ever used.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Values closer to zero than this are treated as zero.
#[cfg(not(feature = "f32"))]
const EPSILON: Component = 1.0e-7;
#[cfg(feature = "f32")]
const EPSILON: Component = 1.0e-4;

/// Create a transform from a 3x3 matrix where each row holds the
/// contributions of one input component to the three outputs.
#[allow(clippy::too_many_arguments)]
#[inline]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Create a transform from a matrix written in the usual mathematical
/// notation, where `m[row]` produces output component `row`.
pub const fn matrix(m: [[Component; 3]; 3]) -> Transform {
    transform_3x3(
        m[0][0], m[1][0], m[2][0], //
        m[0][1], m[1][1], m[2][1], //
        m[0][2], m[1][2], m[2][2],
    )
}

/// Multiply the given matrix with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(
        components.0,
        components.1,
        components.2,
    ));
    Components(x, y, z)
}

/// The real cube root of `x`, including negative values.
///
/// `libm` is used so the result does not depend on the platform's math
/// library.
#[cfg(not(feature = "f32"))]
#[inline]
pub fn cbrt(x: Component) -> Component {
    libm::cbrt(x)
}

/// The real cube root of `x`, including negative values.
#[cfg(feature = "f32")]
#[inline]
pub fn cbrt(x: Component) -> Component {
    libm::cbrtf(x)
}

/// Bound `value` to `[min, max]`. NaN is mapped to `min`.
pub fn clamp(value: Component, min: Component, max: Component) -> Component {
    if value.is_nan() || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Map any angle in degrees into `[0, 360)`.
pub fn wrap_degrees(degrees: Component) -> Component {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the divisor for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Returns true if the value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < EPSILON
}

/// Replace NaN with 0.0. Powerless or missing components take part in
/// calculations as zero.
pub fn normalize(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// NaN is how conversions report a powerless component, so it becomes a
/// missing component when a model is turned into a color.
pub fn nan_to_none(value: Component) -> Option<Component> {
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

/// Raise the magnitude of `value` to `power`, keeping its sign.
pub fn spow(value: Component, power: Component) -> Component {
    value.signum() * value.abs().powf(power)
}

/// Linear interpolation that returns `a` at `t == 0` and `b` at `t == 1`
/// exactly.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

/// Convert rectangular opponent axes into chroma and hue. The hue is NaN
/// (powerless) when there is no chroma.
pub fn to_polar(a: Component, b: Component) -> (Component, Component) {
    let chroma = (a * a + b * b).sqrt();
    let hue = if almost_zero(chroma) {
        Component::NAN
    } else {
        wrap_degrees(b.atan2(a).to_degrees())
    };
    (chroma, hue)
}

/// Convert chroma and hue back into rectangular opponent axes. A powerless
/// hue is treated as 0.
pub fn from_polar(chroma: Component, hue: Component) -> (Component, Component) {
    let hue = normalize(hue).to_radians();
    (chroma * hue.cos(), chroma * hue.sin())
}
