//! chromata provides color models and the conversions between them, along
//! with gamut handling, interpolation, color difference and contrast.
//!
//! A [`Color`] holds the components of a color in any [`Space`]. Converting
//! between spaces goes through CIE-XYZ, adapting the reference white where
//! needed, unless a shorter path exists (HSL to sRGB, Lab to LCH, ...).
//!
//! ```rust
//! use chromata::{Color, Space};
//!
//! let chocolate = Color::new(Space::Srgb, 0.8235, 0.4118, 0.1176, 1.0);
//! let oklch = chocolate.to_space(Space::Oklch);
//! assert_eq!(oklch.space(), Space::Oklch);
//!
//! let parsed: Color = "oklch(62% 0.2 40)".parse().unwrap();
//! assert_eq!(parsed.to_string(), "oklch(62% 0.2 40)");
//! ```

#![deny(missing_docs)]

mod color;
mod contrast;
mod convert;
mod css;
mod difference;
mod easing;
mod error;
mod gamut;
mod interpolate;
pub mod math;
pub mod models;
mod packed;
mod space;
pub mod white_point;

pub use color::{Color, Component, ComponentDetails, Components, Flags, MAX_COMPONENTS};
pub use css::{AngleUnit, CssFormat, RenderCondition};
pub use difference::Cie94Weights;
pub use easing::{CubicBezier, Easing};
pub use error::{Error, Result};
pub use interpolate::{Gradient, HueInterpolation, Interpolation, InterpolationMethod};
pub use packed::RgbInt;
pub use space::{ComponentInfo, Descriptor, HasSpace, Space};
pub use white_point::{adapt, adaptation_matrix, Chromaticity, WhitePoint};
