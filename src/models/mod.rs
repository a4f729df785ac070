//! Each color space/form is modeled with its own type. Conversions are only
//! implemented on relevant models, making conversion paths accurate and
//! performant.
//!
//! Conversions only operate on the color components (no alpha, missing
//! components).
//!
//! NOTE: When a conversion yields a NaN value, the component is powerless and
//!       is treated as missing once the model becomes a [`Color`].
//! NOTE: The reverse is not the same. A missing component of a [`Color`]
//!       reaches a model as 0.0.
//!
//! ```rust
//! use chromata::models::{Connect, Lab, Srgb};
//! let blue_in_lch = Lab::from_xyz(
//!     &Srgb::new(0.0, 0.0, 1.0)
//!         .to_xyz()               // convert to xyz-d65.
//!         .transfer(),            // adapt to xyz-d50.
//! )
//! .to_polar();                    // convert to lch.
//! ```

use crate::color::{Color, Component};

mod cmyk;
mod hsl;
mod hsluv;
mod ictcp;
mod jzazbz;
mod lab;
mod luv;
mod oklab;
mod rgb;
mod xyy;
mod xyz;

pub use cmyk::Cmyk;
pub use hsl::{Hsl, Hsv, Hwb};
pub use hsluv::{Hpluv, Hsluv};
pub use ictcp::ICtCp;
pub use jzazbz::{JzAzBz, JzCzHz};
pub use lab::{tag as opponent, Lab, Lch, OpponentSpace, Polar, Rectangular};
pub use luv::{LchUv, Luv};
pub use oklab::{Oklab, Oklch};
pub use rgb::{
    encoding, primaries_to_xyz, space as rgb_space, A98Rgb, A98RgbLinear, Aces2065, AcesCc,
    AcesCct, AcesCg, Bt709, DciP3, DisplayP3, DisplayP3Linear, ProPhotoRgb, ProPhotoRgbLinear,
    Rec2020, Rec2020Linear, Rgb, RgbSpace, Srgb, SrgbLinear, TransferFunction,
};
pub use xyy::XyY;
pub use xyz::{Aces, Dci, Reference, Xyz, XyzD50, XyzD65, D50, D65};

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model: Sized {
    /// Convert a model to a generic [`Color`].
    fn to_color(&self, alpha: Option<Component>) -> Color;

    /// Read the components of a generic [`Color`] into this model. The caller
    /// makes sure the color is in the model's space.
    fn from_color(color: &Color) -> Self;
}

/// The two edges every model defines to reach any other model: to CIE-XYZ
/// and back, relative to the model's own reference white.
pub trait Connect: Sized {
    /// The reference white of the XYZ values this model converts through.
    type White: Reference;

    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz<Self::White>;

    /// Convert a CIE-XYZ color to this model.
    fn from_xyz(xyz: &Xyz<Self::White>) -> Self;
}
