//! Model a color in the CIE-XYZ color space.

use crate::{
    color::{Component, HasSpace, Space},
    models::Connect,
    white_point::{self, WhitePoint},
};

/// Type level tag for the reference white of a model.
pub trait Reference: Clone + std::fmt::Debug {
    /// The reference white.
    const WHITE_POINT: WhitePoint;
}

/// CIE-XYZ color with a D50 white point reference.
#[derive(Clone, Debug)]
pub struct D50;

impl Reference for D50 {
    const WHITE_POINT: WhitePoint = WhitePoint::D50;
}

/// CIE-XYZ color with a D65 white point reference.
#[derive(Clone, Debug)]
pub struct D65;

impl Reference for D65 {
    const WHITE_POINT: WhitePoint = WhitePoint::D65;
}

/// CIE-XYZ color relative to the ACES white.
#[derive(Clone, Debug)]
pub struct Aces;

impl Reference for Aces {
    const WHITE_POINT: WhitePoint = WhitePoint::Aces;
}

/// CIE-XYZ color relative to the DCI projector white.
#[derive(Clone, Debug)]
pub struct Dci;

impl Reference for Dci {
    const WHITE_POINT: WhitePoint = WhitePoint::Dci;
}

chromata_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a specified white point reference.
    pub struct Xyz<W: Reference> {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl<W: Reference> Xyz<W> {
    /// Adapt this color to a different reference white.
    pub fn transfer<T: Reference>(&self) -> Xyz<T> {
        white_point::adapt(self.to_components(), W::WHITE_POINT, T::WHITE_POINT).into()
    }
}

impl<W: Reference> Connect for Xyz<W> {
    type White = W;

    fn to_xyz(&self) -> Xyz<W> {
        self.clone()
    }

    fn from_xyz(xyz: &Xyz<W>) -> Self {
        xyz.clone()
    }
}

/// Model for a color in the CIE-XYZ color space with a D50 white point.
pub type XyzD50 = Xyz<D50>;

impl HasSpace for XyzD50 {
    const SPACE: Space = Space::XyzD50;
}

/// Model for a color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;

impl HasSpace for XyzD65 {
    const SPACE: Space = Space::XyzD65;
}
