//! Reference whites and chromatic adaptation between them.

use std::sync::LazyLock;

use crate::{
    color::{Component, Components},
    math::{matrix, transform, Transform},
};

/// CIE 1931 xy chromaticity coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chromaticity {
    /// The x coordinate.
    pub x: Component,
    /// The y coordinate.
    pub y: Component,
}

impl Chromaticity {
    /// Create new chromaticity coordinates.
    pub const fn new(x: Component, y: Component) -> Self {
        Self { x, y }
    }

    /// Tristimulus values for this chromaticity, normalized to `Y = 1`.
    pub fn to_xyz(&self) -> Components {
        Components(self.x / self.y, 1.0, (1.0 - self.x - self.y) / self.y)
    }
}

/// Named standard illuminants used as reference whites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WhitePoint {
    /// Incandescent / tungsten.
    A,
    /// Direct sunlight at noon (obsolete).
    B,
    /// Average north sky daylight (obsolete).
    C,
    /// Horizon light, used by ICC profiles, CIE Lab and ProPhoto RGB.
    D50,
    /// Mid-morning / mid-afternoon daylight.
    D55,
    /// Noon daylight, used by sRGB and most display spaces.
    D65,
    /// North sky daylight.
    D75,
    /// Equal energy.
    E,
    /// The white of the ACES color spaces, close to D60.
    Aces,
    /// The projector white of DCI-P3.
    Dci,
}

impl WhitePoint {
    /// Every named white point.
    pub const ALL: [WhitePoint; 10] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D50,
        Self::D55,
        Self::D65,
        Self::D75,
        Self::E,
        Self::Aces,
        Self::Dci,
    ];

    /// The chromaticity of the illuminant for the CIE 1931 2° observer.
    pub const fn chromaticity(self) -> Chromaticity {
        match self {
            Self::A => Chromaticity::new(0.44758, 0.40745),
            Self::B => Chromaticity::new(0.34842, 0.35161),
            Self::C => Chromaticity::new(0.31006, 0.31616),
            Self::D50 => Chromaticity::new(0.3457, 0.3585),
            Self::D55 => Chromaticity::new(0.33243, 0.34744),
            Self::D65 => Chromaticity::new(0.3127, 0.3290),
            Self::D75 => Chromaticity::new(0.29903, 0.31488),
            Self::E => Chromaticity::new(1.0 / 3.0, 1.0 / 3.0),
            Self::Aces => Chromaticity::new(0.32168, 0.33767),
            Self::Dci => Chromaticity::new(0.314, 0.351),
        }
    }

    /// The tristimulus values of the white, normalized to `Y = 1`.
    pub fn xyz(self) -> Components {
        self.chromaticity().to_xyz()
    }

    /// The conventional name of the illuminant.
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D65 => "D65",
            Self::D75 => "D75",
            Self::E => "E",
            Self::Aces => "ACES",
            Self::Dci => "DCI",
        }
    }
}

impl std::fmt::Display for WhitePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// XYZ to cone response domain.
static BRADFORD: Transform = matrix([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

static BRADFORD_INVERSE: LazyLock<Transform> = LazyLock::new(|| {
    BRADFORD
        .inverse()
        .expect("the Bradford cone response matrix is invertible")
});

/// The Bradford matrix that maps tristimulus values relative to `from` onto
/// values relative to `to`.
pub fn adaptation_matrix(from: WhitePoint, to: WhitePoint) -> Transform {
    let source = transform(&BRADFORD, from.xyz());
    let destination = transform(&BRADFORD, to.xyz());

    let scale = Transform::scale(
        destination.0 / source.0,
        destination.1 / source.1,
        destination.2 / source.2,
    );

    BRADFORD.then(&scale).then(&BRADFORD_INVERSE)
}

/// Adapt tristimulus values from one reference white to another. Nothing is
/// calculated when the whites are the same.
pub fn adapt(xyz: Components, from: WhitePoint, to: WhitePoint) -> Components {
    if from == to {
        return xyz;
    }

    tracing::trace!(%from, %to, "chromatic adaptation");
    transform(&adaptation_matrix(from, to), xyz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn adapting_to_the_same_white_is_identity() {
        let xyz = Components(0.123456789, 0.987654321, 1.5e-9);
        for white in WhitePoint::ALL {
            assert_eq!(adapt(xyz, white, white), xyz);
        }
    }

    #[test]
    fn white_points_match_css_values() {
        let d50 = WhitePoint::D50.xyz();
        assert_component_eq!(d50.0, 0.9642956764295677, 1.0e-12);
        assert_component_eq!(d50.2, 0.8251046025104602, 1.0e-12);

        let d65 = WhitePoint::D65.xyz();
        assert_component_eq!(d65.0, 0.9504559270516716, 1.0e-12);
        assert_component_eq!(d65.2, 1.0890577507598784, 1.0e-12);

        let a = WhitePoint::A.xyz();
        assert_component_eq!(a.0, 1.0985, 1.0e-4);
        assert_component_eq!(a.2, 0.3558, 1.0e-4);
    }

    #[test]
    fn white_maps_onto_white() {
        for from in WhitePoint::ALL {
            for to in WhitePoint::ALL {
                let adapted = adapt(from.xyz(), from, to);
                let expected = to.xyz();
                assert_component_eq!(adapted.0, expected.0, 1.0e-9);
                assert_component_eq!(adapted.1, expected.1, 1.0e-9);
                assert_component_eq!(adapted.2, expected.2, 1.0e-9);
            }
        }
    }

    #[test]
    fn d65_to_d50_matches_css_matrix() {
        // First column of the CSS Color 4 D65 to D50 matrix.
        let Components(x, y, z) =
            adapt(Components(1.0, 0.0, 0.0), WhitePoint::D65, WhitePoint::D50);
        assert_component_eq!(x, 1.0479298208405488, 1.0e-6);
        assert_component_eq!(y, 0.029627815688159344, 1.0e-6);
        assert_component_eq!(z, -0.009243058152591178, 1.0e-6);
    }

    #[test]
    fn adaptation_round_trips() {
        let xyz = Components(0.318634, 0.239006, 0.041637);
        let there = adapt(xyz, WhitePoint::D65, WhitePoint::D50);
        let back = adapt(there, WhitePoint::D50, WhitePoint::D65);
        assert_component_eq!(back.0, xyz.0, 1.0e-12);
        assert_component_eq!(back.1, xyz.1, 1.0e-12);
        assert_component_eq!(back.2, xyz.2, 1.0e-12);
    }
}
