//! Model a color in the Oklab color space.
//! <https://bottosson.github.io/posts/oklab/>

use crate::{
    color::{HasSpace, Space},
    math::{cbrt, transform, transform_3x3, Transform},
    models::{
        lab::{tag, Polar, Rectangular},
        xyz::{Xyz, D65},
        Connect,
    },
};

/// The model for a color specified in the Oklab color space with the
/// rectangular orthogonal form.
pub type Oklab = Rectangular<tag::Oklab>;

impl HasSpace for Oklab {
    const SPACE: Space = Space::Oklab;
}

/// The model for a color specified in the Oklab color space with the
/// cylindrical polar form.
pub type Oklch = Polar<tag::Oklab>;

impl HasSpace for Oklch {
    const SPACE: Space = Space::Oklch;
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static XYZ_TO_LMS: Transform = transform_3x3(
     0.8190224432164319,  0.0329836671980271,  0.048177199566046255,
     0.3619062562801221,  0.9292868468965546,  0.26423952494422764,
    -0.12887378261216414, 0.03614466816999844, 0.6335478258136937,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static LMS_TO_OKLAB: Transform = transform_3x3(
     0.2104542553,  1.9779984951,  0.0259040371,
     0.7936177850, -2.4285922050,  0.7827717662,
    -0.0040720468,  0.4505937099, -0.8086757660,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static OKLAB_TO_LMS: Transform = transform_3x3(
    0.99999999845051981432,  1.0000000088817607767,    1.0000000546724109177,
    0.39633779217376785678, -0.1055613423236563494,   -0.089484182094965759684,
    0.21580375806075880339, -0.063854174771705903402, -1.2914855378640917399,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
static LMS_TO_XYZ: Transform = transform_3x3(
     1.2268798733741557,  -0.04057576262431372, -0.07637294974672142,
    -0.5578149965554813,   1.1122868293970594,  -0.4214933239627914,
     0.28139105017721583, -0.07171106666151701,  1.5869240244272418,
);

impl Connect for Oklab {
    type White = D65;

    fn to_xyz(&self) -> Xyz<D65> {
        let lms = transform(&OKLAB_TO_LMS, self.to_components());
        transform(&LMS_TO_XYZ, lms.map(|v| v * v * v)).into()
    }

    fn from_xyz(xyz: &Xyz<D65>) -> Self {
        let lms = transform(&XYZ_TO_LMS, xyz.to_components());
        transform(&LMS_TO_OKLAB, lms.map(cbrt)).into()
    }
}
