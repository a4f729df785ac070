//! Model a color in the ICtCp color space, designed for high dynamic range
//! and wide color gamut imagery.
//!
//! - [Rec. ITU-R BT.2100-2](https://www.itu.int/rec/R-REC-BT.2100-2-201807-I/en)
//! - [Dolby ICtCp white paper](https://professional.dolby.com/siteassets/pdfs/ictcp_dolbywhitepaper_v071.pdf)
//!
//! XYZ values are taken as absolute luminance where `Y = 1` is 1 cd/m².

use std::sync::LazyLock;

use crate::{
    color::{Component, HasSpace, Space},
    math::{matrix, transform, Transform},
    models::{
        xyz::{Xyz, D65},
        Connect,
    },
};

chromata_macros::gen_model! {
    /// A color specified in the ICtCp color space.
    pub struct ICtCp {
        /// The intensity component.
        pub intensity: Component,
        /// The blue-yellow (tritan) component.
        pub tritan: Component,
        /// The red-green (protan) component.
        pub protan: Component,
    }
}

impl HasSpace for ICtCp {
    const SPACE: Space = Space::ICtCp;
}

/// SMPTE ST 2084 perceptual quantizer.
mod pq {
    use crate::{color::Component, math::spow};

    const M1: Component = 2610.0 / 16384.0;
    const M2: Component = 2523.0 / 4096.0 * 128.0;
    const C1: Component = 3424.0 / 4096.0;
    const C2: Component = 2413.0 / 4096.0 * 32.0;
    const C3: Component = 2392.0 / 4096.0 * 32.0;
    const PEAK: Component = 10000.0;

    /// Absolute luminance to a non-linear signal.
    pub fn oetf(x: Component) -> Component {
        let yp = spow(x / PEAK, M1);
        spow((C1 + C2 * yp) / (1.0 + C3 * yp), M2)
    }

    /// Non-linear signal to absolute luminance.
    pub fn eotf(x: Component) -> Component {
        let vp = spow(x, 1.0 / M2);
        let n = (vp - C1).max(0.0);
        PEAK * spow(n / (C2 - C3 * vp), 1.0 / M1)
    }
}

// The cone response is the Hunt-Pointer-Estevez transform followed by a
// crosstalk matrix.
static XYZ_TO_LMS: LazyLock<Transform> = LazyLock::new(|| {
    #[rustfmt::skip]
    let hpe = matrix([
        [ 0.4002, 0.7076, -0.0808],
        [-0.2263, 1.1653,  0.0457],
        [ 0.0,    0.0,     0.9182],
    ]);
    #[rustfmt::skip]
    let crosstalk = matrix([
        [0.92, 0.04, 0.04],
        [0.04, 0.92, 0.04],
        [0.04, 0.04, 0.92],
    ]);
    hpe.then(&crosstalk)
});

static LMS_TO_XYZ: LazyLock<Transform> = LazyLock::new(|| {
    XYZ_TO_LMS
        .inverse()
        .expect("ICtCp cone response matrix is invertible")
});

static LMS_TO_ICTCP: LazyLock<Transform> = LazyLock::new(|| {
    #[rustfmt::skip]
    let m = matrix([
        [ 2048.0,   2048.0,     0.0],
        [ 6610.0, -13613.0,  7003.0],
        [17933.0, -17390.0,  -543.0],
    ]);
    m.then(&Transform::scale(1.0 / 4096.0, 1.0 / 4096.0, 1.0 / 4096.0))
});

static ICTCP_TO_LMS: LazyLock<Transform> = LazyLock::new(|| {
    LMS_TO_ICTCP
        .inverse()
        .expect("ICtCp opponent matrix is invertible")
});

impl Connect for ICtCp {
    type White = D65;

    fn to_xyz(&self) -> Xyz<D65> {
        let lms = transform(&ICTCP_TO_LMS, self.to_components()).map(pq::eotf);
        transform(&LMS_TO_XYZ, lms).into()
    }

    fn from_xyz(xyz: &Xyz<D65>) -> Self {
        let lms = transform(&XYZ_TO_LMS, xyz.to_components()).map(pq::oetf);
        transform(&LMS_TO_ICTCP, lms).into()
    }
}
