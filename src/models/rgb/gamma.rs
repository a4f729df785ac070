//! Transfer functions between gamma encoded and linear light RGB.
//!
//! Every curve is extended to negative values by mirroring it around the
//! origin, so out of gamut colors survive a round trip.

use crate::color::{Component, Components};

use super::space::{A98Rgb, AcesCc, AcesCct, Bt709, DciP3, DisplayP3, ProPhotoRgb, Rec2020, Srgb};

/// The curve that maps linear light components to their encoded form and
/// back.
pub trait TransferFunction {
    /// Encode a single linear light value. Only called with non-negative
    /// values.
    fn encode(linear: Component) -> Component;

    /// Decode a single encoded value. Only called with non-negative values.
    fn decode(encoded: Component) -> Component;

    /// Convert the components from linear light to gamma encoded.
    fn to_gamma_encoded(from: &Components) -> Components {
        from.map(|v| mirrored(v, Self::encode))
    }

    /// Convert the components from gamma encoded to linear light.
    fn to_linear_light(from: &Components) -> Components {
        from.map(|v| mirrored(v, Self::decode))
    }
}

#[inline]
fn mirrored(value: Component, curve: impl Fn(Component) -> Component) -> Component {
    if value < 0.0 {
        -curve(-value)
    } else {
        curve(value)
    }
}

impl TransferFunction for Srgb {
    fn encode(linear: Component) -> Component {
        if linear > 0.0031308 {
            1.055 * linear.powf(1.0 / 2.4) - 0.055
        } else {
            linear * 12.92
        }
    }

    fn decode(encoded: Component) -> Component {
        if encoded < 0.04045 {
            encoded / 12.92
        } else {
            ((encoded + 0.055) / 1.055).powf(2.4)
        }
    }
}

/// Display-P3 shares the sRGB curve.
impl TransferFunction for DisplayP3 {
    fn encode(linear: Component) -> Component {
        Srgb::encode(linear)
    }

    fn decode(encoded: Component) -> Component {
        Srgb::decode(encoded)
    }
}

impl TransferFunction for A98Rgb {
    fn encode(linear: Component) -> Component {
        linear.powf(256.0 / 563.0)
    }

    fn decode(encoded: Component) -> Component {
        encoded.powf(563.0 / 256.0)
    }
}

impl ProPhotoRgb {
    const LINEAR_CUTOFF: Component = 1.0 / 512.0;
    const ENCODED_CUTOFF: Component = 16.0 / 512.0;
}

impl TransferFunction for ProPhotoRgb {
    fn encode(linear: Component) -> Component {
        if linear < Self::LINEAR_CUTOFF {
            linear * 16.0
        } else {
            linear.powf(1.0 / 1.8)
        }
    }

    fn decode(encoded: Component) -> Component {
        if encoded <= Self::ENCODED_CUTOFF {
            encoded / 16.0
        } else {
            encoded.powf(1.8)
        }
    }
}

impl Rec2020 {
    #[allow(clippy::excessive_precision)]
    const ALPHA: Component = 1.09929682680944;
    #[allow(clippy::excessive_precision)]
    const BETA: Component = 0.018053968510807;
}

impl TransferFunction for Rec2020 {
    fn encode(linear: Component) -> Component {
        if linear > Self::BETA {
            Self::ALPHA * linear.powf(0.45) - (Self::ALPHA - 1.0)
        } else {
            linear * 4.5
        }
    }

    fn decode(encoded: Component) -> Component {
        if encoded < Self::BETA * 4.5 {
            encoded / 4.5
        } else {
            ((encoded + Self::ALPHA - 1.0) / Self::ALPHA).powf(1.0 / 0.45)
        }
    }
}

impl Bt709 {
    const LINEAR_CUTOFF: Component = 0.018;
}

impl TransferFunction for Bt709 {
    fn encode(linear: Component) -> Component {
        if linear < Self::LINEAR_CUTOFF {
            linear * 4.5
        } else {
            1.099 * linear.powf(0.45) - 0.099
        }
    }

    fn decode(encoded: Component) -> Component {
        if encoded < Self::encode(Self::LINEAR_CUTOFF) {
            encoded / 4.5
        } else {
            ((encoded + 0.099) / 1.099).powf(1.0 / 0.45)
        }
    }
}

impl TransferFunction for DciP3 {
    fn encode(linear: Component) -> Component {
        linear.powf(1.0 / 2.6)
    }

    fn decode(encoded: Component) -> Component {
        encoded.powf(2.6)
    }
}

/// The largest value of a half float, where the ACES log curves stop.
const HALF_MAX: Component = 65504.0;

/// The logarithmic segment shared by ACEScc and ACEScct.
fn aces_log_encode(linear: Component) -> Component {
    (linear.log2() + 9.72) / 17.52
}

fn aces_log_decode(encoded: Component) -> Component {
    if encoded < aces_log_encode(HALF_MAX) {
        (encoded * 17.52 - 9.72).exp2()
    } else {
        HALF_MAX
    }
}

impl AcesCc {
    /// 2^-15, below which the curve flattens towards black.
    const LINEAR_CUTOFF: Component = 1.0 / 32768.0;
    /// 2^-16
    const TOE: Component = 1.0 / 65536.0;
    const ENCODED_CUTOFF: Component = (9.72 - 15.0) / 17.52;
}

/// ACEScc encodes negative values too, so the curve is not mirrored.
/// Negative linear values all encode to the value of black.
impl TransferFunction for AcesCc {
    fn encode(linear: Component) -> Component {
        if linear < Self::LINEAR_CUTOFF {
            aces_log_encode(Self::TOE + linear.max(0.0) / 2.0)
        } else {
            aces_log_encode(linear)
        }
    }

    fn decode(encoded: Component) -> Component {
        if encoded <= Self::ENCODED_CUTOFF {
            ((encoded * 17.52 - 9.72).exp2() - Self::TOE) * 2.0
        } else {
            aces_log_decode(encoded)
        }
    }

    fn to_gamma_encoded(from: &Components) -> Components {
        from.map(Self::encode)
    }

    fn to_linear_light(from: &Components) -> Components {
        from.map(Self::decode)
    }
}

impl AcesCct {
    #[allow(clippy::excessive_precision)]
    const A: Component = 10.5402377416545;
    #[allow(clippy::excessive_precision)]
    const B: Component = 0.0729055341958355;
    /// 2^-7
    const LINEAR_CUTOFF: Component = 0.0078125;
    #[allow(clippy::excessive_precision)]
    const ENCODED_CUTOFF: Component = 0.155251141552511;
}

/// The toe of ACEScct is linear and extends to negative values on its own.
impl TransferFunction for AcesCct {
    fn encode(linear: Component) -> Component {
        if linear < Self::LINEAR_CUTOFF {
            Self::A * linear + Self::B
        } else {
            aces_log_encode(linear)
        }
    }

    fn decode(encoded: Component) -> Component {
        if encoded <= Self::ENCODED_CUTOFF {
            (encoded - Self::B) / Self::A
        } else {
            aces_log_decode(encoded)
        }
    }

    fn to_gamma_encoded(from: &Components) -> Components {
        from.map(Self::encode)
    }

    fn to_linear_light(from: &Components) -> Components {
        from.map(Self::decode)
    }
}
