//! A [`Color`] represents a color specified in any of the supported color
//! spaces.

use bitflags::bitflags;

pub use crate::space::{HasSpace, Space};
use crate::error::{Error, Result};

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// The most components any color space uses (CMYK).
pub const MAX_COMPONENTS: usize = 4;

/// Three components, the shape of most color models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Flags to mark any missing components on a [`Color`]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flags : u8 {
        /// Set when the first component of a [`Color`] is missing.
        const C0_IS_NONE = 1 << 0;
        /// Set when the second component of a [`Color`] is missing.
        const C1_IS_NONE = 1 << 1;
        /// Set when the third component of a [`Color`] is missing.
        const C2_IS_NONE = 1 << 2;
        /// Set when the fourth component of a [`Color`] is missing.
        const C3_IS_NONE = 1 << 3;
        /// Set when the alpha component of a [`Color`] is missing.
        const ALPHA_IS_NONE = 1 << 4;
    }
}

impl Flags {
    /// The flag marking the component at `index` as missing.
    pub fn component(index: usize) -> Self {
        if index < MAX_COMPONENTS {
            Self::from_bits_retain(1 << index)
        } else {
            Self::empty()
        }
    }
}

/// Struct that can hold a color of any color space.
///
/// Colors are immutable values. Equality compares every component, the
/// alpha, the missing flags and the space exactly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    space: Space,
    values: [Component; MAX_COMPONENTS],
    alpha: Component,
    flags: Flags,
}

impl Color {
    /// Create a new [`Color`] in a space with three components. Each color or
    /// alpha component can take values that can be converted into a
    /// [`ComponentDetails`]. This automates the process of setting values to
    /// missing. For example:
    /// ```rust
    /// use chromata::{Color, Space};
    /// let c = Color::new(Space::Srgb, None, None, None, 1.0);
    /// ```
    /// will set all the color components to missing.
    ///
    /// # Panics
    ///
    /// Panics if `space` does not have exactly three components. Use
    /// [`Color::try_new`] or [`Color::cmyk`] for those.
    pub fn new(
        space: Space,
        c0: impl Into<ComponentDetails>,
        c1: impl Into<ComponentDetails>,
        c2: impl Into<ComponentDetails>,
        alpha: impl Into<ComponentDetails>,
    ) -> Self {
        match Self::try_new(space, [c0.into(), c1.into(), c2.into()], alpha) {
            Ok(color) => color,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a new [`Color`] from any number of components, failing if the
    /// count does not match the number of components of `space`.
    pub fn try_new<C: Into<ComponentDetails>>(
        space: Space,
        components: impl IntoIterator<Item = C>,
        alpha: impl Into<ComponentDetails>,
    ) -> Result<Self> {
        let expected = space.component_count();

        let mut flags = Flags::empty();
        let mut values = [0.0; MAX_COMPONENTS];
        let mut actual = 0;

        for details in components.into_iter().map(Into::into) {
            if actual < expected {
                values[actual] = details.value_and_flag(&mut flags, Flags::component(actual));
            }
            actual += 1;
        }

        if actual != expected {
            tracing::debug!(?space, expected, actual, "invalid component count");
            return Err(Error::InvalidComponents {
                space,
                expected,
                actual,
            });
        }

        let alpha = alpha
            .into()
            .value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);

        Ok(Self {
            space,
            values,
            alpha,
            flags,
        })
    }

    /// Create a new color in the CMYK space.
    pub fn cmyk(
        cyan: impl Into<ComponentDetails>,
        magenta: impl Into<ComponentDetails>,
        yellow: impl Into<ComponentDetails>,
        key: impl Into<ComponentDetails>,
        alpha: impl Into<ComponentDetails>,
    ) -> Self {
        let mut flags = Flags::empty();
        let values = [
            cyan.into().value_and_flag(&mut flags, Flags::C0_IS_NONE),
            magenta.into().value_and_flag(&mut flags, Flags::C1_IS_NONE),
            yellow.into().value_and_flag(&mut flags, Flags::C2_IS_NONE),
            key.into().value_and_flag(&mut flags, Flags::C3_IS_NONE),
        ];
        let alpha = alpha
            .into()
            .value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);

        Self {
            space: Space::Cmyk,
            values,
            alpha,
            flags,
        }
    }

    /// Build a color from values already known to match the arity of
    /// `space`. `None` marks a missing component.
    pub(crate) fn from_values(
        space: Space,
        components: &[Option<Component>],
        alpha: Option<Component>,
    ) -> Self {
        debug_assert_eq!(components.len(), space.component_count());

        let mut flags = Flags::empty();
        let mut values = [0.0; MAX_COMPONENTS];
        for (index, component) in components.iter().enumerate().take(MAX_COMPONENTS) {
            values[index] = ComponentDetails::from(*component)
                .value_and_flag(&mut flags, Flags::component(index));
        }
        let alpha = ComponentDetails::from(alpha).value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);

        Self {
            space,
            values,
            alpha,
            flags,
        }
    }

    /// The stored values, with missing components stored as 0.0.
    pub(crate) fn raw_values(&self) -> &[Component; MAX_COMPONENTS] {
        &self.values
    }

    /// The color space in which the components are specified.
    pub fn space(&self) -> Space {
        self.space
    }

    /// Flags marking which components are missing.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The number of color components, excluding alpha.
    pub fn component_count(&self) -> usize {
        self.space.component_count()
    }

    /// Return the component at `index`, or `None` if it is missing or out of
    /// range for this color's space.
    pub fn component(&self, index: usize) -> Option<Component> {
        if index >= self.component_count() || self.flags.contains(Flags::component(index)) {
            None
        } else {
            Some(self.values[index])
        }
    }

    /// Iterate over the color components in their declared order.
    pub fn components(&self) -> impl Iterator<Item = Option<Component>> + '_ {
        (0..self.component_count()).map(|index| self.component(index))
    }

    /// The component values in declared order. Missing components read as
    /// 0.0, check [`Color::flags`] to tell them apart.
    pub fn values(&self) -> &[Component] {
        &self.values[..self.component_count()]
    }

    /// Return the first component of the color.
    pub fn c0(&self) -> Option<Component> {
        self.component(0)
    }

    /// Return the second component of the color.
    pub fn c1(&self) -> Option<Component> {
        self.component(1)
    }

    /// Return the third component of the color.
    pub fn c2(&self) -> Option<Component> {
        self.component(2)
    }

    /// Return the fourth component of the color. Only CMYK has one.
    pub fn c3(&self) -> Option<Component> {
        self.component(3)
    }

    /// Return the alpha component of the color.
    pub fn alpha(&self) -> Option<Component> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }

    /// Return a copy of this color with a different alpha.
    pub fn with_alpha(&self, alpha: impl Into<ComponentDetails>) -> Self {
        let mut flags = self.flags - Flags::ALPHA_IS_NONE;
        let alpha = alpha
            .into()
            .value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);

        Self {
            alpha,
            flags,
            ..self.clone()
        }
    }
}

/// A struct that holds details about a component passed to any of the `new`
/// functions for colors. Any components that can be passed implements
/// a `From<?> for ComponentDetails`.
#[derive(Clone, Copy, Debug)]
pub struct ComponentDetails {
    value: Component,
    is_none: bool,
}

impl ComponentDetails {
    /// Extract the value and set the given flag if the component is none.
    pub fn value_and_flag(&self, flags: &mut Flags, flag: Flags) -> Component {
        if self.is_none {
            *flags |= flag;
        }
        self.value
    }
}

impl From<Component> for ComponentDetails {
    fn from(value: Component) -> Self {
        Self {
            value,
            is_none: false,
        }
    }
}

impl From<Option<Component>> for ComponentDetails {
    fn from(value: Option<Component>) -> Self {
        if let Some(value) = value {
            Self::from(value)
        } else {
            Self {
                value: 0.0,
                is_none: true,
            }
        }
    }
}
