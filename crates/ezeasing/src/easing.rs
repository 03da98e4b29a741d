//! Easing curve identifiers
//!
//! [`Easing`] is the closed set of named curves. Each variant dispatches to a
//! free function in [`crate::functions`].

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::EasingError;
use crate::functions;

/// Easing curve identifier
///
/// Variants are declared grouped by family; [`Easing::all`] preserves that
/// order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    #[default]
    Linear,
    InSine,
    OutSine,
    InOutSine,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InBack,
    OutBack,
    InOutBack,
    InElastic,
    OutElastic,
    InOutElastic,
    OutBounce,
    InBounce,
    InOutBounce,
}

impl Easing {
    /// Full catalog in declaration order.
    pub fn all() -> &'static [Easing] {
        const CURVES: [Easing; 31] = [
            Easing::Linear,
            Easing::InSine,
            Easing::OutSine,
            Easing::InOutSine,
            Easing::InQuad,
            Easing::OutQuad,
            Easing::InOutQuad,
            Easing::InCubic,
            Easing::OutCubic,
            Easing::InOutCubic,
            Easing::InQuart,
            Easing::OutQuart,
            Easing::InOutQuart,
            Easing::InQuint,
            Easing::OutQuint,
            Easing::InOutQuint,
            Easing::InExpo,
            Easing::OutExpo,
            Easing::InOutExpo,
            Easing::InCirc,
            Easing::OutCirc,
            Easing::InOutCirc,
            Easing::InBack,
            Easing::OutBack,
            Easing::InOutBack,
            Easing::InElastic,
            Easing::OutElastic,
            Easing::InOutElastic,
            Easing::OutBounce,
            Easing::InBounce,
            Easing::InOutBounce,
        ];
        &CURVES
    }

    /// User-facing name, also the lookup key.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::InSine => "In sine",
            Self::OutSine => "Out sine",
            Self::InOutSine => "In out sine",
            Self::InQuad => "In quad",
            Self::OutQuad => "Out quad",
            Self::InOutQuad => "In out quad",
            Self::InCubic => "In cubic",
            Self::OutCubic => "Out cubic",
            Self::InOutCubic => "In out cubic",
            Self::InQuart => "In quart",
            Self::OutQuart => "Out quart",
            Self::InOutQuart => "In out quart",
            Self::InQuint => "In quint",
            Self::OutQuint => "Out quint",
            Self::InOutQuint => "In out quint",
            Self::InExpo => "In expo",
            Self::OutExpo => "Out expo",
            Self::InOutExpo => "In out expo",
            Self::InCirc => "In circ",
            Self::OutCirc => "Out circ",
            Self::InOutCirc => "In out circ",
            Self::InBack => "In back",
            Self::OutBack => "Out back",
            Self::InOutBack => "In out back",
            Self::InElastic => "In elastic",
            Self::OutElastic => "Out elastic",
            Self::InOutElastic => "In out elastic",
            Self::OutBounce => "Out bounce",
            Self::InBounce => "In bounce",
            Self::InOutBounce => "In out bounce",
        }
    }

    /// Display name upper-cased with ASCII rules, for stable keys.
    pub fn upper_name(self) -> String {
        self.display_name().to_ascii_uppercase()
    }

    /// The pure function backing this curve.
    pub fn function(self) -> fn(f32) -> f32 {
        match self {
            Self::Linear => functions::linear,
            Self::InSine => functions::ease_in_sine,
            Self::OutSine => functions::ease_out_sine,
            Self::InOutSine => functions::ease_in_out_sine,
            Self::InQuad => functions::ease_in_quad,
            Self::OutQuad => functions::ease_out_quad,
            Self::InOutQuad => functions::ease_in_out_quad,
            Self::InCubic => functions::ease_in_cubic,
            Self::OutCubic => functions::ease_out_cubic,
            Self::InOutCubic => functions::ease_in_out_cubic,
            Self::InQuart => functions::ease_in_quart,
            Self::OutQuart => functions::ease_out_quart,
            Self::InOutQuart => functions::ease_in_out_quart,
            Self::InQuint => functions::ease_in_quint,
            Self::OutQuint => functions::ease_out_quint,
            Self::InOutQuint => functions::ease_in_out_quint,
            Self::InExpo => functions::ease_in_expo,
            Self::OutExpo => functions::ease_out_expo,
            Self::InOutExpo => functions::ease_in_out_expo,
            Self::InCirc => functions::ease_in_circ,
            Self::OutCirc => functions::ease_out_circ,
            Self::InOutCirc => functions::ease_in_out_circ,
            Self::InBack => functions::ease_in_back,
            Self::OutBack => functions::ease_out_back,
            Self::InOutBack => functions::ease_in_out_back,
            Self::InElastic => functions::ease_in_elastic,
            Self::OutElastic => functions::ease_out_elastic,
            Self::InOutElastic => functions::ease_in_out_elastic,
            Self::OutBounce => functions::ease_out_bounce,
            Self::InBounce => functions::ease_in_bounce,
            Self::InOutBounce => functions::ease_in_out_bounce,
        }
    }

    /// Apply the easing function to a progress value (nominally 0.0 to 1.0).
    ///
    /// The input is not clamped.
    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        (self.function())(x)
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Easing> {
        Self::all()
            .iter()
            .copied()
            .find(|easing| easing.display_name() == name)
    }

    pub fn family(self) -> EasingFamily {
        match self {
            Self::Linear => EasingFamily::Linear,
            Self::InSine | Self::OutSine | Self::InOutSine => EasingFamily::Sine,
            Self::InQuad | Self::OutQuad | Self::InOutQuad => EasingFamily::Quad,
            Self::InCubic | Self::OutCubic | Self::InOutCubic => EasingFamily::Cubic,
            Self::InQuart | Self::OutQuart | Self::InOutQuart => EasingFamily::Quart,
            Self::InQuint | Self::OutQuint | Self::InOutQuint => EasingFamily::Quint,
            Self::InExpo | Self::OutExpo | Self::InOutExpo => EasingFamily::Expo,
            Self::InCirc | Self::OutCirc | Self::InOutCirc => EasingFamily::Circ,
            Self::InBack | Self::OutBack | Self::InOutBack => EasingFamily::Back,
            Self::InElastic | Self::OutElastic | Self::InOutElastic => EasingFamily::Elastic,
            Self::OutBounce | Self::InBounce | Self::InOutBounce => EasingFamily::Bounce,
        }
    }
}

impl Display for Easing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Easing {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::catalog::find(s)
    }
}

/// Curve family, for grouping curves in pickers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EasingFamily {
    Linear,
    Sine,
    Quad,
    Cubic,
    Quart,
    Quint,
    Expo,
    Circ,
    Back,
    Elastic,
    Bounce,
}

impl EasingFamily {
    /// Families in catalog order.
    pub fn all() -> &'static [EasingFamily] {
        const FAMILIES: [EasingFamily; 11] = [
            EasingFamily::Linear,
            EasingFamily::Sine,
            EasingFamily::Quad,
            EasingFamily::Cubic,
            EasingFamily::Quart,
            EasingFamily::Quint,
            EasingFamily::Expo,
            EasingFamily::Circ,
            EasingFamily::Back,
            EasingFamily::Elastic,
            EasingFamily::Bounce,
        ];
        &FAMILIES
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Sine => "Sine",
            Self::Quad => "Quad",
            Self::Cubic => "Cubic",
            Self::Quart => "Quart",
            Self::Quint => "Quint",
            Self::Expo => "Expo",
            Self::Circ => "Circ",
            Self::Back => "Back",
            Self::Elastic => "Elastic",
            Self::Bounce => "Bounce",
        }
    }

    /// Curves of this family, in catalog order.
    pub fn curves(self) -> impl Iterator<Item = Easing> {
        Easing::all()
            .iter()
            .copied()
            .filter(move |easing| easing.family() == self)
    }
}

impl Display for EasingFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
