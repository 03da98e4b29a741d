//! Name-based access to the easing catalog
//!
//! Lookups are exact and case-sensitive: no trimming, no case folding, no
//! fuzzy matching.

use tracing::debug;

use crate::easing::Easing;
use crate::error::{EasingError, Result};

/// All display names in catalog order, e.g. to populate a picker menu.
pub fn names() -> Vec<&'static str> {
    Easing::all().iter().map(|easing| easing.display_name()).collect()
}

/// Find a curve by its display name.
pub fn find(name: &str) -> Result<Easing> {
    Easing::from_name(name).ok_or_else(|| {
        debug!("easing lookup failed: {:?}", name);
        EasingError::NotFound(name.to_owned())
    })
}

/// Look up `name` and evaluate it at `x`.
pub fn ease(name: &str, x: f32) -> Result<f32> {
    Ok(find(name)?.apply(x))
}
