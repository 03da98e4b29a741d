//! ezeasing
//!
//! A fixed, named catalog of easing curves for animation hosts.
//!
//! # Features
//!
//! - **Curves**: linear plus In/Out/In-Out variants of sine, quad, cubic,
//!   quart, quint, expo, circ, back, elastic and bounce
//! - **Lookup**: exact, case-sensitive lookup by display name
//! - **Pure**: every curve is a free `fn(f32) -> f32` with no state
//!
//! ```
//! use ezeasing::{catalog, Easing};
//!
//! let quad = catalog::find("In quad")?;
//! assert_eq!(quad, Easing::InQuad);
//! assert_eq!(quad.apply(0.5), 0.25);
//! assert!(catalog::find("in quad").is_err());
//! # Ok::<(), ezeasing::EasingError>(())
//! ```

pub mod catalog;
pub mod easing;
pub mod error;
pub mod functions;

pub use easing::{Easing, EasingFamily};
pub use error::{EasingError, Result};
