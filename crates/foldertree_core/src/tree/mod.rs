//! Structural helpers over the owned folder forest.
//!
//! # Responsibility
//! - Locate and detach folders by id.
//! - Validate candidate folder names within a sibling scope.
//! - Detect structural corruption before the engine accepts a forest.
//!
//! # Invariants
//! - Helpers never repair a corrupted forest; they report and leave it as is.

pub mod integrity;
pub mod locator;
pub mod names;
