//! Per-frame hero scene systems.

/// Constant-rate rotation of the hero meshes.
pub mod spin;

/// Pauses the hero animation while its canvas is scrolled out of view.
pub mod visibility;
