//! Structural rewrite passes, one module per code-shape family.
//!
//! Every pass is a pure `fn(&str) -> String` that returns its input
//! unchanged when its shape is absent. Relative order between passes is
//! owned by the pipeline driver, not by these modules.

pub(crate) mod containers;
pub(crate) mod control;
pub(crate) mod expressions;
pub(crate) mod loops;
pub(crate) mod signatures;
pub(crate) mod slices;
