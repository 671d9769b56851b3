//! # Sim Rules
//!
//! The "Substrate" crate - contains module kinds, wiring rules, parameters,
//! and the module graph. This crate is the single source of truth for
//! simulation state and does not contain any scoring or narrative logic.

pub mod graph;
pub mod modules;
pub mod parameters;

pub use graph::*;
pub use modules::*;
pub use parameters::*;
