//! # Consciousness Core
//!
//! The "mind" of the consciousness sandbox. This crate interfaces with
//! `sim_rules`, derives everything the host renders - the composite CSI
//! score, the narrative event stream, advisor feedback, and the charted
//! metrics series - and owns the frame-driven simulation clock that ties
//! them together.
//!
//! ## Core Components
//!
//! - **scoring**: the composite CSI score and per-parameter impacts
//! - **narrative**: throttled event sampling and phase tracking
//! - **metrics**: the time series consumed by the host's chart widget
//! - **advisor**: tuning suggestions derived from the current setup
//! - **config**: the saved-configuration blob format
//! - **simulation**: the clock and top-level state container
//!
//! ## Design Philosophy
//!
//! - **State-Driven**: every derived value is a pure function of current state
//! - **Host-Driven**: the host scheduler calls [`Simulation::step`] once per
//!   frame; the core never owns a loop
//! - **Deterministic**: all random choices flow through a seedable generator

pub mod advisor;
pub mod config;
pub mod metrics;
pub mod narrative;
pub mod scoring;
pub mod simulation;

pub use advisor::*;
pub use config::*;
pub use metrics::*;
pub use narrative::*;
pub use scoring::*;
pub use simulation::*;
