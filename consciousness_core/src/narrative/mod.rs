//! Narrative engine - throttled event sampling and phase tracking.
//!
//! The engine turns simulation state into a human-readable event stream:
//! 1. **Throttle**: at most one sample per fixed tick interval
//! 2. **Selection**: one event drawn uniformly from the current candidates
//! 3. **Phase check**: the threshold ladder is recomputed and transitions
//!    are logged as synthetic events

mod events;
mod phase;

pub use events::*;
pub use phase::*;

use rand::Rng;
use serde::{Deserialize, Serialize};
use sim_rules::{ModuleGraph, Parameters};

/// Configuration for narrative sampling.
#[derive(Debug, Clone)]
pub struct NarrativeConfig {
    /// Minimum gap between emitted events, in simulation ticks.
    pub event_interval: u64,

    /// Maximum number of retained events.
    pub max_events: usize,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            event_interval: 120,
            max_events: 10,
        }
    }
}

/// Accumulated narrative state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NarrativeState {
    /// Current phase, updated whenever a sample is due.
    pub phase: Phase,

    /// Event log, newest first.
    pub events: Vec<String>,

    /// Tick of the most recent emitted event.
    pub last_event_tick: u64,

    /// Total events emitted since the last reset.
    pub experience_count: u64,

    /// Emitted events whose text mentions an interaction.
    pub interaction_count: u64,
}

impl NarrativeState {
    /// Create a fresh narrative state in the initialization phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent event, if any.
    pub fn latest_event(&self) -> Option<&str> {
        self.events.first().map(String::as_str)
    }

    fn push_event(&mut self, event: String, cap: usize) {
        self.events.insert(0, event);
        self.events.truncate(cap);
    }
}

/// Samples narrative events and phase transitions from simulation state.
#[derive(Debug, Clone)]
pub struct NarrativeEngine {
    config: NarrativeConfig,
}

impl NarrativeEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: NarrativeConfig) -> Self {
        Self { config }
    }

    /// Create an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(NarrativeConfig::default())
    }

    /// Sample the current state, called once per tick.
    ///
    /// Returns without touching the state unless the tick gap since the
    /// last event has reached the configured interval. Phase detection
    /// sits behind the same gate, so a transition is only noticed on the
    /// next due sample.
    pub fn sample<R: Rng>(
        &self,
        current_tick: u64,
        parameters: &Parameters,
        graph: &ModuleGraph,
        score: f64,
        state: &mut NarrativeState,
        rng: &mut R,
    ) {
        if current_tick - state.last_event_tick < self.config.event_interval {
            return;
        }

        let event = generate_event(parameters, graph, score, rng);
        let is_interaction = event.contains("interaction");
        state.push_event(event, self.config.max_events);
        state.last_event_tick = current_tick;
        state.experience_count += 1;
        if is_interaction {
            state.interaction_count += 1;
        }

        let phase = Phase::for_state(graph.module_count(), score);
        if phase != state.phase {
            state.phase = phase;
            state.push_event(
                format!("Transition detected: Entering {phase} phase"),
                self.config.max_events,
            );
        }
    }
}

impl Default for NarrativeEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
