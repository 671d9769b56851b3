//! Tunable simulation parameters - the three user-facing sliders.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound for every parameter value.
pub const PARAMETER_MAX: u8 = 100;

/// Default value every parameter resets to.
pub const PARAMETER_DEFAULT: u8 = 50;

/// The three slider parameters, each an integer in [0, 100].
///
/// Parameters are mutated only by explicit user action and read by every
/// tick of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    pub memory: u8,
    pub processing: u8,
    pub complexity: u8,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            memory: PARAMETER_DEFAULT,
            processing: PARAMETER_DEFAULT,
            complexity: PARAMETER_DEFAULT,
        }
    }
}

impl Parameters {
    /// Create parameters, clamping each value to the valid range.
    pub fn new(memory: u8, processing: u8, complexity: u8) -> Self {
        Self {
            memory: memory.min(PARAMETER_MAX),
            processing: processing.min(PARAMETER_MAX),
            complexity: complexity.min(PARAMETER_MAX),
        }
    }

    pub fn set_memory(&mut self, value: u8) {
        self.memory = value.min(PARAMETER_MAX);
    }

    pub fn set_processing(&mut self, value: u8) {
        self.processing = value.min(PARAMETER_MAX);
    }

    pub fn set_complexity(&mut self, value: u8) {
        self.complexity = value.min(PARAMETER_MAX);
    }

    /// Draw all three parameters from [30, 100]. The floor keeps a random
    /// configuration immediately visible.
    pub fn randomize<R: Rng>(rng: &mut R) -> Self {
        Self {
            memory: rng.gen_range(30..=PARAMETER_MAX),
            processing: rng.gen_range(30..=PARAMETER_MAX),
            complexity: rng.gen_range(30..=PARAMETER_MAX),
        }
    }
}
