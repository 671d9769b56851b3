//! Composite scoring - deriving the CSI score from parameters and graph size.

use serde::{Deserialize, Serialize};
use sim_rules::Parameters;

const MEMORY_WEIGHT: f64 = 0.3;
const PROCESSING_WEIGHT: f64 = 0.4;
const COMPLEXITY_WEIGHT: f64 = 0.3;

/// Score multiplier contributed by each placed module.
const MODULE_FACTOR: f64 = 0.2;

/// Compute the composite CSI score.
///
/// The score is not clamped: large graphs push it past 1.0, and consumers
/// must treat anything above the top threshold uniformly. Monotonically
/// non-decreasing in each parameter and in the module count.
pub fn compute_score(parameters: &Parameters, module_count: usize) -> f64 {
    weighted_parameters(parameters) * module_multiplier(module_count) / 100.0
}

/// Per-parameter contributions to the score, as charted by the host.
///
/// The three impacts sum to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterImpacts {
    pub memory: f64,
    pub processing: f64,
    pub complexity: f64,
}

pub fn parameter_impacts(parameters: &Parameters, module_count: usize) -> ParameterImpacts {
    let multiplier = module_multiplier(module_count);
    ParameterImpacts {
        memory: parameters.memory as f64 * MEMORY_WEIGHT * multiplier / 100.0,
        processing: parameters.processing as f64 * PROCESSING_WEIGHT * multiplier / 100.0,
        complexity: parameters.complexity as f64 * COMPLEXITY_WEIGHT * multiplier / 100.0,
    }
}

fn weighted_parameters(parameters: &Parameters) -> f64 {
    parameters.memory as f64 * MEMORY_WEIGHT
        + parameters.processing as f64 * PROCESSING_WEIGHT
        + parameters.complexity as f64 * COMPLEXITY_WEIGHT
}

fn module_multiplier(module_count: usize) -> f64 {
    1.0 + module_count as f64 * MODULE_FACTOR
}

/// Coarse label for the current score, shown on the level indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsciousnessLevel {
    Basic,
    Emergent,
    Developing,
    Advanced,
    Transcendent,
}

impl ConsciousnessLevel {
    /// Map a score onto the indicator ladder.
    pub fn for_score(score: f64) -> Self {
        if score < 0.2 {
            ConsciousnessLevel::Basic
        } else if score < 0.4 {
            ConsciousnessLevel::Emergent
        } else if score < 0.6 {
            ConsciousnessLevel::Developing
        } else if score < 0.8 {
            ConsciousnessLevel::Advanced
        } else {
            ConsciousnessLevel::Transcendent
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsciousnessLevel::Basic => "Basic",
            ConsciousnessLevel::Emergent => "Emergent",
            ConsciousnessLevel::Developing => "Developing",
            ConsciousnessLevel::Advanced => "Advanced",
            ConsciousnessLevel::Transcendent => "Transcendent",
        }
    }
}

impl std::fmt::Display for ConsciousnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
