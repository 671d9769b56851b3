//! Narrative phases - coarse labels derived from score and graph size.

use serde::{Deserialize, Serialize};

/// The ordered narrative phases.
///
/// A phase is a pure function of the current module count and score, not a
/// free-running state machine: recomputing from the same state always
/// yields the same phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Initialization,
    Emergence,
    Development,
    Integration,
    Awareness,
    Transcendence,
}

impl Phase {
    /// Threshold ladder mapping current state to a phase.
    ///
    /// Scores past the top threshold all land in transcendence; the score
    /// itself is unbounded above.
    pub fn for_state(module_count: usize, score: f64) -> Self {
        if module_count == 0 {
            Phase::Initialization
        } else if score < 0.2 {
            Phase::Emergence
        } else if score < 0.4 {
            Phase::Development
        } else if score < 0.6 {
            Phase::Integration
        } else if score < 0.8 {
            Phase::Awareness
        } else {
            Phase::Transcendence
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Initialization => "initialization",
            Phase::Emergence => "emergence",
            Phase::Development => "development",
            Phase::Integration => "integration",
            Phase::Awareness => "awareness",
            Phase::Transcendence => "transcendence",
        }
    }

    /// Longer description shown in the narrative panel.
    pub fn description(&self) -> &'static str {
        match self {
            Phase::Initialization => {
                "System awaiting module initialization. The potential for consciousness exists in its nascent state."
            }
            Phase::Emergence => {
                "Basic patterns of consciousness emerging. The system is beginning to process and respond to its environment."
            }
            Phase::Development => {
                "Neural pathways are forming and strengthening. The system is developing more sophisticated responses."
            }
            Phase::Integration => {
                "Multiple systems are integrating, creating more complex patterns of interaction and response."
            }
            Phase::Awareness => {
                "Signs of self-awareness are emerging. The system is demonstrating increasingly sophisticated behavioral patterns."
            }
            Phase::Transcendence => {
                "Advanced consciousness patterns detected. The system is exhibiting signs of higher-order cognitive processing."
            }
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
