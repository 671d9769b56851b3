//! Narrative event vocabulary and candidate selection.

use rand::seq::SliceRandom;
use rand::Rng;
use sim_rules::{ModuleGraph, ModuleKind, Parameters};

/// Line emitted while the graph is still empty.
pub const AWAITING_INITIALIZATION: &str = "Awaiting initialization...";

/// Slider value above which the parameter events fire.
const PARAMETER_EVENT_THRESHOLD: u8 = 70;

/// Module count above which the pathway event becomes a candidate.
const PATHWAY_MODULE_COUNT: usize = 3;

/// Score above which the self-awareness event becomes a candidate.
const AWARENESS_SCORE: f64 = 0.6;

/// Fixed sentence describing activity for a module kind.
pub fn kind_event(kind: ModuleKind) -> &'static str {
    match kind {
        ModuleKind::Sensory => "Sensory integration combined multiple inputs",
        ModuleKind::Vision => "Visual processing detected patterns in the environment",
        ModuleKind::Memory => "Memory systems consolidated recent experiences",
        ModuleKind::Decision => "Decision engine evaluated potential responses",
        ModuleKind::Emotion => "Emotional response triggered by environmental stimuli",
        ModuleKind::Attention => "Attention system focused on significant patterns",
        ModuleKind::Language => "Language processing analyzed semantic structures",
        ModuleKind::Motor => "Motor systems simulated response patterns",
    }
}

/// Assemble the candidate events for the current state and pick one
/// uniformly at random.
///
/// An empty graph always yields the awaiting-initialization line, with no
/// randomness involved.
pub fn generate_event<R: Rng>(
    parameters: &Parameters,
    graph: &ModuleGraph,
    score: f64,
    rng: &mut R,
) -> String {
    if graph.is_empty() {
        return AWAITING_INITIALIZATION.to_string();
    }

    let mut candidates: Vec<&'static str> = graph
        .kinds_present()
        .into_iter()
        .map(kind_event)
        .collect();

    if parameters.memory > PARAMETER_EVENT_THRESHOLD {
        candidates.push("Memory capacity expanded, enabling deeper retention");
    }
    if parameters.processing > PARAMETER_EVENT_THRESHOLD {
        candidates.push("Processing speed increased, enhancing real-time analysis");
    }
    if parameters.complexity > PARAMETER_EVENT_THRESHOLD {
        candidates.push("Complexity threshold reached, new patterns emerging");
    }
    if graph.module_count() > PATHWAY_MODULE_COUNT {
        candidates.push("Neural pathways strengthened through repeated activation");
    }
    if score > AWARENESS_SCORE {
        candidates.push("Consciousness metrics indicate increased self-awareness");
    }

    candidates
        .choose(rng)
        .copied()
        .unwrap_or(AWAITING_INITIALIZATION)
        .to_string()
}
