//! Advisor feedback - tuning suggestions derived from the current setup.

use sim_rules::{ModuleGraph, Parameters};

/// Slider value below which a parameter draws a "too low" suggestion.
const PARAMETER_LOW: u8 = 30;

/// Slider value above which a parameter draws a "too high" suggestion.
const PARAMETER_HIGH: u8 = 80;

/// Feedback shown in the assistant panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// One-line assessment tiered by the current score.
    pub summary: String,

    /// Concrete tuning suggestions, possibly empty.
    pub suggestions: Vec<String>,
}

impl Feedback {
    /// Render the feedback as a single display message.
    pub fn to_message(&self) -> String {
        if self.suggestions.is_empty() {
            format!(
                "{} Keep experimenting to discover new configurations!",
                self.summary
            )
        } else {
            format!("{} Suggestions: {}", self.summary, self.suggestions.join(". "))
        }
    }
}

/// Assess the current setup and collect suggestions.
pub fn assess(parameters: &Parameters, graph: &ModuleGraph, score: f64) -> Feedback {
    let mut suggestions = Vec::new();

    if parameters.memory < PARAMETER_LOW {
        suggestions.push("Increase memory allocation for better knowledge retention".to_string());
    } else if parameters.memory > PARAMETER_HIGH {
        suggestions.push(
            "High memory allocation detected - consider balancing with processing speed"
                .to_string(),
        );
    }

    if parameters.processing < PARAMETER_LOW {
        suggestions
            .push("Low processing speed may limit your AI's ability to learn effectively".to_string());
    } else if parameters.processing > PARAMETER_HIGH {
        suggestions.push(
            "High processing speed detected - ensure memory can keep up with processing demands"
                .to_string(),
        );
    }

    if parameters.complexity < PARAMETER_LOW {
        suggestions
            .push("Adding more complexity could lead to more sophisticated behaviors".to_string());
    } else if parameters.complexity > PARAMETER_HIGH {
        suggestions.push(
            "High complexity detected - ensure your AI has enough processing power to handle it"
                .to_string(),
        );
    }

    let module_count = graph.module_count();
    if module_count < 2 {
        suggestions
            .push("Try adding more modules to create a more complex neural network".to_string());
    } else if module_count > 8 {
        suggestions.push(
            "Large number of modules detected - ensure they're well-connected for optimal performance"
                .to_string(),
        );
    }

    if graph.kinds_present().len() < 3 && module_count >= 3 {
        suggestions.push(
            "Consider diversifying your module types for more balanced consciousness".to_string(),
        );
    }

    if graph.average_degree() < 1.0 && module_count > 1 {
        suggestions.push(
            "Your modules have few connections - try placing them closer together".to_string(),
        );
    }

    let summary = if score > 0.7 {
        "Your AI is showing advanced signs of consciousness!"
    } else if score > 0.4 {
        "Your AI is developing well."
    } else if score > 0.2 {
        "Your AI is showing early signs of consciousness."
    } else {
        "Your AI is in its initial stages."
    };

    Feedback {
        summary: summary.to_string(),
        suggestions,
    }
}
