//! Module kinds and the fixed wiring tables between them.

use serde::{Deserialize, Serialize};

/// The cognitive subsystems a module can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Sensory,
    Vision,
    Memory,
    Decision,
    Emotion,
    Attention,
    Language,
    Motor,
}

impl ModuleKind {
    /// All kinds, in palette order.
    pub const ALL: [ModuleKind; 8] = [
        ModuleKind::Sensory,
        ModuleKind::Vision,
        ModuleKind::Memory,
        ModuleKind::Decision,
        ModuleKind::Emotion,
        ModuleKind::Attention,
        ModuleKind::Language,
        ModuleKind::Motor,
    ];

    /// The signalling role this kind plays in the network.
    ///
    /// Kinds without an explicit entry act as processors.
    pub fn role(&self) -> ModuleRole {
        match self {
            ModuleKind::Sensory => ModuleRole::Sender,
            ModuleKind::Decision => ModuleRole::Receiver,
            _ => ModuleRole::Processor,
        }
    }

    /// Kinds that may follow this kind in the signal chain.
    ///
    /// The table is directed: when a module is placed, existing modules
    /// whose successor list names the new kind are connection candidates,
    /// though the resulting edge is symmetric. Kinds absent from the table
    /// admit no automatic connection.
    pub fn successors(&self) -> &'static [ModuleKind] {
        match self {
            ModuleKind::Sensory => &[ModuleKind::Vision, ModuleKind::Memory],
            ModuleKind::Vision => &[ModuleKind::Memory],
            ModuleKind::Memory => &[ModuleKind::Decision],
            _ => &[],
        }
    }

    /// Lowercase label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            ModuleKind::Sensory => "sensory",
            ModuleKind::Vision => "vision",
            ModuleKind::Memory => "memory",
            ModuleKind::Decision => "decision",
            ModuleKind::Emotion => "emotion",
            ModuleKind::Attention => "attention",
            ModuleKind::Language => "language",
            ModuleKind::Motor => "motor",
        }
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Signalling roles a module can hold in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleRole {
    Sender,
    Processor,
    Receiver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_lookup() {
        assert_eq!(ModuleKind::Sensory.role(), ModuleRole::Sender);
        assert_eq!(ModuleKind::Decision.role(), ModuleRole::Receiver);
        assert_eq!(ModuleKind::Vision.role(), ModuleRole::Processor);
        assert_eq!(ModuleKind::Motor.role(), ModuleRole::Processor);
    }

    #[test]
    fn test_successor_table() {
        assert_eq!(
            ModuleKind::Sensory.successors(),
            &[ModuleKind::Vision, ModuleKind::Memory]
        );
        assert_eq!(ModuleKind::Vision.successors(), &[ModuleKind::Memory]);
        assert_eq!(ModuleKind::Memory.successors(), &[ModuleKind::Decision]);
        assert!(ModuleKind::Decision.successors().is_empty());
        assert!(ModuleKind::Emotion.successors().is_empty());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ModuleKind::Vision).unwrap();
        assert_eq!(json, "\"vision\"");

        let kind: ModuleKind = serde_json::from_str("\"sensory\"").unwrap();
        assert_eq!(kind, ModuleKind::Sensory);
    }

    #[test]
    fn test_all_covers_every_kind() {
        assert_eq!(ModuleKind::ALL.len(), 8);
        for kind in ModuleKind::ALL {
            assert_eq!(kind.label(), kind.to_string());
        }
    }
}
