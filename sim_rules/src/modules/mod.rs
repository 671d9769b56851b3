//! Module definitions - the typed nodes of the simulation graph.

mod kind;

pub use kind::*;

use serde::{Deserialize, Serialize};

/// Identifier of a module, stable for the lifetime of a graph.
///
/// Ids are assigned in creation order and double as positions in the
/// graph's module list; saved configurations rely on this ordering.
/// Modules are never removed individually, only by whole-graph reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleId(pub usize);

impl ModuleId {
    /// Position of the module in the graph's module list.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position on the sandbox canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: Position) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A typed node in the simulation graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub kind: ModuleKind,
    /// Derived from the kind at creation time.
    pub role: ModuleRole,
    pub position: Position,
    /// Oscillating activity level in [0, 1], recomputed every tick.
    pub activation: f32,
    /// Ids of connected modules. The relation is symmetric and never
    /// contains the module itself.
    pub neighbors: Vec<ModuleId>,
}

impl Module {
    /// Create an inactive, unconnected module.
    pub fn new(id: ModuleId, kind: ModuleKind, position: Position) -> Self {
        Self {
            id,
            kind,
            role: kind.role(),
            position,
            activation: 0.0,
            neighbors: Vec::new(),
        }
    }

    pub fn is_connected_to(&self, other: ModuleId) -> bool {
        self.neighbors.contains(&other)
    }

    /// Number of neighbors.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_module_starts_inactive() {
        let module = Module::new(ModuleId(0), ModuleKind::Vision, Position::new(10.0, 20.0));

        assert_eq!(module.id, ModuleId(0));
        assert_eq!(module.role, ModuleRole::Processor);
        assert_eq!(module.activation, 0.0);
        assert!(module.neighbors.is_empty());
    }

    #[test]
    fn test_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);

        assert!((a.distance_to(b) - 5.0).abs() < 0.001);
        assert!((b.distance_to(a) - 5.0).abs() < 0.001);
        assert_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn test_role_follows_kind() {
        let sensory = Module::new(ModuleId(0), ModuleKind::Sensory, Position::default());
        let decision = Module::new(ModuleId(1), ModuleKind::Decision, Position::default());

        assert_eq!(sensory.role, ModuleRole::Sender);
        assert_eq!(decision.role, ModuleRole::Receiver);
    }
}
