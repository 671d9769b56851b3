//! The module graph - placement, wiring, and per-tick activity.

use serde::{Deserialize, Serialize};

use crate::modules::{Module, ModuleId, ModuleKind, Position};
use crate::parameters::Parameters;

/// Frequency of the shared activation oscillation, in radians per tick.
const ACTIVATION_FREQUENCY: f32 = 0.05;

/// An ordered collection of modules with a symmetric connection relation.
///
/// Insertion order is creation order; module ids index into this order and
/// saved configurations serialize connections by index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleGraph {
    modules: Vec<Module>,
}

impl ModuleGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module and wire it to the nearest allowed predecessor.
    ///
    /// If any existing module's kind lists the new kind as a successor,
    /// the nearest such module (strict minimum, first wins on ties) gains
    /// a symmetric edge to the new module. Otherwise the module starts
    /// isolated. Always succeeds.
    pub fn add_module(&mut self, kind: ModuleKind, position: Position) -> ModuleId {
        let target = self.nearest_predecessor(kind, position);
        let id = self.insert_isolated(kind, position);
        if let Some(target) = target {
            self.connect(id, target);
        }
        id
    }

    /// Place a module without consulting the wiring rule.
    ///
    /// Used when rebuilding a saved graph, where edges are applied
    /// verbatim afterwards.
    pub fn insert_isolated(&mut self, kind: ModuleKind, position: Position) -> ModuleId {
        let id = ModuleId(self.modules.len());
        self.modules.push(Module::new(id, kind, position));
        id
    }

    /// Nearest existing module whose kind admits the given kind as a
    /// successor.
    fn nearest_predecessor(&self, kind: ModuleKind, position: Position) -> Option<ModuleId> {
        let mut nearest: Option<(ModuleId, f32)> = None;

        for module in &self.modules {
            if !module.kind.successors().contains(&kind) {
                continue;
            }
            let distance = module.position.distance_to(position);
            match nearest {
                // A later module at equal distance does not replace the
                // earlier one.
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((module.id, distance)),
            }
        }

        nearest.map(|(id, _)| id)
    }

    /// Insert a symmetric edge between two modules.
    ///
    /// Self-edges, unknown ids, and duplicates are rejected. Returns
    /// whether an edge was added.
    pub fn connect(&mut self, a: ModuleId, b: ModuleId) -> bool {
        if a == b || a.index() >= self.modules.len() || b.index() >= self.modules.len() {
            return false;
        }
        if self.modules[a.index()].is_connected_to(b) {
            return false;
        }
        self.modules[a.index()].neighbors.push(b);
        self.modules[b.index()].neighbors.push(a);
        true
    }

    /// Recompute every module's activation for the given tick.
    ///
    /// All modules share the same oscillation phase, scaled by the
    /// processing parameter.
    pub fn tick(&mut self, parameters: &Parameters, current_tick: u64) {
        let base = (current_tick as f32 * ACTIVATION_FREQUENCY).sin() * 0.5 + 0.5;
        let gain = parameters.processing as f32 / 100.0;
        for module in &mut self.modules {
            module.activation = base * gain;
        }
    }

    pub fn get(&self, id: ModuleId) -> Option<&Module> {
        self.modules.get(id.index())
    }

    /// All modules in creation order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Remove every module. Connections go with them.
    pub fn clear(&mut self) {
        self.modules.clear();
    }

    /// Distinct kinds currently placed, in first-appearance order.
    pub fn kinds_present(&self) -> Vec<ModuleKind> {
        let mut kinds = Vec::new();
        for module in &self.modules {
            if !kinds.contains(&module.kind) {
                kinds.push(module.kind);
            }
        }
        kinds
    }

    /// Sum of neighbor-list lengths. Every edge contributes two endpoints.
    pub fn edge_endpoints(&self) -> usize {
        self.modules.iter().map(Module::degree).sum()
    }

    /// Average neighbors per module; 0 for an empty graph.
    pub fn average_degree(&self) -> f32 {
        if self.modules.is_empty() {
            return 0.0;
        }
        self.edge_endpoints() as f32 / self.modules.len() as f32
    }

    /// Normalized wiring strength in [0, 1].
    ///
    /// Graphs with at most one module have no possible wiring and report 0
    /// rather than dividing by zero.
    pub fn connection_strength(&self) -> f32 {
        let count = self.modules.len();
        if count <= 1 {
            return 0.0;
        }
        let max_edges = (count * (count - 1) / 2) as f32;
        (self.edge_endpoints() as f32 / max_edges).min(1.0)
    }
}
