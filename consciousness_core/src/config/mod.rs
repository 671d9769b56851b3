//! Saved configurations - the persistence blob format.
//!
//! The host owns the actual storage; this module only defines the blob and
//! its (de)serialization. Connections are saved as positions into the
//! module array, which is stable because module ids are creation indices
//! and modules are never removed individually.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sim_rules::{ModuleGraph, ModuleId, ModuleKind, Parameters, Position};

/// Errors surfaced when restoring a saved configuration.
///
/// None of these are fatal: the host reports them and leaves the current
/// state untouched.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing has been stored yet.
    #[error("no saved configuration found")]
    NotFound,

    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("connection index {index} out of range for {modules} modules")]
    ConnectionOutOfRange { index: usize, modules: usize },
}

/// A saved module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedModule {
    pub kind: ModuleKind,
    pub x: f32,
    pub y: f32,
    /// Positions of connected modules in the surrounding array, at save
    /// time. Both directions of an edge are recorded.
    pub connection_indices: Vec<usize>,
}

/// The full persistence blob: module layout plus slider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedConfiguration {
    pub modules: Vec<SavedModule>,
    pub parameters: Parameters,
}

impl SavedConfiguration {
    /// Capture the current graph and parameters.
    pub fn capture(graph: &ModuleGraph, parameters: &Parameters) -> Self {
        let modules = graph
            .modules()
            .iter()
            .map(|module| SavedModule {
                kind: module.kind,
                x: module.position.x,
                y: module.position.y,
                connection_indices: module.neighbors.iter().map(ModuleId::index).collect(),
            })
            .collect();

        Self {
            modules,
            parameters: *parameters,
        }
    }

    /// Rebuild a graph and parameters from this configuration.
    ///
    /// Modules are recreated in array order without the automatic wiring
    /// rule; saved edges are applied verbatim, with the two recorded
    /// directions of an edge collapsing into one symmetric connection.
    pub fn restore(&self) -> Result<(ModuleGraph, Parameters), ConfigError> {
        let count = self.modules.len();
        for module in &self.modules {
            for &index in &module.connection_indices {
                if index >= count {
                    return Err(ConfigError::ConnectionOutOfRange {
                        index,
                        modules: count,
                    });
                }
            }
        }

        let mut graph = ModuleGraph::new();
        for module in &self.modules {
            graph.insert_isolated(module.kind, Position::new(module.x, module.y));
        }
        for (index, module) in self.modules.iter().enumerate() {
            for &target in &module.connection_indices {
                graph.connect(ModuleId(index), ModuleId(target));
            }
        }

        let parameters = Parameters::new(
            self.parameters.memory,
            self.parameters.processing,
            self.parameters.complexity,
        );

        Ok((graph, parameters))
    }

    /// Serialize to the stored JSON form.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(ConfigError::from)
    }

    /// Parse a stored JSON blob.
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(data).map_err(ConfigError::from)
    }
}
