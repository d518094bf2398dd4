use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ArchiveResult;

/// Retrieval subsystem configuration: thresholds and ranking knobs that
/// the `Archive` facade consults on every `retrieve`/`smart_lookup` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub exact_threshold: f64,
    pub hint_threshold: f64,
    pub graph_boost_factor: f64,
    pub candidate_overfetch_factor: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            exact_threshold: constants::DEFAULT_EXACT_THRESHOLD,
            hint_threshold: constants::DEFAULT_HINT_THRESHOLD,
            graph_boost_factor: constants::DEFAULT_GRAPH_BOOST_FACTOR,
            candidate_overfetch_factor: constants::CANDIDATE_OVERFETCH_FACTOR,
        }
    }
}

/// Per-scope decay rate overrides. Defaults reproduce the calibration
/// target in `spec.md` §4.3; overriding is intended for deployments that
/// need faster/slower institutional memory without touching the formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    pub lambda_user: f64,
    pub lambda_project: f64,
    pub lambda_department: f64,
    pub lambda_client: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            lambda_user: constants::LAMBDA_USER,
            lambda_project: constants::LAMBDA_PROJECT,
            lambda_department: constants::LAMBDA_DEPARTMENT,
            lambda_client: constants::LAMBDA_CLIENT,
        }
    }
}

/// Top-level archive configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    pub retrieval: RetrievalConfig,
    pub decay: DecayConfig,
}

impl ArchiveConfig {
    /// Parse configuration from a TOML document.
    pub fn from_toml(s: &str) -> ArchiveResult<Self> {
        Ok(toml::from_str(s)?)
    }
}
