use crate::error::{GraphError, Result};
use serde::Deserialize;
use std::path::Path;

/// Average walking speed in distance units per second
pub const DEFAULT_WALKING_SPEED: f64 = 1.4;

/// How construction treats edges whose endpoints are not in the node set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingEdgePolicy {
    /// Index the edge anyway; a route crossing it fails with `InconsistentGraph`
    #[default]
    Permissive,

    /// Fail construction with `InvalidEdge`
    Reject,
}

/// Routing knobs shared by every snapshot built from the same source
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouteConfig {
    pub walking_speed: f64,
    pub dangling_edges: DanglingEdgePolicy,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            walking_speed: DEFAULT_WALKING_SPEED,
            dangling_edges: DanglingEdgePolicy::default(),
        }
    }
}

impl RouteConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GraphError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    #[must_use]
    pub fn with_walking_speed(mut self, walking_speed: f64) -> Self {
        self.walking_speed = walking_speed;
        self
    }

    #[must_use]
    pub fn with_dangling_edges(mut self, policy: DanglingEdgePolicy) -> Self {
        self.dangling_edges = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.walking_speed.is_finite() || self.walking_speed <= 0.0 {
            return Err(GraphError::Config(format!(
                "walking_speed must be a positive number, got {}",
                self.walking_speed
            )));
        }
        Ok(())
    }

    /// Seconds needed to walk `distance`, rounded up
    pub fn estimated_seconds(&self, distance: f64) -> u64 {
        (distance / self.walking_speed).ceil() as u64
    }
}
