//! Engine configuration
//!
//! Every field has a default; a YAML file only needs to name what it
//! overrides:
//!
//! ```yaml
//! layout:
//!   top_ideas_limit: 12
//!   force:
//!     iterations: 80
//! source:
//!   cache_ttl_secs: 60
//! ```

use ideagraph_geometry::ForceConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub layout: LayoutConfig,
    pub edges: EdgeStyleConfig,
    pub source: SourceConfig,
}

/// Placement constants for the four view levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between cluster bubbles
    pub cluster_spacing_x: f64,
    /// Vertical distance between cluster bubble rows
    pub cluster_spacing_y: f64,
    /// Ideas shown inside each region in the regions presentation
    pub region_top_n: usize,
    /// Columns of the idea grid inside a region
    pub region_columns: usize,
    pub region_cell_width: f64,
    pub region_cell_height: f64,
    /// Space between a region border and its idea grid (top padding also
    /// holds the region title)
    pub region_padding: f64,
    /// Gap between neighbouring regions
    pub region_gap: f64,
    /// Ideas drawn at the top-ideas level
    pub top_ideas_limit: usize,
    /// Ranks placed on the inner ring at the top-ideas level
    pub inner_ring_capacity: usize,
    pub inner_ring_radius: f64,
    pub outer_ring_radius: f64,
    /// Radius step between concentric rings at the all-ideas level
    pub ring_spacing: f64,
    pub force: ForceConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cluster_spacing_x: 320.0,
            cluster_spacing_y: 280.0,
            region_top_n: 6,
            region_columns: 3,
            region_cell_width: 200.0,
            region_cell_height: 120.0,
            region_padding: 40.0,
            region_gap: 80.0,
            top_ideas_limit: 20,
            inner_ring_capacity: 6,
            inner_ring_radius: 280.0,
            outer_ring_radius: 560.0,
            ring_spacing: 240.0,
            force: ForceConfig::default(),
        }
    }
}

/// Edge stroke styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeStyleConfig {
    /// Stroke width of a similar edge at strength 0
    pub similar_min_width: f64,
    /// Stroke width of a similar edge at strength 1
    pub similar_max_width: f64,
    pub similar_min_opacity: f64,
    pub similar_max_opacity: f64,
    pub contradictory_width: f64,
    pub contradictory_dash: String,
    pub contradictory_opacity: f64,
    pub contradictory_animated: bool,
}

impl Default for EdgeStyleConfig {
    fn default() -> Self {
        Self {
            similar_min_width: 1.0,
            similar_max_width: 4.0,
            similar_min_opacity: 0.35,
            similar_max_opacity: 0.85,
            contradictory_width: 2.5,
            contradictory_dash: "6 4".to_string(),
            contradictory_opacity: 0.9,
            contradictory_animated: true,
        }
    }
}

/// Graph fetch settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// How long a fetched payload is reused
    pub cache_ttl_secs: u64,
    pub http_timeout_secs: u64,
    /// Link offered from the "graph not available" state
    pub fallback_link: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 300,
            http_timeout_secs: 30,
            fallback_link: "/search".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Reject values no layout can work with
    pub fn validate(&self) -> ConfigResult<()> {
        let layout = &self.layout;
        if layout.region_columns == 0 {
            return Err(ConfigError::Invalid("layout.region_columns must be at least 1".into()));
        }
        let lengths = [
            ("layout.cluster_spacing_x", layout.cluster_spacing_x),
            ("layout.cluster_spacing_y", layout.cluster_spacing_y),
            ("layout.region_cell_width", layout.region_cell_width),
            ("layout.region_cell_height", layout.region_cell_height),
            ("layout.region_padding", layout.region_padding),
            ("layout.region_gap", layout.region_gap),
            ("layout.inner_ring_radius", layout.inner_ring_radius),
            ("layout.outer_ring_radius", layout.outer_ring_radius),
            ("layout.ring_spacing", layout.ring_spacing),
            ("layout.force.min_distance", layout.force.min_distance),
            ("layout.force.seed_spacing", layout.force.seed_spacing),
            ("layout.force.push_distance", layout.force.push_distance),
            ("edges.similar_min_width", self.edges.similar_min_width),
            ("edges.contradictory_width", self.edges.contradictory_width),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{} must be a non-negative number", name)));
            }
        }
        if self.edges.similar_max_width < self.edges.similar_min_width {
            return Err(ConfigError::Invalid(
                "edges.similar_max_width must not be below edges.similar_min_width".into(),
            ));
        }
        if !(0.0..=1.0).contains(&layout.force.damping) {
            return Err(ConfigError::Invalid("layout.force.damping must be within [0, 1]".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layout.top_ideas_limit, 20);
        assert_eq!(config.layout.inner_ring_capacity, 6);
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let config = EngineConfig::from_yaml_str(
            "layout:\n  top_ideas_limit: 12\n  force:\n    iterations: 80\nsource:\n  cache_ttl_secs: 60\n",
        )
        .unwrap();
        assert_eq!(config.layout.top_ideas_limit, 12);
        assert_eq!(config.layout.force.iterations, 80);
        assert_eq!(config.layout.force.damping, ForceConfig::default().damping);
        assert_eq!(config.source.cache_ttl_secs, 60);
        assert_eq!(config.edges, EdgeStyleConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = EngineConfig::from_yaml_str("layout:\n  region_columns: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = EngineConfig::from_yaml_str("edges:\n  similar_max_width: 0.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = EngineConfig::from_yaml_str("layout: [1, 2]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "layout:\n  ring_spacing: 100.0").unwrap();
        let config = EngineConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.layout.ring_spacing, 100.0);
    }
}
