//! Generator settings.
//!
//! The defaults describe the classic demo board: an 800x600 area, a 50 unit
//! border, 50 nodes at least 10 units apart and an edge odds constant of
//! 10. [`GeneratorConfig`] derives serde traits so a host application can
//! load it from whatever format it already uses.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default width of the area nodes are placed in.
pub const DEFAULT_WIDTH: f32 = 800.0;
/// Default height of the area nodes are placed in.
pub const DEFAULT_HEIGHT: f32 = 600.0;
/// Border left free of random nodes on every side.
pub const DEFAULT_PADDING: f32 = 50.0;
/// Total nodes in a generated graph, start and end included.
pub const DEFAULT_NODE_COUNT: usize = 50;
/// Minimum distance between randomly placed nodes.
pub const DEFAULT_MIN_SEPARATION: f32 = 10.0;
/// The `K` in the `K / distance` edge odds.
pub const DEFAULT_EDGE_ODDS_CONSTANT: f32 = 10.0;
/// Radius within which a point picks a node.
pub const DEFAULT_PICK_RADIUS: f32 = 5.0;
/// Samples tried per node before placement gives up.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Settings for [`RandomGraphGenerator`](crate::generator::RandomGraphGenerator)
/// and [`Session`](crate::session::Session).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    ///width
    pub width: f32,
    ///height
    pub height: f32,
    ///padding
    pub padding: f32,
    /// Total node count, start and end included.
    pub node_count: usize,
    ///min_separation
    pub min_separation: f32,
    ///edge_odds_constant
    pub edge_odds_constant: f32,
    ///pick_radius
    pub pick_radius: f32,
    ///max_placement_attempts
    pub max_placement_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: DEFAULT_PADDING,
            node_count: DEFAULT_NODE_COUNT,
            min_separation: DEFAULT_MIN_SEPARATION,
            edge_odds_constant: DEFAULT_EDGE_ODDS_CONSTANT,
            pick_radius: DEFAULT_PICK_RADIUS,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Checks that the settings can produce a graph.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] when the padding leaves no room inside
    /// the area, fewer than two nodes are requested, or a numeric setting
    /// is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.width,
            self.height,
            self.padding,
            self.min_separation,
            self.edge_odds_constant,
            self.pick_radius,
        ];
        if finite.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(Error::InvalidConfig(
                "numeric settings must be finite and non-negative".to_string(),
            ));
        }
        if self.width < 2.0 * self.padding || self.height < 2.0 * self.padding {
            return Err(Error::InvalidConfig(format!(
                "padding {} leaves no room in a {}x{} area",
                self.padding, self.width, self.height
            )));
        }
        if self.node_count < 2 {
            return Err(Error::InvalidConfig(
                "node_count must include the start and end nodes".to_string(),
            ));
        }
        if self.max_placement_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max_placement_attempts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_invalid_settings() {
        let config = GeneratorConfig {
            padding: 500.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = GeneratorConfig {
            node_count: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            min_separation: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    /// Missing fields fall back to the defaults.
    #[test]
    fn test_partial_deserialize() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"node_count": 12, "width": 400.0}"#).unwrap();
        assert_eq!(config.node_count, 12);
        assert_eq!(config.width, 400.0);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.edge_odds_constant, DEFAULT_EDGE_ODDS_CONSTANT);
    }
}
