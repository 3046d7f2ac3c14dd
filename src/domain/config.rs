use serde::{Deserialize, Serialize};

use super::{BoundaryMode, Result, RuleSet, SimulationError};

pub const DEFAULT_GRID_SIZE: usize = 50;
pub const DEFAULT_TICK_INTERVAL_SECS: f64 = 0.5;
pub const DEFAULT_DRAG_THRESHOLD: f32 = 4.0;

/// Everything a UI layer may tune about a simulation.
///
/// Grid dimensions are fixed once a simulation is built from this config;
/// the remaining fields seed the runtime toggles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub rules: RuleSet,
    pub boundary_mode: BoundaryMode,
    /// Seconds between ticks while rate limited
    pub tick_interval_secs: f64,
    pub rate_limited: bool,
    /// Screen distance a press must travel before it counts as a drag
    pub drag_threshold: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_SIZE,
            grid_height: DEFAULT_GRID_SIZE,
            rules: RuleSet::conway(),
            boundary_mode: BoundaryMode::Wrap,
            tick_interval_secs: DEFAULT_TICK_INTERVAL_SECS,
            rate_limited: true,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

impl SimulationConfig {
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(SimulationError::InvalidDimension {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!((config.grid_width, config.grid_height), (50, 50));
        assert_eq!(config.tick_interval_secs, 0.5);
        assert!(config.rate_limited);
        assert_eq!(config.boundary_mode, BoundaryMode::Wrap);
        assert_eq!(config.rules, RuleSet::conway());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = SimulationConfig::with_dimensions(0, 10).validate().unwrap_err();
        assert_eq!(err, SimulationError::InvalidDimension { width: 0, height: 10 });
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SimulationConfig = serde_json::from_str(
            r#"{ "grid_width": 80, "boundary_mode": "Bounded",
                 "rules": { "new_life": [3, 6], "keep_alive": [2, 3] } }"#,
        )
        .unwrap();
        assert_eq!(config.grid_width, 80);
        assert_eq!(config.grid_height, DEFAULT_GRID_SIZE);
        assert_eq!(config.boundary_mode, BoundaryMode::Bounded);
        assert_eq!(config.rules, RuleSet::highlife());
        assert!(config.rate_limited);
    }

    #[test]
    fn test_json_rejects_out_of_range_counts() {
        let result: std::result::Result<SimulationConfig, _> = serde_json::from_str(
            r#"{ "rules": { "new_life": [12], "keep_alive": [2, 3] } }"#,
        );
        assert!(result.is_err());
    }
}
