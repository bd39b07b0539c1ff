use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameters of the embedded simulation, overridable from the query string
/// (e.g. `/simulator-home?seed=7&fire_rate=0.3`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Width and height of the square cell grid
    pub grid_size: usize,
    /// Total state channels per cell
    pub channels: usize,
    /// Leading channels holding the fixed input image
    pub input_channels: usize,
    /// Width of the update network's hidden layer
    pub hidden_channels: usize,
    /// Probability that a cell applies its update on a given step
    pub fire_rate: f32,
    /// Cells whose neighbourhood alpha stays below this are cleared; 0 disables
    pub alive_threshold: f32,
    /// Standard deviation of the initial update-network weights
    pub init_std: f32,
    pub seed: u64,
    pub steps_per_frame: u32,
    pub frame_ms: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: 32,
            channels: 16,
            input_channels: 3,
            hidden_channels: 128,
            fire_rate: 0.5,
            alive_threshold: 0.1,
            init_std: 0.05,
            seed: 42,
            steps_per_frame: 1,
            frame_ms: 50,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("malformed query string: {0}")]
    Parse(String),
    #[error("{field} = {value} is outside {range}")]
    OutOfRange {
        field: &'static str,
        value: String,
        range: &'static str,
    },
    #[error("{steps_per_frame} steps per frame of {step_cost} units exceed the frame budget")]
    TooExpensive { step_cost: usize, steps_per_frame: u32 },
    #[error("channels ({channels}) must exceed input_channels ({input_channels})")]
    NoStateChannels {
        channels: usize,
        input_channels: usize,
    },
}

/// Multiply-accumulates one step may spend, summed over a frame
/// (`steps_per_frame` steps). Eight steps of the default 32x32x16x128 model.
pub const FRAME_WORK_BUDGET: usize = 1 << 24;

fn check<T: ToString>(
    field: &'static str,
    value: T,
    ok: bool,
    range: &'static str,
) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value: value.to_string(),
            range,
        })
    }
}

impl SimulationConfig {
    /// Parse a query string (with or without the leading `?`). Absent fields
    /// keep their defaults.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let query = query.trim_start_matches('?');
        let config: Self =
            serde_urlencoded::from_str(query).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()
    }

    /// Like `from_query`, but falls back to defaults and logs when the query is unusable.
    pub fn from_query_or_default(query: &str) -> Self {
        Self::from_query(query).unwrap_or_else(|e| {
            leptos::logging::warn!("NCA: ignoring simulation parameters ({}), using defaults", e);
            Self::default()
        })
    }

    /// `validate`, falling back to defaults with a warning.
    pub fn validated_or_default(self) -> Self {
        self.validate().unwrap_or_else(|e| {
            leptos::logging::warn!("NCA: invalid simulation config ({}), using defaults", e);
            Self::default()
        })
    }

    /// Work for one step: cells x channels x hidden units.
    pub fn step_cost(&self) -> usize {
        self.grid_size * self.grid_size * self.channels * self.hidden_channels
    }

    /// Largest `steps_per_frame` (at most 16) that stays within `FRAME_WORK_BUDGET`.
    pub fn max_steps_per_frame(&self) -> u32 {
        (FRAME_WORK_BUDGET / self.step_cost().max(1)).clamp(1, 16) as u32
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        check("grid_size", self.grid_size, (8..=128).contains(&self.grid_size), "8..=128")?;
        check(
            "input_channels",
            self.input_channels,
            (1..=3).contains(&self.input_channels),
            "1..=3",
        )?;
        if self.channels <= self.input_channels {
            return Err(ConfigError::NoStateChannels {
                channels: self.channels,
                input_channels: self.input_channels,
            });
        }
        check("channels", self.channels, self.channels <= 64, "..=64")?;
        check(
            "hidden_channels",
            self.hidden_channels,
            (1..=512).contains(&self.hidden_channels),
            "1..=512",
        )?;
        check(
            "fire_rate",
            self.fire_rate,
            self.fire_rate > 0.0 && self.fire_rate <= 1.0,
            "(0, 1]",
        )?;
        check(
            "alive_threshold",
            self.alive_threshold,
            self.alive_threshold.is_finite() && self.alive_threshold >= 0.0,
            "finite, >= 0",
        )?;
        check(
            "init_std",
            self.init_std,
            self.init_std.is_finite() && self.init_std >= 0.0,
            "finite, >= 0",
        )?;
        check(
            "steps_per_frame",
            self.steps_per_frame,
            (1..=16).contains(&self.steps_per_frame),
            "1..=16",
        )?;
        check(
            "frame_ms",
            self.frame_ms,
            (16..=1000).contains(&self.frame_ms),
            "16..=1000",
        )?;
        if self.steps_per_frame > self.max_steps_per_frame()
            || self.step_cost() > FRAME_WORK_BUDGET
        {
            return Err(ConfigError::TooExpensive {
                step_cost: self.step_cost(),
                steps_per_frame: self.steps_per_frame,
            });
        }
        Ok(self)
    }

    /// Index of the alpha ("alive") channel
    pub fn alpha_channel(&self) -> usize {
        self.input_channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_gives_defaults() {
        assert_eq!(SimulationConfig::from_query("").unwrap(), SimulationConfig::default());
        assert_eq!(SimulationConfig::from_query("?").unwrap(), SimulationConfig::default());
    }

    #[test]
    fn test_defaults_match_model_shape() {
        let config = SimulationConfig::default();
        assert_eq!(config.grid_size, 32);
        assert_eq!(config.channels, 16);
        assert_eq!(config.hidden_channels, 128);
        assert_eq!(config.input_channels, 3);
        assert_eq!(config.alpha_channel(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_query_overrides_fields() {
        let config = SimulationConfig::from_query("?seed=7&fire_rate=0.25&grid_size=48").unwrap();
        assert_eq!(config.seed, 7);
        assert!((config.fire_rate - 0.25).abs() < 1e-6);
        assert_eq!(config.grid_size, 48);
        assert_eq!(config.channels, 16);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = SimulationConfig::from_query("utm_source=newsletter&seed=3").unwrap();
        assert_eq!(config.seed, 3);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = SimulationConfig::from_query("grid_size=4").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "grid_size", .. }));

        let err = SimulationConfig::from_query("fire_rate=0").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "fire_rate", .. }));

        let err = SimulationConfig::from_query("frame_ms=5").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "frame_ms", .. }));
    }

    #[test]
    fn test_rejects_missing_state_channels() {
        let err = SimulationConfig::from_query("channels=3").unwrap_err();
        assert_eq!(
            err,
            ConfigError::NoStateChannels {
                channels: 3,
                input_channels: 3
            }
        );
    }

    #[test]
    fn test_malformed_value_is_parse_error() {
        let err = SimulationConfig::from_query("seed=abc").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = SimulationConfig::from_query("init_std=inf").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "init_std", .. }));

        let err = SimulationConfig::from_query("alive_threshold=inf").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "alive_threshold", .. }));

        let err = SimulationConfig::from_query("init_std=NaN").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "init_std", .. }));
    }

    #[test]
    fn test_rejects_work_beyond_frame_budget() {
        let err = SimulationConfig::from_query(
            "grid_size=128&channels=64&hidden_channels=512&steps_per_frame=16&frame_ms=16",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::TooExpensive { .. }));

        // A single step of the largest grid is already over budget
        let err = SimulationConfig::from_query("grid_size=128&channels=64&hidden_channels=512")
            .unwrap_err();
        assert!(matches!(err, ConfigError::TooExpensive { steps_per_frame: 1, .. }));

        // Defaults fit eight steps per frame, not sixteen
        let config = SimulationConfig::default();
        assert_eq!(config.max_steps_per_frame(), 8);
        assert!(SimulationConfig::from_query("steps_per_frame=8").is_ok());
        assert!(matches!(
            SimulationConfig::from_query("steps_per_frame=16").unwrap_err(),
            ConfigError::TooExpensive { .. }
        ));
    }

    #[test]
    fn test_small_models_allow_sixteen_steps() {
        let config = SimulationConfig::from_query("grid_size=16&hidden_channels=32&steps_per_frame=16")
            .unwrap();
        assert_eq!(config.max_steps_per_frame(), 16);
    }

    #[test]
    fn test_explicit_config_is_validated() {
        let zero_grid = SimulationConfig { grid_size: 0, ..Default::default() };
        assert!(zero_grid.validate().is_err());

        let no_state = SimulationConfig { channels: 2, ..Default::default() };
        assert!(matches!(no_state.validate(), Err(ConfigError::NoStateChannels { .. })));

        assert_eq!(SimulationConfig::default().validated_or_default(), SimulationConfig::default());
    }

    #[test]
    fn test_error_messages() {
        let err = SimulationConfig::from_query("steps_per_frame=99").unwrap_err();
        assert_eq!(err.to_string(), "steps_per_frame = 99 is outside 1..=16");
    }
}
