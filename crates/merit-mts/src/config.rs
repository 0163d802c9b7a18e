//! Search configuration.
//!
//! All knobs live in one immutable struct handed to the search; nothing
//! is read from process-wide state. Validation happens once, up front,
//! so a bad configuration never starts a partial run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MtsError, MtsResult};

/// How the initial population is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitStrategy {
    /// Uniform random sequences.
    Random,
    /// Sequences drawn from the quantum sampler's output distribution.
    Quantum,
}

impl fmt::Display for InitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitStrategy::Random => f.write_str("random"),
            InitStrategy::Quantum => f.write_str("quantum"),
        }
    }
}

/// How combination parents are chosen from the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentSelection {
    /// Binary tournament: the better of two uniform draws, per parent.
    Fitness,
    /// Two uniform draws.
    Uniform,
}

/// Tunables that steer a Memetic Tabu Search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MtsConfig {
    /// Number of individuals kept in the population.
    pub population_size: usize,
    /// Number of combine cycles (the outer step budget).
    pub mts_steps: usize,
    /// Maximum flip iterations per local-search phase.
    pub local_iters: usize,
    /// Iterations a reversed move stays forbidden.
    pub tabu_tenure: usize,
    /// Consecutive non-improving accepts before a local phase stops.
    pub patience: usize,
    /// Per-bit flip probability applied to offspring.
    pub mutation_rate: f64,
    /// Parent selection scheme for combination.
    pub parent_selection: ParentSelection,
    /// Initial population source.
    pub init: InitStrategy,
}

impl Default for MtsConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            mts_steps: 150,
            local_iters: 100,
            tabu_tenure: 10,
            patience: 20,
            mutation_rate: 0.05,
            parent_selection: ParentSelection::Fitness,
            init: InitStrategy::Random,
        }
    }
}

impl MtsConfig {
    /// Check every field, rejecting the configuration before any search
    /// work begins.
    pub fn validate(&self) -> MtsResult<()> {
        if self.population_size < 2 {
            return Err(MtsError::InvalidConfig(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.mts_steps == 0 {
            return Err(MtsError::InvalidConfig("mts_steps must be positive".into()));
        }
        if self.local_iters == 0 {
            return Err(MtsError::InvalidConfig(
                "local_iters must be positive".into(),
            ));
        }
        if self.tabu_tenure == 0 {
            return Err(MtsError::InvalidConfig(
                "tabu_tenure must be positive".into(),
            ));
        }
        if self.patience == 0 {
            return Err(MtsError::InvalidConfig("patience must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(MtsError::InvalidConfig(format!(
                "mutation_rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MtsConfig::default().validate().is_ok());
    }

    #[test]
    fn bad_fields_rejected() {
        let cases = [
            MtsConfig {
                population_size: 1,
                ..Default::default()
            },
            MtsConfig {
                mts_steps: 0,
                ..Default::default()
            },
            MtsConfig {
                local_iters: 0,
                ..Default::default()
            },
            MtsConfig {
                tabu_tenure: 0,
                ..Default::default()
            },
            MtsConfig {
                patience: 0,
                ..Default::default()
            },
            MtsConfig {
                mutation_rate: 1.5,
                ..Default::default()
            },
            MtsConfig {
                mutation_rate: f64::NAN,
                ..Default::default()
            },
        ];
        for config in cases {
            assert!(matches!(
                config.validate(),
                Err(MtsError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn init_strategy_serde_names() {
        let json = serde_json::to_string(&InitStrategy::Quantum).unwrap();
        assert_eq!(json, "\"quantum\"");
    }
}
