//! Tunable game constants
//!
//! Only the scalar knobs live here. The closed lookup tables (dimension
//! costs and caps, rarity budgets, slot pools, affinity weights) are
//! exhaustive matches on their enums in `types` and the generator modules.

use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameConstants {
    #[serde(default)]
    pub generation: GenerationConstants,
    #[serde(default)]
    pub leveling: LevelingConstants,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationConstants {
    /// Upper bound on allocation loop iterations per pool
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    /// Most units a single allocation step may invest in one dimension
    #[serde(default = "default_step_ceiling")]
    pub step_ceiling: u32,
}

impl Default for GenerationConstants {
    fn default() -> Self {
        GenerationConstants {
            max_iterations: 50,
            step_ceiling: 8,
        }
    }
}

fn default_max_iterations() -> u32 {
    50
}
fn default_step_ceiling() -> u32 {
    8
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelingConstants {
    /// Experience required to go from level 1 to level 2
    #[serde(default = "default_base_threshold")]
    pub base_threshold: u32,
    /// Threshold multiplier applied on every level-up (rounded to nearest)
    #[serde(default = "default_threshold_growth")]
    pub threshold_growth: f64,
    /// Maximum reachable level
    #[serde(default = "default_level_cap")]
    pub level_cap: u32,
}

impl Default for LevelingConstants {
    fn default() -> Self {
        LevelingConstants {
            base_threshold: 100,
            threshold_growth: 1.25,
            level_cap: 20,
        }
    }
}

fn default_base_threshold() -> u32 {
    100
}
fn default_threshold_growth() -> f64 {
    1.25
}
fn default_level_cap() -> u32 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = GameConstants::default();
        assert_eq!(constants.generation.max_iterations, 50);
        assert_eq!(constants.generation.step_ceiling, 8);
        assert_eq!(constants.leveling.base_threshold, 100);
        assert!((constants.leveling.threshold_growth - 1.25).abs() < f64::EPSILON);
        assert_eq!(constants.leveling.level_cap, 20);
    }

    #[test]
    fn test_parse_constants() {
        let toml = r#"
[generation]
max_iterations = 50
step_ceiling = 8

[leveling]
base_threshold = 100
threshold_growth = 1.25
level_cap = 20
"#;
        let constants: GameConstants = toml::from_str(toml).unwrap();
        assert_eq!(constants.generation.step_ceiling, 8);
        assert_eq!(constants.leveling.level_cap, 20);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let toml = r#"
[leveling]
level_cap = 30
"#;
        let constants: GameConstants = toml::from_str(toml).unwrap();
        assert_eq!(constants.leveling.level_cap, 30);
        assert_eq!(constants.leveling.base_threshold, 100);
        assert_eq!(constants.generation.max_iterations, 50);
    }
}
