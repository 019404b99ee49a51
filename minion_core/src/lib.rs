//! minion_core - Procedural gear stats and minion stat aggregation
//!
//! This library provides:
//! - Generator: budget-constrained stat/ability generation for items
//! - StatBlock: the fixed stat record carried by generated gear
//! - Minion: runtime character with equipment, leveling, and a fully
//!   recomputed stat snapshot
//!
//! Generation takes an injected `rand::Rng` so content rolls are
//! reproducible under a fixed seed; aggregation is deterministic.

pub mod config;
pub mod generator;
pub mod item;
pub mod minion;
pub mod prelude;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use config::{ConfigError, GameConstants, GenerationConstants, LevelingConstants};
pub use generator::Generator;
pub use item::{Archetype, Item};
pub use minion::{AbilityLevels, Minion};
pub use stat_block::{upgrade_legacy, StatBlock};
pub use types::{Ability, GrantedAbility, Rarity, Role, Slot, StatDimension, Theme};
