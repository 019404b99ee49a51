//! Prelude module for convenient imports
//!
//! ```rust
//! use minion_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::{upgrade_legacy, StatBlock};
pub use crate::types::{Ability, GrantedAbility, Rarity, Role, Slot, StatDimension, Theme};

// Generation
pub use crate::generator::Generator;

// Runtime character
pub use crate::item::{Archetype, Item};
pub use crate::minion::{AbilityLevels, Minion};

// Config
pub use crate::config::{GameConstants, GenerationConstants, LevelingConstants};
