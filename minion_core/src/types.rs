//! Core enumerations and their static lookup tables
//!
//! Every table here is a closed, exhaustive match so that adding an enum
//! member forces a review of each dispatch site.

use serde::{Deserialize, Serialize};

/// One numeric stat axis on generated gear.
///
/// Declaration order is the canonical priority order used for tie-breaking
/// throughout generation (leftover spend, padding, trimming).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatDimension {
    Health,
    Attack,
    Defense,
    CritChance,
    CritDamage,
    ArmorPen,
}

impl StatDimension {
    /// All dimensions in priority order
    pub const ALL: [StatDimension; 6] = [
        StatDimension::Health,
        StatDimension::Attack,
        StatDimension::Defense,
        StatDimension::CritChance,
        StatDimension::CritDamage,
        StatDimension::ArmorPen,
    ];

    /// Padding targets for the stat-count normalizer, in priority order
    pub const BASIC: [StatDimension; 3] = [
        StatDimension::Health,
        StatDimension::Attack,
        StatDimension::Defense,
    ];

    /// Budget cost of one unit of this dimension
    pub fn unit_cost(&self) -> u32 {
        match self {
            StatDimension::Health => 1,
            StatDimension::Attack => 2,
            StatDimension::Defense => 2,
            StatDimension::CritChance => 2,
            StatDimension::CritDamage => 2,
            StatDimension::ArmorPen => 3,
        }
    }

    /// Hard cap for a single generated item
    pub fn cap(&self) -> u32 {
        match self {
            StatDimension::Health => 40,
            StatDimension::Attack => 15,
            StatDimension::Defense => 15,
            StatDimension::CritChance => 10,
            StatDimension::CritDamage => 25,
            StatDimension::ArmorPen => 8,
        }
    }
}

/// Item rarity tiers, ordered weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    /// Total point budget granted for stat/ability generation
    pub fn budget(&self) -> u32 {
        match self {
            Rarity::Common => 8,
            Rarity::Uncommon => 16,
            Rarity::Rare => 30,
            Rarity::Legendary => 50,
        }
    }

    /// Minimum distinct non-zero dimensions expected on a generated item
    pub fn min_stats(&self) -> usize {
        match self {
            Rarity::Common => 1,
            Rarity::Uncommon => 2,
            Rarity::Rare => 2,
            Rarity::Legendary => 3,
        }
    }

    /// Nominal maximum distinct non-zero dimensions. The generator tolerates
    /// one extra above this as designed headroom.
    pub fn max_stats(&self) -> usize {
        match self {
            Rarity::Common => 2,
            Rarity::Uncommon => 3,
            Rarity::Rare => 4,
            Rarity::Legendary => 5,
        }
    }

    /// Probability that a generated item rolls a special ability
    pub fn ability_chance(&self) -> f64 {
        match self {
            Rarity::Common => 0.3,
            Rarity::Uncommon => 0.5,
            Rarity::Rare => 0.8,
            Rarity::Legendary => 1.0,
        }
    }

    /// Nested thresholds for the ability power level roll: `(p3, p2)`.
    /// Roll level 3 with probability `p3`, otherwise level 2 with
    /// probability `p2`, otherwise level 1.
    pub fn ability_level_odds(&self) -> (f64, f64) {
        match self {
            Rarity::Common => (0.05, 0.25),
            Rarity::Uncommon => (0.20, 0.50),
            Rarity::Rare => (0.60, 0.80),
            Rarity::Legendary => (0.90, 1.00),
        }
    }
}

/// Equipment positions on a minion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Head,
    Torso,
    Hands,
    Trinket,
}

impl Slot {
    /// All equipment slots
    pub const ALL: [Slot; 4] = [Slot::Head, Slot::Torso, Slot::Hands, Slot::Trinket];

    /// Stable index for slot-keyed arrays
    pub fn index(&self) -> usize {
        match self {
            Slot::Head => 0,
            Slot::Torso => 1,
            Slot::Hands => 2,
            Slot::Trinket => 3,
        }
    }
}

/// Thematic affinity of an item. Affects ability selection weighting only;
/// stat allocation ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Savage,
    Mystic,
    Cunning,
}

/// Mechanical category grouping abilities for theme-affinity weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Guardian,
    Assault,
    Marksman,
    Support,
    Trickster,
}

impl Role {
    /// Fraction of the total budget that must remain available for stats
    /// when an ability of this role is rolled
    pub fn reserved_stat_fraction(&self) -> f64 {
        match self {
            Role::Guardian => 0.20,
            Role::Marksman => 0.20,
            Role::Assault => 0.25,
            Role::Support => 0.0,
            Role::Trickster => 0.0,
        }
    }

    /// Dimensions the reserved stat budget is pre-allocated into
    pub fn focus_dimensions(&self) -> &'static [StatDimension] {
        match self {
            Role::Guardian => &[StatDimension::Health, StatDimension::Defense],
            Role::Assault => &[StatDimension::Attack, StatDimension::CritChance],
            Role::Marksman => &[StatDimension::Attack],
            Role::Support => &[],
            Role::Trickster => &[],
        }
    }
}

/// Special abilities an item can grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Bulwark,
    Taunt,
    Frenzy,
    Rampage,
    Deadeye,
    Longshot,
    Rally,
    Mend,
    Ambush,
    Smokescreen,
    Scavenger,
}

impl Ability {
    /// All abilities, in the order used for ability-keyed arrays
    pub const ALL: [Ability; 11] = [
        Ability::Bulwark,
        Ability::Taunt,
        Ability::Frenzy,
        Ability::Rampage,
        Ability::Deadeye,
        Ability::Longshot,
        Ability::Rally,
        Ability::Mend,
        Ability::Ambush,
        Ability::Smokescreen,
        Ability::Scavenger,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Stable index for ability-keyed arrays
    pub fn index(&self) -> usize {
        match self {
            Ability::Bulwark => 0,
            Ability::Taunt => 1,
            Ability::Frenzy => 2,
            Ability::Rampage => 3,
            Ability::Deadeye => 4,
            Ability::Longshot => 5,
            Ability::Rally => 6,
            Ability::Mend => 7,
            Ability::Ambush => 8,
            Ability::Smokescreen => 9,
            Ability::Scavenger => 10,
        }
    }

    /// Mechanical role, if any. Role-less abilities are never picked by the
    /// themed roulette and exist for hand-authored content.
    pub fn role(&self) -> Option<Role> {
        match self {
            Ability::Bulwark | Ability::Taunt => Some(Role::Guardian),
            Ability::Frenzy | Ability::Rampage => Some(Role::Assault),
            Ability::Deadeye | Ability::Longshot => Some(Role::Marksman),
            Ability::Rally | Ability::Mend => Some(Role::Support),
            Ability::Ambush | Ability::Smokescreen => Some(Role::Trickster),
            Ability::Scavenger => None,
        }
    }

    /// Budget cost at a given power level (1..=3). Out-of-range levels are
    /// clamped into the table.
    pub fn cost(&self, level: u8) -> u32 {
        let level = level.clamp(1, 3) as usize - 1;
        let table: [u32; 3] = match self {
            Ability::Bulwark => [3, 5, 8],
            Ability::Taunt => [2, 4, 6],
            Ability::Frenzy => [4, 7, 10],
            Ability::Rampage => [4, 8, 12],
            Ability::Deadeye => [3, 6, 9],
            Ability::Longshot => [3, 5, 8],
            Ability::Rally => [2, 4, 7],
            Ability::Mend => [2, 4, 6],
            Ability::Ambush => [3, 6, 9],
            Ability::Smokescreen => [2, 4, 6],
            Ability::Scavenger => [1, 2, 3],
        };
        table[level]
    }
}

/// An ability granted by an item together with its rolled power level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantedAbility {
    pub ability: Ability,
    /// Power level in 1..=3. Level 0 is represented by the absence of the
    /// grant, never by a zero here.
    pub level: u8,
}

/// Weight linking a theme to a role for ability selection.
/// Zero-weight pairs are excluded from the roulette.
pub fn affinity_weight(theme: Theme, role: Role) -> f64 {
    match (theme, role) {
        (Theme::Savage, Role::Assault) => 0.50,
        (Theme::Savage, Role::Guardian) => 0.20,
        (Theme::Savage, Role::Marksman) => 0.15,
        (Theme::Savage, Role::Trickster) => 0.10,
        (Theme::Savage, Role::Support) => 0.0,

        (Theme::Mystic, Role::Support) => 0.40,
        (Theme::Mystic, Role::Guardian) => 0.30,
        (Theme::Mystic, Role::Trickster) => 0.20,
        (Theme::Mystic, Role::Assault) => 0.10,
        (Theme::Mystic, Role::Marksman) => 0.0,

        (Theme::Cunning, Role::Trickster) => 0.40,
        (Theme::Cunning, Role::Marksman) => 0.30,
        (Theme::Cunning, Role::Assault) => 0.20,
        (Theme::Cunning, Role::Support) => 0.10,
        (Theme::Cunning, Role::Guardian) => 0.0,
    }
}

/// Abilities eligible to roll on a slot, in roulette order
pub fn slot_abilities(slot: Slot) -> &'static [Ability] {
    match slot {
        Slot::Head => &[
            Ability::Deadeye,
            Ability::Taunt,
            Ability::Mend,
            Ability::Smokescreen,
        ],
        Slot::Torso => &[
            Ability::Bulwark,
            Ability::Taunt,
            Ability::Rally,
            Ability::Frenzy,
        ],
        Slot::Hands => &[
            Ability::Frenzy,
            Ability::Rampage,
            Ability::Deadeye,
            Ability::Longshot,
            Ability::Ambush,
        ],
        Slot::Trinket => &[
            Ability::Ambush,
            Ability::Smokescreen,
            Ability::Rally,
            Ability::Mend,
            Ability::Scavenger,
        ],
    }
}
