//! End-to-end tests driving generated items through the minion pipeline

use minion_core::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn grunt() -> Archetype {
    Archetype::new("Grunt", 25, 6)
}

#[test]
fn fully_equipped_minion_totals_are_the_sum_of_parts() {
    let generator = Generator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut minion = Minion::new(grunt());
    let baseline = *minion.totals();

    let mut items = Vec::new();
    for slot in Slot::ALL {
        let item = generator.generate_item("gear", Theme::Savage, Rarity::Rare, slot, &mut rng);
        items.push(item.clone());
        assert!(minion.equip(item).is_none());
    }

    let mut expected = baseline;
    for item in &items {
        expected.add_block(&item.stats);
    }
    for (ability, level) in minion.active_abilities() {
        if ability == Ability::Frenzy {
            expected.attack += level as u32;
        }
    }
    assert_eq!(*minion.totals(), expected);
}

#[test]
fn unequipping_everything_restores_the_baseline() {
    let generator = Generator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut minion = Minion::new(grunt());
    let baseline = *minion.totals();

    for slot in Slot::ALL {
        let item =
            generator.generate_item("gear", Theme::Cunning, Rarity::Legendary, slot, &mut rng);
        minion.equip(item);
    }
    assert_ne!(*minion.totals(), baseline);

    for slot in Slot::ALL {
        assert!(minion.unequip(slot).is_some());
    }
    assert_eq!(*minion.totals(), baseline);
    assert_eq!(minion.active_abilities().count(), 0);
}

#[test]
fn swapping_an_item_swaps_its_contribution() {
    let generator = Generator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(404);
    let mut minion = Minion::new(grunt());
    let baseline = *minion.totals();

    let first = generator.generate_item("old", Theme::Mystic, Rarity::Common, Slot::Head, &mut rng);
    let second =
        generator.generate_item("new", Theme::Mystic, Rarity::Legendary, Slot::Head, &mut rng);
    let second_stats = second.stats;
    let second_ability = second.ability;

    minion.equip(first.clone());
    let displaced = minion.equip(second).expect("head slot was occupied");
    assert_eq!(displaced.name, first.name);

    let mut expected = baseline;
    expected.add_block(&second_stats);
    if let Some(grant) = second_ability {
        if grant.ability == Ability::Frenzy {
            expected.attack += grant.level as u32;
        }
    }
    assert_eq!(*minion.totals(), expected);
}

#[test]
fn leveling_with_gear_keeps_item_contributions() {
    let mut minion = Minion::new(grunt());
    let stats = StatBlock {
        health: 5,
        crit_chance: 3,
        ..Default::default()
    };
    minion.equip(Item {
        name: "banded plate".to_string(),
        slot: Slot::Torso,
        rarity: Rarity::Uncommon,
        theme: Theme::Savage,
        stats,
        ability: None,
    });

    let equipped_health = minion.totals().health;
    assert!(minion.gain_experience(100));
    assert_eq!(minion.level(), 2);
    // One level gained: +2 health, item bonus intact
    assert_eq!(minion.totals().health, equipped_health + 2);
    assert_eq!(minion.totals().crit_chance, 3);
}

#[test]
fn duplicate_grants_across_slots_collapse_to_one_ability() {
    let mut minion = Minion::new(grunt());
    let grant = |level| {
        Some(GrantedAbility {
            ability: Ability::Rally,
            level,
        })
    };
    let item = |slot, ability| Item {
        name: "charm".to_string(),
        slot,
        rarity: Rarity::Rare,
        theme: Theme::Mystic,
        stats: StatBlock {
            health: 1,
            ..Default::default()
        },
        ability,
    };

    minion.equip(item(Slot::Head, grant(2)));
    minion.equip(item(Slot::Trinket, grant(1)));
    assert_eq!(minion.active_abilities().count(), 1);
    assert_eq!(minion.ability_level(Ability::Rally), 2);

    // Removing the stronger grant falls back to the weaker one
    minion.unequip(Slot::Head);
    assert_eq!(minion.ability_level(Ability::Rally), 1);
}

#[test]
fn minion_survives_a_serde_round_trip() {
    let generator = Generator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(88);
    let mut minion = Minion::new(grunt());
    for slot in Slot::ALL {
        minion.equip(generator.generate_item("gear", Theme::Savage, Rarity::Rare, slot, &mut rng));
    }
    minion.gain_experience(600);

    let json = serde_json::to_string(&minion).expect("serialize");
    let restored: Minion = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored.level(), minion.level());
    assert_eq!(restored.experience(), minion.experience());
    assert_eq!(restored.totals(), minion.totals());
    assert_eq!(
        restored.active_abilities().collect::<Vec<_>>(),
        minion.active_abilities().collect::<Vec<_>>()
    );
}
