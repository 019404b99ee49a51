//! Example Game - a minimal command-line walkthrough of minion_core
//!
//! This demo shows:
//! - Generating themed gear across rarities and slots
//! - Equipping a minion and watching its totals change
//! - Leveling up and tertiary stat unlocks
//! - Ability deduplication across equipped items

use minion_core::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn format_stats(block: &StatBlock) -> String {
    let mut parts = Vec::new();
    for dim in StatDimension::ALL {
        let value = block.get(dim);
        if value > 0 {
            parts.push(format!("{:?} {}", dim, value));
        }
    }
    if parts.is_empty() {
        "no stats".to_string()
    } else {
        parts.join(", ")
    }
}

fn describe_item(item: &Item) {
    println!(
        "  {:<18} {:?}/{:?}/{:?}",
        item.name, item.theme, item.rarity, item.slot
    );
    println!("    stats: {}", format_stats(&item.stats));
    match item.ability {
        Some(grant) => println!("    ability: {:?} (level {})", grant.ability, grant.level),
        None => println!("    ability: none"),
    }
}

fn print_snapshot(label: &str, minion: &Minion) {
    println!("{}", label);
    println!(
        "  level {} ({} xp, {} to next)",
        minion.level(),
        minion.experience(),
        minion.experience_to_next()
    );
    println!("  totals: {}", format_stats(minion.totals()));
    let abilities: Vec<String> = minion
        .active_abilities()
        .map(|(a, lvl)| format!("{:?} L{}", a, lvl))
        .collect();
    if abilities.is_empty() {
        println!("  abilities: none");
    } else {
        println!("  abilities: {}", abilities.join(", "));
    }
    println!();
}

fn main() {
    // RUST_LOG=debug surfaces generator diagnostics
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let generator = Generator::default();

    println!("=== Gear generation ===");
    let head = generator.generate_item("Ashen Visor", Theme::Mystic, Rarity::Uncommon, Slot::Head, &mut rng);
    let torso = generator.generate_item("Gnarlhide Vest", Theme::Savage, Rarity::Rare, Slot::Torso, &mut rng);
    let hands = generator.generate_item("Ripper Claws", Theme::Savage, Rarity::Legendary, Slot::Hands, &mut rng);
    let trinket = generator.generate_item("Lucky Fang", Theme::Cunning, Rarity::Common, Slot::Trinket, &mut rng);
    for item in [&head, &torso, &hands, &trinket] {
        describe_item(item);
    }
    println!();

    println!("=== Minion lifecycle ===");
    let mut minion = Minion::new(Archetype::new("Gnasher", 25, 6));
    print_snapshot("Fresh recruit:", &minion);

    for item in [head, torso, hands, trinket] {
        minion.equip(item);
    }
    print_snapshot("Fully equipped:", &minion);

    minion.gain_experience(100 + 125 + 156 + 195 + 244);
    print_snapshot("After five level-ups (crit chance unlocks):", &minion);

    let removed = minion.unequip(Slot::Hands);
    if let Some(item) = removed {
        println!("Unequipped {}.", item.name);
    }
    print_snapshot("Bare-handed again:", &minion);

    // A replacement roll for the empty slot
    let replacement =
        generator.generate_item("Scrap Gauntlets", Theme::Cunning, Rarity::Rare, Slot::Hands, &mut rng);
    describe_item(&replacement);
    minion.equip(replacement);
    print_snapshot("With replacement gauntlets:", &minion);
}
