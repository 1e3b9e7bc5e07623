//! End-to-end assignment scenarios over flat and grouped sources.
//!
//! These walk the whole stack — builders → pools → engine → record
//! setters — the way a caller would: seed a rng, build pools from raw
//! data, assign onto a target collection, and check both the values
//! written and the consumption state left behind.

#![cfg(feature = "json")]

use serde_json::{json, Value};

use rnd_assign::record::{field_key, field_setter};
use rnd_assign::{
    assign_grouped_with, assign_replace, AssignError, DrawError, DrawPolicy, DrawRng, GroupedPool,
    Pool,
};

fn weapon_pools() -> GroupedPool<String, Value> {
    [
        ("melee".to_string(), vec![json!("Sword"), json!("Axe")]),
        ("ranged".to_string(), vec![json!("Bow")]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn flat_replacement_run_stays_inside_the_pool() {
    let mut target = vec!["Item1".to_string(), "Item2".to_string(), "Item3".to_string()];
    let mut pool: Pool<String> = ["Apple", "Banana", "Cherry"]
        .into_iter()
        .map(String::from)
        .collect();
    let mut rng = DrawRng::from_seed_u64(42);

    assign_replace(&mut target, &mut pool, DrawPolicy::default(), &mut rng).unwrap();

    assert_eq!(target.len(), 3);
    for v in &target {
        assert!(
            ["Apple", "Banana", "Cherry"].contains(&v.as_str()),
            "unexpected value {v}"
        );
    }
}

#[test]
fn identical_seeds_give_identical_runs() {
    let run = |seed: u64| -> Vec<String> {
        let mut target = vec![String::new(); 8];
        let mut pool: Pool<String> = ["a", "b", "c", "d"].into_iter().map(String::from).collect();
        let mut rng = DrawRng::from_seed_u64(seed);
        assign_replace(&mut target, &mut pool, DrawPolicy::default(), &mut rng).unwrap();
        target
    };

    assert_eq!(run(7), run(7));
    // Not a guarantee for every pair of seeds, but these two diverge.
    assert_ne!(run(7), run(8));
}

#[test]
fn grouped_consumable_run_renames_without_touching_other_fields() {
    let mut target = vec![
        json!({"name": "sword_001", "type": "melee"}),
        json!({"name": "axe_004", "type": "melee"}),
    ];
    let mut pools = weapon_pools();
    let mut rng = DrawRng::from_seed_u64(42);

    assign_grouped_with(
        &mut target,
        &mut pools,
        DrawPolicy::CONSUME,
        &mut rng,
        field_key("type"),
        field_setter("name"),
    )
    .unwrap();

    // Names are a permutation of the melee bucket.
    let mut names: Vec<&str> = target.iter().map(|t| t["name"].as_str().unwrap()).collect();
    names.sort_unstable();
    assert_eq!(names, ["Axe", "Sword"]);

    // Only `name` was written.
    for t in &target {
        assert_eq!(t["type"], "melee");
    }

    // The melee bucket is spent; ranged is untouched.
    let melee = "melee".to_string();
    assert_eq!(
        pools.draw_from(&melee, DrawPolicy::CONSUME, &mut rng),
        Err(DrawError::Depleted)
    );
    assert_eq!(
        pools
            .draw_from(&"ranged".to_string(), DrawPolicy::CONSUME, &mut rng)
            .unwrap(),
        json!("Bow")
    );
}

#[test]
fn depletion_mid_run_aborts_without_rollback() {
    let mut target = vec![
        json!({"name": "a", "type": "melee"}),
        json!({"name": "b", "type": "melee"}),
        json!({"name": "c", "type": "melee"}),
    ];
    let mut pools = weapon_pools();
    let mut rng = DrawRng::from_seed_u64(1);

    let err = assign_grouped_with(
        &mut target,
        &mut pools,
        DrawPolicy::CONSUME,
        &mut rng,
        field_key("type"),
        field_setter("name"),
    )
    .unwrap_err();

    match err {
        AssignError::Draw { index, source } => {
            assert_eq!(index, 2);
            assert_eq!(source, DrawError::Depleted);
        }
        other => panic!("unexpected error: {other}"),
    }

    // The first two elements were renamed before the abort.
    let mut head: Vec<&str> = target[..2]
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    head.sort_unstable();
    assert_eq!(head, ["Axe", "Sword"]);
    assert_eq!(target[2]["name"], "c");
}

#[test]
fn regenerating_grouped_run_survives_oversized_targets() {
    let mut target: Vec<Value> = (0..5)
        .map(|i| json!({"name": format!("slot_{i}"), "type": "melee"}))
        .collect();
    let mut pools = weapon_pools();
    let mut rng = DrawRng::from_seed_u64(33);

    assign_grouped_with(
        &mut target,
        &mut pools,
        DrawPolicy::CONSUME_REGENERATE,
        &mut rng,
        field_key("type"),
        field_setter("name"),
    )
    .unwrap();

    for t in &target {
        let name = t["name"].as_str().unwrap();
        assert!(["Sword", "Axe"].contains(&name), "unexpected name {name}");
    }
}

#[test]
fn unknown_category_fails_with_the_key() {
    let mut target = vec![json!({"name": "x", "type": "siege"})];
    let mut pools = weapon_pools();
    let mut rng = DrawRng::from_seed_u64(2);

    let err = assign_grouped_with(
        &mut target,
        &mut pools,
        DrawPolicy::default(),
        &mut rng,
        field_key("type"),
        field_setter("name"),
    )
    .unwrap_err();

    match err {
        AssignError::Draw { index, source } => {
            assert_eq!(index, 0);
            assert_eq!(source, DrawError::UnknownKey("siege".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}
