//! Cargo feature wiring tests.
// Audit test file: expect/unwrap lints are intentional test mechanisms.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
)]
//! `BootError` and `I2sSettings` derive `defmt::Format` over platform types,
//! so every feature that enables defmt here must enable it in platform too.
//! A wiring mistake only shows up when the feature is built on its own.
//!
//! Run with: cargo test -p firmware --test feature_wiring

const MANIFEST: &str = include_str!("../Cargo.toml");

/// Entries of the `name = [ ... ]` list in `[features]`.
fn feature(name: &str) -> Vec<String> {
    let features = MANIFEST
        .split("[features]")
        .nth(1)
        .expect("[features] table present");
    let start = features
        .find(&format!("\n{name} = ["))
        .unwrap_or_else(|| panic!("feature `{name}` declared"));
    let body = &features[start..];
    let open = body.find('[').unwrap();
    let close = body.find(']').unwrap();
    body[open + 1..close]
        .lines()
        .map(|l| l.split('#').next().unwrap_or(""))
        .flat_map(|l| l.split(','))
        .map(|e| e.trim().trim_matches('"').to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

#[test]
fn defmt_feature_enables_platform_defmt() {
    let defmt = feature("defmt");
    assert!(defmt.contains(&"dep:defmt".to_string()), "{defmt:?}");
    assert!(
        defmt.contains(&"platform/defmt".to_string()),
        "firmware `defmt` must enable `platform/defmt`: {defmt:?}"
    );
}

#[test]
fn hardware_feature_gets_defmt_through_the_defmt_feature() {
    let hardware = feature("hardware");
    assert!(hardware.contains(&"defmt".to_string()), "{hardware:?}");
}

#[test]
fn emulator_feature_enables_std() {
    let emulator = feature("emulator");
    assert!(emulator.contains(&"std".to_string()), "{emulator:?}");
    assert!(feature("std").contains(&"platform/std".to_string()));
}
