#![cfg(test)]
use dealer_core::lifecycle::{self, LifecycleKind};
use dealer_core::showroom;

use crate::support::{RecordingConsole, SAMPLE_INPUT, ScriptedIntake};

/// Every vehicle built during a tour, the combined temporary included, is
/// destroyed exactly once and in reverse order of construction.
#[test]
fn tour_releases_every_vehicle() {
    lifecycle::take();

    let mut console = RecordingConsole::default();
    showroom::run(&mut ScriptedIntake::new(SAMPLE_INPUT), &mut console).unwrap();

    let events = lifecycle::take();
    let built: Vec<&str> = events
        .iter()
        .filter(|e| e.kind.is_construction())
        .map(|e| e.brand.as_str())
        .collect();
    let destroyed: Vec<&str> = events
        .iter()
        .filter(|e| e.kind == LifecycleKind::Destroyed)
        .map(|e| e.brand.as_str())
        .collect();

    assert_eq!(
        built,
        vec!["Toyota", "Honda", "Tesla", "Ford", "BMW", "Toyota & BMW"]
    );

    let mut reversed = built.clone();
    reversed.reverse();
    assert_eq!(destroyed, reversed);

    assert!(
        events
            .iter()
            .all(|e| e.kind != LifecycleKind::Copied && e.kind != LifecycleKind::DefaultConstructed),
        "The tour never copies or default-constructs a vehicle"
    );
}

#[test]
fn construction_then_destruction_counts_match() {
    lifecycle::take();
    {
        let a = dealer_core::vehicle::Vehicle::default();
        let _b = a.clone();
        let _c = &a + &a;
    }
    let events = lifecycle::take();

    let constructions = events.iter().filter(|e| e.kind.is_construction()).count();
    let destructions = events.len() - constructions;
    assert_eq!(constructions, 3);
    assert_eq!(destructions, 3);
    assert_eq!(events[0].kind, LifecycleKind::DefaultConstructed);
    assert_eq!(events[1].kind, LifecycleKind::Copied);
    assert_eq!(events[2].brand, "Unknown & Unknown");
}
