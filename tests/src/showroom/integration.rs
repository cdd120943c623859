#![cfg(test)]
use dealer_common::error::DealerError;
use dealer_core::registry::{DEALER_NAME, Registry};
use dealer_core::showroom::{self, SCRIPT};

use crate::support::{RecordingConsole, SAMPLE_INPUT, ScriptedIntake};

/// Runs the tour against the sample answers and checks every printed line.
#[test]
fn tour_sample_input() {
    let mut intake = ScriptedIntake::new(SAMPLE_INPUT);
    let mut console = RecordingConsole::default();

    let result = showroom::run(&mut intake, &mut console);
    assert!(result.is_ok(), "Tour failed: {:?}", result.err());

    assert_eq!(intake.asked, SCRIPT.to_vec(), "Prompts asked out of order");
    assert_eq!(
        console.sections,
        vec![
            "Car Information",
            "Electric Car Information",
            "Hybrid Vehicle Information",
        ]
    );

    let expected = vec![
        "Dealer Name: Sapphire Vehicle Dealer",
        "Brand: Toyota, Price: $20000, Mileage: 5000 km",
        "Vehicle Brand: Honda, Price: $22000, Mileage: 3000",
        "Car Type: SUV",
        "Vehicle Brand: Tesla, Price: $45000, Mileage: 1500",
        "Car Type: Electric",
        "Battery Capacity: 82 kWh",
        "Vehicle Brand: Ford, Price: $38000, Mileage: 12000",
        "Fuel Type: Diesel",
        "Load Capacity: 5 tons",
        "Mileage incremented by 1",
        "Brand: Toyota & BMW, Price: $55000, Mileage: 25001 km",
        "First character of brand in vehicle1: T",
        "Updated Mileage (via pass by reference): 18000 km",
        "Total vehicles available: 4",
    ];
    assert_eq!(console.lines, expected);
}

#[test]
fn tour_rejects_non_numeric_battery() {
    let input = "Toyota 20000 5000 Honda 22000 3000 SUV Tesla 45000 1500 big";
    let mut intake = ScriptedIntake::new(input);
    let mut console = RecordingConsole::default();

    match showroom::run(&mut intake, &mut console) {
        Err(DealerError::InvalidInput { field, value }) => {
            assert_eq!(field, "battery capacity");
            assert_eq!(value, "big");
        }
        other => panic!("expected invalid input, got {other:?}"),
    }

    assert!(
        !console.lines.iter().any(|line| line.starts_with("Battery")),
        "Electric car should never have been displayed"
    );
}

#[test]
fn tour_rejects_truncated_input() {
    let mut intake = ScriptedIntake::new("Toyota 20000");
    let mut console = RecordingConsole::default();

    let result = showroom::run(&mut intake, &mut console);
    assert!(matches!(result, Err(DealerError::InvalidInput { .. })));
    assert_eq!(intake.asked.len(), 3);
}

#[test]
fn registry_identity_holds_across_tours() {
    let before = Registry::instance();

    let mut console = RecordingConsole::default();
    showroom::run(&mut ScriptedIntake::new(SAMPLE_INPUT), &mut console).unwrap();

    let after = Registry::instance();
    assert!(std::ptr::eq(before, after));
    assert_eq!(after.dealer_name(), DEALER_NAME);
    assert_eq!(console.lines[0], format!("Dealer Name: {DEALER_NAME}"));
}

#[test]
fn tour_accepts_int_limits_without_overflow() {
    let input = "Toyota 2147483647 2147483647
Honda -2147483648 0 SUV
Tesla 1 1 1
Ford 1 1 1 Diesel
";
    let mut console = RecordingConsole::default();
    let result = showroom::run(&mut ScriptedIntake::new(input), &mut console);
    assert!(result.is_ok(), "Tour failed: {:?}", result.err());

    assert!(console
        .lines
        .contains(&"Brand: Toyota & BMW, Price: $2147518647, Mileage: 2147503648 km".to_string()));
}

#[test]
fn tour_rejects_price_beyond_int_range() {
    let input = SAMPLE_INPUT.replacen("20000", "9223372036854775807", 1);
    let mut console = RecordingConsole::default();

    match showroom::run(&mut ScriptedIntake::new(&input), &mut console) {
        Err(DealerError::InvalidInput { field, value }) => {
            assert_eq!(field, "vehicle price");
            assert_eq!(value, "9223372036854775807");
        }
        other => panic!("expected invalid input, got {other:?}"),
    }
}
