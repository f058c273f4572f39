use std::sync::Arc;

use coinflip_core::model::Calculation;
use storage::repository::{CalculationRepository, StorageError};

use super::test_harness::{setup_view_harness, setup_view_harness_with_repo};

struct FailingCalculationRepo;

impl CalculationRepository for FailingCalculationRepo {
    fn append(&self, _calculation: &Calculation) -> Result<(), StorageError> {
        Err(StorageError::Lock("fail".to_string()))
    }

    fn list_all(&self) -> Result<Vec<Calculation>, StorageError> {
        Err(StorageError::Lock("fail".to_string()))
    }
}

#[test]
fn calculator_view_smoke_renders_closed_page() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Coin Flip Probability Calculator"),
        "missing header in {html}"
    );
    assert!(html.contains("Open Coin Flip Counter"), "missing trigger in {html}");
    assert!(!html.contains("Calculate Probability"), "dialog should be closed in {html}");
    assert!(!html.contains("result-grid"), "empty list should not render in {html}");
}

#[test]
fn calculator_view_smoke_opens_dialog_on_launch() {
    let mut harness = setup_view_harness(true);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Total Coin Flips (n)"), "missing coins label in {html}");
    assert!(
        html.contains("Desired Number of Heads (k)"),
        "missing heads label in {html}"
    );
    assert!(
        html.contains("Enter number of coin flips"),
        "missing placeholder in {html}"
    );
    assert!(html.contains("Calculate Probability"), "missing submit in {html}");
}

#[test]
fn calculator_view_smoke_renders_cards_newest_first() {
    let mut harness = setup_view_harness(false);
    harness.calculator.submit("2", "1").expect("valid input");
    harness.calculator.submit("4", "4").expect("valid input");
    harness.calculator.submit("10", "5").expect("valid input");

    harness.rebuild();
    let html = harness.render();

    let newest = html.find("Calculation 3").expect("newest card");
    let middle = html.find("Calculation 2").expect("middle card");
    let oldest = html.find("Calculation 1").expect("oldest card");
    assert!(newest < middle && middle < oldest, "cards out of order in {html}");

    assert!(html.contains("Coin Flips (n): 10"), "missing coins in {html}");
    assert!(html.contains("Heads (k): 5"), "missing heads in {html}");
    assert!(
        html.contains("Probability: 24.609375%"),
        "missing probability in {html}"
    );
    assert!(html.contains("Probability: 6.250000%"), "missing 4/4 card in {html}");
}

#[test]
fn calculator_view_smoke_renders_store_contents() {
    let mut harness = setup_view_harness(false);
    let calc = Calculation::new(1, 0).expect("valid calculation");
    harness
        .storage
        .calculations
        .append(&calc)
        .expect("append calculation");

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Calculation 1"), "missing card in {html}");
    assert!(html.contains("Probability: 50.000000%"), "missing probability in {html}");
}

#[test]
fn calculator_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_repo(false, Arc::new(FailingCalculationRepo));
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Something went wrong. Please try again."),
        "missing error message in {html}"
    );
    assert!(html.contains("Open Coin Flip Counter"), "page chrome should remain in {html}");
    assert!(!html.contains("result-grid"), "failed list should not render in {html}");
}
