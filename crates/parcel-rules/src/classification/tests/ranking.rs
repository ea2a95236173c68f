use super::common::*;
use crate::classification::{recommend, round2, ClassificationResult, ProgramId};

#[test]
fn chargeable_tie_breaks_on_dimensional_weight() {
    // Scenario: both charge 12.00; dimensional 9.50 vs 8.00.
    let results = vec![
        eligible_result("Heavier-Box", 12.0, 9.5),
        eligible_result("Lighter-Box", 12.0, 8.0),
    ];

    assert_eq!(recommend(&results).as_deref(), Some("Lighter-Box"));
}

#[test]
fn ineligible_channels_are_never_recommended() {
    let results = vec![
        ClassificationResult::ineligible("Cheap-But-Closed", "exceeds limits", 0.0, 1.0),
        eligible_result("Open", 5.0, 2.0),
    ];

    assert_eq!(recommend(&results).as_deref(), Some("Open"));
}

#[test]
fn no_eligible_channel_means_no_recommendation() {
    let results = vec![ClassificationResult::ineligible(
        "Closed",
        "exceeds limits",
        0.0,
        1.0,
    )];

    assert_eq!(recommend(&results), None);
    assert_eq!(recommend(&[]), None);
}

#[test]
fn full_tie_keeps_candidate_order() {
    let results = vec![
        eligible_result("First", 3.0, 1.0),
        eligible_result("Second", 3.0, 1.0),
    ];

    assert_eq!(recommend(&results).as_deref(), Some("First"));
}

#[test]
fn comparison_uses_displayed_values() {
    // 4.001 and 4.004 both display as 4.00, so dimensional weight decides.
    let results = vec![
        eligible_result("Hidden-Edge", 4.001, 3.0),
        eligible_result("Displayed-Tie", 4.004, 2.0),
    ];

    assert_eq!(recommend(&results).as_deref(), Some("Displayed-Tie"));
}

#[test]
fn recommendation_is_minimal_among_eligible() {
    let engine = engine();
    for program in ProgramId::ALL {
        for parcel in measurement_grid() {
            let response = engine
                .classify(program, &parcel, &Default::default())
                .expect("registered");
            let Some(name) = response.recommended.as_deref() else {
                assert_eq!(response.eligible().count(), 0);
                continue;
            };

            let chosen = response.result_for(name).expect("recommended result exists");
            assert!(chosen.eligible);
            let key = |result: &ClassificationResult| {
                (round2(result.chargeable_weight), round2(result.dimensional_weight))
            };
            for other in response.eligible() {
                let (charge, dim) = key(other);
                let (best_charge, best_dim) = key(chosen);
                assert!(
                    best_charge < charge || (best_charge == charge && best_dim <= dim),
                    "{name} is not minimal against {}",
                    other.channel
                );
            }
        }
    }
}
