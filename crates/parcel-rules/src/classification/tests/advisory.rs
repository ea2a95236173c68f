use std::sync::Arc;

use super::common::*;
use crate::classification::limits::Dimension;
use crate::classification::{
    Advisor, AdvisoryTolerance, Catalog, ClassificationEngine, ClassifyOptions, Destination,
    ProgramId, SilentAdvisor, ThresholdAdvisor, UnitSystem,
};

fn advisories(
    program: ProgramId,
    length: f64,
    width: f64,
    height: f64,
    weight: f64,
) -> Vec<String> {
    engine()
        .advise(program, &measurement(length, width, height, weight))
        .expect("registered")
}

#[test]
fn metric_length_inside_window_fires() {
    // Scenario: 120 cm boundary, 2 cm tolerance, length 118.5 cm.
    let fired = advisories(ProgramId::DeFbm, 118.5, 20.0, 10.0, 5.0);

    assert_eq!(
        fired,
        ["length 118.50 cm is within 2.00 cm of the 120 cm boundary (parcel standard length)"]
    );
}

#[test]
fn metric_length_outside_window_is_silent() {
    assert!(advisories(ProgramId::DeFbm, 117.9, 20.0, 10.0, 5.0).is_empty());
}

#[test]
fn value_above_boundary_is_silent() {
    assert!(advisories(ProgramId::DeFbm, 120.5, 20.0, 10.0, 5.0).is_empty());
}

#[test]
fn value_just_above_boundary_is_silent() {
    assert!(advisories(ProgramId::DeFbm, 120.0 + 5e-10, 20.0, 10.0, 5.0).is_empty());
    assert_eq!(advisories(ProgramId::DeFbm, 120.0, 20.0, 10.0, 5.0).len(), 1);
}

#[test]
fn imperial_windows_are_converted_from_metric_tolerances() {
    let tolerance = AdvisoryTolerance::default();

    assert_close(
        tolerance.window(Dimension::Length, UnitSystem::Imperial, 22.0),
        2.0 / 2.54,
    );
    assert_close(
        tolerance.window(Dimension::Weight, UnitSystem::Imperial, 50.0),
        0.5 / 0.45359237,
    );
    assert_close(
        tolerance.window(Dimension::Volume, UnitSystem::Imperial, 55_000.0),
        550.0,
    );

    // 21.3 in is within 0.79 in of 22 in; 21.1 in is not.
    assert_eq!(advisories(ProgramId::UsFbm, 21.3, 5.0, 5.0, 3.0).len(), 1);
    assert!(advisories(ProgramId::UsFbm, 21.1, 5.0, 5.0, 3.0).is_empty());
}

#[test]
fn every_matching_boundary_fires() {
    // 47.5 in is past the 47 in boundary and inside the 48 in window.
    let length_only = advisories(ProgramId::UsFbm, 47.5, 5.0, 5.0, 3.0);
    assert_eq!(length_only.len(), 1);

    // Weight 49.8 lb is near 50; length 59.5 is near 60 and above 59.
    let both = advisories(ProgramId::UsFbm, 59.5, 5.0, 5.0, 49.8);
    assert_eq!(both.len(), 2);
    assert!(both[0].starts_with("length 59.50 in"));
    assert!(both[1].starts_with("weight 49.80 lb"));
}

#[test]
fn volume_boundaries_use_cubic_centimetres() {
    // 31500 cm3 sits exactly on the Royal Mail boundary and above 31000 cm3.
    let fired = advisories(ProgramId::UkFbm, 30.0, 35.0, 30.0, 1.0);

    assert!(fired.iter().any(|message| {
        message.starts_with("volume 31500.00 cm3") && message.ends_with("(Royal Mail volume)")
    }));
    assert!(!fired
        .iter()
        .any(|message| message.ends_with("(UK GC/Yodel small volume)")));
}

#[test]
fn exact_boundary_always_fires() {
    let catalog = Catalog::standard();
    let advisor = ThresholdAdvisor::default();

    for profile in catalog.profiles() {
        for threshold in profile.thresholds.length {
            let parcel = measurement(threshold.value, 10.0, 10.0, 1.0);
            let fired = advisor.advise(profile, &parcel);
            let suffix = format!("({})", threshold.label);
            assert!(
                fired
                    .iter()
                    .any(|message| message.starts_with("length") && message.ends_with(&suffix)),
                "{} length boundary {} did not fire",
                profile.id,
                threshold.value
            );
        }

        for threshold in profile.thresholds.girth {
            let parcel = measurement(threshold.value - 40.0, 10.0, 10.0, 1.0);
            let fired = advisor.advise(profile, &parcel);
            let suffix = format!("({})", threshold.label);
            assert!(
                fired
                    .iter()
                    .any(|message| message.starts_with("girth") && message.ends_with(&suffix)),
                "{} girth boundary {} did not fire",
                profile.id,
                threshold.value
            );
        }

        for threshold in profile.thresholds.weight {
            let parcel = measurement(10.0, 10.0, 10.0, threshold.value);
            let fired = advisor.advise(profile, &parcel);
            let suffix = format!("({})", threshold.label);
            assert!(
                fired
                    .iter()
                    .any(|message| message.starts_with("weight") && message.ends_with(&suffix)),
                "{} weight boundary {} did not fire",
                profile.id,
                threshold.value
            );
        }
    }
}

#[test]
fn zero_tolerance_still_fires_on_the_boundary() {
    let advisor = ThresholdAdvisor::new(AdvisoryTolerance {
        length_cm: 0.0,
        weight_kg: 0.0,
        volume_ratio: 0.0,
    });
    let catalog = Catalog::standard();
    let profile = catalog.profile(ProgramId::DeFbm).expect("registered");

    let on = advisor.advise(profile, &measurement(120.0, 20.0, 10.0, 5.0));
    assert_eq!(on.len(), 1);
    assert!(advisor
        .advise(profile, &measurement(119.99, 20.0, 10.0, 5.0))
        .is_empty());
}

#[test]
fn advisor_never_changes_results() {
    let catalog = Catalog::standard();
    let loud = ClassificationEngine::new(Arc::clone(&catalog), AdvisoryTolerance::default());
    let silent = ClassificationEngine::with_advisor(catalog, SilentAdvisor);
    let options = ClassifyOptions {
        destination: Destination::Austria,
    };

    for program in ProgramId::ALL {
        for parcel in measurement_grid() {
            let with_advice = loud.classify(program, &parcel, &options).expect("registered");
            let without = silent.classify(program, &parcel, &options).expect("registered");

            assert!(without.advisories.is_empty());
            assert_eq!(
                serde_json::to_vec(&with_advice.results).expect("serialize"),
                serde_json::to_vec(&without.results).expect("serialize")
            );
            assert_eq!(with_advice.recommended, without.recommended);
        }
    }
}

#[test]
fn chargeable_weight_near_fba_step_fires() {
    // 60 x 45 x 47 cm over 5000 gives 25.38 kg, inside the 25.82 kg window.
    let fired = advisories(ProgramId::DeFba, 60.0, 45.0, 47.0, 1.0);
    let expected = "chargeable weight 25.38 kg on DE-FBA is within 0.50 kg of the 25.82 kg \
                    boundary (FBA small oversize chargeable weight)";
    assert!(fired.iter().any(|message| message == expected));

    // 25.92 kg is past the step.
    let past = advisories(ProgramId::UkFba, 60.0, 45.0, 48.0, 1.0);
    assert!(!past
        .iter()
        .any(|message| message.starts_with("chargeable weight")));
}

#[test]
fn chargeable_weight_uses_the_channel_formula() {
    // 18 x 14 x 8 in is 14.50 lb dimensional at 139, so a 19.7 lb parcel bills 19.7 lb.
    let fired = advisories(ProgramId::UsFba, 18.0, 14.0, 8.0, 19.7);
    assert!(fired.iter().any(|message| {
        message.starts_with("chargeable weight 19.70 lb on US-FBA")
            && message.ends_with("(FBA large standard chargeable weight)")
    }));
}

#[test]
fn gel_volumetric_weight_near_limit_fires() {
    // 303 x 110 x 200 cm is 6.666 m3, 999.90 kg at 150 kg per m3.
    let fired = advisories(ProgramId::DeFbm, 303.0, 110.0, 200.0, 45.0);
    assert!(fired.iter().any(|message| {
        message.starts_with("volumetric weight 999.90 kg on GEL-DE-Bulky")
            && message.ends_with("(GEL volumetric weight)")
    }));
}

#[test]
fn billing_thresholds_name_registered_channels() {
    let catalog = Catalog::standard();
    for profile in catalog.profiles() {
        let names: Vec<&str> = profile
            .channels()
            .iter()
            .map(|channel| channel.name())
            .collect();
        for threshold in profile.thresholds.billing {
            assert!(
                names.contains(&threshold.channel),
                "{} has no channel {}",
                profile.id,
                threshold.channel
            );
        }
    }
}
