use super::common::*;
use crate::classification::domain::{Destination, ProgramId, UnitSystem};
use crate::classification::rules::{
    ChannelRule, Dimensioning, Metric, Metrics, Outcome, Rule, Tier, TieredChannel, WeightBasis,
};
use crate::classification::{Catalog, NOT_APPLICABLE, NO_MATCHING_RULE};

static NARROW: TieredChannel = TieredChannel {
    name: "Narrow",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::Divisor(5000.0),
    tiers: &[Tier {
        when: Rule::AtMost(Metric::Length, 10.0),
        outcome: Outcome::Eligible("tiny"),
    }],
};

#[test]
fn ranges_exclude_lower_and_include_upper_bound() {
    let rule = Rule::Between(Metric::Length, 48.0, 96.0);

    assert!(!rule.holds(&Metrics::raw(&measurement(48.0, 1.0, 1.0, 1.0), UnitSystem::Imperial)));
    assert!(rule.holds(&Metrics::raw(&measurement(48.1, 1.0, 1.0, 1.0), UnitSystem::Imperial)));
    assert!(rule.holds(&Metrics::raw(&measurement(96.0, 1.0, 1.0, 1.0), UnitSystem::Imperial)));
    assert!(!rule.holds(&Metrics::raw(&measurement(96.1, 1.0, 1.0, 1.0), UnitSystem::Imperial)));
}

#[test]
fn ladder_without_a_match_reports_no_matching_rule() {
    let result = NARROW.evaluate(&measurement(20.0, 10.0, 10.0, 1.0), Destination::Other);

    assert!(!result.eligible);
    assert_eq!(result.tier, NOT_APPLICABLE);
    assert_eq!(result.reason, NO_MATCHING_RULE);
    assert_close(result.dimensional_weight, 0.4);
    assert_close(result.chargeable_weight, 1.0);
}

#[test]
fn divisor_channel_charges_the_heavier_of_dimensional_and_actual() {
    // Scenario: 40 x 20 x 10 in, 10 lb, divisor 250.
    let fedex = channel(ProgramId::UsFbm, "FEDEX-Ground");
    let result = fedex.evaluate(&measurement(40.0, 20.0, 10.0, 10.0), Destination::Other);

    assert!(result.eligible);
    assert_eq!(result.tier, "standard");
    assert_close(result.dimensional_weight, 32.0);
    assert_close(result.chargeable_weight, 32.0);
    assert_eq!(result.reason, NOT_APPLICABLE);
}

#[test]
fn amazon_ladder_checks_the_secondary_divisor() {
    let amazon = channel(ProgramId::UsFbm, "Amazon-Ground");
    // 9000 / 250 = 36 lb primary, 9000 / 194 = 46.4 lb secondary: both under 50.
    let within = amazon.evaluate(&measurement(30.0, 20.0, 15.0, 10.0), Destination::Other);
    assert_eq!(within.tier, "standard");

    // 11232 / 250 = 44.9 lb primary but 57.9 lb secondary.
    let heavy = amazon.evaluate(&measurement(36.0, 24.0, 13.0, 10.0), Destination::Other);
    assert!(heavy.eligible);
    assert_eq!(heavy.tier, "large package (LPS)");
    assert_close(heavy.chargeable_weight, 11232.0 / 250.0);
}

#[test]
fn ground_saver_switches_divisor_on_metric_volume() {
    let saver = channel(ProgramId::UsFbm, "UPS-Ground Saver");
    let ChannelRule::Tiered(saver) = saver else {
        panic!("UPS-Ground Saver is a tiered channel");
    };

    // 1920 in3 is about 31463 cm3, above the 28000 cm3 switch.
    let large = saver.metrics(&measurement(20.0, 12.0, 8.0, 2.0), Destination::Other);
    assert_close(large.dim_weight, 1920.0 / 125.0);

    // 1600 in3 is about 26219 cm3.
    let small = saver.metrics(&measurement(20.0, 10.0, 8.0, 2.0), Destination::Other);
    assert_close(small.dim_weight, 1600.0 / 167.0);
}

#[test]
fn economy_applies_flat_floor_inside_girth_window() {
    let ChannelRule::Tiered(economy) = channel(ProgramId::UsFbm, "FEDEX-Economy") else {
        panic!("FEDEX-Economy is a tiered channel");
    };

    // Girth 84, dimensional 18.56 lb, actual 5 lb: the 20 lb floor applies.
    let floored = economy.metrics(&measurement(50.0, 8.0, 9.0, 5.0), Destination::Other);
    assert_close(floored.girth, 84.0);
    assert_close(floored.chargeable, 20.0);

    // Girth 83 sits below the window, so the max rule holds.
    let plain = economy.metrics(&measurement(49.0, 8.0, 9.0, 5.0), Destination::Other);
    assert_close(plain.chargeable, (49.0 * 8.0 * 9.0) / 194.0);
}

#[test]
fn metric_catalogs_round_dimensions_before_girth() {
    let dhl = channel(ProgramId::DeFbm, "DHL-DE-Parcel");
    let ChannelRule::Tiered(tiered) = dhl else {
        panic!("DHL-DE-Parcel is a tiered channel");
    };
    let parcel = measurement(30.2, 20.1, 10.5, 2.0);

    let metrics = tiered.metrics(&parcel, Destination::Other);
    assert_eq!((metrics.length, metrics.width, metrics.height), (31.0, 21.0, 11.0));
    assert_close(metrics.girth, 31.0 + 2.0 * (21.0 + 11.0));

    let result = dhl.evaluate(&parcel, Destination::Other);
    assert_eq!(result.tier, "standard");
    assert_close(result.dimensional_weight, 31.0 * 21.0 * 11.0);
    assert_close(result.chargeable_weight, 2.0);
}

#[test]
fn girth_is_derived_after_rounding_for_every_channel() {
    let catalog = Catalog::standard();
    for profile in catalog.profiles() {
        for rule in profile.channels() {
            let ChannelRule::Tiered(tiered) = rule else {
                continue;
            };
            for parcel in measurement_grid() {
                let metrics = tiered.metrics(&parcel, Destination::Other);
                let expected = match tiered.dimensioning {
                    Dimensioning::Exact => parcel.girth(),
                    Dimensioning::RoundUp => {
                        parcel.length.ceil() + 2.0 * (parcel.width.ceil() + parcel.height.ceil())
                    }
                };
                assert_close(metrics.girth, expected);
            }
        }
    }
}

#[test]
fn chargeable_weight_covers_actual_and_dimensional_for_max_rule_channels() {
    let catalog = Catalog::standard();
    for profile in catalog.profiles() {
        for rule in profile.channels().into_iter().filter(ChannelRule::honors_max_rule) {
            for parcel in measurement_grid() {
                for destination in
                    [Destination::Other, Destination::Austria, Destination::Croatia]
                {
                    let result = rule.evaluate(&parcel, destination);
                    if !result.eligible {
                        continue;
                    }
                    assert!(
                        result.chargeable_weight >= parcel.weight,
                        "{} charged below actual weight",
                        result.channel
                    );
                    assert!(
                        result.chargeable_weight >= result.dimensional_weight,
                        "{} charged below dimensional weight",
                        result.channel
                    );
                }
            }
        }
    }
}

#[test]
fn weight_only_channels_bill_actual_weight() {
    let catalog = Catalog::standard();
    let weight_only = ["YUN-Ground", "UPS-MI", "DHL-DE-Parcel", "RoyalMail-Parcel", "JP-FBA"];
    for profile in catalog.profiles() {
        for rule in profile
            .channels()
            .into_iter()
            .filter(|rule| weight_only.contains(&rule.name()))
        {
            assert!(!rule.honors_max_rule());
            for parcel in measurement_grid() {
                let result = rule.evaluate(&parcel, Destination::Other);
                assert_close(result.chargeable_weight, parcel.weight);
            }
        }
    }
}

#[test]
fn gel_international_uses_destination_factor() {
    let gel = channel(ProgramId::DeFbm, "GEL-Intl-Bulky");
    let parcel = measurement(100.0, 80.0, 60.0, 45.0);

    let other = gel.evaluate(&parcel, Destination::Other);
    let austria = gel.evaluate(&parcel, Destination::Austria);
    let croatia = gel.evaluate(&parcel, Destination::Croatia);

    assert_close(other.dimensional_weight, 0.48 * 167.0);
    assert_close(austria.dimensional_weight, 0.48 * 200.0);
    assert_close(croatia.dimensional_weight, 0.48 * 300.0);
    assert_close(croatia.chargeable_weight, 144.0);
    assert!(other.eligible && austria.eligible && croatia.eligible);
}

#[test]
fn surcharge_channel_never_rejects_and_sums_fees() {
    // Girth 140 and weight 75 lb breach H (girth > 130) and K (weight > 70).
    let ca = channel(ProgramId::CaFba, "CA-FBA");
    let result = ca.evaluate(&measurement(40.0, 25.0, 25.0, 75.0), Destination::Other);

    assert!(result.eligible);
    assert_eq!(result.tier, "surcharge triggered");
    assert_eq!(result.reason, "triggered: H,K; surcharge total USD 77.00");
    assert_close(result.dimensional_weight, 40.0 * 25.0 * 25.0);
    assert_close(result.chargeable_weight, 75.0);

    let huge = ca.evaluate(&measurement(120.0, 40.0, 30.0, 200.0), Destination::Other);
    assert!(huge.eligible);
    assert_eq!(
        huge.reason,
        "triggered: A,B,E,H,I,K,L; surcharge total USD 561.00"
    );
}

#[test]
fn surcharge_channel_without_triggers_is_standard() {
    let ca = channel(ProgramId::CaFba, "CA-FBA");
    let result = ca.evaluate(&measurement(20.0, 10.0, 10.0, 5.0), Destination::Other);

    assert!(result.eligible);
    assert_eq!(result.tier, "standard (no surcharge)");
    assert_eq!(result.reason, NOT_APPLICABLE);
}

#[test]
fn yodel_never_reaches_duplicate_next_day_tiers() {
    let yodel = channel(ProgramId::UkFbm, "YODEL-UK");

    let large = yodel.evaluate(&measurement(50.0, 30.0, 20.0, 5.0), Destination::Other);
    assert_eq!(large.tier, "48H large parcel");

    let bulky = yodel.evaluate(&measurement(110.0, 60.0, 30.0, 20.0), Destination::Other);
    assert_eq!(bulky.tier, "48H bulky");

    let oversized = yodel.evaluate(&measurement(200.0, 60.0, 30.0, 20.0), Destination::Other);
    assert!(!oversized.eligible);
    assert_eq!(oversized.reason, "exceeds limits");
}

#[test]
fn jp_express_cargo_steps_by_girth_and_weight() {
    let cargo = channel(ProgramId::JpFbm, "JP-Express-Cargo");

    let first = cargo.evaluate(&measurement(21.0, 15.0, 2.0, 0.5), Destination::Other);
    assert_eq!(first.tier, "price step 1");

    // Rounded girth 63 exceeds step 1.
    let second = cargo.evaluate(&measurement(24.2, 15.0, 2.1, 0.5), Destination::Other);
    assert_eq!(second.tier, "price step 2");

    let heavy_small = cargo.evaluate(&measurement(20.0, 10.0, 10.0, 45.0), Destination::Other);
    assert_eq!(heavy_small.tier, "price step 6");
}

#[test]
fn jp_fba_reports_weight_surcharge_levels() {
    let fba = channel(ProgramId::JpFba, "JP-FBA");

    let j = fba.evaluate(&measurement(40.0, 30.0, 30.0, 27.0), Destination::Other);
    assert!(j.eligible);
    assert_eq!(j.tier, "surcharge tier J");
    assert_eq!(j.reason, "weight over 25 kg, surcharge 432.00 JPY");
    assert_close(j.dimensional_weight, 0.0);

    let over = fba.evaluate(&measurement(40.0, 30.0, 30.0, 55.0), Destination::Other);
    assert!(!over.eligible);
    assert_eq!(over.reason, "weight over 50 kg");
}

#[test]
fn jp_fba_reads_weight_rounded_to_two_decimals() {
    let fba = channel(ProgramId::JpFba, "JP-FBA");

    let edge = fba.evaluate(&measurement(40.0, 30.0, 30.0, 50.004), Destination::Other);
    assert!(edge.eligible);
    assert_eq!(edge.tier, "surcharge tier K");
    assert_close(edge.chargeable_weight, 50.0);

    let over = fba.evaluate(&measurement(40.0, 30.0, 30.0, 50.006), Destination::Other);
    assert!(!over.eligible);
    assert_close(over.chargeable_weight, 50.01);
}
