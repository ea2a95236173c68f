//! Japanese catalogs (centimetres, kilograms).

use super::super::advisory::{Threshold, ThresholdTable};
use super::super::domain::{ProgramId, UnitSystem};
use super::super::limits::{Bound, HardLimitSpec};
use super::super::rules::Metric::*;
use super::super::rules::Outcome::*;
use super::super::rules::Rule::*;
use super::super::rules::{ChannelRule, Dimensioning, Tier, TieredChannel, WeightBasis};
use super::{CandidateSource, ProgramProfile};

static JP_COMPACT: TieredChannel = TieredChannel {
    name: "JP-Compact",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: &[
        Tier {
            when: All(&[
                AtLeast(Length, 21.0),
                AtLeast(Width, 15.0),
                Between(Height, 0.0, 3.0),
                Between(Weight, 0.0, 1.0),
                Between(Girth, 0.0, 60.0),
            ]),
            outcome: Eligible("standard"),
        },
        Tier {
            when: Always,
            outcome: Ineligible("does not meet compact size"),
        },
    ],
};

// Price steps by girth and weight ceiling, cheapest first.
static JP_EXPRESS_CARGO: TieredChannel = TieredChannel {
    name: "JP-Express-Cargo",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: &[
        Tier {
            when: All(&[AtMost(Girth, 60.0), AtMost(Weight, 2.0)]),
            outcome: Eligible("price step 1"),
        },
        Tier {
            when: All(&[AtMost(Girth, 80.0), AtMost(Weight, 5.0)]),
            outcome: Eligible("price step 2"),
        },
        Tier {
            when: All(&[AtMost(Girth, 100.0), AtMost(Weight, 10.0)]),
            outcome: Eligible("price step 3"),
        },
        Tier {
            when: All(&[AtMost(Girth, 140.0), AtMost(Weight, 20.0)]),
            outcome: Eligible("price step 4"),
        },
        Tier {
            when: All(&[AtMost(Girth, 160.0), AtMost(Weight, 30.0)]),
            outcome: Eligible("price step 5"),
        },
        Tier {
            when: All(&[AtMost(Girth, 170.0), AtMost(Weight, 50.0)]),
            outcome: Eligible("price step 6"),
        },
        Tier {
            when: All(&[AtMost(Girth, 180.0), AtMost(Weight, 50.0)]),
            outcome: Eligible("price step 7"),
        },
        Tier {
            when: All(&[AtMost(Girth, 200.0), AtMost(Weight, 50.0)]),
            outcome: Eligible("price step 8"),
        },
        Tier {
            when: All(&[AtMost(Girth, 220.0), AtMost(Weight, 50.0)]),
            outcome: Eligible("price step 9"),
        },
        Tier {
            when: All(&[AtMost(Girth, 240.0), AtMost(Weight, 50.0)]),
            outcome: Eligible("price step 10"),
        },
        Tier {
            when: All(&[AtMost(Girth, 260.0), AtMost(Weight, 50.0)]),
            outcome: Eligible("price step 11"),
        },
        Tier {
            when: Always,
            outcome: Ineligible("exceeds specification"),
        },
    ],
};

static JP_FBM_CHANNELS: [ChannelRule; 2] = [
    ChannelRule::Tiered(&JP_COMPACT),
    ChannelRule::Tiered(&JP_EXPRESS_CARGO),
];

pub(super) fn jp_fbm() -> ProgramProfile {
    ProgramProfile {
        id: ProgramId::JpFbm,
        units: UnitSystem::Metric,
        limits: HardLimitSpec {
            length: Bound::at_least(0.1),
            width: Bound::at_least(0.1),
            height: Bound::at_least(0.1),
            girth: Bound::at_most(260.0),
            weight: Bound::between(0.01, 50.0),
        },
        thresholds: ThresholdTable {
            length: &[Threshold { value: 21.0, label: "compact minimum length" }],
            width: &[Threshold { value: 15.0, label: "compact minimum width" }],
            height: &[Threshold { value: 3.0, label: "compact maximum height" }],
            girth: &[
                Threshold { value: 60.0, label: "price step 1" },
                Threshold { value: 80.0, label: "price step 2" },
                Threshold { value: 100.0, label: "price step 3" },
                Threshold { value: 140.0, label: "price step 4" },
                Threshold { value: 160.0, label: "price step 5" },
                Threshold { value: 170.0, label: "price step 6" },
                Threshold { value: 180.0, label: "price step 7" },
                Threshold { value: 200.0, label: "price step 8" },
                Threshold { value: 220.0, label: "price step 9" },
                Threshold { value: 240.0, label: "price step 10" },
                Threshold { value: 260.0, label: "price step 11" },
            ],
            weight: &[
                Threshold { value: 1.0, label: "compact weight" },
                Threshold { value: 2.0, label: "price step 1 weight" },
                Threshold { value: 5.0, label: "price step 2 weight" },
                Threshold { value: 10.0, label: "price step 3 weight" },
                Threshold { value: 20.0, label: "price step 4 weight" },
                Threshold { value: 30.0, label: "price step 5 weight" },
                Threshold { value: 50.0, label: "maximum weight" },
            ],
            volume: &[],
            billing: &[],
        },
        candidates: CandidateSource::Fixed(&JP_FBM_CHANNELS),
    }
}

static JP_FBA: TieredChannel = TieredChannel {
    name: "JP-FBA",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::ActualToCents,
    tiers: &[
        Tier {
            when: Above(Weight, 50.0),
            outcome: Ineligible("weight over 50 kg"),
        },
        Tier {
            when: Above(Weight, 30.0),
            outcome: EligibleWithNote(
                "surcharge tier K",
                "weight over 30 kg, surcharge 1233.00 JPY",
            ),
        },
        Tier {
            when: Above(Weight, 25.0),
            outcome: EligibleWithNote(
                "surcharge tier J",
                "weight over 25 kg, surcharge 432.00 JPY",
            ),
        },
        Tier {
            when: Always,
            outcome: Eligible("standard (no surcharge)"),
        },
    ],
};

static JP_FBA_CHANNELS: [ChannelRule; 1] = [ChannelRule::Tiered(&JP_FBA)];

pub(super) fn jp_fba() -> ProgramProfile {
    ProgramProfile {
        id: ProgramId::JpFba,
        units: UnitSystem::Metric,
        limits: HardLimitSpec {
            length: Bound::at_least(0.1),
            width: Bound::at_least(0.1),
            height: Bound::at_least(0.1),
            girth: Bound::NONE,
            weight: Bound::at_least(0.01),
        },
        thresholds: ThresholdTable {
            weight: &[
                Threshold { value: 25.0, label: "surcharge tier J" },
                Threshold { value: 30.0, label: "surcharge tier K" },
                Threshold { value: 50.0, label: "maximum weight" },
            ],
            ..ThresholdTable::EMPTY
        },
        candidates: CandidateSource::Fixed(&JP_FBA_CHANNELS),
    }
}
