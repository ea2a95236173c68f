//! US merchant-fulfilled, US FBA and Canada FBA catalogs (inches, pounds).

use super::super::advisory::{BilledWeight, BillingThreshold, Threshold, ThresholdTable};
use super::super::domain::{ProgramId, UnitSystem};
use super::super::limits::{Bound, HardLimitSpec};
use super::super::rules::Metric::*;
use super::super::rules::Outcome::*;
use super::super::rules::Rule::*;
use super::super::rules::{
    ChannelRule, Dimensioning, FloorStep, Surcharge, SurchargeChannel, Tier, TieredChannel,
    WeightBasis,
};
use super::{CandidateBand, CandidateSource, ProgramProfile};

const STANDARD: &str = "standard";
const OVERSIZE_OR_OVERWEIGHT: &str = "oversize or overweight";
const EXCEEDS_LIMITS: &str = "exceeds limits";
const EXCEEDS_MAXIMUM: &str = "exceeds maximum limits";

const GROUND_LADDER: &[Tier] = &[
    Tier {
        when: All(&[
            AtMost(Length, 48.0),
            AtMost(Width, 30.0),
            AtMost(Girth, 105.0),
            AtMost(Weight, 50.0),
        ]),
        outcome: Eligible(STANDARD),
    },
    Tier {
        when: Any(&[
            Between(Length, 48.0, 96.0),
            Between(Width, 30.0, 96.0),
            Between(Girth, 105.0, 130.0),
            Between(Weight, 50.0, 150.0),
        ]),
        outcome: Eligible("additional handling (AHS)"),
    },
    Tier {
        when: All(&[
            Any(&[Between(Length, 96.0, 108.0), Between(Girth, 130.0, 165.0)]),
            AtMost(Weight, 150.0),
        ]),
        outcome: Eligible("large package (LPS)"),
    },
    Tier {
        when: Any(&[
            Above(Length, 108.0),
            Above(Girth, 165.0),
            Above(Weight, 150.0),
        ]),
        outcome: Ineligible(EXCEEDS_MAXIMUM),
    },
];

// Amazon channels check both the postal (250) and GC warehouse (194) chargeable weights.
const AMAZON_LADDER: &[Tier] = &[
    Tier {
        when: All(&[
            AtMost(Length, 37.0),
            AtMost(Width, 30.0),
            AtMost(Height, 24.0),
            AtMost(Girth, 105.0),
            AtMost(Chargeable, 50.0),
            AtMost(AltChargeable, 50.0),
        ]),
        outcome: Eligible(STANDARD),
    },
    Tier {
        when: Any(&[
            Between(Length, 37.0, 47.0),
            Between(Width, 30.0, 33.0),
            Above(Height, 24.0),
        ]),
        outcome: Eligible("non-standard fee"),
    },
    Tier {
        when: Any(&[
            Between(Length, 47.0, 59.0),
            Above(Width, 42.0),
            Between(Girth, 105.0, 126.0),
            Above(Chargeable, 50.0),
            Above(AltChargeable, 50.0),
        ]),
        outcome: Eligible("large package (LPS)"),
    },
    Tier {
        when: Any(&[
            Above(Length, 59.0),
            Above(Width, 33.0),
            Above(Height, 33.0),
            Above(Girth, 126.0),
            Above(Chargeable, 50.0),
        ]),
        outcome: Ineligible("not shippable via WP"),
    },
    Tier {
        when: Any(&[
            Above(Length, 48.0),
            Above(Width, 30.0),
            Above(Girth, 105.0),
            Above(AltChargeable, 50.0),
        ]),
        outcome: Ineligible("not shippable via GC"),
    },
];

const UPS_MI_LADDER: &[Tier] = &[
    Tier {
        when: Any(&[Between(Length, 22.0, 27.0), Above(VolumeCm3, 55_000.0)]),
        outcome: Eligible(OVERSIZE_OR_OVERWEIGHT),
    },
    Tier {
        when: Any(&[
            Above(Length, 27.0),
            Above(Width, 16.0),
            Above(Height, 16.0),
            Above(Girth, 50.0),
            Above(Weight, 10.0),
        ]),
        outcome: Ineligible(EXCEEDS_LIMITS),
    },
];

static FEDEX_GROUND: TieredChannel = TieredChannel {
    name: "FEDEX-Ground",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::Divisor(250.0),
    tiers: GROUND_LADDER,
};

static UPS_GROUND: TieredChannel = TieredChannel {
    name: "UPS-Ground",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::Divisor(223.0),
    tiers: GROUND_LADDER,
};

static AMAZON_GROUND: TieredChannel = TieredChannel {
    name: "Amazon-Ground",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::DualDivisor {
        primary: 250.0,
        secondary: 194.0,
    },
    tiers: AMAZON_LADDER,
};

static AMAZON_SHIPPING: TieredChannel = TieredChannel {
    name: "Amazon-Shipping",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::DualDivisor {
        primary: 250.0,
        secondary: 194.0,
    },
    tiers: AMAZON_LADDER,
};

static YUN_GROUND: TieredChannel = TieredChannel {
    name: "YUN-Ground",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::ActualOnly,
    tiers: GROUND_LADDER,
};

static WP_GROUND: TieredChannel = TieredChannel {
    name: "WP-Ground",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::Divisor(250.0),
    tiers: &[
        Tier {
            when: All(&[
                AtMost(Length, 96.0),
                AtMost(Girth, 130.0),
                AtMost(Chargeable, 150.0),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[Between(Length, 96.0, 108.0), Above(Girth, 130.0)]),
            outcome: Eligible("oversize"),
        },
        Tier {
            when: Any(&[Above(Length, 108.0), Above(Chargeable, 150.0)]),
            outcome: Ineligible(EXCEEDS_MAXIMUM),
        },
    ],
};

static USPS_GROUND: TieredChannel = TieredChannel {
    name: "USPS-Ground Advantage",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::Divisor(166.0),
    tiers: &[
        Tier {
            when: All(&[
                AtMost(Length, 22.0),
                AtMost(Girth, 108.0),
                AtMost(Weight, 50.0),
                AtMost(Chargeable, 70.0),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[Above(Length, 22.0), Above(VolumeCm3, 55_000.0)]),
            outcome: Eligible(OVERSIZE_OR_OVERWEIGHT),
        },
        Tier {
            when: Any(&[Above(Girth, 108.0), Above(Chargeable, 70.0)]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static UPS_MI_LIGHTWEIGHT: TieredChannel = TieredChannel {
    name: "UPS-MI-Lightweight",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::ActualWithVolume,
    tiers: &[
        Tier {
            when: All(&[AtMost(Length, 22.0), AtMost(Weight, 10.0)]),
            outcome: Eligible(STANDARD),
        },
        UPS_MI_LADDER[0],
        UPS_MI_LADDER[1],
    ],
};

static DHL_LOCAL_SMALL: TieredChannel = TieredChannel {
    name: "DHL-Local-Small",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::Divisor(166.0),
    tiers: &[
        Tier {
            when: All(&[
                AtMost(Length, 22.0),
                AtMost(Girth, 50.0),
                AtMost(Weight, 1.0),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[Between(Length, 22.0, 27.0), Above(VolumeCm3, 55_000.0)]),
            outcome: Eligible(OVERSIZE_OR_OVERWEIGHT),
        },
        Tier {
            when: Any(&[Above(Length, 27.0), Above(Girth, 50.0), Above(Weight, 1.0)]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static GC_PARCEL: TieredChannel = TieredChannel {
    name: "GC-Parcel",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::Divisor(223.0),
    tiers: &[
        Tier {
            when: All(&[
                Below(Length, 22.0),
                Below(Width, 16.0),
                AtMost(Height, 16.0),
                AtMost(Weight, 25.0),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[
                AtLeast(Length, 22.0),
                AtLeast(Width, 16.0),
                Above(Height, 16.0),
                AtLeast(Weight, 25.0),
                AtLeast(VolumeCm3, 56_000.0),
            ]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static FEDEX_SMARTPOST: TieredChannel = TieredChannel {
    name: "FEDEX-Smartpost",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::Divisor(250.0),
    tiers: &[
        Tier {
            when: All(&[
                Between(Length, 6.0, 27.0),
                Between(Width, 4.0, 17.0),
                Between(Height, 1.0, 17.0),
                AtMost(Girth, 108.0),
                AtMost(Chargeable, 70.0),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[
                Between(Length, 27.0, 60.0),
                Above(Width, 17.0),
                Between(Weight, 35.0, 71.0),
            ]),
            outcome: Eligible(OVERSIZE_OR_OVERWEIGHT),
        },
        Tier {
            when: Any(&[
                Above(Length, 60.0),
                Above(Girth, 130.0),
                Above(Chargeable, 70.0),
            ]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static FEDEX_ECONOMY: TieredChannel = TieredChannel {
    name: "FEDEX-Economy",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::SteppedFloor {
        divisor: 194.0,
        steps: &[
            FloorStep {
                weight_below: 20.0,
                girth_from: 84.0,
                girth_below: 107.0,
                floor: 20.0,
            },
            FloorStep {
                weight_below: 70.0,
                girth_from: 107.0,
                girth_below: 130.0,
                floor: 70.0,
            },
        ],
    },
    tiers: &[
        Tier {
            when: All(&[
                AtMost(Length, 27.0),
                AtMost(Width, 17.0),
                AtMost(Height, 17.0),
                AtMost(Girth, 130.0),
                AtMost(Weight, 9.0),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[
                Between(Length, 27.0, 48.0),
                Between(Width, 17.0, 30.0),
                Between(Height, 17.0, 30.0),
            ]),
            outcome: Eligible(OVERSIZE_OR_OVERWEIGHT),
        },
        Tier {
            when: Any(&[
                Above(Length, 60.0),
                Above(Girth, 130.0),
                Above(Chargeable, 70.0),
            ]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static UPS_GROUND_SAVER: TieredChannel = TieredChannel {
    name: "UPS-Ground Saver",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::VolumeSwitchedDivisor {
        volume_above_cm3: 28_000.0,
        large: 125.0,
        small: 167.0,
    },
    tiers: &[
        Tier {
            when: All(&[
                AtMost(Length, 22.0),
                AtMost(Girth, 105.0),
                Between(Chargeable, 1.0, 9.0),
                AtMost(VolumeCm3, 56_000.0),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[Between(Length, 22.0, 48.0), Above(VolumeCm3, 56_000.0)]),
            outcome: Eligible("oversize"),
        },
        Tier {
            when: Any(&[
                Between(Length, 48.0, 108.0),
                Above(Width, 30.0),
                Above(VolumeCm3, 141_500.0),
            ]),
            outcome: Eligible("large package"),
        },
        Tier {
            when: Any(&[
                Above(Length, 108.0),
                Above(Girth, 165.0),
                Above(Chargeable, 9.0),
            ]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static UPS_MI: TieredChannel = TieredChannel {
    name: "UPS-MI",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::ActualWithVolume,
    tiers: &[
        Tier {
            when: All(&[AtMost(Length, 22.0), Between(Weight, 1.0, 10.0)]),
            outcome: Eligible(STANDARD),
        },
        UPS_MI_LADDER[0],
        UPS_MI_LADDER[1],
    ],
};

static USPS_PRIORITY: TieredChannel = TieredChannel {
    name: "USPS-Priority",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::Divisor(166.0),
    tiers: &[
        Tier {
            when: All(&[AtMost(Length, 22.0), AtMost(Chargeable, 70.0)]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[Above(Length, 22.0), Above(VolumeCm3, 55_000.0)]),
            outcome: Eligible(OVERSIZE_OR_OVERWEIGHT),
        },
        Tier {
            when: Any(&[Above(Girth, 50.0), Above(Chargeable, 70.0)]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static DHL_LOCAL_BIG: TieredChannel = TieredChannel {
    name: "DHL-Local-Big",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::Divisor(166.0),
    tiers: &[
        Tier {
            when: All(&[
                AtMost(Length, 22.0),
                AtMost(Chargeable, 25.0),
                AtMost(Girth, 50.0),
                AtMost(VolumeCm3, 56_000.0),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[
                Between(Length, 22.0, 27.0),
                Between(Girth, 50.0, 84.0),
                Above(VolumeCm3, 56_000.0),
            ]),
            outcome: Eligible(OVERSIZE_OR_OVERWEIGHT),
        },
        Tier {
            when: Any(&[
                Above(Length, 27.0),
                Above(Girth, 84.0),
                Above(Chargeable, 25.0),
            ]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static US_FBM_GROUND: [ChannelRule; 6] = [
    ChannelRule::Tiered(&FEDEX_GROUND),
    ChannelRule::Tiered(&UPS_GROUND),
    ChannelRule::Tiered(&AMAZON_GROUND),
    ChannelRule::Tiered(&AMAZON_SHIPPING),
    ChannelRule::Tiered(&YUN_GROUND),
    ChannelRule::Tiered(&WP_GROUND),
];

static US_FBM_SMALL_PARCEL: [ChannelRule; 4] = [
    ChannelRule::Tiered(&USPS_GROUND),
    ChannelRule::Tiered(&UPS_MI_LIGHTWEIGHT),
    ChannelRule::Tiered(&DHL_LOCAL_SMALL),
    ChannelRule::Tiered(&GC_PARCEL),
];

static US_FBM_LIGHTWEIGHT: [ChannelRule; 6] = [
    ChannelRule::Tiered(&FEDEX_SMARTPOST),
    ChannelRule::Tiered(&FEDEX_ECONOMY),
    ChannelRule::Tiered(&UPS_GROUND_SAVER),
    ChannelRule::Tiered(&UPS_MI),
    ChannelRule::Tiered(&USPS_PRIORITY),
    ChannelRule::Tiered(&DHL_LOCAL_BIG),
];

static US_FBM_BANDS: [CandidateBand; 3] = [
    CandidateBand {
        name: "ground",
        when: All(&[
            AtLeast(Weight, 8.0),
            AtMost(Weight, 150.0),
            Any(&[
                All(&[
                    AtMost(Length, 48.0),
                    AtMost(Width, 30.0),
                    AtMost(Girth, 105.0),
                    AtMost(Weight, 50.0),
                ]),
                Any(&[Above(Length, 48.0), Above(Girth, 105.0)]),
            ]),
        ]),
        channels: &US_FBM_GROUND,
        note: None,
    },
    CandidateBand {
        name: "small-parcel",
        when: All(&[
            Above(Weight, 0.0),
            AtMost(Weight, 5.0),
            Any(&[
                All(&[
                    AtMost(Length, 22.0),
                    AtMost(Width, 16.0),
                    AtMost(Height, 16.0),
                ]),
                All(&[AtMost(Length, 27.0), AtMost(Width, 17.0)]),
            ]),
        ]),
        channels: &US_FBM_SMALL_PARCEL,
        note: None,
    },
    CandidateBand {
        name: "lightweight",
        when: All(&[
            AtLeast(Weight, 1.0),
            AtMost(Weight, 10.0),
            AtMost(Length, 48.0),
            AtMost(Width, 30.0),
            AtMost(Girth, 105.0),
        ]),
        channels: &US_FBM_LIGHTWEIGHT,
        note: None,
    },
];

const US_FBM_THRESHOLDS: ThresholdTable = ThresholdTable {
    length: &[
        Threshold { value: 22.0, label: "USPS/DHL/UPS MI standard length" },
        Threshold { value: 27.0, label: "small-parcel and Smartpost length" },
        Threshold { value: 37.0, label: "Amazon standard length" },
        Threshold { value: 47.0, label: "Amazon non-standard length" },
        Threshold { value: 48.0, label: "Ground standard length" },
        Threshold { value: 59.0, label: "Amazon large-package length" },
        Threshold { value: 60.0, label: "Smartpost/Economy maximum length" },
        Threshold { value: 96.0, label: "Ground additional-handling length" },
        Threshold { value: 108.0, label: "Ground maximum length" },
    ],
    width: &[
        Threshold { value: 16.0, label: "UPS MI/GC-Parcel width" },
        Threshold { value: 17.0, label: "Smartpost/Economy width" },
        Threshold { value: 30.0, label: "Ground standard width" },
        Threshold { value: 33.0, label: "Amazon non-standard width" },
        Threshold { value: 42.0, label: "Amazon large-package width" },
        Threshold { value: 96.0, label: "Ground additional-handling width" },
    ],
    height: &[
        Threshold { value: 16.0, label: "UPS MI/GC-Parcel height" },
        Threshold { value: 17.0, label: "Smartpost/Economy height" },
        Threshold { value: 24.0, label: "Amazon standard height" },
        Threshold { value: 33.0, label: "Amazon maximum height" },
    ],
    girth: &[
        Threshold { value: 50.0, label: "small-parcel girth" },
        Threshold { value: 84.0, label: "DHL-Local-Big girth" },
        Threshold { value: 105.0, label: "Ground standard girth" },
        Threshold { value: 108.0, label: "USPS/Smartpost girth" },
        Threshold { value: 126.0, label: "Amazon large-package girth" },
        Threshold { value: 130.0, label: "Ground additional-handling girth" },
        Threshold { value: 165.0, label: "Ground maximum girth" },
    ],
    weight: &[
        Threshold { value: 1.0, label: "DHL-Local-Small weight" },
        Threshold { value: 5.0, label: "small-parcel band weight" },
        Threshold { value: 9.0, label: "Economy/Ground Saver weight" },
        Threshold { value: 10.0, label: "UPS MI weight" },
        Threshold { value: 20.0, label: "Economy 20 lb floor" },
        Threshold { value: 25.0, label: "GC-Parcel/DHL-Local-Big weight" },
        Threshold { value: 35.0, label: "Smartpost oversize weight" },
        Threshold { value: 50.0, label: "Ground standard weight" },
        Threshold { value: 70.0, label: "USPS/Smartpost maximum weight" },
        Threshold { value: 150.0, label: "Ground maximum weight" },
    ],
    volume: &[
        Threshold { value: 28_000.0, label: "Ground Saver divisor switch" },
        Threshold { value: 55_000.0, label: "USPS/UPS MI oversize volume" },
        Threshold { value: 56_000.0, label: "GC-Parcel/DHL-Local-Big volume" },
        Threshold { value: 141_500.0, label: "Ground Saver large-package volume" },
    ],
    billing: &[],
};

pub(super) fn us_fbm() -> ProgramProfile {
    ProgramProfile {
        id: ProgramId::UsFbm,
        units: UnitSystem::Imperial,
        limits: HardLimitSpec {
            length: Bound::between(0.1, 108.0),
            width: Bound::at_least(0.1),
            height: Bound::at_least(0.1),
            girth: Bound::at_most(165.0),
            weight: Bound::between(0.01, 150.0),
        },
        thresholds: US_FBM_THRESHOLDS,
        candidates: CandidateSource::Banded {
            bands: &US_FBM_BANDS,
            unmatched:
                "no US-FBM band covers this weight and size; check the package or quote freight",
        },
    }
}

static US_FBA: TieredChannel = TieredChannel {
    name: "US-FBA",
    units: UnitSystem::Imperial,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::Divisor(139.0),
    tiers: &[
        Tier {
            when: All(&[
                AtMost(Length, 15.0),
                AtMost(Width, 12.0),
                AtMost(Height, 0.75),
                AtMost(Chargeable, 1.0),
            ]),
            outcome: Eligible("FBA small standard"),
        },
        Tier {
            when: All(&[
                AtMost(Length, 18.0),
                AtMost(Width, 14.0),
                AtMost(Height, 8.0),
                AtMost(Girth, 130.0),
                AtMost(Chargeable, 20.0),
            ]),
            outcome: Eligible("FBA large standard"),
        },
        Tier {
            when: All(&[
                AtMost(Length, 59.0),
                AtMost(Width, 33.0),
                AtMost(Height, 33.0),
                AtMost(Girth, 130.0),
                AtMost(Chargeable, 50.0),
            ]),
            outcome: Eligible("FBA large bulky"),
        },
        Tier {
            when: Always,
            outcome: Eligible("FBA extra-large"),
        },
    ],
};

static US_FBA_CHANNELS: [ChannelRule; 1] = [ChannelRule::Tiered(&US_FBA)];

pub(super) fn us_fba() -> ProgramProfile {
    ProgramProfile {
        id: ProgramId::UsFba,
        units: UnitSystem::Imperial,
        limits: HardLimitSpec {
            length: Bound::at_least(0.1),
            width: Bound::at_least(0.1),
            height: Bound::at_least(0.1),
            girth: Bound::NONE,
            weight: Bound::between(0.01, 150.0),
        },
        thresholds: ThresholdTable {
            length: &[
                Threshold { value: 15.0, label: "FBA small standard length" },
                Threshold { value: 18.0, label: "FBA large standard length" },
                Threshold { value: 59.0, label: "FBA large bulky length" },
            ],
            width: &[
                Threshold { value: 12.0, label: "FBA small standard width" },
                Threshold { value: 14.0, label: "FBA large standard width" },
                Threshold { value: 33.0, label: "FBA large bulky width" },
            ],
            height: &[
                Threshold { value: 0.75, label: "FBA small standard height" },
                Threshold { value: 8.0, label: "FBA large standard height" },
                Threshold { value: 33.0, label: "FBA large bulky height" },
            ],
            girth: &[Threshold { value: 130.0, label: "FBA large bulky girth" }],
            weight: &[
                Threshold { value: 1.0, label: "FBA small standard weight" },
                Threshold { value: 20.0, label: "FBA large standard weight" },
                Threshold { value: 50.0, label: "FBA large bulky weight" },
            ],
            volume: &[],
            billing: &[
                BillingThreshold {
                    channel: "US-FBA",
                    measure: BilledWeight::Chargeable,
                    value: 1.0,
                    label: "FBA small standard chargeable weight",
                },
                BillingThreshold {
                    channel: "US-FBA",
                    measure: BilledWeight::Chargeable,
                    value: 20.0,
                    label: "FBA large standard chargeable weight",
                },
                BillingThreshold {
                    channel: "US-FBA",
                    measure: BilledWeight::Chargeable,
                    value: 50.0,
                    label: "FBA large bulky chargeable weight",
                },
            ],
        },
        candidates: CandidateSource::Fixed(&US_FBA_CHANNELS),
    }
}

static CA_FBA: SurchargeChannel = SurchargeChannel {
    name: "CA-FBA",
    units: UnitSystem::Imperial,
    currency: "USD",
    base_tier: "standard (no surcharge)",
    surcharged_tier: "surcharge triggered",
    surcharges: &[
        Surcharge { code: "A", when: Above(Length, 60.0), fee: 17.0 },
        Surcharge { code: "B", when: Above(Length, 106.0), fee: 150.0 },
        Surcharge { code: "E", when: Above(Width, 30.0), fee: 17.0 },
        Surcharge { code: "H", when: Above(Girth, 130.0), fee: 60.0 },
        Surcharge { code: "I", when: Above(Girth, 165.0), fee: 150.0 },
        Surcharge { code: "K", when: Above(Weight, 70.0), fee: 17.0 },
        Surcharge { code: "L", when: Above(Weight, 150.0), fee: 150.0 },
    ],
};

static CA_FBA_CHANNELS: [ChannelRule; 1] = [ChannelRule::Surcharge(&CA_FBA)];

pub(super) fn ca_fba() -> ProgramProfile {
    ProgramProfile {
        id: ProgramId::CaFba,
        units: UnitSystem::Imperial,
        limits: HardLimitSpec {
            length: Bound::at_least(0.1),
            width: Bound::at_least(0.1),
            height: Bound::at_least(0.1),
            girth: Bound::NONE,
            weight: Bound::at_least(0.01),
        },
        thresholds: ThresholdTable {
            length: &[
                Threshold { value: 60.0, label: "surcharge A" },
                Threshold { value: 106.0, label: "surcharge B" },
            ],
            width: &[Threshold { value: 30.0, label: "surcharge E" }],
            height: &[],
            girth: &[
                Threshold { value: 130.0, label: "surcharge H" },
                Threshold { value: 165.0, label: "surcharge I" },
            ],
            weight: &[
                Threshold { value: 70.0, label: "surcharge K" },
                Threshold { value: 150.0, label: "surcharge L" },
            ],
            volume: &[],
            billing: &[],
        },
        candidates: CandidateSource::Fixed(&CA_FBA_CHANNELS),
    }
}
