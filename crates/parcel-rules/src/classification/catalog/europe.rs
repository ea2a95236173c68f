//! German and UK catalogs (centimetres, kilograms).

use super::super::advisory::{BilledWeight, BillingThreshold, Threshold, ThresholdTable};
use super::super::domain::{ProgramId, UnitSystem};
use super::super::limits::{Bound, HardLimitSpec};
use super::super::rules::Metric::*;
use super::super::rules::Outcome::*;
use super::super::rules::Rule::*;
use super::super::rules::{
    ChannelRule, DestinationFactors, Dimensioning, Rule, Tier, TieredChannel, WeightBasis,
};
use super::{CandidateBand, CandidateSource, ProgramProfile};

const STANDARD: &str = "standard";
const OVERSIZE_OR_OVERWEIGHT: &str = "oversize or overweight";
const EXCEEDS_LIMITS: &str = "exceeds limits";

const METRIC_MINIMUMS: HardLimitSpec = HardLimitSpec {
    length: Bound::at_least(0.1),
    width: Bound::at_least(0.1),
    height: Bound::at_least(0.1),
    girth: Bound::NONE,
    weight: Bound::at_least(0.01),
};

const DPD_LADDER: &[Tier] = &[
    Tier {
        when: All(&[
            Between(Length, 15.0, 120.0),
            Between(Width, 11.0, 60.0),
            Between(Height, 1.0, 60.0),
            AtMost(Girth, 300.0),
            Between(Weight, 0.0, 31.5),
        ]),
        outcome: Eligible(STANDARD),
    },
    Tier {
        when: Any(&[
            Between(Length, 120.0, 175.0),
            Above(Width, 60.0),
            Above(VolumeCm3, 150_000.0),
        ]),
        outcome: Eligible(OVERSIZE_OR_OVERWEIGHT),
    },
    Tier {
        when: Any(&[
            Above(Length, 175.0),
            Above(Girth, 300.0),
            Above(Weight, 31.5),
        ]),
        outcome: Ineligible(EXCEEDS_LIMITS),
    },
];

// The second tier's `H > 3` catches nearly everything the first rejects.
const GLS_LADDER: &[Tier] = &[
    Tier {
        when: All(&[
            Between(Length, 3.0, 120.0),
            Between(Width, 3.0, 80.0),
            Between(Height, 3.0, 60.0),
            AtMost(Girth, 300.0),
            Between(Weight, 0.0, 40.0),
        ]),
        outcome: Eligible(STANDARD),
    },
    Tier {
        when: Any(&[
            Between(Length, 120.0, 200.0),
            Above(Height, 3.0),
            Above(VolumeCm3, 150_000.0),
        ]),
        outcome: Eligible(OVERSIZE_OR_OVERWEIGHT),
    },
    Tier {
        when: Any(&[
            Above(Length, 200.0),
            Above(Girth, 300.0),
            Above(Weight, 40.0),
            Above(Width, 80.0),
            Above(Height, 60.0),
        ]),
        outcome: Ineligible(EXCEEDS_LIMITS),
    },
];

const GEL_LADDER: &[Tier] = &[
    Tier {
        when: All(&[
            AtMost(Length, 320.0),
            AtMost(Width, 120.0),
            AtMost(Height, 220.0),
            AtMost(DimWeight, 1000.0),
            Between(Weight, 0.0, 60.0),
        ]),
        outcome: Eligible(STANDARD),
    },
    Tier {
        when: Any(&[
            Above(Length, 320.0),
            Above(Height, 220.0),
            Above(Width, 120.0),
            Above(Weight, 60.0),
            Above(DimWeight, 1000.0),
            Above(FaceAreaM2, 2.0),
        ]),
        outcome: Ineligible(EXCEEDS_LIMITS),
    },
];

static DHL_DE_PARCEL: TieredChannel = TieredChannel {
    name: "DHL-DE-Parcel",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: &[
        Tier {
            when: All(&[
                Between(Length, 15.0, 120.0),
                Between(Width, 11.0, 60.0),
                Between(Height, 1.0, 60.0),
                AtMost(Girth, 360.0),
                Between(Weight, 0.0, 31.5),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[
                Between(Length, 120.0, 200.0),
                Above(Width, 60.0),
                Above(Height, 60.0),
            ]),
            outcome: Eligible(OVERSIZE_OR_OVERWEIGHT),
        },
        Tier {
            when: Any(&[
                Above(Length, 200.0),
                Above(Girth, 360.0),
                Above(Weight, 31.5),
            ]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static DHL_INTL_PARCEL: TieredChannel = TieredChannel {
    name: "DHL-Intl-Parcel",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: &[
        Tier {
            when: All(&[
                Between(Length, 15.0, 120.0),
                Between(Width, 11.0, 60.0),
                Between(Height, 1.0, 60.0),
                AtMost(Girth, 300.0),
                Between(Weight, 0.0, 31.5),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[
                Between(Length, 120.0, 150.0),
                Above(Width, 60.0),
                Above(Height, 60.0),
            ]),
            outcome: Eligible(OVERSIZE_OR_OVERWEIGHT),
        },
        Tier {
            when: Any(&[
                Above(Length, 150.0),
                Above(Girth, 300.0),
                Above(Weight, 31.5),
            ]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static DPD_DE_PARCEL: TieredChannel = TieredChannel {
    name: "DPD-DE-Parcel",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: DPD_LADDER,
};

static DPD_INTL_PARCEL: TieredChannel = TieredChannel {
    name: "DPD-Intl-Parcel",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: DPD_LADDER,
};

static GLS_DE_PARCEL: TieredChannel = TieredChannel {
    name: "GLS-DE-Parcel",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: GLS_LADDER,
};

static GLS_INTL_PARCEL: TieredChannel = TieredChannel {
    name: "GLS-Intl-Parcel",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: GLS_LADDER,
};

static GEL_DE_BULKY: TieredChannel = TieredChannel {
    name: "GEL-DE-Bulky",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::PerCubicMetre(150.0),
    tiers: GEL_LADDER,
};

static GEL_INTL_BULKY: TieredChannel = TieredChannel {
    name: "GEL-Intl-Bulky",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::PerCubicMetreByDestination(DestinationFactors {
        other: 167.0,
        austria: 200.0,
        croatia: 300.0,
    }),
    tiers: GEL_LADDER,
};

static DE_FBM_DHL_DPD: [ChannelRule; 4] = [
    ChannelRule::Tiered(&DHL_DE_PARCEL),
    ChannelRule::Tiered(&DHL_INTL_PARCEL),
    ChannelRule::Tiered(&DPD_DE_PARCEL),
    ChannelRule::Tiered(&DPD_INTL_PARCEL),
];

static DE_FBM_GLS: [ChannelRule; 2] = [
    ChannelRule::Tiered(&GLS_DE_PARCEL),
    ChannelRule::Tiered(&GLS_INTL_PARCEL),
];

static DE_FBM_GEL: [ChannelRule; 2] = [
    ChannelRule::Tiered(&GEL_DE_BULKY),
    ChannelRule::Tiered(&GEL_INTL_BULKY),
];

static DE_FBM_BANDS: [CandidateBand; 5] = [
    CandidateBand {
        name: "no-weight",
        when: AtMost(Weight, 0.0),
        channels: &[],
        note: Some("enter a weight greater than 0 kg"),
    },
    CandidateBand {
        name: "dhl-dpd",
        when: AtMost(Weight, 31.5),
        channels: &DE_FBM_DHL_DPD,
        note: None,
    },
    CandidateBand {
        name: "gls",
        when: AtMost(Weight, 40.0),
        channels: &DE_FBM_GLS,
        note: None,
    },
    CandidateBand {
        name: "gel",
        when: AtMost(Weight, 60.0),
        channels: &DE_FBM_GEL,
        note: None,
    },
    CandidateBand {
        name: "freight",
        when: Always,
        channels: &[],
        note: Some("actual weight over 60 kg, use DHL Freight (pallet service)"),
    },
];

pub(super) fn de_fbm() -> ProgramProfile {
    ProgramProfile {
        id: ProgramId::DeFbm,
        units: UnitSystem::Metric,
        limits: HardLimitSpec {
            length: Bound::between(0.1, 320.0),
            width: Bound::between(0.1, 120.0),
            height: Bound::between(0.1, 220.0),
            ..METRIC_MINIMUMS
        },
        thresholds: ThresholdTable {
            length: &[
                Threshold { value: 120.0, label: "parcel standard length" },
                Threshold { value: 150.0, label: "DHL international maximum length" },
                Threshold { value: 175.0, label: "DPD maximum length" },
                Threshold { value: 200.0, label: "DHL/GLS maximum length" },
                Threshold { value: 320.0, label: "GEL maximum length" },
            ],
            width: &[
                Threshold { value: 60.0, label: "DHL/DPD standard width" },
                Threshold { value: 80.0, label: "GLS maximum width" },
                Threshold { value: 120.0, label: "GEL maximum width" },
            ],
            height: &[
                Threshold { value: 60.0, label: "parcel standard height" },
                Threshold { value: 220.0, label: "GEL maximum height" },
            ],
            girth: &[
                Threshold { value: 300.0, label: "DPD/GLS/DHL international girth" },
                Threshold { value: 360.0, label: "DHL domestic girth" },
            ],
            weight: &[
                Threshold { value: 31.5, label: "DHL/DPD band weight" },
                Threshold { value: 40.0, label: "GLS band weight" },
                Threshold { value: 60.0, label: "GEL band weight" },
            ],
            volume: &[Threshold { value: 150_000.0, label: "DPD/GLS oversize volume" }],
            billing: &[BillingThreshold {
                channel: "GEL-DE-Bulky",
                measure: BilledWeight::Volumetric,
                value: 1000.0,
                label: "GEL volumetric weight",
            }],
        },
        candidates: CandidateSource::Banded {
            bands: &DE_FBM_BANDS,
            unmatched: "no DE-FBM band covers this weight",
        },
    }
}

static ROYAL_MAIL_PARCEL: TieredChannel = TieredChannel {
    name: "RoyalMail-Parcel",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: &[
        Tier {
            when: All(&[
                Between(Length, 0.0, 61.0),
                Between(Width, 0.0, 46.0),
                Between(Height, 0.0, 46.0),
                Between(Weight, 0.0, 20.0),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[
                Above(Length, 61.0),
                Above(Width, 46.0),
                Above(Height, 46.0),
                Above(VolumeCm3, 31_500.0),
                Above(Weight, 20.0),
            ]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static DPD_UK: TieredChannel = TieredChannel {
    name: "DPD-UK",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: &[
        Tier {
            when: All(&[
                Between(Length, 0.0, 100.0),
                Between(Width, 0.0, 60.0),
                Between(Height, 0.0, 70.0),
                Between(Weight, 0.0, 30.0),
                AtMost(Girth, 230.0),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[
                Above(Length, 100.0),
                Above(Width, 60.0),
                Above(Height, 70.0),
                Above(Girth, 230.0),
                Above(Weight, 30.0),
            ]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static EVRI_STANDARD: TieredChannel = TieredChannel {
    name: "EVRI-Standard",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: &[
        Tier {
            when: All(&[
                Between(Length, 0.0, 120.0),
                Between(Weight, 0.0, 15.0),
                AtMost(Girth, 225.0),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[Above(Length, 120.0), Above(Girth, 225.0), Above(Weight, 15.0)]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static EVRI_BULKY: TieredChannel = TieredChannel {
    name: "EVRI-Bulky",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: &[
        Tier {
            when: All(&[
                Between(Length, 0.0, 180.0),
                Between(Weight, 0.0, 30.0),
                AtMost(Girth, 420.0),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[Above(Length, 180.0), Above(Girth, 420.0), Above(Weight, 30.0)]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static UK_GC_PARCEL: TieredChannel = TieredChannel {
    name: "UK GC PARCEL",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: &[
        Tier {
            when: All(&[
                Between(Length, 0.0, 60.0),
                Between(Weight, 0.0, 15.0),
                Between(Width, 0.0, 46.0),
                Between(Height, 0.0, 46.0),
            ]),
            outcome: Eligible(STANDARD),
        },
        Tier {
            when: Any(&[
                Above(Length, 60.0),
                Above(Width, 46.0),
                Above(Height, 46.0),
                Above(Weight, 15.0),
                Above(VolumeCm3, 31_000.0),
            ]),
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

const YODEL_LARGE: Rule = All(&[
    AtMost(Length, 90.0),
    AtMost(Weight, 17.0),
    AtMost(VolumeCm3, 113_000.0),
    AtMost(WidthPlusHeight, 150.0),
]);

const YODEL_BULKY: Rule = All(&[
    AtMost(Length, 120.0),
    AtMost(Weight, 30.0),
    AtMost(VolumeCm3, 230_000.0),
    AtMost(WidthPlusHeight, 170.0),
]);

// The 24H tiers repeat earlier 48H conditions, so first-match never reaches them.
static YODEL_UK: TieredChannel = TieredChannel {
    name: "YODEL-UK",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::ActualWithVolume,
    tiers: &[
        Tier {
            when: All(&[
                AtMost(Length, 90.0),
                AtMost(Weight, 3.0),
                AtMost(VolumeCm3, 31_000.0),
            ]),
            outcome: Eligible("48H small parcel"),
        },
        Tier {
            when: YODEL_LARGE,
            outcome: Eligible("48H large parcel"),
        },
        Tier {
            when: YODEL_BULKY,
            outcome: Eligible("48H bulky"),
        },
        Tier {
            when: All(&[
                AtMost(Length, 170.0),
                AtMost(Weight, 30.0),
                AtMost(VolumeCm3, 280_000.0),
                AtMost(WidthPlusHeight, 250.0),
            ]),
            outcome: Eligible("48H extra bulky"),
        },
        Tier {
            when: YODEL_LARGE,
            outcome: Eligible("24H large parcel"),
        },
        Tier {
            when: YODEL_BULKY,
            outcome: Eligible("24H bulky"),
        },
        Tier {
            when: Always,
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static XDP_UK: TieredChannel = TieredChannel {
    name: "XDP-UK",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::RoundUp,
    basis: WeightBasis::Divisor(5000.0),
    tiers: &[
        Tier {
            when: All(&[AtMost(Length, 320.0), AtMost(Weight, 50.0)]),
            outcome: Eligible("Economy Parcels"),
        },
        Tier {
            when: All(&[AtMost(Length, 400.0), AtMost(Weight, 150.0)]),
            outcome: Eligible("Two man"),
        },
        Tier {
            when: Always,
            outcome: Ineligible(EXCEEDS_LIMITS),
        },
    ],
};

static UK_FBM_CHANNELS: [ChannelRule; 7] = [
    ChannelRule::Tiered(&ROYAL_MAIL_PARCEL),
    ChannelRule::Tiered(&DPD_UK),
    ChannelRule::Tiered(&EVRI_STANDARD),
    ChannelRule::Tiered(&EVRI_BULKY),
    ChannelRule::Tiered(&UK_GC_PARCEL),
    ChannelRule::Tiered(&YODEL_UK),
    ChannelRule::Tiered(&XDP_UK),
];

pub(super) fn uk_fbm() -> ProgramProfile {
    ProgramProfile {
        id: ProgramId::UkFbm,
        units: UnitSystem::Metric,
        limits: HardLimitSpec {
            length: Bound::between(0.1, 400.0),
            weight: Bound::between(0.01, 150.0),
            ..METRIC_MINIMUMS
        },
        thresholds: ThresholdTable {
            length: &[
                Threshold { value: 60.0, label: "UK GC PARCEL length" },
                Threshold { value: 61.0, label: "Royal Mail length" },
                Threshold { value: 90.0, label: "Yodel parcel length" },
                Threshold { value: 100.0, label: "DPD length" },
                Threshold { value: 120.0, label: "EVRI standard/Yodel bulky length" },
                Threshold { value: 170.0, label: "Yodel extra bulky length" },
                Threshold { value: 180.0, label: "EVRI bulky length" },
                Threshold { value: 320.0, label: "XDP economy length" },
                Threshold { value: 400.0, label: "XDP two-man length" },
            ],
            width: &[
                Threshold { value: 46.0, label: "Royal Mail/UK GC width" },
                Threshold { value: 60.0, label: "DPD width" },
                Threshold { value: 70.0, label: "DPD height limit" },
            ],
            height: &[
                Threshold { value: 46.0, label: "Royal Mail/UK GC height" },
                Threshold { value: 70.0, label: "DPD height" },
            ],
            girth: &[
                Threshold { value: 225.0, label: "EVRI standard girth" },
                Threshold { value: 230.0, label: "DPD girth" },
                Threshold { value: 250.0, label: "Yodel width plus height" },
                Threshold { value: 420.0, label: "EVRI bulky girth" },
            ],
            weight: &[
                Threshold { value: 3.0, label: "Yodel small parcel weight" },
                Threshold { value: 15.0, label: "EVRI standard/UK GC weight" },
                Threshold { value: 20.0, label: "Royal Mail weight" },
                Threshold { value: 30.0, label: "DPD/EVRI bulky weight" },
                Threshold { value: 50.0, label: "XDP economy weight" },
                Threshold { value: 150.0, label: "XDP two-man weight" },
            ],
            volume: &[
                Threshold { value: 31_000.0, label: "UK GC/Yodel small volume" },
                Threshold { value: 31_500.0, label: "Royal Mail volume" },
                Threshold { value: 113_000.0, label: "Yodel large parcel volume" },
                Threshold { value: 230_000.0, label: "Yodel bulky volume" },
                Threshold { value: 280_000.0, label: "Yodel extra bulky volume" },
            ],
            billing: &[],
        },
        candidates: CandidateSource::Fixed(&UK_FBM_CHANNELS),
    }
}

const FBA_EUROPE_LADDER: &[Tier] = &[
    Tier {
        when: All(&[
            AtMost(Length, 61.0),
            AtMost(Width, 46.0),
            AtMost(Height, 46.0),
            AtMost(Weight, 1.76),
            AtMost(Chargeable, 25.82),
            AtMost(Girth, 360.0),
        ]),
        outcome: Eligible("FBA small oversize"),
    },
    Tier {
        when: All(&[
            AtMost(Length, 120.0),
            AtMost(Width, 60.0),
            AtMost(Height, 60.0),
            AtMost(Weight, 23.0),
            AtMost(Chargeable, 86.4),
            AtMost(Girth, 360.0),
        ]),
        outcome: Eligible("FBA large standard"),
    },
    Tier {
        when: All(&[
            AtMost(Length, 175.0),
            AtMost(Width, 60.0),
            AtMost(Height, 60.0),
            AtMost(Weight, 31.5),
            AtMost(Chargeable, 126.0),
            AtMost(Girth, 360.0),
        ]),
        outcome: Eligible("FBA large bulky"),
    },
    Tier {
        when: Always,
        outcome: Eligible("FBA extra-large"),
    },
];

const FBA_EUROPE_THRESHOLDS: ThresholdTable = ThresholdTable {
    length: &[
        Threshold { value: 61.0, label: "FBA small oversize length" },
        Threshold { value: 120.0, label: "FBA large standard length" },
        Threshold { value: 175.0, label: "FBA large bulky length" },
    ],
    width: &[
        Threshold { value: 46.0, label: "FBA small oversize width" },
        Threshold { value: 60.0, label: "FBA large standard width" },
    ],
    height: &[
        Threshold { value: 46.0, label: "FBA small oversize height" },
        Threshold { value: 60.0, label: "FBA large standard height" },
    ],
    girth: &[Threshold { value: 360.0, label: "FBA girth" }],
    weight: &[
        Threshold { value: 1.76, label: "FBA small oversize weight" },
        Threshold { value: 23.0, label: "FBA large standard weight" },
        Threshold { value: 31.5, label: "FBA large bulky weight" },
    ],
    volume: &[],
    billing: &[],
};

const fn fba_europe_billing(channel: &'static str) -> [BillingThreshold; 3] {
    [
        BillingThreshold {
            channel,
            measure: BilledWeight::Chargeable,
            value: 25.82,
            label: "FBA small oversize chargeable weight",
        },
        BillingThreshold {
            channel,
            measure: BilledWeight::Chargeable,
            value: 86.4,
            label: "FBA large standard chargeable weight",
        },
        BillingThreshold {
            channel,
            measure: BilledWeight::Chargeable,
            value: 126.0,
            label: "FBA large bulky chargeable weight",
        },
    ]
}

static DE_FBA_BILLING: [BillingThreshold; 3] = fba_europe_billing("DE-FBA");
static UK_FBA_BILLING: [BillingThreshold; 3] = fba_europe_billing("UK-FBA");

static DE_FBA: TieredChannel = TieredChannel {
    name: "DE-FBA",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::Divisor(5000.0),
    tiers: FBA_EUROPE_LADDER,
};

static UK_FBA: TieredChannel = TieredChannel {
    name: "UK-FBA",
    units: UnitSystem::Metric,
    dimensioning: Dimensioning::Exact,
    basis: WeightBasis::Divisor(5000.0),
    tiers: FBA_EUROPE_LADDER,
};

static DE_FBA_CHANNELS: [ChannelRule; 1] = [ChannelRule::Tiered(&DE_FBA)];
static UK_FBA_CHANNELS: [ChannelRule; 1] = [ChannelRule::Tiered(&UK_FBA)];

pub(super) fn de_fba() -> ProgramProfile {
    ProgramProfile {
        id: ProgramId::DeFba,
        units: UnitSystem::Metric,
        limits: METRIC_MINIMUMS,
        thresholds: ThresholdTable {
            billing: &DE_FBA_BILLING,
            ..FBA_EUROPE_THRESHOLDS
        },
        candidates: CandidateSource::Fixed(&DE_FBA_CHANNELS),
    }
}

pub(super) fn uk_fba() -> ProgramProfile {
    ProgramProfile {
        id: ProgramId::UkFba,
        units: UnitSystem::Metric,
        limits: METRIC_MINIMUMS,
        thresholds: ThresholdTable {
            billing: &UK_FBA_BILLING,
            ..FBA_EUROPE_THRESHOLDS
        },
        candidates: CandidateSource::Fixed(&UK_FBA_CHANNELS),
    }
}
