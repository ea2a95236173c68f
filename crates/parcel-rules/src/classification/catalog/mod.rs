//! Static per-program configuration: channels, bands, limits, thresholds.

mod europe;
mod japan;
mod north_america;

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use super::advisory::ThresholdTable;
use super::domain::{Measurement, ProgramId, UnitSystem};
use super::limits::HardLimitSpec;
use super::rules::{ChannelRule, Metrics, Rule};

/// Weight/size band selecting a channel subset within a program.
#[derive(Debug)]
pub struct CandidateBand {
    pub name: &'static str,
    pub when: Rule,
    pub channels: &'static [ChannelRule],
    /// Shown when the band matches; bands without channels explain why here.
    pub note: Option<&'static str>,
}

/// Where a program's candidate channels come from.
#[derive(Debug, Clone, Copy)]
pub enum CandidateSource {
    /// Whole catalog, always.
    Fixed(&'static [ChannelRule]),
    /// First matching band; `unmatched` explains an empty selection.
    Banded {
        bands: &'static [CandidateBand],
        unmatched: &'static str,
    },
}

/// Channels chosen for one measurement.
#[derive(Debug, Clone, Copy)]
pub struct CandidateSet {
    pub band: Option<&'static str>,
    pub channels: &'static [ChannelRule],
    pub note: Option<&'static str>,
}

impl CandidateSet {
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

/// Full configuration bundle of a logistics program.
#[derive(Debug, Clone)]
pub struct ProgramProfile {
    pub id: ProgramId,
    pub units: UnitSystem,
    pub limits: HardLimitSpec,
    pub thresholds: ThresholdTable,
    pub candidates: CandidateSource,
}

impl ProgramProfile {
    pub fn select(&self, measurement: &Measurement) -> CandidateSet {
        match self.candidates {
            CandidateSource::Fixed(channels) => CandidateSet {
                band: None,
                channels,
                note: None,
            },
            CandidateSource::Banded { bands, unmatched } => {
                let metrics = Metrics::raw(measurement, self.units);
                match bands.iter().find(|band| band.when.holds(&metrics)) {
                    Some(band) => CandidateSet {
                        band: Some(band.name),
                        channels: band.channels,
                        note: band.note,
                    },
                    None => CandidateSet {
                        band: None,
                        channels: &[],
                        note: Some(unmatched),
                    },
                }
            }
        }
    }

    /// Every channel the program can ever evaluate, in first-seen order.
    pub fn channels(&self) -> Vec<ChannelRule> {
        let mut seen: Vec<ChannelRule> = Vec::new();
        let lists: Vec<&'static [ChannelRule]> = match self.candidates {
            CandidateSource::Fixed(channels) => vec![channels],
            CandidateSource::Banded { bands, .. } => {
                bands.iter().map(|band| band.channels).collect()
            }
        };
        for channel in lists.into_iter().flatten() {
            if !seen.iter().any(|known| known.name() == channel.name()) {
                seen.push(*channel);
            }
        }
        seen
    }
}

/// Immutable lookup from program to configuration bundle.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    profiles: BTreeMap<ProgramId, ProgramProfile>,
}

impl Catalog {
    pub fn from_profiles(profiles: impl IntoIterator<Item = ProgramProfile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.id, profile))
                .collect(),
        }
    }

    /// The built-in catalog, assembled on first use and shared afterwards.
    pub fn standard() -> Arc<Catalog> {
        static STANDARD: OnceLock<Arc<Catalog>> = OnceLock::new();
        STANDARD
            .get_or_init(|| {
                Arc::new(Catalog::from_profiles([
                    north_america::us_fbm(),
                    europe::de_fbm(),
                    europe::uk_fbm(),
                    japan::jp_fbm(),
                    north_america::ca_fba(),
                    north_america::us_fba(),
                    europe::de_fba(),
                    europe::uk_fba(),
                    japan::jp_fba(),
                ]))
            })
            .clone()
    }

    pub fn profile(&self, program: ProgramId) -> Option<&ProgramProfile> {
        self.profiles.get(&program)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &ProgramProfile> {
        self.profiles.values()
    }
}
