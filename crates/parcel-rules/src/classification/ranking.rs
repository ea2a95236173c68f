use std::cmp::Ordering;

use super::domain::{round2, ClassificationResult};

/// Cheapest eligible channel by displayed chargeable weight, then dimensional weight.
///
/// Comparison uses the two-decimal values operators see, and the sort is
/// stable, so ties resolve to the earlier candidate.
pub fn recommend(results: &[ClassificationResult]) -> Option<String> {
    let mut eligible: Vec<&ClassificationResult> =
        results.iter().filter(|result| result.eligible).collect();

    eligible.sort_by(|a, b| compare(a, b));
    eligible.first().map(|result| result.channel.clone())
}

fn compare(a: &ClassificationResult, b: &ClassificationResult) -> Ordering {
    round2(a.chargeable_weight)
        .total_cmp(&round2(b.chargeable_weight))
        .then_with(|| round2(a.dimensional_weight).total_cmp(&round2(b.dimensional_weight)))
}
