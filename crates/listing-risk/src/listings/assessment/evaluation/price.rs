use super::super::domain::{NormalizedListing, RatioSet};
use super::config::PriceThresholds;
use crate::listings::baseline::NeighborhoodAverages;

const SEVERE_DISCOUNT_SCORE: u32 = 4;
const ELEVATED_DISCOUNT_SCORE: u32 = 2;

pub(crate) fn price_ratios(
    listing: &NormalizedListing,
    averages: Option<&NeighborhoodAverages>,
) -> RatioSet {
    let Some(averages) = averages else {
        return RatioSet::default();
    };

    RatioSet {
        deposit_ratio: listing
            .deposit_amount
            .map(|deposit| deposit / averages.average_deposit),
        rent_ratio: listing.rent_amount.map(|rent| rent / averages.average_rent),
    }
}

/// Scores deposit and rent independently against the same thresholds.
#[derive(Debug, Clone)]
pub(crate) struct PriceRiskEvaluator {
    thresholds: PriceThresholds,
}

impl PriceRiskEvaluator {
    pub(crate) fn new(thresholds: PriceThresholds) -> Self {
        Self { thresholds }
    }

    pub(crate) fn score(&self, ratios: &RatioSet) -> u32 {
        self.ratio_score(ratios.deposit_ratio) + self.ratio_score(ratios.rent_ratio)
    }

    fn ratio_score(&self, ratio: Option<f64>) -> u32 {
        match ratio {
            Some(ratio) if ratio <= self.thresholds.severe_ratio => SEVERE_DISCOUNT_SCORE,
            Some(ratio) if ratio <= self.thresholds.elevated_ratio => ELEVATED_DISCOUNT_SCORE,
            _ => 0,
        }
    }
}
