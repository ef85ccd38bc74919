use super::super::domain::FeeVerdict;
use super::config::InclusionCategory;

/// Score and verdict applied when the fee amount is missing or unverifiable.
const UNVERIFIED_FEE: (u32, FeeVerdict) = (3, FeeVerdict::Risk);

/// One row of the fee decision table. A fee below `below_won` is judged by
/// whether the description discloses at least `required_categories` services.
struct FeeTier {
    below_won: f64,
    required_categories: usize,
    disclosed: (u32, FeeVerdict),
    undisclosed: (u32, FeeVerdict),
}

const FEE_TIERS: [FeeTier; 4] = [
    FeeTier {
        below_won: 80_000.0,
        required_categories: 0,
        disclosed: (0, FeeVerdict::Normal),
        undisclosed: (0, FeeVerdict::Normal),
    },
    FeeTier {
        below_won: 110_000.0,
        required_categories: 2,
        disclosed: (0, FeeVerdict::Normal),
        undisclosed: (1, FeeVerdict::Caution),
    },
    FeeTier {
        below_won: 150_000.0,
        required_categories: 3,
        disclosed: (1, FeeVerdict::Caution),
        undisclosed: (2, FeeVerdict::Risk),
    },
    FeeTier {
        below_won: f64::INFINITY,
        required_categories: 4,
        disclosed: (2, FeeVerdict::Caution),
        undisclosed: (3, FeeVerdict::Risk),
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FeeAssessment {
    pub(crate) score: u32,
    pub(crate) verdict: FeeVerdict,
    pub(crate) included_categories: Vec<String>,
}

/// Judges whether a maintenance fee is backed by the services the listing claims to include.
#[derive(Debug, Clone)]
pub(crate) struct FeeRiskEvaluator {
    categories: Vec<InclusionCategory>,
}

impl FeeRiskEvaluator {
    pub(crate) fn new(categories: Vec<InclusionCategory>) -> Self {
        let mut unique: Vec<InclusionCategory> = Vec::with_capacity(categories.len());
        for category in categories {
            if !unique.iter().any(|existing| existing.label == category.label) {
                unique.push(category);
            }
        }
        Self { categories: unique }
    }

    pub(crate) fn included_categories(&self, description: Option<&str>) -> Vec<String> {
        let Some(text) = description else {
            return Vec::new();
        };

        self.categories
            .iter()
            .filter(|category| category.matches(text))
            .map(|category| category.label.clone())
            .collect()
    }

    pub(crate) fn evaluate(&self, amount: Option<f64>, description: Option<&str>) -> FeeAssessment {
        let included_categories = self.included_categories(description);
        let (score, verdict) = match amount {
            Some(won) => classify_fee(won, included_categories.len()),
            None => UNVERIFIED_FEE,
        };

        FeeAssessment {
            score,
            verdict,
            included_categories,
        }
    }
}

fn classify_fee(won: f64, disclosed_categories: usize) -> (u32, FeeVerdict) {
    FEE_TIERS
        .iter()
        .find(|tier| won < tier.below_won)
        .map(|tier| {
            if disclosed_categories >= tier.required_categories {
                tier.disclosed
            } else {
                tier.undisclosed
            }
        })
        .unwrap_or(UNVERIFIED_FEE)
}
