use super::{CategoryRisk, RiskCategory};
use crate::assessment::factors::{CategoryRiskFactor, FactorKind, ImpactLabel};

pub(crate) const MIN_FACTORS: usize = 3;
pub(crate) const MAX_FACTORS: usize = 5;

/// Static description of a fallback factor.
pub(crate) struct Filler {
    pub name: &'static str,
    pub kind: FactorKind,
    pub impact: ImpactLabel,
    pub suggestion: &'static str,
}

impl Filler {
    fn to_factor(&self) -> CategoryRiskFactor {
        CategoryRiskFactor::new(self.name, self.kind, self.impact, self.suggestion)
    }
}

/// Running accumulator shared by the six category rules.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    risk: f64,
    factors: Vec<CategoryRiskFactor>,
}

impl Tally {
    /// Adjust the score without emitting a factor.
    pub fn adjust(&mut self, delta: f64) {
        self.risk += delta;
    }

    /// Adjust the score and record the factor responsible.
    pub fn record(
        &mut self,
        delta: f64,
        name: &str,
        kind: FactorKind,
        impact: ImpactLabel,
        suggestion: impl Into<String>,
    ) {
        self.risk += delta;
        self.factors
            .push(CategoryRiskFactor::new(name, kind, impact, suggestion));
    }

    /// Record a zero-delta factor.
    pub fn note(&mut self, name: &str, kind: FactorKind, impact: ImpactLabel, suggestion: &str) {
        self.record(0.0, name, kind, impact, suggestion);
    }

    /// Pad, clamp, round, and cap the factor list.
    ///
    /// `fillers[0]` is the category's primary filler; later entries only appear for sparse profiles.
    pub fn finish(self, category: RiskCategory, fillers: &[Filler]) -> CategoryRisk {
        let Tally { risk, mut factors } = self;

        for filler in fillers {
            if factors.len() >= MIN_FACTORS {
                break;
            }
            factors.push(filler.to_factor());
        }
        factors.truncate(MAX_FACTORS);

        let (low, high) = category.bounds();
        let score = risk.clamp(f64::from(low), f64::from(high)).round() as u8;

        CategoryRisk {
            category,
            score,
            factors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILLERS: [Filler; 3] = [
        Filler {
            name: "One",
            kind: FactorKind::Sleep,
            impact: ImpactLabel::MEDIUM_NEGATIVE,
            suggestion: "first",
        },
        Filler {
            name: "Two",
            kind: FactorKind::Diet,
            impact: ImpactLabel::LOW_NEGATIVE,
            suggestion: "second",
        },
        Filler {
            name: "Three",
            kind: FactorKind::Checkup,
            impact: ImpactLabel::LOW_NEGATIVE,
            suggestion: "third",
        },
    ];

    #[test]
    fn clamps_into_category_bounds() {
        let mut tally = Tally::default();
        tally.adjust(400.0);
        let risk = tally.finish(RiskCategory::Immune, &FILLERS);
        assert_eq!(risk.score, 75);

        let mut tally = Tally::default();
        tally.adjust(-40.0);
        let risk = tally.finish(RiskCategory::Cardiovascular, &FILLERS);
        assert_eq!(risk.score, 10);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let mut tally = Tally::default();
        tally.adjust(32.5);
        assert_eq!(tally.finish(RiskCategory::Metabolic, &FILLERS).score, 33);
    }

    #[test]
    fn primary_filler_only_when_two_factors_exist() {
        let mut tally = Tally::default();
        tally.note("A", FactorKind::Age, ImpactLabel::LOW_NEGATIVE, "a");
        tally.note("B", FactorKind::Age, ImpactLabel::LOW_NEGATIVE, "b");
        let risk = tally.finish(RiskCategory::Sleep, &FILLERS);
        let names: Vec<_> = risk.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "One"]);
    }

    #[test]
    fn empty_tally_is_padded_to_three() {
        let risk = Tally::default().finish(RiskCategory::Chronic, &FILLERS);
        assert_eq!(risk.factors.len(), MIN_FACTORS);
        assert_eq!(risk.factors[0].name, "One");
    }

    #[test]
    fn keeps_first_five_in_evaluation_order() {
        let mut tally = Tally::default();
        for name in ["1", "2", "3", "4", "5", "6", "7"] {
            tally.note(name, FactorKind::Stress, ImpactLabel::HIGH_NEGATIVE, name);
        }
        let risk = tally.finish(RiskCategory::Mental, &FILLERS);
        let names: Vec<_> = risk.factors.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["1", "2", "3", "4", "5"]);
    }
}
