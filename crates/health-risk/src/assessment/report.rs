//! Flat exports of an assessment: the downloadable text report, the share blurb, and a CSV table.

use std::io::Write;

use serde::Serialize;

use super::engine::RiskAssessment;

/// Suggested file name for the downloadable text report.
pub const REPORT_FILE_NAME: &str = "health-prediction-report.txt";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to encode report row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub fn render_text(assessment: &RiskAssessment) -> String {
    let categories = assessment
        .categories
        .iter()
        .map(|risk| {
            let factors = risk
                .factors
                .iter()
                .map(|factor| format!("- {}: {}", factor.name, factor.suggestion))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "{} Risk: {}%\n{}",
                risk.category.label(),
                risk.score,
                factors
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Health Prediction Report\n\nOverall Risk: {}%\n\n{}",
        assessment.overall_score, categories
    )
}

pub fn share_text(assessment: &RiskAssessment) -> String {
    format!(
        "My overall health risk is {}%. Check out my detailed health prediction results.",
        assessment.overall_score
    )
}

#[derive(Serialize)]
struct FactorRow<'a> {
    category: &'static str,
    score: u8,
    level: &'static str,
    factor: &'a str,
    impact: &'static str,
    suggestion: &'a str,
}

/// Write one CSV row per factor, headers included.
pub fn write_csv<W: Write>(assessment: &RiskAssessment, writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for risk in &assessment.categories {
        let level = risk.level().label();
        for factor in &risk.factors {
            csv_writer.serialize(FactorRow {
                category: risk.category.label(),
                score: risk.score,
                level,
                factor: &factor.name,
                impact: factor.impact.label(),
                suggestion: &factor.suggestion,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::engine::{CategoryRisk, RiskCategory};
    use crate::assessment::factors::{CategoryRiskFactor, FactorKind, ImpactLabel};

    fn sample() -> RiskAssessment {
        RiskAssessment {
            categories: vec![
                CategoryRisk {
                    category: RiskCategory::Cardiovascular,
                    score: 40,
                    factors: vec![
                        CategoryRiskFactor::new(
                            "Exercise",
                            FactorKind::Exercise,
                            ImpactLabel::HIGH_POSITIVE,
                            "Continue your regular exercise routine",
                        ),
                        CategoryRiskFactor::new(
                            "Diet",
                            FactorKind::Diet,
                            ImpactLabel::MEDIUM_NEGATIVE,
                            "Reduce sodium, please",
                        ),
                    ],
                },
                CategoryRisk {
                    category: RiskCategory::Sleep,
                    score: 20,
                    factors: vec![CategoryRiskFactor::new(
                        "Sleep Duration",
                        FactorKind::Sleep,
                        ImpactLabel::HIGH_POSITIVE,
                        "Your sleep duration is optimal",
                    )],
                },
            ],
            overall_score: 30,
        }
    }

    #[test]
    fn text_report_layout() {
        let expected = "Health Prediction Report\n\n\
                        Overall Risk: 30%\n\n\
                        Cardiovascular Risk: 40%\n\
                        - Exercise: Continue your regular exercise routine\n\
                        - Diet: Reduce sodium, please\n\n\
                        Sleep Risk: 20%\n\
                        - Sleep Duration: Your sleep duration is optimal";
        assert_eq!(render_text(&sample()), expected);
    }

    #[test]
    fn share_text_mentions_overall_score() {
        assert_eq!(
            share_text(&sample()),
            "My overall health risk is 30%. Check out my detailed health prediction results."
        );
    }

    #[test]
    fn csv_has_header_and_one_row_per_factor() {
        let mut buffer = Vec::new();
        write_csv(&sample(), &mut buffer).expect("csv written");
        let text = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "category,score,level,factor,impact,suggestion");
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[2],
            "Cardiovascular,40,Moderate Risk,Diet,Medium negative impact,\"Reduce sodium, please\""
        );
    }
}
