//! Document confidence scoring.

use crate::options::StrategyWeights;
use crate::record::ExtractionTrace;

/// Mean reliability over populated fields.
///
/// Unpopulated fields do not drag the score down: a record holding
/// only a table-sourced email scores that tier's weight, not a quarter
/// of it. A present company name contributes the flat
/// `company_presence` weight regardless of the tier that found it.
/// An empty trace scores 0.0.
#[must_use]
pub fn confidence(trace: &ExtractionTrace, weights: &StrategyWeights) -> f64 {
    let mut parts: Vec<f64> = Vec::with_capacity(4);
    if trace.company.is_some() {
        parts.push(weights.company_presence);
    }
    for field in [trace.person, trace.email, trace.phone] {
        if let Some(t) = field {
            parts.push(t.weight);
        }
    }
    if parts.is_empty() {
        return 0.0;
    }
    parts.iter().sum::<f64>() / parts.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldTrace, Strategy};

    #[test]
    fn empty_trace_scores_zero() {
        let trace = ExtractionTrace::default();
        assert_eq!(confidence(&trace, &StrategyWeights::default()), 0.0);
    }

    #[test]
    fn single_field_scores_its_own_weight() {
        let trace = ExtractionTrace {
            email: Some(FieldTrace::new(Strategy::Structural, 0.95)),
            ..ExtractionTrace::default()
        };
        assert!((confidence(&trace, &StrategyWeights::default()) - 0.95).abs() < 1e-9);
    }

    #[test]
    fn company_contributes_flat_presence_weight() {
        let weights = StrategyWeights::default();
        // Even a low-tier company hit counts as company_presence.
        let trace = ExtractionTrace {
            company: Some(FieldTrace::new(
                Strategy::FullTextFallback,
                weights.company_fulltext,
            )),
            ..ExtractionTrace::default()
        };
        assert!((confidence(&trace, &weights) - weights.company_presence).abs() < 1e-9);
    }

    #[test]
    fn mean_over_populated_fields_only() {
        let weights = StrategyWeights::default();
        let trace = ExtractionTrace {
            email: Some(FieldTrace::new(Strategy::Structural, 0.95)),
            phone: Some(FieldTrace::new(Strategy::LabeledText, 0.85)),
            ..ExtractionTrace::default()
        };
        assert!((confidence(&trace, &weights) - 0.90).abs() < 1e-9);
    }
}
