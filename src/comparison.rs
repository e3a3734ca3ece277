use serde::{Deserialize, Serialize};

use crate::i18n::{text, Locale, MessageKey};
use crate::metrics::{compute_metrics, DerivedMetrics};
use crate::recommendation::{recommend, Recommendation, Winner};
use crate::school::{SchoolInput, SchoolSlot};

/// One school's raw entry together with everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolReport {
    #[serde(flatten)]
    pub input: SchoolInput,
    #[serde(flatten)]
    pub metrics: DerivedMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub school1: SchoolReport,
    pub school2: SchoolReport,
    pub recommendation: Recommendation,
}

impl ComparisonResult {
    pub fn report(&self, slot: SchoolSlot) -> &SchoolReport {
        match slot {
            SchoolSlot::School1 => &self.school1,
            SchoolSlot::School2 => &self.school2,
        }
    }

    pub fn leader(&self, metric: DerivedMetric) -> Winner {
        metric_leader(metric, &self.school1.metrics, &self.school2.metrics)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DerivedMetric {
    NetAnnualCost,
    TotalProgramCost,
    #[serde(rename = "estimatedROI")]
    EstimatedRoi,
    WeightedScore,
}

impl DerivedMetric {
    pub const ALL: [DerivedMetric; 4] = [
        DerivedMetric::NetAnnualCost,
        DerivedMetric::TotalProgramCost,
        DerivedMetric::EstimatedRoi,
        DerivedMetric::WeightedScore,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::NetAnnualCost => "netAnnualCost",
            Self::TotalProgramCost => "totalProgramCost",
            Self::EstimatedRoi => "estimatedROI",
            Self::WeightedScore => "weightedScore",
        }
    }

    pub fn value(&self, metrics: &DerivedMetrics) -> f64 {
        match self {
            Self::NetAnnualCost => metrics.net_annual_cost,
            Self::TotalProgramCost => metrics.total_program_cost,
            Self::EstimatedRoi => metrics.estimated_roi,
            Self::WeightedScore => metrics.weighted_score,
        }
    }

    pub fn lower_is_better(&self) -> bool {
        matches!(self, Self::NetAnnualCost | Self::TotalProgramCost)
    }

    pub fn label_key(&self) -> MessageKey {
        match self {
            Self::NetAnnualCost => MessageKey::NetCost,
            Self::TotalProgramCost => MessageKey::TotalProgramCost,
            Self::EstimatedRoi => MessageKey::EstimatedRoi,
            Self::WeightedScore => MessageKey::WeightedScore,
        }
    }
}

/// Strict per-metric comparison used for highlighting; no dead zone.
pub fn metric_leader(metric: DerivedMetric, a: &DerivedMetrics, b: &DerivedMetrics) -> Winner {
    let (left, right) = (metric.value(a), metric.value(b));
    let (better, worse) = if metric.lower_is_better() {
        (left < right, left > right)
    } else {
        (left > right, left < right)
    };
    if better {
        Winner::School1
    } else if worse {
        Winner::School2
    } else {
        Winner::Tie
    }
}

/// The school's name, or its positional label when the name is empty. Uses
/// the same raw-name test as the readiness gate.
pub fn display_label(input: &SchoolInput, slot: SchoolSlot, locale: Locale) -> String {
    if input.name.is_empty() {
        text(locale, MessageKey::for_slot(slot)).to_string()
    } else {
        input.name.clone()
    }
}

/// Runs the full pipeline, or returns `None` when either school is missing
/// the minimum data.
pub fn compare(
    school1: &SchoolInput,
    school2: &SchoolInput,
    locale: Locale,
) -> Option<ComparisonResult> {
    if !school1.is_ready() || !school2.is_ready() {
        return None;
    }

    let metrics1 = compute_metrics(school1);
    let metrics2 = compute_metrics(school2);
    let labels = [
        display_label(school1, SchoolSlot::School1, locale),
        display_label(school2, SchoolSlot::School2, locale),
    ];
    let recommendation = recommend(&metrics1, &metrics2, &labels, locale);

    Some(ComparisonResult {
        school1: SchoolReport {
            input: school1.clone(),
            metrics: metrics1,
        },
        school2: SchoolReport {
            input: school2.clone(),
            metrics: metrics2,
        },
        recommendation,
    })
}
