pub mod normalize;

use serde::{Deserialize, Serialize};

use crate::metrics::normalize::normalize_roi;
use crate::school::SchoolInput;

pub const REPUTATION_WEIGHT: f64 = 0.3;
pub const LOCATION_WEIGHT: f64 = 0.2;
pub const PROGRAM_FIT_WEIGHT: f64 = 0.3;
pub const ROI_WEIGHT: f64 = 0.2;

/// Salary years counted against the program cost.
pub const SALARY_HORIZON_YEARS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub net_annual_cost: f64,
    pub total_program_cost: f64,
    #[serde(rename = "estimatedROI")]
    pub estimated_roi: f64,
    pub weighted_score: f64,
}

/// Derives the financial metrics for one school.
///
/// Total over every numeric input. The only clamp is the zero floor on the net
/// annual cost; ROI is left unbounded and is defined as `0` when the program
/// costs nothing.
pub fn compute_metrics(input: &SchoolInput) -> DerivedMetrics {
    let net_annual_cost = (input.tuition - input.scholarship + input.living_cost).max(0.0);
    let total_program_cost = net_annual_cost * input.program_length;

    let horizon_salary = input.post_grad_salary * SALARY_HORIZON_YEARS;
    let estimated_roi = if total_program_cost > 0.0 {
        ((horizon_salary - total_program_cost) / total_program_cost) * 100.0
    } else {
        0.0
    };

    let weighted_score = input.reputation * REPUTATION_WEIGHT
        + input.location * LOCATION_WEIGHT
        + input.program_fit * PROGRAM_FIT_WEIGHT
        + normalize_roi(estimated_roi) * ROI_WEIGHT;

    DerivedMetrics {
        net_annual_cost,
        total_program_cost,
        estimated_roi,
        weighted_score,
    }
}

#[cfg(test)]
mod tests {
    use crate::metrics::{
        compute_metrics, LOCATION_WEIGHT, PROGRAM_FIT_WEIGHT, REPUTATION_WEIGHT, ROI_WEIGHT,
    };
    use crate::school::SchoolInput;

    fn school(
        tuition: f64,
        scholarship: f64,
        living_cost: f64,
        program_length: f64,
        post_grad_salary: f64,
    ) -> SchoolInput {
        SchoolInput {
            name: "Test".to_string(),
            tuition,
            scholarship,
            living_cost,
            program_length,
            post_grad_salary,
            ..SchoolInput::default()
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn golden_school_a() {
        let input = SchoolInput {
            name: "A".to_string(),
            tuition: 50_000.0,
            scholarship: 20_000.0,
            living_cost: 15_000.0,
            program_length: 2.0,
            post_grad_salary: 90_000.0,
            reputation: 8.0,
            location: 7.0,
            program_fit: 9.0,
        };
        let metrics = compute_metrics(&input);
        assert_eq!(metrics.net_annual_cost, 45_000.0);
        assert_eq!(metrics.total_program_cost, 90_000.0);
        assert!(close(metrics.estimated_roi, 400.0));
        assert!(close(metrics.weighted_score, 8.2));
    }

    #[test]
    fn golden_school_b() {
        let input = SchoolInput {
            name: "B".to_string(),
            tuition: 30_000.0,
            scholarship: 5_000.0,
            living_cost: 10_000.0,
            program_length: 4.0,
            post_grad_salary: 70_000.0,
            reputation: 6.0,
            location: 8.0,
            program_fit: 7.0,
        };
        let metrics = compute_metrics(&input);
        assert_eq!(metrics.net_annual_cost, 35_000.0);
        assert_eq!(metrics.total_program_cost, 140_000.0);
        assert!(close(metrics.estimated_roi, 150.0));
        assert!(close(metrics.weighted_score, 6.46));
    }

    #[test]
    fn net_cost_is_floored_at_zero() {
        let metrics = compute_metrics(&school(10_000.0, 40_000.0, 5_000.0, 4.0, 50_000.0));
        assert_eq!(metrics.net_annual_cost, 0.0);
        assert_eq!(metrics.total_program_cost, 0.0);
        assert_eq!(metrics.estimated_roi, 0.0);
    }

    #[test]
    fn net_cost_never_negative_for_non_negative_inputs() {
        for tuition in [0.0, 1.0, 15_000.0, 200_000.0] {
            for scholarship in [0.0, 7_500.0, 200_000.0] {
                for living_cost in [0.0, 12_000.0, 100_000.0] {
                    let metrics =
                        compute_metrics(&school(tuition, scholarship, living_cost, 4.0, 0.0));
                    assert!(metrics.net_annual_cost >= 0.0);
                }
            }
        }
    }

    #[test]
    fn total_cost_is_exact_product() {
        for length in [0.5, 1.0, 2.5, 3.75, 10.0] {
            let metrics = compute_metrics(&school(33_333.0, 1_111.0, 9_876.5, length, 0.0));
            assert_eq!(
                metrics.total_program_cost,
                metrics.net_annual_cost * length
            );
        }
    }

    #[test]
    fn free_program_has_zero_roi() {
        let metrics = compute_metrics(&school(0.0, 0.0, 0.0, 4.0, 120_000.0));
        assert_eq!(metrics.total_program_cost, 0.0);
        assert_eq!(metrics.estimated_roi, 0.0);
        assert!(metrics.weighted_score.is_finite());
    }

    #[test]
    fn zero_salary_bottoms_out_at_minus_one_hundred() {
        let metrics = compute_metrics(&school(20_000.0, 0.0, 0.0, 2.0, 0.0));
        assert!(close(metrics.estimated_roi, -100.0));
    }

    #[test]
    fn accepts_out_of_range_inputs_without_panicking() {
        let input = SchoolInput {
            name: String::new(),
            tuition: -50_000.0,
            scholarship: 1e12,
            living_cost: -1.0,
            program_length: -3.0,
            post_grad_salary: -10.0,
            reputation: 42.0,
            location: -7.0,
            program_fit: 0.0,
        };
        let metrics = compute_metrics(&input);
        assert_eq!(metrics.net_annual_cost, 0.0);
        assert_eq!(metrics.estimated_roi, 0.0);
    }

    #[test]
    fn roi_is_unbounded_above() {
        let metrics = compute_metrics(&school(1_000.0, 0.0, 0.0, 1.0, 1_000_000.0));
        assert!(metrics.estimated_roi > 100_000.0);
        assert!(metrics.weighted_score.is_finite());
    }

    #[test]
    fn weights_sum_to_one() {
        let sum = REPUTATION_WEIGHT + LOCATION_WEIGHT + PROGRAM_FIT_WEIGHT + ROI_WEIGHT;
        assert!(close(sum, 1.0));
    }

    #[test]
    fn weighted_score_stays_in_slider_range() {
        for slider in [1.0, 3.0, 5.5, 10.0] {
            for salary in [0.0, 40_000.0, 400_000.0] {
                let input = SchoolInput {
                    reputation: slider,
                    location: slider,
                    program_fit: slider,
                    ..school(25_000.0, 0.0, 10_000.0, 4.0, salary)
                };
                let score = compute_metrics(&input).weighted_score;
                assert!((1.0..=10.0 + 1e-9).contains(&score), "score {score}");
            }
        }
    }

    #[test]
    fn blank_form_scores_four_and_a_half() {
        let metrics = compute_metrics(&SchoolInput::default());
        assert!(close(metrics.weighted_score, 4.5));
    }

    #[test]
    fn serializes_with_form_field_names() {
        let metrics = compute_metrics(&school(10_000.0, 0.0, 0.0, 1.0, 10_000.0));
        let value = serde_json::to_value(metrics).expect("failed to serialize metrics");
        assert!(value.get("netAnnualCost").is_some());
        assert!(value.get("totalProgramCost").is_some());
        assert!(value.get("estimatedROI").is_some());
        assert!(value.get("weightedScore").is_some());
    }
}
