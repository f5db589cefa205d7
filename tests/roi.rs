//! Tests for the ROI calculator and projection helpers.
use kumitate::error::RoiError;
use kumitate::prelude::*;

#[test]
fn test_reference_calculation() {
    let report = RoiInputs::new(40.0, 50.0, 10).unwrap().calculate();

    assert_eq!(report.hours_saved_per_month, 40.0);
    assert_eq!(report.monthly_savings, 2000.0);
    assert_eq!(report.annual_savings, 24000.0);
    // 40 / (160 * 10) * 100 = 2.5, rounded to 3
    assert_eq!(report.productivity_boost_percentage, 3);
    // round(40 / 100 * 50 + 3 * 0.5) = round(21.5) = 22
    assert_eq!(report.automation_maturity_score, 22);
    // round(5000 / 2000) = round(2.5) = 3
    assert_eq!(report.break_even_months, Some(3));
}

#[test]
fn test_zero_hours_saved_has_no_break_even_point() {
    let report = RoiInputs::new(0.0, 50.0, 10).unwrap().calculate();

    assert_eq!(report.monthly_savings, 0.0);
    assert_eq!(report.annual_savings, 0.0);
    assert_eq!(report.productivity_boost_percentage, 0);
    assert_eq!(report.break_even_months, None);
}

#[test]
fn test_zero_hourly_rate_has_no_break_even_point() {
    let report = RoiInputs::new(40.0, 0.0, 10).unwrap().calculate();

    assert_eq!(report.monthly_savings, 0.0);
    assert_eq!(report.break_even_months, None);
}

#[test]
fn test_zero_employees_yield_zero_boost() {
    let report = RoiInputs::new(40.0, 50.0, 0).unwrap().calculate();

    assert_eq!(report.productivity_boost_percentage, 0);
    // Maturity still reflects the hours component: round(40/100*50 + 0) = 20.
    assert_eq!(report.automation_maturity_score, 20);
    assert_eq!(report.break_even_months, Some(3));
}

#[test]
fn test_boost_is_clamped_to_100() {
    // 400 saved hours against a single 160-hour employee: 250% raw.
    let report = RoiInputs::new(400.0, 10.0, 1).unwrap().calculate();

    assert_eq!(report.productivity_boost_percentage, 100);
    assert_eq!(report.automation_maturity_score, 100);
}

#[test]
fn test_maturity_score_is_capped_at_100() {
    let report = RoiInputs::new(300.0, 10.0, 100).unwrap().calculate();

    // Hours component alone is 150 before the cap.
    assert_eq!(report.automation_maturity_score, 100);
}

#[test]
fn test_negative_inputs_are_rejected() {
    assert_eq!(
        RoiInputs::new(-1.0, 50.0, 10),
        Err(RoiError::NegativeInput {
            field: "hours_saved_per_month",
            value: -1.0
        })
    );
    assert_eq!(
        RoiInputs::new(40.0, -0.5, 10),
        Err(RoiError::NegativeInput {
            field: "hourly_rate",
            value: -0.5
        })
    );
}

#[test]
fn test_non_finite_inputs_are_rejected() {
    assert_eq!(
        RoiInputs::new(f64::NAN, 50.0, 10),
        Err(RoiError::NonFiniteInput {
            field: "hours_saved_per_month"
        })
    );
    assert_eq!(
        RoiInputs::new(40.0, f64::INFINITY, 10),
        Err(RoiError::NonFiniteInput {
            field: "hourly_rate"
        })
    );
}

#[test]
fn test_calculation_is_deterministic() {
    let inputs = RoiInputs::new(28.0, 55.0, 8).unwrap();
    assert_eq!(inputs.calculate(), inputs.calculate());
}

#[test]
fn test_cumulative_savings_series() {
    let report = RoiInputs::new(40.0, 50.0, 10).unwrap().calculate();

    let series = report.cumulative_savings(12);
    assert_eq!(series.len(), 12);
    assert_eq!(series[0], 2000.0);
    assert_eq!(series[11], 24000.0);
}

#[test]
fn test_automation_split_sums_to_100() {
    let report = RoiInputs::new(40.0, 50.0, 10).unwrap().calculate();

    let (automated, manual) = report.automation_split();
    assert_eq!(automated, 3);
    assert_eq!(manual, 97);
    assert_eq!(automated + manual, 100);
}

#[test]
fn test_report_serialization() {
    let report = RoiInputs::new(0.0, 50.0, 10).unwrap().calculate();

    let json = serde_json::to_string(&report).unwrap();
    // The undefined break-even point serializes as null, never NaN/Infinity.
    assert!(json.contains("\"break_even_months\":null"));

    let back: RoiReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
