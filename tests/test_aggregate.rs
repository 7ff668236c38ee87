//! Metric aggregation: totals, derived ratios and zero guards.

mod common;

use ads_insights_sdk::{aggregate, MetricData, MetricRecord};
use approx::assert_relative_eq;
use common::row;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

#[test]
fn empty_input_yields_all_zero() {
    let rows: Vec<MetricRecord> = Vec::new();
    assert_eq!(aggregate(&rows), MetricData::default());
}

#[test]
fn all_zero_rows_yield_all_zero_metrics() {
    let rows = vec![row("20250101", 0, 0, 0, 0.0), row("20250102", 0, 0, 0, 0.0)];
    let m = aggregate(&rows);
    assert_eq!(m, MetricData::default());
    assert_eq!(m.ctr, 0.0);
    assert_eq!(m.cpc, 0.0);
    assert_eq!(m.cpa, 0.0);
    assert_eq!(m.roas, 0.0);
}

#[test]
fn seven_day_week_totals_and_ratios() {
    let rows = common::week_of_rows();
    let m = aggregate(&rows);

    assert_eq!(m.impressions, 7000);
    assert_eq!(m.clicks, 350);
    assert_relative_eq!(m.cost, 7.0);
    assert_relative_eq!(m.conversions, 35.0);
    assert_relative_eq!(m.ctr, 0.05);
    assert_relative_eq!(m.cpc, 0.02);
    assert_relative_eq!(m.cpa, 0.2);
    assert_eq!(m.roas, 0.0);
}

#[test]
fn cost_is_converted_from_micros() {
    let rows = vec![row("20250101", 0, 0, 12_450_800_000, 0.0)];
    assert_relative_eq!(aggregate(&rows).cost, 12450.8);
}

#[test]
fn fractional_conversions_are_summed() {
    let rows = vec![
        row("20250101", 0, 0, 3_000_000, 0.5),
        row("20250102", 0, 0, 0, 1.25),
    ];
    let m = aggregate(&rows);
    assert_relative_eq!(m.conversions, 1.75);
    assert_relative_eq!(m.cpa, 3.0 / 1.75);
}

#[test]
fn nonsense_conversions_count_as_zero() {
    let rows = vec![
        row("20250101", 0, 0, 1_000_000, f64::NAN),
        row("20250102", 0, 0, 1_000_000, -3.0),
        row("20250103", 0, 0, 1_000_000, f64::INFINITY),
    ];
    let m = aggregate(&rows);
    assert_eq!(m.conversions, 0.0);
    assert_eq!(m.cpa, 0.0);
}

#[test]
fn huge_integer_totals_saturate() {
    let rows = vec![row("20250101", u64::MAX, 1, 0, 0.0), row("20250102", 10, 1, 0, 0.0)];
    let m = aggregate(&rows);
    assert_eq!(m.impressions, u64::MAX);
    assert_eq!(m.clicks, 2);
}

// ---------------------------------------------------------------------------
// Division guards
// ---------------------------------------------------------------------------

#[test]
fn ctr_is_zero_without_impressions() {
    let m = aggregate(&[row("20250101", 0, 40, 1_000_000, 1.0)]);
    assert_eq!(m.clicks, 40);
    assert_eq!(m.ctr, 0.0);
}

#[test]
fn cpc_is_zero_without_clicks() {
    let m = aggregate(&[row("20250101", 100, 0, 5_000_000, 1.0)]);
    assert_relative_eq!(m.cost, 5.0);
    assert_eq!(m.cpc, 0.0);
}

#[test]
fn cpa_is_zero_without_conversions() {
    let m = aggregate(&[row("20250101", 100, 10, 5_000_000, 0.0)]);
    assert_eq!(m.cpa, 0.0);
    assert_relative_eq!(m.cpc, 0.5);
}

// ---------------------------------------------------------------------------
// Single records
// ---------------------------------------------------------------------------

#[test]
fn from_record_matches_single_row_aggregate() {
    let r = row("", 22_000, 1_100, 4_500_000_000, 120.0);
    let m = MetricData::from_record(&r);
    assert_eq!(m, aggregate(std::slice::from_ref(&r)));
    assert_relative_eq!(m.cost, 4500.0);
    assert_relative_eq!(m.ctr, 0.05);
    assert_relative_eq!(m.cpa, 37.5);
    assert_eq!(m.roas, 0.0);
}

#[test]
fn metric_data_serializes_camel_case() {
    let value = serde_json::to_value(MetricData::from_totals(10, 1, 2.0, 1.0)).unwrap();
    assert_eq!(value["impressions"], 10);
    assert_eq!(value["ctr"], 0.1);
    assert!(value.get("roas").is_some());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn record_strategy() -> impl Strategy<Value = MetricRecord> {
    (
        0u64..1_000_000,
        0u64..100_000,
        0u64..10_000_000_000,
        (0u32..100_000).prop_map(|c| c as f64 / 100.0),
        1u32..=28,
    )
        .prop_map(|(impressions, clicks, cost_micros, conversions, day)| MetricRecord {
            impressions,
            clicks,
            cost_micros,
            conversions,
            date: format!("202502{:02}", day),
        })
}

proptest! {
    #[test]
    fn aggregation_is_order_independent(
        (rows, shuffled) in proptest::collection::vec(record_strategy(), 0..40)
            .prop_flat_map(|rows| (Just(rows.clone()), Just(rows).prop_shuffle()))
    ) {
        prop_assert_eq!(aggregate(&rows), aggregate(&shuffled));
    }

    #[test]
    fn roas_is_always_zero(rows in proptest::collection::vec(record_strategy(), 0..20)) {
        prop_assert_eq!(aggregate(&rows).roas, 0.0);
    }

    #[test]
    fn ratios_never_divide_by_zero(rows in proptest::collection::vec(record_strategy(), 0..20)) {
        let m = aggregate(&rows);
        prop_assert!(m.ctr.is_finite());
        prop_assert!(m.cpc.is_finite());
        prop_assert!(m.cpa.is_finite());
    }
}
