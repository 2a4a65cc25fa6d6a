//! Tests-outcome summary feeding the donut chart.

use crate::DataBundle;
use rdt_data::aggregate::numeric;
use rdt_data::filter::{self, Filters};
use serde::Serialize;

/// Summed test outcomes over the filtered year range.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestsSummary {
    pub tests_conducted: f64,
    pub positive: f64,
    pub cleared: f64,
    /// Overall positive rate on the 0..100 scale.
    pub positive_rate: f64,
}

/// Aggregate the tests-summary export over the year range. An empty
/// selection yields all-zero totals rather than an error.
pub fn tests_summary(bundle: &DataBundle, filters: &Filters) -> TestsSummary {
    let mut totals = TestsSummary::default();
    for record in &bundle.tests_summary {
        if !filters.year_in_range(filter::record_year(record)) {
            continue;
        }
        totals.tests_conducted += numeric(record, "tests_conducted");
        totals.positive += numeric(record, "positive_detections");
        totals.cleared += numeric(record, "cleared");
    }
    if totals.tests_conducted > 0.0 {
        totals.positive_rate = totals.positive / totals.tests_conducted * 100.0;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;
    use serde_json::json;

    fn bundle() -> DataBundle {
        let mut b = DataBundle::new();
        b.insert_raw(
            Source::TestsSummary,
            Some(json!([
                {"year": 2021, "tests_conducted": 1000, "positive_detections": 100, "cleared": 900},
                {"year": 2022, "tests_conducted": 3000, "positive_detections": 300, "cleared": 2700}
            ])),
        );
        b
    }

    #[test]
    fn test_totals_and_rate() {
        let totals = tests_summary(&bundle(), &Filters::defaults());
        assert_eq!(totals.tests_conducted, 4000.0);
        assert_eq!(totals.positive, 400.0);
        assert_eq!(totals.cleared, 3600.0);
        assert_eq!(totals.positive_rate, 10.0);
    }

    #[test]
    fn test_empty_range_is_all_zero() {
        let filters = Filters {
            year_start: 1990,
            year_end: 1995,
            ..Filters::defaults()
        };
        let totals = tests_summary(&bundle(), &filters);
        assert_eq!(totals, TestsSummary::default());
    }
}
