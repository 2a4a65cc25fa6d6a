//! National trend line/area chart and the hero statistics strip.

use crate::DataBundle;
use rdt_data::aggregate::numeric;
use rdt_data::filter::{self, Filters};
use serde::Serialize;

/// One point of the national detections trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub total: f64,
}

/// Filtered trend points, ascending by year.
pub fn series(bundle: &DataBundle, filters: &Filters) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = filter::apply(&bundle.trend, filters)
        .iter()
        .map(|r| TrendPoint {
            year: filter::record_year(r),
            total: numeric(r, "total"),
        })
        .collect();
    points.sort_by_key(|p| p.year);
    points
}

/// Headline statistics over the filtered trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroStats {
    pub total: f64,
    pub first_year: i32,
    pub last_year: i32,
    pub first: f64,
    pub last: f64,
    /// Growth as a multiplier over the span (last / first).
    pub multiplier: f64,
    pub daily_average: f64,
    pub years: usize,
}

/// Compute the hero stats, or `None` when the selection matches no rows.
pub fn hero(bundle: &DataBundle, filters: &Filters) -> Option<HeroStats> {
    let points = series(bundle, filters);
    let first_point = points.first()?;
    let last_point = points.last()?;

    let total: f64 = points.iter().map(|p| p.total).sum();
    // A zero first year would make the multiplier meaningless; treat it as 1.
    let first = if first_point.total > 0.0 {
        first_point.total
    } else {
        1.0
    };
    let last = if last_point.total > 0.0 {
        last_point.total
    } else {
        1.0
    };
    let years = points.len();

    Some(HeroStats {
        total,
        first_year: first_point.year,
        last_year: last_point.year,
        first,
        last,
        multiplier: last / first,
        daily_average: (total / (years as f64 * 365.0)).round(),
        years,
    })
}

/// A labelled event marker on the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub year: i32,
    pub label: &'static str,
    pub description: &'static str,
}

/// Fixed annotations for the national trend.
pub fn annotations() -> Vec<Annotation> {
    vec![
        Annotation {
            year: 2020,
            label: "COVID-19 Impact",
            description: "Reduced testing during lockdowns",
        },
        Annotation {
            year: 2023,
            label: "Record High",
            description: "Expanded testing programs",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;
    use serde_json::json;

    fn bundle() -> DataBundle {
        let mut b = DataBundle::new();
        b.insert_raw(
            Source::Trend,
            Some(json!([
                {"year": 2010, "count": 100},
                {"year": 2008, "count": 50},
                {"year": 2022, "count": 200}
            ])),
        );
        b
    }

    #[test]
    fn test_series_sorted_and_filtered() {
        let filters = Filters {
            year_start: 2008,
            year_end: 2010,
            ..Filters::defaults()
        };
        let points = series(&bundle(), &filters);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].year, 2008);
        assert_eq!(points[1].year, 2010);
    }

    #[test]
    fn test_hero_stats() {
        let stats = hero(&bundle(), &Filters::defaults()).unwrap();
        assert_eq!(stats.total, 350.0);
        assert_eq!(stats.first_year, 2008);
        assert_eq!(stats.last_year, 2022);
        assert_eq!(stats.multiplier, 4.0);
        assert_eq!(stats.years, 3);
    }

    #[test]
    fn test_hero_none_on_empty_selection() {
        let filters = Filters {
            year_start: 1990,
            year_end: 1995,
            ..Filters::defaults()
        };
        assert!(hero(&bundle(), &filters).is_none());
    }
}
