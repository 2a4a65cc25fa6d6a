//! Detection totals for a filter selection, printed as a small report.

use log::info;
use rdt_core::format::{format_number, format_percent, format_year_range};
use rdt_core::Jurisdiction;
use rdt_data::filter::{FilterState, FilterUpdate, Filters, JurisdictionFilter};
use rdt_charts::views::{geography, summary, trend};

use crate::validate::load_bundle;

/// Summarise the detection data under the given filter selection.
pub fn run_summarise(
    data_dir: &str,
    year_start: Option<i32>,
    year_end: Option<i32>,
    jurisdiction: Option<&str>,
) -> anyhow::Result<()> {
    let bundle = load_bundle(data_dir)?;

    let defaults = bundle
        .year_span()
        .map(|(min, max)| Filters {
            year_start: min,
            year_end: max,
            ..Filters::defaults()
        })
        .unwrap_or_else(Filters::defaults);

    let jurisdiction = jurisdiction
        .map(|code| {
            code.parse::<Jurisdiction>()
                .map(JurisdictionFilter::One)
                .map_err(|_| anyhow::anyhow!("unknown jurisdiction code: {code}"))
        })
        .transpose()?;

    // Inverted ranges are swapped rather than rejected.
    let mut state = FilterState::new(defaults);
    state.subscribe(|f| {
        info!(
            "filters: {} jurisdiction={:?}",
            format_year_range(f.year_start, f.year_end),
            f.jurisdiction
        );
    });
    state.set(FilterUpdate {
        year_start,
        year_end,
        jurisdiction,
        drug_types: None,
    });
    let filters = state.get();

    println!(
        "Roadside drug testing, {}",
        format_year_range(filters.year_start, filters.year_end)
    );

    match trend::hero(&bundle, &filters) {
        Some(stats) => {
            println!("  detections: {}", format_number(stats.total));
            println!(
                "  {} -> {} ({:.1}x growth)",
                format_number(stats.first),
                format_number(stats.last),
                stats.multiplier
            );
            println!("  per day:    {}", format_number(stats.daily_average));
        }
        None => println!("  no detections match this selection"),
    }

    let outcomes = summary::tests_summary(&bundle, &filters);
    if outcomes.tests_conducted > 0.0 {
        println!(
            "  tests:      {} ({} positive)",
            format_number(outcomes.tests_conducted),
            format_percent(outcomes.positive_rate, false)
        );
    }

    println!("  by state:");
    for total in geography::jurisdiction_totals(&bundle, &filters) {
        println!("    {:4} {}", total.jurisdiction, format_number(total.total));
    }

    Ok(())
}
