//! Australian Roadside Drug Testing statistics dashboard
//!
//! Single-page overview of RDT enforcement data, 2008 onwards: national
//! detections trend, per-state choropleth, drug-type composition, test
//! outcomes, and tests-vs-detections comparison, all driven by one shared
//! filter panel (year range, jurisdiction, drug types).
//!
//! Data flow:
//! 1. On mount, every JSON export (plus the states GeoJSON) is fetched
//!    concurrently; a failed source degrades its charts to "no data".
//! 2. Raw rows are normalized into a `DataBundle` and the year sliders are
//!    bounded by the span actually present in the trend data.
//! 3. Whenever a filter signal changes, the view payloads are recomputed
//!    and pushed to the D3.js renderers as JSON.

use dioxus::prelude::*;
use rdt_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, FilterPanel, LoadingSpinner, ViewToggle,
};
use rdt_chart_ui::fetch::DataService;
use rdt_chart_ui::js_bridge;
use rdt_chart_ui::state::AppState;
use rdt_charts::views::geography::MapMode;
use rdt_charts::views::{composition, geography, summary, trend};
use rdt_charts::{DataBundle, Source};
use rdt_core::{format, palette, DrugType};

const TREND_CHART_ID: &str = "trend-chart";
const MAP_CHART_ID: &str = "map-chart";
const STACKED_CHART_ID: &str = "jurisdiction-chart";
const SLOPE_CHART_ID: &str = "slope-chart";
const HEATMAP_CHART_ID: &str = "heatmap-chart";
const DONUT_CHART_ID: &str = "donut-chart";
const COMPARISON_CHART_ID: &str = "comparison-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("rdt-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Fetch and normalize all sources on mount ───
    use_effect(move || {
        spawn(async move {
            let service = DataService::new();
            let urls: Vec<String> = Source::ALL.iter().map(|s| s.path().to_string()).collect();
            let results = service.load_all(&urls).await;

            let mut bundle = DataBundle::new();
            for (source, raw) in Source::ALL.into_iter().zip(results) {
                bundle.insert_raw(source, raw);
            }

            if bundle.trend.is_empty() {
                state
                    .error_msg
                    .set(Some("No detection data available.".to_string()));
                state.loading.set(false);
                return;
            }

            if let Some((min, max)) = bundle.year_span() {
                state.min_year.set(min);
                state.max_year.set(max);
                state.year_start.set(min);
                state.year_end.set(max);
            }

            state.bundle.set(bundle);
            state.loading.set(false);

            // Initialize D3 chart scripts (one-time)
            js_bridge::init_charts();
        });
    });

    // ─── Effect 2: Recompute view payloads and re-render on filter change ───
    use_effect(move || {
        let loading = (state.loading)();
        let filters = state.filters();
        let trend_view = (state.trend_view)();
        let map_mode = (state.map_mode)();

        if loading {
            return;
        }

        // Clone the bundle out of the signal immediately so the read borrow
        // doesn't interfere with Dioxus signal tracking.
        let bundle: DataBundle = state.bundle.read().clone();

        render_trend(&bundle, &filters, &trend_view);
        render_map(&bundle, &filters, map_mode);
        render_composition(&bundle, &filters);
        render_outcomes(&bundle, &filters);
    });

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "font-size: 22px; margin: 8px 0 2px 0;",
                "Australian Roadside Drug Testing"
            }
            p {
                style: "font-size: 13px; color: #666; margin: 0 0 12px 0;",
                "Positive detections from police roadside drug tests, by year, state and drug type."
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                FilterPanel {}
                HeroStrip {}

                ChartHeader {
                    title: "National Detections Trend".to_string(),
                    subtitle: "Positive roadside detections per year across the selected states".to_string(),
                }
                ViewToggle {
                    options: vec![
                        ("area".to_string(), "Area".to_string()),
                        ("line".to_string(), "Line".to_string()),
                    ],
                    active: (state.trend_view)(),
                    on_select: move |view| state.trend_view.set(view),
                }
                ChartContainer { id: TREND_CHART_ID.to_string(), min_height: 420 }

                ChartHeader {
                    title: "Detections by State".to_string(),
                    subtitle: "Hover a state for totals and per-capita rates".to_string(),
                }
                ViewToggle {
                    options: vec![
                        ("detections".to_string(), "Detections".to_string()),
                        ("tests".to_string(), "Tests".to_string()),
                        ("rate".to_string(), "Positive Rate".to_string()),
                    ],
                    active: map_mode_value((state.map_mode)()).to_string(),
                    on_select: move |mode: String| state.map_mode.set(parse_map_mode(&mode)),
                }
                ChartContainer { id: MAP_CHART_ID.to_string(), min_height: 500 }

                ChartHeader {
                    title: "Drug Composition by State".to_string(),
                    subtitle: "Which substances drive each state's detections".to_string(),
                }
                ChartContainer { id: STACKED_CHART_ID.to_string() }

                ChartHeader {
                    title: "Drug Type Trends".to_string(),
                    subtitle: "Per-substance detection counts across the selected years".to_string(),
                }
                ChartContainer { id: SLOPE_CHART_ID.to_string() }

                ChartHeader {
                    title: "State and Substance Heatmap".to_string(),
                }
                ChartContainer { id: HEATMAP_CHART_ID.to_string(), min_height: 380 }

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 24px;",
                    div {
                        style: "flex: 1; min-width: 320px;",
                        ChartHeader {
                            title: "Test Outcomes".to_string(),
                            subtitle: "Cleared versus positive roadside tests".to_string(),
                        }
                        ChartContainer { id: DONUT_CHART_ID.to_string(), min_height: 340 }
                    }
                    div {
                        style: "flex: 2; min-width: 420px;",
                        ChartHeader {
                            title: "Tests vs Detections".to_string(),
                            subtitle: "Testing volume against positive results, log scale".to_string(),
                        }
                        ChartContainer { id: COMPARISON_CHART_ID.to_string() }
                    }
                }

                p {
                    style: "font-size: 11px; color: #888; text-align: center; margin-top: 16px;",
                    "Source: state police annual reports and BITRE road safety enforcement data."
                }
            }
        }
    }
}

fn map_mode_value(mode: MapMode) -> &'static str {
    match mode {
        MapMode::Detections => "detections",
        MapMode::Tests => "tests",
        MapMode::PositiveRate => "rate",
    }
}

fn parse_map_mode(value: &str) -> MapMode {
    match value {
        "tests" => MapMode::Tests,
        "rate" => MapMode::PositiveRate,
        _ => MapMode::Detections,
    }
}

fn render_trend(bundle: &DataBundle, filters: &rdt_data::filter::Filters, view: &str) {
    let points = trend::series(bundle, filters);
    let data_json = serde_json::to_string(&points).unwrap_or_default();
    let config_json = serde_json::json!({
        "view": view,
        "color": palette::trend::LINE,
        "annotationColor": palette::trend::ANNOTATION,
        "annotations": trend::annotations(),
        "yAxisLabel": "Positive Detections",
    })
    .to_string();
    js_bridge::render_trend_chart(TREND_CHART_ID, &data_json, &config_json);
}

fn render_map(bundle: &DataBundle, filters: &rdt_data::filter::Filters, mode: MapMode) {
    let data = geography::map_view(bundle, filters, mode);
    let data_json = serde_json::to_string(&data).unwrap_or_default();
    let config_json = serde_json::json!({
        "geoJson": bundle.geo_json,
        "legendLabel": mode.legend_label(),
        "isRate": mode == MapMode::PositiveRate,
    })
    .to_string();
    js_bridge::render_map_chart(MAP_CHART_ID, &data_json, &config_json);
}

fn render_composition(bundle: &DataBundle, filters: &rdt_data::filter::Filters) {
    let drug_config = serde_json::json!({
        "keys": DrugType::ALL.iter().map(|d| d.name()).collect::<Vec<_>>(),
        "colors": DrugType::ALL.iter().map(|d| d.color()).collect::<Vec<_>>(),
    })
    .to_string();

    let rows = composition::stacked_rows(bundle, filters);
    let data_json = serde_json::to_string(&rows).unwrap_or_default();
    js_bridge::render_stacked_bar_chart(STACKED_CHART_ID, &data_json, &drug_config);

    let series = composition::slope_series(bundle, filters);
    let data_json = serde_json::to_string(&series).unwrap_or_default();
    let slope_config = serde_json::json!({
        "colors": DrugType::ALL
            .iter()
            .map(|d| (d.name(), d.color()))
            .collect::<std::collections::HashMap<_, _>>(),
    })
    .to_string();
    js_bridge::render_slope_chart(SLOPE_CHART_ID, &data_json, &slope_config);

    let cells = composition::heatmap_cells(bundle, filters);
    let data_json = serde_json::to_string(&cells).unwrap_or_default();
    js_bridge::render_heatmap_chart(HEATMAP_CHART_ID, &data_json, "{}");
}

fn render_outcomes(bundle: &DataBundle, filters: &rdt_data::filter::Filters) {
    let totals = summary::tests_summary(bundle, filters);
    let donut_data = serde_json::json!([
        {"label": "Cleared", "value": totals.cleared, "color": palette::donut::CLEARED},
        {"label": "Positive", "value": totals.positive, "color": palette::donut::POSITIVE},
    ])
    .to_string();
    let donut_config = serde_json::json!({
        "centerValue": format::format_percent(totals.positive_rate, false),
        "centerLabel": "positive rate",
    })
    .to_string();
    js_bridge::render_donut_chart(DONUT_CHART_ID, &donut_data, &donut_config);

    let detections = geography::jurisdiction_totals(bundle, filters);
    let tests = geography::tests_by_jurisdiction(bundle, filters);
    let comparison: Vec<serde_json::Value> = detections
        .iter()
        .map(|d| {
            let tests_total = tests
                .iter()
                .find(|t| t.jurisdiction == d.jurisdiction)
                .map(|t| t.total)
                .unwrap_or(0.0);
            serde_json::json!({
                "jurisdiction": d.jurisdiction,
                "tests": tests_total,
                "detections": d.total,
            })
        })
        .collect();
    let data_json = serde_json::to_string(&comparison).unwrap_or_default();
    let config_json = serde_json::json!({
        "testsColor": palette::comparison::TESTS,
        "detectionsColor": palette::comparison::DETECTIONS,
    })
    .to_string();
    js_bridge::render_comparison_chart(COMPARISON_CHART_ID, &data_json, &config_json);
}

/// Headline statistics strip above the charts.
#[component]
fn HeroStrip() -> Element {
    let state = use_context::<AppState>();
    let filters = state.filters();
    let bundle = state.bundle.read();
    let Some(stats) = trend::hero(&bundle, &filters) else {
        return rsx! {
            p {
                style: "font-size: 13px; color: #888;",
                "No detections match the current filters."
            }
        };
    };

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; margin: 12px 0;",
            HeroStat {
                value: format::format_compact(stats.total),
                label: format!("detections, {}", format::format_year_range(stats.first_year, stats.last_year)),
            }
            HeroStat {
                value: format!("{:.1}x", stats.multiplier),
                label: format!("growth since {}", stats.first_year),
            }
            HeroStat {
                value: format::format_number(stats.daily_average),
                label: "detections per day".to_string(),
            }
            HeroStat {
                value: format!("{}", stats.years),
                label: "years of data".to_string(),
            }
        }
    }
}

#[component]
fn HeroStat(value: String, label: String) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 140px; padding: 10px 14px; background: #f7f9fb; border-radius: 6px;",
            div {
                style: "font-size: 22px; font-weight: 600;",
                "{value}"
            }
            div {
                style: "font-size: 12px; color: #666;",
                "{label}"
            }
        }
    }
}
