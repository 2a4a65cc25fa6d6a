//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart renderers live in `assets/js/*.js` and are evaluated as
//! globals (no ES modules), exposed via `window.*`. This module provides
//! safe Rust wrappers that serialize payloads and call those globals.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LEGEND_JS: &str = include_str!("../assets/js/legend.js");
static TREND_CHART_JS: &str = include_str!("../assets/js/trend-chart.js");
static MAP_CHART_JS: &str = include_str!("../assets/js/map-chart.js");
static STACKED_BAR_CHART_JS: &str = include_str!("../assets/js/stacked-bar-chart.js");
static SLOPE_CHART_JS: &str = include_str!("../assets/js/slope-chart.js");
static HEATMAP_CHART_JS: &str = include_str!("../assets/js/heatmap-chart.js");
static DONUT_CHART_JS: &str = include_str!("../assets/js/donut-chart.js");
static COMPARISON_CHART_JS: &str = include_str!("../assets/js/comparison-chart.js");

/// The global function names the chart scripts declare.
const CHART_FUNCTIONS: [&str; 12] = [
    "initTooltip",
    "showTooltip",
    "hideTooltip",
    "renderLegend",
    "renderTrendChart",
    "renderMapChart",
    "renderStackedBarChart",
    "renderSlopeChart",
    "renderHeatmapChart",
    "renderDonutChart",
    "renderComparisonChart",
    "destroyChart",
];

fn all_chart_js() -> String {
    [
        TOOLTIP_JS,
        LEGEND_JS,
        TREND_CHART_JS,
        MAP_CHART_JS,
        STACKED_BAR_CHART_JS,
        SLOPE_CHART_JS,
        HEATMAP_CHART_JS,
        DONUT_CHART_JS,
        COMPARISON_CHART_JS,
    ]
    .join("\n")
}

/// Execute arbitrary JS, wrapped in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('RDT JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files use `function` declarations. To ensure they become
/// globally accessible (not block-scoped inside the setInterval callback),
/// they are evaluated at global scope via indirect eval once D3 is ready,
/// and each function is then promoted to `window.*` explicitly.
pub fn init_charts() {
    let store_js = format!(
        "window.__rdtChartScripts = {};",
        serde_json::to_string(&all_chart_js()).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promotions: String = CHART_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};\n"))
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__rdtChartScripts);
                    delete window.__rdtChartScripts;
                    {promotions}
                    window.__rdtChartsReady = true;
                    console.log('RDT charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Call a chart render function once D3, the chart scripts, and the
/// container DOM element are all ready.
fn render_via(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__rdtChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[RDT] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the national trend line/area chart.
pub fn render_trend_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderTrendChart", container_id, data_json, config_json);
}

/// Render the choropleth map of Australian states.
pub fn render_map_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderMapChart", container_id, data_json, config_json);
}

/// Render the jurisdiction-by-drug stacked bar chart.
pub fn render_stacked_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderStackedBarChart", container_id, data_json, config_json);
}

/// Render the per-drug slope/time-series chart.
pub fn render_slope_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderSlopeChart", container_id, data_json, config_json);
}

/// Render the jurisdiction-by-drug heatmap.
pub fn render_heatmap_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderHeatmapChart", container_id, data_json, config_json);
}

/// Render the cleared-vs-positive donut.
pub fn render_donut_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderDonutChart", container_id, data_json, config_json);
}

/// Render the tests-vs-detections comparison bars.
pub fn render_comparison_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderComparisonChart", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
