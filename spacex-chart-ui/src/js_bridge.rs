//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes a [`ChartSpec`] and routes it to the matching global.

use spacex_charts::{ChartKind, ChartSpec};

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SpaceX dash JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define `renderPieChart` / `renderScatterChart` via
/// `function` declarations. They are evaluated at global scope via indirect
/// `eval()` once D3 is ready, then promoted to `window.*`. Safe to call more
/// than once.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__spacexChartsReady) {{ window.__spacexChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__spacexChartsReady || window.__spacexChartsPolling) return;
            window.__spacexChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__spacexChartScripts);
                    delete window.__spacexChartScripts;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof renderEmptyChart !== 'undefined') window.renderEmptyChart = renderEmptyChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__spacexChartsReady = true;
                    console.log('SpaceX dash charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Name of the global render function for a chart kind.
fn render_function(spec: &ChartSpec) -> &'static str {
    if spec.is_empty() {
        return "renderEmptyChart";
    }
    match spec.kind() {
        ChartKind::Pie => "renderPieChart",
        ChartKind::Scatter => "renderScatterChart",
    }
}

/// Render `spec` into the element with DOM id `container_id`.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to initialize,
/// and the container DOM element to exist before rendering. An empty spec
/// draws a "no launches" placeholder that keeps the chart title.
pub fn render_chart(container_id: &str, spec: &ChartSpec) {
    let spec_json = match spec.to_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize {} chart spec: {}", container_id, e);
            return;
        }
    };
    // Pass the JSON as a JS string literal so quotes and backslashes survive.
    let spec_literal = serde_json::to_string(&spec_json).unwrap_or_default();
    let container_literal = serde_json::to_string(container_id).unwrap_or_default();
    let function = render_function(spec);

    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__spacexChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({container_literal})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({container_literal}, {spec_literal});
                    }} catch(e) {{ console.error('[SpaceX dash] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}
