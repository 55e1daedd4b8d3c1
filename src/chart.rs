//! Radar-chart adapter. The option payload is built as typed structs and
//! handed to the ECharts widget as a parsed JS object; the widget itself is
//! owned by a [`ChartLifecycle`] so every acquire is paired with a release.

use serde::Serialize;

use crate::content::SKILL_RATINGS;
use crate::theme::Theme;

/// Id of the element the chart attaches to. Once attached, the widget owns
/// that subtree's rendering.
pub const CHART_CONTAINER_ID: &str = "skill-chart";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarOption {
    animation: bool,
    radar: RadarGrid,
    series: Vec<RadarSeries>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RadarGrid {
    indicator: Vec<Indicator>,
    radius: &'static str,
    split_number: u32,
    axis_name: AxisName,
    split_area: SplitArea,
    axis_line: GridLine,
    split_line: GridLine,
}

#[derive(Serialize)]
struct Indicator {
    name: &'static str,
    max: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AxisName {
    color: &'static str,
    background_color: &'static str,
    border_radius: u32,
    padding: [u32; 2],
    font_size: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SplitArea {
    area_style: AreaStyle,
}

#[derive(Serialize)]
struct AreaStyle {
    color: [&'static str; 4],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GridLine {
    line_style: LineColor,
}

#[derive(Serialize)]
struct LineColor {
    color: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RadarSeries {
    name: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    data: Vec<SeriesEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeriesEntry {
    value: Vec<u32>,
    name: &'static str,
    area_style: SeriesFill,
    line_style: SeriesLine,
    item_style: SeriesFill,
}

#[derive(Serialize)]
struct SeriesFill {
    color: &'static str,
}

#[derive(Serialize)]
struct SeriesLine {
    color: &'static str,
    width: u32,
}

/// Builds the full widget configuration for a theme. Data never changes
/// between themes; only the styling does.
pub fn radar_option(theme: Theme) -> RadarOption {
    let palette = theme.chart_palette();

    RadarOption {
        animation: false,
        radar: RadarGrid {
            indicator: SKILL_RATINGS
                .iter()
                .map(|skill| Indicator { name: skill.name, max: 100 })
                .collect(),
            radius: "65%",
            split_number: 4,
            axis_name: AxisName {
                color: palette.axis_name,
                background_color: palette.axis_name_background,
                border_radius: 3,
                padding: [3, 5],
                font_size: 14,
            },
            split_area: SplitArea {
                area_style: AreaStyle { color: palette.split_area },
            },
            axis_line: GridLine {
                line_style: LineColor { color: palette.grid_line },
            },
            split_line: GridLine {
                line_style: LineColor { color: palette.grid_line },
            },
        },
        series: vec![RadarSeries {
            name: "Skills",
            kind: "radar",
            data: vec![SeriesEntry {
                value: SKILL_RATINGS.iter().map(|skill| skill.rating).collect(),
                name: "Skill Level",
                area_style: SeriesFill { color: palette.series_area },
                line_style: SeriesLine { color: palette.series_line, width: 2 },
                item_style: SeriesFill { color: palette.series_point },
            }],
        }],
    }
}

/// Seam between the lifecycle discipline and the concrete widget. `acquire`
/// returns `None` when the chart container is not in the document, which is
/// an expected transient condition rather than an error.
pub trait ChartHost {
    type Handle;

    fn acquire(&mut self, option: &RadarOption) -> Option<Self::Handle>;
    fn release(&mut self, handle: Self::Handle);
}

/// Owns at most one live chart instance. Activating for a new theme always
/// releases the previous instance first; dropping the lifecycle releases
/// whatever is still held.
pub struct ChartLifecycle<H: ChartHost> {
    host: H,
    active: Option<H::Handle>,
}

impl<H: ChartHost> ChartLifecycle<H> {
    pub fn new(host: H) -> Self {
        Self { host, active: None }
    }

    pub fn activate(&mut self, theme: Theme) {
        self.release();
        let option = radar_option(theme);
        self.active = self.host.acquire(&option);
    }

    pub fn release(&mut self) {
        if let Some(handle) = self.active.take() {
            self.host.release(handle);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

impl<H: ChartHost> Drop for ChartLifecycle<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(target_arch = "wasm32")]
pub use echarts_host::EchartsHost;

#[cfg(target_arch = "wasm32")]
mod echarts_host {
    use js_sys::JSON;
    use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, JsValue};
    use web_sys::{window, Element};

    use super::{ChartHost, RadarOption, CHART_CONTAINER_ID};

    #[wasm_bindgen]
    extern "C" {
        pub type EChart;

        #[wasm_bindgen(catch, js_namespace = echarts, js_name = init)]
        fn echarts_init(container: &Element) -> Result<EChart, JsValue>;

        #[wasm_bindgen(method, js_name = setOption)]
        fn set_option(this: &EChart, option: &JsValue);

        #[wasm_bindgen(method)]
        fn resize(this: &EChart);

        #[wasm_bindgen(method)]
        fn dispose(this: &EChart);
    }

    pub struct EchartsHandle {
        chart: EChart,
        resize_listener: Closure<dyn FnMut()>,
    }

    /// Binds the lifecycle to the ECharts global loaded from `index.html`.
    pub struct EchartsHost;

    impl ChartHost for EchartsHost {
        type Handle = EchartsHandle;

        fn acquire(&mut self, option: &RadarOption) -> Option<EchartsHandle> {
            let win = window()?;
            let container = win.document()?.get_element_by_id(CHART_CONTAINER_ID)?;
            let payload = serde_json::to_string(option).ok()?;
            let option_js = JSON::parse(&payload).ok()?;

            // The widget script comes from a CDN; if it failed to load,
            // skip the chart like any other absence condition.
            let chart = echarts_init(&container).ok()?;
            chart.set_option(&option_js);

            let resize_listener = {
                let chart = chart.clone();
                Closure::<dyn FnMut()>::new(move || chart.resize())
            };
            if win
                .add_event_listener_with_callback(
                    "resize",
                    resize_listener.as_ref().unchecked_ref(),
                )
                .is_err()
            {
                chart.dispose();
                return None;
            }

            Some(EchartsHandle { chart, resize_listener })
        }

        fn release(&mut self, handle: EchartsHandle) {
            if let Some(win) = window() {
                let _ = win.remove_event_listener_with_callback(
                    "resize",
                    handle.resize_listener.as_ref().unchecked_ref(),
                );
            }
            handle.chart.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde_json::Value;

    use super::*;
    use crate::content::SKILL_RATINGS;

    fn option_value(theme: Theme) -> Value {
        serde_json::to_value(radar_option(theme)).unwrap()
    }

    #[test]
    fn six_indicators_with_shared_max() {
        let option = option_value(Theme::Dark);
        let indicators = option["radar"]["indicator"].as_array().unwrap();
        assert_eq!(indicators.len(), 6);
        for indicator in indicators {
            assert_eq!(indicator["max"], 100);
        }
    }

    #[test]
    fn series_carries_the_ratings_in_axis_order() {
        let option = option_value(Theme::Light);
        let values = option["series"][0]["data"][0]["value"].as_array().unwrap();
        let expected: Vec<u64> = SKILL_RATINGS.iter().map(|s| u64::from(s.rating)).collect();
        let actual: Vec<u64> = values.iter().map(|v| v.as_u64().unwrap()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn themes_restyle_but_keep_data() {
        let dark = option_value(Theme::Dark);
        let light = option_value(Theme::Light);
        assert_ne!(dark["radar"]["axisName"]["color"], light["radar"]["axisName"]["color"]);
        assert_ne!(
            dark["series"][0]["data"][0]["areaStyle"]["color"],
            light["series"][0]["data"][0]["areaStyle"]["color"]
        );
        assert_eq!(
            dark["series"][0]["data"][0]["value"],
            light["series"][0]["data"][0]["value"]
        );
    }

    #[test]
    fn widget_animation_is_disabled() {
        assert_eq!(option_value(Theme::Dark)["animation"], Value::Bool(false));
    }

    #[derive(Default)]
    struct HostStats {
        acquired: usize,
        live_instances: usize,
        resize_listeners: usize,
        container_present: bool,
    }

    struct MockHost {
        stats: Rc<RefCell<HostStats>>,
    }

    impl ChartHost for MockHost {
        type Handle = ();

        fn acquire(&mut self, _option: &RadarOption) -> Option<()> {
            let mut stats = self.stats.borrow_mut();
            if !stats.container_present {
                return None;
            }
            stats.acquired += 1;
            stats.live_instances += 1;
            stats.resize_listeners += 1;
            Some(())
        }

        fn release(&mut self, _handle: ()) {
            let mut stats = self.stats.borrow_mut();
            stats.live_instances -= 1;
            stats.resize_listeners -= 1;
        }
    }

    fn mock_lifecycle(container_present: bool) -> (ChartLifecycle<MockHost>, Rc<RefCell<HostStats>>) {
        let stats = Rc::new(RefCell::new(HostStats {
            container_present,
            ..HostStats::default()
        }));
        let lifecycle = ChartLifecycle::new(MockHost { stats: stats.clone() });
        (lifecycle, stats)
    }

    #[test]
    fn theme_change_swaps_exactly_one_instance() {
        let (mut lifecycle, stats) = mock_lifecycle(true);
        let mut theme = Theme::Dark;
        lifecycle.activate(theme);

        for _ in 0..5 {
            theme = theme.toggled();
            lifecycle.activate(theme);
        }

        let stats = stats.borrow();
        assert_eq!(stats.acquired, 6);
        assert_eq!(stats.live_instances, 1);
        // No duplicate resize listeners accumulate across toggles.
        assert_eq!(stats.resize_listeners, 1);
    }

    #[test]
    fn release_runs_on_drop() {
        let (mut lifecycle, stats) = mock_lifecycle(true);
        lifecycle.activate(Theme::Dark);
        assert!(lifecycle.is_active());
        drop(lifecycle);

        let stats = stats.borrow();
        assert_eq!(stats.live_instances, 0);
        assert_eq!(stats.resize_listeners, 0);
    }

    #[test]
    fn missing_container_skips_initialization() {
        let (mut lifecycle, stats) = mock_lifecycle(false);
        lifecycle.activate(Theme::Dark);
        assert!(!lifecycle.is_active());
        assert_eq!(stats.borrow().acquired, 0);

        // Release with nothing held is a no-op.
        lifecycle.release();
        lifecycle.release();
    }
}
