use crate::error::ApiError;
use crate::formatter::{format_chart_label, format_tooltip};
use crate::ChartSeries;

/// Visual state of the balance chart region.
///
/// Every refresh starts from `Loading` and settles in exactly one of the
/// other three states.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ChartView {
    #[default]
    Loading,
    /// Request succeeded but there is nothing to plot yet
    Empty,
    Populated(ChartPlot),
    /// Request failed; carries the error for logging
    Error(String),
}

/// Which parts of the chart region are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartVisibility {
    pub loading_indicator: bool,
    pub surface: bool,
    pub empty_message: bool,
    pub error_panel: bool,
}

impl ChartView {
    /// Settle the state machine from the outcome of a chart data fetch
    pub fn from_fetch(result: Result<ChartSeries, ApiError>) -> Self {
        // No labels means nothing to plot, whatever `data` holds
        match result {
            Err(e) => ChartView::Error(e.to_string()),
            Ok(series) if series.is_empty() => ChartView::Empty,
            Ok(series) => match series.validated() {
                Ok(series) => ChartView::Populated(ChartPlot::from_series(&series)),
                Err(e) => ChartView::Error(e.to_string()),
            },
        }
    }

    pub fn visibility(&self) -> ChartVisibility {
        ChartVisibility {
            loading_indicator: matches!(self, ChartView::Loading),
            surface: matches!(self, ChartView::Populated(_)),
            empty_message: matches!(self, ChartView::Empty),
            error_panel: matches!(self, ChartView::Error(_)),
        }
    }

    pub fn plot(&self) -> Option<&ChartPlot> {
        match self {
            ChartView::Populated(plot) => Some(plot),
            _ => None,
        }
    }
}

/// Display-ready series: short date labels paired with raw balances
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlot {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartPlot {
    pub fn from_series(series: &ChartSeries) -> Self {
        Self {
            labels: series.labels.iter().map(|l| format_chart_label(l)).collect(),
            values: series.data.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Value axis bounds. Always includes zero, with 10% headroom.
    pub fn y_range(&self) -> (f64, f64) {
        let max = self.values.iter().copied().fold(0.0_f64, f64::max);
        let min = self.values.iter().copied().fold(0.0_f64, f64::min);
        let span = (max - min).max(1.0);
        let lower = if min < 0.0 { min - span * 0.1 } else { 0.0 };
        (lower, max + span * 0.1)
    }

    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.values.get(index).map(|v| format_tooltip(*v))
    }
}

/// Pixel layout of the canvas chart.
///
/// The x axis is a category axis laid out over `-1..=len`, so the points
/// sit at integer positions with half-slot padding at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartGeometry {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
}

impl ChartGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: 15,
            x_label_area: 45,
            y_label_area: 70,
        }
    }

    pub fn plot_left(&self) -> f64 {
        f64::from(self.margin + self.y_label_area)
    }

    pub fn plot_width(&self) -> f64 {
        (f64::from(self.width) - self.plot_left() - f64::from(self.margin)).max(1.0)
    }

    /// Horizontal pixel position of point `index` out of `count`
    pub fn x_position(&self, index: usize, count: usize) -> f64 {
        let slots = (count + 1) as f64;
        self.plot_left() + (index as f64 + 1.0) / slots * self.plot_width()
    }

    /// Point closest to a pointer at `x` (canvas pixels), if over the plot
    pub fn nearest_index(&self, x: f64, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let left = self.plot_left();
        if x < left || x > left + self.plot_width() {
            return None;
        }
        let slots = (count + 1) as f64;
        let position = ((x - left) / self.plot_width() * slots).round() - 1.0;
        Some(position.clamp(0.0, (count - 1) as f64) as usize)
    }
}

/// A rendered chart that holds on to browser resources until disposed
pub trait ChartWidget {
    fn dispose(&mut self);
}

/// Owner of the single live chart widget.
///
/// Installing a widget disposes whatever was there before, so repeated
/// refreshes never stack canvases.
#[derive(Debug)]
pub struct WidgetSlot<W: ChartWidget> {
    current: Option<W>,
}

impl<W: ChartWidget> WidgetSlot<W> {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn install(&mut self, widget: W) -> &mut W {
        self.clear();
        self.current.insert(widget)
    }

    /// Dispose the live widget first, then build and install its
    /// replacement. Widgets sharing a canvas rely on this ordering.
    pub fn replace_with<E>(&mut self, build: impl FnOnce() -> Result<W, E>) -> Result<&mut W, E> {
        self.clear();
        let widget = build()?;
        Ok(self.install(widget))
    }

    pub fn clear(&mut self) {
        if let Some(mut previous) = self.current.take() {
            previous.dispose();
        }
    }

    pub fn current(&self) -> Option<&W> {
        self.current.as_ref()
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }
}

impl<W: ChartWidget> Default for WidgetSlot<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: ChartWidget> Drop for WidgetSlot<W> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn series(labels: &[&str], data: &[f64]) -> ChartSeries {
        ChartSeries {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            data: data.to_vec(),
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let view = ChartView::default();
        let visibility = view.visibility();
        assert!(visibility.loading_indicator);
        assert!(!visibility.surface);
        assert!(!visibility.empty_message);
        assert!(!visibility.error_panel);
    }

    #[test]
    fn test_empty_labels_reach_empty_state() {
        let view = ChartView::from_fetch(Ok(series(&[], &[])));
        assert_eq!(view, ChartView::Empty);
        let visibility = view.visibility();
        assert!(!visibility.surface);
        assert!(!visibility.loading_indicator);
        assert!(visibility.empty_message);
    }

    #[test]
    fn test_missing_labels_reach_empty_state_despite_data() {
        let fetched: ChartSeries = serde_json::from_str(r#"{"data": [5.0]}"#).unwrap();
        assert_eq!(ChartView::from_fetch(Ok(fetched)), ChartView::Empty);

        let fetched = series(&[], &[1.0, 2.0]);
        assert_eq!(ChartView::from_fetch(Ok(fetched)), ChartView::Empty);
    }

    #[test]
    fn test_null_series_reaches_empty_state() {
        let fetched: ChartSeries = serde_json::from_str(r#"{"labels": null, "data": null}"#).unwrap();
        let view = ChartView::from_fetch(Ok(fetched));
        assert_eq!(view, ChartView::Empty);
        assert!(view.visibility().empty_message);
        assert!(!view.visibility().error_panel);
    }

    #[test]
    fn test_single_point_reaches_populated_state() {
        let view = ChartView::from_fetch(Ok(series(&["2024-01-05"], &[100.5])));
        let plot = view.plot().expect("populated");
        assert_eq!(plot.len(), 1);
        assert_eq!(plot.label(0), Some("Jan 5"));
        assert_eq!(plot.values[0], 100.5);
        assert!(view.visibility().surface);
        assert!(!view.visibility().loading_indicator);
    }

    #[test]
    fn test_transport_failure_reaches_error_state() {
        let view = ChartView::from_fetch(Err(ApiError::Network("offline".to_string())));
        assert!(matches!(view, ChartView::Error(_)));
        let visibility = view.visibility();
        assert!(!visibility.loading_indicator);
        assert!(!visibility.surface);
        assert!(visibility.error_panel);
    }

    #[test]
    fn test_mismatched_series_reaches_error_state() {
        let view = ChartView::from_fetch(Ok(series(&["2024-01-05", "2024-01-06"], &[1.0])));
        assert!(matches!(view, ChartView::Error(_)));
    }

    #[test]
    fn test_y_range_starts_at_zero() {
        let plot = ChartPlot::from_series(&series(&["2024-01-05", "2024-01-06"], &[50.0, 150.0]));
        let (low, high) = plot.y_range();
        assert_eq!(low, 0.0);
        assert!(high > 150.0);
    }

    #[test]
    fn test_y_range_extends_below_zero_for_overdraft() {
        let plot = ChartPlot::from_series(&series(&["2024-01-05"], &[-20.0]));
        let (low, high) = plot.y_range();
        assert!(low < -20.0);
        assert!(high >= 0.0);
    }

    #[test]
    fn test_tooltip_for_point() {
        let plot = ChartPlot::from_series(&series(&["2024-01-05"], &[123.45]));
        assert_eq!(plot.tooltip(0).as_deref(), Some("Balance: $123.45"));
        assert_eq!(plot.tooltip(1), None);
    }

    #[test]
    fn test_nearest_index_round_trips_point_positions() {
        let geometry = ChartGeometry::new(800, 350);
        for count in [1usize, 2, 7, 30] {
            for index in 0..count {
                let x = geometry.x_position(index, count);
                assert_eq!(geometry.nearest_index(x, count), Some(index));
            }
        }
    }

    #[test]
    fn test_nearest_index_outside_plot() {
        let geometry = ChartGeometry::new(800, 350);
        assert_eq!(geometry.nearest_index(10.0, 5), None);
        assert_eq!(geometry.nearest_index(799.0, 5), None);
        assert_eq!(geometry.nearest_index(400.0, 0), None);
    }

    struct CountingWidget {
        id: u32,
        disposed: Rc<RefCell<Vec<u32>>>,
    }

    impl ChartWidget for CountingWidget {
        fn dispose(&mut self) {
            self.disposed.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn test_install_disposes_previous_widget_once() {
        let disposed = Rc::new(RefCell::new(Vec::new()));
        let mut slot = WidgetSlot::new();

        slot.install(CountingWidget { id: 1, disposed: disposed.clone() });
        assert!(disposed.borrow().is_empty());

        slot.install(CountingWidget { id: 2, disposed: disposed.clone() });
        slot.install(CountingWidget { id: 3, disposed: disposed.clone() });
        assert_eq!(*disposed.borrow(), vec![1, 2]);
        assert_eq!(slot.current().map(|w| w.id), Some(3));
    }

    #[test]
    fn test_replace_with_disposes_before_building() {
        let disposed = Rc::new(RefCell::new(Vec::new()));
        let mut slot = WidgetSlot::new();
        slot.install(CountingWidget { id: 1, disposed: disposed.clone() });

        let seen_at_build = disposed.clone();
        let result: Result<&mut CountingWidget, ()> = slot.replace_with(|| {
            assert_eq!(*seen_at_build.borrow(), vec![1]);
            Ok(CountingWidget { id: 2, disposed: disposed.clone() })
        });
        assert_eq!(result.map(|w| w.id), Ok(2));

        let failed: Result<&mut CountingWidget, &str> = slot.replace_with(|| Err("no canvas"));
        assert!(failed.is_err());
        assert!(!slot.is_live());
        assert_eq!(*disposed.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_clear_and_drop_dispose_live_widget() {
        let disposed = Rc::new(RefCell::new(Vec::new()));
        let mut slot = WidgetSlot::new();
        slot.install(CountingWidget { id: 1, disposed: disposed.clone() });
        slot.clear();
        assert!(!slot.is_live());
        slot.clear();
        assert_eq!(*disposed.borrow(), vec![1]);

        slot.install(CountingWidget { id: 2, disposed: disposed.clone() });
        drop(slot);
        assert_eq!(*disposed.borrow(), vec![1, 2]);
    }
}
