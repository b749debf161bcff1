use yew::prelude::*;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use shared::formatter::format_axis_tick;
use shared::{ChartGeometry, ChartPlot, ChartView, ChartWidget, WidgetSlot};
use crate::services::logging::Logger;

const LINE_COLOR: RGBColor = RGBColor(75, 192, 192);

/// A balance line chart painted onto a canvas. Disposing wipes the canvas.
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
}

impl CanvasChart {
    pub fn draw(canvas: HtmlCanvasElement, plot: &ChartPlot, geometry: ChartGeometry) -> Result<Self, String> {
        canvas.set_width(geometry.width);
        canvas.set_height(geometry.height);

        let backend = CanvasBackend::with_canvas_object(canvas.clone())
            .ok_or_else(|| "canvas has no 2d context".to_string())?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let (y_min, y_max) = plot.y_range();
        let mut chart = ChartBuilder::on(&root)
            .margin(geometry.margin)
            .x_label_area_size(geometry.x_label_area)
            .y_label_area_size(geometry.y_label_area)
            .build_cartesian_2d(-1..plot.len() as i32, y_min..y_max)
            .map_err(|e| e.to_string())?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc("Total Value ($)")
            .x_labels(plot.len().min(12) + 2)
            .y_labels(8)
            .x_label_formatter(&|x| {
                usize::try_from(*x)
                    .ok()
                    .and_then(|i| plot.label(i))
                    .unwrap_or("")
                    .to_string()
            })
            .y_label_formatter(&|y| format_axis_tick(*y))
            .label_style(("sans-serif", 12))
            .axis_style(&RGBColor(200, 200, 200))
            .bold_line_style(&RGBColor(230, 230, 230))
            .light_line_style(&RGBColor(245, 245, 245))
            .draw()
            .map_err(|e| e.to_string())?;

        let points: Vec<(i32, f64)> = plot
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| (i as i32, *value))
            .collect();

        chart
            .draw_series(AreaSeries::new(points.iter().copied(), 0.0, LINE_COLOR.mix(0.1)))
            .map_err(|e| e.to_string())?;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), LINE_COLOR.stroke_width(3)))
            .map_err(|e| e.to_string())?
            .label("Account Balance")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.stroke_width(3)));

        chart
            .draw_series(points.iter().map(|&point| Circle::new(point, 5, LINE_COLOR.filled())))
            .map_err(|e| e.to_string())?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.2))
            .draw()
            .map_err(|e| e.to_string())?;

        root.present().map_err(|e| e.to_string())?;

        Ok(Self { canvas })
    }
}

impl ChartWidget for CanvasChart {
    fn dispose(&mut self) {
        let context = self
            .canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());

        if let Some(context) = context {
            context.clear_rect(
                0.0,
                0.0,
                f64::from(self.canvas.width()),
                f64::from(self.canvas.height()),
            );
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BalanceChartProps {
    pub view: ChartView,
    pub geometry: ChartGeometry,
    pub on_retry: Callback<()>,
}

pub enum Msg {
    /// Pointer moved over the canvas (viewport x coordinate)
    PointerMove(f64),
    PointerLeave,
}

pub struct BalanceChart {
    canvas_ref: NodeRef,
    widget: WidgetSlot<CanvasChart>,
    hovered: Option<usize>,
    needs_draw: bool,
}

impl Component for BalanceChart {
    type Message = Msg;
    type Properties = BalanceChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            widget: WidgetSlot::new(),
            hovered: None,
            needs_draw: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let hovered = match msg {
            Msg::PointerMove(client_x) => self.pointer_index(ctx, client_x),
            Msg::PointerLeave => None,
        };
        if hovered == self.hovered {
            return false;
        }
        self.hovered = hovered;
        true
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.view != old_props.view || props.geometry != old_props.geometry {
            self.needs_draw = true;
            self.hovered = None;
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !self.needs_draw {
            return;
        }
        self.needs_draw = false;

        // Empty/Error keep the old widget hidden until the next replacement
        if let Some(plot) = ctx.props().view.plot() {
            self.draw(plot, ctx.props().geometry);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let visibility = props.view.visibility();
        let link = ctx.link();

        let onmousemove = link.callback(|e: MouseEvent| Msg::PointerMove(f64::from(e.client_x())));
        let onmouseleave = link.callback(|_: MouseEvent| Msg::PointerLeave);
        let on_retry = {
            let on_retry = props.on_retry.clone();
            Callback::from(move |_: MouseEvent| on_retry.emit(()))
        };
        let display = |shown: bool| if shown { "display: block;" } else { "display: none;" };

        let tooltip = match (self.hovered, props.view.plot()) {
            (Some(index), Some(plot)) => match (plot.label(index), plot.tooltip(index)) {
                (Some(label), Some(text)) => {
                    let left = props.geometry.x_position(index, plot.len())
                        / f64::from(props.geometry.width)
                        * 100.0;
                    html! {
                        <div class="chart-tooltip" style={format!("left: {:.2}%;", left)}>
                            <div class="chart-tooltip-title">{label.to_string()}</div>
                            <div class="chart-tooltip-body">{text}</div>
                        </div>
                    }
                }
                _ => html! {},
            },
            _ => html! {},
        };

        html! {
            <div class="chart-card">
                <div class="chart-title-header">
                    <h3 class="chart-title">{"Balance History"}</h3>
                </div>
                <div class="chart-body" style="position: relative;">
                    if visibility.loading_indicator {
                        <div class="chart-loading">
                            <span class="loading loading-spinner"></span>
                            <p>{"Loading chart data..."}</p>
                        </div>
                    }
                    if visibility.empty_message {
                        <div class="chart-empty">
                            <i class="bi bi-graph-up chart-empty-icon"></i>
                            <p>{"No transactions yet"}</p>
                            <p class="text-sm">{"Add a deposit to start tracking your balance"}</p>
                        </div>
                    }
                    if visibility.error_panel {
                        <div class="chart-error">
                            <i class="bi bi-exclamation-triangle text-warning"></i>
                            <p class="text-lg">{"Failed to load chart"}</p>
                            <p class="text-sm">{"Please refresh the page to try again"}</p>
                            <button type="button" class="btn btn-sm" onclick={on_retry}>{"Retry"}</button>
                        </div>
                    }
                    <canvas
                        ref={self.canvas_ref.clone()}
                        class="balance-chart-canvas"
                        width={props.geometry.width.to_string()}
                        height={props.geometry.height.to_string()}
                        style={display(visibility.surface)}
                        onmousemove={onmousemove}
                        onmouseleave={onmouseleave}
                    ></canvas>
                    if visibility.surface {
                        {tooltip}
                    }
                </div>
            </div>
        }
    }
}

impl BalanceChart {
    fn draw(&mut self, plot: &ChartPlot, geometry: ChartGeometry) {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => {
                Logger::warn_with_component("chart", "Chart canvas is not mounted");
                return;
            }
        };

        if let Err(e) = self.widget.replace_with(|| CanvasChart::draw(canvas, plot, geometry)) {
            Logger::error_with_component("chart", &format!("Failed to draw chart: {}", e));
        }
    }

    fn pointer_index(&self, ctx: &Context<Self>, client_x: f64) -> Option<usize> {
        let plot = ctx.props().view.plot()?;
        let canvas = self.canvas_ref.cast::<HtmlCanvasElement>()?;
        let rect = canvas.get_bounding_client_rect();
        if rect.width() <= 0.0 {
            return None;
        }
        let x = (client_x - rect.left()) * f64::from(canvas.width()) / rect.width();
        ctx.props().geometry.nearest_index(x, plot.len())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use shared::ChartSeries;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas() -> HtmlCanvasElement {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("canvas")
            .unwrap()
            .dyn_into::<HtmlCanvasElement>()
            .unwrap()
    }

    fn plot() -> ChartPlot {
        ChartPlot::from_series(&ChartSeries {
            labels: vec!["2024-01-05".to_string(), "2024-01-06".to_string()],
            data: vec![100.5, 80.0],
        })
    }

    #[wasm_bindgen_test]
    fn test_draw_sizes_canvas() {
        let geometry = ChartGeometry::new(640, 300);
        let chart = CanvasChart::draw(canvas(), &plot(), geometry).unwrap();
        assert_eq!(chart.canvas.width(), 640);
        assert_eq!(chart.canvas.height(), 300);
    }

    #[wasm_bindgen_test]
    fn test_repeated_draws_keep_one_widget() {
        let surface = canvas();
        let geometry = ChartGeometry::new(800, 350);
        let mut slot = WidgetSlot::new();
        for _ in 0..3 {
            let target = surface.clone();
            slot.replace_with(|| CanvasChart::draw(target, &plot(), geometry)).unwrap();
        }
        assert!(slot.is_live());
        slot.clear();
        assert!(!slot.is_live());
    }
}
