//! Forecast line chart rendered as inline SVG

use leptos::*;

use crate::state::chart::{ChartState, Dataset};

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 320.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 20.0;
const Y_TICKS: usize = 5;
const MAX_X_LABELS: usize = 12;

/// Maps data coordinates to SVG coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scale {
    points: usize,
    y_max: f64,
}

impl Scale {
    fn new(chart: &ChartState) -> Self {
        Self {
            points: chart.labels.len(),
            y_max: nice_ceiling(chart.max_value()),
        }
    }

    fn inner_width() -> f64 {
        CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn inner_height() -> f64 {
        CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn baseline() -> f64 {
        MARGIN_TOP + Self::inner_height()
    }

    fn x(&self, index: usize) -> f64 {
        if self.points <= 1 {
            return MARGIN_LEFT + Self::inner_width() / 2.0;
        }
        MARGIN_LEFT + index as f64 / (self.points - 1) as f64 * Self::inner_width()
    }

    /// Y axis always starts at zero
    fn y(&self, value: f64) -> f64 {
        Self::baseline() - (value.max(0.0) / self.y_max) * Self::inner_height()
    }

    /// Tick values from zero to `y_max`
    fn y_ticks(&self) -> Vec<f64> {
        (0..=Y_TICKS)
            .map(|i| self.y_max * i as f64 / Y_TICKS as f64)
            .collect()
    }
}

/// Round an axis maximum up to 1, 2, 2.5 or 5 times a power of ten
fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|step| normalized <= *step)
        .unwrap_or(10.0);
    step * magnitude
}

fn line_path(scale: &Scale, data: &[f64]) -> String {
    let mut path = String::new();
    for (i, &value) in data.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{} {:.1} {:.1} ", command, scale.x(i), scale.y(value)));
    }
    path.trim_end().to_string()
}

/// Line path closed down to the baseline
fn area_path(scale: &Scale, data: &[f64]) -> String {
    if data.is_empty() {
        return String::new();
    }
    format!(
        "{} L {:.1} {:.1} L {:.1} {:.1} Z",
        line_path(scale, data),
        scale.x(data.len() - 1),
        Scale::baseline(),
        scale.x(0),
        Scale::baseline()
    )
}

/// Show at most `MAX_X_LABELS` hour labels
fn label_step(count: usize) -> usize {
    count.div_ceil(MAX_X_LABELS).max(1)
}

#[component]
pub fn ForecastChart(#[prop(into)] chart: Signal<ChartState>) -> impl IntoView {
    view! {
        <div class="card chart-card">
            <h3>"Today's Hourly Forecast"</h3>
            {move || chart.with(|chart| render_chart(chart))}
        </div>
    }
}

fn render_chart(chart: &ChartState) -> View {
    let scale = Scale::new(chart);
    let options = chart.options.clone();

    let legend = options.legend.then(|| {
        chart
            .datasets
            .iter()
            .map(|dataset| {
                let style = dataset.style();
                view! {
                    <span class="legend-item" style:color=options.legend_color>
                        <span
                            class="legend-swatch"
                            style:background-color=style.border_color
                        ></span>
                        {dataset.label.clone()}
                    </span>
                }
            })
            .collect_view()
    });

    let y_grid = scale
        .y_ticks()
        .into_iter()
        .map(|tick| {
            let y = scale.y(tick);
            view! {
                <g class="y-tick">
                    <line
                        x1=MARGIN_LEFT x2={CHART_WIDTH - MARGIN_RIGHT} y1=y y2=y
                        stroke=options.y_grid_color
                    />
                    <text
                        x={MARGIN_LEFT - 8.0} y={y + 4.0}
                        text-anchor="end" font-weight="500" fill=options.tick_color
                    >
                        {format!("{:.1}", tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let step = label_step(chart.labels.len());
    let x_labels = chart
        .labels
        .iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0)
        .map(|(i, label)| {
            let x = scale.x(i);
            view! {
                <g class="x-tick">
                    <line
                        x1=x x2=x y1=MARGIN_TOP y2={Scale::baseline()}
                        stroke=options.x_grid_color
                    />
                    <text
                        x=x y={CHART_HEIGHT - MARGIN_BOTTOM / 2.0}
                        text-anchor="middle" font-weight="500" fill=options.tick_color
                    >
                        {label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let series = chart
        .datasets
        .iter()
        .map(|dataset| render_dataset(&scale, dataset))
        .collect_view();

    let annotation = chart.current_time_index().map(|index| {
        let x = scale.x(index);
        view! {
            <g class="current-time">
                <line
                    x1=x x2=x y1=MARGIN_TOP y2={Scale::baseline()}
                    stroke=options.annotation_color stroke-width="2" stroke-dasharray="6 6"
                />
                <text
                    x=x y={MARGIN_TOP - 8.0}
                    text-anchor="middle" font-weight="bold" fill=options.annotation_color
                >
                    {options.annotation_label}
                </text>
            </g>
        }
    });

    let summary = chart.summary().map(|summary| {
        view! {
            <div class="chart-summary">
                {format!(
                    "Total: {:.2} kWh | Peak: {} ({:.2} kW)",
                    summary.total_kwh, summary.peak_label, summary.peak_kw
                )}
            </div>
        }
    });

    view! {
        <div class="chart-legend">{legend}</div>
        <svg
            id="forecastChart"
            class="forecast-chart"
            viewBox={format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)}
            preserveAspectRatio="none"
            width="100%"
        >
            {y_grid}
            {x_labels}
            {series}
            {annotation}
        </svg>
        {summary}
    }
    .into_view()
}

fn render_dataset(scale: &Scale, dataset: &Dataset) -> View {
    let style = dataset.style();
    let fill = style.fill_color.map(|color| {
        view! { <path d={area_path(scale, &dataset.data)} fill=color stroke="none" /> }
    });

    view! {
        <g class="dataset">
            {fill}
            <path
                d={line_path(scale, &dataset.data)}
                fill="none"
                stroke=style.border_color
                stroke-width=style.border_width
                stroke-linejoin="round"
            />
        </g>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HourlyForecast;
    use pretty_assertions::assert_eq;

    fn chart_with(predictions: &[f64]) -> ChartState {
        let mut chart = ChartState::new(0);
        chart.show_forecast(
            "Fridge [kW]",
            HourlyForecast {
                hours: (0..predictions.len()).map(|h| format!("{:02}:00", h)).collect(),
                predictions: predictions.to_vec(),
            },
            0,
        );
        chart
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(-3.0), 1.0);
        assert_eq!(nice_ceiling(0.83), 1.0);
        assert_eq!(nice_ceiling(1.3), 2.0);
        assert_eq!(nice_ceiling(2.2), 2.5);
        assert_eq!(nice_ceiling(4.1), 5.0);
        assert_eq!(nice_ceiling(7.0), 10.0);
        assert_eq!(nice_ceiling(42.0), 50.0);
    }

    #[test]
    fn test_scale_starts_at_zero() {
        let scale = Scale::new(&chart_with(&[1.0, 2.0]));

        assert_eq!(scale.y_max, 2.0);
        assert_eq!(scale.y(0.0), Scale::baseline());
        assert_eq!(scale.y(2.0), MARGIN_TOP);
        assert_eq!(scale.y_ticks().first(), Some(&0.0));
        assert_eq!(scale.y_ticks().last(), Some(&2.0));
    }

    #[test]
    fn test_x_spans_inner_width() {
        let scale = Scale::new(&chart_with(&[1.0, 2.0, 3.0]));

        assert_eq!(scale.x(0), MARGIN_LEFT);
        assert_eq!(scale.x(2), CHART_WIDTH - MARGIN_RIGHT);
    }

    #[test]
    fn test_single_point_is_centered() {
        let scale = Scale::new(&chart_with(&[1.0]));
        assert_eq!(scale.x(0), MARGIN_LEFT + Scale::inner_width() / 2.0);
    }

    #[test]
    fn test_line_path() {
        let scale = Scale::new(&chart_with(&[0.0, 2.0]));
        let path = line_path(&scale, &[0.0, 2.0]);

        assert_eq!(path, "M 56.0 280.0 L 780.0 30.0");
    }

    #[test]
    fn test_area_path_closes_at_baseline() {
        let scale = Scale::new(&chart_with(&[1.0, 2.0]));
        let path = area_path(&scale, &[1.0, 2.0]);

        assert!(path.starts_with("M 56.0"));
        assert!(path.ends_with("L 56.0 280.0 Z"));
        assert_eq!(area_path(&scale, &[]), "");
    }

    #[test]
    fn test_label_step() {
        assert_eq!(label_step(0), 1);
        assert_eq!(label_step(12), 1);
        assert_eq!(label_step(24), 2);
        assert_eq!(label_step(25), 3);
    }
}
