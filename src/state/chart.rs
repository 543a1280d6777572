//! Forecast chart state: labels, datasets and the current-time marker.
//!
//! Dataset 0 is always the predicted series when present. The simulated
//! sensor series is only ever appended after it, and is dropped when a new
//! forecast replaces the whole dataset list.

use crate::models::device::strip_unit;
use crate::models::HourlyForecast;

/// Role of a dataset on the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Predicted,
    Actual,
}

/// Stroke and fill of one dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStyle {
    pub border_color: &'static str,
    pub fill_color: Option<&'static str>,
    pub border_width: f64,
}

const PREDICTED_STYLE: DatasetStyle = DatasetStyle {
    border_color: "rgba(77, 123, 255, 1)",
    fill_color: Some("rgba(77, 123, 255, 0.2)"),
    border_width: 3.0,
};

const ACTUAL_STYLE: DatasetStyle = DatasetStyle {
    border_color: "rgba(29, 233, 182, 1)",
    fill_color: None,
    border_width: 2.0,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub kind: DatasetKind,
}

impl Dataset {
    pub fn predicted(device_id: &str, data: Vec<f64>) -> Self {
        Self {
            label: format!("{} Predicted Usage (kW)", strip_unit(device_id)),
            data,
            kind: DatasetKind::Predicted,
        }
    }

    pub fn actual(data: Vec<f64>) -> Self {
        Self {
            label: "Actual Sensor Usage (kW)".to_string(),
            data,
            kind: DatasetKind::Actual,
        }
    }

    pub fn style(&self) -> DatasetStyle {
        match self.kind {
            DatasetKind::Predicted => PREDICTED_STYLE,
            DatasetKind::Actual => ACTUAL_STYLE,
        }
    }
}

/// Fixed chart configuration (light on dark)
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub begin_at_zero: bool,
    pub legend: bool,
    pub tick_color: &'static str,
    pub y_grid_color: &'static str,
    pub x_grid_color: &'static str,
    pub legend_color: &'static str,
    pub annotation_color: &'static str,
    pub annotation_label: &'static str,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            begin_at_zero: true,
            legend: true,
            tick_color: "rgba(255, 255, 255, 0.8)",
            y_grid_color: "rgba(255, 255, 255, 0.15)",
            x_grid_color: "rgba(255, 255, 255, 0.1)",
            legend_color: "rgba(255, 255, 255, 0.9)",
            annotation_color: "rgba(255, 171, 64, 1)",
            annotation_label: "Current Time",
        }
    }
}

/// Totals derived from the predicted series
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSummary {
    pub total_kwh: f64,
    pub peak_label: String,
    pub peak_kw: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    /// Hour index the current-time line is drawn at
    pub current_hour: u32,
    pub options: ChartOptions,
}

impl ChartState {
    pub fn new(current_hour: u32) -> Self {
        Self {
            labels: Vec::new(),
            datasets: Vec::new(),
            current_hour,
            options: ChartOptions::default(),
        }
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.datasets.clear();
    }

    /// Replace labels and datasets with a freshly loaded forecast
    pub fn show_forecast(&mut self, device_id: &str, forecast: HourlyForecast, current_hour: u32) {
        let forecast = if forecast.is_aligned() {
            forecast
        } else {
            log::warn!(
                "Forecast for {} has {} hours but {} predictions, truncating",
                device_id,
                forecast.hours.len(),
                forecast.predictions.len()
            );
            forecast.into_aligned()
        };

        self.labels = forecast.hours;
        self.datasets = vec![Dataset::predicted(device_id, forecast.predictions)];
        self.current_hour = current_hour;
    }

    /// The predicted series, empty when no forecast is loaded
    pub fn predicted_series(&self) -> &[f64] {
        self.datasets
            .first()
            .filter(|dataset| dataset.kind == DatasetKind::Predicted)
            .map(|dataset| dataset.data.as_slice())
            .unwrap_or(&[])
    }

    /// Overlay a simulated sensor series after the predicted one
    pub fn overlay_actual(&mut self, data: Vec<f64>) {
        self.datasets.retain(|dataset| dataset.kind != DatasetKind::Actual);
        self.datasets.push(Dataset::actual(data));
    }

    /// Index of the current-time line, if it falls on a label
    pub fn current_time_index(&self) -> Option<usize> {
        let index = self.current_hour as usize;
        (index < self.labels.len()).then_some(index)
    }

    /// Largest value across all datasets
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter().copied())
            .fold(0.0, f64::max)
    }

    pub fn summary(&self) -> Option<ForecastSummary> {
        let predicted = self.predicted_series();
        let (peak_index, peak_kw) = predicted
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, value)| match best {
                Some((_, best_value)) if best_value >= value => best,
                _ => Some((i, value)),
            })?;

        Some(ForecastSummary {
            total_kwh: predicted.iter().sum(),
            peak_label: self.labels.get(peak_index).cloned().unwrap_or_default(),
            peak_kw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn forecast(hours: &[&str], predictions: &[f64]) -> HourlyForecast {
        HourlyForecast {
            hours: hours.iter().map(|h| h.to_string()).collect(),
            predictions: predictions.to_vec(),
        }
    }

    #[test]
    fn test_new_chart_is_empty() {
        let chart = ChartState::new(9);
        assert!(chart.labels.is_empty());
        assert!(chart.datasets.is_empty());
        assert!(chart.predicted_series().is_empty());
        assert!(chart.options.begin_at_zero);
        assert!(chart.options.legend);
    }

    #[test]
    fn test_show_forecast() {
        let mut chart = ChartState::new(0);
        chart.show_forecast("Furnace 1 [kW]", forecast(&["00:00", "01:00"], &[1.0, 2.0]), 1);

        assert_eq!(chart.labels, vec!["00:00", "01:00"]);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].label, "Furnace 1 Predicted Usage (kW)");
        assert_eq!(chart.datasets[0].kind, DatasetKind::Predicted);
        assert_eq!(chart.predicted_series(), &[1.0, 2.0]);
        assert_eq!(chart.current_hour, 1);
        assert_eq!(chart.current_time_index(), Some(1));
    }

    #[test]
    fn test_show_forecast_replaces_actual_overlay() {
        let mut chart = ChartState::new(0);
        chart.show_forecast("Fridge [kW]", forecast(&["00:00"], &[1.0]), 0);
        chart.overlay_actual(vec![1.1]);
        assert_eq!(chart.datasets.len(), 2);

        chart.show_forecast("Well [kW]", forecast(&["00:00"], &[3.0]), 0);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].label, "Well Predicted Usage (kW)");
    }

    #[test]
    fn test_empty_forecast_is_valid() {
        let mut chart = ChartState::new(5);
        chart.show_forecast("Barn [kW]", HourlyForecast::default(), 5);

        assert!(chart.labels.is_empty());
        assert_eq!(chart.datasets.len(), 1);
        assert!(chart.predicted_series().is_empty());
        assert_eq!(chart.current_time_index(), None);
        assert!(chart.summary().is_none());
    }

    #[test]
    fn test_misaligned_forecast_is_truncated() {
        let mut chart = ChartState::new(0);
        chart.show_forecast("Barn [kW]", forecast(&["00:00", "01:00", "02:00"], &[1.0]), 0);

        assert_eq!(chart.labels, vec!["00:00"]);
        assert_eq!(chart.predicted_series(), &[1.0]);
    }

    #[test]
    fn test_overlay_keeps_predicted_first() {
        let mut chart = ChartState::new(0);
        chart.show_forecast("Fridge [kW]", forecast(&["00:00", "01:00"], &[1.0, 2.0]), 0);
        chart.overlay_actual(vec![0.9, 2.2]);
        chart.overlay_actual(vec![1.1, 1.8]);

        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.datasets[0].kind, DatasetKind::Predicted);
        assert_eq!(chart.datasets[1].kind, DatasetKind::Actual);
        assert_eq!(chart.datasets[1].data, vec![1.1, 1.8]);
        assert_eq!(chart.datasets[1].style().fill_color, None);
        assert_eq!(chart.max_value(), 2.0);
    }

    #[test]
    fn test_clear() {
        let mut chart = ChartState::new(0);
        chart.show_forecast("Fridge [kW]", forecast(&["00:00"], &[1.0]), 0);
        chart.clear();

        assert!(chart.labels.is_empty());
        assert!(chart.datasets.is_empty());
    }

    #[test]
    fn test_summary_picks_first_peak() {
        let mut chart = ChartState::new(0);
        chart.show_forecast(
            "House overall [kW]",
            forecast(&["12 AM", "01 AM", "02 AM", "03 AM"], &[0.5, 2.0, 2.0, 1.0]),
            0,
        );

        let summary = chart.summary().unwrap();
        assert_eq!(summary.total_kwh, 5.5);
        assert_eq!(summary.peak_label, "01 AM");
        assert_eq!(summary.peak_kw, 2.0);
    }
}
