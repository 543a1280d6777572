//! Simulated sensor readings and the efficiency comparison against the
//! forecast.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Source of uniform noise in `[0, 1)`
pub trait NoiseSource {
    fn next_unit(&mut self) -> f64;
}

/// Seedable pseudo-random noise
pub struct RandomNoise {
    rng: SmallRng,
}

impl RandomNoise {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seed from the wall clock
    pub fn from_clock() -> Self {
        let now = chrono::Utc::now();
        let seed = now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp_millis());
        Self::seeded(seed as u64)
    }
}

impl NoiseSource for RandomNoise {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays the given values, then repeats the last one
#[cfg(test)]
pub(crate) struct FixedNoise(pub Vec<f64>);

#[cfg(test)]
impl NoiseSource for FixedNoise {
    fn next_unit(&mut self) -> f64 {
        if self.0.len() > 1 {
            self.0.remove(0)
        } else {
            self.0.first().copied().unwrap_or(0.5)
        }
    }
}

/// One reading per predicted value, spread uniformly over `band` (relative
/// width) around it and never below zero
pub fn simulate_readings(predicted: &[f64], band: f64, noise: &mut impl NoiseSource) -> Vec<f64> {
    predicted
        .iter()
        .map(|&p| (p + (noise.next_unit() - 0.5) * p * band).max(0.0))
        .collect()
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    #[error("Sensor already connected")]
    AlreadyConnected,
    #[error("Please select a device and load a forecast before connecting a sensor.")]
    NoForecast,
}

impl SensorError {
    /// Whether the user has to be told about it
    pub fn is_user_facing(&self) -> bool {
        matches!(self, SensorError::NoForecast)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorStatus {
    #[default]
    Disconnected,
    Connected,
}

impl SensorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorStatus::Disconnected => "Disconnected",
            SensorStatus::Connected => "Connected",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SensorStatus::Disconnected => "disconnected",
            SensorStatus::Connected => "connected",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            SensorStatus::Disconnected => "Connect Sensor",
            SensorStatus::Connected => "Sensor Connected",
        }
    }

    pub fn is_connected(&self) -> bool {
        *self == SensorStatus::Connected
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyOutcome {
    Savings,
    Overage,
}

/// Difference of actual vs predicted totals, relative to predicted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Efficiency {
    pub percentage: f64,
    pub outcome: EfficiencyOutcome,
}

impl Efficiency {
    /// `None` when nothing was predicted
    pub fn compute(predicted: &[f64], actual: &[f64]) -> Option<Self> {
        let total_predicted: f64 = predicted.iter().sum();
        let total_actual: f64 = actual.iter().sum();
        if total_predicted == 0.0 {
            return None;
        }

        let percentage = (total_predicted - total_actual) / total_predicted * 100.0;
        let outcome = if percentage >= 0.0 {
            EfficiencyOutcome::Savings
        } else {
            EfficiencyOutcome::Overage
        };
        Some(Self {
            percentage,
            outcome,
        })
    }

    pub fn value_text(&self) -> String {
        match self.outcome {
            EfficiencyOutcome::Savings => format!("+{:.1}%", self.percentage),
            EfficiencyOutcome::Overage => format!("{:.1}%", self.percentage),
        }
    }

    pub fn message(&self) -> &'static str {
        match self.outcome {
            EfficiencyOutcome::Savings => "You're using less energy than predicted. Great job!",
            EfficiencyOutcome::Overage => "You're using more energy than predicted.",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.outcome {
            EfficiencyOutcome::Savings => "score-value saved",
            EfficiencyOutcome::Overage => "score-value wasted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_noise_bounds_are_exact() {
        let low = simulate_readings(&[2.0], 0.4, &mut FixedNoise(vec![0.0]));
        let mid = simulate_readings(&[2.0], 0.4, &mut FixedNoise(vec![0.5]));
        let high = simulate_readings(&[2.0], 0.4, &mut FixedNoise(vec![1.0]));

        assert!((low[0] - 1.6).abs() < 1e-12);
        assert_eq!(mid, vec![2.0]);
        assert!((high[0] - 2.4).abs() < 1e-12);
    }

    #[test]
    fn test_readings_never_negative() {
        let predicted = [-1.0, 0.0, 0.3, 5.0];
        let readings = simulate_readings(&predicted, 0.4, &mut FixedNoise(vec![1.0]));

        assert_eq!(readings.len(), predicted.len());
        assert!(readings.iter().all(|&r| r >= 0.0));
    }

    #[test]
    fn test_seeded_readings_in_band() {
        let predicted: Vec<f64> = (0..24).map(|h| 0.25 * h as f64).collect();
        let mut noise = RandomNoise::seeded(42);
        let readings = simulate_readings(&predicted, 0.4, &mut noise);

        assert_eq!(readings.len(), predicted.len());
        for (p, r) in predicted.iter().zip(&readings) {
            assert!(*r >= 0.0);
            assert!(*r >= p * 0.8 - 1e-12 && *r <= p * 1.2 + 1e-12);
        }
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let predicted = [1.0, 2.0, 3.0];
        let a = simulate_readings(&predicted, 0.4, &mut RandomNoise::seeded(7));
        let b = simulate_readings(&predicted, 0.4, &mut RandomNoise::seeded(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_noise_unit_range() {
        let mut noise = RandomNoise::from_clock();
        for _ in 0..1000 {
            let u = noise.next_unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_efficiency_savings() {
        let efficiency = Efficiency::compute(&[2.0, 2.0], &[1.5, 1.5]).unwrap();

        assert_eq!(efficiency.percentage, 25.0);
        assert_eq!(efficiency.outcome, EfficiencyOutcome::Savings);
        assert_eq!(efficiency.value_text(), "+25.0%");
        assert_eq!(efficiency.css_class(), "score-value saved");
    }

    #[test]
    fn test_efficiency_overage() {
        let efficiency = Efficiency::compute(&[2.0], &[2.5]).unwrap();

        assert_eq!(efficiency.percentage, -25.0);
        assert_eq!(efficiency.outcome, EfficiencyOutcome::Overage);
        assert_eq!(efficiency.value_text(), "-25.0%");
        assert_eq!(efficiency.message(), "You're using more energy than predicted.");
    }

    #[test]
    fn test_equal_totals_count_as_savings() {
        let efficiency = Efficiency::compute(&[1.0, 3.0], &[2.0, 2.0]).unwrap();

        assert_eq!(efficiency.percentage, 0.0);
        assert_eq!(efficiency.outcome, EfficiencyOutcome::Savings);
        assert_eq!(efficiency.value_text(), "+0.0%");
    }

    #[test]
    fn test_efficiency_is_deterministic() {
        let predicted = [1.2, 0.7, 3.3];
        let actual = [1.0, 0.9, 3.1];
        assert_eq!(
            Efficiency::compute(&predicted, &actual),
            Efficiency::compute(&predicted, &actual)
        );
    }

    #[test]
    fn test_zero_prediction_skips_efficiency() {
        assert!(Efficiency::compute(&[0.0, 0.0], &[1.0, 2.0]).is_none());
        assert!(Efficiency::compute(&[], &[]).is_none());
    }

    #[test]
    fn test_sensor_status_labels() {
        let status = SensorStatus::default();
        assert_eq!(status.as_str(), "Disconnected");
        assert_eq!(status.button_label(), "Connect Sensor");
        assert!(!status.is_connected());

        let status = SensorStatus::Connected;
        assert_eq!(status.css_class(), "connected");
        assert_eq!(status.button_label(), "Sensor Connected");
    }

    #[test]
    fn test_sensor_error_user_facing() {
        assert!(SensorError::NoForecast.is_user_facing());
        assert!(!SensorError::AlreadyConnected.is_user_facing());
    }
}
