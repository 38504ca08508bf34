use serde::{Deserialize, Serialize};

/// Descriptive statistics for a sample. Fields are `None` when the sample is
/// too small to define them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Sample standard deviation (n - 1 denominator); needs two values.
    pub std_dev: Option<f64>,
}

/// Compute mean, median and sample standard deviation.
pub fn calculate_statistics(data: &[f64]) -> Result<Statistics, StatisticsError> {
    if let Some(position) = data.iter().position(|v| !v.is_finite()) {
        return Err(StatisticsError::NonFinite { position });
    }
    if data.is_empty() {
        return Ok(Statistics::default());
    }

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let std_dev = (data.len() > 1).then(|| {
        let squares: f64 = data.iter().map(|v| (v - mean).powi(2)).sum();
        (squares / (n - 1.0)).sqrt()
    });

    Ok(Statistics {
        mean: Some(mean),
        median: Some(median),
        std_dev,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatisticsError {
    NonFinite { position: usize },
}

impl std::fmt::Display for StatisticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatisticsError::NonFinite { position } => {
                write!(f, "value at position {} is not a finite number", position)
            }
        }
    }
}

impl std::error::Error for StatisticsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64, tolerance: f64) {
        let actual = actual.expect("value should be present");
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {} to be within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_statistics_with_multiple_elements() {
        let stats = calculate_statistics(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_close(stats.mean, 3.0, 1e-9);
        assert_close(stats.median, 3.0, 1e-9);
        assert_close(stats.std_dev, 1.58, 0.005);
    }

    #[test]
    fn test_statistics_with_one_element() {
        let stats = calculate_statistics(&[42.0]).unwrap();
        assert_eq!(stats.mean, Some(42.0));
        assert_eq!(stats.median, Some(42.0));
        assert_eq!(stats.std_dev, None);
    }

    #[test]
    fn test_statistics_with_empty_list() {
        let stats = calculate_statistics(&[]).unwrap();
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn test_statistics_with_negative_numbers() {
        let stats = calculate_statistics(&[-1.0, -2.0, -3.0, -4.0, -5.0]).unwrap();
        assert_close(stats.mean, -3.0, 1e-9);
        assert_close(stats.median, -3.0, 1e-9);
        assert_close(stats.std_dev, 1.58, 0.005);
    }

    #[test]
    fn test_statistics_with_mixed_numbers() {
        let stats = calculate_statistics(&[1.0, -1.0, 0.0, 2.0, -2.0]).unwrap();
        assert_close(stats.mean, 0.0, 1e-9);
        assert_close(stats.median, 0.0, 1e-9);
        assert_close(stats.std_dev, 1.58, 0.005);
    }

    #[test]
    fn test_median_of_even_length() {
        let stats = calculate_statistics(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_close(stats.median, 2.5, 1e-9);
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        assert_eq!(
            calculate_statistics(&[1.0, f64::NAN]),
            Err(StatisticsError::NonFinite { position: 1 })
        );
        assert!(calculate_statistics(&[f64::INFINITY]).is_err());
    }
}
