use chrono::TimeDelta;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Population variance (divides by `n`, not `n - 1`).
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0_f64;
    }

    let mu = mean(values);
    values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / values.len() as f64
}

pub fn round_tenths(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub fn mean_deltas(durations: &[TimeDelta]) -> TimeDelta {
    if durations.is_empty() {
        TimeDelta::default()
    } else {
        durations.iter().sum::<TimeDelta>() / durations.len() as i32
    }
}

pub fn std_dev_delta(durations: &[TimeDelta], mean: TimeDelta) -> TimeDelta {
    if durations.is_empty() {
        TimeDelta::default()
    } else {
        let variance = durations
            .iter()
            .map(|x| (*x - mean).num_seconds().pow(2))
            .sum::<i64>()
            / durations.len() as i64;

        TimeDelta::seconds(variance.isqrt())
    }
}
