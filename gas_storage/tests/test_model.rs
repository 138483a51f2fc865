use chrono::{Duration, NaiveDate};
use gas_storage::utils::{month_end_schedule, synthetic_observations, SyntheticSeries};
use gas_storage::{Observation, PriceCurve, PriceModel, StorageError};
use std::f64::consts::PI;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn noisy_observations() -> Vec<Observation> {
    let series = SyntheticSeries {
        noise_std: 0.2,
        seed: 7,
        ..SyntheticSeries::default()
    };
    synthetic_observations(&series).unwrap()
}

#[test]
fn test_exact_match_precedence() {
    let observations = noisy_observations();
    let start = observations[0].date;
    let model = PriceModel::fit(observations.clone(), start).unwrap();

    for obs in &observations {
        assert!(model.is_observed(obs.date));
        assert_eq!(model.estimate(obs.date).to_bits(), obs.price.to_bits());
    }

    // The fitted curve itself does not pass through noisy points
    let misses = observations
        .iter()
        .filter(|obs| model.fitted_value(obs.date) != obs.price)
        .count();
    assert!(misses > 0);
}

#[test]
fn test_unobserved_dates_use_fitted_curve() {
    let observations = noisy_observations();
    let start = observations[0].date;
    let model = PriceModel::fit(observations, start).unwrap();

    let between = date(2021, 6, 15);
    assert!(!model.is_observed(between));
    assert_eq!(model.estimate(between), model.fitted_value(between));

    let trend = model.trend();
    let seasonal = model.seasonal();
    let days = (between - start).num_days() as f64;
    let expected = seasonal.amplitude * (days * 2.0 * PI / 365.0 + seasonal.phase).sin()
        + trend.slope * days
        + trend.intercept;
    assert!((model.estimate(between) - expected).abs() < 1e-12);
}

#[test]
fn test_trend_fit_correctness() {
    let start = date(2015, 1, 1);
    let observations: Vec<Observation> = (0..50)
        .map(|i| {
            let days = i * 30;
            Observation::new(start + Duration::days(days), 2.0 * days as f64 + 10.0)
        })
        .collect();

    let model = PriceModel::fit(observations, start).unwrap();

    assert!((model.trend().slope - 2.0).abs() < 1e-9);
    assert!((model.trend().intercept - 10.0).abs() < 1e-6);
    assert!(model.seasonal().amplitude < 1e-6);
}

#[test]
fn test_seasonality_recovery() {
    let start = date(2010, 1, 1);
    let observations: Vec<Observation> = (0..365 * 10)
        .map(|d| {
            let price = 5.0 * (d as f64 * 2.0 * PI / 365.0 + 0.3).sin();
            Observation::new(start + Duration::days(d), price)
        })
        .collect();

    let model = PriceModel::fit(observations, start).unwrap();

    assert!((model.seasonal().amplitude - 5.0).abs() < 0.05);
    assert!((model.seasonal().phase - 0.3).abs() < 0.01);
    assert!(model.trend().slope.abs() < 1e-3);
}

#[test]
fn test_fit_is_idempotent() {
    let observations = noisy_observations();
    let start = observations[0].date;

    let first = PriceModel::fit(observations.clone(), start).unwrap();
    let second = PriceModel::fit(observations, start).unwrap();

    assert_eq!(first.trend().slope.to_bits(), second.trend().slope.to_bits());
    assert_eq!(
        first.trend().intercept.to_bits(),
        second.trend().intercept.to_bits()
    );
    assert_eq!(
        first.seasonal().amplitude.to_bits(),
        second.seasonal().amplitude.to_bits()
    );
    assert_eq!(
        first.seasonal().phase.to_bits(),
        second.seasonal().phase.to_bits()
    );
}

#[test]
fn test_reference_start_shifts_offsets() {
    let observations = noisy_observations();
    let start = observations[0].date;
    let earlier = start - Duration::days(100);

    let anchored = PriceModel::fit(observations.clone(), start).unwrap();
    let shifted = PriceModel::fit(observations, earlier).unwrap();

    assert_eq!(shifted.reference_start(), earlier);
    // Same slope, different intercept and phase on a moved axis
    assert!((anchored.trend().slope - shifted.trend().slope).abs() < 1e-12);
    assert!((anchored.trend().intercept - shifted.trend().intercept).abs() > 1e-6);
}

#[test]
fn test_single_observation_is_degenerate() {
    let result = PriceModel::fit(vec![Observation::new(date(2021, 1, 31), 10.0)], date(2021, 1, 31));
    assert!(matches!(result, Err(StorageError::DegenerateInput(_))));
}

#[test]
fn test_empty_observations_are_degenerate() {
    let result = PriceModel::fit(Vec::new(), date(2020, 10, 31));
    assert!(matches!(result, Err(StorageError::DegenerateInput(_))));
}

#[test]
fn test_trend_r_squared() {
    let start = date(2018, 1, 1);
    let observations: Vec<Observation> = (0..24)
        .map(|i| {
            let days = i * 30;
            Observation::new(start + Duration::days(days), 0.01 * days as f64 + 3.0)
        })
        .collect();
    let model = PriceModel::fit(observations, start).unwrap();
    assert!((model.trend_r_squared().unwrap() - 1.0).abs() < 1e-9);

    let noisy = PriceModel::fit(noisy_observations(), date(2020, 10, 31)).unwrap();
    let r_squared = noisy.trend_r_squared().unwrap();
    assert!(r_squared < 1.0);
}

#[test]
fn test_flat_history_has_no_r_squared() {
    let start = date(2018, 1, 1);
    let observations: Vec<Observation> = (0..24)
        .map(|i| Observation::new(start + Duration::days(i * 30), 4.0))
        .collect();
    let model = PriceModel::fit(observations, start).unwrap();
    assert!(matches!(
        model.trend_r_squared(),
        Err(StorageError::DegenerateInput(_))
    ));
}

#[test]
fn test_whole_year_spacing_is_degenerate() {
    // 2020 is a leap year: offsets are 0, 365 and 730
    let observations = vec![
        Observation::new(date(2020, 1, 1), 10.0),
        Observation::new(date(2020, 12, 31), 11.0),
        Observation::new(date(2021, 12, 31), 12.5),
    ];

    let result = PriceModel::fit(observations, date(2020, 1, 1));
    match result {
        Err(StorageError::DegenerateInput(msg)) => assert!(msg.contains("Sine")),
        other => panic!("Expected DegenerateInput, got {:?}", other),
    }
}

#[test]
fn test_unordered_observations_rejected() {
    let observations = vec![
        Observation::new(date(2021, 2, 28), 10.0),
        Observation::new(date(2021, 1, 31), 11.0),
    ];

    let result = PriceModel::fit(observations, date(2021, 1, 31));
    assert!(matches!(result, Err(StorageError::DataError(_))));
}

#[test]
fn test_extrapolation_is_always_defined() {
    let observations = noisy_observations();
    let start = observations[0].date;
    let model = PriceModel::fit(observations, start).unwrap();

    for d in [date(1990, 1, 1), date(2019, 3, 3), date(2030, 12, 25), date(2060, 7, 4)] {
        assert!(model.estimate(d).is_finite());
    }
}

#[test]
fn test_daily_curve() {
    let schedule = month_end_schedule(date(2020, 10, 31), date(2021, 12, 31)).unwrap();
    let observations: Vec<Observation> = schedule
        .iter()
        .enumerate()
        .map(|(i, d)| Observation::new(*d, 10.0 + 0.2 * i as f64 + (i % 3) as f64 * 0.1))
        .collect();
    let model = PriceModel::fit(observations, date(2020, 10, 31)).unwrap();

    let curve = model.daily_curve(date(2021, 1, 1), date(2021, 1, 31));
    assert_eq!(curve.len(), 31);
    assert_eq!(curve[0].0, date(2021, 1, 1));
    assert_eq!(curve[30].0, date(2021, 1, 31));
    assert_eq!(curve[30].1, model.estimate(date(2021, 1, 31)));

    assert!(model.daily_curve(date(2021, 2, 1), date(2021, 1, 1)).is_empty());
}

#[test]
fn test_model_name() {
    let observations = noisy_observations();
    let start = observations[0].date;
    let model = PriceModel::fit(observations, start).unwrap();
    assert_eq!(model.name(), "Seasonal Trend Model");
}
