//! Integration tests for the high-level fitting API.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use linefit::{fit_line, FitError, FitSettings, NoopSink, Observation};

fn collinear_with_outlier() -> Vec<Observation> {
    vec![
        Observation::new(0.0, 0.0),
        Observation::new(1.0, 1.0),
        Observation::new(2.0, 2.0),
        Observation::new(10.0, -5.0),
    ]
}

#[test]
fn recovers_line_through_collinear_points() {
    let observations = collinear_with_outlier();
    let settings = FitSettings {
        workers: 1,
        ..FitSettings::with_iterations(500)
    };

    let report = fit_line(&observations, &settings, &NoopSink).unwrap();

    assert_eq!(report.inlier_count, 3);
    assert_relative_eq!(report.model.slope, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(report.model.intercept, 0.0, epsilon = 1e-9);
    assert_relative_eq!(report.summary.inlier_ratio, 0.75, epsilon = 1e-12);
    assert_relative_eq!(report.summary.outlier_ratio, 0.25, epsilon = 1e-12);
}

#[test]
fn parallel_run_matches_single_worker_consensus() {
    let observations = collinear_with_outlier();
    let settings = FitSettings {
        workers: 4,
        ..FitSettings::with_iterations(500)
    };

    let report = fit_line(&observations, &settings, &NoopSink).unwrap();

    assert_eq!(report.inlier_count, 3);
    assert_relative_eq!(report.model.slope, 1.0, epsilon = 1e-9);
}

#[test]
fn inlier_count_is_bounded_by_store_size() {
    // Noisy line y = 2x - 1 plus scattered outliers.
    let mut observations: Vec<Observation> = (0..40)
        .map(|i| {
            let x = i as f64 * 0.25;
            Observation::new(x, 2.0 * x - 1.0 + 0.001 * (i % 3) as f64)
        })
        .collect();
    for i in 0..10 {
        observations.push(Observation::new(i as f64, 50.0 - 7.0 * i as f64));
    }

    let settings = FitSettings {
        workers: 3,
        ..FitSettings::with_iterations(200)
    };
    let report = fit_line(&observations, &settings, &NoopSink).unwrap();

    assert!(report.inlier_count <= observations.len());
    assert_relative_eq!(
        report.summary.inlier_ratio + report.summary.outlier_ratio,
        1.0,
        epsilon = 1e-12
    );
}

#[test]
fn zero_iterations_is_a_configuration_error() {
    let observations = collinear_with_outlier();
    let settings = FitSettings::with_iterations(0);

    let result = fit_line(&observations, &settings, &NoopSink);
    assert!(matches!(result, Err(FitError::InvalidIterations)));
}

#[test]
fn zero_workers_is_a_configuration_error() {
    let observations = collinear_with_outlier();
    let settings = FitSettings {
        workers: 0,
        ..FitSettings::with_iterations(100)
    };

    let result = fit_line(&observations, &settings, &NoopSink);
    assert!(matches!(result, Err(FitError::InvalidWorkers)));
}

#[test]
fn too_few_observations_fails_before_running() {
    let observations = vec![Observation::new(1.0, 1.0)];
    let settings = FitSettings::with_iterations(100);

    let result = fit_line(&observations, &settings, &NoopSink);
    assert!(matches!(
        result,
        Err(FitError::TooFewObservations { n: 1 })
    ));
}

#[test]
fn shared_x_dataset_fails_instead_of_hanging() {
    let observations: Vec<Observation> =
        (0..10).map(|i| Observation::new(5.0, i as f64)).collect();
    let settings = FitSettings {
        workers: 2,
        ..FitSettings::with_iterations(50)
    };

    let result = fit_line(&observations, &settings, &NoopSink);
    assert!(matches!(result, Err(FitError::DegenerateDataset)));
}

#[test]
fn shared_x_fails_even_when_workers_outnumber_trials() {
    // With more workers than trials, every worker but the last gets an empty
    // range; those idle workers must not mask the degenerate failure of the
    // one worker that actually ran trials.
    let observations: Vec<Observation> =
        (0..10).map(|i| Observation::new(5.0, i as f64)).collect();
    let settings = FitSettings {
        workers: 8,
        ..FitSettings::with_iterations(3)
    };

    let result = fit_line(&observations, &settings, &NoopSink);
    assert!(matches!(result, Err(FitError::DegenerateDataset)));
}

#[test]
fn more_workers_than_trials_still_completes() {
    let observations = collinear_with_outlier();
    let settings = FitSettings {
        workers: 8,
        ..FitSettings::with_iterations(3)
    };

    let report = fit_line(&observations, &settings, &NoopSink).unwrap();
    assert!(report.inlier_count <= observations.len());
}
