use super::*;

fn records(samples: &[f64]) -> Vec<String> {
    samples.iter().map(|s| s.to_string()).collect()
}

fn job(window_length: f64) -> MovingAverageJob {
    MovingAverageJob::new(WindowConfig::new(window_length).unwrap())
}

#[test]
fn test_window_three_scenario() {
    let results = job(3.0)
        .execute_with_parallelism(records(&[3.0, 6.0, 9.0, 12.0, 15.0]), 2)
        .unwrap();

    let expected: BTreeMap<WindowKey, String> = [
        (1, "6.0".to_string()),
        (2, "9.0".to_string()),
        (3, "12.0".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(results, expected);
}

#[test]
fn test_short_stream_yields_empty_result() {
    let results = job(4.0)
        .execute_with_parallelism(records(&[1.0, 2.0]), 2)
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_malformed_record_aborts_job() {
    let mut input = records(&[1.0, 2.0, 3.0]);
    input.insert(2, "abc".to_string());
    let err = job(2.0).execute_with_parallelism(input, 2).unwrap_err();
    assert!(err.to_string().contains("abc"), "unexpected error: {err}");
}

#[test]
fn test_single_worker_matches_many_workers() {
    let samples: Vec<f64> = (0..50).map(|i| (i * 7 % 13) as f64).collect();
    let one = job(5.0)
        .execute_with_parallelism(records(&samples), 1)
        .unwrap();
    let four = job(5.0)
        .execute_with_parallelism(records(&samples), 4)
        .unwrap();
    assert_eq!(one, four);
    assert_eq!(one.len(), 50 - 5 + 1);
}

#[test]
fn test_zero_parallelism_is_rejected() {
    assert!(job(3.0)
        .execute_with_parallelism(records(&[1.0]), 0)
        .is_err());
}

#[test]
fn test_averages_match_naive_moving_average() {
    let mut state = 42u64;
    let mut samples = Vec::with_capacity(200);
    for _ in 0..200 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        samples.push((state % 1000) as f64 / 10.0);
    }

    let w = 8usize;
    let results = job(w as f64)
        .execute_with_parallelism(records(&samples), 3)
        .unwrap();
    assert_eq!(results.len(), samples.len() - w + 1);

    let start_key = w as WindowKey / 2;
    for (i, window) in samples.windows(w).enumerate() {
        let naive = window.iter().sum::<f64>() / w as f64;
        let got: f64 = results[&(start_key + i as WindowKey)].parse().unwrap();
        assert!(
            (got - naive).abs() < 1e-9,
            "window {i}: got {got}, naive {naive}"
        );
    }
}
