//! Integration tests for membership anomaly detection

use anomaly_facade::prelude::*;
use anomaly_facade::{detect, detect_multi_metric, early_warnings};

fn quiet_year() -> Vec<TimePoint> {
    [12.0, 11.0, 13.0, 12.0, 12.0, 11.0, 13.0, 12.0, 11.0, 13.0, 12.0, 12.0]
        .iter()
        .enumerate()
        .map(|(i, &v)| TimePoint::new(2024, i as u32 + 1, v))
        .collect()
}

fn with_spike(month: u32, value: f64) -> Vec<TimePoint> {
    let mut series = quiet_year();
    series[(month - 1) as usize].value = value;
    series
}

#[test]
fn test_constant_series_yields_no_anomalies() {
    let series = vec![
        TimePoint::new(2025, 1, 10.0),
        TimePoint::new(2025, 2, 10.0),
        TimePoint::new(2025, 3, 10.0),
        TimePoint::new(2025, 4, 10.0),
    ];
    let result = detect(&series, 2.0, None);
    assert!(result.anomalies.is_empty());
    assert_eq!(result.std_dev, 0.0);
}

#[test]
fn test_fewer_than_three_points() {
    let series = vec![TimePoint::new(2025, 1, 1.0), TimePoint::new(2025, 2, 90.0)];
    let result = detect(&series, 2.0, None);
    assert!(result.anomalies.is_empty());
    assert_eq!(result.mean, 0.0);
    assert_eq!(result.std_dev, 0.0);
    assert_eq!(result.threshold, 2.0);
}

#[test]
fn test_quiet_year_has_no_false_positives() {
    assert!(!detect(&quiet_year(), 2.0, None).has_anomalies());
}

#[test]
fn test_spike_in_quiet_year() {
    let result = detect(&with_spike(6, 45.0), 2.0, Some("New members"));
    assert_eq!(result.anomaly_count(), 1);

    let anomaly = &result.anomalies[0];
    assert_eq!((anomaly.year, anomaly.month), (2024, 6));
    assert_eq!(anomaly.direction, AnomalyDirection::Spike);
    assert!(anomaly.severity >= AnomalySeverity::High);
    assert!(anomaly.message.starts_with("New members in 2024-06:"));
    assert!(anomaly.message.ends_with("above average"));
}

#[test]
fn test_stricter_threshold_flags_fewer() {
    let mut series = with_spike(3, 30.0);
    series[9].value = 0.0;

    let lenient = detect(&series, 1.5, None).anomaly_count();
    let default = detect(&series, 2.0, None).anomaly_count();
    let strict = detect(&series, 4.0, None).anomaly_count();
    assert!(lenient >= default);
    assert!(default >= strict);
}

#[test]
fn test_detection_is_order_independent() {
    let series = with_spike(9, 40.0);
    let mut reversed = series.clone();
    reversed.reverse();
    assert_eq!(detect(&series, 2.0, None), detect(&reversed, 2.0, None));
}

#[test]
fn test_multi_metric_merge_is_descending() {
    let rows: Vec<MonthlyEventCounts> = (1..=12)
        .map(|m| {
            let new = if m == 2 { 60.0 } else { 12.0 };
            let resigned = if m == 11 { 25.0 } else { 3.0 };
            let expelled = if m == 6 { 9.0 } else { 0.0 };
            MonthlyEventCounts::new(2024, m, new, resigned, expelled)
        })
        .collect();

    let result = detect_multi_metric(&rows, 2.0);
    let months: Vec<u32> = result.all_anomalies.iter().map(|a| a.month).collect();
    assert_eq!(months, vec![11, 6, 2]);

    for pair in result.all_anomalies.windows(2) {
        assert!((pair[0].year, pair[0].month) >= (pair[1].year, pair[1].month));
    }
}

#[test]
fn test_early_warning_asymmetry() {
    let rows = vec![
        MonthlyEventCounts::new(2025, 1, 10.0, 2.0, 0.0),
        MonthlyEventCounts::new(2025, 2, 7.0, 3.0, 0.0),
        MonthlyEventCounts::new(2025, 3, 3.0, 6.0, 0.0),
    ];
    let warnings = early_warnings(&rows);
    assert_eq!(warnings.len(), 2);

    let resignation = &warnings[0];
    assert_eq!(resignation.kind, WarningKind::ResignationTrend);
    assert_eq!(resignation.severity, WarningSeverity::Critical);
    assert_eq!(resignation.percent_change, 200.0);

    let decline = &warnings[1];
    assert_eq!(decline.kind, WarningKind::MembershipDecline);
    assert_eq!(decline.severity, WarningSeverity::Critical);
    assert_eq!(decline.percent_change, -70.0);
}

#[test]
fn test_custom_detector_through_trait_object() {
    let detector: Box<dyn AnomalyDetector> = Box::new(ZScoreDetector::from_config(&ZScoreConfig::default()));
    let result = detector.detect(&with_spike(1, 50.0), None);
    assert_eq!(detector.threshold(), 2.0);
    assert_eq!(result.anomaly_count(), 1);
}
