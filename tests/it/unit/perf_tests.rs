//! Tests for the performance instrumentation utilities.

use pointer_gestures::perf::{
    is_profiling_enabled, measure, measure_and_log, set_profiling_enabled, OperationStats,
    ScopedTimer,
};

#[test]
fn test_measure_returns_result_and_elapsed() {
    let (value, elapsed_ms) = measure(|| "done");
    assert_eq!(value, "done");
    assert!(elapsed_ms >= 0.0);
}

#[test]
fn test_measure_and_log_passes_result_through() {
    let result = measure_and_log("noop", 1_000.0, || 7);
    assert_eq!(result, 7);
}

#[test]
fn test_scoped_timer_tracks_elapsed_time() {
    let timer = ScopedTimer::new("test_op", 1_000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_profiling_can_be_toggled_at_runtime() {
    let initial = is_profiling_enabled();
    set_profiling_enabled(true);
    assert!(is_profiling_enabled());
    set_profiling_enabled(false);
    assert!(!is_profiling_enabled());
    set_profiling_enabled(initial);
}

#[test]
fn test_operation_stats_aggregate() {
    let mut stats = OperationStats::default();
    stats.record(2.0);
    stats.record(4.0);
    assert_eq!(stats.count(), 2);
    assert_eq!(stats.average(), 3.0);
    assert_eq!(stats.max_ms(), 4.0);
}
