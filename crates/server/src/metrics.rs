use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static BOOKING_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "moto_booking_operations_total",
        "Booking store operations by operation and outcome",
        &["op", "outcome"]
    )
    .expect("register booking_operations_total")
});

/// Count one store call; `outcome` is `ok`, `not_found`, `invalid` or `error`.
pub fn record(op: &str, outcome: &str) {
    BOOKING_OPERATIONS_TOTAL.with_label_values(&[op, outcome]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

pub async fn metrics_handler() -> (StatusCode, String) {
    encode_metrics()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_operations_show_up_in_exposition() {
        record("create", "ok");
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("moto_booking_operations_total"));
        assert!(body.contains("op=\"create\""));
    }
}
