//! Shared building blocks for the booking service crates.
//! - Logging initialisation (`utils::logging`)
//! - Small response types shared across HTTP handlers (`types`)

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }
}
