//! dnsnative application layer: resolver port and `host` command use cases
pub mod ports;
pub mod use_cases;
