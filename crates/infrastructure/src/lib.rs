//! dnsnative infrastructure: resolver adapters behind the `HostResolver` port
pub mod dns;
pub mod system;
