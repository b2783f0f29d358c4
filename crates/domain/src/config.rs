pub mod errors;
pub mod logging;
pub mod reply;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use reply::{MultiAddressStyle, ReplyConfig};
pub use resolver::{ResolverBackend, ResolverConfig};
pub use root::{CliOverrides, Config};
