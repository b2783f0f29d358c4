//! dnsnative domain layer
pub mod address;
pub mod command;
pub mod config;
pub mod errors;
pub mod reply;

pub use address::{classify, AddressClass, LookupTarget};
pub use command::{HostCommand, HELP_TEXT};
pub use config::{
    CliOverrides, Config, ConfigError, LogFormat, LoggingConfig, MultiAddressStyle, ReplyConfig,
    ResolverBackend, ResolverConfig,
};
pub use errors::DomainError;
pub use reply::{
    dedupe_addresses, format_forward_reply, format_reverse_reply, format_unresolved,
    normalize_hostname,
};
