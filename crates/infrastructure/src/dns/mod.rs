pub mod builder;
#[cfg(feature = "hickory")]
pub mod hickory_resolver;

pub use builder::HostResolverBuilder;
#[cfg(feature = "hickory")]
pub use hickory_resolver::HickoryHostResolver;
