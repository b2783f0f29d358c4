use async_trait::async_trait;
use dnsnative_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Forward lookup for both address families, in resolver order.
    async fn lookup_addresses(&self, name: &str) -> Result<Vec<IpAddr>, DomainError>;

    /// Reverse lookup. `Ok(None)` means the resolver answered without a name.
    async fn lookup_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError>;

    fn backend_name(&self) -> &'static str;
}
