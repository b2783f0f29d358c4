use super::bounded_lookup;
use crate::ports::HostResolver;
use dnsnative_domain::{format_reverse_reply, normalize_hostname, DomainError};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct ResolveByIpUseCase {
    resolver: Arc<dyn HostResolver>,
    timeout: Duration,
}

impl ResolveByIpUseCase {
    pub fn new(resolver: Arc<dyn HostResolver>, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }

    /// Reverse-resolves `ip` and renders the reply. Never fails.
    pub async fn execute(&self, ip: &str) -> String {
        match ip.parse::<IpAddr>() {
            Ok(addr) => self.execute_addr(ip, addr).await,
            Err(_) => {
                debug!(ip = %ip, "Token is not a valid IP address");
                format_reverse_reply(ip, None)
            }
        }
    }

    /// Like `execute`, for a token the caller already parsed. `token` is echoed verbatim.
    pub async fn execute_addr(&self, token: &str, ip: IpAddr) -> String {
        match self.lookup(token, ip).await {
            Ok(hostname) => format_reverse_reply(token, Some(&hostname)),
            Err(e) => {
                debug!(
                    ip = %token,
                    error = %e,
                    backend = self.resolver.backend_name(),
                    "Reverse lookup failed"
                );
                format_reverse_reply(token, None)
            }
        }
    }

    async fn lookup(&self, token: &str, ip: IpAddr) -> Result<String, DomainError> {
        let hostname = bounded_lookup(self.timeout, self.resolver.lookup_hostname(ip))
            .await?
            .ok_or_else(|| DomainError::NoRecords(token.to_string()))?;

        // Some resolvers echo the numeric address back when no PTR exists.
        let hostname = normalize_hostname(&hostname)
            .filter(|name| name.parse::<IpAddr>().map_or(true, |echoed| echoed != ip))
            .ok_or_else(|| DomainError::NoRecords(token.to_string()))?;

        debug!(ip = %token, hostname = %hostname, "Reverse lookup successful");
        Ok(hostname.to_string())
    }
}
