use super::bounded_lookup;
use crate::ports::HostResolver;
use dnsnative_domain::{dedupe_addresses, format_forward_reply, DomainError, MultiAddressStyle};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct ResolveByNameUseCase {
    resolver: Arc<dyn HostResolver>,
    timeout: Duration,
    style: MultiAddressStyle,
    dedupe: bool,
}

impl ResolveByNameUseCase {
    pub fn new(resolver: Arc<dyn HostResolver>, timeout: Duration) -> Self {
        Self {
            resolver,
            timeout,
            style: MultiAddressStyle::default(),
            dedupe: false,
        }
    }

    pub fn with_style(mut self, style: MultiAddressStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Forward-resolves `name` and renders the reply. Never fails.
    pub async fn execute(&self, name: &str) -> String {
        match self.lookup(name).await {
            Ok(addresses) => format_forward_reply(name, &addresses, self.style),
            Err(e) => {
                debug!(
                    name = %name,
                    error = %e,
                    backend = self.resolver.backend_name(),
                    "Forward lookup failed"
                );
                format_forward_reply(name, &[], self.style)
            }
        }
    }

    async fn lookup(&self, name: &str) -> Result<Vec<IpAddr>, DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidHostname(name.to_string()));
        }

        let mut addresses =
            bounded_lookup(self.timeout, self.resolver.lookup_addresses(name)).await?;

        debug!(name = %name, addresses = ?addresses, "Forward lookup returned");

        if self.dedupe {
            addresses = dedupe_addresses(addresses);
        }

        if addresses.is_empty() {
            return Err(DomainError::NoRecords(name.to_string()));
        }

        Ok(addresses)
    }
}
