use async_trait::async_trait;
use dnsnative_application::ports::HostResolver;
use dnsnative_domain::DomainError;
use hickory_resolver::config::{LookupIpStrategy, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::net::IpAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// Stub resolver speaking DNS directly to the servers in resolv.conf.
#[derive(Clone)]
pub struct HickoryHostResolver {
    resolver: TokioResolver,
}

impl HickoryHostResolver {
    pub fn new(timeout: Duration) -> Self {
        let mut builder = TokioResolver::builder_tokio().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read system resolver config, using defaults");
            TokioResolver::builder_with_config(
                ResolverConfig::default(),
                TokioConnectionProvider::default(),
            )
        });

        let opts = builder.options_mut();
        opts.timeout = timeout;
        opts.attempts = 1;
        opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

        Self {
            resolver: builder.build(),
        }
    }
}

#[async_trait]
impl HostResolver for HickoryHostResolver {
    async fn lookup_addresses(&self, name: &str) -> Result<Vec<IpAddr>, DomainError> {
        debug!(name = %name, "Performing A/AAAA lookup");

        let lookup = self
            .resolver
            .lookup_ip(name)
            .await
            .map_err(|e| DomainError::LookupFailed(format!("{}: {}", name, e)))?;

        Ok(lookup.iter().collect())
    }

    async fn lookup_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        debug!(ip = %ip, "Performing PTR lookup");

        let lookup = self
            .resolver
            .reverse_lookup(ip)
            .await
            .map_err(|e| DomainError::LookupFailed(format!("{}: {}", ip, e)))?;

        Ok(lookup.iter().next().map(|ptr| ptr.to_utf8()))
    }

    fn backend_name(&self) -> &'static str {
        "hickory"
    }
}
