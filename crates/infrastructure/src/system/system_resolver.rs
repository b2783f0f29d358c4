use async_trait::async_trait;
use dns_lookup::LookupErrorKind;
use dnsnative_application::ports::HostResolver;
use dnsnative_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use tracing::debug;

/// getnameinfo flags: fail instead of returning the numeric host, never resolve the port.
const REVERSE_FLAGS: i32 = libc::NI_NAMEREQD | libc::NI_NUMERICSERV;

/// Resolves through the platform resolver (getaddrinfo / getnameinfo), so
/// /etc/hosts, nsswitch and the system DNS configuration all apply.
#[derive(Debug, Default, Clone)]
pub struct SystemHostResolver;

impl SystemHostResolver {
    pub fn new() -> Self {
        Self
    }

    fn reverse_blocking(ip: IpAddr) -> Result<Option<String>, DomainError> {
        let sock = SocketAddr::new(ip, 0);

        match dns_lookup::getnameinfo(&sock, REVERSE_FLAGS) {
            Ok((hostname, _service)) => Ok(Some(hostname)),
            Err(e) if matches!(e.kind(), LookupErrorKind::NoName | LookupErrorKind::NoData) => {
                Ok(None)
            }
            Err(e) => {
                let err = std::io::Error::from(e);
                Err(DomainError::LookupFailed(format!(
                    "getnameinfo failed for {}: {}",
                    ip, err
                )))
            }
        }
    }
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn lookup_addresses(&self, name: &str) -> Result<Vec<IpAddr>, DomainError> {
        debug!(name = %name, "Performing getaddrinfo lookup");

        let addrs = tokio::net::lookup_host((name, 0)).await.map_err(|e| {
            DomainError::LookupFailed(format!("getaddrinfo failed for {}: {}", name, e))
        })?;

        Ok(addrs.map(|addr| addr.ip()).collect())
    }

    async fn lookup_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        debug!(ip = %ip, "Performing getnameinfo lookup");

        // The blocking call keeps running if the caller's timeout fires first.
        tokio::task::spawn_blocking(move || Self::reverse_blocking(ip))
            .await
            .map_err(|e| {
                DomainError::ResolverUnavailable(format!("lookup worker failed: {}", e))
            })?
    }

    fn backend_name(&self) -> &'static str {
        "system"
    }
}
