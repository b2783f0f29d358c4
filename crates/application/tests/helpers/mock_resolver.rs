use async_trait::async_trait;
use dnsnative_application::ports::HostResolver;
use dnsnative_domain::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockHostResolver {
    addresses: Arc<RwLock<HashMap<String, Vec<IpAddr>>>>,
    hostnames: Arc<RwLock<HashMap<IpAddr, Option<String>>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    panics: Arc<RwLock<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl MockHostResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_addresses(&self, name: &str, addrs: &[&str]) {
        let parsed = addrs.iter().map(|a| a.parse().unwrap()).collect();
        self.addresses.write().await.insert(name.to_string(), parsed);
    }

    pub async fn set_hostname(&self, ip: &str, hostname: Option<&str>) {
        self.hostnames
            .write()
            .await
            .insert(ip.parse().unwrap(), hostname.map(str::to_string));
    }

    /// Keyed by the forward name or the reverse IP's canonical text.
    pub async fn set_error(&self, key: &str, error: DomainError) {
        self.errors.write().await.insert(key.to_string(), error);
    }

    pub async fn set_delay(&self, key: &str, delay: Duration) {
        self.delays.write().await.insert(key.to_string(), delay);
    }

    pub async fn set_panic(&self, key: &str) {
        self.panics.write().await.push(key.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn before_lookup(&self, key: &str) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.read().await.get(key).copied() {
            tokio::time::sleep(delay).await;
        }

        if self.panics.read().await.iter().any(|k| k == key) {
            panic!("mock resolver fault for {}", key);
        }

        if let Some(err) = self.errors.read().await.get(key).cloned() {
            return Err(err);
        }

        Ok(())
    }
}

#[async_trait]
impl HostResolver for MockHostResolver {
    async fn lookup_addresses(&self, name: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.before_lookup(name).await?;

        self.addresses
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::LookupFailed(format!("NXDOMAIN for {}", name)))
    }

    async fn lookup_hostname(&self, ip: IpAddr) -> Result<Option<String>, DomainError> {
        self.before_lookup(&ip.to_string()).await?;

        Ok(self.hostnames.read().await.get(&ip).cloned().flatten())
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
