use crate::system::SystemHostResolver;
use dnsnative_application::ports::HostResolver;
use dnsnative_domain::{ResolverBackend, ResolverConfig};
use std::sync::Arc;
use tracing::info;

pub struct HostResolverBuilder {
    config: ResolverConfig,
}

impl HostResolverBuilder {
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_backend(mut self, backend: ResolverBackend) -> Self {
        self.config.backend = backend;
        self
    }

    pub fn build(self) -> Arc<dyn HostResolver> {
        info!(
            backend = %self.config.backend,
            timeout_secs = self.config.timeout_secs,
            "Building host resolver"
        );

        match self.config.backend {
            ResolverBackend::System => Arc::new(SystemHostResolver::new()),
            ResolverBackend::Hickory => self.build_hickory(),
        }
    }

    #[cfg(feature = "hickory")]
    fn build_hickory(&self) -> Arc<dyn HostResolver> {
        Arc::new(super::HickoryHostResolver::new(self.config.timeout()))
    }

    #[cfg(not(feature = "hickory"))]
    fn build_hickory(&self) -> Arc<dyn HostResolver> {
        tracing::warn!("hickory backend not compiled in, falling back to system resolver");
        Arc::new(SystemHostResolver::new())
    }
}

impl Default for HostResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
