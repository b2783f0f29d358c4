#![cfg(feature = "hickory")]

use dnsnative_application::ports::HostResolver;
use dnsnative_application::use_cases::ResolveByNameUseCase;
use dnsnative_domain::{ResolverBackend, ResolverConfig};
use dnsnative_infrastructure::dns::{HickoryHostResolver, HostResolverBuilder};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_builder_selects_backend() {
    let system = HostResolverBuilder::new().build();
    assert_eq!(system.backend_name(), "system");

    let hickory = HostResolverBuilder::new()
        .with_backend(ResolverBackend::Hickory)
        .build();
    assert_eq!(hickory.backend_name(), "hickory");
}

#[tokio::test]
async fn test_builder_uses_config_backend() {
    let config = ResolverConfig {
        backend: ResolverBackend::Hickory,
        ..ResolverConfig::default()
    };

    let resolver = HostResolverBuilder::new().with_config(config).build();
    assert_eq!(resolver.backend_name(), "hickory");
}

#[tokio::test]
async fn test_hickory_unknown_name_reply() {
    let resolver = Arc::new(HickoryHostResolver::new(Duration::from_secs(2)));
    let use_case = ResolveByNameUseCase::new(resolver, Duration::from_secs(5));

    let reply = use_case.execute("abra.cada.bra").await;

    assert_eq!(reply, "Could not resolve abra.cada.bra.");
}

#[tokio::test]
#[ignore = "requires public DNS"]
async fn test_hickory_reverse_public_ipv4() {
    let resolver = HickoryHostResolver::new(Duration::from_secs(5));

    let hostname = resolver
        .lookup_hostname("8.8.4.4".parse().unwrap())
        .await
        .expect("PTR lookup should succeed");

    assert_eq!(hostname.as_deref(), Some("dns.google."));
}

#[tokio::test]
#[ignore = "requires public DNS"]
async fn test_hickory_forward_returns_both_families() {
    let resolver = HickoryHostResolver::new(Duration::from_secs(5));

    let addrs = resolver
        .lookup_addresses("dns.google")
        .await
        .expect("dns.google should resolve");

    assert!(addrs.iter().any(|a| a.is_ipv4()));
    assert!(addrs.iter().any(|a| a.is_ipv6()));
}
