use dnsnative_application::use_cases::{
    HandleHostCommandUseCase, ResolveByIpUseCase, ResolveByNameUseCase,
};
use dnsnative_domain::Config;
use dnsnative_infrastructure::dns::HostResolverBuilder;
use std::sync::Arc;

pub struct UseCases {
    pub host_command: Arc<HandleHostCommandUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let resolver = HostResolverBuilder::new()
            .with_config(config.resolver.clone())
            .build();
        let timeout = config.resolver.timeout();

        let by_ip = Arc::new(ResolveByIpUseCase::new(resolver.clone(), timeout));
        let by_name = Arc::new(
            ResolveByNameUseCase::new(resolver, timeout)
                .with_style(config.reply.multi_address_style)
                .with_dedupe(config.resolver.dedupe_addresses),
        );

        Self {
            host_command: Arc::new(HandleHostCommandUseCase::new(by_ip, by_name)),
        }
    }
}
