use super::{ResolveByIpUseCase, ResolveByNameUseCase};
use dnsnative_domain::{HostCommand, LookupTarget, HELP_TEXT};
use std::sync::Arc;
use tracing::debug;

/// Turns one `host` command into its replies, one per token in input order.
pub struct HandleHostCommandUseCase {
    by_ip: Arc<ResolveByIpUseCase>,
    by_name: Arc<ResolveByNameUseCase>,
}

impl HandleHostCommandUseCase {
    pub fn new(by_ip: Arc<ResolveByIpUseCase>, by_name: Arc<ResolveByNameUseCase>) -> Self {
        Self { by_ip, by_name }
    }

    pub async fn execute(&self, args: &str) -> Vec<String> {
        self.execute_command(&HostCommand::parse(args)).await
    }

    pub async fn execute_command(&self, command: &HostCommand) -> Vec<String> {
        let tokens = match command {
            HostCommand::Help => return vec![HELP_TEXT.to_string()],
            HostCommand::Lookup(tokens) => tokens,
        };

        let mut replies = Vec::with_capacity(tokens.len());
        for token in tokens {
            replies.push(self.resolve_token(token).await);
        }
        replies
    }

    pub async fn resolve_token(&self, token: &str) -> String {
        let target = LookupTarget::parse(token);
        let class = target.class();
        match target {
            LookupTarget::Address { token, ip } => {
                debug!(token = %token, class = %class, "Token found to be an {} address", class);
                self.by_ip.execute_addr(&token, ip).await
            }
            LookupTarget::Name(name) => {
                debug!(token = %name, "Token is not an IP, treating as hostname");
                self.by_name.execute(&name).await
            }
        }
    }
}
