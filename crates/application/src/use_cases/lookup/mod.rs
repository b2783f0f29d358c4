pub mod handle_host_command;
pub mod resolve_by_ip;
pub mod resolve_by_name;

pub use handle_host_command::HandleHostCommandUseCase;
pub use resolve_by_ip::ResolveByIpUseCase;
pub use resolve_by_name::ResolveByNameUseCase;

use dnsnative_domain::DomainError;
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

/// Runs one resolver call under `timeout`, turning expiry and panics into errors.
pub(crate) async fn bounded_lookup<T, F>(timeout: Duration, lookup: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    match tokio::time::timeout(timeout, AssertUnwindSafe(lookup).catch_unwind()).await {
        Ok(Ok(result)) => result,
        Ok(Err(_)) => Err(DomainError::ResolverUnavailable(
            "resolver panicked during lookup".to_string(),
        )),
        Err(_) => Err(DomainError::QueryTimeout),
    }
}
