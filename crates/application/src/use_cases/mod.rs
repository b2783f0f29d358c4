pub mod lookup;

pub use lookup::{HandleHostCommandUseCase, ResolveByIpUseCase, ResolveByNameUseCase};
