//! Token caches shared by the Hashgate services.

pub mod cache;
pub mod single_flight;
pub mod uncached;

pub use cache::TokenCache;
pub use single_flight::SingleFlightCache;
pub use uncached::Uncached;
