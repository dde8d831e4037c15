mod fallback;
mod hash;
mod health;

pub use fallback::{get_only, not_found, post_only};
pub use hash::hash_handler;
pub use health::health_handler;
