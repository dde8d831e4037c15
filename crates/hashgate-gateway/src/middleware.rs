mod cors;

pub use cors::{cors, ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
