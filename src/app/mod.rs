//! Application-level helpers.

mod url;

pub use url::validate_and_normalize_url;
