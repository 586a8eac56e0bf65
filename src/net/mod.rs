pub mod fetch;

pub use fetch::{fetch_url, is_remote, load_source, FetchError, FetchResult};
