//! Remote task sources.
//!
//! A [`TaskSource`] performs one read of the remote task collection and
//! yields the titles in response order. [`HttpTaskSource`] is the network
//! implementation used by the binary.

mod error;
mod http;

pub use error::FetchError;
pub use http::HttpTaskSource;

use async_trait::async_trait;

/// One-shot read of a remote task list.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Returns the name of this source for logging.
    fn name(&self) -> &'static str;

    /// Fetch the remote collection as display titles, preserving order.
    async fn fetch_titles(&self) -> Result<Vec<String>, FetchError>;
}
