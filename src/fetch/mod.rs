//! Document fetching.
//!
//! Downloads the source document over HTTP and decodes it to text. Decoding
//! is lossy: undecodable byte sequences become replacement characters rather
//! than errors, so the scanner always receives valid text.

mod request;

use log::{debug, info};

use crate::error_handling::FetchError;
use request::RequestHeaders;

/// Fetches the document at `url` and returns its decoded body.
///
/// A non-success HTTP status is an error; there are no retries (the user
/// retries manually).
///
/// # Errors
///
/// Returns `FetchError::RequestError` if the request fails, the server
/// responds with a non-success status, or the body cannot be read.
pub async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    info!("Fetching {url}");

    let request = RequestHeaders::apply_to_request_builder(client.get(url));
    let response = request.send().await?.error_for_status()?;

    let status = response.status();
    let body = response.text().await?;
    debug!("Fetched {url}: status {status}, {} bytes of text", body.len());

    Ok(body)
}
