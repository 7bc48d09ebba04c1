//! URL validation and normalization utilities.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a URL.
///
/// Adds an https:// prefix if missing, then validates that the URL is
/// syntactically valid and uses an http/https scheme. Rejects empty input and
/// URLs longer than `MAX_URL_LENGTH`. Logs a warning and returns `None` if
/// the URL is unusable.
///
/// # Returns
///
/// `Some(normalized_url)` if the URL is valid, `None` otherwise.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        warn!("Skipping empty URL");
        return None;
    }

    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            preview(url)
        );
        return None;
    }

    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    // The https:// prefix can push a borderline URL past the limit.
    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping normalized URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            preview(&normalized)
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Some(normalized),
            _ => {
                warn!("Skipping unsupported scheme for URL: {url}");
                None
            }
        },
        Err(_) => {
            warn!("Skipping invalid URL: {url}");
            None
        }
    }
}

/// Truncates a URL to its first 50 characters for log messages. Cuts on
/// character boundaries so multibyte input can't panic the slice.
fn preview(url: &str) -> String {
    url.chars().take(50).collect()
}
