use log::{error, info, warn};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt;
use std::sync::Mutex;

/// Why a rotated fetch came back without data. Callers match on this
/// instead of sniffing message strings; the `Display` impl keeps the
/// historical `NO_API_KEYS:` / `QUOTA_EXCEEDED:` prefixes for logs.
#[derive(Debug)]
pub enum RotationError {
    /// The pool was constructed without any keys; no request was made.
    NoKeys,
    /// Every key in the pool was attempted and each came back 403/429.
    QuotaExhausted { keys: usize },
    /// The upstream rejected the request for a non-quota reason.
    /// Retrying with another key cannot fix a malformed request, so
    /// rotation stops at the first such status.
    Upstream { status: u16, body: String },
    /// Mixed failures: no key succeeded, but not all were quota.
    AllKeysFailed { quota: usize, other: usize },
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationError::NoKeys => {
                write!(f, "NO_API_KEYS: No YouTube API keys configured")
            }
            RotationError::QuotaExhausted { keys } => write!(
                f,
                "QUOTA_EXCEEDED: All {keys} API keys have reached their quota limits."
            ),
            RotationError::Upstream { status, body } => {
                write!(f, "API request failed with status {status}: {body}")
            }
            RotationError::AllKeysFailed { quota, other } => write!(
                f,
                "All API keys failed or exhausted. {quota} keys hit quota limits. {other} keys had other errors."
            ),
        }
    }
}

impl std::error::Error for RotationError {}

fn is_quota_status(status: StatusCode) -> bool {
    status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS
}

/// Collapse a full, unsuccessful rotation into its terminal error:
/// only an all-quota run reports quota exhaustion.
fn aggregate_failures(total: usize, quota_errors: usize, other_errors: usize) -> RotationError {
    if quota_errors == total {
        RotationError::QuotaExhausted { keys: total }
    } else {
        RotationError::AllKeysFailed {
            quota: quota_errors,
            other: other_errors,
        }
    }
}

/// An ordered pool of Google API keys with a shared rotation cursor.
///
/// The cursor lives for the whole process and is only advanced on a
/// successful request, so load spreads across keys over time. Keys are
/// never removed; a quota-limited key is merely skipped for the call
/// that observed the 403/429.
pub struct KeyPool {
    keys: Vec<String>,
    cursor: Mutex<usize>,
}

impl KeyPool {
    pub fn new(keys: Vec<String>) -> Self {
        KeyPool {
            keys,
            cursor: Mutex::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn current_cursor(&self) -> usize {
        if let Ok(cursor) = self.cursor.lock() {
            *cursor
        } else {
            0
        }
    }

    fn advance_cursor(&self, key_index: usize) {
        if let Ok(mut cursor) = self.cursor.lock() {
            *cursor = (key_index + 1) % self.keys.len();
        }
    }

    /// Issue a GET against `url` (which lacks only the `key` query
    /// parameter), trying each key in rotation order until one
    /// succeeds or the pool is exhausted.
    ///
    /// `Ok(None)` means the upstream answered 2xx with an empty or
    /// non-JSON body; callers must treat it as "no data" rather than
    /// a failure.
    pub async fn fetch_json(
        &self,
        client: &Client,
        url: &str,
    ) -> Result<Option<Value>, RotationError> {
        let total = self.keys.len();
        if total == 0 {
            return Err(RotationError::NoKeys);
        }

        let start = self.current_cursor();
        let mut quota_errors = 0usize;
        let mut other_errors = 0usize;

        for attempt in 0..total {
            let key_index = (start + attempt) % total;
            info!("Trying API key {key_index}...");

            let request_url = format!("{url}&key={}", self.keys[key_index]);
            let response = match client.get(&request_url).send().await {
                Ok(response) => response,
                Err(e) => {
                    error!("Error with API key {key_index}: {e}");
                    other_errors += 1;
                    continue;
                }
            };

            let status = response.status();
            if status.is_success() {
                self.advance_cursor(key_index);
                let text = response.text().await.unwrap_or_default();
                if text.is_empty() {
                    return Ok(None);
                }
                return match serde_json::from_str::<Value>(&text) {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        warn!("Failed to parse JSON response for key {key_index}: {e}");
                        Ok(None)
                    }
                };
            }

            let body = response.text().await.unwrap_or_default();
            warn!("API key {key_index} failed with status {status}. Error: {body}");

            if is_quota_status(status) {
                quota_errors += 1;
                continue;
            }

            return Err(RotationError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Err(aggregate_failures(total, quota_errors, other_errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(n: usize) -> KeyPool {
        KeyPool::new((0..n).map(|i| format!("key-{i}")).collect())
    }

    #[test]
    fn quota_statuses_are_classified() {
        assert!(is_quota_status(StatusCode::FORBIDDEN));
        assert!(is_quota_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_quota_status(StatusCode::BAD_REQUEST));
        assert!(!is_quota_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!is_quota_status(StatusCode::NOT_FOUND));
    }

    #[test]
    fn cursor_wraps_around_the_pool() {
        let pool = pool(3);
        assert_eq!(pool.current_cursor(), 0);

        pool.advance_cursor(0);
        assert_eq!(pool.current_cursor(), 1);

        pool.advance_cursor(2);
        assert_eq!(pool.current_cursor(), 0);
    }

    #[rocket::async_test]
    async fn empty_pool_fails_without_any_request() {
        let pool = pool(0);
        // The URL is unroutable on purpose: with zero keys the fetch
        // must fail before any network activity happens.
        let result = pool
            .fetch_json(&Client::new(), "http://127.0.0.1:1/nope?part=snippet")
            .await;

        assert!(matches!(result, Err(RotationError::NoKeys)));
    }

    #[test]
    fn all_quota_failures_report_exhaustion() {
        assert!(matches!(
            aggregate_failures(3, 3, 0),
            RotationError::QuotaExhausted { keys: 3 }
        ));
    }

    #[test]
    fn mixed_failures_report_the_split() {
        assert!(matches!(
            aggregate_failures(3, 2, 1),
            RotationError::AllKeysFailed { quota: 2, other: 1 }
        ));
        assert!(matches!(
            aggregate_failures(2, 0, 2),
            RotationError::AllKeysFailed { quota: 0, other: 2 }
        ));
    }

    #[test]
    fn error_messages_keep_wire_prefixes() {
        assert!(RotationError::NoKeys.to_string().starts_with("NO_API_KEYS:"));
        assert!(RotationError::QuotaExhausted { keys: 3 }
            .to_string()
            .starts_with("QUOTA_EXCEEDED:"));
    }
}
