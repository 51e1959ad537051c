//! Outbound request execution.
//!
//! Replays one caller-supplied request against its real target: a single
//! outbound call bounded by an explicit per-request deadline, with the
//! upstream status and full body text returned verbatim. No retries, no
//! streaming, no size cap.

use super::types::{Method, RelayError, RequestDescriptor, UpstreamReply};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::error::Error as StdError;
use std::str::FromStr;
use std::time::Duration;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
            Method::Head => reqwest::Method::HEAD,
            Method::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// Execute one relayed request.
///
/// The deadline comes from the descriptor (milliseconds, default 30 s) and
/// is handed to the client per-request, so cancellation is owned and
/// released by this call on every exit path.
pub async fn execute_request(
    client: &reqwest::Client,
    descriptor: RequestDescriptor,
) -> Result<UpstreamReply, RelayError> {
    let url = url::Url::parse(&descriptor.url)
        .map_err(|e| RelayError::MalformedInput(format!("invalid URL: {}", e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(RelayError::MalformedInput(format!(
            "unsupported URL scheme: {}",
            url.scheme()
        )));
    }

    let deadline = Duration::from_millis(descriptor.timeout.unwrap_or(DEFAULT_TIMEOUT_MS));

    let mut headers = HeaderMap::new();
    for (key, value) in &descriptor.headers {
        // Header names or values the transport cannot represent are skipped;
        // the relay never rewrites them into something else.
        let Ok(name) = HeaderName::from_str(key) else {
            continue;
        };
        let Ok(value) = HeaderValue::from_str(value) else {
            continue;
        };
        headers.append(name, value);
    }

    let mut request = client
        .request(descriptor.method.into(), url)
        .headers(headers)
        .timeout(deadline);

    // GET and HEAD carry no body regardless of what the caller supplied.
    if !descriptor.method.is_bodyless() {
        if let Some(body) = descriptor.body {
            request = request.body(body);
        }
    }

    let response = request.send().await.map_err(classify)?;
    let status = response.status().as_u16();
    // Reading the body counts against the same deadline.
    let body = response.text().await.map_err(classify)?;

    Ok(UpstreamReply { status, body })
}

fn classify(err: reqwest::Error) -> RelayError {
    if err.is_timeout() {
        RelayError::Timeout
    } else {
        RelayError::Transport(error_chain(&err))
    }
}

/// Flattens an error and its sources into one message, so the underlying
/// reason (DNS failure, connection refusal, TLS fault) survives into the
/// reply the caller sees.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn descriptor(url: &str) -> RequestDescriptor {
        RequestDescriptor {
            url: url.to_string(),
            method: Method::Get,
            headers: HashMap::new(),
            body: None,
            timeout: None,
        }
    }

    #[tokio::test]
    async fn unparseable_url_is_malformed_input() {
        let client = reqwest::Client::new();
        let result = execute_request(&client, descriptor("not a url")).await;
        assert!(matches!(result, Err(RelayError::MalformedInput(_))));
    }

    #[tokio::test]
    async fn non_http_scheme_is_malformed_input() {
        let client = reqwest::Client::new();
        let result = execute_request(&client, descriptor("ftp://example.com/file")).await;
        match result {
            Err(RelayError::MalformedInput(message)) => {
                assert!(message.contains("ftp"));
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn error_chain_includes_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let message = error_chain(&inner);
        assert!(message.contains("refused"));
    }
}
