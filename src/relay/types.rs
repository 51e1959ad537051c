use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// HTTP methods the relay accepts. Anything else is rejected at the
/// deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Method {
    /// GET and HEAD requests carry no body per HTTP semantics.
    pub fn is_bodyless(self) -> bool {
        matches!(self, Method::Get | Method::Head)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incoming relay request from the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: Method,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
    /// Timeout in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

/// The upstream's reply, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

/// Every way a relayed call can fail. Callers must handle each variant;
/// the relay never lets an outbound failure escape as an unhandled fault.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("{0}")]
    MalformedInput(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Fetch failed: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_roundtrips_through_serde() {
        let m: Method = serde_json::from_str("\"DELETE\"").unwrap();
        assert_eq!(m, Method::Delete);
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"DELETE\"");
    }

    #[test]
    fn unknown_method_is_rejected() {
        let result: Result<Method, _> = serde_json::from_str("\"TRACE\"");
        assert!(result.is_err());
    }

    #[test]
    fn get_and_head_are_bodyless() {
        assert!(Method::Get.is_bodyless());
        assert!(Method::Head.is_bodyless());
        assert!(!Method::Post.is_bodyless());
        assert!(!Method::Options.is_bodyless());
    }

    #[test]
    fn headers_default_to_empty() {
        let descriptor: RequestDescriptor =
            serde_json::from_str(r#"{"url":"http://example.com","method":"GET","body":null}"#)
                .unwrap();
        assert!(descriptor.headers.is_empty());
        assert!(descriptor.timeout.is_none());
    }
}
