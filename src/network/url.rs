//! URL decomposition on top of the `url` crate

use crate::error::{common, Result};
use crate::guards::ensure_non_empty;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;
use url::Url;

/// Components of an absolute URL
///
/// `port` is only set when the URL names one explicitly. Repeated query keys
/// keep their last value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParts {
    pub scheme: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub fragment: Option<String>,
}

/// Split an absolute URL into its components
///
/// ```
/// use toolbelt::network::parse_url;
///
/// let parts = parse_url("https://example.com:8443/docs?page=2#intro").unwrap();
/// assert_eq!(parts.host.as_deref(), Some("example.com"));
/// assert_eq!(parts.port, Some(8443));
/// assert_eq!(parts.query["page"], "2");
/// assert_eq!(parts.fragment.as_deref(), Some("intro"));
/// ```
pub fn parse_url(input: &str) -> Result<UrlParts> {
    ensure_non_empty("url", input)?;
    let url = Url::parse(input.trim())?;

    Ok(UrlParts {
        scheme: url.scheme().to_string(),
        host: url.host_str().map(str::to_string),
        port: url.port(),
        path: url.path().to_string(),
        query: url.query_pairs().into_owned().collect(),
        fragment: url.fragment().map(str::to_string),
    })
}

/// Host of `input` without a leading `www.`
///
/// Inputs without a scheme are treated as `http://` URLs, so
/// `"www.example.com/about"` yields `"example.com"`.
pub fn extract_domain(input: &str) -> Result<String> {
    let input = ensure_non_empty("url", input.trim())?;
    let url = if input.contains("://") {
        Url::parse(input)?
    } else {
        trace!(input, "No scheme given, assuming http");
        Url::parse(&format!("http://{}", input))?
    };

    let host = url
        .host_str()
        .ok_or_else(|| common::invalid_format("url", "a URL with a host"))?;
    Ok(host.strip_prefix("www.").unwrap_or(host).to_string())
}
