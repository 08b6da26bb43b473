// BrowseLighter navigation resolver
// Turns URL-bar text into the URL handed to the browser surface: well-formed
// absolute URIs are navigated to directly (with an http:// default), anything
// else becomes a web search.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::{Host, ParseError, Url};

use crate::types::config::ShellConfig;
use crate::types::navigation::{NavigationRequest, RequestHeader};

/// Everything outside the RFC 3986 unreserved set is escaped.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Characters that never appear unescaped in a well-formed URI.
const DISALLOWED: &[char] = &['"', '<', '>', '\\', '^', '`', '{', '|', '}'];

/// Trait defining the navigation resolver interface.
pub trait NavigationResolverTrait {
    fn resolve(&self, input: &str) -> Option<String>;
    fn request_for(&self, input: &str) -> Option<NavigationRequest>;
}

/// Resolves URL-bar input against a search endpoint and a user agent.
pub struct NavigationResolver {
    search_endpoint: String,
    user_agent: String,
}

impl NavigationResolver {
    pub fn new(search_endpoint: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            search_endpoint: search_endpoint.into(),
            user_agent: user_agent.into(),
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(config.search_endpoint.clone(), config.user_agent.clone())
    }
}

impl Default for NavigationResolver {
    fn default() -> Self {
        Self::from_config(&ShellConfig::default())
    }
}

impl NavigationResolverTrait for NavigationResolver {
    /// Returns the navigation target for `input`, or `None` when the trimmed
    /// input is empty.
    fn resolve(&self, input: &str) -> Option<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        if is_well_formed_absolute_uri(trimmed) {
            if has_http_scheme(trimmed) {
                Some(trimmed.to_string())
            } else {
                Some(format!("http://{}", trimmed))
            }
        } else {
            Some(format!(
                "{}{}",
                self.search_endpoint,
                encode_search_query(trimmed)
            ))
        }
    }

    /// Builds the full request: the resolved target plus the User-Agent override.
    fn request_for(&self, input: &str) -> Option<NavigationRequest> {
        let url = self.resolve(input)?;
        Some(NavigationRequest {
            url,
            headers: vec![RequestHeader::user_agent(self.user_agent.clone())],
        })
    }
}

/// Shorthand for resolving with the default search endpoint.
pub fn resolve_navigation_target(input: &str) -> Option<String> {
    NavigationResolver::default().resolve(input)
}

/// Case-insensitive check for an `http://` or `https://` prefix.
pub fn has_http_scheme(s: &str) -> bool {
    starts_with_ignore_case(s, "http://") || starts_with_ignore_case(s, "https://")
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}

/// Percent-encodes a search query (space becomes `%20`, uppercase hex).
pub fn encode_search_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY_ESCAPE).to_string()
}

/// Decides whether trimmed input should be navigated to rather than searched.
///
/// Accepts absolute URLs with any scheme (`https://a.b`, `localhost:8080`,
/// `mailto:x@y`) and scheme-less host forms (`example.com/path`, `localhost`,
/// `10.0.0.1:3000`, `[::1]`).
pub fn is_well_formed_absolute_uri(s: &str) -> bool {
    if s.is_empty()
        || s
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || DISALLOWED.contains(&c))
    {
        return false;
    }

    match Url::parse(s) {
        Ok(url) => has_scheme_specific_part(s, &url),
        Err(ParseError::RelativeUrlWithoutBase) => is_bare_host(s),
        Err(_) => false,
    }
}

fn has_scheme_specific_part(raw: &str, url: &Url) -> bool {
    let rest = &raw[url.scheme().len()..];
    rest.len() > 1 && (url.has_host() || !url.path().is_empty())
}

/// `example.com`, `localhost:8080/x`, `192.168.1.1`, `[::1]:80`: a host the
/// user typed without a scheme.
fn is_bare_host(s: &str) -> bool {
    let authority = s.split(['/', '?', '#']).next().unwrap_or("");
    if authority.contains('@') {
        return false;
    }

    let url = match Url::parse(&format!("http://{}", s)) {
        Ok(url) => url,
        Err(_) => return false,
    };

    let raw_host = if authority.starts_with('[') {
        authority
            .find(']')
            .map(|end| &authority[..=end])
            .unwrap_or(authority)
    } else {
        authority.split(':').next().unwrap_or("")
    };

    match url.host() {
        Some(Host::Domain(domain)) => is_plausible_domain(domain),
        Some(Host::Ipv4(addr)) => addr.to_string() == raw_host,
        Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

fn is_plausible_domain(domain: &str) -> bool {
    if domain == "localhost" {
        return true;
    }
    let labels: Vec<&str> = domain.trim_end_matches('.').split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return false;
    }
    labels
        .last()
        .map(|tld| {
            tld.starts_with("xn--")
                || (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
        })
        .unwrap_or(false)
}
