//! Per-request grid negotiation.
//!
//! Combines the configured bounds with what a client tells us about itself:
//! the grid size it wants and whether it is a plain-text client that should
//! get bare lines instead of markup.

use termgrid_protocol::Dimensions;
use tracing::debug;

use crate::grid::GridConfig;

/// User-agent prefixes of clients that cannot render markup.
const PLAIN_TEXT_CLIENTS: &[&str] = &["curl", "wget", "httpie", "fetch", "lynx", "links", "w3m"];

/// Returns `true` if the user agent belongs to a plain-text client.
///
/// Matching is a case-insensitive prefix test.
///
/// # Examples
///
/// ```
/// use termgrid_config::is_plain_text_client;
///
/// assert!(is_plain_text_client(Some("curl/8.5.0")));
/// assert!(is_plain_text_client(Some("Lynx/2.9.0")));
/// assert!(!is_plain_text_client(Some("Mozilla/5.0 (X11; Linux x86_64)")));
/// assert!(!is_plain_text_client(None));
/// ```
#[must_use]
pub fn is_plain_text_client(user_agent: Option<&str>) -> bool {
    let Some(agent) = user_agent else {
        return false;
    };
    PLAIN_TEXT_CLIENTS.iter().any(|prefix| {
        agent
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// What a client asked for, after negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRequest {
    /// The viewport to render.
    pub dimensions: Dimensions,
    /// Whether to send bare lines instead of markup.
    pub plain_text: bool,
}

/// Hints a client supplies with a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientHints<'a> {
    /// Requested width, as sent.
    pub cols: Option<&'a str>,
    /// Requested height, as sent.
    pub rows: Option<&'a str>,
    /// The client's user agent.
    pub user_agent: Option<&'a str>,
}

/// Negotiates the grid for one request.
///
/// # Examples
///
/// ```
/// use termgrid_config::{ClientHints, GridConfig, negotiate};
///
/// let request = negotiate(
///     &GridConfig::default(),
///     ClientHints { cols: Some("132"), rows: None, user_agent: Some("w3m/0.5.3") },
/// );
/// assert_eq!(request.dimensions.cols, 132);
/// assert_eq!(request.dimensions.rows, 24);
/// assert!(request.plain_text);
/// ```
#[must_use]
pub fn negotiate(grid: &GridConfig, hints: ClientHints<'_>) -> GridRequest {
    let request = GridRequest {
        dimensions: grid.resolve(hints.cols, hints.rows),
        plain_text: is_plain_text_client(hints.user_agent),
    };
    debug!(
        cols = request.dimensions.cols,
        rows = request.dimensions.rows,
        plain_text = request.plain_text,
        "negotiated grid"
    );
    request
}
