//! Telegram start-parameter grammar.
//!
//! Three conventions coexist in the wild: flat static tokens
//! (`my-channels`), dash-encoded dynamic tokens (`listings-<id>-settings`),
//! and slash paths (`/listings/<id>/settings`). The flat forms exist
//! because Telegram start parameters only admit `A-Za-z0-9_-`; the slash
//! form arrives via percent-encoding. This module decodes all of them into
//! canonical paths and encodes share links back into the flat form.

use percent_encoding::percent_decode_str;
use tracing::debug;

use super::pattern::{PathPattern, Segment};
use super::{CanonicalPath, Route};

/// Dynamic path shapes reachable by deep link. Ids are single segments.
const LISTING_DETAIL: PathPattern =
    PathPattern::new(&[Segment::Lit("listings"), Segment::Param]);
const LISTING_SETTINGS: PathPattern =
    PathPattern::new(&[Segment::Lit("listings"), Segment::Param, Segment::Lit("settings")]);
const BRIEF_DETAIL: PathPattern = PathPattern::new(&[Segment::Lit("briefs"), Segment::Param]);
const BRIEF_APPLICATIONS: PathPattern =
    PathPattern::new(&[Segment::Lit("briefs"), Segment::Param, Segment::Lit("applications")]);
const DEAL_DETAIL: PathPattern = PathPattern::new(&[Segment::Lit("deals"), Segment::Param]);

const DYNAMIC_TARGETS: [PathPattern; 5] =
    [LISTING_DETAIL, LISTING_SETTINGS, BRIEF_DETAIL, BRIEF_APPLICATIONS, DEAL_DETAIL];

/// Legacy spelling of the listings family in paths and tokens.
const LEGACY_CHANNELS_PREFIX: &str = "channels-";

const CHANNELS_ROOT: PathPattern = PathPattern::new(&[Segment::Lit("channels")]);
const CHANNEL_DETAIL: PathPattern =
    PathPattern::new(&[Segment::Lit("channels"), Segment::Param]);
const CHANNEL_SETTINGS: PathPattern =
    PathPattern::new(&[Segment::Lit("channels"), Segment::Param, Segment::Lit("settings")]);

/// Path shapes a dynamic token rule can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathTemplate {
    ListingDetail,
    ListingSettings,
    BriefDetail,
    BriefApplications,
    DealDetail,
}

impl PathTemplate {
    fn instantiate(&self, id: &str) -> CanonicalPath {
        let raw = match self {
            PathTemplate::ListingDetail => format!("/listings/{id}"),
            PathTemplate::ListingSettings => format!("/listings/{id}/settings"),
            PathTemplate::BriefDetail => format!("/briefs/{id}"),
            PathTemplate::BriefApplications => format!("/briefs/{id}/applications"),
            PathTemplate::DealDetail => format!("/deals/{id}"),
        };
        CanonicalPath::new(&raw)
    }

    fn pattern(&self) -> PathPattern {
        match self {
            PathTemplate::ListingDetail => LISTING_DETAIL,
            PathTemplate::ListingSettings => LISTING_SETTINGS,
            PathTemplate::BriefDetail => BRIEF_DETAIL,
            PathTemplate::BriefApplications => BRIEF_APPLICATIONS,
            PathTemplate::DealDetail => DEAL_DETAIL,
        }
    }
}

/// One dash-token rule: `<prefix><id>[<suffix>]`.
///
/// The id captures greedily up to the literal suffix (or the end of the
/// token) and must be non-empty, so ids containing dashes survive.
#[derive(Debug, Clone, Copy)]
struct TokenRule {
    prefix: &'static str,
    suffix: Option<&'static str>,
    template: PathTemplate,
}

impl TokenRule {
    fn apply(&self, token: &str) -> Option<CanonicalPath> {
        let rest = token.strip_prefix(self.prefix)?;
        let id = match self.suffix {
            Some(suffix) => rest.strip_suffix(suffix)?,
            None => rest,
        };
        if id.is_empty() {
            return None;
        }
        Some(self.template.instantiate(id))
    }

    /// Inverse of [`TokenRule::apply`] for share-link encoding.
    fn encode(&self, path: &CanonicalPath) -> Option<String> {
        let id = self.template.pattern().capture(path)?;
        if !is_token_safe(id) {
            return None;
        }
        let suffix = self.suffix.unwrap_or("");
        Some(format!("{}{id}{suffix}", self.prefix))
    }
}

/// Dynamic token rules, most specific first. The order is load-bearing:
/// the suffixed forms must win before the bare detail forms swallow a
/// `-settings` or `-applications` tail into the id.
const TOKEN_RULES: [TokenRule; 7] = [
    TokenRule {
        prefix: LEGACY_CHANNELS_PREFIX,
        suffix: Some("-settings"),
        template: PathTemplate::ListingSettings,
    },
    TokenRule {
        prefix: "listings-",
        suffix: Some("-settings"),
        template: PathTemplate::ListingSettings,
    },
    TokenRule {
        prefix: "briefs-",
        suffix: Some("-applications"),
        template: PathTemplate::BriefApplications,
    },
    TokenRule {
        prefix: LEGACY_CHANNELS_PREFIX,
        suffix: None,
        template: PathTemplate::ListingDetail,
    },
    TokenRule { prefix: "listings-", suffix: None, template: PathTemplate::ListingDetail },
    TokenRule { prefix: "briefs-", suffix: None, template: PathTemplate::BriefDetail },
    TokenRule { prefix: "deals-", suffix: None, template: PathTemplate::DealDetail },
];

/// Parse a raw Telegram start parameter into a canonical in-app path.
///
/// Accepts the flat static tokens, the dash-encoded dynamic tokens, and
/// percent-encoded slash paths (legacy `channels` spellings included).
/// Absent, empty, unknown, and unsupported values all come back as `None`;
/// malformed input is treated as "no deep link", never as an error.
pub fn parse_deep_link(start_param: Option<&str>) -> Option<CanonicalPath> {
    let raw = start_param?.trim();
    if raw.is_empty() {
        return None;
    }
    let decoded = match percent_decode_str(raw).decode_utf8() {
        Ok(value) => value.into_owned(),
        // Decoding produced invalid UTF-8: keep the raw token.
        Err(_) => raw.to_string(),
    };

    if decoded.contains('/') {
        direct_path(&decoded)
    } else {
        legacy_token(&decoded)
    }
}

/// Whether a canonical path is a supported deep-link target.
pub fn is_supported_deep_link(path: &CanonicalPath) -> bool {
    if Route::from_path(path.as_str()).is_some_and(|route| route.is_deep_linkable()) {
        return true;
    }
    DYNAMIC_TARGETS.iter().any(|pattern| pattern.matches(path))
}

/// Encode a canonical path as a flat start-parameter token for share links.
///
/// Static routes emit their flat token and dynamic targets the dash form;
/// legacy `channels` spellings are rewritten to `listings` first. Paths
/// that are not deep-linkable, ids using characters outside `A-Za-z0-9_-`,
/// and dash ids that would decode back to a different path all yield
/// `None`.
pub fn encode_deep_link(path: &str) -> Option<String> {
    let path = rewrite_channels_alias(CanonicalPath::new(path));
    if let Some(route) = Route::from_path(path.as_str()) {
        return route.token().map(str::to_owned);
    }
    let token = TOKEN_RULES
        .iter()
        .filter(|rule| rule.prefix != LEGACY_CHANNELS_PREFIX)
        .find_map(|rule| rule.encode(&path))?;
    // Dash ids can collide with the rule suffixes ("x-settings" under a
    // detail rule); only emit tokens that decode back to the same path.
    (parse_deep_link(Some(&token)).as_ref() == Some(&path)).then_some(token)
}

/// Slash-path branch: normalize, rewrite the legacy alias, then accept
/// only supported targets. Candidates that fail here are rejected outright
/// rather than retried as legacy tokens; tokens never contain `/`.
fn direct_path(candidate: &str) -> Option<CanonicalPath> {
    let path = rewrite_channels_alias(CanonicalPath::new(candidate));
    if is_supported_deep_link(&path) {
        Some(path)
    } else {
        debug!(path = path.as_str(), "rejected unsupported deep-link path");
        None
    }
}

/// Flat-token branch: exact static lookup first, then the dynamic rules in
/// order. The first matching rule decides; its output is still checked
/// against the supported-target predicate.
fn legacy_token(token: &str) -> Option<CanonicalPath> {
    if let Some(route) = static_token_route(token) {
        return Some(route.canonical());
    }
    let path = TOKEN_RULES.iter().find_map(|rule| rule.apply(token))?;
    if is_supported_deep_link(&path) {
        Some(path)
    } else {
        debug!(token, path = path.as_str(), "token expanded to unsupported path");
        None
    }
}

/// Exact static-token lookup, including the legacy `channels` alias.
fn static_token_route(token: &str) -> Option<Route> {
    if token == "channels" {
        return Some(Route::Listings);
    }
    Route::ALL.into_iter().find(|route| route.token() == Some(token))
}

/// Rewrite the legacy `/channels` spelling family onto `/listings`.
///
/// Only the three known shapes rewrite; anything deeper stays as-is and
/// fails the supported-target check downstream.
fn rewrite_channels_alias(path: CanonicalPath) -> CanonicalPath {
    if CHANNELS_ROOT.matches(&path) {
        return Route::Listings.canonical();
    }
    if let Some(id) = CHANNEL_SETTINGS.capture(&path) {
        return PathTemplate::ListingSettings.instantiate(id);
    }
    if let Some(id) = CHANNEL_DETAIL.capture(&path) {
        return PathTemplate::ListingDetail.instantiate(id);
    }
    path
}

/// Telegram start parameters admit only `A-Za-z0-9_-`.
fn is_token_safe(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
