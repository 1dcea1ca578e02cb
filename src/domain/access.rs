//! Role-based route authorization.
//!
//! An ordered rule table decides which persona a path belongs to; paths
//! matching no rule are public. On a mismatch the resolver falls back to
//! the role's landing route instead of erroring.

use tracing::debug;

use super::pattern::{PathPattern, Segment};
use super::{CanonicalPath, Role, Route};

/// One requirement rule: paths of this shape need this role.
struct RoleRule {
    pattern: PathPattern,
    role: Role,
}

const fn advertiser_only(segments: &'static [Segment]) -> RoleRule {
    RoleRule { pattern: PathPattern::new(segments), role: Role::Advertiser }
}

const fn publisher_only(segments: &'static [Segment]) -> RoleRule {
    RoleRule { pattern: PathPattern::new(segments), role: Role::Publisher }
}

/// Ordered requirement rules. The advertiser family is tested before the
/// publisher family; the two are disjoint today, but the precedence is
/// fixed here rather than left to chance.
const ROLE_RULES: [RoleRule; 13] = [
    // Advertisers browse inventory (current and legacy spellings), manage
    // their own briefs, and create new ones.
    advertiser_only(&[Segment::Lit("listings")]),
    advertiser_only(&[Segment::Lit("listings"), Segment::Param]),
    advertiser_only(&[Segment::Lit("channels")]),
    advertiser_only(&[Segment::Lit("channels"), Segment::Param]),
    advertiser_only(&[Segment::Lit("my-briefs")]),
    advertiser_only(&[Segment::Lit("create-brief")]),
    // Publishers manage their channels, work the brief marketplace, and
    // configure their listings (either spelling).
    publisher_only(&[Segment::Lit("my-channels")]),
    publisher_only(&[Segment::Lit("briefs")]),
    publisher_only(&[Segment::Lit("briefs"), Segment::Param]),
    publisher_only(&[Segment::Lit("briefs"), Segment::Param, Segment::Lit("applications")]),
    publisher_only(&[Segment::Lit("listings"), Segment::Param, Segment::Lit("settings")]),
    publisher_only(&[Segment::Lit("channels"), Segment::Param, Segment::Lit("settings")]),
    publisher_only(&[Segment::Lit("create-listing")]),
];

/// The role required to visit `path`, if any.
///
/// The path is normalized first; paths matching no rule are public.
pub fn required_role_for_path(path: &str) -> Option<Role> {
    let canonical = CanonicalPath::new(path);
    ROLE_RULES.iter().find(|rule| rule.pattern.matches(&canonical)).map(|rule| rule.role)
}

/// Whether `path` may be visited with the given active role.
pub fn is_path_allowed_for_role(path: &str, active_role: Option<Role>) -> bool {
    match required_role_for_path(path) {
        None => true,
        Some(required) => active_role == Some(required),
    }
}

/// The landing route for a role, used whenever a requested path is not
/// available to it.
///
/// With no role set, no restricted default is safe either; profile is the
/// one neutral destination where the user can pick or confirm a persona.
pub fn default_route_for_role(active_role: Option<Role>) -> CanonicalPath {
    match active_role {
        Some(Role::Advertiser) => Route::Listings.canonical(),
        Some(Role::Publisher) => Route::Briefs.canonical(),
        None => Route::Profile.canonical(),
    }
}

/// The requested path if the role may visit it, otherwise the role's
/// default landing route.
pub fn resolve_role_safe_path(path: &str, active_role: Option<Role>) -> CanonicalPath {
    let candidate = CanonicalPath::new(path);
    if is_path_allowed_for_role(candidate.as_str(), active_role) {
        return candidate;
    }
    let fallback = default_route_for_role(active_role);
    debug!(
        requested = candidate.as_str(),
        fallback = fallback.as_str(),
        "role-restricted path rewritten to the role default"
    );
    fallback
}
