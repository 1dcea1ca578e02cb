pub mod access;
pub mod deep_link;
pub mod error;
pub mod guard;
pub mod path;
pub mod pattern;
pub mod role;
pub mod route;
pub mod session;

pub use access::{
    default_route_for_role, is_path_allowed_for_role, required_role_for_path,
    resolve_role_safe_path,
};
pub use deep_link::{encode_deep_link, is_supported_deep_link, parse_deep_link};
pub use error::NavError;
pub use guard::{
    Redirect, RedirectReason, ScreenDecision, ScreenGate, onboarding_only_redirect,
    require_onboarding_redirect, resolve_screen, role_guard_redirect,
};
pub use path::{CanonicalPath, normalize};
pub use role::Role;
pub use route::Route;
pub use session::{AuthSnapshot, SessionSnapshot};
