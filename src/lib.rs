//! tma-nav: navigation resolution for a Telegram Mini App ad-marketplace
//! client. Parses launch deep links, maps paths to role requirements,
//! decides onboarding and role redirects, and dispatches the launch deep
//! link exactly once per app start.

pub mod domain;
pub mod ports;
pub mod services;

pub use domain::{
    AuthSnapshot, CanonicalPath, NavError, Redirect, RedirectReason, Role, Route, ScreenDecision,
    ScreenGate, SessionSnapshot, default_route_for_role, encode_deep_link,
    is_path_allowed_for_role, is_supported_deep_link, normalize, onboarding_only_redirect,
    parse_deep_link, require_onboarding_redirect, required_role_for_path, resolve_role_safe_path,
    resolve_screen, role_guard_redirect,
};
pub use ports::{Navigator, StartParamSource};
pub use services::{
    BackHandlerRegistry, BackResponse, DeepLinkDispatcher, DispatchOutcome, HandlerId,
    LaunchParams,
};
