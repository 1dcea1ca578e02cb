//! Pure guard decisions for screen access.
//!
//! Each guard folds a session snapshot into `Option<Redirect>`; rendering
//! and navigation stay on the caller's side. `resolve_screen` fixes the
//! order the guards compose in.

use serde::Serialize;
use tracing::debug;

use super::access::{default_route_for_role, required_role_for_path};
use super::{CanonicalPath, Role, Route};
use super::session::{AuthSnapshot, SessionSnapshot};

/// Why a guard redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedirectReason {
    OnboardingRequired,
    AlreadyOnboarded,
    RoleForbidden,
}

/// A guard's verdict: send the viewer here, for this reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub target: CanonicalPath,
    pub reason: RedirectReason,
}

/// Redirect to onboarding unless the viewer is signed in and onboarded.
///
/// An unauthenticated viewer is always redirected, whatever the
/// onboarding flag claims; a stale flag must not open the app.
pub fn require_onboarding_redirect(auth: &AuthSnapshot) -> Option<Redirect> {
    if auth.is_authenticated && auth.onboarding_completed {
        return None;
    }
    Some(Redirect {
        target: Route::Onboarding.canonical(),
        reason: RedirectReason::OnboardingRequired,
    })
}

/// Redirect onboarded viewers off the onboarding flow, back to home.
pub fn onboarding_only_redirect(auth: &AuthSnapshot) -> Option<Redirect> {
    if auth.is_authenticated && auth.onboarding_completed {
        return Some(Redirect {
            target: Route::Home.canonical(),
            reason: RedirectReason::AlreadyOnboarded,
        });
    }
    None
}

/// Redirect to the viewer's own default route unless their active role is
/// the required one.
pub fn role_guard_redirect(active_role: Option<Role>, required_role: Role) -> Option<Redirect> {
    if active_role == Some(required_role) {
        return None;
    }
    Some(Redirect {
        target: default_route_for_role(active_role),
        reason: RedirectReason::RoleForbidden,
    })
}

/// The gate a screen declares for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenGate {
    /// Viewer must be signed in and onboarded, and hold `required_role`
    /// if one is set.
    RequireOnboarded { required_role: Option<Role> },
    /// Screen exists only for viewers who have not finished onboarding.
    OnboardingOnly,
}

impl ScreenGate {
    /// The conventional gate for a path: the onboarding flow is
    /// onboarding-only, everything else requires an onboarded session
    /// plus whatever role the routing table demands.
    pub fn for_path(path: &str) -> Self {
        if Route::from_path(path) == Some(Route::Onboarding) {
            return Self::OnboardingOnly;
        }
        Self::RequireOnboarded { required_role: required_role_for_path(path) }
    }
}

/// What the screen shell should do for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenDecision {
    /// Session still restoring; show the loading state, decide later.
    Loading,
    Redirect(Redirect),
    Render,
}

/// Fold a session snapshot through a screen's gate.
///
/// Order is fixed: bootstrap check, then onboarding, then role. An
/// unauthenticated viewer therefore always lands on onboarding and never
/// sees a role redirect.
pub fn resolve_screen(session: &SessionSnapshot, gate: ScreenGate) -> ScreenDecision {
    if session.is_bootstrapping {
        return ScreenDecision::Loading;
    }
    let auth = session.auth();
    let redirect = match gate {
        ScreenGate::OnboardingOnly => onboarding_only_redirect(&auth),
        ScreenGate::RequireOnboarded { required_role } => require_onboarding_redirect(&auth)
            .or_else(|| {
                required_role.and_then(|required| role_guard_redirect(session.active_role, required))
            }),
    };
    match redirect {
        Some(redirect) => {
            debug!(target = redirect.target.as_str(), reason = ?redirect.reason, "guard redirect");
            ScreenDecision::Redirect(redirect)
        }
        None => ScreenDecision::Render,
    }
}
