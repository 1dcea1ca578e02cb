//! One-shot dispatch of the launch deep link.

use tracing::debug;

use crate::domain::{CanonicalPath, SessionSnapshot, parse_deep_link, resolve_role_safe_path};
use crate::ports::{Navigator, StartParamSource};

/// What one dispatcher evaluation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Session not settled yet; nothing consumed, evaluate again later.
    Waiting,
    /// An earlier evaluation already consumed the launch.
    AlreadyHandled,
    /// Launch consumed; the app stays where it is.
    NoNavigation,
    /// Launch consumed with one replace-navigation to this path.
    Navigated(CanonicalPath),
}

/// Consumes the launch deep link exactly once per dispatcher instance.
///
/// `evaluate` may be called on every session change; it waits until the
/// session is settled, signed in, and onboarded, then resolves the start
/// parameter in a single pass. The handled flag flips before any effect
/// runs, so a re-entrant evaluation can never navigate a second time.
/// Dropping the dispatcher before it fires cancels the deep link.
pub struct DeepLinkDispatcher<S, N> {
    params: S,
    navigator: N,
    handled: bool,
}

impl<S: StartParamSource, N: Navigator> DeepLinkDispatcher<S, N> {
    pub fn new(params: S, navigator: N) -> Self {
        Self { params, navigator, handled: false }
    }

    /// Whether the launch has been consumed.
    pub fn handled(&self) -> bool {
        self.handled
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Run one dispatch evaluation against the current session state.
    pub fn evaluate(
        &mut self,
        session: &SessionSnapshot,
        current_path: &CanonicalPath,
    ) -> DispatchOutcome {
        if self.handled {
            return DispatchOutcome::AlreadyHandled;
        }
        if !session.is_ready() {
            return DispatchOutcome::Waiting;
        }
        self.handled = true;

        let start_param = self.params.start_param();
        let Some(target) = parse_deep_link(start_param.as_deref()) else {
            debug!("launch carried no usable deep link");
            return DispatchOutcome::NoNavigation;
        };
        let resolved = resolve_role_safe_path(target.as_str(), session.active_role);
        if resolved == *current_path {
            debug!(path = resolved.as_str(), "deep link target already current");
            return DispatchOutcome::NoNavigation;
        }
        debug!(path = resolved.as_str(), "replace-navigating to deep link target");
        self.navigator.replace(&resolved);
        DispatchOutcome::Navigated(resolved)
    }
}
