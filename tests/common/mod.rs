//! Shared doubles and session builders for navigation tests.

use std::sync::Mutex;

use tma_nav::{CanonicalPath, Navigator, Role, SessionSnapshot, StartParamSource};

/// Start-parameter source returning a fixed value.
#[allow(dead_code)]
pub struct FakeStartParam(Option<String>);

#[allow(dead_code)]
impl FakeStartParam {
    pub fn some(value: &str) -> Self {
        Self(Some(value.to_string()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl StartParamSource for FakeStartParam {
    fn start_param(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Navigator recording every replace-navigation it receives.
#[derive(Default)]
pub struct RecordingNavigator {
    pub replacements: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replacements(&self) -> Vec<String> {
        self.replacements.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, path: &CanonicalPath) {
        self.replacements.lock().unwrap().push(path.as_str().to_owned());
    }
}

/// Session that is settled, signed in, and onboarded.
#[allow(dead_code)]
pub fn onboarded_session(active_role: Option<Role>) -> SessionSnapshot {
    SessionSnapshot {
        is_authenticated: true,
        onboarding_completed: true,
        is_bootstrapping: false,
        active_role,
    }
}

/// Session still restoring; nothing about it can be trusted yet.
#[allow(dead_code)]
pub fn bootstrapping_session() -> SessionSnapshot {
    SessionSnapshot {
        is_authenticated: false,
        onboarding_completed: false,
        is_bootstrapping: true,
        active_role: None,
    }
}

/// Signed-in session that has not completed onboarding.
#[allow(dead_code)]
pub fn pre_onboarding_session() -> SessionSnapshot {
    SessionSnapshot {
        is_authenticated: true,
        onboarding_completed: false,
        is_bootstrapping: false,
        active_role: None,
    }
}
