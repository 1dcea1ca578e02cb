//! Session state as the guards see it.

use serde::{Deserialize, Serialize};

use super::Role;

/// Point-in-time snapshot of the viewer's session.
///
/// Guards take a snapshot by value and never re-read live state, so one
/// decision is made against one consistent view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub onboarding_completed: bool,
    /// True while the session is still being restored; guards must not
    /// redirect off a half-loaded snapshot.
    pub is_bootstrapping: bool,
    #[serde(default)]
    pub active_role: Option<Role>,
}

impl SessionSnapshot {
    /// The authentication-only projection of this snapshot.
    pub fn auth(&self) -> AuthSnapshot {
        AuthSnapshot {
            is_authenticated: self.is_authenticated,
            onboarding_completed: self.onboarding_completed,
        }
    }

    /// Whether the session is settled, signed in, and onboarded.
    pub fn is_ready(&self) -> bool {
        !self.is_bootstrapping && self.is_authenticated && self.onboarding_completed
    }
}

/// The subset of session state the onboarding guards need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSnapshot {
    pub is_authenticated: bool,
    pub onboarding_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_needs_all_three_flags() {
        let ready = SessionSnapshot {
            is_authenticated: true,
            onboarding_completed: true,
            is_bootstrapping: false,
            active_role: Some(Role::Advertiser),
        };
        assert!(ready.is_ready());
        assert!(!SessionSnapshot { is_bootstrapping: true, ..ready }.is_ready());
        assert!(!SessionSnapshot { is_authenticated: false, ..ready }.is_ready());
        assert!(!SessionSnapshot { onboarding_completed: false, ..ready }.is_ready());
    }

    #[test]
    fn deserializes_camel_case_payloads() {
        let snapshot: SessionSnapshot = serde_json::from_str(
            r#"{
                "isAuthenticated": true,
                "onboardingCompleted": false,
                "isBootstrapping": false,
                "activeRole": "publisher"
            }"#,
        )
        .unwrap();
        assert!(snapshot.is_authenticated);
        assert!(!snapshot.onboarding_completed);
        assert_eq!(snapshot.active_role, Some(Role::Publisher));
    }

    #[test]
    fn missing_role_defaults_to_none() {
        let snapshot: SessionSnapshot = serde_json::from_str(
            r#"{"isAuthenticated": false, "onboardingCompleted": false, "isBootstrapping": true}"#,
        )
        .unwrap();
        assert_eq!(snapshot.active_role, None);
        assert!(!snapshot.is_ready());
    }

    #[test]
    fn auth_projection_drops_role_and_bootstrap() {
        let snapshot = SessionSnapshot {
            is_authenticated: true,
            onboarding_completed: true,
            is_bootstrapping: true,
            active_role: Some(Role::Publisher),
        };
        assert_eq!(
            snapshot.auth(),
            AuthSnapshot { is_authenticated: true, onboarding_completed: true }
        );
    }
}
