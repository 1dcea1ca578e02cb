//! Route authorization, guard composition, and token grammar through the
//! public API.

use tma_nav::{
    AuthSnapshot, CanonicalPath, RedirectReason, Role, Route, ScreenDecision, ScreenGate,
    SessionSnapshot, default_route_for_role, encode_deep_link, parse_deep_link,
    require_onboarding_redirect, required_role_for_path, resolve_role_safe_path, resolve_screen,
};

#[test]
fn required_roles_follow_the_marketplace_split() {
    // Advertisers browse the publisher inventory; publishers work the
    // advertiser briefs.
    assert_eq!(required_role_for_path("/listings"), Some(Role::Advertiser));
    assert_eq!(required_role_for_path("/briefs/123/applications"), Some(Role::Publisher));
    assert_eq!(required_role_for_path("/"), None);
}

#[test]
fn role_safe_resolution_falls_back_to_the_role_home() {
    assert_eq!(
        resolve_role_safe_path("/my-briefs", Some(Role::Publisher)),
        default_route_for_role(Some(Role::Publisher))
    );
    assert_eq!(
        resolve_role_safe_path("/briefs", Some(Role::Advertiser)),
        default_route_for_role(Some(Role::Advertiser))
    );
    assert_eq!(resolve_role_safe_path("/briefs", None), CanonicalPath::new("/profile"));
}

#[test]
fn unauthenticated_viewers_always_redirect_to_onboarding() {
    for onboarding_completed in [false, true] {
        let auth = AuthSnapshot { is_authenticated: false, onboarding_completed };
        let redirect = require_onboarding_redirect(&auth)
            .unwrap_or_else(|| panic!("no redirect with onboarding={onboarding_completed}"));
        assert_eq!(redirect.target, CanonicalPath::new("/onboarding"));
        assert_eq!(redirect.reason, RedirectReason::OnboardingRequired);
    }
}

#[test]
fn screen_resolution_checks_bootstrap_then_onboarding_then_role() {
    let gate = ScreenGate::for_path("/listings");

    let bootstrapping = SessionSnapshot {
        is_authenticated: false,
        onboarding_completed: false,
        is_bootstrapping: true,
        active_role: Some(Role::Publisher),
    };
    assert_eq!(resolve_screen(&bootstrapping, gate), ScreenDecision::Loading);

    // Same session, done bootstrapping: onboarding outranks the role check.
    let signed_out = SessionSnapshot { is_bootstrapping: false, ..bootstrapping };
    let ScreenDecision::Redirect(redirect) = resolve_screen(&signed_out, gate) else {
        panic!("expected an onboarding redirect");
    };
    assert_eq!(redirect.reason, RedirectReason::OnboardingRequired);

    let wrong_role = SessionSnapshot {
        is_authenticated: true,
        onboarding_completed: true,
        is_bootstrapping: false,
        active_role: Some(Role::Publisher),
    };
    let ScreenDecision::Redirect(redirect) = resolve_screen(&wrong_role, gate) else {
        panic!("expected a role redirect");
    };
    assert_eq!(redirect.reason, RedirectReason::RoleForbidden);
    assert_eq!(redirect.target, CanonicalPath::new("/briefs"));

    let advertiser = SessionSnapshot { active_role: Some(Role::Advertiser), ..wrong_role };
    assert_eq!(resolve_screen(&advertiser, gate), ScreenDecision::Render);
}

#[test]
fn every_deep_linkable_route_round_trips_through_its_token() {
    for route in Route::ALL {
        let Some(token) = encode_deep_link(route.path()) else {
            assert!(!route.is_deep_linkable(), "{route} should encode");
            continue;
        };
        assert_eq!(
            parse_deep_link(Some(&token)),
            Some(route.canonical()),
            "token {token} should parse back to {route}"
        );
    }
}

#[test]
fn legacy_channel_spellings_map_to_listings() {
    assert_eq!(parse_deep_link(Some("/channels")), Some(CanonicalPath::new("/listings")));
    assert_eq!(
        parse_deep_link(Some("/channels/abc-123/settings")),
        Some(CanonicalPath::new("/listings/abc-123/settings"))
    );
    assert_eq!(
        parse_deep_link(Some("channels-channel-with-dashes")),
        Some(CanonicalPath::new("/listings/channel-with-dashes"))
    );
}

#[test]
fn dashed_ids_survive_suffixed_tokens() {
    assert_eq!(
        parse_deep_link(Some("briefs-brief-with-dashes-applications")),
        Some(CanonicalPath::new("/briefs/brief-with-dashes/applications"))
    );
}

#[test]
fn unsupported_launch_values_parse_to_nothing() {
    for start_param in [Some("unknown-target"), Some("/admin"), Some(""), Some("   "), None] {
        assert_eq!(parse_deep_link(start_param), None, "start param {start_param:?}");
    }
}

#[test]
fn share_links_use_the_flat_token_grammar() {
    assert_eq!(encode_deep_link("/listings/ch-1"), Some("listings-ch-1".to_owned()));
    assert_eq!(encode_deep_link("/channels/ch-1"), Some("listings-ch-1".to_owned()));
    assert_eq!(
        encode_deep_link("/briefs/b1/applications"),
        Some("briefs-b1-applications".to_owned())
    );
    // Not shareable: the onboarding flow and ids outside the start-param
    // alphabet.
    assert_eq!(encode_deep_link("/onboarding"), None);
    assert_eq!(encode_deep_link("/listings/ch 1"), None);
}
