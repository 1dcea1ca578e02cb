//! The static route table.
//!
//! Single source of truth for canonical path strings, shared by the
//! deep-link grammar, the role-routing table, and the guards so the three
//! never drift apart.

use std::fmt;
use std::str::FromStr;

use super::{CanonicalPath, NavError};

/// Symbolic names for the static screens of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing screen.
    Home,
    /// Authentication and onboarding flow.
    Onboarding,
    /// Account/profile screen; the one neutral destination for any role.
    Profile,
    /// Brief marketplace browse (publisher side).
    Briefs,
    /// Listing marketplace browse (advertiser side). Legacy spelling of
    /// this family is `channels`.
    Listings,
    /// Advertiser's own briefs.
    MyBriefs,
    /// Publisher's own channels.
    MyChannels,
    /// Brief creation form.
    CreateBrief,
    /// Listing creation form.
    CreateListing,
    /// Deals overview.
    Deals,
}

impl Route {
    /// All routes in a fixed order.
    pub const ALL: [Route; 10] = [
        Route::Home,
        Route::Onboarding,
        Route::Profile,
        Route::Briefs,
        Route::Listings,
        Route::MyBriefs,
        Route::MyChannels,
        Route::CreateBrief,
        Route::CreateListing,
        Route::Deals,
    ];

    /// Canonical path string for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Onboarding => "/onboarding",
            Route::Profile => "/profile",
            Route::Briefs => "/briefs",
            Route::Listings => "/listings",
            Route::MyBriefs => "/my-briefs",
            Route::MyChannels => "/my-channels",
            Route::CreateBrief => "/create-brief",
            Route::CreateListing => "/create-listing",
            Route::Deals => "/deals",
        }
    }

    /// Canonical path value for this route.
    pub fn canonical(&self) -> CanonicalPath {
        CanonicalPath::new(self.path())
    }

    /// Look up the route owning a canonical path, if any.
    pub fn from_path(path: &str) -> Option<Route> {
        let canonical = CanonicalPath::new(path);
        Route::ALL.into_iter().find(|route| route.path() == canonical.as_str())
    }

    /// Whether a start parameter may target this route directly.
    ///
    /// Onboarding is excluded: deep links are only dispatched after
    /// onboarding completes, and the onboarding screen bounces finished
    /// users back home anyway.
    pub fn is_deep_linkable(&self) -> bool {
        !matches!(self, Route::Onboarding)
    }

    /// Flat start-parameter token naming this route, for deep-linkable
    /// routes.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Route::Home => Some("home"),
            Route::Onboarding => None,
            Route::Profile => Some("profile"),
            Route::Briefs => Some("briefs"),
            Route::Listings => Some("listings"),
            Route::MyBriefs => Some("my-briefs"),
            Route::MyChannels => Some("my-channels"),
            Route::CreateBrief => Some("create-brief"),
            Route::CreateListing => Some("create-listing"),
            Route::Deals => Some("deals"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = NavError;

    /// Parse a route from its canonical path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| NavError::UnknownRoute(s.to_string()))
    }
}
