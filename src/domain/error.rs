use thiserror::Error;

/// Library-wide error type for navigation operations.
///
/// The resolution core itself never fails: unparseable deep links and
/// unauthorized targets degrade to "nothing to do" or a redirect. Errors
/// only exist at the handover edges, where the host feeds us strings.
#[derive(Debug, Error)]
pub enum NavError {
    /// Role string is not a known marketplace persona.
    #[error("Unknown role '{0}': must be 'advertiser' or 'publisher'")]
    UnknownRole(String),

    /// Route name does not exist in the static route table.
    #[error("Unknown route '{0}'")]
    UnknownRoute(String),

    /// Launch payload handed over by the web-app bridge could not be decoded.
    #[error("Malformed launch payload: {0}")]
    LaunchPayload(#[from] serde_json::Error),
}
