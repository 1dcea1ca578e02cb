//! Launch data handed over by the Telegram web-app bridge.

use serde::Deserialize;
use url::{Url, form_urlencoded};

use crate::domain::NavError;
use crate::ports::StartParamSource;

/// Query and fragment keys that may carry the start parameter, most
/// specific first.
const START_PARAM_KEYS: [&str; 3] = ["tgWebAppStartParam", "startapp", "start"];

/// Raw launch data collected from the host environment.
///
/// The host hands the start parameter over through several channels
/// depending on how the app was opened; this struct keeps them all and
/// resolves the precedence in one place.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchParams {
    /// Start parameter the bridge exposed directly in memory.
    #[serde(default)]
    pub start_param: Option<String>,
    /// Raw `initData` string, form-urlencoded.
    #[serde(default)]
    pub init_data: Option<String>,
    /// Full web-app URL, when the host exposes one.
    #[serde(default)]
    pub url: Option<Url>,
}

impl LaunchParams {
    /// Decode a bridge payload.
    pub fn from_json(payload: &str) -> Result<Self, NavError> {
        Ok(serde_json::from_str(payload)?)
    }

    fn from_init_data(&self) -> Option<String> {
        let init_data = self.init_data.as_deref()?;
        form_urlencoded::parse(init_data.as_bytes())
            .find(|(key, value)| key == "start_param" && !value.is_empty())
            .map(|(_, value)| value.into_owned())
    }

    fn from_url_query(&self) -> Option<String> {
        let url = self.url.as_ref()?;
        first_key_match(url.query_pairs())
    }

    fn from_url_fragment(&self) -> Option<String> {
        let fragment = self.url.as_ref()?.fragment()?;
        first_key_match(form_urlencoded::parse(fragment.as_bytes()))
    }
}

impl StartParamSource for LaunchParams {
    /// First non-empty value across the channels: the in-memory field,
    /// then `start_param` inside `initData`, then the URL query keys,
    /// then the same keys in the URL fragment.
    fn start_param(&self) -> Option<String> {
        self.start_param
            .clone()
            .filter(|value| !value.is_empty())
            .or_else(|| self.from_init_data())
            .or_else(|| self.from_url_query())
            .or_else(|| self.from_url_fragment())
    }
}

fn first_key_match<'a>(
    pairs: impl Iterator<Item = (std::borrow::Cow<'a, str>, std::borrow::Cow<'a, str>)>,
) -> Option<String> {
    let pairs: Vec<(String, String)> =
        pairs.map(|(key, value)| (key.into_owned(), value.into_owned())).collect();
    START_PARAM_KEYS.iter().find_map(|wanted| {
        pairs
            .iter()
            .find(|(key, value)| key == wanted && !value.is_empty())
            .map(|(_, value)| value.clone())
    })
}
