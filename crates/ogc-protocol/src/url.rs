//! Query-string helpers shared by the URL builders.

use ogc_common::{OgcError, OgcResult};
use url::Url;

/// Set query parameters on a service URL.
///
/// Existing parameters whose names match a new one case-insensitively are
/// removed (so `request=GetCapabilities` in a capabilities-advertised URL
/// does not survive next to `REQUEST=GetFeature`). New parameters are
/// appended in order with `application/x-www-form-urlencoded` encoding.
pub fn set_query_params(base: &str, params: &[(&str, String)]) -> OgcResult<String> {
    let mut url = Url::parse(base.trim()).map_err(|e| OgcError::InvalidUrl {
        message: format!("{}: {}", base, e),
    })?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !params.iter().any(|(name, _)| name.eq_ignore_ascii_case(key)))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() && params.is_empty() {
        url.set_query(None);
        return Ok(url.to_string());
    }

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .extend_pairs(params.iter().map(|(name, value)| (*name, value.as_str())));

    Ok(url.to_string())
}
