//! Fetching and decoding service documents.

use std::borrow::Cow;

use encoding_rs::Encoding;
use ogc_common::xml::parse_xml;
use ogc_common::{EndpointError, OgcError, OgcResult, XmlDocument};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::shared::SharedFetch;
use crate::transport::{FetchMethod, FetchResponse};

/// GET a URL and require a successful status.
///
/// A request that produces no response is probed with HEAD: a host that
/// answers the probe is reachable but blocked the request (CORS), otherwise
/// it is unreachable. HTTP error statuses carry the response body text.
async fn fetch_ok(fetch: &SharedFetch, url: &str) -> OgcResult<FetchResponse> {
    let response = match fetch.fetch(url, FetchMethod::Get).await {
        Ok(response) => response,
        Err(err) => {
            debug!(error = %err, "Request failed, probing with HEAD");
            let error = match fetch.fetch(url, FetchMethod::Head).await {
                Ok(_) => EndpointError::blocked(format!(
                    "The document could not be fetched due to CORS limitations: {}",
                    err
                )),
                Err(_) => EndpointError::unreachable(format!(
                    "Fetching the document failed either because of network error or the host is unreachable: {}",
                    err
                )),
            };
            return Err(error.into());
        }
    };

    if !response.is_success() {
        let body = String::from_utf8_lossy(&response.body);
        return Err(EndpointError::http(
            response.status,
            format!("Received an error with code {}: {}", response.status, body.trim()),
        )
        .into());
    }
    Ok(response)
}

/// Fetch and parse an XML document.
///
/// Service exception reports are returned as regular documents.
#[instrument(skip(fetch), fields(url = %url))]
pub async fn query_xml_document(fetch: &SharedFetch, url: &str) -> OgcResult<XmlDocument> {
    let response = fetch_ok(fetch, url).await?;
    let text = decode_body(&response, fetch.fallback_encoding(), url);
    parse_xml(&text)
}

/// Fetch and parse a JSON document such as a GeoJSON GetFeature response.
#[instrument(skip(fetch), fields(url = %url))]
pub async fn query_json_document(fetch: &SharedFetch, url: &str) -> OgcResult<Value> {
    let response = fetch_ok(fetch, url).await?;
    serde_json::from_slice(&response.body).map_err(|e| OgcError::InvalidGeoJson {
        message: format!("{}: {}", url, e),
    })
}

/// Decode a response body to text.
///
/// The encoding comes from the Content-Type charset, then the XML
/// declaration, then a byte order mark, then the fallback.
pub fn decode_body<'a>(response: &'a FetchResponse, fallback: &'static Encoding, url: &str) -> Cow<'a, str> {
    let encoding = response
        .content_type()
        .and_then(charset_from_content_type)
        .or_else(|| encoding_from_declaration(&response.body))
        .or_else(|| Encoding::for_bom(&response.body).map(|(encoding, _)| encoding))
        .unwrap_or_else(|| {
            warn!(
                url = %url,
                encoding = fallback.name(),
                "No character encoding declared, using fallback"
            );
            fallback
        });

    let (text, used, had_errors) = encoding.decode(&response.body);
    if had_errors {
        warn!(url = %url, encoding = used.name(), "Document contains malformed byte sequences");
    }
    text
}

fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .and_then(|(_, value)| Encoding::for_label(value.trim().trim_matches('"').as_bytes()))
}

/// Read `encoding="..."` from an ASCII-compatible `<?xml ... ?>` declaration.
fn encoding_from_declaration(body: &[u8]) -> Option<&'static Encoding> {
    let body = body.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(body);
    let head = &body[..body.len().min(256)];
    if !head.starts_with(b"<?xml") {
        return None;
    }
    let end = head.windows(2).position(|pair| pair == b"?>")?;
    let declaration = std::str::from_utf8(&head[..end]).ok()?;

    let (_, rest) = declaration.split_once("encoding")?;
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let label = rest[1..].split(quote).next()?;
    Encoding::for_label(label.as_bytes())
}
