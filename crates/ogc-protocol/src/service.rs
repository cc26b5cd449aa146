//! Service-level types shared by every protocol: operation URLs and provider
//! contact details.

use std::collections::BTreeMap;
use std::fmt;

use ogc_common::xml::{attribute, children, find_child, find_children, find_path, text};
use ogc_common::XmlElement;
use serde::{Deserialize, Serialize};

/// HTTP method advertised for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Map a DCP element name (`Get`, `Post`) to a method.
    pub(crate) fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Get" => Some(HttpMethod::Get),
            "Post" => Some(HttpMethod::Post),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// Operation name (e.g. `GetFeature`) to method to URL.
pub type OperationUrls = BTreeMap<String, BTreeMap<HttpMethod, String>>;

/// Organisation publishing the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub site: String,
    pub contact: Contact,
}

/// Contact details of the service provider. Fields the document does not
/// advertise are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub position: String,
    pub phone: String,
    pub fax: String,
    pub address: String,
    pub city: String,
    pub administrative_area: String,
    pub postal_code: String,
    pub country: String,
    pub email: String,
}

/// Read an OWS `ServiceProvider` section (WFS 1.1.0+, WMTS).
pub(crate) fn read_ows_provider(root: &XmlElement) -> Option<Provider> {
    let provider = find_child(Some(root), "ServiceProvider", false)?;
    let contact = find_child(Some(provider), "ServiceContact", false);
    let info = find_child(contact, "ContactInfo", false);
    let phone = find_child(info, "Phone", false);
    let address = find_child(info, "Address", false);

    Some(Provider {
        name: text(find_child(Some(provider), "ProviderName", false)),
        site: attribute(find_child(Some(provider), "ProviderSite", false), "xlink:href"),
        contact: Contact {
            name: text(find_child(contact, "IndividualName", false)),
            position: text(find_child(contact, "PositionName", false)),
            phone: text(find_child(phone, "Voice", false)),
            fax: text(find_child(phone, "Facsimile", false)),
            address: text(find_child(address, "DeliveryPoint", false)),
            city: text(find_child(address, "City", false)),
            administrative_area: text(find_child(address, "AdministrativeArea", false)),
            postal_code: text(find_child(address, "PostalCode", false)),
            country: text(find_child(address, "Country", false)),
            email: text(find_child(address, "ElectronicMailAddress", false)),
        },
    })
}

/// Read OWS `OperationsMetadata/Operation[name]/DCP/HTTP/<Method>@xlink:href`.
///
/// When an operation lists several URLs for one method, the first wins.
pub(crate) fn read_ows_operation_urls(root: &XmlElement) -> OperationUrls {
    let metadata = find_child(Some(root), "OperationsMetadata", false);
    let mut urls = OperationUrls::new();

    for operation in find_children(metadata, "Operation", false) {
        let name = attribute(Some(operation), "name");
        if name.is_empty() {
            continue;
        }
        let methods = urls.entry(name).or_default();
        for http in find_children(Some(operation), "DCP", false)
            .into_iter()
            .filter_map(|dcp| find_child(Some(dcp), "HTTP", false))
        {
            for endpoint in children(Some(http)) {
                if let Some(method) = HttpMethod::from_tag(endpoint.local_name()) {
                    let href = attribute(Some(endpoint), "xlink:href");
                    if !href.is_empty() {
                        methods.entry(method).or_insert(href);
                    }
                }
            }
        }
    }
    urls
}

/// `Keywords/Keyword` texts under a parent element.
pub(crate) fn read_keyword_list(parent: Option<&XmlElement>, container: &str) -> Vec<String> {
    find_children(find_child(parent, container, false), "Keyword", false)
        .into_iter()
        .map(|keyword| text(Some(keyword)))
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

/// Comma-separated keyword text (WFS 1.0.0).
pub(crate) fn split_keywords(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Text of a direct child, or `None` when missing or empty.
pub(crate) fn optional_text(parent: Option<&XmlElement>, name: &str) -> Option<String> {
    non_empty(text(find_child(parent, name, false)))
}

pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Text of every direct child with the given name.
pub(crate) fn child_texts(parent: Option<&XmlElement>, name: &str) -> Vec<String> {
    find_children(parent, name, false)
        .into_iter()
        .map(|el| text(Some(el)))
        .filter(|value| !value.is_empty())
        .collect()
}

/// Text found by following a path of direct children.
pub(crate) fn path_text(parent: Option<&XmlElement>, path: &[&str]) -> String {
    text(find_path(parent, path))
}
