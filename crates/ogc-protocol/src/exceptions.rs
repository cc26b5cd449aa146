//! Detection of service exception reports.
//!
//! Servers report application-level failures inside an otherwise valid XML
//! response, in one of two shapes:
//! - `ServiceExceptionReport/ServiceException` (WFS 1.0.0, every WMS version)
//! - `ExceptionReport/Exception` with `ExceptionText` (OWS: WFS 1.1.0+, WMTS)
//!
//! A `code` attribute on `ServiceException` is reported whatever the
//! protocol, since WMS shares that shape with WFS 1.0.0. WMS reports that
//! carry no `code` attribute yield an empty code.

use ogc_common::xml::{attribute, find_child, root, text};
use ogc_common::{OgcResult, ServiceExceptionError, XmlDocument, XmlElement};

/// Locate the first exception element anywhere in the document.
pub fn find_service_exception(document: &XmlDocument) -> Option<&XmlElement> {
    find_in_report(root(document), "ServiceExceptionReport", "ServiceException")
        .or_else(|| find_in_report(root(document), "ExceptionReport", "Exception"))
}

fn find_in_report<'a>(
    root: &'a XmlElement,
    report: &str,
    exception: &str,
) -> Option<&'a XmlElement> {
    let report = if root.local_name() == report {
        Some(root)
    } else {
        find_child(Some(root), report, true)
    };
    find_child(report, exception, false)
}

/// Return the document unchanged, or fail with the exception it reports.
pub fn check_for_exception(document: XmlDocument, request_url: &str) -> OgcResult<XmlDocument> {
    let Some(exception) = find_service_exception(&document) else {
        return Ok(document);
    };

    let (code, message) = if exception.local_name() == "Exception" {
        let code = match attribute(Some(exception), "exceptionCode") {
            code if code.is_empty() => attribute(Some(exception), "code"),
            code => code,
        };
        let message = match text(find_child(Some(exception), "ExceptionText", false)) {
            message if message.is_empty() => text(Some(exception)),
            message => message,
        };
        (code, message)
    } else {
        (attribute(Some(exception), "code"), text(Some(exception)))
    };
    let locator = attribute(Some(exception), "locator");

    Err(ServiceExceptionError {
        code,
        locator,
        message,
        request_url: request_url.to_string(),
        response: document,
    }
    .into())
}
