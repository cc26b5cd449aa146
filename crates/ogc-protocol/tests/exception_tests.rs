//! Service exception detection tests.

use ogc_common::xml::parse_xml;
use ogc_common::OgcError;
use ogc_protocol::check_for_exception;
use test_utils::fixtures::{exceptions, wfs};

const REQUEST: &str = "https://example.com/geoserver/wfs?REQUEST=GetCapabilitiesX";

#[test]
fn test_wfs_1_0_0_report() {
    let err = check_for_exception(parse_xml(exceptions::WFS_1_0_0).unwrap(), REQUEST).unwrap_err();
    let OgcError::ServiceException(exception) = err else {
        panic!("expected a service exception");
    };
    assert_eq!(exception.code, "InvalidParameterValue");
    assert_eq!(exception.locator, "request");
    assert_eq!(exception.message, "Invalid request parameter: GetCapabilitiesX");
    assert_eq!(exception.request_url, REQUEST);
    assert_eq!(exception.response.root().local_name(), "ServiceExceptionReport");
}

#[test]
fn test_ows_report() {
    let err = check_for_exception(parse_xml(exceptions::OWS).unwrap(), REQUEST).unwrap_err();
    assert_eq!(err.exception_code(), Some("MissingParameterValue"));
    let OgcError::ServiceException(exception) = err else {
        panic!("expected a service exception");
    };
    assert_eq!(exception.locator, "typeName");
    assert_eq!(exception.message, "The query requires at least one type name");
}

#[test]
fn test_wms_report_without_code() {
    let err = check_for_exception(parse_xml(exceptions::WMS).unwrap(), REQUEST).unwrap_err();
    let OgcError::ServiceException(exception) = err else {
        panic!("expected a service exception");
    };
    assert_eq!(exception.code, "");
    assert_eq!(exception.message, "Layer not defined: unknown");
}

#[test]
fn test_wms_report_keeps_code_attribute() {
    let xml = exceptions::WMS.replace(
        "<ServiceException>",
        r#"<ServiceException code="LayerNotDefined">"#,
    );
    let err = check_for_exception(parse_xml(&xml).unwrap(), REQUEST).unwrap_err();
    assert_eq!(err.exception_code(), Some("LayerNotDefined"));
    let OgcError::ServiceException(exception) = err else {
        panic!("expected a service exception");
    };
    assert_eq!(exception.message, "Layer not defined: unknown");
}

#[test]
fn test_normal_document_passes_through() {
    let document = parse_xml(wfs::CAPABILITIES_2_0_0).unwrap();
    let returned = check_for_exception(document.clone(), REQUEST).unwrap();
    assert_eq!(returned, document);
}

#[test]
fn test_exception_survives_json_round_trip() {
    let err = check_for_exception(parse_xml(exceptions::OWS).unwrap(), REQUEST).unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["kind"], "service_exception");
    let back: OgcError = serde_json::from_value(json).unwrap();
    assert_eq!(back, err);
}
