//! Common test fixtures for the OGC client tests.
//!
//! Every WFS capabilities fixture advertises the same two feature types so
//! tests can check that all protocol versions normalize to the same records.
//!
//! - `hierarchy:states`: geographic CRS, keywords, metadata link, no
//!   per-type output formats (falls back to the endpoint list)
//! - `cd16:comptage_section`: Lambert-93, its own output formats, no abstract

/// Base service URLs used across fixtures.
pub mod urls {
    pub const WFS: &str = "https://example.com/geoserver/wfs";
    pub const WMS: &str = "https://example.com/geoserver/wms";
    pub const WMTS: &str = "https://example.com/wmts";
}

/// WFS documents: capabilities, schema, hits and feature collections.
pub mod wfs {
    /// WFS 1.0.0 capabilities.
    pub const CAPABILITIES_1_0_0: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<WFS_Capabilities version="1.0.0" xmlns="http://www.opengis.net/wfs" xmlns:ogc="http://www.opengis.net/ogc">
  <Service>
    <Name>WFS</Name>
    <Title>Demo Feature Service</Title>
    <Abstract>Census and traffic data.</Abstract>
    <Keywords>WFS, WMS, GEOSERVER</Keywords>
    <OnlineResource>https://example.com/geoserver/wfs</OnlineResource>
    <Fees>NONE</Fees>
    <AccessConstraints>NONE</AccessConstraints>
  </Service>
  <Capability>
    <Request>
      <GetCapabilities>
        <DCPType><HTTP><Get onlineResource="https://example.com/geoserver/wfs?request=GetCapabilities"/></HTTP></DCPType>
        <DCPType><HTTP><Post onlineResource="https://example.com/geoserver/wfs"/></HTTP></DCPType>
      </GetCapabilities>
      <DescribeFeatureType>
        <SchemaDescriptionLanguage><XMLSCHEMA/></SchemaDescriptionLanguage>
        <DCPType><HTTP><Get onlineResource="https://example.com/geoserver/wfs?request=DescribeFeatureType"/></HTTP></DCPType>
        <DCPType><HTTP><Post onlineResource="https://example.com/geoserver/wfs"/></HTTP></DCPType>
      </DescribeFeatureType>
      <GetFeature>
        <ResultFormat><GML2/><GML3/><SHAPE-ZIP/><JSON/></ResultFormat>
        <DCPType><HTTP><Get onlineResource="https://example.com/geoserver/wfs?request=GetFeature"/></HTTP></DCPType>
        <DCPType><HTTP><Post onlineResource="https://example.com/geoserver/wfs"/></HTTP></DCPType>
      </GetFeature>
    </Request>
  </Capability>
  <FeatureTypeList>
    <Operations><Query/></Operations>
    <FeatureType>
      <Name>hierarchy:states</Name>
      <Title>USA Population</Title>
      <Abstract>This is some census data on the states.</Abstract>
      <Keywords>census, united, boundaries, state, states</Keywords>
      <SRS>EPSG:4326</SRS>
      <LatLongBoundingBox minx="-124.731422" miny="24.955967" maxx="-66.969849" maxy="49.371735"/>
    </FeatureType>
    <FeatureType>
      <Name>cd16:comptage_section</Name>
      <Title>Comptage section</Title>
      <Abstract></Abstract>
      <Keywords></Keywords>
      <SRS>EPSG:2154</SRS>
      <LatLongBoundingBox minx="1.3" miny="48.5" maxx="2.6" maxy="49.2"/>
    </FeatureType>
  </FeatureTypeList>
</WFS_Capabilities>"#;

    /// WFS 1.1.0 capabilities.
    pub const CAPABILITIES_1_1_0: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:WFS_Capabilities version="1.1.0" xmlns:wfs="http://www.opengis.net/wfs" xmlns:ows="http://www.opengis.net/ows" xmlns:ogc="http://www.opengis.net/ogc" xmlns:xlink="http://www.w3.org/1999/xlink">
  <ows:ServiceIdentification>
    <ows:Title>Demo Feature Service</ows:Title>
    <ows:Abstract>Census and traffic data.</ows:Abstract>
    <ows:Keywords>
      <ows:Keyword>WFS</ows:Keyword>
      <ows:Keyword>WMS</ows:Keyword>
      <ows:Keyword>GEOSERVER</ows:Keyword>
    </ows:Keywords>
    <ows:ServiceType>WFS</ows:ServiceType>
    <ows:ServiceTypeVersion>1.1.0</ows:ServiceTypeVersion>
    <ows:Fees>NONE</ows:Fees>
    <ows:AccessConstraints>NONE</ows:AccessConstraints>
  </ows:ServiceIdentification>
  <ows:ServiceProvider>
    <ows:ProviderName>Example Mapping Agency</ows:ProviderName>
    <ows:ProviderSite xlink:href="https://example.com"/>
    <ows:ServiceContact>
      <ows:IndividualName>Jane Doe</ows:IndividualName>
      <ows:PositionName>Data steward</ows:PositionName>
      <ows:ContactInfo>
        <ows:Phone>
          <ows:Voice>+33 1 23 45 67 89</ows:Voice>
          <ows:Facsimile>+33 1 23 45 67 80</ows:Facsimile>
        </ows:Phone>
        <ows:Address>
          <ows:DeliveryPoint>1 Map Street</ows:DeliveryPoint>
          <ows:City>Lyon</ows:City>
          <ows:AdministrativeArea>Rhone</ows:AdministrativeArea>
          <ows:PostalCode>69000</ows:PostalCode>
          <ows:Country>France</ows:Country>
          <ows:ElectronicMailAddress>contact@example.com</ows:ElectronicMailAddress>
        </ows:Address>
      </ows:ContactInfo>
    </ows:ServiceContact>
  </ows:ServiceProvider>
  <ows:OperationsMetadata>
    <ows:Operation name="GetCapabilities">
      <ows:DCP><ows:HTTP>
        <ows:Get xlink:href="https://example.com/geoserver/wfs?request=GetCapabilities"/>
        <ows:Post xlink:href="https://example.com/geoserver/wfs"/>
      </ows:HTTP></ows:DCP>
    </ows:Operation>
    <ows:Operation name="DescribeFeatureType">
      <ows:DCP><ows:HTTP>
        <ows:Get xlink:href="https://example.com/geoserver/wfs?request=DescribeFeatureType"/>
        <ows:Post xlink:href="https://example.com/geoserver/wfs"/>
      </ows:HTTP></ows:DCP>
    </ows:Operation>
    <ows:Operation name="GetFeature">
      <ows:DCP><ows:HTTP>
        <ows:Get xlink:href="https://example.com/geoserver/wfs?request=GetFeature"/>
        <ows:Post xlink:href="https://example.com/geoserver/wfs"/>
      </ows:HTTP></ows:DCP>
      <ows:Parameter name="resultType">
        <ows:Value>results</ows:Value>
        <ows:Value>hits</ows:Value>
      </ows:Parameter>
      <ows:Parameter name="outputFormat">
        <ows:Value>text/xml; subtype=gml/3.1.1</ows:Value>
        <ows:Value>GML2</ows:Value>
        <ows:Value>SHAPE-ZIP</ows:Value>
        <ows:Value>application/json</ows:Value>
      </ows:Parameter>
    </ows:Operation>
  </ows:OperationsMetadata>
  <FeatureTypeList>
    <Operations><Operation>Query</Operation></Operations>
    <FeatureType xmlns:hierarchy="http://example.com/hierarchy">
      <Name>hierarchy:states</Name>
      <Title>USA Population</Title>
      <Abstract>This is some census data on the states.</Abstract>
      <ows:Keywords>
        <ows:Keyword>census</ows:Keyword>
        <ows:Keyword>united</ows:Keyword>
        <ows:Keyword>boundaries</ows:Keyword>
        <ows:Keyword>state</ows:Keyword>
        <ows:Keyword>states</ows:Keyword>
      </ows:Keywords>
      <DefaultSRS>urn:x-ogc:def:crs:EPSG:4326</DefaultSRS>
      <OtherSRS>urn:x-ogc:def:crs:EPSG:32615</OtherSRS>
      <OtherSRS>urn:x-ogc:def:crs:EPSG:32616</OtherSRS>
      <ows:WGS84BoundingBox>
        <ows:LowerCorner>-124.731422 24.955967</ows:LowerCorner>
        <ows:UpperCorner>-66.969849 49.371735</ows:UpperCorner>
      </ows:WGS84BoundingBox>
      <MetadataURL format="text/xml" type="TC211">https://example.com/metadata/states.xml</MetadataURL>
    </FeatureType>
    <FeatureType xmlns:cd16="http://example.com/cd16">
      <Name>cd16:comptage_section</Name>
      <Title>Comptage section</Title>
      <DefaultSRS>urn:x-ogc:def:crs:EPSG:2154</DefaultSRS>
      <OutputFormats>
        <Format>application/json</Format>
        <Format>text/xml; subtype=gml/3.1.1</Format>
      </OutputFormats>
      <ows:WGS84BoundingBox>
        <ows:LowerCorner>1.3 48.5</ows:LowerCorner>
        <ows:UpperCorner>2.6 49.2</ows:UpperCorner>
      </ows:WGS84BoundingBox>
    </FeatureType>
  </FeatureTypeList>
</wfs:WFS_Capabilities>"#;

    /// WFS 2.0.0 capabilities.
    pub const CAPABILITIES_2_0_0: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:WFS_Capabilities version="2.0.0" xmlns:wfs="http://www.opengis.net/wfs/2.0" xmlns:ows="http://www.opengis.net/ows/1.1" xmlns:fes="http://www.opengis.net/fes/2.0" xmlns:xlink="http://www.w3.org/1999/xlink">
  <ows:ServiceIdentification>
    <ows:Title>Demo Feature Service</ows:Title>
    <ows:Abstract>Census and traffic data.</ows:Abstract>
    <ows:Keywords>
      <ows:Keyword>WFS</ows:Keyword>
      <ows:Keyword>WMS</ows:Keyword>
      <ows:Keyword>GEOSERVER</ows:Keyword>
    </ows:Keywords>
    <ows:ServiceType>WFS</ows:ServiceType>
    <ows:ServiceTypeVersion>2.0.0</ows:ServiceTypeVersion>
    <ows:Fees>NONE</ows:Fees>
    <ows:AccessConstraints>NONE</ows:AccessConstraints>
  </ows:ServiceIdentification>
  <ows:ServiceProvider>
    <ows:ProviderName>Example Mapping Agency</ows:ProviderName>
    <ows:ProviderSite xlink:href="https://example.com"/>
    <ows:ServiceContact>
      <ows:IndividualName>Jane Doe</ows:IndividualName>
      <ows:PositionName>Data steward</ows:PositionName>
      <ows:ContactInfo>
        <ows:Phone>
          <ows:Voice>+33 1 23 45 67 89</ows:Voice>
          <ows:Facsimile>+33 1 23 45 67 80</ows:Facsimile>
        </ows:Phone>
        <ows:Address>
          <ows:DeliveryPoint>1 Map Street</ows:DeliveryPoint>
          <ows:City>Lyon</ows:City>
          <ows:AdministrativeArea>Rhone</ows:AdministrativeArea>
          <ows:PostalCode>69000</ows:PostalCode>
          <ows:Country>France</ows:Country>
          <ows:ElectronicMailAddress>contact@example.com</ows:ElectronicMailAddress>
        </ows:Address>
      </ows:ContactInfo>
    </ows:ServiceContact>
  </ows:ServiceProvider>
  <ows:OperationsMetadata>
    <ows:Operation name="GetCapabilities">
      <ows:DCP><ows:HTTP>
        <ows:Get xlink:href="https://example.com/geoserver/wfs?request=GetCapabilities"/>
        <ows:Post xlink:href="https://example.com/geoserver/wfs"/>
      </ows:HTTP></ows:DCP>
    </ows:Operation>
    <ows:Operation name="DescribeFeatureType">
      <ows:DCP><ows:HTTP>
        <ows:Get xlink:href="https://example.com/geoserver/wfs?request=DescribeFeatureType"/>
        <ows:Post xlink:href="https://example.com/geoserver/wfs"/>
      </ows:HTTP></ows:DCP>
    </ows:Operation>
    <ows:Operation name="GetFeature">
      <ows:DCP><ows:HTTP>
        <ows:Get xlink:href="https://example.com/geoserver/wfs?request=GetFeature"/>
        <ows:Post xlink:href="https://example.com/geoserver/wfs"/>
      </ows:HTTP></ows:DCP>
      <ows:Parameter name="resultType">
        <ows:AllowedValues>
          <ows:Value>results</ows:Value>
          <ows:Value>hits</ows:Value>
        </ows:AllowedValues>
      </ows:Parameter>
      <ows:Parameter name="outputFormat">
        <ows:AllowedValues>
          <ows:Value>application/gml+xml; version=3.2</ows:Value>
          <ows:Value>text/xml; subtype=gml/3.2</ows:Value>
          <ows:Value>application/json</ows:Value>
        </ows:AllowedValues>
      </ows:Parameter>
    </ows:Operation>
  </ows:OperationsMetadata>
  <FeatureTypeList>
    <FeatureType xmlns:hierarchy="http://example.com/hierarchy">
      <Name>hierarchy:states</Name>
      <Title>USA Population</Title>
      <Abstract>This is some census data on the states.</Abstract>
      <ows:Keywords>
        <ows:Keyword>census</ows:Keyword>
        <ows:Keyword>united</ows:Keyword>
        <ows:Keyword>boundaries</ows:Keyword>
        <ows:Keyword>state</ows:Keyword>
        <ows:Keyword>states</ows:Keyword>
      </ows:Keywords>
      <DefaultCRS>urn:ogc:def:crs:EPSG::4326</DefaultCRS>
      <OtherCRS>urn:ogc:def:crs:EPSG::32615</OtherCRS>
      <OtherCRS>urn:ogc:def:crs:EPSG::32616</OtherCRS>
      <ows:WGS84BoundingBox>
        <ows:LowerCorner>-124.731422 24.955967</ows:LowerCorner>
        <ows:UpperCorner>-66.969849 49.371735</ows:UpperCorner>
      </ows:WGS84BoundingBox>
      <MetadataURL xlink:href="https://example.com/metadata/states.xml"/>
    </FeatureType>
    <FeatureType xmlns:cd16="http://example.com/cd16">
      <Name>cd16:comptage_section</Name>
      <Title>Comptage section</Title>
      <DefaultCRS>urn:ogc:def:crs:EPSG::2154</DefaultCRS>
      <OutputFormats>
        <Format>application/json</Format>
        <Format>text/xml; subtype=gml/3.2</Format>
      </OutputFormats>
      <ows:WGS84BoundingBox>
        <ows:LowerCorner>1.3 48.5</ows:LowerCorner>
        <ows:UpperCorner>2.6 49.2</ows:UpperCorner>
      </ows:WGS84BoundingBox>
    </FeatureType>
  </FeatureTypeList>
</wfs:WFS_Capabilities>"#;

    /// DescribeFeatureType response for `hierarchy:states`.
    pub const DESCRIBE_FEATURE_TYPE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xsd:schema xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:gml="http://www.opengis.net/gml" xmlns:hierarchy="http://example.com/hierarchy" elementFormDefault="qualified" targetNamespace="http://example.com/hierarchy">
  <xsd:import namespace="http://www.opengis.net/gml" schemaLocation="https://example.com/schemas/gml/3.1.1/base/gml.xsd"/>
  <xsd:complexType name="statesType">
    <xsd:complexContent>
      <xsd:extension base="gml:AbstractFeatureType">
        <xsd:sequence>
          <xsd:element maxOccurs="1" minOccurs="0" name="the_geom" nillable="true" type="gml:MultiSurfacePropertyType"/>
          <xsd:element maxOccurs="1" minOccurs="0" name="STATE_NAME" nillable="true" type="xsd:string"/>
          <xsd:element maxOccurs="1" minOccurs="0" name="STATE_FIPS" nillable="true" type="xsd:string"/>
          <xsd:element maxOccurs="1" minOccurs="0" name="PERSONS" nillable="true" type="xsd:double"/>
          <xsd:element maxOccurs="1" minOccurs="0" name="HOUSHOLD" nillable="true" type="xsd:int"/>
          <xsd:element maxOccurs="1" minOccurs="0" name="IS_COASTAL" nillable="true" type="xsd:boolean"/>
          <xsd:element maxOccurs="1" minOccurs="0" name="CREATED" nillable="true" type="xsd:dateTime"/>
        </xsd:sequence>
      </xsd:extension>
    </xsd:complexContent>
  </xsd:complexType>
  <xsd:element name="states" substitutionGroup="gml:_Feature" type="hierarchy:statesType"/>
</xsd:schema>"#;

    /// Schema without any geometry property.
    pub const DESCRIBE_FEATURE_TYPE_NO_GEOMETRY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xsd:schema xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <xsd:complexType name="countsType">
    <xsd:sequence>
      <xsd:element name="label" type="xsd:string"/>
      <xsd:element name="total" type="xsd:long"/>
    </xsd:sequence>
  </xsd:complexType>
</xsd:schema>"#;

    /// Hits response for WFS 1.0.0 and 1.1.0.
    pub const HITS_1_1_0: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:FeatureCollection xmlns:wfs="http://www.opengis.net/wfs" numberOfFeatures="49" timeStamp="2024-03-01T10:00:00.000Z"/>"#;

    /// Hits response for WFS 2.0.0.
    pub const HITS_2_0_0: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:FeatureCollection xmlns:wfs="http://www.opengis.net/wfs/2.0" numberMatched="49" numberReturned="0" timeStamp="2024-03-01T10:00:00.000Z"/>"#;

    /// Hits response with a count the server could not compute.
    pub const HITS_UNKNOWN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:FeatureCollection xmlns:wfs="http://www.opengis.net/wfs/2.0" numberMatched="unknown" numberReturned="0"/>"#;

    /// GetFeature 1.0.0 response: `featureMember` wrappers, `fid` ids.
    pub const GET_FEATURE_1_0_0: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:FeatureCollection xmlns:wfs="http://www.opengis.net/wfs" xmlns:gml="http://www.opengis.net/gml" xmlns:hierarchy="http://example.com/hierarchy">
  <gml:featureMember>
    <hierarchy:states fid="states.1">
      <hierarchy:the_geom><gml:MultiPolygon srsName="EPSG:4326"/></hierarchy:the_geom>
      <hierarchy:STATE_NAME>Illinois</hierarchy:STATE_NAME>
      <hierarchy:STATE_FIPS>17</hierarchy:STATE_FIPS>
      <hierarchy:PERSONS>11430602.0</hierarchy:PERSONS>
      <hierarchy:HOUSHOLD>4202240</hierarchy:HOUSHOLD>
      <hierarchy:IS_COASTAL>false</hierarchy:IS_COASTAL>
      <hierarchy:CREATED>2020-01-01T00:00:00Z</hierarchy:CREATED>
      <hierarchy:UNDECLARED>dropped</hierarchy:UNDECLARED>
    </hierarchy:states>
  </gml:featureMember>
  <gml:featureMember>
    <hierarchy:states fid="states.2">
      <hierarchy:the_geom><gml:MultiPolygon srsName="EPSG:4326"/></hierarchy:the_geom>
      <hierarchy:STATE_NAME>District of Columbia</hierarchy:STATE_NAME>
      <hierarchy:STATE_FIPS>11</hierarchy:STATE_FIPS>
      <hierarchy:PERSONS>606900.0</hierarchy:PERSONS>
      <hierarchy:IS_COASTAL>false</hierarchy:IS_COASTAL>
      <hierarchy:CREATED>2020-01-01T00:00:00Z</hierarchy:CREATED>
    </hierarchy:states>
  </gml:featureMember>
  <gml:featureMember>
    <hierarchy:states fid="states.3">
      <hierarchy:the_geom><gml:MultiPolygon srsName="EPSG:4326"/></hierarchy:the_geom>
      <hierarchy:STATE_NAME>Delaware</hierarchy:STATE_NAME>
      <hierarchy:STATE_FIPS>10</hierarchy:STATE_FIPS>
      <hierarchy:PERSONS>666168.0</hierarchy:PERSONS>
      <hierarchy:HOUSHOLD>247497</hierarchy:HOUSHOLD>
      <hierarchy:IS_COASTAL>true</hierarchy:IS_COASTAL>
      <hierarchy:CREATED>2021-06-15T00:00:00Z</hierarchy:CREATED>
    </hierarchy:states>
  </gml:featureMember>
</wfs:FeatureCollection>"#;

    /// GetFeature 1.1.0 response: one `featureMembers` wrapper, `gml:id` ids.
    pub const GET_FEATURE_1_1_0: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:FeatureCollection numberOfFeatures="3" xmlns:wfs="http://www.opengis.net/wfs" xmlns:gml="http://www.opengis.net/gml" xmlns:hierarchy="http://example.com/hierarchy">
  <gml:featureMembers>
    <hierarchy:states gml:id="states.1">
      <hierarchy:the_geom><gml:MultiSurface srsName="urn:x-ogc:def:crs:EPSG:4326"/></hierarchy:the_geom>
      <hierarchy:STATE_NAME>Illinois</hierarchy:STATE_NAME>
      <hierarchy:STATE_FIPS>17</hierarchy:STATE_FIPS>
      <hierarchy:PERSONS>11430602.0</hierarchy:PERSONS>
      <hierarchy:HOUSHOLD>4202240</hierarchy:HOUSHOLD>
      <hierarchy:IS_COASTAL>false</hierarchy:IS_COASTAL>
      <hierarchy:CREATED>2020-01-01T00:00:00Z</hierarchy:CREATED>
      <hierarchy:UNDECLARED>dropped</hierarchy:UNDECLARED>
    </hierarchy:states>
    <hierarchy:states gml:id="states.2">
      <hierarchy:the_geom><gml:MultiSurface srsName="urn:x-ogc:def:crs:EPSG:4326"/></hierarchy:the_geom>
      <hierarchy:STATE_NAME>District of Columbia</hierarchy:STATE_NAME>
      <hierarchy:STATE_FIPS>11</hierarchy:STATE_FIPS>
      <hierarchy:PERSONS>606900.0</hierarchy:PERSONS>
      <hierarchy:IS_COASTAL>false</hierarchy:IS_COASTAL>
      <hierarchy:CREATED>2020-01-01T00:00:00Z</hierarchy:CREATED>
    </hierarchy:states>
    <hierarchy:states gml:id="states.3">
      <hierarchy:the_geom><gml:MultiSurface srsName="urn:x-ogc:def:crs:EPSG:4326"/></hierarchy:the_geom>
      <hierarchy:STATE_NAME>Delaware</hierarchy:STATE_NAME>
      <hierarchy:STATE_FIPS>10</hierarchy:STATE_FIPS>
      <hierarchy:PERSONS>666168.0</hierarchy:PERSONS>
      <hierarchy:HOUSHOLD>247497</hierarchy:HOUSHOLD>
      <hierarchy:IS_COASTAL>true</hierarchy:IS_COASTAL>
      <hierarchy:CREATED>2021-06-15T00:00:00Z</hierarchy:CREATED>
    </hierarchy:states>
  </gml:featureMembers>
</wfs:FeatureCollection>"#;

    /// GetFeature 2.0.0 response: `member` wrappers, `gml:id` ids.
    pub const GET_FEATURE_2_0_0: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:FeatureCollection numberMatched="3" numberReturned="3" xmlns:wfs="http://www.opengis.net/wfs/2.0" xmlns:gml="http://www.opengis.net/gml/3.2" xmlns:hierarchy="http://example.com/hierarchy">
  <wfs:member>
    <hierarchy:states gml:id="states.1">
      <hierarchy:the_geom><gml:MultiSurface srsName="urn:ogc:def:crs:EPSG::4326"/></hierarchy:the_geom>
      <hierarchy:STATE_NAME>Illinois</hierarchy:STATE_NAME>
      <hierarchy:STATE_FIPS>17</hierarchy:STATE_FIPS>
      <hierarchy:PERSONS>11430602.0</hierarchy:PERSONS>
      <hierarchy:HOUSHOLD>4202240</hierarchy:HOUSHOLD>
      <hierarchy:IS_COASTAL>false</hierarchy:IS_COASTAL>
      <hierarchy:CREATED>2020-01-01T00:00:00Z</hierarchy:CREATED>
      <hierarchy:UNDECLARED>dropped</hierarchy:UNDECLARED>
    </hierarchy:states>
  </wfs:member>
  <wfs:member>
    <hierarchy:states gml:id="states.2">
      <hierarchy:the_geom><gml:MultiSurface srsName="urn:ogc:def:crs:EPSG::4326"/></hierarchy:the_geom>
      <hierarchy:STATE_NAME>District of Columbia</hierarchy:STATE_NAME>
      <hierarchy:STATE_FIPS>11</hierarchy:STATE_FIPS>
      <hierarchy:PERSONS>606900.0</hierarchy:PERSONS>
      <hierarchy:IS_COASTAL>false</hierarchy:IS_COASTAL>
      <hierarchy:CREATED>2020-01-01T00:00:00Z</hierarchy:CREATED>
    </hierarchy:states>
  </wfs:member>
  <wfs:member>
    <hierarchy:states gml:id="states.3">
      <hierarchy:the_geom><gml:MultiSurface srsName="urn:ogc:def:crs:EPSG::4326"/></hierarchy:the_geom>
      <hierarchy:STATE_NAME>Delaware</hierarchy:STATE_NAME>
      <hierarchy:STATE_FIPS>10</hierarchy:STATE_FIPS>
      <hierarchy:PERSONS>666168.0</hierarchy:PERSONS>
      <hierarchy:HOUSHOLD>247497</hierarchy:HOUSHOLD>
      <hierarchy:IS_COASTAL>true</hierarchy:IS_COASTAL>
      <hierarchy:CREATED>2021-06-15T00:00:00Z</hierarchy:CREATED>
    </hierarchy:states>
  </wfs:member>
</wfs:FeatureCollection>"#;

    /// GetFeature GeoJSON response.
    pub const GET_FEATURE_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "id": "states.1",
      "geometry": null,
      "properties": { "STATE_NAME": "Illinois", "PERSONS": 11430602.0, "IS_COASTAL": false }
    },
    {
      "type": "Feature",
      "id": 2,
      "geometry": null,
      "properties": { "STATE_NAME": "Delaware", "PERSONS": 666168.0, "IS_COASTAL": true }
    }
  ],
  "totalFeatures": 2
}"#;
}

/// WMS capabilities documents.
pub mod wms {
    /// WMS 1.3.0 capabilities with nested, inheriting layers.
    pub const CAPABILITIES_1_3_0: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<WMS_Capabilities version="1.3.0" xmlns="http://www.opengis.net/wms" xmlns:xlink="http://www.w3.org/1999/xlink">
  <Service>
    <Name>WMS</Name>
    <Title>Demo Map Service</Title>
    <Abstract>Administrative boundaries and hydrography.</Abstract>
    <KeywordList>
      <Keyword>WMS</Keyword>
      <Keyword>boundaries</Keyword>
    </KeywordList>
    <OnlineResource xlink:type="simple" xlink:href="https://example.com/geoserver/wms"/>
    <ContactInformation>
      <ContactPersonPrimary>
        <ContactPerson>Jane Doe</ContactPerson>
        <ContactOrganization>Example Mapping Agency</ContactOrganization>
      </ContactPersonPrimary>
      <ContactPosition>Data steward</ContactPosition>
      <ContactAddress>
        <AddressType>postal</AddressType>
        <Address>1 Map Street</Address>
        <City>Lyon</City>
        <StateOrProvince>Rhone</StateOrProvince>
        <PostCode>69000</PostCode>
        <Country>France</Country>
      </ContactAddress>
      <ContactVoiceTelephone>+33 1 23 45 67 89</ContactVoiceTelephone>
      <ContactFacsimileTelephone>+33 1 23 45 67 80</ContactFacsimileTelephone>
      <ContactElectronicMailAddress>contact@example.com</ContactElectronicMailAddress>
    </ContactInformation>
    <Fees>none</Fees>
    <AccessConstraints>none</AccessConstraints>
  </Service>
  <Capability>
    <Request>
      <GetCapabilities>
        <Format>text/xml</Format>
        <DCPType><HTTP>
          <Get><OnlineResource xlink:type="simple" xlink:href="https://example.com/geoserver/wms?SERVICE=WMS&amp;"/></Get>
          <Post><OnlineResource xlink:type="simple" xlink:href="https://example.com/geoserver/wms?SERVICE=WMS&amp;"/></Post>
        </HTTP></DCPType>
      </GetCapabilities>
      <GetMap>
        <Format>image/png</Format>
        <Format>image/jpeg</Format>
        <Format>image/svg+xml</Format>
        <DCPType><HTTP>
          <Get><OnlineResource xlink:type="simple" xlink:href="https://example.com/geoserver/wms?SERVICE=WMS&amp;"/></Get>
        </HTTP></DCPType>
      </GetMap>
      <GetFeatureInfo>
        <Format>text/plain</Format>
        <Format>application/json</Format>
        <DCPType><HTTP>
          <Get><OnlineResource xlink:type="simple" xlink:href="https://example.com/geoserver/wms?SERVICE=WMS&amp;"/></Get>
        </HTTP></DCPType>
      </GetFeatureInfo>
    </Request>
    <Exception>
      <Format>XML</Format>
      <Format>INIMAGE</Format>
      <Format>BLANK</Format>
    </Exception>
    <Layer>
      <Title>Demo layers</Title>
      <Abstract>Root layer</Abstract>
      <CRS>EPSG:4326</CRS>
      <CRS>EPSG:3857</CRS>
      <EX_GeographicBoundingBox>
        <westBoundLongitude>-180</westBoundLongitude>
        <eastBoundLongitude>180</eastBoundLongitude>
        <southBoundLatitude>-90</southBoundLatitude>
        <northBoundLatitude>90</northBoundLatitude>
      </EX_GeographicBoundingBox>
      <BoundingBox CRS="EPSG:4326" minx="-90" miny="-180" maxx="90" maxy="180"/>
      <Attribution>
        <Title>Example Mapping Agency</Title>
        <OnlineResource xlink:type="simple" xlink:href="https://example.com"/>
        <LogoURL width="100" height="40">
          <Format>image/png</Format>
          <OnlineResource xlink:type="simple" xlink:href="https://example.com/logo.png"/>
        </LogoURL>
      </Attribution>
      <Style>
        <Name>default</Name>
        <Title>Default style</Title>
        <LegendURL width="20" height="20">
          <Format>image/png</Format>
          <OnlineResource xlink:type="simple" xlink:href="https://example.com/legend/default.png"/>
        </LegendURL>
      </Style>
      <Layer queryable="1" opaque="0">
        <Name>countries</Name>
        <Title>Countries</Title>
        <Abstract>Country boundaries</Abstract>
        <KeywordList>
          <Keyword>countries</Keyword>
          <Keyword>boundaries</Keyword>
        </KeywordList>
        <CRS>EPSG:2154</CRS>
        <CRS>EPSG:4326</CRS>
        <EX_GeographicBoundingBox>
          <westBoundLongitude>-5.14</westBoundLongitude>
          <eastBoundLongitude>9.56</eastBoundLongitude>
          <southBoundLatitude>41.33</southBoundLatitude>
          <northBoundLatitude>51.09</northBoundLatitude>
        </EX_GeographicBoundingBox>
        <BoundingBox CRS="EPSG:2154" minx="100000" miny="6000000" maxx="1200000" maxy="7200000"/>
        <Dimension name="time" units="ISO8601" default="2024-01-01">2023-01-01/2024-01-01/P1M</Dimension>
        <Style>
          <Name>outline</Name>
          <Title>Outline only</Title>
        </Style>
        <Layer queryable="1">
          <Name>countries:capitals</Name>
          <Title>Capitals</Title>
        </Layer>
      </Layer>
      <Layer queryable="0" opaque="1">
        <Name>rivers</Name>
        <Title>Rivers</Title>
        <Abstract></Abstract>
      </Layer>
    </Layer>
  </Capability>
</WMS_Capabilities>"#;

    /// WMS 1.1.1 capabilities with the same layer tree.
    pub const CAPABILITIES_1_1_1: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<WMT_MS_Capabilities version="1.1.1" xmlns:xlink="http://www.w3.org/1999/xlink">
  <Service>
    <Name>OGC:WMS</Name>
    <Title>Demo Map Service</Title>
    <Abstract>Administrative boundaries and hydrography.</Abstract>
    <KeywordList>
      <Keyword>WMS</Keyword>
      <Keyword>boundaries</Keyword>
    </KeywordList>
    <OnlineResource xlink:type="simple" xlink:href="https://example.com/geoserver/wms"/>
    <Fees>none</Fees>
    <AccessConstraints>none</AccessConstraints>
  </Service>
  <Capability>
    <Request>
      <GetCapabilities>
        <Format>application/vnd.ogc.wms_xml</Format>
        <DCPType><HTTP>
          <Get><OnlineResource xlink:type="simple" xlink:href="https://example.com/geoserver/wms?SERVICE=WMS&amp;"/></Get>
        </HTTP></DCPType>
      </GetCapabilities>
      <GetMap>
        <Format>image/png</Format>
        <Format>image/jpeg</Format>
        <DCPType><HTTP>
          <Get><OnlineResource xlink:type="simple" xlink:href="https://example.com/geoserver/wms?SERVICE=WMS&amp;"/></Get>
        </HTTP></DCPType>
      </GetMap>
      <GetFeatureInfo>
        <Format>text/plain</Format>
        <DCPType><HTTP>
          <Get><OnlineResource xlink:type="simple" xlink:href="https://example.com/geoserver/wms?SERVICE=WMS&amp;"/></Get>
        </HTTP></DCPType>
      </GetFeatureInfo>
    </Request>
    <Exception>
      <Format>application/vnd.ogc.se_xml</Format>
      <Format>application/vnd.ogc.se_inimage</Format>
    </Exception>
    <Layer>
      <Title>Demo layers</Title>
      <SRS>EPSG:4326</SRS>
      <SRS>EPSG:3857</SRS>
      <LatLonBoundingBox minx="-180" miny="-90" maxx="180" maxy="90"/>
      <BoundingBox SRS="EPSG:4326" minx="-180" miny="-90" maxx="180" maxy="90"/>
      <Style>
        <Name>default</Name>
        <Title>Default style</Title>
        <LegendURL width="20" height="20">
          <Format>image/png</Format>
          <OnlineResource xlink:type="simple" xlink:href="https://example.com/legend/default.png"/>
        </LegendURL>
      </Style>
      <Layer queryable="1">
        <Name>countries</Name>
        <Title>Countries</Title>
        <Abstract>Country boundaries</Abstract>
        <SRS>EPSG:2154</SRS>
        <LatLonBoundingBox minx="-5.14" miny="41.33" maxx="9.56" maxy="51.09"/>
        <BoundingBox SRS="EPSG:2154" minx="100000" miny="6000000" maxx="1200000" maxy="7200000"/>
        <Dimension name="time" units="ISO8601"/>
        <Extent name="time" default="2024-01-01">2023-01-01/2024-01-01/P1M</Extent>
        <Style>
          <Name>outline</Name>
          <Title>Outline only</Title>
        </Style>
        <Layer queryable="1">
          <Name>countries:capitals</Name>
          <Title>Capitals</Title>
        </Layer>
      </Layer>
      <Layer>
        <Name>rivers</Name>
        <Title>Rivers</Title>
      </Layer>
    </Layer>
  </Capability>
</WMT_MS_Capabilities>"#;
}

/// WMTS capabilities documents.
pub mod wmts {
    /// WMTS 1.0.0 capabilities with KVP and REST encodings.
    pub const CAPABILITIES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Capabilities version="1.0.0" xmlns="http://www.opengis.net/wmts/1.0" xmlns:ows="http://www.opengis.net/ows/1.1" xmlns:xlink="http://www.w3.org/1999/xlink">
  <ows:ServiceIdentification>
    <ows:Title>Demo Tile Service</ows:Title>
    <ows:Abstract>Tiled aerial imagery.</ows:Abstract>
    <ows:Keywords>
      <ows:Keyword>tiles</ows:Keyword>
      <ows:Keyword>imagery</ows:Keyword>
    </ows:Keywords>
    <ows:ServiceType>OGC WMTS</ows:ServiceType>
    <ows:ServiceTypeVersion>1.0.0</ows:ServiceTypeVersion>
    <ows:Fees>none</ows:Fees>
    <ows:AccessConstraints>Licence Ouverte</ows:AccessConstraints>
  </ows:ServiceIdentification>
  <ows:ServiceProvider>
    <ows:ProviderName>Example Mapping Agency</ows:ProviderName>
    <ows:ProviderSite xlink:href="https://example.com"/>
    <ows:ServiceContact>
      <ows:IndividualName>Jane Doe</ows:IndividualName>
      <ows:ContactInfo>
        <ows:Address>
          <ows:City>Lyon</ows:City>
          <ows:Country>France</ows:Country>
          <ows:ElectronicMailAddress>contact@example.com</ows:ElectronicMailAddress>
        </ows:Address>
      </ows:ContactInfo>
    </ows:ServiceContact>
  </ows:ServiceProvider>
  <ows:OperationsMetadata>
    <ows:Operation name="GetCapabilities">
      <ows:DCP><ows:HTTP>
        <ows:Get xlink:href="https://example.com/wmts?">
          <ows:Constraint name="GetEncoding">
            <ows:AllowedValues><ows:Value>KVP</ows:Value></ows:AllowedValues>
          </ows:Constraint>
        </ows:Get>
      </ows:HTTP></ows:DCP>
    </ows:Operation>
    <ows:Operation name="GetTile">
      <ows:DCP><ows:HTTP>
        <ows:Get xlink:href="https://example.com/wmts?">
          <ows:Constraint name="GetEncoding">
            <ows:AllowedValues><ows:Value>KVP</ows:Value></ows:AllowedValues>
          </ows:Constraint>
        </ows:Get>
        <ows:Get xlink:href="https://example.com/wmts/rest/">
          <ows:Constraint name="GetEncoding">
            <ows:AllowedValues><ows:Value>RESTful</ows:Value></ows:AllowedValues>
          </ows:Constraint>
        </ows:Get>
      </ows:HTTP></ows:DCP>
    </ows:Operation>
    <ows:Operation name="GetFeatureInfo">
      <ows:DCP><ows:HTTP>
        <ows:Get xlink:href="https://example.com/wmts?">
          <ows:Constraint name="GetEncoding">
            <ows:AllowedValues><ows:Value>KVP</ows:Value></ows:AllowedValues>
          </ows:Constraint>
        </ows:Get>
      </ows:HTTP></ows:DCP>
    </ows:Operation>
  </ows:OperationsMetadata>
  <Contents>
    <Layer>
      <ows:Title>Orthoimagery</ows:Title>
      <ows:Abstract>Aerial photographs</ows:Abstract>
      <ows:WGS84BoundingBox>
        <ows:LowerCorner>-5.14 41.33</ows:LowerCorner>
        <ows:UpperCorner>9.56 51.09</ows:UpperCorner>
      </ows:WGS84BoundingBox>
      <ows:Identifier>ORTHOIMAGERY</ows:Identifier>
      <Style isDefault="true">
        <ows:Title>Default</ows:Title>
        <ows:Identifier>normal</ows:Identifier>
        <LegendURL format="image/png" xlink:href="https://example.com/legend/ortho.png"/>
      </Style>
      <Style>
        <ows:Title>Infrared</ows:Title>
        <ows:Identifier>infrared</ows:Identifier>
      </Style>
      <Format>image/jpeg</Format>
      <Format>image/png</Format>
      <InfoFormat>application/json</InfoFormat>
      <Dimension>
        <ows:Identifier>Time</ows:Identifier>
        <Default>2024</Default>
        <Value>2023</Value>
        <Value>2024</Value>
      </Dimension>
      <TileMatrixSetLink>
        <TileMatrixSet>PM</TileMatrixSet>
        <TileMatrixSetLimits>
          <TileMatrixLimits>
            <TileMatrix>0</TileMatrix>
            <MinTileRow>0</MinTileRow>
            <MaxTileRow>0</MaxTileRow>
            <MinTileCol>0</MinTileCol>
            <MaxTileCol>0</MaxTileCol>
          </TileMatrixLimits>
          <TileMatrixLimits>
            <TileMatrix>1</TileMatrix>
            <MinTileRow>0</MinTileRow>
            <MaxTileRow>1</MaxTileRow>
            <MinTileCol>1</MinTileCol>
            <MaxTileCol>1</MaxTileCol>
          </TileMatrixLimits>
        </TileMatrixSetLimits>
      </TileMatrixSetLink>
      <TileMatrixSetLink>
        <TileMatrixSet>WGS84</TileMatrixSet>
      </TileMatrixSetLink>
      <ResourceURL format="image/jpeg" resourceType="tile" template="https://example.com/wmts/rest/ORTHOIMAGERY/{Style}/{TileMatrixSet}/{TileMatrix}/{TileRow}/{TileCol}.jpeg"/>
      <ResourceURL format="application/json" resourceType="FeatureInfo" template="https://example.com/wmts/rest/ORTHOIMAGERY/{Style}/{TileMatrixSet}/{TileMatrix}/{TileRow}/{TileCol}/{J}/{I}.json"/>
    </Layer>
    <TileMatrixSet>
      <ows:Identifier>PM</ows:Identifier>
      <ows:SupportedCRS>urn:ogc:def:crs:EPSG::3857</ows:SupportedCRS>
      <WellKnownScaleSet>urn:ogc:def:wkss:OGC:1.0:GoogleMapsCompatible</WellKnownScaleSet>
      <TileMatrix>
        <ows:Identifier>0</ows:Identifier>
        <ScaleDenominator>559082264.0287178</ScaleDenominator>
        <TopLeftCorner>-20037508.3427892 20037508.3427892</TopLeftCorner>
        <TileWidth>256</TileWidth>
        <TileHeight>256</TileHeight>
        <MatrixWidth>1</MatrixWidth>
        <MatrixHeight>1</MatrixHeight>
      </TileMatrix>
      <TileMatrix>
        <ows:Identifier>1</ows:Identifier>
        <ScaleDenominator>279541132.0143589</ScaleDenominator>
        <TopLeftCorner>-20037508.3427892 20037508.3427892</TopLeftCorner>
        <TileWidth>256</TileWidth>
        <TileHeight>256</TileHeight>
        <MatrixWidth>2</MatrixWidth>
        <MatrixHeight>2</MatrixHeight>
      </TileMatrix>
    </TileMatrixSet>
    <TileMatrixSet>
      <ows:Identifier>WGS84</ows:Identifier>
      <ows:BoundingBox crs="urn:ogc:def:crs:OGC:1.3:CRS84">
        <ows:LowerCorner>-180 -90</ows:LowerCorner>
        <ows:UpperCorner>180 90</ows:UpperCorner>
      </ows:BoundingBox>
      <ows:SupportedCRS>urn:ogc:def:crs:OGC:1.3:CRS84</ows:SupportedCRS>
      <TileMatrix>
        <ows:Identifier>0</ows:Identifier>
        <ScaleDenominator>279541132.0143589</ScaleDenominator>
        <TopLeftCorner>-180 90</TopLeftCorner>
        <TileWidth>256</TileWidth>
        <TileHeight>256</TileHeight>
        <MatrixWidth>2</MatrixWidth>
        <MatrixHeight>1</MatrixHeight>
      </TileMatrix>
    </TileMatrixSet>
  </Contents>
</Capabilities>"#;
}

/// Service exception reports in each wire shape.
pub mod exceptions {
    /// WFS 1.0.0 `ServiceExceptionReport` with code and locator.
    pub const WFS_1_0_0: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ServiceExceptionReport version="1.2.0" xmlns="http://www.opengis.net/ogc">
  <ServiceException code="InvalidParameterValue" locator="request">
    Invalid request parameter: GetCapabilitiesX
  </ServiceException>
</ServiceExceptionReport>"#;

    /// OWS `ExceptionReport` as returned by WFS 1.1.0 and 2.0.0.
    pub const OWS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ows:ExceptionReport version="2.0.0" xmlns:ows="http://www.opengis.net/ows/1.1">
  <ows:Exception exceptionCode="MissingParameterValue" locator="typeName">
    <ows:ExceptionText>The query requires at least one type name</ows:ExceptionText>
  </ows:Exception>
</ows:ExceptionReport>"#;

    /// WMS `ServiceExceptionReport` without a code attribute.
    pub const WMS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ServiceExceptionReport version="1.3.0" xmlns="http://www.opengis.net/ogc">
  <ServiceException>Layer not defined: unknown</ServiceException>
</ServiceExceptionReport>"#;
}
