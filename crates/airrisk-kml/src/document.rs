//! Full KML document rendering.
//!
//! Placemarks are grouped into one `Folder` per risk level, most severe
//! first. Empty levels produce no folder. Within a folder, placemarks keep
//! the order they were given in.

use airrisk_core::{NoticeRecord, RiskLevel};
use airrisk_geo::{Geometry, Ring};
use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::coords::ring_coordinates;
use crate::description::{Description, SOURCE_NAME};
use crate::error::KmlError;
use crate::style::{level_style, style_id, BALLOON_BG_COLOR, BALLOON_TEXT_COLOR};

pub const DOCUMENT_NAME: &str = "Safe Airspace - Aviation Risk Map";
const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// One placemark: an advisory joined with its geometry and notices.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFeature {
    pub name: String,
    /// Absent levels are rendered as [`RiskLevel::Caution`].
    pub level: Option<RiskLevel>,
    pub iso3: Option<String>,
    /// Plain-text news, already stripped of markup.
    pub news: Option<String>,
    /// Plain-text warning, already stripped of markup.
    pub warning: Option<String>,
    pub notices: Vec<NoticeRecord>,
    pub detail_url: String,
    pub geometry: Geometry,
}

impl OutputFeature {
    #[must_use]
    pub fn effective_level(&self) -> RiskLevel {
        self.level.unwrap_or_default()
    }
}

/// RFC 3339 UTC with millisecond precision, e.g. `2025-03-01T12:00:00.000Z`.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Renders the complete KML document.
///
/// # Errors
///
/// Returns [`KmlError`] if the XML writer fails, which only happens on
/// allocation-level I/O faults for an in-memory buffer.
pub fn render_document(
    features: &[OutputFeature],
    generated_at: DateTime<Utc>,
) -> Result<String, KmlError> {
    let timestamp = format_timestamp(generated_at);
    let mut kml = KmlWriter::new();

    kml.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    kml.start_with("kml", &[("xmlns", KML_NAMESPACE)])?;
    kml.start("Document")?;
    kml.text_element("name", DOCUMENT_NAME)?;
    kml.text_element(
        "description",
        &format!("Aviation risk warnings and NOTAMs from {SOURCE_NAME}. Updated: {timestamp}"),
    )?;

    for level in RiskLevel::ALL {
        kml.write_style(level)?;
    }

    for level in RiskLevel::ALL {
        let bucket: Vec<&OutputFeature> = features
            .iter()
            .filter(|feature| feature.effective_level() == level)
            .collect();
        if bucket.is_empty() {
            continue;
        }

        kml.start("Folder")?;
        kml.text_element("name", &format!("{level} ({})", bucket.len()))?;
        kml.text_element("open", if level.number() <= 2 { "1" } else { "0" })?;
        for feature in bucket {
            kml.write_placemark(feature, level, &timestamp)?;
        }
        kml.end("Folder")?;
    }

    kml.end("Document")?;
    kml.end("kml")?;
    kml.finish()
}

struct KmlWriter {
    inner: Writer<Vec<u8>>,
}

impl KmlWriter {
    fn new() -> Self {
        Self {
            inner: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), KmlError> {
        self.inner.write_event(event)?;
        Ok(())
    }

    fn start(&mut self, name: &str) -> Result<(), KmlError> {
        self.event(Event::Start(BytesStart::new(name)))
    }

    fn start_with(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), KmlError> {
        self.event(Event::Start(
            BytesStart::new(name).with_attributes(attributes.iter().copied()),
        ))
    }

    fn end(&mut self, name: &str) -> Result<(), KmlError> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<(), KmlError> {
        self.start(name)?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn finish(self) -> Result<String, KmlError> {
        Ok(String::from_utf8(self.inner.into_inner())?)
    }

    fn write_style(&mut self, level: RiskLevel) -> Result<(), KmlError> {
        let style = level_style(level);
        self.start_with("Style", &[("id", style_id(level).as_str())])?;

        self.start("PolyStyle")?;
        self.text_element("color", style.fill)?;
        self.text_element("outline", "1")?;
        self.end("PolyStyle")?;

        self.start("LineStyle")?;
        self.text_element("color", style.outline)?;
        self.text_element("width", &style.line_width.to_string())?;
        self.end("LineStyle")?;

        self.start("BalloonStyle")?;
        self.text_element("bgColor", BALLOON_BG_COLOR)?;
        self.text_element("textColor", BALLOON_TEXT_COLOR)?;
        self.end("BalloonStyle")?;

        self.end("Style")
    }

    fn write_placemark(
        &mut self,
        feature: &OutputFeature,
        level: RiskLevel,
        timestamp: &str,
    ) -> Result<(), KmlError> {
        let description = Description {
            name: &feature.name,
            level,
            news: feature.news.as_deref(),
            warning: feature.warning.as_deref(),
            notices: &feature.notices,
            detail_url: &feature.detail_url,
            timestamp,
        }
        .to_html();

        self.start("Placemark")?;
        self.text_element("name", &feature.name)?;
        self.start("description")?;
        self.event(Event::CData(BytesCData::new(description.as_str())))?;
        self.end("description")?;
        self.text_element("styleUrl", &format!("#{}", style_id(level)))?;

        self.start("ExtendedData")?;
        self.data("RiskLevel", &level.number().to_string())?;
        self.data("RiskLabel", level.label())?;
        self.data("ISO3", feature.iso3.as_deref().unwrap_or(""))?;
        self.data("Source", SOURCE_NAME)?;
        self.data("LastUpdate", timestamp)?;
        self.end("ExtendedData")?;

        self.write_geometry(&feature.geometry)?;
        self.end("Placemark")
    }

    fn data(&mut self, name: &str, value: &str) -> Result<(), KmlError> {
        self.start_with("Data", &[("name", name)])?;
        self.text_element("value", value)?;
        self.end("Data")
    }

    fn write_geometry(&mut self, geometry: &Geometry) -> Result<(), KmlError> {
        match geometry {
            Geometry::Polygon { coordinates } => self.write_polygon(coordinates),
            Geometry::MultiPolygon { coordinates } => {
                self.start("MultiGeometry")?;
                for polygon in coordinates {
                    self.write_polygon(polygon)?;
                }
                self.end("MultiGeometry")
            }
            Geometry::Unsupported => Ok(()),
        }
    }

    /// First ring is the outer boundary, every further ring a hole.
    fn write_polygon(&mut self, rings: &[Ring]) -> Result<(), KmlError> {
        let Some((outer, inner)) = rings.split_first() else {
            return Ok(());
        };

        self.start("Polygon")?;
        self.write_boundary("outerBoundaryIs", outer)?;
        for hole in inner {
            self.write_boundary("innerBoundaryIs", hole)?;
        }
        self.end("Polygon")
    }

    fn write_boundary(&mut self, kind: &str, ring: &Ring) -> Result<(), KmlError> {
        self.start(kind)?;
        self.start("LinearRing")?;
        self.text_element("coordinates", &ring_coordinates(ring))?;
        self.end("LinearRing")?;
        self.end(kind)
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
