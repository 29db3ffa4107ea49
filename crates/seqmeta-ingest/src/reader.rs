//! The attribute reader seam and the built-in OpenEXR reader.

use std::ffi::OsStr;
use std::path::Path;

use exr::meta::MetaData;
use exr::meta::attribute::{AttributeValue, Text};
use exr::meta::header::LayerAttributes;
use seqmeta_model::AttributeMap;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Opens a file and returns its embedded metadata as name/value pairs.
///
/// This is the seam between the pipeline and whatever image-I/O backend
/// does the decoding; the core never touches file formats directly.
pub trait AttributeReader {
    fn read_attributes(&self, path: &Path) -> Result<AttributeMap>;
}

/// Attribute reader backed by the `exr` crate.
///
/// Reads OpenEXR headers only; camera-raw formats (arw/raw/dng) would need
/// their own backend behind [`AttributeReader`]. Standard camera-relevant
/// attributes come first, followed by all custom header attributes sorted
/// by name (the underlying map does not preserve file order, and report
/// output must be deterministic).
#[derive(Debug, Default)]
pub struct ExrAttributeReader;

impl AttributeReader for ExrAttributeReader {
    fn read_attributes(&self, path: &Path) -> Result<AttributeMap> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or_default();
        if !extension.eq_ignore_ascii_case("exr") {
            return Err(IngestError::UnsupportedReader {
                path: path.to_path_buf(),
                extension: extension.to_ascii_lowercase(),
            });
        }

        let meta = MetaData::read_from_file(path, false).map_err(|e| IngestError::ImageRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut attrs = AttributeMap::new();
        for header in &meta.headers {
            collect_layer_attributes(&header.own_attributes, &mut attrs);
            collect_custom_attributes(&header.shared_attributes.other, &mut attrs);
            collect_custom_attributes(&header.own_attributes.other, &mut attrs);
        }
        debug!(path = %path.display(), count = attrs.len(), "extracted attributes");
        Ok(attrs)
    }
}

/// Standard OpenEXR layer attributes worth reporting, under their
/// canonical attribute names.
fn collect_layer_attributes(layer: &LayerAttributes, attrs: &mut AttributeMap) {
    if let Some(owner) = &layer.owner {
        attrs.insert("owner", owner.to_string());
    }
    if let Some(comments) = &layer.comments {
        attrs.insert("comments", comments.to_string());
    }
    if let Some(date) = &layer.capture_date {
        attrs.insert("capDate", date.to_string());
    }
    if let Some(offset) = layer.utc_offset {
        attrs.insert("utcOffset", offset.to_string());
    }
    if let Some(focus) = layer.focus {
        attrs.insert("focus", focus.to_string());
    }
    if let Some(exposure) = layer.exposure {
        attrs.insert("expTime", exposure.to_string());
    }
    if let Some(aperture) = layer.aperture {
        attrs.insert("aperture", aperture.to_string());
    }
    if let Some(iso) = layer.iso_speed {
        attrs.insert("isoSpeed", iso.to_string());
    }
    if let Some(software) = &layer.software_name {
        attrs.insert("software", software.to_string());
    }
}

/// Custom header attributes, sorted by name for reproducible output.
fn collect_custom_attributes(
    other: &std::collections::HashMap<Text, AttributeValue>,
    attrs: &mut AttributeMap,
) {
    let mut entries: Vec<(String, &AttributeValue)> = other
        .iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    for (name, value) in entries {
        attrs.insert(name, format_attribute_value(value));
    }
}

/// Stringify an attribute value for report output.
fn format_attribute_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Text(text) => text.to_string(),
        AttributeValue::F32(v) => v.to_string(),
        AttributeValue::F64(v) => v.to_string(),
        AttributeValue::I32(v) => v.to_string(),
        AttributeValue::Rational((numerator, denominator)) => {
            format!("{numerator}/{denominator}")
        }
        AttributeValue::TextVector(items) => items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        other => format!("{other:?}"),
    }
}
