//! Deterministic XML serialization of a [`Report`].
//!
//! One root container, one child section per file, one leaf element per
//! metadata key. Output is tab-indented and byte-stable across runs so
//! reports diff cleanly.
//!
//! Section names carry the source filename and the historical literals
//! below, which contain characters XML element names cannot: they are
//! sanitized into valid names at write time.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use seqmeta_model::Report;

/// Root element label.
pub const ROOT_ELEMENT: &str = "Sequence MetaData";

/// Per-file element label prefix; the filename is appended.
pub const FILE_ELEMENT_PREFIX: &str = "metadata from file: ";

/// Write the report as `<title>.xml`-style output to the given path.
pub fn write_report(output_path: &Path, report: &Report) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    write_document(&mut writer, report)?;
    writer
        .flush()
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

/// Render the report to a string. Used by tests and dry inspection; the
/// bytes are identical to what [`write_report`] produces.
pub fn render_report(report: &Report) -> Result<String> {
    let mut buffer = Vec::new();
    write_document(&mut buffer, report)?;
    String::from_utf8(buffer).context("report is not valid utf-8")
}

fn write_document<W: Write>(writer: W, report: &Report) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b'\t', 1);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let root_name = xml_name(ROOT_ELEMENT);
    xml.write_event(Event::Start(BytesStart::new(root_name.as_str())))?;

    for record in &report.records {
        let section_name = xml_name(&format!("{FILE_ELEMENT_PREFIX}{}", record.filename));
        xml.write_event(Event::Start(BytesStart::new(section_name.as_str())))?;
        for (key, value) in &record.entries {
            write_text_element(&mut xml, &xml_name(key), value)?;
        }
        xml.write_event(Event::End(BytesEnd::new(section_name.as_str())))?;
    }

    xml.write_event(Event::End(BytesEnd::new(root_name.as_str())))?;
    Ok(())
}

/// Write `<name>value</name>` with escaped text content.
fn write_text_element<W: Write>(xml: &mut Writer<W>, name: &str, value: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(value)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Sanitize an arbitrary label into a valid XML element name.
///
/// Characters outside `[A-Za-z0-9_.-]` become `_` (colons too, to stay
/// namespace-clean), and a leading `_` is added when the first character
/// cannot start a name.
#[must_use]
pub fn xml_name(raw: &str) -> String {
    let mut name = String::with_capacity(raw.len() + 1);
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || ch == '.' {
            name.push(ch);
        } else {
            name.push('_');
        }
    }
    let starts_ok = name
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_');
    if !starts_ok {
        name.insert(0, '_');
    }
    name
}
