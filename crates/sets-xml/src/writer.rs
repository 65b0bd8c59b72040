//! XML serialization.
//!
//! Text content escapes only `<`, `>` and `&`. Attribute values additionally
//! escape `"` and whitespace that attribute normalization would otherwise eat.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use crate::document::{Document, SetNode};
use crate::error::{DocumentError, Result};

/// Write the document as indented XML, ending with a newline.
///
/// Containers without children are written self-closing.
pub fn write_document<W: Write>(document: &Document, out: W) -> Result<()> {
    let mut xml = Writer::new_with_indent(out, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    if document.sets().is_empty() {
        xml.write_event(Event::Empty(BytesStart::new("sets")))?;
    } else {
        xml.write_event(Event::Start(BytesStart::new("sets")))?;
        for set in document.sets() {
            write_set(&mut xml, set)?;
        }
        xml.write_event(Event::End(BytesEnd::new("sets")))?;
    }

    let mut out = xml.into_inner();
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn write_set<W: Write>(xml: &mut Writer<W>, set: &SetNode) -> Result<()> {
    let id = escape_attribute(set.id());
    let mut start = BytesStart::new("set");
    start.push_attribute((&b"id"[..], id.as_bytes()));
    xml.write_event(Event::Start(start))?;

    if set.items().is_empty() {
        xml.write_event(Event::Empty(BytesStart::new("items")))?;
    } else {
        xml.write_event(Event::Start(BytesStart::new("items")))?;
        for item in set.items() {
            let mut barcode = BytesStart::new("barcode");
            if item.is_primary() {
                barcode.push_attribute(("primary", "true"));
            }
            xml.write_event(Event::Start(barcode))?;
            xml.write_event(Event::Text(BytesText::from_escaped(partial_escape(
                item.value(),
            ))))?;
            xml.write_event(Event::End(BytesEnd::new("barcode")))?;
        }
        xml.write_event(Event::End(BytesEnd::new("items")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("set")))?;
    Ok(())
}

fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = partial_escape(value);
    if !escaped.contains(['"', '\t', '\n', '\r']) {
        return escaped;
    }
    let mut out = String::with_capacity(escaped.len() + 8);
    for ch in escaped.chars() {
        match ch {
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Serialize the document to a string.
pub fn document_to_string(document: &Document) -> Result<String> {
    let mut buffer = Vec::new();
    write_document(document, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write the document to `path`, replacing any existing file.
pub fn write_document_file(document: &Document, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| DocumentError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_document(document, BufWriter::new(file))?;
    debug!(
        path = %path.display(),
        set_count = document.set_count(),
        "document written"
    );
    Ok(())
}
