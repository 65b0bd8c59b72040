//! Immutable document tree and its builder.

use sets_model::Set;

use crate::error::{DocumentError, Result};

/// One `barcode` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeNode {
    value: String,
    primary: bool,
}

impl BarcodeNode {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }
}

/// One `set` node with its `items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNode {
    id: String,
    items: Vec<BarcodeNode>,
}

impl SetNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn items(&self) -> &[BarcodeNode] {
        &self.items
    }
}

/// The `sets` document. Only [`DocumentBuilder`] creates one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sets: Vec<SetNode>,
}

impl Document {
    pub fn sets(&self) -> &[SetNode] {
        &self.sets
    }

    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    pub fn barcode_count(&self) -> usize {
        self.sets.iter().map(|set| set.items.len()).sum()
    }
}

/// Folds sets into a [`Document`], flagging the first barcode of each set as
/// primary.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    sets: Vec<SetNode>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a set node.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidCharacter`] if the identifier or a
    /// barcode cannot be represented in XML.
    pub fn push_set(&mut self, set: &Set) -> Result<&mut Self> {
        check_xml_text("set id", set.id())?;
        let mut items = Vec::with_capacity(set.barcodes().len());
        for (index, barcode) in set.barcodes().iter().enumerate() {
            check_xml_text("barcode", barcode)?;
            items.push(BarcodeNode {
                value: barcode.clone(),
                primary: index == 0,
            });
        }
        self.sets.push(SetNode {
            id: set.id().to_string(),
            items,
        });
        Ok(self)
    }

    pub fn build(self) -> Document {
        Document { sets: self.sets }
    }
}

/// Build a document from sets in order.
///
/// # Errors
///
/// Fails on the first value that cannot be represented in XML.
pub fn build_document<'a, I>(sets: I) -> Result<Document>
where
    I: IntoIterator<Item = &'a Set>,
{
    let mut builder = DocumentBuilder::new();
    for set in sets {
        builder.push_set(set)?;
    }
    Ok(builder.build())
}

/// XML 1.0 `Char` production.
fn is_xml_char(ch: char) -> bool {
    matches!(ch,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn check_xml_text(field: &'static str, value: &str) -> Result<()> {
    match value.chars().enumerate().find(|(_, ch)| !is_xml_char(*ch)) {
        Some((index, ch)) => Err(DocumentError::InvalidCharacter {
            field,
            value: value.escape_debug().to_string(),
            code: u32::from(ch),
            position: index + 1,
        }),
        None => Ok(()),
    }
}
