use std::{fs, path::Path};

use log::{debug, info};

use crate::{
    error::{Error, Kind},
    value::{Document, Record, Shape},
};

/// Text layout used when encoding a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Two space indentation.
    #[default]
    Pretty,
    Compact,
}

/// Builds a document of `shape.arrays` keys, `array0` first, each holding
/// `shape.records` default records.
pub fn generate(shape: Shape) -> Document {
    let mut document = Document::with_capacity(shape.arrays);

    for i in 0..shape.arrays {
        document.insert(Shape::key(i), vec![Record::default(); shape.records]);
    }

    debug!("Generated document with {}", shape);

    document
}

pub fn encode(document: &Document, format: Format) -> Result<String, Error> {
    let encoded = match format {
        Format::Pretty => serde_json::to_string_pretty(document),
        Format::Compact => serde_json::to_string(document),
    };

    encoded.map_err(|e| Error::new(Kind::Encode(e.to_string())))
}

/// Encodes `document` and writes it to `path`, replacing any existing file.
/// A failed write may leave a partial file behind.
pub fn write<P: AsRef<Path>>(path: P, document: &Document, format: Format) -> Result<(), Error> {
    let path = path.as_ref();
    let text = encode(document, format)?;

    debug!("Writing {} bytes to {}", text.len(), path.display());

    fs::write(path, text)?;

    info!("Wrote {} arrays to {}", document.len(), path.display());

    Ok(())
}
