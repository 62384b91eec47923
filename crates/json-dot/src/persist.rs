use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use tracing::debug;

use crate::error::DocumentError;

/// Serialize `value` into `writer`, compact or pretty with `indent` spaces.
pub fn write_value<W: Write>(
    writer: W,
    value: &Value,
    pretty: bool,
    indent: usize,
) -> Result<(), DocumentError> {
    if pretty {
        let indent = vec![b' '; indent];
        let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(&indent));
        value.serialize(&mut ser)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}

pub fn to_text(value: &Value, pretty: bool, indent: usize) -> Result<String, DocumentError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value, pretty, indent)?;
    String::from_utf8(buf)
        .map_err(|e| DocumentError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Write `value` to the file at `path`, followed by a newline.
pub fn save_value(
    path: &Path,
    value: &Value,
    pretty: bool,
    indent: usize,
) -> Result<(), DocumentError> {
    debug!("Saving document to {}", path.display());
    let mut writer = BufWriter::new(File::create(path)?);
    write_value(&mut writer, value, pretty, indent)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn read_value<R: Read>(reader: R) -> Result<Value, DocumentError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_value(path: &Path) -> Result<Value, DocumentError> {
    debug!("Loading document from {}", path.display());
    let file = File::open(path)?;
    read_value(std::io::BufReader::new(file))
}
