//! Writes trees and reports as JSON documents.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::types::ExplorerResult;

/// Writer for JSON output.
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Create a writer; `pretty` selects indented output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serialize `value` to a string.
    pub fn to_string<T: Serialize + ?Sized>(&self, value: &T) -> ExplorerResult<String> {
        let s = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(s)
    }

    /// Write `value` to any writer, followed by a newline.
    pub fn write_to<T: Serialize + ?Sized>(
        &self,
        value: &T,
        writer: &mut impl Write,
    ) -> ExplorerResult<()> {
        let s = self.to_string(value)?;
        writer.write_all(s.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write `value` to a file, replacing it.
    pub fn write_to_file<T: Serialize + ?Sized>(&self, value: &T, path: &Path) -> ExplorerResult<()> {
        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        self.write_to(value, &mut file)?;
        file.flush()?;
        log::info!("Wrote {}", path.display());
        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new(true)
    }
}
