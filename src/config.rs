use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Where and how much of a raw binary gets disassembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisasmConfig {
    /// Address assigned to the first word.
    pub base: u32,
    /// Bytes skipped at the start of the file before the first word.
    pub skip: usize,
    /// Limit of bytes taken after `skip`; `None` runs to end of file.
    pub len: Option<usize>,
}

impl Default for DisasmConfig {
    fn default() -> Self {
        Self {
            base: 0,
            skip: 0,
            len: None,
        }
    }
}

impl DisasmConfig {
    pub fn from_json_str(text: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Cuts the configured window out of `file`.
    pub fn window<'a>(&self, file: &'a [u8]) -> Result<&'a [u8], Error> {
        if self.skip > file.len() {
            return Err(Error::SkipOutOfRange {
                skip: self.skip,
                size: file.len(),
            });
        }
        let payload = &file[self.skip..];
        match self.len {
            Some(len) if len > payload.len() => Err(Error::LenOutOfRange {
                len,
                remaining: payload.len(),
            }),
            Some(len) => Ok(&payload[..len]),
            None => Ok(payload),
        }
    }
}
