use anyhow::{Context, Result};
use std::path::Path;

use armdis::{DisasmConfig, Image};

/// Reads `path` and keeps the window selected by `cfg`.
pub fn load_raw_bin(path: &Path, cfg: &DisasmConfig) -> Result<Image> {
    let file = std::fs::read(path).with_context(|| format!("{}: open failed", path.display()))?;
    let img = Image::from_file_bytes(&file, cfg)?;
    if !img.trailing().is_empty() {
        tracing::warn!(
            bytes = img.trailing().len(),
            "input is not a multiple of 4 bytes; trailing bytes are not disassembled"
        );
    }
    Ok(img)
}

/// Decimal or `0x`-prefixed hex.
pub fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}
