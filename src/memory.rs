use crate::config::DisasmConfig;
use crate::error::Error;

/// Raw bytes of a binary loaded at `base`. Words are stored big-endian.
#[derive(Debug, Clone)]
pub struct Image {
    pub base: u32,
    pub bytes: Vec<u8>,
}

impl Image {
    pub fn new(base: u32, bytes: Vec<u8>) -> Self {
        Self { base, bytes }
    }

    /// Builds an image from the window of `file` selected by `cfg`.
    pub fn from_file_bytes(file: &[u8], cfg: &DisasmConfig) -> Result<Self, Error> {
        let payload = cfg.window(file)?;
        Ok(Self::new(cfg.base, payload.to_vec()))
    }

    /// `(address, word)` for every whole word, in ascending address order.
    pub fn words(&self) -> Words<'_> {
        Words {
            chunks: self.bytes.chunks_exact(4),
            address: self.base,
        }
    }

    /// Bytes after the last whole word; these are never decoded.
    pub fn trailing(&self) -> &[u8] {
        self.words().chunks.remainder()
    }

    /// Big-endian word at `addr`, or `None` unless all four bytes are
    /// inside the image.
    pub fn read_word(&self, addr: u32) -> Option<u32> {
        let off = addr.wrapping_sub(self.base) as usize;
        let bytes = self.bytes.get(off..off.checked_add(4)?)?;
        Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

pub struct Words<'a> {
    chunks: std::slice::ChunksExact<'a, u8>,
    address: u32,
}

impl Iterator for Words<'_> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chunks.next()?;
        let item = (self.address, u32::from_be_bytes([c[0], c[1], c[2], c[3]]));
        self.address = self.address.wrapping_add(4);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Words<'_> {}
