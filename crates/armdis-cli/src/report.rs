use serde::Serialize;
use std::ops::Range;

use armdis::{fmt_decoded, ArmDecoder, Decoder, Family, Image};

/// One listing entry, as emitted by `--format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsnOut {
    pub address: u32,
    pub raw: u32,
    pub family: Family,
    pub text: String,
}

impl InsnOut {
    /// The `aaaaaaaa : wwwwwwww : text` listing line, without terminator.
    pub fn line(&self) -> String {
        format!("{:08x} : {:08x} : {}", self.address, self.raw, self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyCount {
    pub family: Family,
    pub count: usize,
}

fn insn(dec: &ArmDecoder, address: u32, raw: u32) -> InsnOut {
    let d = dec.decode(address, raw);
    InsnOut { address, raw, family: d.family, text: fmt_decoded(&d) }
}

/// Decodes every word of `img`, or with a range, the words read at
/// `start, start + 4, ...` below `end`. A ranged listing stops at the
/// first address without a whole word in the image.
pub fn listing(img: &Image, range: Option<Range<u32>>) -> Vec<InsnOut> {
    let dec = ArmDecoder::new();
    let Some(range) = range else {
        return img.words().map(|(addr, raw)| insn(&dec, addr, raw)).collect();
    };
    let mut out = Vec::new();
    let mut pc = range.start;
    while pc < range.end {
        let Some(raw) = img.read_word(pc) else {
            tracing::debug!(pc, "range leaves the image");
            break;
        };
        out.push(insn(&dec, pc, raw));
        let Some(next) = pc.checked_add(4) else { break };
        pc = next;
    }
    out
}

/// Word count per family, in `Family::ALL` order, zero counts included.
pub fn family_stats(img: &Image) -> Vec<FamilyCount> {
    let dec = ArmDecoder::new();
    let mut counts = vec![0usize; Family::ALL.len()];
    for (addr, raw) in img.words() {
        let family = dec.decode(addr, raw).family;
        if let Some(i) = Family::ALL.iter().position(|&f| f == family) {
            counts[i] += 1;
        }
    }
    Family::ALL
        .iter()
        .zip(counts)
        .map(|(&family, count)| FamilyCount { family, count })
        .collect()
}
