use crate::decoder::{Decoded, Decoder, Family};

/// Decoder for 32-bit ARM words (condition field in bits 31..28).
///
/// Classification only looks at bits 27..20 and 7..4; everything else is
/// operand payload read by the renderers in `disasm`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArmDecoder;

impl ArmDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for ArmDecoder {
    fn decode(&self, address: u32, raw32: u32) -> Decoded {
        let family = classify(raw32);
        tracing::trace!(address, raw = raw32, ?family, "decoded");
        Decoded {
            address,
            raw: raw32,
            family,
        }
    }
}

/// Bits 27..25, the primary discriminator.
#[inline]
pub fn high3(raw32: u32) -> u32 {
    (raw32 & 0x0e00_0000) >> 25
}

#[inline]
pub fn bit(raw32: u32, index: u32) -> bool {
    (raw32 >> index) & 1 != 0
}

/// 4-bit register number whose lowest bit sits at `lsb`.
#[inline]
pub fn reg(raw32: u32, lsb: u32) -> u32 {
    (raw32 >> lsb) & 0xf
}

#[inline]
pub fn cond(raw32: u32) -> usize {
    ((raw32 >> 28) & 0xf) as usize
}

#[inline]
fn is_multiply(raw32: u32) -> bool {
    raw32 & 0x0fc0_00f0 == 0x0000_0090
}

#[inline]
fn is_swi(raw32: u32) -> bool {
    raw32 & 0x0f00_0000 == 0x0f00_0000
}

/// Tests in priority order; the first hit wins. Multiply patterns live
/// inside the register data-processing space and must be tested first.
pub fn classify(raw32: u32) -> Family {
    let high3 = high3(raw32);
    if high3 == 0b101 {
        Family::Branch
    } else if is_multiply(raw32) {
        Family::Multiply
    } else if is_swi(raw32) {
        Family::SoftwareInterrupt
    } else if high3 == 0b000 || high3 == 0b001 {
        Family::DataProcessing
    } else if high3 == 0b010 || high3 == 0b011 {
        Family::SingleTransfer
    } else if high3 == 0b100 {
        Family::BlockTransfer
    } else {
        Family::Unknown
    }
}

impl Family {
    /// Standalone predicate for one family, independent of test order.
    /// Exactly one family accepts any given word.
    pub fn accepts(self, raw32: u32) -> bool {
        let high3 = high3(raw32);
        match self {
            Family::Branch => high3 == 0b101,
            Family::Multiply => is_multiply(raw32),
            Family::SoftwareInterrupt => is_swi(raw32),
            Family::DataProcessing => high3 <= 0b001 && !is_multiply(raw32),
            Family::SingleTransfer => high3 == 0b010 || high3 == 0b011,
            Family::BlockTransfer => high3 == 0b100,
            Family::Unknown => Family::PRIORITY.iter().all(|f| !f.accepts(raw32)),
        }
    }
}
