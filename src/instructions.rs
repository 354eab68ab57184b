use bitflags::bitflags;

/// Condition suffixes indexed by bits 31..28. `al` prints as nothing.
pub const CONDITIONS: [&str; 16] = [
    "eq", "ne", "cs", "cc", "mi", "pl", "vs", "vc", "hi", "ls", "ge", "lt", "gt", "le", "", "nv",
];

/// Shift mnemonics indexed by bits 6..5.
pub const SHIFTS: [&str; 4] = ["lsl", "lsr", "asr", "ror"];

/// Block transfer addressing modes indexed by the P and U bits (24..23).
pub const BLOCK_MODES: [&str; 4] = ["da", "ia", "db", "ib"];

/// Printed in place of the offset of a single transfer with a 12-bit
/// immediate offset, which is not decoded.
pub const IMMEDIATE_OFFSET_PLACEHOLDER: &str = "FIXME: immediate form (12-bit offset)";

/// Which register fields a data-processing mnemonic prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandClass {
    /// `rd,rn`; takes the `s` suffix.
    TwoOperand,
    /// `rn` only; `rd == 15` selects the `p` suffix.
    Compare,
    /// `rd` only; takes the `s` suffix.
    Move,
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub class: OperandClass,
}

const fn dp(mnemonic: &'static str, class: OperandClass) -> InstrDesc {
    InstrDesc { mnemonic, class }
}

/// Data-processing opcodes indexed by bits 24..21.
pub const DATA_PROCESSING: [InstrDesc; 16] = [
    dp("and", OperandClass::TwoOperand),
    dp("eor", OperandClass::TwoOperand),
    dp("sub", OperandClass::TwoOperand),
    dp("rsb", OperandClass::TwoOperand),
    dp("add", OperandClass::TwoOperand),
    dp("adc", OperandClass::TwoOperand),
    dp("sbc", OperandClass::TwoOperand),
    dp("rsc", OperandClass::TwoOperand),
    dp("tst", OperandClass::Compare),
    dp("teq", OperandClass::Compare),
    dp("cmp", OperandClass::Compare),
    dp("cmn", OperandClass::Compare),
    dp("orr", OperandClass::TwoOperand),
    dp("mov", OperandClass::Move),
    dp("bic", OperandClass::TwoOperand),
    dp("mvn", OperandClass::Move),
];

bitflags! {
/// Bits 24..20 of single and block data transfers, shifted down to bit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferFlags: u32 {
const LOAD = 1 << 0; // L: load, else store
const WRITEBACK = 1 << 1; // W
const BYTE = 1 << 2; // B on single transfers, S (user bank) on block transfers
const UP = 1 << 3; // U
const PRE = 1 << 4; // P
}
}

impl TransferFlags {
    pub fn from_word(raw32: u32) -> Self {
        Self::from_bits_truncate(raw32 >> 20)
    }

    /// Index into `BLOCK_MODES`.
    pub fn block_mode(self) -> usize {
        ((self.bits() >> 3) & 0x3) as usize
    }
}
