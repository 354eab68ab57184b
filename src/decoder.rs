use serde::Serialize;

/// Instruction family a word belongs to. Decided once per word, then
/// rendered by the matching family printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Branch,
    Multiply,
    SoftwareInterrupt,
    DataProcessing,
    SingleTransfer,
    BlockTransfer,
    Unknown,
}

impl Family {
    /// Real families in the order the classifier tests them.
    pub const PRIORITY: [Family; 6] = [
        Family::Branch,
        Family::Multiply,
        Family::SoftwareInterrupt,
        Family::DataProcessing,
        Family::SingleTransfer,
        Family::BlockTransfer,
    ];

    pub const ALL: [Family; 7] = [
        Family::Branch,
        Family::Multiply,
        Family::SoftwareInterrupt,
        Family::DataProcessing,
        Family::SingleTransfer,
        Family::BlockTransfer,
        Family::Unknown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::Branch => "branch",
            Family::Multiply => "multiply",
            Family::SoftwareInterrupt => "software_interrupt",
            Family::DataProcessing => "data_processing",
            Family::SingleTransfer => "single_transfer",
            Family::BlockTransfer => "block_transfer",
            Family::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub address: u32,
    pub raw: u32,
    pub family: Family,
}

/// Every word decodes; words outside the known families come back as
/// `Family::Unknown`.
pub trait Decoder {
    fn decode(&self, address: u32, raw32: u32) -> Decoded;
}
