pub mod config;
pub mod decoder;
pub mod disasm;
pub mod error;
pub mod instructions;
pub mod memory;

pub mod isa {
    pub mod arm; // ARMv4-style 32-bit words, condition in the top nibble
}

pub use config::DisasmConfig;
pub use decoder::{Decoded, Decoder, Family};
pub use disasm::{fmt_decoded, fmt_line, write_decoded, write_line, write_listing};
pub use error::Error;
pub use isa::arm::ArmDecoder;
pub use memory::Image;
