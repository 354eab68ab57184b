use std::fmt::{self, Write};

use bitvec::prelude::*;

use crate::decoder::{Decoded, Decoder, Family};
use crate::error::Error;
use crate::instructions::{
    OperandClass, TransferFlags, BLOCK_MODES, CONDITIONS, DATA_PROCESSING,
    IMMEDIATE_OFFSET_PLACEHOLDER, SHIFTS,
};
use crate::isa::arm::{bit, cond, high3, reg, ArmDecoder};
use crate::memory::Image;

/// Appends the instruction text for `d` (mnemonic, condition, flags,
/// operands) to `out`.
pub fn write_decoded<W: Write>(out: &mut W, d: &Decoded) -> fmt::Result {
    let raw = d.raw;
    match d.family {
        Family::Branch => branch(out, d.address, raw),
        Family::Multiply => multiply(out, raw),
        Family::SoftwareInterrupt => swi(out, raw),
        Family::DataProcessing => data_processing(out, raw),
        Family::SingleTransfer => single_transfer(out, raw),
        Family::BlockTransfer => block_transfer(out, raw),
        Family::Unknown => {
            tracing::debug!(address = d.address, raw, "no family matched, emitting raw word");
            raw_word(out, raw)
        }
    }
}

pub fn fmt_decoded(d: &Decoded) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = write_decoded(&mut s, d);
    s
}

/// Writes one listing line, `aaaaaaaa : wwwwwwww : text`, without a line
/// terminator.
pub fn write_line<W: Write>(out: &mut W, address: u32, raw32: u32) -> fmt::Result {
    write!(out, "{address:08x} : {raw32:08x} : ")?;
    write_decoded(out, &ArmDecoder.decode(address, raw32))
}

pub fn fmt_line(address: u32, raw32: u32) -> String {
    let mut s = String::new();
    let _ = write_line(&mut s, address, raw32);
    s
}

/// Writes a newline-terminated line for every whole word of `image` and
/// returns how many lines were written.
pub fn write_listing<W: std::io::Write>(out: &mut W, image: &Image) -> Result<usize, Error> {
    let mut line = String::new();
    let mut count = 0;
    for (address, raw32) in image.words() {
        line.clear();
        write_line(&mut line, address, raw32)?;
        writeln!(out, "{line}")?;
        count += 1;
    }
    Ok(count)
}

fn condition<W: Write>(out: &mut W, raw32: u32) -> fmt::Result {
    out.write_str(CONDITIONS[cond(raw32)])
}

/// Register operand with an optional shift, from the low 12 bits.
/// `lsl 0` is the canonical unshifted form and prints nothing.
fn shifted_register<W: Write>(out: &mut W, raw32: u32) -> fmt::Result {
    write!(out, ",r{}", reg(raw32, 0))?;
    if raw32 & 0x0000_0ff0 != 0 {
        let shift = SHIFTS[((raw32 >> 5) & 0x3) as usize];
        write!(out, " {shift} ")?;
        if bit(raw32, 4) {
            write!(out, "r{}", reg(raw32, 8))?;
        } else {
            // Only bits 11..8 of the immediate amount are shown.
            write!(out, "{}", reg(raw32, 8))?;
        }
    }
    Ok(())
}

// xxxx101L oooooooo oooooooo oooooooo
fn branch<W: Write>(out: &mut W, address: u32, raw32: u32) -> fmt::Result {
    out.write_str(if bit(raw32, 24) { "bl" } else { "b" })?;
    condition(out, raw32)?;
    let offset = ((raw32 & 0x00ff_ffff) << 8) as i32 >> 8;
    // The pc reads two words ahead.
    let target = address
        .wrapping_add(8)
        .wrapping_add(offset.wrapping_mul(4) as u32);
    write!(out, " {target:08x}")
}

// xxxx0000 00ASdddd nnnnssss 1001mmmm
fn multiply<W: Write>(out: &mut W, raw32: u32) -> fmt::Result {
    let accumulate = bit(raw32, 21);
    out.write_str(if accumulate { "mla" } else { "mul" })?;
    condition(out, raw32)?;
    if bit(raw32, 20) {
        out.write_char('s')?;
    }
    write!(out, " r{},r{},r{}", reg(raw32, 16), reg(raw32, 0), reg(raw32, 8))?;
    if accumulate {
        write!(out, ",r{}", reg(raw32, 12))?;
    }
    Ok(())
}

// xxxx1111 yyyyyyyy yyyyyyyy yyyyyyyy
fn swi<W: Write>(out: &mut W, raw32: u32) -> fmt::Result {
    out.write_str("swi")?;
    condition(out, raw32)?;
    write!(out, " {}", raw32 & 0x00ff_ffff)
}

/// 8-bit immediate shifted left by the 4-bit rotate field in a 64-bit
/// barrel, with anything above bit 31 folded back into the low word.
pub fn rotated_immediate(raw32: u32) -> u32 {
    let value = u64::from(raw32 & 0xff);
    let position = (raw32 >> 8) & 0xf;
    let barrel = value << position;
    ((barrel & 0xffff_ffff) | (barrel >> 32)) as u32
}

// xxxx000a aaaSnnnn ddddcccc ctttmmmm  register form
// xxxx001a aaaSnnnn ddddrrrr bbbbbbbb  immediate form
fn data_processing<W: Write>(out: &mut W, raw32: u32) -> fmt::Result {
    let desc = &DATA_PROCESSING[((raw32 >> 21) & 0xf) as usize];
    out.write_str(desc.mnemonic)?;
    condition(out, raw32)?;
    let rd = reg(raw32, 12);
    let rn = reg(raw32, 16);
    let set_flags = bit(raw32, 20);
    match desc.class {
        OperandClass::TwoOperand => {
            if set_flags {
                out.write_char('s')?;
            }
            write!(out, " r{rd},r{rn}")?;
        }
        OperandClass::Compare => {
            // rd should be 0 or 15; other values print like 0.
            if rd == 15 {
                out.write_char('p')?;
            }
            write!(out, " r{rn}")?;
        }
        OperandClass::Move => {
            if set_flags {
                out.write_char('s')?;
            }
            write!(out, " r{rd}")?;
        }
    }
    if high3(raw32) == 0b001 {
        write!(out, ",{}", rotated_immediate(raw32))
    } else {
        shifted_register(out, raw32)
    }
}

// xxxx010P UBWLnnnn ddddoooo oooooooo  immediate form
// xxxx011P UBWLnnnn ddddcccc ctt0mmmm  register form
fn single_transfer<W: Write>(out: &mut W, raw32: u32) -> fmt::Result {
    let flags = TransferFlags::from_word(raw32);
    out.write_str(if flags.contains(TransferFlags::LOAD) { "ldr" } else { "str" })?;
    condition(out, raw32)?;
    if flags.contains(TransferFlags::BYTE) {
        out.write_char('b')?;
    }
    write!(out, " r{},[r{}", reg(raw32, 12), reg(raw32, 16))?;
    if bit(raw32, 25) {
        shifted_register(out, raw32)?;
    } else {
        out.write_str(IMMEDIATE_OFFSET_PLACEHOLDER)?;
    }
    out.write_char(']')
}

// xxxx100P USWLnnnn llllllll llllllll
fn block_transfer<W: Write>(out: &mut W, raw32: u32) -> fmt::Result {
    let flags = TransferFlags::from_word(raw32);
    out.write_str(if flags.contains(TransferFlags::LOAD) { "ldm" } else { "stm" })?;
    condition(out, raw32)?;
    out.write_str(BLOCK_MODES[flags.block_mode()])?;
    write!(out, " r{}", reg(raw32, 16))?;
    if flags.contains(TransferFlags::WRITEBACK) {
        out.write_char('!')?;
    }
    out.write_str(",{")?;
    let list = (raw32 & 0xffff) as u16;
    for (n, r) in list.view_bits::<Lsb0>().iter_ones().enumerate() {
        if n > 0 {
            out.write_char(',')?;
        }
        write!(out, "r{r}")?;
    }
    out.write_char('}')?;
    if flags.contains(TransferFlags::BYTE) {
        out.write_char('^')?;
    }
    Ok(())
}

fn raw_word<W: Write>(out: &mut W, raw32: u32) -> fmt::Result {
    write!(out, ".word {raw32:08x}")
}
