use armdis::{fmt_decoded, ArmDecoder, Decoder};
use pretty_assertions::assert_eq;

const AL: u32 = 0xe;

fn text(raw: u32) -> String {
    fmt_decoded(&ArmDecoder::new().decode(0, raw))
}

// xxxx01IP UBWLnnnn dddd oooooooooooo
fn enc_sdt(reg_offset: bool, p: bool, u: bool, b: bool, w: bool, l: bool, rn: u32, rd: u32, off12: u32) -> u32 {
    (AL << 28)
        | (0b01 << 26)
        | (u32::from(reg_offset) << 25)
        | (u32::from(p) << 24)
        | (u32::from(u) << 23)
        | (u32::from(b) << 22)
        | (u32::from(w) << 21)
        | (u32::from(l) << 20)
        | (rn << 16)
        | (rd << 12)
        | off12
}

// xxxx100P USWLnnnn llllllll llllllll
fn enc_bdt(p: bool, u: bool, s: bool, w: bool, l: bool, rn: u32, list: u16) -> u32 {
    (AL << 28)
        | (0b100 << 25)
        | (u32::from(p) << 24)
        | (u32::from(u) << 23)
        | (u32::from(s) << 22)
        | (u32::from(w) << 21)
        | (u32::from(l) << 20)
        | (rn << 16)
        | u32::from(list)
}

#[test]
fn register_offset_load_and_store() {
    assert_eq!(text(enc_sdt(true, true, true, false, false, true, 1, 0, 0x002)), "ldr r0,[r1,r2]");
    assert_eq!(text(enc_sdt(true, true, true, false, false, false, 1, 0, 0x002)), "str r0,[r1,r2]");
    assert_eq!(text(enc_sdt(true, true, true, true, false, true, 3, 4, 0x205)), "ldrb r4,[r3,r5 lsl 2]");
}

#[test]
fn index_and_writeback_bits_are_not_shown() {
    let pre = text(enc_sdt(true, true, true, false, true, true, 1, 0, 0x002));
    let post = text(enc_sdt(true, false, false, false, false, true, 1, 0, 0x002));
    assert_eq!(pre, "ldr r0,[r1,r2]");
    assert_eq!(post, "ldr r0,[r1,r2]");
}

#[test]
fn immediate_offset_prints_placeholder() {
    assert_eq!(
        text(enc_sdt(false, true, true, false, false, true, 13, 2, 0x004)),
        "ldr r2,[r13FIXME: immediate form (12-bit offset)]"
    );
    assert_eq!(
        text((0x0 << 28) | (enc_sdt(false, true, true, true, false, false, 0, 1, 0) & 0x0fff_ffff)),
        "streqb r1,[r0FIXME: immediate form (12-bit offset)]"
    );
}

#[test]
fn register_list_is_ascending_without_ranges() {
    let raw = enc_bdt(false, true, false, false, true, 0, 0b1000_0000_0000_1001);
    assert_eq!(text(raw), "ldmia r0,{r0,r3,r15}");
    assert_eq!(text(enc_bdt(false, true, false, false, true, 0, 0x00ff)), "ldmia r0,{r0,r1,r2,r3,r4,r5,r6,r7}");
    assert_eq!(text(enc_bdt(false, true, false, false, true, 0, 0)), "ldmia r0,{}");
}

#[test]
fn addressing_modes_writeback_and_user_bank() {
    assert_eq!(text(enc_bdt(false, false, false, false, false, 1, 0x2)), "stmda r1,{r1}");
    assert_eq!(text(enc_bdt(true, false, false, true, false, 13, 0x4010)), "stmdb r13!,{r4,r14}");
    assert_eq!(text(enc_bdt(true, true, false, false, true, 2, 0x1)), "ldmib r2,{r0}");
    assert_eq!(text(0xE8BD_8009), "ldmia r13!,{r0,r3,r15}");
    assert_eq!(text(enc_bdt(false, true, true, true, true, 13, 0x8000)), "ldmia r13!,{r15}^");
}

#[test]
fn condition_sits_before_mode() {
    let raw = (0x1 << 28) | (enc_bdt(true, false, false, true, false, 13, 0x4000) & 0x0fff_ffff);
    assert_eq!(text(raw), "stmnedb r13!,{r14}");
}
