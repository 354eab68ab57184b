use armdis::fmt_line;
use pretty_assertions::assert_eq;

fn enc_b(cond: u32, link: bool, offset: i32) -> u32 {
    (cond << 28) | (0b101 << 25) | (u32::from(link) << 24) | (offset as u32 & 0x00ff_ffff)
}

fn text(address: u32, raw: u32) -> String {
    fmt_line(address, raw)[22..].to_string()
}

#[test]
fn self_loop() {
    assert_eq!(enc_b(0xe, false, -2), 0xEAFF_FFFE);
    assert_eq!(fmt_line(0x1000, 0xEAFF_FFFE), "00001000 : eafffffe : b 00001000");
}

#[test]
fn forward_and_backward_targets() {
    assert_eq!(text(0, enc_b(0xe, false, 0)), "b 00000008");
    assert_eq!(text(0x100, enc_b(0xe, false, 0x10)), "b 00000148");
    assert_eq!(text(0x100, enc_b(0xe, false, -0x10)), "b 000000c8");
}

#[test]
fn target_wraps_below_zero() {
    // 0 + 8 + 4 * -3
    assert_eq!(text(0, enc_b(0xe, false, -3)), "b fffffffc");
}

#[test]
fn link_and_condition() {
    assert_eq!(text(0, enc_b(0xe, true, 1)), "bl 0000000c");
    assert_eq!(text(0, enc_b(0x0, false, 1)), "beq 0000000c");
    assert_eq!(text(0, enc_b(0x1, true, 1)), "blne 0000000c");
    assert_eq!(text(0, enc_b(0xf, false, 1)), "bnv 0000000c");
}

#[test]
fn extreme_offsets() {
    assert_eq!(text(0, enc_b(0xe, false, 0x7f_ffff)), "b 02000004");
    assert_eq!(text(0x0400_0000, enc_b(0xe, false, -0x80_0000)), "b 02000008");
}

#[test]
fn every_condition_suffix() {
    let expected = [
        "eq", "ne", "cs", "cc", "mi", "pl", "vs", "vc", "hi", "ls", "ge", "lt", "gt", "le", "", "nv",
    ];
    for (cond, suffix) in expected.iter().enumerate() {
        let t = text(0, enc_b(cond as u32, false, 0));
        assert_eq!(t, format!("b{suffix} 00000008"));
    }
}
