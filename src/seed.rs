/// Derive a shuffle seed from a name.
///
/// Polynomial hash `h = 31*h + c` over UTF-16 code units with signed 32-bit
/// wraparound, then the absolute value. `i32::MIN` maps to `0x8000_0000`.
pub fn seed_from_name(name: &str) -> u32 {
    let h = name
        .encode_utf16()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32));
    h.unsigned_abs()
}
