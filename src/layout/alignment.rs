// Mon May 4 2026 - Alex

pub fn align_up(value: u64, alignment: u64) -> u64 {
    if alignment <= 1 {
        return value;
    }
    (value + alignment - 1) & !(alignment - 1)
}

/// `align_up` that reports overflow instead of wrapping.
pub fn checked_align_up(value: u64, alignment: u64) -> Option<u64> {
    if alignment <= 1 {
        return Some(value);
    }
    value
        .checked_add(alignment - 1)
        .map(|v| v & !(alignment - 1))
}

pub fn is_aligned(value: u64, alignment: u64) -> bool {
    if alignment <= 1 {
        return true;
    }
    (value & (alignment - 1)) == 0
}

/// Smallest power-of-two byte count whose bits hold `bits`.
pub fn bits_storage_bytes(bits: u8) -> u64 {
    let bytes = (bits as u64 + 7) / 8;
    bytes.next_power_of_two()
}
