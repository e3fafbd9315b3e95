//! Boundary codepoint sampling for the Unicode fixtures.
//!
//! The sample straddles the points where UTF-8 changes sequence length
//! (0x80, 0x800, 0x10000) and where UTF-16 switches to surrogate pairs
//! (0x10000), five codepoints on either side.

/// Codepoints the shared Unicode sample is centred on.
pub const BOUNDARIES: [u32; 3] = [0x80, 0x800, 0x10000];

/// Codepoints taken on each side of a boundary.
pub const RADIUS: u32 = 5;

/// Characters `boundary - RADIUS ..= boundary + RADIUS`, in ascending order.
///
/// Values that are not Unicode scalar values (surrogates) are skipped; none
/// of the `BOUNDARIES` come near them.
pub fn codepoint_range(boundary: u32) -> impl Iterator<Item = char> {
    (boundary.saturating_sub(RADIUS)..=boundary.saturating_add(RADIUS)).filter_map(char::from_u32)
}

/// The 33-character sample shared by every Unicode format.
pub fn boundary_sample() -> String {
    BOUNDARIES.iter().flat_map(|&b| codepoint_range(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_has_33_chars() {
        assert_eq!(boundary_sample().chars().count(), 33);
    }

    #[test]
    fn test_sample_codepoints() {
        let expected: Vec<u32> = (0x7B..=0x85)
            .chain(0x7FB..=0x805)
            .chain(0xFFFB..=0x10005)
            .collect();
        let actual: Vec<u32> = boundary_sample().chars().map(u32::from).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_range_is_ascending_and_centred() {
        let range: Vec<char> = codepoint_range(0x800).collect();
        assert_eq!(range.len(), 11);
        assert_eq!(range[5], '\u{800}');
        assert!(range.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_range_skips_surrogates() {
        // 0xD800 sits at the start of the surrogate block
        let range: Vec<char> = codepoint_range(0xD800).collect();
        assert_eq!(range.len(), 5);
        assert_eq!(range.last(), Some(&'\u{D7FF}'));
    }
}
