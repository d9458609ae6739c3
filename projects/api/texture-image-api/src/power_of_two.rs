//! Power-of-two rounding and mip chain length.

/// Number of levels in the mip chain of a `width` x `height` x `depth` texture,
/// including the base level.
///
/// Each level halves every dimension (rounding down, minimum 1) until all are 1.
///
/// # Examples
///
/// ```
/// use texture_image_api::count_mipmaps;
///
/// assert_eq!(count_mipmaps(256, 256, 1), 9);
/// assert_eq!(count_mipmaps(5, 3, 1), 3);
/// assert_eq!(count_mipmaps(1, 1, 1), 1);
/// ```
pub fn count_mipmaps(mut width: usize, mut height: usize, mut depth: usize) -> usize {
    let mut count = 1;
    while width > 1 || height > 1 || depth > 1 {
        width = (width / 2).max(1);
        height = (height / 2).max(1);
        depth = (depth / 2).max(1);
        count += 1;
    }
    count
}

/// Largest power of two representable in a `usize`.
const LARGEST_POWER_OF_TWO: usize = 1 << (usize::BITS - 1);

/// Smallest power of two that is `>= value`. Returns 1 for 0.
///
/// Saturates at the largest representable power of two.
#[inline]
pub fn next_power_of_two(value: usize) -> usize {
    value
        .checked_next_power_of_two()
        .unwrap_or(LARGEST_POWER_OF_TWO)
}

/// Largest power of two that is `<= value`. Returns 0 for 0.
#[inline]
pub fn previous_power_of_two(value: usize) -> usize {
    match value {
        0 => 0,
        _ => 1 << (usize::BITS - 1 - value.leading_zeros()),
    }
}

/// Power of two closest to `value`. When both neighbours are equally far, the larger one wins.
///
/// # Examples
///
/// ```
/// use texture_image_api::nearest_power_of_two;
///
/// assert_eq!(nearest_power_of_two(5), 4);
/// assert_eq!(nearest_power_of_two(6), 8);
/// assert_eq!(nearest_power_of_two(7), 8);
/// ```
pub fn nearest_power_of_two(value: usize) -> usize {
    let previous = previous_power_of_two(value);
    match value.checked_next_power_of_two() {
        Some(next) if next - value <= value - previous => next,
        _ => previous,
    }
}
