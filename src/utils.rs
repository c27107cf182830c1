/// $2^{n-1}$, or 0 for the 0-variable function.
#[inline]
pub(crate) fn half_length(variables_count: usize) -> u64 {
    (1u64 << variables_count) >> 1
}

/// Left rotation by one position of an `n`-bit word, bit 0 being the low end.
#[inline]
pub(crate) fn rotate_left_1(value: usize, variables_count: usize) -> usize {
    if variables_count == 0 {
        return value;
    }
    let mask = (1usize << variables_count) - 1;
    ((value << 1) | (value >> (variables_count - 1))) & mask
}

#[cfg(test)]
#[inline]
pub(crate) fn fast_binary_dot_product(a: usize, b: usize) -> u32 {
    (a & b).count_ones()
}
