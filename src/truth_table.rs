//! Bit-packed storage of a truth table, 64 outputs per `u64` word.

pub(crate) const WORD_BITS: usize = u64::BITS as usize;

/// Truth table of length $2^n$, bit `i` of word `i / 64` holding the output for input `i`.
///
/// Bits past `len` in the last word are always 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TruthTable {
    len: usize,
    words: Vec<u64>,
}

impl TruthTable {
    pub(crate) fn zeroed(len: usize) -> Self {
        TruthTable {
            len,
            words: vec![0; len.div_ceil(WORD_BITS)],
        }
    }

    /// Packs a 0/1 byte sequence. Any non-zero byte is read as 1, validation is up to the caller.
    pub(crate) fn from_bits(bits: &[u8]) -> Self {
        let mut table = Self::zeroed(bits.len());
        bits.iter()
            .enumerate()
            .filter(|(_, bit)| **bit != 0)
            .for_each(|(i, _)| table.words[i / WORD_BITS] |= 1 << (i % WORD_BITS));
        table
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// $n$ such that the length is $2^n$.
    #[inline]
    pub(crate) fn variables_count(&self) -> usize {
        self.len.trailing_zeros() as usize
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> bool {
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    #[inline]
    pub(crate) fn flip(&mut self, index: usize) {
        self.words[index / WORD_BITS] ^= 1 << (index % WORD_BITS);
    }

    #[inline]
    pub(crate) fn words(&self) -> &[u64] {
        &self.words
    }

    #[inline]
    pub(crate) fn words_mut(&mut self) -> &mut [u64] {
        &mut self.words
    }

    pub(crate) fn count_ones(&self) -> u64 {
        self.words.iter().map(|word| word.count_ones() as u64).sum()
    }

    /// Indices whose bit equals `value`, in ascending order.
    pub(crate) fn positions(&self, value: bool) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |index| self.get(*index) == value)
    }

    /// Indices of the set bits, in ascending order, scanning word by word.
    pub(crate) fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(word_index, word)| {
            std::iter::successors(Some(*word).filter(|w| *w != 0), |w| {
                Some(w & (w - 1)).filter(|w| *w != 0)
            })
            .map(move |w| word_index * WORD_BITS + w.trailing_zeros() as usize)
        })
    }

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        (0..self.len).map(|index| self.get(index) as u8).collect()
    }

    /// $(-1)^{f(x)}$ for every input $x$.
    pub(crate) fn signs(&self) -> Vec<i64> {
        (0..self.len)
            .map(|index| if self.get(index) { -1 } else { 1 })
            .collect()
    }
}
