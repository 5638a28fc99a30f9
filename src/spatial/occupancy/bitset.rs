use super::LineSet;

impl LineSet {
    // === BitSet Helpers ===

    /// Returns false if the bit was already set
    #[inline(always)]
    pub(super) fn insert(&mut self, idx: usize) -> bool {
        let word = idx >> 6; // idx / 64
        let bit = idx & 63; // idx % 64
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        let mask = 1u64 << bit;
        if self.words[word] & mask != 0 {
            return false;
        }
        self.words[word] |= mask;
        self.count += 1;
        true
    }

    /// Returns false if the bit was not set
    #[inline(always)]
    pub(super) fn remove(&mut self, idx: usize) -> bool {
        let word = idx >> 6;
        let bit = idx & 63;
        let mask = 1u64 << bit;
        match self.words.get_mut(word) {
            Some(w) if *w & mask != 0 => {
                *w &= !mask;
                self.count -= 1;
                true
            }
            _ => false,
        }
    }

    #[inline(always)]
    pub(super) fn contains(&self, idx: usize) -> bool {
        let word = idx >> 6;
        let bit = idx & 63;
        word < self.words.len() && (self.words[word] & (1u64 << bit)) != 0
    }

    /// Zero every word, keeping the allocation
    pub(super) fn clear(&mut self) {
        self.words.fill(0);
        self.count = 0;
    }

    /// Indices of set bits in ascending order
    pub(super) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &bits)| {
            (0..64).filter(move |b| bits & (1u64 << b) != 0).map(move |b| (w << 6) | b)
        })
    }
}
