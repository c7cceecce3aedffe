use rayon::prelude::*;

/// Occurrence count of every byte value seen in the input. Byte values that never occur are
/// not part of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// Count the input. Uses parallelism when data set is over 64k.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            counts: freqs(data),
        }
    }

    /// Count for a symbol, or None if it never occurs.
    pub fn get(&self, symbol: u8) -> Option<u64> {
        match self.counts[symbol as usize] {
            0 => None,
            n => Some(n),
        }
    }

    /// (symbol, count) pairs for occurring symbols, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(sym, count)| (sym as u8, *count))
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Sum of all counts, which is the input length.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
fn freqs(data: &[u8]) -> Vec<u64> {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || vec![0_u64; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_u64; 256],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u64>>(),
            )
    } else {
        let mut freqs = vec![0_u64; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

#[cfg(test)]
mod test {
    use super::FrequencyTable;

    #[test]
    fn small_count_test() {
        let table = FrequencyTable::from_bytes(b"AAAAABBCD");
        assert_eq!(table.get(b'A'), Some(5));
        assert_eq!(table.get(b'B'), Some(2));
        assert_eq!(table.get(b'C'), Some(1));
        assert_eq!(table.get(b'D'), Some(1));
        assert_eq!(table.get(b'E'), None);
        assert_eq!(table.len(), 4);
        assert_eq!(table.total(), 9);
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![(b'A', 5), (b'B', 2), (b'C', 1), (b'D', 1)]
        );
    }

    #[test]
    fn empty_test() {
        let table = FrequencyTable::from_bytes(&[]);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.total(), 0);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn high_bytes_are_unsigned_test() {
        let table = FrequencyTable::from_bytes(&[0xff, 0x80, 0xff, 0x00]);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(0, 1), (0x80, 1), (0xff, 2)]);
    }

    #[test]
    fn parallel_matches_sequential_test() {
        let data: Vec<u8> = (0..200_003_u32).map(|i| (i * 31 % 251) as u8).collect();
        let table = FrequencyTable::from_bytes(&data);
        let mut expect = vec![0_u64; 256];
        data.iter().for_each(|&b| expect[b as usize] += 1);
        assert_eq!(table.total(), data.len() as u64);
        for (sym, count) in table.iter() {
            assert_eq!(expect[sym as usize], count);
        }
        assert_eq!(table.len(), expect.iter().filter(|&&c| c > 0).count());
    }
}
