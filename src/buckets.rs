use crate::codeword::{CodewordSet, Mask, ALPHABET_LEN};
use crate::letters::LetterOrder;

/// The least order-position among the letters of `mask`.
pub fn rarest_position(mask: Mask, order: &LetterOrder) -> usize {
    let mut rest = mask;
    let mut min = ALPHABET_LEN;
    while rest != 0 {
        let letter = rest.trailing_zeros() as usize;
        min = min.min(order.position_of(letter));
        rest &= rest - 1;
    }
    min
}

/// Masks grouped by the order-position of their rarest letter.
///
/// When the search anchors a word at position `p` it only needs bucket `p`:
/// a word whose rarest letter comes earlier was already offered at that
/// earlier position.
#[derive(Debug, Default, Clone)]
pub struct BucketIndex {
    buckets: [Vec<Mask>; ALPHABET_LEN],
}

impl BucketIndex {
    pub fn build(codewords: &CodewordSet, order: &LetterOrder) -> Self {
        let mut buckets: [Vec<Mask>; ALPHABET_LEN] = Default::default();
        for mask in codewords.masks() {
            buckets[rarest_position(mask, order)].push(mask);
        }
        BucketIndex { buckets }
    }

    pub fn bucket(&self, position: usize) -> &[Mask] {
        &self.buckets[position]
    }

    /// Total number of masks across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Mask])> {
        self.buckets.iter().map(Vec::as_slice).enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeword::encode_word;

    fn index(words: &[&str]) -> (CodewordSet, LetterOrder, BucketIndex) {
        let set = CodewordSet::from_words(words);
        let order = LetterOrder::from_codewords(&set);
        let buckets = BucketIndex::build(&set, &order);
        (set, order, buckets)
    }

    #[test]
    fn test_rarest_position() {
        let (_, order, _) = index(&["abcde", "abfgh", "aijkl"]);
        // Order is "mnopqrstuvwxyzcdefghijklba".
        assert_eq!(rarest_position(encode_word("abcde").unwrap(), &order), 14);
        assert_eq!(rarest_position(encode_word("zabcd").unwrap(), &order), 13);
        assert_eq!(rarest_position(encode_word("mabcd").unwrap(), &order), 0);
    }

    #[test]
    fn test_every_mask_in_its_rarest_bucket() {
        let words = [
            "waltz", "nymph", "gucks", "fjord", "vibex", "quick", "brown", "jumps", "flick",
            "abcde", "edcba", "zebra",
        ];
        let (set, order, buckets) = index(&words);
        assert_eq!(buckets.len(), set.len());

        for mask in set.masks() {
            let holders: Vec<usize> = buckets
                .iter()
                .filter(|(_, bucket)| bucket.contains(&mask))
                .map(|(position, _)| position)
                .collect();
            assert_eq!(holders.len(), 1);

            let min = (0..ALPHABET_LEN)
                .filter(|&letter| mask & (1 << letter) != 0)
                .map(|letter| order.position_of(letter))
                .min()
                .unwrap();
            assert_eq!(holders[0], min);
        }
    }

    #[test]
    fn test_shared_bucket_keeps_input_order() {
        // Every used letter appears twice, so ties fall back to the alphabet.
        let (_, order, buckets) = index(&["zabcd", "zefgh", "abefy", "cdghy"]);
        let mask = |w| encode_word(w).unwrap();
        assert_eq!(
            buckets.bucket(order.position_of(0)),
            &[mask("zabcd"), mask("abefy")][..]
        );
        assert_eq!(buckets.bucket(order.position_of(2)), &[mask("cdghy")][..]);
        assert_eq!(buckets.bucket(order.position_of(4)), &[mask("zefgh")][..]);
        assert!(buckets.bucket(order.position_of(25)).is_empty());
    }

    #[test]
    fn test_empty() {
        let (_, _, buckets) = index(&[]);
        assert!(buckets.is_empty());
    }
}
