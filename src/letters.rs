use std::fmt::{self, Display, Formatter};

use crate::codeword::{CodewordSet, Mask, ALPHABET_LEN};

/// Number of codewords containing each letter.
pub fn letter_counts(codewords: &CodewordSet) -> [usize; ALPHABET_LEN] {
    std::array::from_fn(|letter| {
        codewords
            .masks()
            .filter(|mask| mask & (1 << letter) != 0)
            .count()
    })
}

/// Letters ranked from least to most used.
///
/// Position 0 is the rarest letter. The search fixes letters in this order so
/// that the smallest buckets are tried first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterOrder {
    order: [u8; ALPHABET_LEN],
    positions: [u8; ALPHABET_LEN],
}

impl LetterOrder {
    pub fn from_codewords(codewords: &CodewordSet) -> Self {
        Self::from_counts(&letter_counts(codewords))
    }

    /// Ties keep alphabetical order.
    pub fn from_counts(counts: &[usize; ALPHABET_LEN]) -> Self {
        let mut order: [u8; ALPHABET_LEN] = std::array::from_fn(|letter| letter as u8);
        order.sort_by_key(|&letter| counts[letter as usize]);

        let mut positions = [0u8; ALPHABET_LEN];
        for (position, &letter) in order.iter().enumerate() {
            positions[letter as usize] = position as u8;
        }

        LetterOrder { order, positions }
    }

    /// Letter index (`a` = 0) at order-position `position`.
    pub fn letter_at(&self, position: usize) -> usize {
        self.order[position] as usize
    }

    /// Order-position of letter index `letter`.
    pub fn position_of(&self, letter: usize) -> usize {
        self.positions[letter] as usize
    }

    pub fn bit_at(&self, position: usize) -> Mask {
        1 << self.order[position]
    }
}

impl Display for LetterOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for &letter in &self.order {
            write!(f, "{}", (b'a' + letter) as char)?;
        }
        Ok(())
    }
}
