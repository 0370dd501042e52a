use crate::buckets::BucketIndex;
use crate::codeword::{CodewordSet, Mask, ALPHABET_LEN, WORD_LEN};
use crate::letters::LetterOrder;

/// Five pairwise disjoint masks, in the order the search picked them.
pub type Solution = [Mask; WORD_LEN];

/// A point in the search tree. Small enough to copy into a work queue.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchState {
    codes: [Mask; WORD_LEN],
    len: usize,
    /// Union of `codes[..len]`.
    code: Mask,
    /// Next order-position to try.
    position: usize,
    /// Whether this path already passed over one uncovered letter.
    skipped: bool,
}

impl SearchState {
    pub fn codes(&self) -> &[Mask] {
        &self.codes[..self.len]
    }

    pub fn code(&self) -> Mask {
        self.code
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn skipped(&self) -> bool {
        self.skipped
    }

    fn is_complete(&self) -> bool {
        self.len == WORD_LEN
    }

    fn push(&self, mask: Mask, position: usize, skipped: bool) -> Self {
        let mut next = *self;
        next.codes[next.len] = mask;
        next.len += 1;
        next.code |= mask;
        next.position = position;
        next.skipped = skipped;
        next
    }
}

/// What a descent reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Found {
    Solution(Solution),
    /// A subtree cut off at the split depth, to be searched elsewhere.
    Branch(SearchState),
}

/// Everything one run needs, built once from the dictionary and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Engine {
    codewords: CodewordSet,
    order: LetterOrder,
    buckets: BucketIndex,
}

impl Engine {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codewords = CodewordSet::from_words(lines);
        let order = LetterOrder::from_codewords(&codewords);
        let buckets = BucketIndex::build(&codewords, &order);
        Engine {
            codewords,
            order,
            buckets,
        }
    }

    pub fn codewords(&self) -> &CodewordSet {
        &self.codewords
    }

    pub fn letter_order(&self) -> &LetterOrder {
        &self.order
    }

    pub fn buckets(&self) -> &BucketIndex {
        &self.buckets
    }

    /// Single-threaded search over the whole tree.
    pub fn solve(&self) -> Vec<Solution> {
        let mut solutions = Vec::new();
        self.descend(SearchState::default(), None, &mut |found| {
            if let Found::Solution(solution) = found {
                solutions.push(solution);
            }
        });
        solutions
    }

    /// Walks the subtree below `state`.
    ///
    /// With `split_at = Some(n)`, any path reaching `n` chosen words is handed
    /// to `emit` as a [`Found::Branch`] instead of being followed.
    ///
    /// Positions run left to right and a word is only taken from the bucket
    /// of its rarest letter, so the words of a solution are always picked in
    /// one order. A solution covers 25 of the 26 letters: the one letter it
    /// leaves out is passed over with the single skip a path is allowed.
    /// Letters already covered are stepped over for free.
    pub(crate) fn descend<F>(&self, state: SearchState, split_at: Option<usize>, emit: &mut F)
    where
        F: FnMut(Found),
    {
        if state.is_complete() {
            emit(Found::Solution(state.codes));
            return;
        }
        if split_at == Some(state.len) {
            emit(Found::Branch(state));
            return;
        }

        let mut skipped = state.skipped;
        for position in state.position..ALPHABET_LEN {
            if state.code & self.order.bit_at(position) != 0 {
                continue;
            }

            for &mask in self.buckets.bucket(position) {
                if state.code & mask == 0 {
                    self.descend(state.push(mask, position + 1, skipped), split_at, emit);
                }
            }

            if skipped {
                break;
            }
            skipped = true;
        }
    }
}
