use std::collections::HashMap;

/// One bit per letter, `a` in the least significant bit.
pub type Mask = u32;

pub const ALPHABET_LEN: usize = 26;
pub const WORD_LEN: usize = 5;

/// Encodes a word as a letter mask.
///
/// Returns `None` unless the word has exactly five lowercase ASCII letters,
/// all of them distinct.
pub fn encode_word(word: &str) -> Option<Mask> {
    if word.len() != WORD_LEN {
        return None;
    }

    let mut mask: Mask = 0;
    for c in word.bytes() {
        if !c.is_ascii_lowercase() {
            return None;
        }
        let bit = 1 << (c - b'a');
        if mask & bit != 0 {
            return None;
        }
        mask |= bit;
    }
    Some(mask)
}

/// A letter mask together with the first word seen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codeword {
    pub mask: Mask,
    pub word: String,
    /// Later words with the same letters, in input order.
    pub anagrams: Vec<String>,
}

/// The filtered dictionary: one codeword per distinct mask, in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct CodewordSet {
    codewords: Vec<Codeword>,
    index: HashMap<Mask, usize>,
}

impl CodewordSet {
    /// Builds the set from raw dictionary lines.
    ///
    /// Lines are trimmed; empty lines and words that fail [`encode_word`] are
    /// dropped without complaint.
    pub fn from_words<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| {
                let word = line.as_ref().trim();
                encode_word(word).map(|mask| (mask, word.to_owned()))
            })
            .fold(CodewordSet::default(), |mut set, (mask, word)| {
                set.insert(mask, word);
                set
            })
    }

    fn insert(&mut self, mask: Mask, word: String) {
        match self.index.get(&mask) {
            Some(&i) => self.codewords[i].anagrams.push(word),
            None => {
                self.index.insert(mask, self.codewords.len());
                self.codewords.push(Codeword {
                    mask,
                    word,
                    anagrams: Vec::new(),
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.codewords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Codeword> {
        self.codewords.iter()
    }

    pub fn masks(&self) -> impl Iterator<Item = Mask> + '_ {
        self.codewords.iter().map(|c| c.mask)
    }

    pub fn get(&self, mask: Mask) -> Option<&Codeword> {
        self.index.get(&mask).map(|&i| &self.codewords[i])
    }

    /// The representative word for `mask`.
    pub fn word(&self, mask: Mask) -> Option<&str> {
        self.get(mask).map(|c| c.word.as_str())
    }

    /// Every spelling of `mask`, representative first.
    pub fn words_for(&self, mask: Mask) -> Vec<&str> {
        match self.get(mask) {
            Some(c) => std::iter::once(c.word.as_str())
                .chain(c.anagrams.iter().map(String::as_str))
                .collect(),
            None => Vec::new(),
        }
    }
}
