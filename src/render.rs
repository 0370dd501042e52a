use itertools::Itertools;
use rayon::prelude::*;

use crate::search::{Engine, Solution};

/// How words sharing a letter set are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anagrams {
    /// One line per solution, using the first word seen for each letter set.
    #[default]
    Collapse,
    /// One line per combination of spellings.
    Expand,
}

impl Engine {
    /// Turns mask solutions into sorted, deduplicated lines of five
    /// space-separated words, each line sorted alphabetically.
    pub fn render(&self, solutions: &[Solution], anagrams: Anagrams) -> Vec<String> {
        let codewords = self.codewords();
        let mut lines: Vec<String> = solutions
            .par_iter()
            .flat_map_iter(|solution| {
                let spellings = solution.iter().map(|&mask| match anagrams {
                    Anagrams::Collapse => codewords.word(mask).into_iter().collect_vec(),
                    Anagrams::Expand => codewords.words_for(mask),
                });
                spellings
                    .multi_cartesian_product()
                    .map(|words| words.into_iter().sorted().join(" "))
                    .collect_vec()
            })
            .collect();

        lines.par_sort_unstable();
        lines.dedup();
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeword::encode_word;
    use crate::search::tests::{FIRST_COVER, SECOND_COVER};

    fn solution(words: &[&str]) -> Solution {
        let mut solution = Solution::default();
        for (slot, word) in solution.iter_mut().zip(words) {
            *slot = encode_word(word).unwrap();
        }
        solution
    }

    #[test]
    fn test_lines_sorted_within_and_across() {
        let engine = Engine::new(FIRST_COVER.iter().chain(SECOND_COVER.iter()));
        let solutions = [
            solution(&["uvwxy", "klmno", "abcde", "pqrst", "fghij"]),
            solution(&["ejoyz", "afkpu", "dinsx", "bglqv", "chmrw"]),
        ];
        assert_eq!(
            engine.render(&solutions, Anagrams::Collapse),
            vec![
                "abcde fghij klmno pqrst uvwxy",
                "afkpu bglqv chmrw dinsx ejoyz",
            ]
        );
    }

    #[test]
    fn test_duplicates_removed() {
        let engine = Engine::new(FIRST_COVER);
        let first = solution(&FIRST_COVER);
        let mut reordered = first;
        reordered.reverse();
        assert_eq!(engine.render(&[first, reordered], Anagrams::Collapse).len(), 1);
    }

    #[test]
    fn test_anagrams() {
        let engine = Engine::new([
            "edcba", "fghij", "klmno", "pqrst", "uvwxy", "abcde", "jihgf",
        ]);
        let solutions = engine.solve();

        assert_eq!(
            engine.render(&solutions, Anagrams::Collapse),
            vec!["edcba fghij klmno pqrst uvwxy"]
        );
        assert_eq!(
            engine.render(&solutions, Anagrams::Expand),
            vec![
                "abcde fghij klmno pqrst uvwxy",
                "abcde jihgf klmno pqrst uvwxy",
                "edcba fghij klmno pqrst uvwxy",
                "edcba jihgf klmno pqrst uvwxy",
            ]
        );
    }

    #[test]
    fn test_nothing_to_render() {
        let engine = Engine::new(FIRST_COVER);
        assert!(engine.render(&[], Anagrams::Expand).is_empty());
    }
}
