//! Finds every set of five five-letter words that together use 25 distinct
//! letters.
//!
//! Words become 26-bit letter masks. Letters are ranked by how many words use
//! them, each mask is filed under its rarest letter, and a backtracking search
//! fills letters from rarest to most common, so each solution is reached by
//! exactly one path. [`Engine::solve_parallel`] cuts that search after the
//! first word and hands the branches to a pool of worker threads.

pub mod buckets;
pub mod codeword;
pub mod error;
pub mod letters;
pub mod parallel;
pub mod render;
pub mod search;
pub mod wordlist;

pub use codeword::{encode_word, Codeword, CodewordSet, Mask};
pub use error::SearchError;
pub use letters::LetterOrder;
pub use parallel::{default_workers, ParallelRun, WorkerReport};
pub use render::Anagrams;
pub use search::{Engine, SearchState, Solution};
