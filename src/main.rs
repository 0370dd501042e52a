use anyhow::{Context, Result};
use clap::Parser;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use five_words::wordlist::{load_words, save_lines};
use five_words::{default_workers, Anagrams, Engine};

/// Find every set of five five-letter words that use 25 different letters.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Dictionary with one word per line
    #[clap(value_parser, value_name = "WORDS", default_value = "words_alpha.txt")]
    words: PathBuf,

    /// Where to write the solutions, one per line
    #[clap(short, long, value_parser, value_name = "FILE", default_value = "result.txt")]
    output: PathBuf,

    /// Number of search workers, at least 1 [default: available parallelism]
    #[clap(short, long, value_parser)]
    jobs: Option<NonZeroUsize>,

    /// Search on the main thread without a worker pool
    #[clap(long, action, conflicts_with = "jobs")]
    sequential: bool,

    /// Write a line for every spelling of words that share their letters
    #[clap(long, action)]
    anagrams: bool,

    /// Hide progress and per-worker output
    #[clap(short, long, action)]
    quiet: bool,
}

fn progress_bar(quiet: bool) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(0);
    let sty = ProgressStyle::with_template(
        "[{spinner:.green} {elapsed_precise}] {wide_bar:.cyan/blue} {pos:>7}/{len:7} branches",
    )?
    .progress_chars("##-");
    pb.set_style(sty);
    pb.enable_steady_tick(Duration::from_millis(250));
    Ok(pb)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let term = Term::stdout();

    let start = Instant::now();
    let words = load_words(&args.words)?;
    term.write_line(&format!("{} words in total", words.len()))?;

    let start_algo = Instant::now();
    let engine = Engine::new(&words);
    term.write_line(&format!(
        "{} words have a unique set of 5 letters",
        engine.codewords().len()
    ))?;
    term.write_line(&format!("Letter order: {}", engine.letter_order()))?;

    let solutions = if args.sequential {
        engine.solve()
    } else {
        let workers = args.jobs.unwrap_or_else(default_workers);
        let progress = progress_bar(args.quiet)?;
        let run = engine
            .solve_parallel(workers, &progress)
            .context("search did not complete")?;
        progress.finish_and_clear();

        if !args.quiet {
            for report in &run.workers {
                term.write_line(&format!(
                    "Worker {}: Found {} solutions in {} branches",
                    report.worker, report.solutions, report.branches
                ))?;
            }
        }
        run.solutions
    };

    let start_output = Instant::now();
    let anagrams = if args.anagrams {
        Anagrams::Expand
    } else {
        Anagrams::Collapse
    };
    let lines = engine.render(&solutions, anagrams);
    save_lines(&args.output, &lines)?;
    term.write_line(&format!(
        "{} solutions written to {}",
        style(lines.len()).bold(),
        args.output.display()
    ))?;
    term.write_line("")?;

    let end = Instant::now();
    let secs = |from: Instant, to: Instant| (to - from).as_secs_f64();
    term.write_line(&format!("Total Time: {:8.3} s", secs(start, end)))?;
    term.write_line(&format!("Read:       {:8.3} s", secs(start, start_algo)))?;
    term.write_line(&format!("Process:    {:8.3} s", secs(start_algo, start_output)))?;
    term.write_line(&format!("Write:      {:8.3} s", secs(start_output, end)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["five-words"]).unwrap();
        assert_eq!(args.words, PathBuf::from("words_alpha.txt"));
        assert_eq!(args.output, PathBuf::from("result.txt"));
        assert_eq!(args.jobs, None);
        assert!(!args.sequential && !args.anagrams && !args.quiet);
    }

    #[test]
    fn test_jobs() {
        let args = Args::try_parse_from(["five-words", "-j", "3", "dict.txt"]).unwrap();
        assert_eq!(args.jobs, NonZeroUsize::new(3));
        assert_eq!(args.words, PathBuf::from("dict.txt"));

        assert!(Args::try_parse_from(["five-words", "--jobs", "0"]).is_err());
        assert!(Args::try_parse_from(["five-words", "--jobs", "-2"]).is_err());
        assert!(Args::try_parse_from(["five-words", "--jobs", "2", "--sequential"]).is_err());
    }
}
