use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Trimmed, non-empty lines in input order.
pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }
    Ok(words)
}

pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_words(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

pub fn write_lines<W, S>(mut writer: W, lines: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()
}

pub fn save_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_lines(BufWriter::new(file), lines).with_context(|| format!("writing {}", path.display()))
}
