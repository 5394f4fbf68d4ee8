//! Line-oriented document model.
//!
//! A [`Document`] is the file split into lines that keep their original
//! line endings, so joining the lines reproduces the input byte for byte.

use crate::error::{Error, Result};

/// An ordered sequence of lines, each retaining its line ending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

/// A block of lines to splice in before the line currently at `index`.
///
/// `index == len` appends to the end of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub index: usize,
    pub text: String,
}

impl Insertion {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True if `needle` occurs on any line.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Index of the first line at or after `from` containing `needle`.
    pub fn find_from(&self, from: usize, needle: &str) -> Option<usize> {
        self.lines
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, line)| line.contains(needle))
            .map(|(idx, _)| idx)
    }

    /// The line ending used by the first terminated line, `\n` otherwise.
    pub fn line_ending(&self) -> &'static str {
        match self.lines.iter().find(|line| line.ends_with('\n')) {
            Some(line) if line.ends_with("\r\n") => "\r\n",
            _ => "\n",
        }
    }

    /// Apply every insertion, with all indices referring to this document
    /// as it is before the call.
    ///
    /// Insertions are applied from the highest index to the lowest, so an
    /// insertion never shifts the target of one still pending. Insertions
    /// sharing an index land in the order they were given. Bounds are
    /// checked up front: on error the document is unchanged.
    pub fn insert_all(&mut self, insertions: Vec<Insertion>) -> Result<usize> {
        let len = self.lines.len();
        if let Some(bad) = insertions.iter().find(|ins| ins.index > len) {
            return Err(Error::InsertionOutOfBounds {
                index: bad.index,
                len,
            });
        }

        let ending = self.line_ending();
        let mut ordered: Vec<(usize, Insertion)> = insertions.into_iter().enumerate().collect();
        ordered.sort_by(|(seq_a, a), (seq_b, b)| b.index.cmp(&a.index).then(seq_b.cmp(seq_a)));

        let mut inserted = 0;
        for (_, insertion) in ordered {
            if insertion.index == self.lines.len() {
                if let Some(last) = self.lines.last_mut() {
                    if !last.ends_with('\n') {
                        last.push_str(ending);
                    }
                }
            }
            let block = block_lines(&insertion.text, ending);
            inserted += block.len();
            self.lines.splice(insertion.index..insertion.index, block);
        }

        Ok(inserted)
    }

    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Split template text into terminated lines using the document's ending.
fn block_lines(text: &str, ending: &str) -> Vec<String> {
    text.split_inclusive('\n')
        .map(|line| {
            let body = line.trim_end_matches('\n').trim_end_matches('\r');
            format!("{body}{ending}")
        })
        .collect()
}
