//! Program Image Loading.
//!
//! This module parses the textual program format the simulator runs. It performs:
//! 1. **Parsing:** Hexadecimal words separated by whitespace, normally one per line,
//!    with an optional `0x`/`0X` prefix. Blank lines are ignored.
//! 2. **File loading:** Reads an image from disk, reporting the path on failure.
//! 3. **Placement:** Checks that the image fits in the region holding the load base
//!    before writing it into memory.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::LoadError;
use crate::soc::memory::Memory;

/// A parsed program: the sequence of instruction words, in load order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramImage {
    words: Vec<u32>,
}

impl ProgramImage {
    /// Wraps an already-assembled list of words.
    pub fn from_words(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// Parses a program from its text form.
    ///
    /// # Arguments
    ///
    /// * `text` - Hexadecimal words, whitespace separated.
    ///
    /// # Returns
    ///
    /// The parsed image, or `LoadError::InvalidWord` naming the first bad token
    /// and its 1-based line number.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let mut words = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            for token in line.split_whitespace() {
                words.push(parse_word(token).ok_or_else(|| LoadError::InvalidWord {
                    line: idx + 1,
                    text: token.to_string(),
                })?);
            }
        }
        Ok(Self { words })
    }

    /// Reads and parses a program file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let image = Self::parse(&text)?;
        debug!(path = %path.display(), words = image.len(), "program file parsed");
        Ok(image)
    }

    /// The instruction words, in load order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of words in the image (the program size).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the image holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Address of the word at `index` when loaded at `base`.
    pub fn address_of(base: u32, index: usize) -> u32 {
        base.wrapping_add((index as u32).wrapping_mul(INSTRUCTION_SIZE))
    }

    /// Writes the image into `memory` starting at `base`.
    ///
    /// # Returns
    ///
    /// `LoadError::TooLarge` if the words would run past the end of the
    /// region containing `base` (or if no region contains it); memory is
    /// left untouched in that case.
    pub fn load_into(&self, memory: &mut Memory, base: u32) -> Result<(), LoadError> {
        self.check_fit(memory, base)?;
        memory.load_words(base, &self.words);
        debug!("loaded {} words at {base:#010x}", self.words.len());
        Ok(())
    }

    /// Checks that the image fits between `base` and the end of its region.
    ///
    /// # Returns
    ///
    /// `LoadError::TooLarge` if it does not, or if no region contains `base`
    /// and the image is not empty.
    pub fn check_fit(&self, memory: &Memory, base: u32) -> Result<(), LoadError> {
        let capacity = memory
            .region_of(base)
            .map_or(0, |r| ((r.end() - base) as usize + 1) / INSTRUCTION_SIZE as usize);
        if self.words.len() > capacity {
            return Err(LoadError::TooLarge {
                words: self.words.len(),
                base,
                capacity,
            });
        }
        Ok(())
    }
}

/// Parses one hexadecimal token, with or without a `0x` prefix.
fn parse_word(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || digits.starts_with('+') {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
