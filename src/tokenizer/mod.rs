//! Tokenizer for file manager input
//!
//! The session reads a single whitespace-delimited token stream. Lines are
//! only a buffering unit: a command that needs more arguments than its line
//! holds keeps reading, and tokens left over on a line are served next.

use std::collections::VecDeque;
use std::io::BufRead;

/// Split one input line into whitespace-delimited tokens
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// A blocking token source over a line reader
#[derive(Debug)]
pub struct TokenStream<R> {
    reader: R,
    pending: VecDeque<String>,
    exhausted: bool,
}

impl<R: BufRead> TokenStream<R> {
    /// Create a token stream over `reader`
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Next token, reading further lines as needed
    ///
    /// Returns `None` once the reader hits end of input or fails.
    pub fn next_token(&mut self) -> Option<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if !self.fill() {
                return None;
            }
        }
    }

    /// Take exactly `count` tokens, or `None` if input ends first
    pub fn take(&mut self, count: usize) -> Option<Vec<String>> {
        let mut tokens = Vec::with_capacity(count);
        for _ in 0..count {
            tokens.push(self.next_token()?);
        }
        Some(tokens)
    }

    /// Whether tokens from an earlier line are still queued
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Read one more line into the queue; false at end of input
    ///
    /// Bytes that are not UTF-8 are decoded lossily so a stray byte only
    /// spoils its own token.
    fn fill(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) | Err(_) => {
                self.exhausted = true;
                false
            }
            Ok(_) => {
                self.pending.extend(tokenize(&String::from_utf8_lossy(&line)));
                true
            }
        }
    }
}
