//! Input ports for interactive lookup

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Source of whitespace-delimited lookup tokens
pub trait TokenSource {
    /// Next token, or `None` once the source is exhausted.
    ///
    /// Blocks until a token is available.
    fn next_token(&mut self) -> io::Result<Option<String>>;
}

/// Splits a line-oriented reader into whitespace-delimited tokens
pub struct WordReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> WordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> TokenSource for WordReader<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

impl TokenSource for VecDeque<String> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}
