/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Whitespace separated token input
//!
//! Answers to prompts are read as tokens, so `10 20 30 40` on one line and
//! the same numbers on four lines are equivalent.
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use log::trace;

use crate::errors::EditErrors;

pub struct Prompter<R: BufRead> {
    reader:  R,
    pending: VecDeque<String>
}

impl<R: BufRead> Prompter<R> {
    pub fn new(reader: R) -> Prompter<R> {
        Prompter {
            reader,
            pending: VecDeque::new()
        }
    }

    /// Return the next token, reading lines until one is found
    ///
    /// # Errors
    /// - [`EditErrors::EndOfInput`] if the reader is exhausted
    /// - [`EditErrors::Io`] if reading fails
    pub fn next_token(&mut self) -> Result<String, EditErrors> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                trace!("Read token {token:?}");
                return Ok(token);
            }
            let mut line = String::new();

            if self.reader.read_line(&mut line)? == 0 {
                return Err(EditErrors::EndOfInput);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Parse the next token as `T`
    ///
    /// `what` names the expected value in the error message
    ///
    /// # Errors
    /// [`EditErrors::InvalidInput`] if the token doesn't parse, plus the errors of
    /// [`Prompter::next_token`]
    pub fn next_value<T: FromStr>(&mut self, what: &str) -> Result<T, EditErrors> {
        let token = self.next_token()?;

        token
            .parse::<T>()
            .map_err(|_| EditErrors::InvalidInput(format!("expected {what}, found {token:?}")))
    }

    /// Block until the user ends a line
    ///
    /// Tokens already typed ahead count as the line, nothing is read then.
    /// Whatever the line holds is kept for the next prompts, and a closed
    /// input returns immediately.
    ///
    /// # Errors
    /// [`EditErrors::Io`] if reading fails
    pub fn wait_for_line(&mut self) -> Result<(), EditErrors> {
        if !self.pending.is_empty() {
            return Ok(());
        }
        let mut line = String::new();
        self.reader.read_line(&mut line)?;

        self.pending
            .extend(line.split_whitespace().map(str::to_string));
        Ok(())
    }

    /// Forget tokens left over from the current line
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::errors::EditErrors;
    use crate::prompt::Prompter;

    #[test]
    fn tokens_span_lines() {
        let mut prompter = Prompter::new(Cursor::new("10 20\n\n  30\n40 \n"));

        let values = (0..4)
            .map(|_| prompter.next_value::<i64>("a number").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(values, [10, 20, 30, 40]);
        assert!(matches!(prompter.next_token(), Err(EditErrors::EndOfInput)));
    }

    #[test]
    fn malformed_numbers() {
        let mut prompter = Prompter::new(Cursor::new("abc 1.5 7\n8\n"));

        assert!(matches!(
            prompter.next_value::<i64>("a number"),
            Err(EditErrors::InvalidInput(_))
        ));
        assert!(matches!(
            prompter.next_value::<i32>("an integer"),
            Err(EditErrors::InvalidInput(_))
        ));
        prompter.discard_pending();
        assert_eq!(prompter.next_value::<u8>("a byte").unwrap(), 8);
    }

    #[test]
    fn waiting_keeps_typed_tokens() {
        let mut prompter = Prompter::new(Cursor::new("\n4 5\n"));

        // blank line
        prompter.wait_for_line().unwrap();
        // "4 5" is read and kept
        prompter.wait_for_line().unwrap();
        // "5" is still pending, nothing is read
        assert_eq!(prompter.next_value::<u8>("a byte").unwrap(), 4);
        prompter.wait_for_line().unwrap();
        assert_eq!(prompter.next_value::<u8>("a byte").unwrap(), 5);

        prompter.wait_for_line().unwrap();
        assert!(matches!(prompter.next_token(), Err(EditErrors::EndOfInput)));
    }
}
