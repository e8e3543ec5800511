//! Tokenizer turning raw expression text into a lazy stream of [`LexItem`]s.
//!
//! The scanner never fails. Whitespace and characters it does not recognise
//! are dropped, leaving every validity decision to the evaluators.

use std::iter::FusedIterator;
use std::str::CharIndices;

use log::trace;

use crate::number::Number;
use crate::operator::Operator;
use crate::span::Span;
use crate::token::{LexItem, Token};

// forces a trailing number out of the scanner
const SENTINEL: char = ' ';

#[derive(Debug, Clone, Copy)]
enum State {
    None,
    Number { start: usize, is_floating: bool },
}

/// Single-pass token stream over an input string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    chars: CharIndices<'a>,
    state: State,
    pending: Option<LexItem>,
    is_flushed: bool,
}

pub fn tokenize(input: &str) -> Tokens<'_> {
    Tokens {
        input,
        chars: input.char_indices(),
        state: State::None,
        pending: None,
        is_flushed: false,
    }
}

fn single_char_item(c: char, offset: usize) -> Option<LexItem> {
    let token = match c {
        '(' => Token::LeftParen,
        ')' => Token::RightParen,
        _ => Token::Operator(Operator::from_char(c)?),
    };
    Some(LexItem::new(token, Span::one(offset)))
}

fn parse_number(text: &str, is_floating: bool) -> Number {
    if !is_floating {
        if let Ok(v) = text.parse::<i64>() {
            return Number::Integer(v);
        }
    }
    // digit runs with at most one '.' always parse as f64
    Number::Floating(text.parse::<f64>().unwrap_or(f64::NAN))
}

impl Tokens<'_> {
    fn next_char(&mut self) -> Option<(usize, char)> {
        if let Some(pair) = self.chars.next() {
            return Some(pair);
        }
        if self.is_flushed {
            return None;
        }
        self.is_flushed = true;
        Some((self.input.len(), SENTINEL))
    }

    fn lex_number(&self, start: usize, end: usize, is_floating: bool) -> LexItem {
        let text = self.input.get(start..end).unwrap_or_default();
        LexItem::new(
            Token::Number(parse_number(text, is_floating)),
            Span::new(start, end - 1),
        )
    }

    fn scan(&mut self) -> Option<LexItem> {
        if let Some(li) = self.pending.take() {
            return Some(li);
        }

        while let Some((offset, c)) = self.next_char() {
            match self.state {
                State::None => {
                    if let Some(li) = single_char_item(c, offset) {
                        return Some(li);
                    }
                    if c.is_ascii_digit() {
                        self.state = State::Number {
                            start: offset,
                            is_floating: false,
                        };
                    }
                    // anything else is skipped
                }
                State::Number { start, is_floating } => {
                    if c.is_ascii_digit() {
                        continue;
                    }
                    if c == '.' && !is_floating {
                        self.state = State::Number {
                            start,
                            is_floating: true,
                        };
                        continue;
                    }
                    // a second '.' ends the literal and is dropped
                    self.state = State::None;
                    self.pending = single_char_item(c, offset);
                    return Some(self.lex_number(start, offset, is_floating));
                }
            }
        }

        None
    }
}

impl Iterator for Tokens<'_> {
    type Item = LexItem;

    fn next(&mut self) -> Option<Self::Item> {
        let li = self.scan()?;
        trace!(
            "{} - {:?}: {:?}",
            li.span,
            li.token,
            li.span.str_from_source(self.input)
        );
        Some(li)
    }
}

impl FusedIterator for Tokens<'_> {}
