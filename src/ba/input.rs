use std::io::BufRead;

use thiserror::Error;
use tracing::{debug, trace};

use crate::automaton::{BuchiAutomaton, Transition};

use super::line::Line;

/// Raised when the input is not in BA format.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FormatError {
    /// The input does not contain an initial state.
    #[error("invalid format: empty input, expected the name of the initial state")]
    EmptyInput,
    /// A line that is neither blank, nor a state name, nor a transition.
    #[error("invalid format in line {number}: {line}")]
    InvalidLine {
        /// The 1-based position of the line in the input.
        number: usize,
        /// The offending line with surrounding whitespace removed.
        line: String,
    },
}

/// Errors that can occur when reading a BA file from a [`BufRead`].
#[derive(Debug, Error)]
pub enum BaReadError {
    #[error(transparent)]
    #[allow(missing_docs)]
    Format(#[from] FormatError),
    #[error("could not read input: {0}")]
    #[allow(missing_docs)]
    Io(#[from] std::io::Error),
}

/// Incrementally builds a [`BuchiAutomaton`] from the lines of a BA file.
///
/// Lines are fed one at a time through [`BaParser::push_line`], the first non-blank line
/// is taken verbatim as the initial state, every subsequent line has to be blank, a state
/// name or a transition. Once all lines have been pushed, [`BaParser::finish`] yields the
/// automaton. The first malformed line is reported as an error and the parser should be
/// discarded afterwards.
#[derive(Debug, Clone, Default)]
pub struct BaParser {
    aut: BuchiAutomaton,
    seen_initial: bool,
    line_number: usize,
}

impl BaParser {
    /// Creates a parser that has not seen any line yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes the next line of the input.
    pub fn push_line(&mut self, raw: &str) -> Result<(), FormatError> {
        self.line_number += 1;
        let line = raw.trim();

        if !self.seen_initial {
            if !line.is_empty() {
                trace!("line {}: initial state {line:?}", self.line_number);
                self.aut.add_initial(line);
                self.seen_initial = true;
            }
            return Ok(());
        }

        match Line::classify(line) {
            Some(Line::Blank) => {}
            Some(Line::State(state)) => {
                trace!("line {}: final state {state:?}", self.line_number);
                self.aut.add_final(state);
            }
            Some(Line::Transition {
                symbol,
                source,
                target,
            }) => {
                trace!(
                    "line {}: transition {source:?} --{symbol:?}--> {target:?}",
                    self.line_number
                );
                self.aut
                    .add_transition(Transition::new(source, symbol, target));
            }
            None => {
                debug!("rejecting line {}: {line:?}", self.line_number);
                return Err(FormatError::InvalidLine {
                    number: self.line_number,
                    line: line.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Finishes parsing and returns the automaton, fails if no initial state was seen.
    pub fn finish(self) -> Result<BuchiAutomaton, FormatError> {
        if !self.seen_initial {
            return Err(FormatError::EmptyInput);
        }
        debug!(
            "parsed BA automaton with {} transitions and {} final states",
            self.aut.transitions().len(),
            self.aut.final_states().len()
        );
        Ok(self.aut)
    }
}

/// Parses a BA automaton from a sequence of lines.
pub fn parse_ba_lines<I, S>(lines: I) -> Result<BuchiAutomaton, FormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = BaParser::new();
    for line in lines {
        parser.push_line(line.as_ref())?;
    }
    parser.finish()
}

/// Parses a BA automaton from a string.
pub fn parse_ba(input: &str) -> Result<BuchiAutomaton, FormatError> {
    parse_ba_lines(input.lines())
}

/// Reads a BA automaton line by line from `read`.
pub fn read_ba<R: BufRead>(read: R) -> Result<BuchiAutomaton, BaReadError> {
    let mut parser = BaParser::new();
    for line in read.lines() {
        parser.push_line(&line?)?;
    }
    Ok(parser.finish()?)
}
