//! Reading and writing the line based BA format for Büchi automata.
//!
//! A BA file starts with the name of the initial state. Every following line is either empty,
//! the name of a final state or a transition `symbol,source->target`. Names may not contain
//! any of `-`, `,` or `>`.
//!
//! ```text
//! q0
//! a,q0->q1
//! b,q1->q0
//! q0
//! ```

/// Classification of single lines.
pub mod line;
pub use line::Line;

/// Parsing BA files into a [`crate::BuchiAutomaton`].
pub mod input;
pub use input::{parse_ba, parse_ba_lines, read_ba, BaParser, BaReadError, FormatError};

/// Writing BA files.
pub mod output;
pub use output::WriteBa;
