//! Conversion of Büchi automata between interchange formats.
//!
//! Automata are read from the BA format, a minimal line based format in which the first line
//! names the initial state and every further line is either a final state or a transition
//! `symbol,source->target`. The parsed [`BuchiAutomaton`] keeps states and symbols as the
//! names that appear in the input and remembers the order in which everything was read.
//!
//! From there, an automaton can be written as
//! - HOA ([`hoa::WriteHoa`]), where states are numbered and every symbol becomes an atomic
//!   proposition, a transition on a symbol is labeled with a conjunction that makes exactly the
//!   proposition of that symbol true,
//! - GFF ([`gff::WriteGff`]), the XML format of the GOAL tool, which refers to states and
//!   symbols by name,
//! - BA again ([`ba::WriteBa`]).
//!
//! None of the writers can fail on an automaton, all numberings depend only on the order of
//! the input, so writing the same automaton twice yields identical documents.
//!
//! ```
//! use baconv::prelude::*;
//!
//! let aut: BuchiAutomaton = "q0\na,q0->q1\nb,q1->q0\nq0\n".parse().unwrap();
//! assert!(aut.to_hoa().starts_with("HOA: v1\nStates: 2\n"));
//! assert!(aut.to_gff().contains("<state sid=\"q1\"></state>"));
//! ```
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use baconv::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        automaton::{BuchiAutomaton, Transition},
        ba::{parse_ba, read_ba, BaReadError, FormatError, WriteBa},
        gff::WriteGff,
        hoa::WriteHoa,
        intern::Interner,
        summary::{render_summaries, AutomatonSummary, TableFormat},
    };
}

/// Type aliases for the collections used throughout the crate.
pub mod math;

/// Defines the automaton that all formats are converted from and to.
pub mod automaton;
pub use automaton::{BuchiAutomaton, Transition};

/// Dense numbering of names.
pub mod intern;

pub mod ba;
pub mod gff;
pub mod hoa;
pub mod summary;
