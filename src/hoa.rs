//! Output in the Hanoi Omega-Automata format.
//!
//! HOA labels transitions with Boolean formulas over atomic propositions. A BA automaton only
//! has an enumerated alphabet, so every symbol becomes an atomic proposition and a transition
//! on a symbol is labeled with the [`OneHotLabel`] that only admits this symbol. The
//! acceptance condition is always the Büchi condition `Inf(0)` with the final states as
//! accepting states.

/// One-hot encoding of symbols as labels.
pub mod label;
pub use label::{Literal, OneHotLabel};

/// Writing automata in HOA.
pub mod output;
pub use output::{HoaEncoding, IndexedTransition, WriteHoa};
