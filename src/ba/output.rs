use std::fmt::{Result, Write};

use tracing::trace;

use crate::automaton::BuchiAutomaton;

/// Serializes an automaton back into the BA format.
pub trait WriteBa {
    /// Writes the initial states, then one `symbol,source->target` line per transition and
    /// finally the final states, each on its own line.
    ///
    /// Names are written verbatim. Parsing the output yields the same automaton if it has a
    /// single initial state and all of its names are accepted by the BA grammar, i.e. they are
    /// non-empty, free of surrounding whitespace and do not contain `-`, `,` or `>`.
    fn write_ba<W: Write>(&self, w: &mut W) -> Result;

    /// Returns the BA representation as a string.
    fn to_ba(&self) -> String {
        let mut w = String::new();
        self.write_ba(&mut w)
            .expect("writing into a String does not fail");
        trace!("produced BA string from automaton\n{}", w);
        w
    }
}

impl WriteBa for BuchiAutomaton {
    fn write_ba<W: Write>(&self, w: &mut W) -> Result {
        for state in self.initial() {
            writeln!(w, "{state}")?;
        }
        for t in self.transitions() {
            writeln!(w, "{},{}->{}", t.symbol, t.source, t.target)?;
        }
        for state in self.final_states() {
            writeln!(w, "{state}")?;
        }
        Ok(())
    }
}
