//! Output in the XML based file format of the GOAL tool.
//!
//! Unlike HOA, GFF refers to states and symbols by their names. The alphabet and the state set
//! are listed in the order in which their elements first appear on a transition, which keeps
//! the output reproducible. Only states that are the source or target of some transition end
//! up in the `<stateset>`, a state that is merely initial or final is still referenced from
//! `<acc>` and `<initialStateSet>` but not declared.
//!
//! Names are written as they are, characters like `<` or `&` are not escaped and lead to
//! malformed XML.

use std::fmt::{Result, Write};

use tracing::trace;

use crate::automaton::BuchiAutomaton;

/// Serializes an automaton in the GOAL file format.
pub trait WriteGff {
    /// Writes the GFF document to `w`.
    fn write_gff<W: Write>(&self, w: &mut W) -> Result;

    /// Returns the GFF document as a string.
    fn to_gff(&self) -> String {
        let mut w = String::new();
        self.write_gff(&mut w)
            .expect("writing into a String does not fail");
        trace!("produced GFF document from automaton\n{}", w);
        w
    }
}

impl WriteGff for BuchiAutomaton {
    fn write_gff<W: Write>(&self, w: &mut W) -> Result {
        w.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n")?;
        w.write_str("<structure label-on=\"transition\" type=\"fa\">\n")?;

        w.write_str("<alphabet type=\"classical\">\n")?;
        for symbol in self.symbols() {
            writeln!(w, "<symbol>{symbol}</symbol>")?;
        }
        w.write_str("</alphabet>\n")?;

        w.write_str("<stateset>\n")?;
        for state in self.transition_states() {
            writeln!(w, "<state sid=\"{state}\"></state>")?;
        }
        w.write_str("</stateset>\n")?;

        w.write_str("<acc type=\"buchi\">\n")?;
        for state in self.final_states() {
            writeln!(w, "<stateID>{state}</stateID>")?;
        }
        w.write_str("</acc>\n")?;

        w.write_str("<initialStateSet>\n")?;
        for state in self.initial() {
            writeln!(w, "<stateID>{state}</stateID>")?;
        }
        w.write_str("</initialStateSet>\n")?;

        w.write_str("<transitionset>\n")?;
        for (tid, t) in self.transitions().iter().enumerate() {
            writeln!(w, "<transition tid=\"{tid}\">")?;
            writeln!(w, "<from>{}</from>", t.source)?;
            writeln!(w, "<to>{}</to>", t.target)?;
            writeln!(w, "<read>{}</read>", t.symbol)?;
            w.write_str("</transition>\n")?;
        }
        w.write_str("</transitionset>\n")?;

        w.write_str("</structure>\n")
    }
}
