use std::fmt::{Result, Write};

use itertools::Itertools;
use tracing::trace;

use crate::{
    automaton::BuchiAutomaton,
    intern::Interner,
    math::{Map, Set},
};

use super::label::OneHotLabel;

/// A transition in which states and the symbol have been replaced by their indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexedTransition {
    /// Index of the source state.
    pub source: usize,
    /// Index of the symbol, which is also the index of its atomic proposition.
    pub symbol: usize,
    /// Index of the target state.
    pub target: usize,
}

/// The numbering of states and symbols that is used when writing an automaton in HOA.
///
/// States are numbered in the order in which they are encountered when visiting the initial
/// states, then the source and target of every transition and finally the final states.
/// Symbols are numbered independently of states in the order in which they first appear on a
/// transition. Each call to [`HoaEncoding::of`] starts from fresh interners, so the numbering
/// only depends on the automaton.
#[derive(Debug, Clone)]
pub struct HoaEncoding {
    states: Interner,
    symbols: Interner,
    start: Vec<usize>,
    transitions: Vec<IndexedTransition>,
    accepting: Set<usize>,
}

impl HoaEncoding {
    /// Computes the numbering for `aut`.
    pub fn of(aut: &BuchiAutomaton) -> Self {
        let mut states = Interner::new();
        let mut symbols = Interner::new();

        let start = aut.initial().iter().map(|q| states.intern(q)).collect();
        let transitions = aut
            .transitions()
            .iter()
            .map(|t| IndexedTransition {
                source: states.intern(&t.source),
                symbol: symbols.intern(&t.symbol),
                target: states.intern(&t.target),
            })
            .collect();
        let accepting = aut
            .final_states()
            .iter()
            .map(|q| states.intern(q))
            .collect();

        Self {
            states,
            symbols,
            start,
            transitions,
            accepting,
        }
    }

    /// The state numbering.
    pub fn states(&self) -> &Interner {
        &self.states
    }

    /// The symbol numbering, which doubles as the list of atomic propositions.
    pub fn symbols(&self) -> &Interner {
        &self.symbols
    }

    /// Indices of the initial states.
    pub fn start(&self) -> &[usize] {
        &self.start
    }

    /// All transitions in their original order.
    pub fn transitions(&self) -> &[IndexedTransition] {
        &self.transitions
    }

    /// Returns `true` if the state with index `state` is accepting.
    pub fn is_accepting(&self, state: usize) -> bool {
        self.accepting.contains(&state)
    }

    /// The label of the given transition.
    pub fn label(&self, transition: &IndexedTransition) -> OneHotLabel {
        OneHotLabel::new(transition.symbol, self.symbols.len())
    }
}

/// Writes string literals as they appear in HOA headers.
fn write_quoted<W: Write>(w: &mut W, s: &str) -> Result {
    w.write_char('"')?;
    for c in s.chars() {
        if c == '"' || c == '\\' {
            w.write_char('\\')?;
        }
        w.write_char(c)?;
    }
    w.write_char('"')
}

/// Serializes an automaton in the Hanoi Omega-Automata format.
pub trait WriteHoa {
    /// Writes the HOA representation to `w`.
    fn write_hoa<W: Write>(&self, w: &mut W) -> Result;

    /// Returns the HOA representation as a string.
    fn to_hoa(&self) -> String {
        let mut w = String::new();
        self.write_hoa(&mut w)
            .expect("writing into a String does not fail");
        trace!("produced HOA string from automaton\n{}", w);
        w
    }
}

impl WriteHoa for BuchiAutomaton {
    fn write_hoa<W: Write>(&self, w: &mut W) -> Result {
        let encoding = HoaEncoding::of(self);

        w.write_str("HOA: v1\n")?;
        writeln!(w, "States: {}", encoding.states().len())?;
        if !encoding.start().is_empty() {
            writeln!(w, "Start: {}", encoding.start().iter().join(" "))?;
        }
        w.write_str("acc-name: Buchi\n")?;
        w.write_str("Acceptance: 1 Inf(0)\n")?;

        write!(w, "AP: {}", encoding.symbols().len())?;
        for name in encoding.symbols().names() {
            w.write_char(' ')?;
            write_quoted(w, name)?;
        }
        w.write_char('\n')?;

        w.write_str("--BODY--\n")?;

        let mut outgoing: Map<usize, Vec<&IndexedTransition>> = Map::default();
        for t in encoding.transitions() {
            outgoing.entry(t.source).or_default().push(t);
        }

        for state in 0..encoding.states().len() {
            write!(w, "State: {state}")?;
            if encoding.is_accepting(state) {
                w.write_str(" {0}")?;
            }
            w.write_char('\n')?;

            for t in outgoing.get(&state).into_iter().flatten() {
                writeln!(w, "[{}] {}", encoding.label(t), t.target)?;
            }
        }

        w.write_str("--END--\n")
    }
}

#[cfg(test)]
mod tests {
    use super::{HoaEncoding, WriteHoa};
    use crate::{automaton::BuchiAutomaton, ba::parse_ba};

    fn scenario_a() -> BuchiAutomaton {
        parse_ba("q0\na,q0->q1\nb,q1->q0\nq0\n").unwrap()
    }

    fn header_value<'a>(hoa: &'a str, key: &str) -> Option<&'a str> {
        hoa.lines()
            .find_map(|line| line.strip_prefix(key)?.strip_prefix(": "))
    }

    #[test_log::test]
    fn write_hoa_two_states() {
        let hoa = scenario_a().to_hoa();
        assert_eq!(
            hoa,
            "HOA: v1\nStates: 2\nStart: 0\nacc-name: Buchi\nAcceptance: 1 Inf(0)\nAP: 2 \"a\" \"b\"\n--BODY--\nState: 0 {0}\n[0 & !1] 1\nState: 1\n[!0 & 1] 0\n--END--\n"
        );
        assert_eq!(header_value(&hoa, "States"), Some("2"));
        assert_eq!(header_value(&hoa, "Start"), Some("0"));
        assert_eq!(header_value(&hoa, "AP"), Some("2 \"a\" \"b\""));
        assert_eq!(hoa.lines().filter(|l| l.starts_with('[')).count(), 2);
    }

    #[test]
    fn initial_state_only() {
        let aut = parse_ba("lonely\n").unwrap();
        assert_eq!(
            aut.to_hoa(),
            "HOA: v1\nStates: 1\nStart: 0\nacc-name: Buchi\nAcceptance: 1 Inf(0)\nAP: 0\n--BODY--\nState: 0\n--END--\n"
        );
    }

    #[test]
    fn state_count_matches_distinct_names() {
        let aut = parse_ba("s\nx,t->u\ny,u->t\nv\nt\nv\n").unwrap();
        let hoa = aut.to_hoa();
        assert_eq!(header_value(&hoa, "States"), Some("4"));
        assert_eq!(aut.size(), 4);
        assert_eq!(hoa.lines().filter(|l| l.starts_with("State:")).count(), 4);
    }

    #[test]
    fn numbering_follows_traversal_order() {
        let aut = parse_ba("init\nz,b->a\ny,a->init\nz,init->b\nacc\n").unwrap();
        let encoding = HoaEncoding::of(&aut);
        assert_eq!(
            encoding.states().names().collect::<Vec<_>>(),
            vec!["init", "b", "a", "acc"]
        );
        assert_eq!(encoding.symbols().names().collect::<Vec<_>>(), vec!["z", "y"]);
        assert_eq!(encoding.start(), [0usize]);
        assert!(encoding.is_accepting(3));
        assert!(!encoding.is_accepting(0));
    }

    #[test]
    fn transitions_are_grouped_by_source() {
        let aut = parse_ba("p\na,p->q\nb,q->p\nb,p->p\na,q->q\nq\n").unwrap();
        assert_eq!(
            aut.to_hoa(),
            "HOA: v1\nStates: 2\nStart: 0\nacc-name: Buchi\nAcceptance: 1 Inf(0)\nAP: 2 \"a\" \"b\"\n--BODY--\nState: 0\n[0 & !1] 1\n[!0 & 1] 0\nState: 1 {0}\n[!0 & 1] 0\n[0 & !1] 1\n--END--\n"
        );
    }

    #[test]
    fn several_initial_states() {
        let aut = BuchiAutomaton::from_parts(["x", "y"], [("y", "a", "x")], ["x", "x"]);
        let hoa = aut.to_hoa();
        assert_eq!(header_value(&hoa, "Start"), Some("0 1"));
        assert!(hoa.contains("State: 0 {0}\nState: 1\n[0] 0\n"));
    }

    #[test]
    fn output_is_deterministic() {
        let aut = parse_ba("0\nc,0->1\nb,1->2\na,2->0\nc,2->2\n1\n2\n").unwrap();
        assert_eq!(aut.to_hoa(), aut.to_hoa());
        assert_eq!(aut.to_hoa(), aut.clone().to_hoa());
    }

    #[test]
    fn ap_names_are_quoted() {
        let aut = BuchiAutomaton::from_parts(["q"], [("q", "say \"hi\"", "q")], ["q"]);
        assert!(aut.to_hoa().contains("AP: 1 \"say \\\"hi\\\"\"\n"));
    }

    #[test]
    fn no_start_line_without_initial_states() {
        let aut = BuchiAutomaton::from_parts(Vec::<String>::new(), [("a", "x", "b")], ["b"]);
        let hoa = aut.to_hoa();
        assert!(!hoa.contains("Start:"));
        assert_eq!(header_value(&hoa, "States"), Some("2"));
    }
}
