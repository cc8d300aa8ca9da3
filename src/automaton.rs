use std::str::FromStr;

use itertools::Itertools;

use crate::ba::{parse_ba, FormatError};

/// A single transition of a [`BuchiAutomaton`], leading from `source` to `target` on `symbol`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Name of the state the transition leaves.
    pub source: String,
    /// Name of the symbol that is read.
    pub symbol: String,
    /// Name of the state the transition enters.
    pub target: String,
}

impl Transition {
    /// Creates a new transition from `source` to `target` on `symbol`.
    pub fn new<S: Into<String>, A: Into<String>, T: Into<String>>(
        source: S,
        symbol: A,
        target: T,
    ) -> Self {
        Self {
            source: source.into(),
            symbol: symbol.into(),
            target: target.into(),
        }
    }
}

impl<S: Into<String>, A: Into<String>, T: Into<String>> From<(S, A, T)> for Transition {
    fn from((source, symbol, target): (S, A, T)) -> Self {
        Self::new(source, symbol, target)
    }
}

/// A nondeterministic Büchi automaton over named states and symbols.
///
/// States and symbols are opaque strings, a state exists simply by being mentioned as an
/// initial state, as an endpoint of a transition or as a final state. The automaton keeps
/// everything in the order in which it was added, since the numbering used by the HOA output
/// is derived from that order. Final states may be added multiple times, which does not change
/// their meaning.
///
/// Names are not validated when an automaton is built through [`BuchiAutomaton::add_initial`],
/// [`BuchiAutomaton::add_transition`], [`BuchiAutomaton::add_final`] or
/// [`BuchiAutomaton::from_parts`]. Such an automaton may contain empty names, names with
/// surrounding whitespace or names containing `-`, `,` or `>`, which the BA parser never
/// produces.
///
/// The canonical traversal order of states, which is used by [`BuchiAutomaton::state_names`]
/// and by the serializers, visits the initial states, then for every transition its source and
/// its target, and finally the final states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuchiAutomaton {
    initial: Vec<String>,
    transitions: Vec<Transition>,
    accepting: Vec<String>,
}

impl BuchiAutomaton {
    /// Creates an automaton without any states or transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an automaton from its three components at once.
    pub fn from_parts<I, T, F>(initial: I, transitions: T, accepting: F) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<Transition>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            initial: initial.into_iter().map(Into::into).collect(),
            transitions: transitions.into_iter().map(Into::into).collect(),
            accepting: accepting.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends `state` to the initial states.
    pub fn add_initial<S: Into<String>>(&mut self, state: S) {
        self.initial.push(state.into());
    }

    /// Appends a transition to the end of the transition list.
    pub fn add_transition<T: Into<Transition>>(&mut self, transition: T) {
        self.transitions.push(transition.into());
    }

    /// Marks `state` as final.
    pub fn add_final<S: Into<String>>(&mut self, state: S) {
        self.accepting.push(state.into());
    }

    /// The initial states in the order in which they were added.
    pub fn initial(&self) -> &[String] {
        &self.initial
    }

    /// All transitions in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// The final states as they were added, possibly containing duplicates.
    pub fn final_states(&self) -> &[String] {
        &self.accepting
    }

    /// Returns `true` if `state` has been marked final.
    pub fn is_final(&self, state: &str) -> bool {
        self.accepting.iter().any(|q| q == state)
    }

    /// Iterates over the transitions leaving `state` in insertion order.
    pub fn transitions_from<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a Transition> {
        self.transitions.iter().filter(move |t| t.source == state)
    }

    /// Iterates over the distinct state names in canonical traversal order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.initial
            .iter()
            .chain(
                self.transitions
                    .iter()
                    .flat_map(|t| [&t.source, &t.target]),
            )
            .chain(self.accepting.iter())
            .map(|s| s.as_str())
            .unique()
    }

    /// Iterates over the distinct names of states that are the source or target of some
    /// transition, in order of first occurrence with sources before targets.
    pub fn transition_states(&self) -> impl Iterator<Item = &str> + '_ {
        self.transitions
            .iter()
            .flat_map(|t| [t.source.as_str(), t.target.as_str()])
            .unique()
    }

    /// Iterates over the distinct symbols in the order in which they first occur on a
    /// transition.
    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.transitions.iter().map(|t| t.symbol.as_str()).unique()
    }

    /// The number of distinct states.
    pub fn size(&self) -> usize {
        self.state_names().count()
    }

    /// Returns `true` if the automaton mentions no state at all.
    pub fn is_empty(&self) -> bool {
        self.initial.is_empty() && self.transitions.is_empty() && self.accepting.is_empty()
    }
}

impl FromStr for BuchiAutomaton {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ba(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{BuchiAutomaton, Transition};

    fn example() -> BuchiAutomaton {
        BuchiAutomaton::from_parts(
            ["q0"],
            [("q2", "b", "q1"), ("q0", "a", "q2"), ("q2", "a", "q0")],
            ["q3", "q2", "q3"],
        )
    }

    #[test]
    fn canonical_state_order() {
        let aut = example();
        assert_eq!(
            aut.state_names().collect::<Vec<_>>(),
            vec!["q0", "q2", "q1", "q3"]
        );
        assert_eq!(aut.size(), 4);
    }

    #[test]
    fn symbols_in_first_occurrence_order() {
        assert_eq!(example().symbols().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn outgoing_transitions_keep_insertion_order() {
        let aut = example();
        let out: Vec<_> = aut.transitions_from("q2").collect();
        assert_eq!(
            out,
            vec![
                &Transition::new("q2", "b", "q1"),
                &Transition::new("q2", "a", "q0")
            ]
        );
        assert_eq!(aut.transitions_from("q1").count(), 0);
    }

    #[test]
    fn repeated_final_states() {
        let aut = example();
        assert_eq!(aut.final_states().len(), 3);
        assert!(aut.is_final("q3"));
        assert!(!aut.is_final("q0"));
    }

    #[test]
    fn incremental_construction() {
        let mut aut = BuchiAutomaton::new();
        assert!(aut.is_empty());
        aut.add_initial("s");
        aut.add_transition(("s", "x", "t"));
        aut.add_final("t");
        assert_eq!(aut, BuchiAutomaton::from_parts(["s"], [("s", "x", "t")], ["t"]));
        assert!(!aut.is_empty());
    }
}
