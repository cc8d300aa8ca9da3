use std::fmt::Display;

use itertools::Itertools;

/// A possibly negated atomic proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Index of the atomic proposition.
    pub ap: usize,
    /// `false` if the proposition appears negated.
    pub positive: bool,
}

impl Literal {
    /// Evaluates the literal, `valuation` gives the truth value of each atomic proposition.
    pub fn evaluate<F: Fn(usize) -> bool>(&self, valuation: F) -> bool {
        valuation(self.ap) == self.positive
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.positive {
            write!(f, "{}", self.ap)
        } else {
            write!(f, "!{}", self.ap)
        }
    }
}

/// Label that selects a single letter of an enumerated alphabet.
///
/// HOA labels are Boolean formulas over atomic propositions, whereas a BA alphabet is just a
/// list of names. Each of the `aps` letters therefore gets its own proposition and the letter
/// with index `symbol` is encoded as the conjunction which requires exactly that proposition to
/// hold, e.g. the second of three letters becomes `!0 & 1 & !2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OneHotLabel {
    symbol: usize,
    aps: usize,
}

impl OneHotLabel {
    /// Creates the label for the letter with index `symbol` out of `aps` letters.
    ///
    /// # Panics
    /// If `symbol` is not smaller than `aps`, as no letter could satisfy such a label.
    pub fn new(symbol: usize, aps: usize) -> Self {
        assert!(symbol < aps, "symbol {symbol} out of range for {aps} APs");
        Self { symbol, aps }
    }

    /// The index of the letter that satisfies the label.
    pub fn symbol(&self) -> usize {
        self.symbol
    }

    /// The number of atomic propositions the label ranges over.
    pub fn aps(&self) -> usize {
        self.aps
    }

    /// The literals of the conjunction, one per atomic proposition in ascending order.
    pub fn literals(&self) -> impl Iterator<Item = Literal> {
        let symbol = self.symbol;
        (0..self.aps).map(move |ap| Literal {
            ap,
            positive: ap == symbol,
        })
    }

    /// Evaluates the conjunction under the given valuation of atomic propositions.
    pub fn evaluate<F: Fn(usize) -> bool>(&self, valuation: F) -> bool {
        self.literals().all(|lit| lit.evaluate(&valuation))
    }
}

impl Display for OneHotLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literals().join(" & "))
    }
}
