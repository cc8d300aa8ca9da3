/// Characters that separate the parts of a transition line. They may not occur inside a name.
pub const SEPARATORS: [char; 3] = ['-', ',', '>'];

/// The shape of a single (trimmed) line that follows the initial state in a BA file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// An empty line.
    Blank,
    /// A bare state name, which marks the state as final.
    State(&'a str),
    /// A line of the form `symbol,source->target`.
    Transition {
        /// The symbol that is read.
        symbol: &'a str,
        /// The state in which the transition starts.
        source: &'a str,
        /// The state in which the transition ends.
        target: &'a str,
    },
}

fn is_name(s: &str) -> bool {
    !s.is_empty() && !s.contains(&SEPARATORS[..])
}

impl<'a> Line<'a> {
    /// Classifies `line` after trimming surrounding whitespace. Returns `None` if the line has
    /// none of the three legal shapes.
    ///
    /// A name is any non-empty string without `-`, `,` and `>`, so the first `,` of a
    /// transition always ends the symbol and it has to be followed by the source and `->`.
    pub fn classify(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Some(Line::Blank);
        }
        if is_name(line) {
            return Some(Line::State(line));
        }

        let (symbol, rest) = line.split_once(',')?;
        let (source, target) = rest.split_once("->")?;
        if is_name(symbol) && is_name(source) && is_name(target) {
            Some(Line::Transition {
                symbol,
                source,
                target,
            })
        } else {
            None
        }
    }
}
