//! Tabular overviews of automata.
//!
//! An [`AutomatonSummary`] records the size of an automaton, a list of summaries can be
//! rendered as a table in one of the formats of [`TableFormat`]. The format is always passed
//! explicitly, the only default is the one of [`TableFormat`] itself.

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use crate::{automaton::BuchiAutomaton, math::Set};

/// The output formats for summary tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableFormat {
    /// Comma separated values with a header row.
    Csv,
    /// A human readable table with box drawing characters.
    #[default]
    Text,
    /// An HTML `<table>` element.
    Html,
}

impl TableFormat {
    /// The names under which the formats are recognized.
    pub const NAMES: [&'static str; 3] = ["csv", "text", "html"];
}

/// Raised when a string does not name a [`TableFormat`].
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unknown table format `{0}`, expected one of csv, text or html")]
pub struct UnknownTableFormat(
    /// The string that was rejected.
    pub String,
);

impl FromStr for TableFormat {
    type Err = UnknownTableFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(TableFormat::Csv),
            "text" => Ok(TableFormat::Text),
            "html" => Ok(TableFormat::Html),
            _ => Err(UnknownTableFormat(s.to_string())),
        }
    }
}

impl Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TableFormat::Csv => "csv",
            TableFormat::Text => "text",
            TableFormat::Html => "html",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur while rendering a table.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not write CSV: {0}")]
    #[allow(missing_docs)]
    Csv(#[from] csv::Error),
    #[error("rendered table is not valid UTF-8: {0}")]
    #[allow(missing_docs)]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// The sizes of the components of one automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomatonSummary {
    /// A label for the automaton, usually the file it was read from.
    pub name: String,
    /// Number of distinct states.
    pub states: usize,
    /// Number of initial states.
    pub initial: usize,
    /// Number of distinct final states.
    pub accepting: usize,
    /// Number of transitions.
    pub transitions: usize,
    /// Number of distinct symbols.
    pub symbols: usize,
}

const HEADER: [&str; 6] = [
    "automaton",
    "states",
    "initial",
    "final",
    "transitions",
    "symbols",
];

impl AutomatonSummary {
    /// Summarizes `aut` under the label `name`.
    pub fn of<S: Into<String>>(name: S, aut: &BuchiAutomaton) -> Self {
        Self {
            name: name.into(),
            states: aut.size(),
            initial: aut.initial().len(),
            accepting: aut
                .final_states()
                .iter()
                .map(String::as_str)
                .collect::<Set<_>>()
                .len(),
            transitions: aut.transitions().len(),
            symbols: aut.symbols().count(),
        }
    }

    fn row(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.states.to_string(),
            self.initial.to_string(),
            self.accepting.to_string(),
            self.transitions.to_string(),
            self.symbols.to_string(),
        ]
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

fn render_text(summaries: &[AutomatonSummary]) -> String {
    let mut builder = tabled::builder::Builder::default();
    builder.push_record(HEADER);
    for summary in summaries {
        builder.push_record(summary.row());
    }
    builder
        .build()
        .with(tabled::settings::Style::rounded())
        .to_string()
}

fn render_csv(summaries: &[AutomatonSummary]) -> Result<String, RenderError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(HEADER)?;
    for summary in summaries {
        wtr.write_record(summary.row())?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn render_html(summaries: &[AutomatonSummary]) -> String {
    let cells = |tag: &str, row: &[String]| {
        row.iter()
            .map(|cell| format!("<{tag}>{}</{tag}>", escape_html(cell)))
            .join("")
    };

    let mut out = String::from("<table>\n<thead>\n");
    out.push_str(&format!(
        "<tr>{}</tr>\n",
        cells("th", &HEADER.map(String::from))
    ));
    out.push_str("</thead>\n<tbody>\n");
    for summary in summaries {
        out.push_str(&format!("<tr>{}</tr>\n", cells("td", &summary.row())));
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

/// Renders the given summaries as a table in the requested format.
pub fn render_summaries(
    summaries: &[AutomatonSummary],
    format: TableFormat,
) -> Result<String, RenderError> {
    debug!("rendering {} summaries as {format}", summaries.len());
    match format {
        TableFormat::Csv => render_csv(summaries),
        TableFormat::Text => Ok(render_text(summaries)),
        TableFormat::Html => Ok(render_html(summaries)),
    }
}

#[cfg(test)]
mod tests {
    use super::{render_summaries, AutomatonSummary, TableFormat, UnknownTableFormat};
    use crate::ba::parse_ba;

    fn summaries() -> Vec<AutomatonSummary> {
        let first = parse_ba("q0\na,q0->q1\nb,q1->q0\nq0\nq0\n").unwrap();
        let second = parse_ba("s\n").unwrap();
        vec![
            AutomatonSummary::of("first.ba", &first),
            AutomatonSummary::of("<second>", &second),
        ]
    }

    #[test]
    fn summary_counts() {
        let [first, second]: [AutomatonSummary; 2] = summaries().try_into().unwrap();
        assert_eq!(
            first,
            AutomatonSummary {
                name: "first.ba".to_string(),
                states: 2,
                initial: 1,
                accepting: 1,
                transitions: 2,
                symbols: 2,
            }
        );
        assert_eq!(second.states, 1);
        assert_eq!(second.symbols, 0);
    }

    #[test]
    fn parse_table_format() {
        assert_eq!("csv".parse::<TableFormat>(), Ok(TableFormat::Csv));
        assert_eq!(" HTML ".parse::<TableFormat>(), Ok(TableFormat::Html));
        assert_eq!("text".parse::<TableFormat>(), Ok(TableFormat::Text));
        assert_eq!(
            "latex".parse::<TableFormat>(),
            Err(UnknownTableFormat("latex".to_string()))
        );
        for name in TableFormat::NAMES {
            assert_eq!(name.parse::<TableFormat>().unwrap().to_string(), name);
        }
        assert_eq!(TableFormat::default(), TableFormat::Text);
    }

    #[test_log::test]
    fn render_csv() {
        let csv = render_summaries(&summaries(), TableFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "automaton,states,initial,final,transitions,symbols\nfirst.ba,2,1,1,2,2\n<second>,1,1,0,0,0\n"
        );
    }

    #[test]
    fn render_text() {
        let text = render_summaries(&summaries(), TableFormat::Text).unwrap();
        let position = |needle: &str| text.lines().position(|l| l.contains(needle)).unwrap();
        assert!(text.starts_with('╭'));
        assert!(text.trim_end().lines().last().unwrap().starts_with('╰'));
        assert!(position("automaton") < position("first.ba"));
        assert!(position("first.ba") < position("<second>"));
    }

    #[test]
    fn render_html_escapes_cells() {
        let html = render_summaries(&summaries(), TableFormat::Html).unwrap();
        assert!(html.starts_with("<table>\n<thead>\n<tr><th>automaton</th><th>states</th>"));
        assert!(html.contains("<tr><td>first.ba</td><td>2</td><td>1</td><td>1</td><td>2</td><td>2</td></tr>"));
        assert!(html.contains("<td>&lt;second&gt;</td>"));
        assert!(html.ends_with("</tbody>\n</table>\n"));
    }
}
