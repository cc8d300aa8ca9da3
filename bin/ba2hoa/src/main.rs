use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use baconv::prelude::*;

use tracing::{debug, info, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{Arg, ArgMatches, Command};

fn cli() -> clap::Command {
    Command::new("ba2hoa")
    .about("reads a Büchi automaton in BA format from a file or stdin and writes it as HOA")
    .arg(
        Arg::new("verbosity")
        .short('v')
        .long("verbosity")
        .num_args(0..=1)
        .require_equals(true)
        .value_parser(["info", "debug", "trace"])
        .default_missing_value("info")
    )
    .arg(
        Arg::new("to")
        .short('t')
        .long("to")
        .value_parser(["hoa", "gff", "ba"])
        .default_value("hoa")
        .help("format of the produced automaton")
    )
    .arg(
        Arg::new("summary")
        .short('s')
        .long("summary")
        .value_parser(TableFormat::NAMES)
        .conflicts_with("to")
        .help("print a summary table of the automaton instead of converting it")
    )
    .arg(
        Arg::new("input")
        .value_parser(clap::value_parser!(PathBuf))
        .help("BA file to read, standard input is used if omitted")
    )
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::WARN,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Hoa,
    Gff,
    Ba,
}

impl Target {
    fn from_matches(matches: &ArgMatches) -> Self {
        match matches.get_one::<String>("to").map(|s| s.as_str()) {
            Some("gff") => Target::Gff,
            Some("ba") => Target::Ba,
            _ => Target::Hoa,
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<BuchiAutomaton, BaReadError> {
    match path {
        Some(path) => read_ba(BufReader::new(File::open(path)?)),
        None => read_ba(io::stdin().lock()),
    }
}

fn convert(aut: &BuchiAutomaton, target: Target) -> String {
    match target {
        Target::Hoa => aut.to_hoa(),
        Target::Gff => aut.to_gff(),
        Target::Ba => aut.to_ba(),
    }
}

fn run(matches: &ArgMatches) -> Result<String, String> {
    let input = matches.get_one::<PathBuf>("input").map(PathBuf::as_path);
    let name = input
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    debug!("reading BA automaton from {name}");
    let start = std::time::Instant::now();
    let aut = read_input(input).map_err(|e| format!("{name}: {e}"))?;
    info!(
        "read automaton with {} states and {} transitions in {}µs",
        aut.size(),
        aut.transitions().len(),
        start.elapsed().as_micros()
    );

    if let Some(format) = matches.get_one::<String>("summary") {
        let format: TableFormat = format.parse().map_err(|e| format!("{e}"))?;
        return render_summaries(&[AutomatonSummary::of(name, &aut)], format)
            .map_err(|e| e.to_string());
    }

    let target = Target::from_matches(matches);
    debug!("converting automaton into {target:?}");
    Ok(convert(&aut, target))
}

pub fn main() -> ExitCode {
    let matches = cli().get_matches();

    setup_logging(&matches);

    match run(&matches) {
        Ok(output) => {
            if let Err(e) = io::stdout().lock().write_all(output.as_bytes()) {
                eprintln!("ba2hoa: could not write output: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("ba2hoa: {message}");
            ExitCode::FAILURE
        }
    }
}
