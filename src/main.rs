extern crate clap;
extern crate tracing;
extern crate tracing_subscriber;
extern crate tracing_appender;
extern crate serde_json;
extern crate matchnote_base;
extern crate matchnote_parser;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use tracing::{info_span, debug, info, error, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;

mod arg;
mod output;

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::DEBUG;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::INFO;

#[cfg(debug_assertions)]
const SPAN_EVENTS: FmtSpan = FmtSpan::CLOSE;
#[cfg(not(debug_assertions))]
const SPAN_EVENTS: FmtSpan = FmtSpan::NONE;

/// Set up the subscriber. Diagnostics go to stderr, or to `log_file` when given,
/// so that stdout only carries the requested output.
/// The returned guard must live until the end of `main` to flush the file writer.
fn init_logging(log_file: Option<&str>) -> Option<WorkerGuard> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(LOG_LEVEL)
        .with_span_events(SPAN_EVENTS);
    match log_file {
        Some(path) => {
            let path = Path::new(path);
            let dir = path.parent().filter(|d| !d.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
            let name = path.file_name().unwrap_or(path.as_os_str());
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            builder.with_writer(writer).with_ansi(false).init();
            Some(guard)
        },
        None => {
            builder.with_writer(std::io::stderr).init();
            None
        },
    }
}

/// The main function parses command line arguments, reads the match log and prints
/// what was requested. Exit status is 1 when the log does not parse, 2 when it cannot be read.
fn main() -> ExitCode {
    let args = arg::build_argparse().get_matches();
    let _guard = init_logging(args.value_of("log-file"));

    let path = args.value_of("log").unwrap_or_default();
    let src = match info_span!(target: "bootstrap", "read log").in_scope(|| {
        debug!(target: "bootstrap", "reading match log \"{}\"", path);
        fs::read_to_string(path)
    }) {
        Ok(s) => s,
        Err(e) => {
            error!(target: "bootstrap", "cannot open match log \"{}\": {}", path, e);
            eprintln!("cannot open match log \"{}\": {}", path, e);
            return ExitCode::from(2);
        },
    };

    let json = args.value_of("format") == Some("json");

    if args.is_present("tokens") {
        let tokens = matchnote_parser::tokenize(&src);
        debug!(target: "cli", "{} tokens", tokens.len());
        let text = if json {
            output::generate_tokens_json(&tokens).map(|s| s + "\n")
        } else {
            Ok(output::generate_tokens_text(&tokens))
        };
        match text {
            Ok(t) => print!("{}", t),
            Err(e) => {
                error!(target: "cli", "cannot serialize tokens: {}", e);
                return ExitCode::FAILURE;
            },
        }
    }

    let tree = match info_span!(target: "cli", "parse").in_scope(|| matchnote_parser::parse_tree(&src)) {
        Ok(t) => t,
        Err(failure) => {
            error!(target: "cli", "\"{}\": {}", path, failure);
            eprintln!("{}: {}", path, failure);
            return ExitCode::FAILURE;
        },
    };
    let points = tree.points();
    info!(target: "cli", "parsed {} points from {} lines", points.len(), tree.lines().len());

    let text = if json {
        output::generate_json(&points).map(|s| s + "\n")
    } else {
        Ok(output::generate_text(&points))
    };
    match text {
        Ok(t) => print!("{}", t),
        Err(e) => {
            error!(target: "cli", "cannot serialize points: {}", e);
            return ExitCode::FAILURE;
        },
    }

    if args.is_present("tree") {
        print!("{}", tree);
    }

    ExitCode::SUCCESS
}
