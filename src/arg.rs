use clap::{Command, Arg, crate_version};

pub fn build_argparse() -> Command<'static> {
    Command::new("MatchNote")
        .about("Parse a tennis match log and inspect its point records")
        .version(crate_version!())
        .args(&[
            Arg::new("log")
                .required(true)
                .takes_value(true)
                .help("Path to the match log text file"),
            Arg::new("format")
                .long("format")
                .takes_value(true)
                .possible_values(["text", "json"])
                .default_value("text")
                .help("How to print the point records"),
            Arg::new("tree")
                .long("tree")
                .help("Also print the parse tree"),
            Arg::new("tokens")
                .long("tokens")
                .help("Also print the token stream"),
            Arg::new("log-file")
                .long("log-file")
                .takes_value(true)
                .help("Write diagnostics to this file instead of stderr"),
        ])
}
