//! Command-line parsing for `oc-md5`.

use std::ffi::OsString;
#[cfg(feature = "parallel")]
use std::num::NonZeroUsize;

use checksums::{Digest, HashConfig, TextEncoding};
use clap::{Arg, ArgAction, Command, builder::OsStringValueParser, value_parser};
use logging::VerbosityConfig;

/// Program name used when the argument list is empty.
pub(crate) const PROGRAM_NAME: &str = "oc-md5";

/// Options extracted from the command line.
#[derive(Debug)]
pub(crate) struct ParsedArgs {
    pub(crate) inputs: Vec<OsString>,
    pub(crate) files: bool,
    pub(crate) config: HashConfig,
    pub(crate) check: Option<Digest>,
    #[cfg(feature = "parallel")]
    pub(crate) jobs: Option<NonZeroUsize>,
    pub(crate) verbosity: VerbosityConfig,
}

/// Reasons argument parsing stops before any hashing happens.
#[derive(Debug)]
pub(crate) enum ParseFailure {
    /// Raised by clap, including `--help` and `--version` requests.
    Clap(clap::Error),
    /// Arguments that are individually valid but cannot be combined.
    Usage(String),
}

impl From<clap::Error> for ParseFailure {
    fn from(error: clap::Error) -> Self {
        Self::Clap(error)
    }
}

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    let command = Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("MD5 hash generator for strings and files.")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("The input string, or file paths with --file.")
                .required(true)
                .num_args(1..)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Treat INPUT as one or more file paths.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("encoding")
                .long("encoding")
                .short('e')
                .value_name("LABEL")
                .help("Encode string input with LABEL before hashing (default utf-8).")
                .value_parser(|label: &str| label.parse::<TextEncoding>()),
        )
        .arg(
            Arg::new("chunk-size")
                .long("chunk-size")
                .value_name("BYTES")
                .help("Read files in chunks of BYTES, rounded to a multiple of 64.")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .value_name("HEX")
                .help("Fail unless the digest equals HEX.")
                .value_parser(|hex: &str| hex.parse::<Digest>()),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase verbosity; repeat for more detail.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .value_name("FLAGS")
                .help("Fine-grained informational verbosity (name, stats, all).")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAGS")
                .help("Fine-grained debug verbosity (digest, io, pad, all).")
                .value_delimiter(',')
                .action(ArgAction::Append),
        );

    #[cfg(feature = "parallel")]
    let command = command.arg(
        Arg::new("jobs")
            .long("jobs")
            .short('j')
            .value_name("N")
            .help("Hash up to N files at once.")
            .value_parser(parse_jobs),
    );

    command
}

#[cfg(feature = "parallel")]
fn parse_jobs(text: &str) -> Result<NonZeroUsize, String> {
    text.parse::<NonZeroUsize>()
        .map_err(|_| format!("expected a positive integer, got '{text}'"))
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, ParseFailure>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let inputs: Vec<OsString> = matches
        .remove_many::<OsString>("input")
        .map(|values| values.collect())
        .unwrap_or_default();
    let files = matches.get_flag("file");
    let check = matches.remove_one::<Digest>("check");

    if !files && inputs.len() > 1 {
        return Err(ParseFailure::Usage(
            "more than one INPUT requires --file".to_string(),
        ));
    }
    if check.is_some() && inputs.len() > 1 {
        return Err(ParseFailure::Usage(
            "--check accepts a single INPUT".to_string(),
        ));
    }

    let mut builder = HashConfig::builder();
    if let Some(encoding) = matches.remove_one::<TextEncoding>("encoding") {
        builder = builder.encoding(encoding);
    }
    if let Some(bytes) = matches.remove_one::<usize>("chunk-size") {
        builder = builder.chunk_size(bytes);
    }

    let mut verbosity = VerbosityConfig::from_verbose_level(matches.get_count("verbose"));
    for token in matches
        .remove_many::<String>("info")
        .into_iter()
        .flatten()
    {
        verbosity
            .apply_info_flag(&token)
            .map_err(ParseFailure::Usage)?;
    }
    for token in matches
        .remove_many::<String>("debug")
        .into_iter()
        .flatten()
    {
        verbosity
            .apply_debug_flag(&token)
            .map_err(ParseFailure::Usage)?;
    }

    Ok(ParsedArgs {
        inputs,
        files,
        config: builder.build(),
        check,
        #[cfg(feature = "parallel")]
        jobs: matches.remove_one::<NonZeroUsize>("jobs"),
        verbosity,
    })
}
