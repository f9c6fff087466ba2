#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end of `oc-md5`. It hashes one
//! string, one file, or several files and prints the digest in lowercase
//! hexadecimal.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error, so the binary and the tests drive exactly the
//! same code. A [`clap`](https://docs.rs/clap/) command performs the parse;
//! hashing is delegated to the `checksums` crate. Diagnostics raised while
//! hashing are collected by the `logging` crate's tracing layer and written
//! to the error handle prefixed with the program name.
//!
//! # Output
//!
//! - One input: `MD5 Hash: <hex>`.
//! - Several files: one `<hex>  <path>` line per file, in argument order.
//! - Failures: `Error: <message>` on the error handle.
//!
//! # Exit codes
//!
//! [`EXIT_SUCCESS`] when every input hashed (and matched `--check`),
//! [`EXIT_FAILURE`] when any input failed, and [`EXIT_USAGE`] when the
//! command line was rejected.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["oc-md5", "abc"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert_eq!(stdout, b"MD5 Hash: 900150983cd24fb0d6963f7d28e17f72\n");
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::Write;

mod arguments;
mod diagnostics;
mod execution;

use arguments::{PROGRAM_NAME, ParseFailure, parse_args};
use logging::EventCollector;

pub use diagnostics::LOG_ENV;
pub use execution::{EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller. It never panics on bad input or I/O failure.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => {
            let events = EventCollector::new();
            let subscriber = diagnostics::subscriber(parsed.verbosity.clone(), events.clone());
            tracing::subscriber::with_default(subscriber, || {
                execution::execute(&parsed, stdout, stderr, &events)
            })
        }
        Err(ParseFailure::Clap(error)) => {
            let rendered = error.render();
            let written = if error.use_stderr() {
                write!(stderr, "{rendered}")
            } else {
                write!(stdout, "{rendered}")
            };
            if written.is_err() {
                return EXIT_FAILURE;
            }
            error.exit_code()
        }
        Err(ParseFailure::Usage(message)) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {message}");
            let _ = writeln!(stderr, "Try '{PROGRAM_NAME} --help' for more information.");
            EXIT_USAGE
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    std::process::ExitCode::from(clamp_status(status))
}

fn clamp_status(status: i32) -> u8 {
    status.clamp(0, MAX_EXIT_CODE) as u8
}
