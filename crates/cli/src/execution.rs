//! Hashing the parsed inputs and reporting the results.

use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

use checksums::{Digest, Md5Error, digest_file, digest_text};
use logging::EventCollector;

use crate::arguments::ParsedArgs;
use crate::diagnostics::flush_events;

/// Every input was hashed and, with `--check`, matched.
pub const EXIT_SUCCESS: i32 = 0;
/// An input could not be hashed, or the `--check` digest did not match.
pub const EXIT_FAILURE: i32 = 1;
/// The command line was rejected.
pub const EXIT_USAGE: i32 = 2;

/// Hashes every input and returns the exit status.
pub(crate) fn execute<Out, Err>(
    parsed: &ParsedArgs,
    stdout: &mut Out,
    stderr: &mut Err,
    events: &EventCollector,
) -> i32
where
    Out: Write,
    Err: Write,
{
    let outcome = match parsed.inputs.as_slice() {
        [input] => hash_single(parsed, input, stdout, stderr, events),
        _ => hash_many(parsed, stdout, stderr, events),
    };

    match outcome {
        Ok(status) => status,
        Err(error) => {
            let _ = flush_events(events, stderr);
            let _ = writeln!(stderr, "Error: {error}");
            EXIT_FAILURE
        }
    }
}

fn hash_single<Out, Err>(
    parsed: &ParsedArgs,
    input: &OsStr,
    stdout: &mut Out,
    stderr: &mut Err,
    events: &EventCollector,
) -> Result<i32, Md5Error>
where
    Out: Write,
    Err: Write,
{
    let result = if parsed.files {
        logging::trace_name!("{}", Path::new(input).display());
        digest_file(input, &parsed.config)
    } else {
        logging::trace_name!("string input ({} bytes)", input.len());
        digest_text(input, parsed.config.encoding())
    };
    flush_events(events, stderr)?;

    let digest = match result {
        Ok(digest) => digest,
        Err(error) => {
            writeln!(stderr, "Error: {error}")?;
            return Ok(EXIT_FAILURE);
        }
    };

    writeln!(stdout, "MD5 Hash: {digest}")?;
    logging::trace_stats!("1 of 1 inputs hashed");
    flush_events(events, stderr)?;

    match parsed.check {
        Some(expected) if expected != digest => {
            writeln!(
                stderr,
                "Error: checksum mismatch: expected {expected}, computed {digest}"
            )?;
            Ok(EXIT_FAILURE)
        }
        _ => Ok(EXIT_SUCCESS),
    }
}

fn hash_many<Out, Err>(
    parsed: &ParsedArgs,
    stdout: &mut Out,
    stderr: &mut Err,
    events: &EventCollector,
) -> Result<i32, Md5Error>
where
    Out: Write,
    Err: Write,
{
    let results = hash_files(parsed)?;
    let total = results.len();
    let mut hashed = 0usize;
    let mut status = EXIT_SUCCESS;

    for (path, result) in parsed.inputs.iter().zip(results) {
        let path = Path::new(path);
        logging::trace_name!("{}", path.display());
        flush_events(events, stderr)?;
        match result {
            Ok(digest) => {
                writeln!(stdout, "{digest}  {}", path.display())?;
                hashed += 1;
            }
            Err(error) => {
                writeln!(stderr, "Error: {error}")?;
                status = EXIT_FAILURE;
            }
        }
    }

    logging::trace_stats!("{hashed} of {total} inputs hashed");
    flush_events(events, stderr)?;
    Ok(status)
}

#[cfg(feature = "parallel")]
fn hash_files(parsed: &ParsedArgs) -> Result<Vec<Result<Digest, Md5Error>>, Md5Error> {
    use std::num::NonZeroUsize;

    // A dedicated pool so workers report into this invocation's subscriber.
    let jobs = parsed
        .jobs
        .or_else(|| std::thread::available_parallelism().ok())
        .unwrap_or(NonZeroUsize::MIN);
    checksums::parallel::digest_files_with_jobs(&parsed.inputs, &parsed.config, jobs)
}

#[cfg(not(feature = "parallel"))]
fn hash_files(parsed: &ParsedArgs) -> Result<Vec<Result<Digest, Md5Error>>, Md5Error> {
    Ok(parsed
        .inputs
        .iter()
        .map(|path| digest_file(path, &parsed.config))
        .collect())
}
