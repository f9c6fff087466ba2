//! Parallel hashing of independent inputs with rayon.
//!
//! A single digest is inherently sequential. Parallelism exists only across
//! inputs: each task owns its own state and byte source, so nothing is
//! shared and no locking is needed. Results keep the input order.

use std::io;
use std::num::NonZeroUsize;
use std::path::Path;

use rayon::prelude::*;

use crate::driver::{digest_bytes, digest_file};
use crate::md5::Digest;
use crate::{HashConfig, Md5Error};

/// Extension trait for computing MD5 digests from a parallel iterator.
///
/// # Example
///
/// ```
/// use rayon::prelude::*;
/// use checksums::parallel::ParallelMd5;
///
/// let data: Vec<Vec<u8>> = vec![b"hello".to_vec(), b"world".to_vec()];
/// let digests = data.par_iter().md5_digest();
/// assert_eq!(digests.len(), 2);
/// ```
pub trait ParallelMd5 {
    /// Computes one digest per item, preserving order.
    fn md5_digest(self) -> Vec<Digest>;
}

impl<I, T> ParallelMd5 for I
where
    I: IndexedParallelIterator<Item = T>,
    T: AsRef<[u8]> + Send,
{
    fn md5_digest(self) -> Vec<Digest> {
        self.map(|item| digest_bytes(item.as_ref())).collect()
    }
}

/// Digests many in-memory inputs on the global rayon pool.
pub fn digest_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<Digest> {
    inputs.par_iter().md5_digest()
}

/// Digests many files on the global rayon pool.
///
/// Each file is streamed exactly as [`digest_file`] would; a failure on one
/// path does not affect the others.
pub fn digest_files<P: AsRef<Path> + Sync>(
    paths: &[P],
    config: &HashConfig,
) -> Vec<Result<Digest, Md5Error>> {
    paths
        .par_iter()
        .map(|path| digest_file(path, config))
        .collect()
}

/// Digests many files on a dedicated pool of `jobs` threads.
///
/// Workers inherit the caller's tracing dispatcher, so diagnostics from
/// every file reach the same subscriber. Failing to start the pool is
/// reported as an I/O error.
pub fn digest_files_with_jobs<P: AsRef<Path> + Sync>(
    paths: &[P],
    config: &HashConfig,
    jobs: NonZeroUsize,
) -> Result<Vec<Result<Digest, Md5Error>>, Md5Error> {
    let dispatch = tracing::dispatcher::get_default(Clone::clone);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.get())
        .thread_name(|index| format!("md5-worker-{index}"))
        .spawn_handler(move |thread| {
            let dispatch = dispatch.clone();
            let mut builder = std::thread::Builder::new();
            if let Some(name) = thread.name() {
                builder = builder.name(name.to_owned());
            }
            if let Some(stack_size) = thread.stack_size() {
                builder = builder.stack_size(stack_size);
            }
            builder.spawn(move || tracing::dispatcher::with_default(&dispatch, || thread.run()))?;
            Ok(())
        })
        .build()
        .map_err(|error| Md5Error::Io(io::Error::other(error)))?;

    tracing::debug!(target: "md5::digest", jobs = jobs.get(), files = paths.len(), "hashing in parallel");
    Ok(pool.install(|| digest_files(paths, config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::md5::Md5;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn parallel_md5_matches_sequential() {
        let data: Vec<Vec<u8>> = vec![
            b"hello".to_vec(),
            b"world".to_vec(),
            b"test".to_vec(),
            b"data".to_vec(),
            b"more".to_vec(),
            b"inputs".to_vec(),
            b"for".to_vec(),
            b"testing".to_vec(),
        ];

        let parallel = digest_batch(&data);
        let sequential: Vec<Digest> = data.iter().map(|d| Md5::digest(d)).collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn digest_files_preserves_order() {
        let dir = tempdir().unwrap();

        let mut paths = Vec::new();
        for i in 0..6 {
            let path = dir.path().join(format!("file{i}.txt"));
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "content of file {i}").unwrap();
            paths.push(path);
        }

        let results = digest_files(&paths, &HashConfig::default());
        for (i, result) in results.iter().enumerate() {
            let expected = Md5::digest(format!("content of file {i}\n").as_bytes());
            assert_eq!(result.as_ref().unwrap(), &expected);
        }
    }

    #[test]
    fn digest_files_isolates_failures() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");
        std::fs::write(&good, b"abc").unwrap();
        let paths = [dir.path().join("missing.txt"), good];

        let results = digest_files(&paths, &HashConfig::default());
        assert!(matches!(results[0], Err(Md5Error::NotAFile { .. })));
        assert_eq!(
            results[1].as_ref().unwrap().to_hex(),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn dedicated_pool_matches_global_pool() {
        let dir = tempdir().unwrap();
        let paths: Vec<_> = (0..4)
            .map(|i| {
                let path = dir.path().join(format!("{i}.bin"));
                std::fs::write(&path, vec![i as u8; 1000 * (i + 1)]).unwrap();
                path
            })
            .collect();

        let config = HashConfig::default();
        let jobs = NonZeroUsize::new(2).unwrap();
        let pooled = digest_files_with_jobs(&paths, &config, jobs).unwrap();
        let global = digest_files(&paths, &config);
        for (a, b) in pooled.iter().zip(&global) {
            assert_eq!(a.as_ref().unwrap(), b.as_ref().unwrap());
        }
    }
}
