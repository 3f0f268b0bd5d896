use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Advisory lock making one stint process the only writer of a data directory.
///
/// Uses platform-native flock (Unix). Held for the whole session. The lock
/// file stays on disk; closing the handle is what releases it.
pub struct FileLock {
    _file: File,
}

/// Error type for lock operations
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not create lock file at {path}: {source}")]
    CreateError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("another stint process is using {dir}")]
    Busy { dir: PathBuf },
}

impl FileLock {
    /// Acquire the lock on a data directory, waiting up to `timeout`.
    pub fn acquire(data_dir: &Path, timeout: Duration) -> Result<Self, LockError> {
        let lock_path = data_dir.join(".stint.lock");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| LockError::CreateError {
                path: lock_path.clone(),
                source: e,
            })?;

        let start = Instant::now();
        loop {
            match try_lock(&file) {
                Ok(()) => {
                    tracing::debug!(path = %lock_path.display(), "acquired data directory lock");
                    return Ok(FileLock { _file: file });
                }
                Err(_) if start.elapsed() < timeout => {
                    std::thread::sleep(Duration::from_millis(10));
                }
                Err(_) => {
                    return Err(LockError::Busy {
                        dir: data_dir.to_path_buf(),
                    });
                }
            }
        }
    }

    /// Acquire with the startup timeout (half a second)
    pub fn acquire_default(data_dir: &Path) -> Result<Self, LockError> {
        Self::acquire(data_dir, Duration::from_millis(500))
    }
}

/// Try to acquire an exclusive flock on the file (non-blocking)
#[cfg(unix)]
fn try_lock(file: &File) -> Result<(), std::io::Error> {
    use std::os::unix::io::AsRawFd;
    let fd = file.as_raw_fd();
    let result = unsafe { libc::flock(fd, libc::LOCK_EX | libc::LOCK_NB) };
    if result == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn try_lock(_file: &File) -> Result<(), std::io::Error> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn acquire_and_release() {
        let tmp = TempDir::new().unwrap();

        let lock = FileLock::acquire_default(tmp.path());
        assert!(lock.is_ok());
        assert!(tmp.path().join(".stint.lock").exists());

        drop(lock);
        assert!(tmp.path().join(".stint.lock").exists());

        let again = FileLock::acquire_default(tmp.path());
        assert!(again.is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn second_writer_is_refused() {
        let tmp = TempDir::new().unwrap();
        let _held = FileLock::acquire_default(tmp.path()).unwrap();

        let err = FileLock::acquire(tmp.path(), Duration::from_millis(50))
            .err()
            .unwrap();
        assert!(matches!(err, LockError::Busy { .. }));
        assert!(err.to_string().contains("another stint process"));
    }

    #[cfg(unix)]
    #[test]
    fn lock_handed_over_on_release_still_excludes_others() {
        let tmp = TempDir::new().unwrap();
        let first = FileLock::acquire_default(tmp.path()).unwrap();

        let dir = tmp.path().to_path_buf();
        let waiter =
            std::thread::spawn(move || FileLock::acquire(&dir, Duration::from_secs(3)));
        std::thread::sleep(Duration::from_millis(50));
        drop(first);
        let _second = waiter.join().unwrap().unwrap();

        let err = FileLock::acquire(tmp.path(), Duration::from_millis(50))
            .err()
            .unwrap();
        assert!(matches!(err, LockError::Busy { .. }));
    }

    #[test]
    fn missing_directory_is_a_create_error() {
        let tmp = TempDir::new().unwrap();
        let err = FileLock::acquire_default(&tmp.path().join("nope"))
            .err()
            .unwrap();
        assert!(matches!(err, LockError::CreateError { .. }));
    }
}
