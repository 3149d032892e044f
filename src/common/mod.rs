pub mod io;

use std::time::{Duration, Instant};

/// Reset SIGPIPE to default behavior (SIG_DFL).
/// Rust ignores SIGPIPE by default, so `fcount file | head -1` would otherwise
/// surface EPIPE as an error instead of exiting quietly.
#[inline]
pub fn reset_sigpipe() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

/// Format an IO error message without the "(os error N)" suffix.
/// e.g. "No such file or directory" rather than "No such file or directory (os error 2)".
pub fn io_error_msg(e: &std::io::Error) -> String {
    if let Some(raw) = e.raw_os_error() {
        let os_err = std::io::Error::from_raw_os_error(raw);
        let msg = format!("{}", os_err);
        msg.replace(&format!(" (os error {})", raw), "")
    } else {
        format!("{}", e)
    }
}

/// Run `f` and return its value together with the wall-clock time it took.
#[inline]
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_msg_strips_os_suffix() {
        let e = std::io::Error::from_raw_os_error(libc::ENOENT);
        let msg = io_error_msg(&e);
        assert!(!msg.contains("os error"), "got {msg:?}");
        assert!(!msg.is_empty());
    }

    #[test]
    fn test_io_error_msg_custom_error() {
        let e = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(io_error_msg(&e), "boom");
    }

    #[test]
    fn test_timed_returns_value() {
        let (v, elapsed) = timed(|| 40 + 2);
        assert_eq!(v, 42);
        assert!(elapsed.as_secs() < 60);
    }
}
