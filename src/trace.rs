use lazy_static::lazy_static;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

/// Environment variable that switches on tracing for [`crate::prettify`].
pub const DEBUG_ENV: &str = "GOTESTDOX_DEBUG";

lazy_static! {
    static ref DEBUG_SINK: Mutex<Box<dyn Write + Send>> = Mutex::new(Box::new(io::stderr()));
}

/// True when `GOTESTDOX_DEBUG` is set to a non-empty value.
pub fn debug_enabled() -> bool {
    std::env::var_os(DEBUG_ENV).is_some_and(|value| !value.is_empty())
}

/// Replace the process-wide stream that trace output goes to when
/// `GOTESTDOX_DEBUG` is set. Defaults to standard error.
pub fn set_debug_writer<W: Write + Send + 'static>(writer: W) {
    *lock_sink() = Box::new(writer);
}

/// Point the process-wide trace stream back at standard error.
pub fn reset_debug_writer() {
    set_debug_writer(io::stderr());
}

fn lock_sink() -> MutexGuard<'static, Box<dyn Write + Send>> {
    // Poisoning only means another tracer panicked mid-line
    DEBUG_SINK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Handle to the process-wide trace stream.
///
/// Every `write_all` takes the lock once, so lines written through it by
/// concurrent callers never interleave.
pub struct DebugWriter;

impl Write for DebugWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock_sink().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        lock_sink().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        lock_sink().flush()
    }
}

/// Per-invocation trace output. Disabled tracers skip formatting entirely.
pub struct Tracer<'a> {
    out: Option<&'a mut dyn Write>,
}

impl<'a> Tracer<'a> {
    pub fn to(out: &'a mut dyn Write) -> Self {
        Self { out: Some(out) }
    }

    pub fn disabled() -> Self {
        Self { out: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Some(out) = self.out.as_mut() {
            let line = format!("{}\n", args);
            // Write errors are dropped
            let _ = out.write_all(line.as_bytes());
        }
    }
}
