use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log files larger than this are trimmed when logging starts
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Tail kept after trimming
const KEEP_SIZE: u64 = 1024 * 1024;

const TRIM_MARKER: &[u8] = b"--- munn: earlier log lines dropped ---\n";

/// Cut `path` down to its last `keep` bytes once it grows past `limit`.
///
/// The kept tail starts on a line boundary and is preceded by a marker line.
/// Returns whether the file was trimmed; a missing file is not an error.
fn trim_log(path: &Path, limit: u64, keep: u64) -> io::Result<bool> {
    let len = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= limit {
        return Ok(false);
    }

    let mut tail = Vec::with_capacity(keep as usize);
    let mut file = File::open(path)?;
    file.seek(SeekFrom::End(-(keep.min(len) as i64)))?;
    file.read_to_end(&mut tail)?;

    let first_full_line = tail.iter().position(|&b| b == b'\n').map_or(0, |nl| nl + 1);

    let mut file = File::create(path)?;
    file.write_all(TRIM_MARKER)?;
    file.write_all(&tail[first_full_line..])?;
    Ok(true)
}

/// Where log lines go: stderr, or a file shared by every writer
#[derive(Clone)]
enum LogTarget {
    Stderr,
    File(Arc<Mutex<File>>),
}

enum LogWriter {
    Stderr(std::io::Stderr),
    File(Arc<Mutex<File>>),
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            LogWriter::Stderr(stderr) => stderr.write(buf),
            LogWriter::File(file) => file.lock().unwrap_or_else(PoisonError::into_inner).write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            LogWriter::Stderr(stderr) => stderr.flush(),
            LogWriter::File(file) => file.lock().unwrap_or_else(PoisonError::into_inner).flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for LogTarget {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        match self {
            LogTarget::Stderr => LogWriter::Stderr(std::io::stderr()),
            LogTarget::File(file) => LogWriter::File(Arc::clone(file)),
        }
    }
}

/// Filter used when `RUST_LOG` is not set. `--debug` opens up the engine's
/// narration, which it emits at debug level.
fn default_filter(level: &str, debug: bool) -> String {
    let core = if debug { "debug" } else { "warn" };
    format!("munn={level},munn_core={core}")
}

/// Initialize logging to stderr, or to `log_file` with size-based rotation.
///
/// When the log file exceeds 5MB, older entries are removed keeping only the
/// last 1MB. `RUST_LOG` takes precedence over `level` and `debug`.
pub fn init_logging(level: &str, debug: bool, log_file: Option<&Path>) -> color_eyre::Result<()> {
    let target = match log_file {
        Some(path) => {
            if let Err(e) = trim_log(path, MAX_LOG_SIZE, KEEP_SIZE) {
                eprintln!("warning: could not trim {}: {e}", path.display());
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            LogTarget::File(Arc::new(Mutex::new(file)))
        }
        None => LogTarget::Stderr,
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level, debug)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(target)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    match log_file {
        Some(path) => tracing::info!(log_path = %path.display(), "munn logging initialized"),
        None => tracing::info!("munn logging initialized"),
    }
    Ok(())
}
