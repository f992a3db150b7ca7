//! Logger setup for the command-line binary.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Copies every log line to stderr and to a file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

/// Installs the global logger: `info` by default, `debug` when asked, `RUST_LOG` on top.
///
/// With a log directory, lines also go to `<dir>/<unix-seconds>-main.log`.
pub fn init(debug: bool, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let level = if debug { LevelFilter::Debug } else { LevelFilter::Info };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(buf, "{}\t{}\t{}", buf.timestamp_millis(), record.level(), record.args())
        });

    if let Some(dir) = log_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating log directory {}", dir.display()))?;
        let started = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
        let path = dir.join(format!("{}-main.log", started));
        let file = File::create(&path).with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(TeeWriter { file })));
    }

    builder.try_init().context("installing logger")?;
    Ok(())
}
