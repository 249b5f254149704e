//! joe: logchamp
//! joe: call it logchamp
//! joe: please

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;

use colored::{Color, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record};
use time::macros::format_description;

struct Logger {
    file: Mutex<File>,
}

impl Logger {
    fn new(filename: &str) -> io::Result<Self> {
        let file = OpenOptions::new().write(true).truncate(true).create(true).open(filename)?;
        Ok(Self { file: Mutex::new(file) })
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let max_level = match metadata.target().split("::").next() {
            Some("tg_links") => Level::Debug,
            _ => Level::Info,
        };
        metadata.level() <= max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let Ok(timestamp) = time::OffsetDateTime::now_utc()
            .format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        else {
            return;
        };
        let target = record.target();
        let level = record.level().as_str();
        let args = record.args();

        let color = match record.level() {
            Level::Error => Color::BrightRed,
            Level::Warn => Color::BrightYellow,
            Level::Info => Color::BrightCyan,
            Level::Debug => Color::BrightMagenta,
            Level::Trace => Color::BrightGreen,
        };

        // stdout belongs to command output
        eprintln!("{} {} {args}", timestamp.color(Color::BrightBlack), level.color(color));
        if let Ok(mut file) = self.file.lock() {
            writeln!(file, "{timestamp} [{target} {level}] {args}").ok();
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            file.flush().ok();
        }
    }
}

pub fn init(filename: &str) -> io::Result<()> {
    log::set_boxed_logger(Box::new(Logger::new(filename)?)).map_err(io::Error::other)?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
