//! Plain text rendering of records.
//!
//! Each record becomes one line, `"<id> <first> <last> <gpa:.2> <major>\n"`.
//! Output goes to any [`Write`] implementation; [`Sink`] covers the two
//! destinations the binary uses.

use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::Path;

/// Where formatted records are written.
pub enum Sink {
    Console(Stdout),
    File(File),
}

impl Sink {
    pub fn console() -> Self {
        Sink::Console(io::stdout())
    }

    /// Creates (or truncates) the file at `path`.
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Sink::File(File::create(path)?))
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Console(out) => out.write(buf),
            Sink::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Console(out) => out.flush(),
            Sink::File(file) => file.flush(),
        }
    }
}

pub fn print_record<W: Write>(record: &Record, sink: &mut W) -> Result<()> {
    writeln!(sink, "{}", record)?;
    Ok(())
}

pub fn print_records<'a, W, I>(records: I, sink: &mut W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    for record in records {
        print_record(record, sink)?;
    }
    Ok(())
}

/// Writes every record of the store in traversal order.
pub fn print_all<W: Write>(store: &RecordStore, sink: &mut W) -> Result<()> {
    print_records(store, sink)
}
