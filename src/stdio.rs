use super::signal::Signal;

use anyhow::{bail, Context};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::cell::RefCell;
use std::io::{self, BufRead, BufWriter, Write};
use std::rc::Rc;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    Text, // whitespace separated decimals, one per line on output
    F32Le, // raw little-endian f32
}

impl SampleFormat {
    pub const NAMES: &'static [&'static str] = &["text", "f32le"];
}

impl Default for SampleFormat {
    fn default() -> Self {
        SampleFormat::Text
    }
}

impl std::str::FromStr for SampleFormat {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(SampleFormat::Text),
            "f32le" => Ok(SampleFormat::F32Le),
            _ => bail!("unknown sample format {:?}", s),
        }
    }
}

/// Shared slot where a `Scan` leaves the error that ended it.
#[derive(Clone, Debug, Default)]
pub struct ScanStatus {
    error: Rc<RefCell<Option<anyhow::Error>>>,
}

impl ScanStatus {
    fn fail(&self, err: anyhow::Error) {
        *self.error.borrow_mut() = Some(err);
    }

    /// Surfaces the error, if any, that cut the signal short.
    pub fn check(&self) -> anyhow::Result<()> {
        match self.error.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Longest text token kept; anything longer is reported as malformed.
const MAX_TOKEN: usize = 256;

/// Reads samples from a byte stream.
///
/// A signal can only end, not fail, so read and parse errors end the
/// signal and are parked in the `ScanStatus` returned by `status()`.
/// Text samples come out as soon as the whitespace ending their token
/// arrives; only the current token is buffered.
#[derive(Debug)]
pub struct Scan<R> {
    reader: R,
    format: SampleFormat,
    rate: f32,
    lenient: bool,

    token: Vec<u8>,
    position: usize,
    last: f32,
    status: ScanStatus,
    failed: bool,
}

impl<R> Scan<R> where R: BufRead {
    pub fn new(reader: R, format: SampleFormat, rate: f32) -> Self {
        Scan {
            reader,
            format,
            rate,
            lenient: false,
            token: Vec::new(),
            position: 0,
            last: 0.0,
            status: ScanStatus::default(),
            failed: false,
        }
    }

    /// Malformed text tokens repeat the previous sample instead of
    /// failing.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    pub fn status(&self) -> ScanStatus {
        self.status.clone()
    }

    // fills self.token, false at end of input
    fn next_token(&mut self) -> io::Result<bool> {
        self.token.clear();
        loop {
            let (used, complete) = {
                let buf = match self.reader.fill_buf() {
                    Ok(buf) => buf,
                    Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if buf.is_empty() {
                    return Ok(!self.token.is_empty());
                }
                let mut used = 0;
                let mut complete = false;
                for &b in buf {
                    used += 1;
                    if b.is_ascii_whitespace() {
                        if !self.token.is_empty() {
                            complete = true;
                            break;
                        }
                    } else if self.token.len() <= MAX_TOKEN {
                        self.token.push(b);
                    }
                }
                (used, complete)
            };
            self.reader.consume(used);
            if complete {
                return Ok(true);
            }
        }
    }

    fn parse_token(&self) -> Option<f32> {
        if self.token.len() > MAX_TOKEN {
            return None;
        }
        std::str::from_utf8(&self.token).ok()?.parse().ok()
    }

    fn read_text(&mut self) -> anyhow::Result<Option<f32>> {
        if !self.next_token().context("failed to read samples")? {
            return Ok(None);
        }
        self.position += 1;
        if let Some(v) = self.parse_token() {
            self.last = v;
            return Ok(Some(v));
        }

        let token = String::from_utf8_lossy(&self.token);
        if self.lenient {
            eprintln!("warning: invalid sample {:?} at token {}, repeating {:?}",
                      token, self.position, self.last);
            Ok(Some(self.last))
        } else {
            bail!("invalid sample {:?} at token {}", token, self.position);
        }
    }

    fn read_binary(&mut self) -> anyhow::Result<Option<f32>> {
        match self.reader.read_f32::<LittleEndian>() {
            Ok(v) => Ok(Some(v)),
            // also covers a trailing partial sample
            Err(ref e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e).context("failed to read samples"),
        }
    }
}

impl<R> Signal for Scan<R> where R: BufRead {
    type Sample = f32;
    fn next(&mut self) -> Option<Self::Sample> {
        if self.failed {
            return None;
        }
        let read = match self.format {
            SampleFormat::Text => self.read_text(),
            SampleFormat::F32Le => self.read_binary(),
        };
        read.unwrap_or_else(|err| {
            self.failed = true;
            self.status.fail(err);
            None
        })
    }
    fn rate(&self) -> f32 {
        self.rate
    }
}

/// Writes samples to a byte stream.
#[derive(Debug)]
pub struct Sink<W: Write> {
    writer: BufWriter<W>,
    format: SampleFormat,
    precision: Option<usize>,
    written: usize,
}

impl<W> Sink<W> where W: Write {
    pub fn new(writer: W, format: SampleFormat) -> Self {
        Sink {
            writer: BufWriter::new(writer),
            format,
            precision: None,
            written: 0,
        }
    }

    /// Fixed number of decimals for text output. Without it, samples are
    /// written in the shortest form that reads back to the same value.
    pub fn precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    pub fn write(&mut self, value: f32) -> io::Result<()> {
        match (self.format, self.precision) {
            (SampleFormat::Text, Some(p)) => writeln!(self.writer, "{:.*}", p, value),
            (SampleFormat::Text, None) => writeln!(self.writer, "{:?}", value),
            (SampleFormat::F32Le, _) => self.writer.write_f32::<LittleEndian>(value),
        }?;
        self.written += 1;
        Ok(())
    }

    /// Samples accepted so far, buffered or not.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Writes every remaining sample of `signal`, returning how many.
    pub fn drain<S>(&mut self, mut signal: S) -> io::Result<usize>
    where
        S: Signal<Sample=f32>,
    {
        let mut count = 0;
        while let Some(v) = signal.next() {
            self.write(v)?;
            count += 1;
        }
        Ok(count)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn finish(self) -> io::Result<W> {
        self.writer.into_inner().map_err(io::Error::from)
    }
}
