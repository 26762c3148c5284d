use crate::filter::{Clip, Filter, FilterDesign};
use crate::signal::Signal;
use crate::stdio::{SampleFormat, Scan, Sink};

use anyhow::Context;
use clap::value_t;
use std::io::{self, BufRead, Write};

/// Settings shared by every stream filter.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub format: SampleFormat,
    pub rate: f32,
    pub length: Option<f32>,
    pub precision: Option<usize>,
    pub lenient: bool,
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            format: SampleFormat::Text,
            rate: 1.0,
            length: None,
            precision: None,
            lenient: false,
            verbose: false,
        }
    }
}

impl Options {
    pub fn from_matches(matches: &clap::ArgMatches) -> clap::Result<Self> {
        let format = matches.value_of("format").unwrap_or("text")
            .parse::<SampleFormat>()
            .map_err(|e| clap::Error::value_validation_auto(e.to_string()))?;
        let length = if matches.is_present("length") {
            Some(value_t!(matches, "length", f32)?)
        } else {
            None
        };
        let precision = if matches.is_present("precision") {
            Some(value_t!(matches, "precision", usize)?)
        } else {
            None
        };
        Ok(Options {
            format,
            rate: value_t!(matches, "rate", f32)?,
            length,
            precision,
            lenient: matches.is_present("lenient"),
            verbose: matches.is_present("verbose"),
        })
    }
}

fn positive(v: String) -> Result<(), String> {
    match v.parse::<f32>() {
        Ok(x) if x > 0.0 && x.is_finite() => Ok(()),
        _ => Err(format!("expected a positive number, got {:?}", v)),
    }
}

fn non_negative(v: String) -> Result<(), String> {
    match v.parse::<f32>() {
        Ok(x) if x >= 0.0 && x.is_finite() => Ok(()),
        _ => Err(format!("expected a non-negative number, got {:?}", v)),
    }
}

pub fn setup<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
    app.setting(clap::AppSettings::AllowNegativeNumbers)
        .arg(clap::Arg::with_name("format")
             .short("f")
             .long("format")
             .value_name("FORMAT")
             .help("sample encoding on stdin and stdout")
             .possible_values(SampleFormat::NAMES)
             .default_value("text")
             .takes_value(true))
        .arg(clap::Arg::with_name("rate")
             .short("r")
             .long("rate")
             .value_name("HZ")
             .help("sample rate of the stream")
             .default_value("1")
             .validator(positive)
             .takes_value(true))
        .arg(clap::Arg::with_name("length")
             .short("l")
             .long("length")
             .value_name("SECONDS")
             .help("stop after this much signal")
             .validator(non_negative)
             .takes_value(true))
        .arg(clap::Arg::with_name("precision")
             .short("p")
             .long("precision")
             .value_name("DIGITS")
             .help("decimals to print for text output")
             .takes_value(true))
        .arg(clap::Arg::with_name("lenient")
             .long("lenient")
             .help("repeat the previous sample on malformed input"))
        .arg(clap::Arg::with_name("verbose")
             .short("v")
             .long("verbose")
             .help("report the number of samples processed on stderr"))
}

/// A required positional numeric parameter.
pub fn param<'a, 'b>(name: &'a str, index: u64, help: &'b str) -> clap::Arg<'a, 'b> {
    clap::Arg::with_name(name)
        .required(true)
        .help(help)
        .index(index)
}

/// Reads the `MIN` and `MAX` parameters into a clip range.
pub fn clip_range(matches: &clap::ArgMatches) -> clap::Result<Clip<f32>> {
    let min = value_t!(matches, "MIN", f32)?;
    let max = value_t!(matches, "MAX", f32)?;
    Clip::new(min, max).ok_or_else(|| clap::Error::with_description(
        &format!("empty range: MIN ({}) is greater than MAX ({})", min, max),
        clap::ErrorKind::ValueValidation,
    ))
}

/// Runs `design` over every sample from `input`, writing to `output`.
///
/// Samples produced before a read error are still written out before the
/// error is returned. A closed output pipe ends the run without error.
pub fn process<R, W, D>(input: R, output: W, options: &Options, design: D)
                        -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
    D: FilterDesign<f32, Output=f32>,
    D::Filter: Filter<f32, Output=f32>,
{
    let source = Scan::new(input, options.format, options.rate)
        .lenient(options.lenient);
    let status = source.status();
    let signal = source.filter(design);

    let mut sink = Sink::new(output, options.format)
        .precision(options.precision);
    let written = match options.length {
        Some(length) => sink.drain(signal.take(length)),
        None => sink.drain(signal),
    }.and_then(|_| sink.flush());

    match written {
        Ok(()) => {},
        Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => {
            return Ok(sink.written());
        },
        Err(e) => return Err(e).context("failed to write samples"),
    }

    status.check()?;
    Ok(sink.written())
}

/// Filters stdin to stdout with the options parsed by `setup`.
pub fn run<D>(matches: &clap::ArgMatches, design: D) -> anyhow::Result<()>
where
    D: FilterDesign<f32, Output=f32>,
    D::Filter: Filter<f32, Output=f32>,
{
    let options = Options::from_matches(matches).unwrap_or_else(|e| e.exit());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let count = process(stdin.lock(), stdout.lock(), &options, design)?;
    if options.verbose {
        eprintln!("processed {} samples", count);
    }
    Ok(())
}
