use sampfilt::cli::{self, Options};
use sampfilt::filter;
use sampfilt::stdio::SampleFormat;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, BufReader, Cursor, Read, Write};
use std::num::NonZeroUsize;

fn run_text<D>(input: &str, options: &Options, design: D) -> String
where
    D: sampfilt::FilterDesign<f32, Output=f32>,
    D::Filter: sampfilt::Filter<f32, Output=f32>,
{
    let mut out = Vec::new();
    cli::process(Cursor::new(input), &mut out, options, design).unwrap();
    String::from_utf8(out).unwrap()
}

// hands out `data`, then fails every read
struct FailsAfter {
    data: Cursor<&'static [u8]>,
}

impl Read for FailsAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::Other, "device unplugged")),
            n => Ok(n),
        }
    }
}

// a reader on the other end of a pipe that has gone away
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FullDisk;

impl Write for FullDisk {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "no space left"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn values(text: &str) -> Vec<f32> {
    text.split_whitespace().map(|t| t.parse().unwrap()).collect()
}

#[test]
fn delay_two() {
    let d = filter::Delay(NonZeroUsize::new(2).unwrap());
    let out = run_text("1 2 3 4", &Options::default(), d);
    assert_eq!(out, "0.0\n0.0\n1.0\n2.0\n");
}

#[test]
fn delay_keeps_length_across_lines() {
    let d = filter::Delay(NonZeroUsize::new(3).unwrap());
    let out = run_text("5\n6\n7\n8\n9\n", &Options::default(), d);
    assert_eq!(values(&out), vec![0.0, 0.0, 0.0, 5.0, 6.0]);
}

#[test]
fn friction2_example() {
    let out = run_text("10", &Options::default(), filter::Linear::new(0.1));
    assert_eq!(out, "9.0\n");
}

#[test]
fn friction1_stream() {
    let out = run_text("0.2 -0.2 1.5 -1.5", &Options::default(),
                       filter::Coulomb::new(0.5, 0.5));
    assert_eq!(values(&out), vec![0.0, 0.0, 1.0, -1.0]);
}

#[test]
fn friction3_stream() {
    let out = run_text("2 -2", &Options::default(), filter::Quadratic::new(0.25));
    assert_eq!(values(&out), vec![1.0, -1.0]);
}

#[test]
fn fixed_precision() {
    let options = Options { precision: Some(6), ..Options::default() };
    let out = run_text("10", &options, filter::Linear::new(0.1));
    assert_eq!(out, "9.000000\n");
}

#[test]
fn length_bounds_output() {
    let options = Options { rate: 2.0, length: Some(1.5), ..Options::default() };
    let out = run_text("1 2 3 4 5 6", &options, filter::Gain::new(1.0));
    assert_eq!(values(&out), vec![1.0, 2.0, 3.0]);
}

#[test]
fn integrate_uses_rate() {
    let options = Options { rate: 10.0, ..Options::default() };
    let out = run_text("1 1 1 1", &options, filter::Integral);
    let got = values(&out);
    let want = [0.1, 0.2, 0.3, 0.4];
    assert_eq!(got.len(), want.len());
    for (g, w) in got.iter().zip(want.iter()) {
        assert!((g - w).abs() < 1e-6, "{} != {}", g, w);
    }
}

#[test]
fn differentiate_and_clip_and_iir() {
    let out = run_text("1 3 2", &Options::default(), filter::Derivative);
    assert_eq!(values(&out), vec![1.0, 2.0, -1.0]);

    let clip = filter::Clip::new(-1.0, 1.0).unwrap();
    let out = run_text("-4 0.5 4", &Options::default(), clip);
    assert_eq!(values(&out), vec![-1.0, 0.5, 1.0]);

    let out = run_text("1 0 0", &Options::default(), filter::Iir1::new(1.0, 0.5));
    assert_eq!(values(&out), vec![1.0, 0.5, 0.25]);
}

#[test]
fn binary_matches_text() {
    let input = [1.0f32, -2.5, 3.0, 0.125];
    let mut bytes = Vec::new();
    for v in input.iter() {
        bytes.write_f32::<LittleEndian>(*v).unwrap();
    }

    let options = Options { format: SampleFormat::F32Le, ..Options::default() };
    let mut out = Vec::new();
    let n = cli::process(Cursor::new(bytes), &mut out, &options,
                         filter::Linear::new(0.5)).unwrap();
    assert_eq!(n, 4);

    let mut reader = Cursor::new(out);
    let mut got = Vec::new();
    while let Ok(v) = reader.read_f32::<LittleEndian>() {
        got.push(v);
    }

    let text = run_text("1 -2.5 3 0.125", &Options::default(), filter::Linear::new(0.5));
    assert_eq!(got, values(&text));
}

#[test]
fn strict_fails_after_writing_earlier_samples() {
    let mut out = Vec::new();
    let err = cli::process(Cursor::new("1 2 nope 4"), &mut out,
                           &Options::default(), filter::Gain::new(2.0))
        .unwrap_err();
    assert!(err.to_string().contains("nope"), "{}", err);
    assert_eq!(String::from_utf8(out).unwrap(), "2.0\n4.0\n");
}

#[test]
fn lenient_reprocesses_last_value() {
    let options = Options { lenient: true, ..Options::default() };
    let out = run_text("1 2 nope 4", &options, filter::Gain::new(2.0));
    assert_eq!(values(&out), vec![2.0, 4.0, 4.0, 8.0]);
}

#[test]
fn empty_input_writes_nothing() {
    let d = filter::Delay(NonZeroUsize::new(4).unwrap());
    let mut out = Vec::new();
    let n = cli::process(Cursor::new(""), &mut out, &Options::default(), d).unwrap();
    assert_eq!(n, 0);
    assert!(out.is_empty());
}

#[test]
fn read_error_keeps_earlier_samples() {
    let input = BufReader::new(FailsAfter { data: Cursor::new(&b"1 2 3 "[..]) });
    let mut out = Vec::new();
    let err = cli::process(input, &mut out, &Options::default(),
                           filter::Gain::new(1.0))
        .unwrap_err();
    assert!(format!("{:#}", err).contains("device unplugged"), "{:#}", err);
    assert_eq!(String::from_utf8(out).unwrap(), "1.0\n2.0\n3.0\n");
}

#[test]
fn lenient_survives_invalid_utf8() {
    let options = Options { lenient: true, ..Options::default() };
    let mut out = Vec::new();
    cli::process(Cursor::new(&b"1 2 \xff 3\n4\n"[..]), &mut out, &options,
                 filter::Gain::new(1.0)).unwrap();
    assert_eq!(values(&String::from_utf8(out).unwrap()),
               vec![1.0, 2.0, 2.0, 3.0, 4.0]);
}

#[test]
fn closed_pipe_is_normal_end() {
    let d = filter::Delay(NonZeroUsize::new(2).unwrap());
    let n = cli::process(Cursor::new("1 2 3 4"), ClosedPipe, &Options::default(), d)
        .unwrap();
    assert_eq!(n, 4);
}

#[test]
fn other_write_errors_fail() {
    let err = cli::process(Cursor::new("1 2"), FullDisk, &Options::default(),
                           filter::Gain::new(1.0))
        .unwrap_err();
    assert!(err.to_string().contains("failed to write samples"), "{}", err);
}
