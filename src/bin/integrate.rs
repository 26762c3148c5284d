use sampfilt::*;

fn main() -> anyhow::Result<()> {
    let matches = cli::setup(clap::App::new("integrate"))
        .about("running integral of a stream, using dt = 1 / rate")
        .get_matches();

    cli::run(&matches, filter::Integral)
}
