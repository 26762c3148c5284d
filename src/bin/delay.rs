use sampfilt::*;

use std::num::NonZeroUsize;

fn main() -> anyhow::Result<()> {
    let matches = cli::setup(clap::App::new("delay"))
        .about("delay a stream of samples by a fixed number of samples")
        .arg(cli::param("N", 1, "the delay length, in samples"))
        .get_matches();

    use clap::value_t_or_exit;
    let length = value_t_or_exit!(matches, "N", NonZeroUsize);
    cli::run(&matches, filter::Delay(length))
}
