use sampfilt::*;

fn main() -> anyhow::Result<()> {
    let matches = cli::setup(clap::App::new("clip"))
        .about("limit a stream of samples to a range")
        .arg(cli::param("MIN", 1, "the lowest value let through"))
        .arg(cli::param("MAX", 2, "the highest value let through"))
        .get_matches();

    let clip = cli::clip_range(&matches).unwrap_or_else(|e| e.exit());
    cli::run(&matches, clip)
}
