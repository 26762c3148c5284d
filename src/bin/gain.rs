use sampfilt::*;

fn main() -> anyhow::Result<()> {
    let matches = cli::setup(clap::App::new("gain"))
        .about("scale a stream of samples")
        .arg(cli::param("FACTOR", 1, "the factor to multiply by"))
        .get_matches();

    use clap::value_t_or_exit;
    let factor = value_t_or_exit!(matches, "FACTOR", f32);
    cli::run(&matches, filter::Gain::new(factor))
}
