use sampfilt::*;

fn main() -> anyhow::Result<()> {
    let matches = cli::setup(clap::App::new("friction3"))
        .about("apply drag proportional to the square of velocity")
        .arg(cli::param("COEFFICIENT", 1, "the drag coefficient"))
        .get_matches();

    use clap::value_t_or_exit;
    let coefficient = value_t_or_exit!(matches, "COEFFICIENT", f32);
    cli::run(&matches, filter::Quadratic::new(coefficient))
}
