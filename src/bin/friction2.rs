use sampfilt::*;

fn main() -> anyhow::Result<()> {
    let matches = cli::setup(clap::App::new("friction2"))
        .about("apply friction proportional to velocity")
        .arg(cli::param("COEFFICIENT", 1, "fraction of velocity lost per sample"))
        .get_matches();

    use clap::value_t_or_exit;
    let coefficient = value_t_or_exit!(matches, "COEFFICIENT", f32);
    cli::run(&matches, filter::Linear::new(coefficient))
}
