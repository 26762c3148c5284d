use sampfilt::*;

fn main() -> anyhow::Result<()> {
    let matches = cli::setup(clap::App::new("friction1"))
        .about("apply static and kinetic friction to a velocity stream")
        .arg(cli::param("STATIC", 1, "velocities this slow stick to zero"))
        .arg(cli::param("KINETIC", 2, "speed lost by faster velocities"))
        .get_matches();

    use clap::value_t_or_exit;
    let threshold = value_t_or_exit!(matches, "STATIC", f32);
    let kinetic = value_t_or_exit!(matches, "KINETIC", f32);
    cli::run(&matches, filter::Coulomb::new(threshold, kinetic))
}
