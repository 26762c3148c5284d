use sampfilt::*;

fn main() -> anyhow::Result<()> {
    let matches = cli::setup(clap::App::new("iir1"))
        .about("first order recursive filter, y = a * x + b * y_prev")
        .arg(cli::param("A", 1, "weight of the current input"))
        .arg(cli::param("B", 2, "weight of the previous output"))
        .get_matches();

    use clap::value_t_or_exit;
    let a = value_t_or_exit!(matches, "A", f32);
    let b = value_t_or_exit!(matches, "B", f32);
    cli::run(&matches, filter::Iir1::new(a, b))
}
