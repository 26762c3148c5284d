use sampfilt::*;

fn main() -> anyhow::Result<()> {
    let names = transfer::names();
    let default_iterations = transfer::ITERATIONS.to_string();
    let matches = clap::App::new("transfer")
        .about("apply a named transfer function to a value, repeatedly")
        .setting(clap::AppSettings::AllowNegativeNumbers)
        .arg(clap::Arg::with_name("FUNCTION")
             .help("the transfer function to apply")
             .possible_values(&names)
             .default_value("identical")
             .index(1))
        .arg(clap::Arg::with_name("input")
             .short("i")
             .long("input")
             .value_name("VALUE")
             .help("the starting value")
             .default_value("1.0")
             .takes_value(true))
        .arg(clap::Arg::with_name("iterations")
             .short("n")
             .long("iterations")
             .value_name("COUNT")
             .help("how many times to apply the function")
             .default_value(&default_iterations)
             .takes_value(true))
        .get_matches();

    use clap::value_t_or_exit;
    let name = matches.value_of("FUNCTION").unwrap_or("identical");
    let func = transfer::lookup(name)
        .ok_or_else(|| anyhow::anyhow!("unknown transfer function {:?}", name))?;
    let input = value_t_or_exit!(matches, "input", f32);
    let iterations = value_t_or_exit!(matches, "iterations", usize);

    let output = transfer::iterate(func, input, iterations);
    println!("{}", transfer::report(output));
    Ok(())
}
