use cidr_calculator::cli::{execute, Cli};
use cidr_calculator::config::Config;
use cidr_calculator::output::write_error;
use clap::Parser;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    let config = Config::load()?;
    config.init_logging()?;
    config.apply_color();
    //
    log::info!("#Start main()");

    let mut input = std::io::stdin().lock();
    let mut out = std::io::stdout().lock();
    if let Err(e) = execute(&cli, &mut input, &mut out) {
        log::error!("{e}");
        write_error(&mut std::io::stderr(), &e)?;
        std::process::exit(1);
    }

    log::info!("#End main()");
    Ok(())
}
