use clap::Parser;
use stint::cli::commands::Cli;
use stint::io::config_io::load_config;

fn main() {
    let cli = Cli::parse();
    let data_dir = cli.data_dir();

    if let Err(e) = stint::logging::init_logging(&data_dir, cli.verbose) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let config = match load_config(cli.config.as_deref(), &data_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = stint::tui::run(&data_dir, config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
