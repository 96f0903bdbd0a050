use clap::Parser;
use todoflow::cli::commands::Cli;
use todoflow::io::config_io::load_config;
use todoflow::io::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    // Guard must outlive the TUI so buffered log lines get flushed
    let _log_guard = match cli.log_file.as_deref().map(init_logging).transpose() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // Config errors surface before the terminal is taken over
    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(view) = cli.view {
        config.ui.default_view = view;
    }

    if let Err(e) = todoflow::tui::run(config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
