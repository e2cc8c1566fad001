use caretaker::cli;
use caretaker::ui::{ColorMode, Console, Verbosity};

fn main() {
    if let Err(err) = cli::run() {
        let console = Console::new(Verbosity::Normal, ColorMode::Auto);
        console.error(format!("{err:#}"));
        std::process::exit(cli::exit_code(&err));
    }
}
