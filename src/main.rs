//! main.rs
//! Entry point for dr

use dr_tui::app::AppState;
use dr_tui::core::{load_dir, terminal};
use dr_tui::utils::cli::{CliAction, handle_args, program_name};

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[dr] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let args = match handle_args() {
        CliAction::Run(args) => args,
        CliAction::Exit => return Ok(()),
        CliAction::Fail => std::process::exit(2),
    };

    let config = args.to_config();
    let target = args.resolved_path();

    let snapshot = match load_dir(&target) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            println!(
                "{}: error {}: {}",
                program_name(),
                err.os_code(),
                err.os_message()
            );
            std::process::exit(1);
        }
    };

    if config.banner() {
        println!("dr {}: listing {}", env!("CARGO_PKG_VERSION"), target.display());
    }

    if config.list_mode() {
        for entry in snapshot.iter() {
            println!("{}", entry.name_str());
        }
        println!("listed: {} entries", snapshot.len());
        return Ok(());
    }

    let mut app = AppState::new(snapshot);
    terminal::run_terminal(&mut app)
}
