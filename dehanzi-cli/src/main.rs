use clap::Parser;
use dehanzi_core::{prompt_active, RenameError};
use std::io::{self, IsTerminal};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod cli;
mod prompt;
mod rename;

use cli::Cli;

const EXIT_INVALID_INPUT: i32 = 2;
const EXIT_INTERNAL: i32 = 3;
const EXIT_INTERRUPTED: i32 = 130;

/// Leave right away when the user is sitting at a prompt, otherwise let the
/// current run finish and report afterwards.
fn on_interrupt(interrupted: &AtomicBool) {
    if prompt_active() {
        eprintln!("\n\nOperation interrupted by user");
        process::exit(EXIT_INTERRUPTED);
    }
    interrupted.store(true, Ordering::SeqCst);
}

fn install_signal_handlers(interrupted: &Arc<AtomicBool>) {
    // Handle SIGINT (Ctrl-C)
    let interrupted_clone = Arc::clone(interrupted);
    if let Err(e) = ctrlc::set_handler(move || on_interrupt(&interrupted_clone)) {
        eprintln!("Warning: failed to set SIGINT handler: {e}");
    }

    // Handle SIGTERM on a dedicated thread so the handler may print and exit
    #[cfg(unix)]
    {
        use signal_hook::consts::SIGTERM;
        use signal_hook::iterator::Signals;

        match Signals::new([SIGTERM]) {
            Ok(mut signals) => {
                let interrupted_clone = Arc::clone(interrupted);
                std::thread::spawn(move || {
                    for _ in signals.forever() {
                        on_interrupt(&interrupted_clone);
                    }
                });
            },
            Err(e) => eprintln!("Warning: failed to set SIGTERM handler: {e}"),
        }
    }
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<RenameError>() {
        Some(e) if e.is_invalid_input() => EXIT_INVALID_INPUT,
        _ => EXIT_INTERNAL,
    }
}

fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    install_signal_handlers(&interrupted);

    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    let result = rename::handle_rename(&cli, use_color);

    // Check if we were interrupted during execution
    if interrupted.load(Ordering::SeqCst) {
        eprintln!("Operation interrupted by user");
        process::exit(EXIT_INTERRUPTED);
    }

    match result {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code_for(&e));
        },
    }
}
