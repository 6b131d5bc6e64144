// indirection: pointer-style vs reference-style operations, recorded and replayed

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use indirection::config::{usage, Config, Mode};
use indirection::ui::App;
use indirection::walkthrough::Walkthrough;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "indirection".to_string());

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage(&program_name));
            std::process::exit(1);
        }
    };

    if config.show_help {
        println!("{}", usage(&program_name));
        return Ok(());
    }

    let names: Vec<&str> = config.scenarios.iter().map(|s| s.name()).collect();
    eprintln!("Recording scenarios: {}", names.join(", "));

    let mut walkthrough = Walkthrough::new(config.snapshot_limit);
    let result = walkthrough.run(&config.scenarios);
    match &result {
        Ok(()) => {
            eprintln!("Recording completed successfully.");
            eprintln!(
                "Total snapshots: {} ({} bytes)",
                walkthrough.total_snapshots(),
                walkthrough.memory_usage()
            );
        }
        Err(e) => {
            eprintln!("Walkthrough error: {}", e);
        }
    }

    match config.mode {
        Mode::Echo => {
            for line in walkthrough.output() {
                println!("{}", line);
            }
            if result.is_err() {
                std::process::exit(1);
            }
        }
        Mode::Tui => {
            if result.is_err() {
                eprintln!("Entering TUI with partial history...");
            }
            if let Err(e) = walkthrough.rewind_to_start() {
                eprintln!("Warning: Failed to rewind to start: {}", e);
            }
            run_tui(walkthrough)?;
        }
    }

    Ok(())
}

fn run_tui(walkthrough: Walkthrough) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(walkthrough);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
