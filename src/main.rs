//! logwash - washed git history in the terminal
//!
//! Binary entry point for the TUI application and the plain printer.

use std::io::{self, Write};

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use logwash::app::{self, App};
use logwash::cli::Cli;
use logwash::config::Config;
use logwash::logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let log_file = logging::log_file_path(cli.log_file.as_deref());
    logging::init(log_file.as_deref(), !cli.print);

    let config = Config::load(cli.config.as_deref())?;
    let options = cli.app_options(&config)?;
    let source = cli.source()?;

    if cli.print {
        let output = app::produce(&source, &options)?;
        let margin = config.margin.visible.then_some(&options.margin);
        let now = chrono::Utc::now().timestamp();
        let mut stdout = io::stdout().lock();
        for line in app::render_plain(&output, margin, now) {
            writeln!(stdout, "{}", line)?;
        }
        return Ok(());
    }

    let app = App::new(source, options);
    let terminal = ratatui::init();
    let _guard = scopeguard::guard((), |_| ratatui::restore());
    run(terminal, app)
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            app.on_key_event(key);
        }
        _ => {}
    }
    Ok(())
}
