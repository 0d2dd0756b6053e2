use std::io::stdout;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use geocomplete::autocomplete::AutocompleteOptions;
use geocomplete::config;
use geocomplete::provider::GeocodeClient;
use geocomplete::worker::spawn_worker;

mod app;
mod cli;
mod layout;
mod logging;
mod widgets;

use app::{App, Status};
use cli::Cli;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };
    cli.apply(&mut config);

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let client = GeocodeClient::from_config(&config.provider)?;
    let (mut worker, channels) = spawn_worker(client)?;

    let mut app = App::new(AutocompleteOptions::from(&config));
    app.attach_worker(channels);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut app);

    // Restore terminal before reporting anything
    execute!(stdout(), DisableMouseCapture)?;
    ratatui::restore();

    app.controller.shutdown();
    worker.shutdown();
    result?;

    if let Some(Status::Selected {
        description,
        place_id,
    }) = &app.status
    {
        println!("{}\t{}", description, place_id);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout())? {
            app.handle_event(event::read()?);
        }
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
