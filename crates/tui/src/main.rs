use directories::ProjectDirs;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
};
use ratatui::crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use shipbook::app::App;
use shipbook::{logging, Config};
use shipbook_booking::Submission;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

fn get_config_path() -> PathBuf {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            if let Some(path) = args.next() {
                return PathBuf::from(path);
            }
        } else if let Some(path) = arg.strip_prefix("--config=") {
            return PathBuf::from(path);
        }
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "shipbook", "shipbook") {
        proj_dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config/default.toml")
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    let log_path = logging::init();
    tracing::info!(?log_path, "Starting shipbook");

    let config_path = get_config_path();
    let config = Config::load_or_default(&config_path);

    terminal::enable_raw_mode()?;
    let mut terminal = ratatui::init();
    ratatui::crossterm::execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    let result = run(&mut terminal, config);

    let _ = ratatui::crossterm::execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    ratatui::restore();

    if let Some(submission) = result? {
        println!("{}", submission.to_json()?);
    }

    Ok(())
}

fn run(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
    config: Config,
) -> color_eyre::Result<Option<Submission>> {
    let rt = tokio::runtime::Runtime::new()?;
    let mut app = App::new(config);

    rt.block_on(async {
        if let Err(e) = app.init().await {
            tracing::error!("Failed to initialize app: {e:#}");
        }
    });

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;

            if let Event::Key(key) = &event {
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }
            }

            if let Ok(should_quit) = app.handle_event(event) {
                if should_quit {
                    break;
                }
            }
        }

        app.process_async_events();

        if app.should_quit {
            break;
        }
    }

    Ok(app.submission().cloned())
}
