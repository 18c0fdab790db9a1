mod app;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mentionkit_config::Config;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
    time::{Duration, Instant},
};

const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();

    let config = match args.len() {
        2 => {
            let Some(path) = Config::expand_path(&PathBuf::from(&args[1])) else {
                eprintln!("Error: Could not expand config path '{}'", args[1]);
                process::exit(1);
            };
            match Config::load_from_path(&path) {
                Ok(Some(config)) => config,
                Ok(None) => {
                    eprintln!("Error: No config file at '{}'", path.display());
                    process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
        1 => match Config::load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                log::info!(
                    "no config at {}, using defaults",
                    Config::config_path().display()
                );
                Config::default()
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {} [config-path]", args[0]);
            process::exit(1);
        }
    };

    let part_types = match config.part_types() {
        Ok(part_types) => part_types,
        Err(e) => {
            eprintln!("Error: Invalid trigger configuration: {e}");
            process::exit(1);
        }
    };
    let mut app = App::new(part_types, config.suggestions().to_vec(), config.debounce());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    for comment in app.comments() {
        println!("{comment}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        let timeout = app
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(Instant::now())
            });

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !handle_key(app, key, Instant::now())
        {
            return Ok(());
        }

        app.tick(Instant::now());
    }
}

/// Applies one key press. Returns `false` when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    // Other chords must not type their bare letter.
    let typing = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
    match key.code {
        KeyCode::Esc => return false,
        KeyCode::Char('c') if ctrl => return false,
        KeyCode::Char('s') if ctrl => app.send(),
        KeyCode::Char(c) if typing => app.insert_char(c, now),
        KeyCode::Enter => app.insert_char('\n', now),
        KeyCode::Backspace => app.backspace(now),
        KeyCode::Delete => app.delete(now),
        KeyCode::Left => app.move_left(now),
        KeyCode::Right => app.move_right(now),
        KeyCode::Home => app.move_home(now),
        KeyCode::End => app.move_end(now),
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Tab => {
            app.commit_selected();
        }
        _ => {}
    }
    true
}
