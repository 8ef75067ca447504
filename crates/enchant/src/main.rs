//! Enchant CLI - animated character transitions in the terminal

mod app;
mod color;
mod config;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use enchant_core::{compute_transition, Argb, CellFont, FontBackend, Gravity, Interpolator, Paint};
use ratatui::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(name = "enchant")]
#[command(author, version, about = "Animated character transitions in the terminal")]
struct Args {
    /// Words to cycle through (defaults to the months of the year)
    #[arg(num_args = 0..)]
    words: Vec<String>,

    /// Frames per transition, at least 2
    #[arg(short = 'n', long)]
    steps: Option<u32>,

    /// Fade in characters that have nothing to move from
    #[arg(short, long)]
    fade: bool,

    /// Motion curve: linear, accelerate, decelerate, accelerate_decelerate, bounce or overshoot
    #[arg(short, long)]
    interpolator: Option<Interpolator>,

    /// Text gravity, e.g. "center" or "end|bottom"
    #[arg(short, long)]
    gravity: Option<Gravity>,

    /// Text color: #AARRGGBB, #RRGGBB or a color name
    #[arg(short, long)]
    color: Option<Argb>,

    /// Box background color
    #[arg(long)]
    background: Option<Argb>,

    /// Text size (18 is one cell per column)
    #[arg(long)]
    size: Option<f32>,

    /// Typeface asset to load
    #[arg(long)]
    typeface: Option<PathBuf>,

    /// Stretch the box over the full terminal width
    #[arg(short, long)]
    wide: bool,

    /// Auto-advance through the words
    #[arg(long)]
    autoplay: bool,

    /// Autoplay delay in milliseconds
    #[arg(short, long)]
    speed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the transition plan from OLD to NEW as JSON and exit
    #[arg(long, num_args = 2, value_names = ["OLD", "NEW"])]
    dump_plan: Option<Vec<String>>,
}

impl Args {
    /// CLI flags override config values
    fn apply(self, config: &mut Config) {
        if !self.words.is_empty() {
            config.ui.words = self.words;
        }
        if let Some(steps) = self.steps {
            config.playback.animation_steps = steps;
        }
        if self.fade {
            config.text.fade_in = true;
        }
        if let Some(interpolator) = self.interpolator {
            config.text.interpolator = interpolator;
        }
        if let Some(gravity) = self.gravity {
            config.text.gravity = gravity;
        }
        if let Some(color) = self.color {
            config.text.color = color;
        }
        if let Some(background) = self.background {
            config.ui.background = background;
        }
        if let Some(size) = self.size {
            config.text.size = size;
        }
        if self.typeface.is_some() {
            config.text.typeface = self.typeface;
        }
        if self.wide {
            config.ui.fill_width = true;
        }
        if self.autoplay {
            config.playback.autoplay = true;
        }
        if let Some(speed) = self.speed {
            config.playback.speed = speed;
        }
    }
}

/// Logs go to a file, since the terminal belongs to the UI
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn dump_plan(old: &str, new: &str, config: &Config) -> Result<()> {
    let font = CellFont::default();
    let paint = Paint {
        color: config.text.color,
        size: config.text.size,
        ..Paint::default()
    };
    let plan = compute_transition(old, new, |c| font.measure_char(&paint, c));
    let json = serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?;
    println!("{}", json);
    Ok(())
}

fn main() -> Result<()> {
    let mut args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let mut config = Config::load();
    let plan_words = args.dump_plan.take();
    args.apply(&mut config);

    if let Some(words) = plan_words {
        return dump_plan(&words[0], &words[1], &config);
    }

    let mut app = App::new(&config).context("Invalid configuration")?;
    let tick_rate = Duration::from_millis(config.playback.tick.max(1));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(words = app.words.len(), "starting");

    // Run event loop
    let result = run_app(&mut terminal, &mut app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("{:#}", err);
        eprintln!("Error: {}", err);
        return Err(err);
    }

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Nothing animating: wake up less often
        let busy = app.autoplay || app.host.frame_pending() || app.host.needs_layout();
        let timeout = if busy { tick_rate } else { IDLE_POLL };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.code);
                }
            }
        }

        // Handle autoplay
        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => {
            if app.show_help {
                app.show_help = false;
            } else {
                app.should_quit = true;
            }
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('j') | KeyCode::Char(' ') => {
            app.next_word();
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('k') => {
            app.prev_word();
        }
        KeyCode::Home => app.goto_word(0),
        KeyCode::End => app.goto_word(app.words.len() - 1),
        KeyCode::Char('a') => app.toggle_autoplay(),
        KeyCode::Char('[') => app.increase_speed(),
        KeyCode::Char(']') => app.decrease_speed(),
        KeyCode::Char('f') => app.toggle_fade(),
        KeyCode::Char('i') => app.cycle_interpolator(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.increase_steps(),
        KeyCode::Char('-') => app.decrease_steps(),
        KeyCode::Char('g') => app.cycle_gravity(),
        KeyCode::Char('w') => app.toggle_fill(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}
