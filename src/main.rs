use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tokio::runtime::Runtime;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flagwatch::config::{Overrides, Settings};
use flagwatch::{
    events, ui, App, AppOptions, FileSource, HttpSource, Locale, MessageId, MetricContent,
    MetricsData, MetricsQuery, MetricsResponse, Poller, SystemBrowser,
};

#[derive(Parser, Debug)]
#[command(name = "flagwatch")]
#[command(about = "Terminal panel for feature toggle evaluation metrics")]
struct Args {
    /// Config file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project key
    #[arg(short, long)]
    project: Option<String>,

    /// Environment key
    #[arg(short, long)]
    environment: Option<String>,

    /// Toggle key
    #[arg(short, long)]
    toggle: Option<String>,

    /// Base URL of the management API
    #[arg(long, conflicts_with = "file")]
    server: Option<String>,

    /// Bearer token for the management API
    #[arg(long)]
    token: Option<String>,

    /// Initial evaluation window in hours (1, 6, 12, 24, 72, 168, 336, 720)
    #[arg(short, long)]
    window: Option<String>,

    /// Poll interval (e.g., "5s", "500ms")
    #[arg(short, long)]
    refresh: Option<String>,

    /// UI language (en, zh)
    #[arg(long)]
    locale: Option<String>,

    /// Read metrics from a JSON file instead of the server
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Fetch once, write the metrics to a JSON file and exit
    #[arg(short = 'x', long)]
    export: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            server: self.server.clone(),
            token: self.token.clone(),
            project: self.project.clone(),
            environment: self.environment.clone(),
            toggle: self.toggle.clone(),
            window: self.window.clone(),
            refresh: self.refresh.clone(),
            locale: self.locale.clone(),
            file: self.file.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    settings.apply(args.overrides());

    init_logging(&settings, args.export.is_some())?;

    let target = settings.target()?;
    let window = settings.window()?;
    let locale = settings.locale()?;
    let refresh = settings.refresh_interval()?;

    let query = build_query(&settings)?;
    info!(source = query.description(), toggle = %target, %window, "starting");

    let runtime = Runtime::new()?;

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        return runtime.block_on(async {
            let response = query.fetch(&target, window).await?;
            let content = export_content(response, locale)?;
            let export = MetricsData::from_content(content).to_export(&target, window);
            write_export(&export_path, &export)
        });
    }

    let (poller, updates) = Poller::new(runtime.handle().clone(), query, target, refresh);
    let app = App::new(
        poller,
        updates,
        AppOptions {
            window,
            locale,
            theme: ui::Theme::auto_detect(),
            docs_url: settings.docs_url.clone(),
            browser: Box::new(SystemBrowser),
        },
    );

    let result = run_tui(app);

    // Abort anything still in flight before the runtime goes away
    runtime.shutdown_timeout(Duration::from_millis(500));
    result
}

fn build_query(settings: &Settings) -> Result<Arc<dyn MetricsQuery>> {
    if let Some(ref path) = settings.file {
        return Ok(Arc::new(FileSource::new(path)));
    }

    let mut builder = HttpSource::builder()
        .endpoint(&settings.server.url)
        .timeout(settings.request_timeout()?);
    if let Some(ref token) = settings.server.token {
        builder = builder.token(token);
    }
    Ok(Arc::new(builder.build()?))
}

/// Send logs to the configured file. Export mode falls back to stderr; the
/// TUI owns the terminal otherwise, so without a file nothing is logged.
fn init_logging(settings: &Settings, export: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log.level))
        .context("Invalid log level")?;

    if let Some(ref path) = settings.log.file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if export {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
    }

    Ok(())
}

/// The payload of a successful response, or its failure message.
fn export_content(response: MetricsResponse, locale: Locale) -> Result<MetricContent> {
    match response.data {
        Some(content) if response.success => Ok(content),
        _ => anyhow::bail!(
            "{}",
            response
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| locale.text(MessageId::MetricsError).to_string())
        ),
    }
}

/// Write an export document as pretty JSON
fn write_export(path: &Path, export: &serde_json::Value) -> Result<()> {
    use std::io::Write;

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;
    writeln!(file, "{}", serde_json::to_string_pretty(export)?)?;

    println!("Exported evaluation metrics to {}", path.display());
    Ok(())
}

/// Run the TUI until the user quits
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Stop polling before the terminal is handed back
    app.quit();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        // Apply poll results that arrived since the last frame
        app.pump();

        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                frame.render_widget(paragraph, ui::common::centered(area, area.width, 5));
                app.chart_area = None;
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(8),    // Panel
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::panel::render(frame, app, chunks[1]);
            ui::common::render_status_bar(frame, app, chunks[2]);

            // Dropdown hangs below the header
            ui::selector::render(frame, app, chunks[1]);

            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
