//! Phone input demo
//!
//! Hosts one `PhoneInputWidget` in a full-screen terminal:
//! 1. Raw terminal events are polled on a tokio task
//! 2. The widget turns them into actions and runs its reducer
//! 3. `on_change` / `on_blur` update the status panel
//! 4. The frame is redrawn after every event
//!
//! # Usage
//!
//! ```sh
//! # Numbers must start with +code
//! cargo run -p phone-demo
//!
//! # Parse national numbers as US numbers, log to a file
//! cargo run -p phone-demo -- --default-country US --log-file phone.log
//!
//! # Load keybindings and sizes from JSON
//! cargo run -p phone-demo -- --config phone-input.json
//! ```

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use phone_input_components::PhoneInputWidget;
use phone_input_core::{
    process_raw_event, spawn_event_poller, Command, PhoneInputConfig, RawEvent, WidgetContext,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Phone input demo
#[derive(Parser, Debug)]
#[command(name = "phone-demo")]
#[command(about = "A phone number input with a country picker")]
struct Args {
    /// JSON config file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Region for numbers typed without a calling code (overrides the config)
    #[arg(long, short)]
    default_country: Option<String>,

    /// Country picker width in columns
    #[arg(long, short)]
    width: Option<u16>,

    /// Report a change when a country is picked from the list
    #[arg(long)]
    notify_on_select: bool,

    /// Write logs here (RUST_LOG filters, default `info`)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// What the callbacks have reported so far
#[derive(Default)]
struct Status {
    country_code: String,
    national_number: String,
    changes: usize,
    blurs: usize,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Build the widget before entering TUI mode so config errors print normally
    let config = load_config(&args).map_err(|e| {
        eprintln!("Error: {}", e);
        io::Error::other(e)
    })?;
    let status = Rc::new(RefCell::new(Status::default()));
    let phone = build_widget(config, args.width, &status).map_err(|e| {
        eprintln!("Error: {}", e);
        io::Error::other(e)
    })?;

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, phone, status).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    Ok(())
}

/// Config file (if any) with CLI flags applied on top
fn load_config(args: &Args) -> phone_input_core::Result<PhoneInputConfig> {
    let mut config = match &args.config {
        Some(path) => PhoneInputConfig::load(path)?,
        None => PhoneInputConfig::default(),
    };
    if let Some(region) = &args.default_country {
        config.default_country = Some(region.clone());
    }
    if args.notify_on_select {
        config.notify_on_select = true;
    }
    Ok(config)
}

fn build_widget(
    config: PhoneInputConfig,
    width: Option<u16>,
    status: &Rc<RefCell<Status>>,
) -> phone_input_core::Result<PhoneInputWidget> {
    let on_change = Rc::clone(status);
    let on_blur = Rc::clone(status);

    let mut phone = PhoneInputWidget::new(config)?
        .on_change(move |country_code, national_number| {
            let mut status = on_change.borrow_mut();
            status.country_code = country_code.to_string();
            status.national_number = national_number.to_string();
            status.changes += 1;
        })
        .on_blur(move || on_blur.borrow_mut().blurs += 1);
    if let Some(width) = width {
        phone = phone.width(width);
    }
    Ok(phone)
}

/// Host-side validation: digits typed but no country recognised
fn validate(phone: &mut PhoneInputWidget, status: &Status) {
    let unknown = !status.national_number.is_empty() && status.country_code.is_empty();
    phone.error = unknown;
    phone.helper_text = if unknown {
        "Unknown country code".to_string()
    } else {
        "Type a number or pick a country".to_string()
    };
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut phone: PhoneInputWidget,
    status: Rc<RefCell<Status>>,
) -> io::Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    validate(&mut phone, &status.borrow());
    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| draw(frame, &mut phone, &status.borrow()))?;
            should_render = false;
        }

        let Some(raw_event) = event_rx.recv().await else {
            break;
        };
        let Some(event) = process_raw_event(raw_event) else {
            continue;
        };
        if event.is_quit() {
            break;
        }

        phone.handle_event(&event);
        validate(&mut phone, &status.borrow());
        // cursor and scroll moves do not change state but still need a redraw
        should_render = true;
    }

    cancel_token.cancel();
    tracing::info!("Phone demo exiting");
    Ok(())
}

fn draw(frame: &mut Frame, phone: &mut PhoneInputWidget, status: &Status) {
    let area = frame.area();
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(48),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, title_area, phone_area, _, status_area, _, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(phone.height()),
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(column);

    frame.render_widget(
        Paragraph::new("Phone number").style(Style::default().add_modifier(Modifier::BOLD)),
        title_area,
    );

    render_status(frame, status_area, phone, status);
    render_help(frame, help_area, phone);

    // last, so an open picker draws over everything else
    phone.render(frame, phone_area);
}

fn render_status(frame: &mut Frame, area: Rect, phone: &PhoneInputWidget, status: &Status) {
    let label = Style::default().fg(Color::DarkGray);
    let state = phone.state();
    let country = if state.country.is_unknown() {
        "-".to_string()
    } else {
        format!("{} ({})", state.country.name, state.country.alpha2)
    };
    let lines = vec![
        Line::from(vec![Span::styled("country   ", label), Span::raw(country)]),
        Line::from(vec![
            Span::styled("on_change ", label),
            Span::raw(format!(
                "{:?}, {:?} ({} calls)",
                status.country_code, status.national_number, status.changes
            )),
        ]),
        Line::from(vec![
            Span::styled("on_blur   ", label),
            Span::raw(format!("{} calls", status.blurs)),
        ]),
        Line::from(vec![
            Span::styled("focused   ", label),
            Span::raw(phone.is_focused().to_string()),
        ]),
    ];
    let block = Block::default()
        .title(" Callbacks ")
        .borders(Borders::ALL)
        .border_style(label);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help(frame: &mut Frame, area: Rect, phone: &PhoneInputWidget) {
    let open = phone
        .config()
        .key_hint(Command::OpenPicker, WidgetContext::Field)
        .unwrap_or_else(|| "click flag".to_string());
    let help = Paragraph::new(format!(
        "{}: countries  Tab: leave field  ^Q: quit",
        open
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
