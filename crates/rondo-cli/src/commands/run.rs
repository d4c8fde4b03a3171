use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use rondo_core::{AppConfig, Direction as Step};
use rondo_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    scroll::ScrollConfigExt,
    widgets::{CarouselWidget, HeaderWidget, StatusBarWidget},
    Theme,
};

pub fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Rondo")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state and load persisted tasks
    let mut app = App::new(config, Theme::default());
    app.load();

    let event_handler = EventHandler::new(
        std::time::Duration::from_millis(app.config.ui.tick_rate_ms),
        app.config.ui.scroll.animation_tick_duration(),
    );

    let result = event_loop(&mut terminal, &mut app, &event_handler);

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

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        // Advance the scroll animation before drawing
        app.tick(Instant::now());

        terminal.draw(|frame| ui(frame, app))?;

        // The fast tick is armed only while a scroll is running
        if let Some(event) = event_handler.next(app.scroll.is_animating())? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app);
                    apply_action(app, action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse);
                    apply_action(app, action);
                }
                AppEvent::Resize(_, _) => {
                    // Redrawn with the new geometry on the next iteration
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    // Remember the carousel geometry for tap hit-testing
    app.carousel_area = chunks[1];

    HeaderWidget::render(frame, chunks[0], app);
    CarouselWidget::render(frame, chunks[1], app);
    StatusBarWidget::render(frame, chunks[2], app);
}

fn apply_action(app: &mut App, action: Action) {
    let now = Instant::now();
    match action {
        Action::Quit => app.should_quit = true,
        Action::MoveUp => app.move_selection(Step::Previous, now),
        Action::MoveDown => app.move_selection(Step::Next, now),
        Action::Toggle => app.toggle_selected(),
        Action::BeginAdd => app.begin_add(),
        Action::Delete => app.delete_selected(),
        Action::Tap { column, row } => app.tap(column, row, now),
        Action::Confirm => app.commit_edit(),
        Action::Cancel => app.cancel_edit(),
        Action::InputChar(c) => app.input_char(c),
        Action::Backspace => app.backspace_edit(),
        Action::None => {}
    }
}
