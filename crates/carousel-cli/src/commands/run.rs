use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use carousel_core::AppConfig;
use carousel_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    load_theme,
    slide::AnimationConfigExt,
    widgets::{HelpWidget, PagerWidget, StatusBarWidget, TrackWidget},
};

use super::DeckArgs;

pub fn run(mut config: AppConfig, args: &DeckArgs) -> Result<()> {
    config.carousel = args.carousel_config(&config)?;
    let deck = args.load_deck()?;
    let config = Arc::new(config);

    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);
    let mut app = App::new(deck, config.clone(), theme)?;

    let event_handler = EventHandler::new(
        config.ui.tick_rate_ms,
        config.ui.animation.tick_duration(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Carousel"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &keymap, &event_handler);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Carousel closed on frame {}", app.carousel.state().frame_number);
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    events: &EventHandler,
) -> Result<()> {
    loop {
        let offset = app.update_animation();

        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),    // Track
                    Constraint::Length(1), // Pager
                    Constraint::Length(1), // Status bar
                ])
                .split(frame.area());

            // Track border takes one column each side
            app.set_track_width(layout[0].width.saturating_sub(2));

            TrackWidget::render(frame, layout[0], app, offset);
            PagerWidget::render(frame, layout[1], app);
            StatusBarWidget::render(frame, layout[2], app);

            if app.mode == Mode::Help {
                HelpWidget::render(frame, app);
            }
        })?;

        // Poll faster while a slide is in progress
        let event = if app.needs_fast_update() {
            events.next_animation()?
        } else {
            events.next()?
        };

        match event {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app, keymap);
                app.apply(action);
            }
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
