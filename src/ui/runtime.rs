use crate::client::ImageGenerator;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Runs the generator screen until the user quits.
///
/// Request tasks run on `runtime`; this thread only handles events and draws.
pub fn run(config: &Config, generator: Arc<dyn ImageGenerator>, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);
    let mut app = App::new(config, generator, runtime, events.sender());

    let (cols, rows) = crossterm::terminal::size()?;
    app.on_resize(cols, rows);
    tracing::info!(cols, rows, layout = ?app.layout(), "generator view mounted");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(event) => app.handle_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.teardown();
    drop(events);
    drop(guard);
    tracing::info!("generator view closed");
    Ok(())
}
