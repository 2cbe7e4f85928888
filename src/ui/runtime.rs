use std::io;
use std::time::Duration;

use crate::api::DirectoryClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::loader::FetchTask;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run() -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new();
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    let events = EventHandler::new(tick_rate);
    // Launch the one-shot directory fetch on activation.
    let fetch = FetchTask::spawn(DirectoryClient::new(), events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::FetchCompleted(result)) => app.on_fetch_completed(result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // A response still in flight must not be applied after this point.
    fetch.cancel();
    drop(guard);
    Ok(())
}
