use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::api::{FetchError, UserRecord};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The one-shot directory fetch finished.
    FetchCompleted(Result<Vec<UserRecord>, FetchError>),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "terminal event read failed");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal event poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
