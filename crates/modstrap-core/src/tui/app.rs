//! Event loop driving the session
//!
//! All messages (keys, resizes, animation ticks, fetch completions) arrive on
//! one channel and are applied to the session on a single task. Fetches run
//! in spawned tasks; the next one is only started after the previous
//! completion has been processed.

use super::terminal::TerminalGuard;
use crate::config::Settings;
use crate::manifest::ManifestWriter;
use crate::runtime::PackageFetcher;
use crate::session::{Effect, Install, Key, Msg, Notice, Session};
use crate::toolchain::ToolchainConfig;
use crate::view;
use crate::widgets::spinner::TICK_INTERVAL;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Position, Rect},
    widgets::{Paragraph, Widget, Wrap},
    Terminal,
};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{Interval, MissedTickBehavior};

/// Event polling timeout for the input thread
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Owns the session and performs the effects it requests
pub struct EventLoop<'a, C: ToolchainConfig, B: Backend> {
    config: C,
    session: Session,
    preset_name: Option<String>,
    fetcher: PackageFetcher,
    manifest: ManifestWriter,
    terminal: &'a mut Terminal<B>,
    tx: UnboundedSender<Msg>,
    rx: UnboundedReceiver<Msg>,
    ticker: Option<Interval>,
}

impl<'a, C, B> EventLoop<'a, C, B>
where
    C: ToolchainConfig,
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    /// `terminal` should use an inline viewport of `view::VIEWPORT_HEIGHT` rows
    pub fn new(config: C, settings: Settings, terminal: &'a mut Terminal<B>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let fetcher = PackageFetcher::from_settings(&config, &settings);
        let manifest =
            ManifestWriter::new(&config, &settings.working_dir, &settings.language_version);
        let session = Session::new(settings.packages, config.placeholder());

        Self {
            config,
            session,
            preset_name: settings.preset_name,
            fetcher,
            manifest,
            terminal,
            tx,
            rx,
            ticker: None,
        }
    }

    /// Sender for injecting input events
    pub fn sender(&self) -> UnboundedSender<Msg> {
        self.tx.clone()
    }

    /// Run until the session quits and return its final state
    pub async fn run(mut self) -> Result<Session> {
        let mut flow = Flow::Continue;
        if let Some(name) = self.preset_name.take() {
            let effects = self.session.confirm(name);
            flow = self.apply(effects)?;
        }

        while flow == Flow::Continue {
            self.draw()?;

            let msg = tokio::select! {
                msg = self.rx.recv() => match msg {
                    Some(msg) => msg,
                    None => break,
                },
                _ = next_tick(&mut self.ticker) => Msg::Tick,
            };

            let effects = self.session.update(msg);
            flow = self.apply(effects)?;
        }

        self.finish()?;
        Ok(self.session)
    }

    fn draw(&mut self) -> Result<Rect> {
        let session = &self.session;
        let frame = self
            .terminal
            .draw(|frame| frame.render_widget(session, frame.area()))
            .context("failed to draw view")?;
        Ok(frame.area)
    }

    /// Draw the final view and leave the cursor on the row below it
    fn finish(&mut self) -> Result<()> {
        let area = self.draw()?;
        let below = view::height(&self.session).min(area.height.saturating_sub(1));
        self.terminal
            .set_cursor_position(Position::new(0, area.y + below))
            .context("failed to move cursor below view")?;
        Ok(())
    }

    /// Insert a notice above the viewport, wrapped to its width
    fn print(&mut self, notice: &Notice) -> Result<()> {
        let line = view::notice(notice);
        let width = usize::from(self.terminal.get_frame().area().width.max(1));
        let rows = u16::try_from(line.width().div_ceil(width).max(1)).unwrap_or(u16::MAX);

        let paragraph = Paragraph::new(line).wrap(Wrap { trim: false });
        self.terminal
            .insert_before(rows, |buf| paragraph.render(buf.area, buf))
            .context("failed to print above view")
    }

    fn apply(&mut self, effects: Vec<Effect>) -> Result<Flow> {
        for effect in effects {
            match effect {
                Effect::WriteManifest => {
                    let project = self.session.install().map(Install::project);
                    let result = self
                        .manifest
                        .write(&self.config, project.unwrap_or_default())
                        .map(|_| ());
                    if let Err(e) = result {
                        self.print(&Notice::ManifestFailed(e.to_string()))?;
                    }
                }
                Effect::Print(notice) => self.print(&notice)?,
                Effect::StartTicks => {
                    if self.ticker.is_none() {
                        let mut ticker = tokio::time::interval(TICK_INTERVAL);
                        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                        self.ticker = Some(ticker);
                    }
                }
                Effect::Fetch(package) => {
                    let fetcher = self.fetcher.clone();
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        let outcome = fetcher.fetch(&package).await;
                        // The loop may already be gone after a quit
                        let _ = tx.send(Msg::Installed(outcome));
                    });
                }
                Effect::Quit => return Ok(Flow::Quit),
            }
        }
        Ok(Flow::Continue)
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}

/// Map a terminal key event to a session key
pub fn translate_key(key: KeyEvent) -> Option<Key> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Key::CtrlC),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        _ => None,
    }
}

/// Forward terminal events to the loop until its receiver is dropped
fn spawn_input_thread(tx: UnboundedSender<Msg>) {
    std::thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(POLL_TIMEOUT) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if let Some(key) = translate_key(key) {
                            let _ = tx.send(Msg::Key(key));
                        }
                    }
                    Ok(Event::Resize(..)) => {
                        let _ = tx.send(Msg::Resize);
                    }
                    Ok(_) => {}
                    Err(_) => break,
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

/// Run the interactive bootstrapper on the real terminal
pub async fn run<C: ToolchainConfig>(config: &C, settings: Settings) -> Result<Session> {
    let mut guard = TerminalGuard::new()?;

    let event_loop = EventLoop::new(config.clone(), settings, &mut guard.terminal);
    spawn_input_thread(event_loop.sender());

    event_loop.run().await
}
