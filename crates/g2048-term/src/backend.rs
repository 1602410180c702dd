//! Crossterm implementations of [`Driver`] and [`InputSource`].
//!
//! [`CrosstermInput`] reads terminal events on a worker thread and hands
//! them to the game thread through a channel; the game thread is the only
//! one that ever touches game state.

use std::io::{self, Write};
use std::panic;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::driver::{Driver, InputSource};
use crate::error::TermError;
use crate::grid::Frame;
use crate::messages::{Key, ModMask, Msg};
use crate::style::{AttrMask, Color, Style};

/// How long the input worker waits before re-checking its stop flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        let (r, g, b) = c.rgb();
        CtColor::Rgb { r, g, b }
    }
}

fn to_mod_mask(mods: KeyModifiers) -> ModMask {
    let mut m = ModMask::NONE;
    if mods.contains(KeyModifiers::SHIFT) {
        m = m | ModMask::SHIFT;
    }
    if mods.contains(KeyModifiers::CONTROL) {
        m = m | ModMask::CTRL;
    }
    if mods.contains(KeyModifiers::ALT) {
        m = m | ModMask::ALT;
    }
    m
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

/// Translate a crossterm event. Key releases and repeats, mouse and focus
/// events are dropped.
pub fn translate_event(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => to_key(code).map(|key| Msg::Key {
            key,
            modifiers: to_mod_mask(modifiers),
        }),
        Event::Resize(width, height) => Some(Msg::Resize { width, height }),
        _ => None,
    }
}

/// Leave raw mode and the alternate screen.
pub fn restore_terminal() -> io::Result<()> {
    execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if let Err(e) = restore_terminal() {
            log::error!("failed to restore terminal after panic: {e}");
        }
        default_hook(info)
    }));
}

// ---------------------------------------------------------------------------
// CrosstermDriver
// ---------------------------------------------------------------------------

/// Draws frames on stdout using crossterm.
#[derive(Debug, Default)]
pub struct CrosstermDriver {
    active: bool,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self::default()
    }

    fn queue_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
        queue!(
            out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_ct_color(style.fg)),
            SetBackgroundColor(to_ct_color(style.bg))
        )?;
        if style.attrs.contains(AttrMask::BOLD) {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if style.attrs.contains(AttrMask::REVERSE) {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), TermError> {
        install_panic_hook();
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            terminal::SetTitle("term2048"),
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.active = true;
        log::debug!("terminal initialised");
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16), TermError> {
        Ok(terminal::size()?)
    }

    fn flush(&mut self, frame: &Frame) -> Result<(), TermError> {
        let mut out = io::stdout().lock();
        if frame.clear {
            queue!(out, SetAttribute(Attribute::Reset), terminal::Clear(ClearType::All))?;
        }

        let mut current: Option<Style> = None;
        for fc in &frame.cells {
            let (Ok(x), Ok(y)) = (u16::try_from(fc.x), u16::try_from(fc.y)) else {
                continue;
            };
            queue!(out, cursor::MoveTo(x, y))?;
            if current != Some(fc.cell.style) {
                Self::queue_style(&mut out, fc.cell.style)?;
                current = Some(fc.cell.style);
            }
            queue!(out, Print(fc.cell.ch))?;
        }

        queue!(out, SetAttribute(Attribute::Reset))?;
        out.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        match restore_terminal() {
            Ok(()) => log::debug!("terminal restored"),
            Err(e) => log::error!("failed to restore terminal: {e}"),
        }
    }
}

impl Drop for CrosstermDriver {
    fn drop(&mut self) {
        self.close();
    }
}

// ---------------------------------------------------------------------------
// CrosstermInput
// ---------------------------------------------------------------------------

/// Terminal input read on a background thread.
///
/// The worker only pushes events into the channel; [`next_msg`] pops them on
/// the caller's thread.
///
/// [`next_msg`]: InputSource::next_msg
#[derive(Debug)]
pub struct CrosstermInput {
    rx: Receiver<io::Result<Event>>,
    done: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl CrosstermInput {
    /// Start the input worker.
    pub fn spawn() -> Result<Self, TermError> {
        let (tx, rx) = mpsc::channel();
        let done = Arc::new(AtomicBool::new(false));
        let worker_done = Arc::clone(&done);

        let worker = thread::Builder::new()
            .name("term2048-input".into())
            .spawn(move || {
                while !worker_done.load(Ordering::Relaxed) {
                    let ev = match event::poll(POLL_INTERVAL) {
                        Ok(false) => continue,
                        Ok(true) => event::read(),
                        Err(e) => Err(e),
                    };
                    let failed = ev.is_err();
                    if tx.send(ev).is_err() || failed {
                        break;
                    }
                }
                log::debug!("input worker stopped");
            })?;

        Ok(Self {
            rx,
            done,
            worker: Some(worker),
        })
    }
}

impl InputSource for CrosstermInput {
    fn next_msg(&mut self) -> Result<Msg, TermError> {
        loop {
            match self.rx.recv() {
                Ok(Ok(ev)) => {
                    if let Some(msg) = translate_event(ev) {
                        return Ok(msg);
                    }
                }
                Ok(Err(e)) => return Err(e.into()),
                Err(_) => return Err(TermError::InputClosed),
            }
        }
    }
}

impl Drop for CrosstermInput {
    fn drop(&mut self) {
        self.done.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("input worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn arrows_and_chars_translate() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(translate_event(ev), Some(Msg::key(Key::ArrowUp)));

        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_event(ev),
            Some(Msg::Key {
                key: Key::Char('c'),
                modifiers: ModMask::CTRL,
            })
        );
    }

    #[test]
    fn releases_and_unknown_keys_are_dropped() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate_event(release), None);

        let f1 = Event::Key(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE));
        assert_eq!(translate_event(f1), None);
        assert_eq!(translate_event(Event::FocusGained), None);
    }

    #[test]
    fn resize_translates() {
        assert_eq!(
            translate_event(Event::Resize(80, 24)),
            Some(Msg::Resize {
                width: 80,
                height: 24
            })
        );
    }

    #[test]
    fn colors_map_to_rgb() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
