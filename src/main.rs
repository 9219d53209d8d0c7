mod display;

use std::collections::HashMap;
use std::io::{self, stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use log::info;

use frontline::compute::{init_state, snapshot, tick};
use frontline::input::{map_batch, Intent, Key, KeyTransition};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// A key without key-release reporting is considered released once no
/// press/repeat event for it has arrived within this many frames.  The OS
/// key-repeat rate is ≥ 15 Hz, so an actively held key refreshes well
/// inside the window.
const HOLD_WINDOW: u64 = 4;

/// Terminal key code → the neutral key the input mapper understands.
fn translate(code: KeyCode) -> Key {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Key::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Key::Right,
        KeyCode::Char(' ') => Key::Fire,
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('1') => Key::Restart,
        _ => Key::Other,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: the terminal's key events are reduced to clean
/// press/release edges before they reach the input mapper.  On
/// keyboard-enhancement-capable terminals (Ghostty, kitty, etc.) real
/// `Release` events do the work.  Classic terminals only deliver `Press`
/// events, with OS auto-repeat showing up as more presses: a press of an
/// already-held key is forwarded as a repeat, and a held key whose
/// repeats stop arriving is expired by synthesizing the release the
/// terminal never sent.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> io::Result<()> {
    let mut state = init_state();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut held: HashMap<Key, u64> = HashMap::new();
    let mut transitions: Vec<KeyTransition> = Vec::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        transitions.clear();

        // ── Drain all pending input events (non-blocking) ────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };

            // Quit keys end the whole process; they never become intents.
            if kind == KeyEventKind::Press {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        info!("quit requested");
                        return Ok(());
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        info!("quit requested");
                        return Ok(());
                    }
                    _ => {}
                }
            }

            let key = translate(code);
            match kind {
                KeyEventKind::Press => {
                    // A press of a key we already consider held is OS
                    // auto-repeat in disguise.
                    let repeat = held.contains_key(&key);
                    held.insert(key, frame);
                    transitions.push(KeyTransition { key, pressed: true, is_repeat: repeat });
                }
                KeyEventKind::Repeat => {
                    held.insert(key, frame);
                    transitions.push(KeyTransition { key, pressed: true, is_repeat: true });
                }
                KeyEventKind::Release => {
                    held.remove(&key);
                    transitions.push(KeyTransition { key, pressed: false, is_repeat: false });
                }
            }
        }

        // ── Expire stale holds on terminals without release events ───────
        if !keyboard_enhanced {
            let expired: Vec<Key> = held
                .iter()
                .filter(|(_, &last)| frame.saturating_sub(last) > HOLD_WINDOW)
                .map(|(&key, _)| key)
                .collect();
            for key in expired {
                held.remove(&key);
                transitions.push(KeyTransition { key, pressed: false, is_repeat: false });
            }
        }

        let intents: Vec<Intent> = map_batch(&transitions).collect();
        state = tick(&state, &intents);

        display::render(out, &snapshot(&state))?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    env_logger::init();

    let (cols, rows) = terminal::size()?;
    if cols < display::SCREEN_COLS || rows < display::SCREEN_ROWS {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!(
                "terminal too small: need {}x{}, have {}x{}",
                display::SCREEN_COLS,
                display::SCREEN_ROWS,
                cols,
                rows
            ),
        ));
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back
    // to the hold-window model.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    info!("keyboard enhancement: {}", keyboard_enhanced);

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
