/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable snapshot of
/// the simulation.  No game logic is performed; this module only
/// translates a `FrameSnapshot` into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use frontline::entities::{FrameSnapshot, RoundState, FIELD_HEIGHT, FIELD_WIDTH};

// ── Playfield scaling ─────────────────────────────────────────────────────

/// Playfield units per terminal column / row.  640×480 units map onto an
/// 80×20 cell grid, which fits a standard terminal with room for chrome.
const X_SCALE: i32 = 8;
const Y_SCALE: i32 = 24;

const PLAY_COLS: u16 = (FIELD_WIDTH / X_SCALE) as u16;
const PLAY_ROWS: u16 = (FIELD_HEIGHT / Y_SCALE) as u16;

/// Screen layout: HUD row, top border, playfield rows, bottom border,
/// controls hint.
pub const SCREEN_COLS: u16 = PLAY_COLS + 2;
pub const SCREEN_ROWS: u16 = PLAY_ROWS + 4;

const PLAY_ORIGIN_COL: u16 = 1;
const PLAY_ORIGIN_ROW: u16 = 2;

// ── Colour palette ────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_TITLE: Color = Color::Cyan;
const C_STATUS_LIVE: Color = Color::Green;
const C_STATUS_LOST: Color = Color::Red;
const C_SOLDIER: Color = Color::White;
const C_ENEMY: Color = Color::Red;
const C_BULLET: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snap: &FrameSnapshot) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out)?;
    draw_hud(out, snap)?;

    if snap.round_state == RoundState::Lost {
        draw_lose_screen(out)?;
    } else {
        if !snap.enemy_parked {
            draw_enemy(out, snap.enemy_pos)?;
        }
        if !snap.bullet_parked {
            draw_bullet(out, snap.bullet_pos)?;
        }
        draw_soldier(out, snap.soldier_pos)?;
    }

    draw_controls_hint(out)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, SCREEN_ROWS - 1))?;
    out.flush()?;
    Ok(())
}

// ── Cell helpers ──────────────────────────────────────────────────────────

/// Playfield position → playfield cell (column, row), truncating.
fn cell(pos: (i32, i32)) -> (i32, i32) {
    (pos.0 / X_SCALE, pos.1 / Y_SCALE)
}

/// Print `glyph` at a playfield cell, skipping anything outside the
/// visible grid (e.g. a bullet crossing the left edge).
fn put<W: Write>(out: &mut W, col: i32, row: i32, glyph: &str) -> std::io::Result<()> {
    if col < 0 || row < 0 || col >= PLAY_COLS as i32 || row >= PLAY_ROWS as i32 {
        return Ok(());
    }
    out.queue(cursor::MoveTo(
        PLAY_ORIGIN_COL + col as u16,
        PLAY_ORIGIN_ROW + row as u16,
    ))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W) -> std::io::Result<()> {
    let w = PLAY_COLS as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, PLAY_ORIGIN_ROW - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, PLAY_ORIGIN_ROW + PLAY_ROWS))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in 0..PLAY_ROWS {
        out.queue(cursor::MoveTo(0, PLAY_ORIGIN_ROW + row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(SCREEN_COLS - 1, PLAY_ORIGIN_ROW + row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &FrameSnapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print("F R O N T L I N E"))?;

    let (status, color) = match snap.round_state {
        RoundState::Playing => ("HOLDING", C_STATUS_LIVE),
        RoundState::Lost => ("OVERRUN", C_STATUS_LOST),
    };
    let col = SCREEN_COLS.saturating_sub(status.len() as u16 + 1);
    out.queue(cursor::MoveTo(col, 0))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(status))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────

fn draw_soldier<W: Write>(out: &mut W, pos: (i32, i32)) -> std::io::Result<()> {
    // Sprite (2 rows): rifle + head on top, legs below.
    //   ⌐o
    //   /|\
    let (col, row) = cell(pos);
    out.queue(style::SetForegroundColor(C_SOLDIER))?;
    put(out, col, row, "⌐o")?;
    put(out, col, row + 1, "/|\\")?;
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, pos: (i32, i32)) -> std::io::Result<()> {
    //   <☠>
    //   [_]
    let (col, row) = cell(pos);
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    put(out, col, row, "<☠>")?;
    put(out, col, row + 1, "[_]")?;
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, pos: (i32, i32)) -> std::io::Result<()> {
    let (col, row) = cell(pos);
    out.queue(style::SetForegroundColor(C_BULLET))?;
    put(out, col, row, "«")?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, SCREEN_ROWS - 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Fire   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Lose overlay ──────────────────────────────────────────────────────────

fn draw_lose_screen<W: Write>(out: &mut W) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║     OVERRUN      ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        ("R - Retry   Q - Quit", Color::White),
    ];

    let cx = SCREEN_COLS / 2;
    let start_row = (SCREEN_ROWS / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
