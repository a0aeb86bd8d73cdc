//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The arena is square in world units, so it is drawn as a square grid of
//! `g x g` cells, each `cell_w` columns by `cell_h` rows. World coordinates
//! are scaled onto that grid; anything outside it (a lander drifting off the
//! top or sides) is clipped.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Smallest grid that still shows lander and pad as separate shapes.
const MIN_GRID: u16 = 4;

const SKY: CellStyle = CellStyle::new(Rgb::new(60, 60, 80), Rgb::new(10, 10, 25));
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LANDER: CellStyle = CellStyle::new(Rgb::new(240, 220, 80), Rgb::new(10, 10, 25)).bold();
const PAD: CellStyle = CellStyle::new(Rgb::new(220, 60, 60), Rgb::new(10, 10, 25)).bold();
const FLAME: CellStyle = CellStyle::new(Rgb::new(255, 140, 0), Rgb::new(10, 10, 25));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const EMPTY: CellStyle = CellStyle::new(Rgb::new(220, 60, 60), Rgb::new(0, 0, 0)).bold();
const HINT: CellStyle = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(0, 0, 0)).dim();
const BANNER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

pub const RESTART_HINT: &str = "Press R to restart";
pub const TOO_SMALL: &str = "Terminal too small";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen placement of the arena for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaLayout {
    /// Top-left corner of the border.
    pub start_x: u16,
    pub start_y: u16,
    /// Cells per side of the square grid.
    pub grid: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// Inclusive range of grid cells covered by a world-space span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellSpan {
    lo: u16,
    hi: u16,
}

/// A lightweight terminal renderer for the lander game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the arena lands in `viewport`, or `None` if it does not fit.
    pub fn layout(&self, viewport: Viewport) -> Option<ArenaLayout> {
        let rows = viewport.height.saturating_sub(2) / self.cell_h;
        let cols = viewport.width.saturating_sub(2) / self.cell_w;
        let grid = rows.min(cols);
        if grid < MIN_GRID {
            return None;
        }

        let frame_w = grid * self.cell_w + 2;
        let frame_h = grid * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        Some(ArenaLayout {
            start_x,
            start_y,
            grid,
            frame_w,
            frame_h,
        })
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let Some(layout) = self.layout(viewport) else {
            fb.put_str(0, 0, TOO_SMALL, BANNER);
            return;
        };

        // Sky, then border.
        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.grid * self.cell_w,
            layout.grid * self.cell_h,
            ' ',
            SKY,
        );
        self.draw_border(
            fb,
            layout.start_x,
            layout.start_y,
            layout.frame_w,
            layout.frame_h,
            BORDER,
        );

        let arena = snap.arena;
        let g = layout.grid;

        // Only the part of the pad above the floor is visible.
        let pad_cols = span(snap.pad.left(), snap.pad.right(), arena.width, g);
        let pad_rows = span(snap.pad.top(&arena), arena.height, arena.height, g);
        if let (Some(cols), Some(rows)) = (pad_cols, pad_rows) {
            self.fill_cells(fb, &layout, cols, rows, '▀', PAD);
        }

        let lander = &snap.lander;
        let cols = span(lander.left(), lander.right(), arena.width, g);
        let rows = span(lander.top(), lander.bottom(), arena.height, g);

        if snap.flying() && lander.has_fuel() {
            if let (Some(cols), Some(rows)) = (cols, rows) {
                self.draw_flames(fb, &layout, snap, cols, rows);
            }
        }

        if let (Some(cols), Some(rows)) = (cols, rows) {
            self.fill_cells(fb, &layout, cols, rows, '█', LANDER);
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if let Some(outcome) = snap.outcome {
            self.draw_overlay_text(fb, &layout, outcome.message(), RESTART_HINT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Exhaust is drawn on the side opposite to the push.
    fn draw_flames(
        &self,
        fb: &mut FrameBuffer,
        layout: &ArenaLayout,
        snap: &GameSnapshot,
        cols: CellSpan,
        rows: CellSpan,
    ) {
        let last = layout.grid - 1;
        if snap.thrust.up && rows.hi < last {
            let below = CellSpan {
                lo: rows.hi + 1,
                hi: rows.hi + 1,
            };
            self.fill_cells(fb, layout, cols, below, '▼', FLAME);
        }
        // Left thrust pushes toward -x, so the plume is on the right.
        if snap.thrust.left && cols.hi < last {
            let right = CellSpan {
                lo: cols.hi + 1,
                hi: cols.hi + 1,
            };
            self.fill_cells(fb, layout, right, rows, '▶', FLAME);
        }
        if snap.thrust.right && cols.lo > 0 {
            let left = CellSpan {
                lo: cols.lo - 1,
                hi: cols.lo - 1,
            };
            self.fill_cells(fb, layout, left, rows, '◀', FLAME);
        }
    }

    fn fill_cells(
        &self,
        fb: &mut FrameBuffer,
        layout: &ArenaLayout,
        cols: CellSpan,
        rows: CellSpan,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.start_x + 1 + cols.lo * self.cell_w;
        let py = layout.start_y + 1 + rows.lo * self.cell_h;
        let w = (cols.hi - cols.lo + 1) * self.cell_w;
        let h = (rows.hi - rows.lo + 1) * self.cell_h;
        fb.fill_rect(px, py, w, h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &ArenaLayout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let lander = &snap.lander;
        let mut y = layout.start_y;

        fb.put_str(panel_x, y, "FUEL", LABEL);
        y = y.saturating_add(1);
        let fuel_style = if lander.has_fuel() { VALUE } else { EMPTY };
        fb.put_fixed(panel_x, y, lander.fuel_gauge(), 1, fuel_style);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "VX", LABEL);
        y = y.saturating_add(1);
        fb.put_fixed(panel_x, y, lander.vx, 3, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "VY", LABEL);
        y = y.saturating_add(1);
        fb.put_fixed(panel_x, y, lander.vy, 3, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ALT", LABEL);
        y = y.saturating_add(1);
        fb.put_fixed(panel_x, y, snap.altitude().max(0.0), 0, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ROUND", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.episode_id.saturating_add(1), VALUE);
        y = y.saturating_add(2);

        for line in ["←↑→ thrust", "R restart", "Q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, HINT);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &ArenaLayout, text: &str, hint: &str) {
        let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
        fb.put_str(centered_x(layout, text), mid_y, text, BANNER);
        fb.put_str(centered_x(layout, hint), mid_y.saturating_add(1), hint, HINT);
    }
}

fn centered_x(layout: &ArenaLayout, text: &str) -> u16 {
    let text_w = text.chars().count() as u16;
    layout
        .start_x
        .saturating_add(layout.frame_w.saturating_sub(text_w) / 2)
}

/// Grid cells touched by the world span `[lo, hi)` on an axis of `extent`
/// units drawn with `grid` cells. `None` if the span is entirely off-grid.
fn span(lo: f64, hi: f64, extent: f64, grid: u16) -> Option<CellSpan> {
    if extent <= 0.0 || hi <= lo {
        return None;
    }

    let scale = grid as f64 / extent;
    let first = (lo * scale).floor();
    let last = (hi * scale).ceil() - 1.0;
    let max = (grid - 1) as f64;
    if last < 0.0 || first > max {
        return None;
    }

    Some(CellSpan {
        lo: first.max(0.0) as u16,
        hi: last.min(max) as u16,
    })
}
