//! GameView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, MenuSnapshot, PieceSnapshot, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

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

const BLACK: Rgb = Rgb::new(0, 0, 0);
const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_W: u16 = 12;
/// Rows the game over box occupies inside the well.
const OVERLAY_H: u16 = 7;

/// Color index (1..=7) to terminal color: red, green, blue, yellow, cyan, magenta, orange.
pub fn palette(index: u8) -> Option<Rgb> {
    match index {
        1 => Some(Rgb::new(230, 60, 60)),
        2 => Some(Rgb::new(80, 200, 90)),
        3 => Some(Rgb::new(70, 110, 230)),
        4 => Some(Rgb::new(240, 220, 70)),
        5 => Some(Rgb::new(70, 210, 220)),
        6 => Some(Rgb::new(210, 80, 210)),
        7 => Some(Rgb::new(255, 150, 40)),
        _ => None,
    }
}

/// Lays out the menu and play screens.
pub struct GameView {
    /// Well cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell keeps blocks roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        match snap {
            SessionSnapshot::Menu(menu) => self.render_menu(menu, viewport, fb),
            SessionSnapshot::Playing(game) => self.render_game(game, viewport, fb),
            SessionSnapshot::Quit => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn render_menu(&self, menu: &MenuSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let title = CellStyle::new(Rgb::new(70, 210, 220), BLACK).bold();
        let heading = CellStyle::default().bold();
        let text = CellStyle::default();
        let hint = CellStyle::default().dim();

        const BLOCK_H: u16 = 11;
        const ENTRY_W: u16 = 24;
        let w = viewport.width;
        let mut y = viewport.height.saturating_sub(BLOCK_H) / 2;

        fb.put_str_centered(0, w, y, "B L O C K S", title);
        y += 2;
        fb.put_str_centered(0, w, y, "Select difficulty", heading);
        y += 2;

        let x = w.saturating_sub(ENTRY_W) / 2;
        for (i, entry) in menu.entries.iter().enumerate() {
            let key_style = CellStyle::new(palette(i as u8 + 1).unwrap_or(BLACK), BLACK).bold();
            fb.put_u32(x, y, i as u32 + 1, key_style);
            fb.put_str(x + 3, y, entry.difficulty.label(), text);
            let best_x = fb.put_str(x + 12, y, "best ", hint);
            fb.put_u32(best_x, y, entry.best, text);
            y += 1;
        }

        y += 1;
        fb.put_str_centered(0, w, y, "Q / Esc  quit", hint);
        y += 2;
        fb.put_str_centered(0, w, y, "arrows/WASD move  up rotate", hint);
        y += 1;
        fb.put_str_centered(0, w, y, "space drop  esc menu", hint);
    }

    fn render_game(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let well_w = GRID_WIDTH as u16 * self.cell_w;
        let well_h = GRID_HEIGHT as u16;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well_bg = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        fb.fill_rect(start_x + 1, start_y + 1, well_w, well_h, ' ', well_bg);
        fb.draw_box(
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), BLACK),
        );

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let px = start_x + 1 + x as u16 * self.cell_w;
                let py = start_y + 1 + y as u16;
                match palette(cell) {
                    Some(rgb) => self.draw_block(fb, px, py, rgb),
                    None => fb.put_char(px, py, '·', well_bg),
                }
            }
        }

        // Current piece, clipped to the visible rows.
        if let Some(rgb) = palette(snap.current.color.index()) {
            for (x, y) in snap.current.cells() {
                if (0..GRID_WIDTH as i8).contains(&x) && (0..GRID_HEIGHT as i8).contains(&y) {
                    let px = start_x + 1 + x as u16 * self.cell_w;
                    let py = start_y + 1 + y as u16;
                    self.draw_block(fb, px, py, rgb);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_game_over(fb, snap, start_x + 1, start_y + 1, well_w, well_h);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, px: u16, py: u16, rgb: Rgb) {
        fb.fill_rect(px, py, self.cell_w, 1, '█', CellStyle::new(rgb, WELL_BG).bold());
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BLACK);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "BEST", label);
        fb.put_u32(panel_x, y + 1, snap.high_score, value);
        y += 3;

        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_str(panel_x, y + 1, snap.difficulty_label(), value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, &snap.next, panel_x, y + 1);
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, piece: &PieceSnapshot, x: u16, y: u16) {
        let Some(rgb) = palette(piece.color.index()) else {
            return;
        };
        for (dx, dy) in piece.shape.cells() {
            let px = x + dx as u16 * self.cell_w;
            let py = y + dy as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', CellStyle::new(rgb, BLACK).bold());
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        well_x: u16,
        well_y: u16,
        well_w: u16,
        well_h: u16,
    ) {
        let shade = CellStyle::new(Rgb::new(255, 255, 255), BLACK);
        let top = well_y + well_h.saturating_sub(OVERLAY_H) / 2;
        fb.fill_rect(well_x, top, well_w, OVERLAY_H, ' ', shade);

        let mut y = top + 1;
        fb.put_str_centered(well_x, well_w, y, "GAME OVER", shade.bold());
        y += 1;
        if snap.new_high_score {
            let record = CellStyle::new(Rgb::new(240, 220, 70), BLACK).bold();
            fb.put_str_centered(well_x, well_w, y, "NEW RECORD!", record);
        }
        y += 2;
        fb.put_str_centered(well_x, well_w, y, "R restart", shade);
        y += 1;
        fb.put_str_centered(well_x, well_w, y, "M menu", shade);
    }
}
