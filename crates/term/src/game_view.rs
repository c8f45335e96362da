//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: the bordered 3x3 board on the left, a side panel with the status
//! line, sort order and the move list on the right, and a one-line key help
//! on the bottom row. The same [`Layout`] drives rendering and mouse
//! hit-testing so a click always lands on what was drawn.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{cell_coords, Intent, Phase, Player, BOARD_CELLS, BOARD_SIDE};

/// Columns between the board frame and the side panel.
const PANEL_GAP: u16 = 3;
/// Narrowest side panel worth drawing.
const PANEL_MIN_W: u16 = 20;
/// Widest side panel.
const PANEL_MAX_W: u16 = 30;
/// Panel rows above the first move-list row (status, sort, blank, header).
const PANEL_HEADER_ROWS: u16 = 4;

const HELP: &str = "1-9/Enter play  [ ] step  s sort  r restart  q quit";

const GRID_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the side panel goes for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    /// Row of the first move-list entry.
    pub moves_y: u16,
    /// Number of move-list rows that fit.
    pub moves_rows: u16,
}

/// Screen positions of every element for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub board_x: u16,
    pub board_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub panel: Option<PanelLayout>,
}

/// A lightweight terminal renderer for the tic-tac-toe game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 5x1 keeps cells roughly square on typical terminal fonts.
        Self {
            cell_w: 5,
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

    /// Compute element positions for `viewport`.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let side = BOARD_SIDE as u16;
        let frame_w = side * self.cell_w + side + 1;
        let frame_h = side * self.cell_h + side + 1;
        // Keep room under the board for the help line.
        let content_h = frame_h + 2;

        let board_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(content_h) / 2,
            AnchorY::Top => 0,
        };

        let room = viewport
            .width
            .saturating_sub(frame_w)
            .saturating_sub(PANEL_GAP);
        if room >= PANEL_MIN_W {
            let width = room.min(PANEL_MAX_W);
            let total = frame_w + PANEL_GAP + width;
            let board_x = viewport.width.saturating_sub(total) / 2;
            let moves_y = board_y.saturating_add(PANEL_HEADER_ROWS);
            Layout {
                board_x,
                board_y,
                frame_w,
                frame_h,
                panel: Some(PanelLayout {
                    x: board_x + frame_w + PANEL_GAP,
                    y: board_y,
                    width,
                    moves_y,
                    // Last row is reserved for the key help.
                    moves_rows: viewport.height.saturating_sub(moves_y).saturating_sub(1),
                }),
            }
        } else {
            Layout {
                board_x: viewport.width.saturating_sub(frame_w) / 2,
                board_y,
                frame_w,
                frame_h,
                panel: None,
            }
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes. `cursor` is the highlighted board cell, if any.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let grid = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.fill_rect(
            layout.board_x + 1,
            layout.board_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            CellStyle::plain(GRID_BG, GRID_BG),
        );
        self.draw_grid(fb, &layout, grid);

        for index in 0..BOARD_CELLS {
            self.draw_cell(fb, &layout, snap, index, cursor == Some(index));
        }

        // Key help on the last row, when it does not touch the board.
        let help_y = viewport.height.saturating_sub(1);
        if help_y >= layout.board_y + layout.frame_h {
            let help = CellStyle::default().dim();
            fb.put_str(layout.board_x, help_y, HELP, help);
        }

        match layout.panel {
            Some(panel) => self.draw_side_panel(fb, snap, &panel),
            None => {
                // No room for the panel: status goes under the board.
                let status_y = layout.board_y + layout.frame_h;
                if status_y < help_y {
                    fb.put_str_max(
                        layout.board_x,
                        status_y,
                        &snap.status,
                        viewport.width.saturating_sub(layout.board_x),
                        status_style(snap.phase),
                    );
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    /// Map a mouse position to an intent.
    ///
    /// Board cells yield [`Intent::SelectCell`], move-list rows yield
    /// [`Intent::SelectHistoryStep`]. Borders, separators and empty space
    /// yield nothing.
    pub fn hit_test(&self, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) -> Option<Intent> {
        let layout = self.layout(viewport);

        if let Some(index) = self.cell_at(&layout, x, y) {
            return Some(Intent::SelectCell(index));
        }

        let panel = layout.panel?;
        if x < panel.x || x >= panel.x + panel.width || y < panel.moves_y {
            return None;
        }
        let row = (y - panel.moves_y) as usize;
        if row >= panel.moves_rows as usize {
            return None;
        }
        let offset = scroll_offset(snap, panel.moves_rows);
        snap.moves
            .get(offset + row)
            .map(|m| Intent::SelectHistoryStep(m.move_index))
    }

    /// Top-left terminal position of a board cell's interior.
    pub fn cell_origin(&self, layout: &Layout, index: usize) -> (u16, u16) {
        let (row, col) = cell_coords(index);
        let x = layout.board_x + 1 + (col as u16) * (self.cell_w + 1);
        let y = layout.board_y + 1 + (row as u16) * (self.cell_h + 1);
        (x, y)
    }

    fn cell_at(&self, layout: &Layout, x: u16, y: u16) -> Option<usize> {
        (0..BOARD_CELLS).find(|&i| {
            let (cx, cy) = self.cell_origin(layout, i);
            x >= cx && x < cx + self.cell_w && y >= cy && y < cy + self.cell_h
        })
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &Layout, style: CellStyle) {
        let (x, y, w, h) = (layout.board_x, layout.board_y, layout.frame_w, layout.frame_h);
        if w < 2 || h < 2 {
            return;
        }

        let col_sep = |dx: u16| dx % (self.cell_w + 1) == 0;
        let row_sep = |dy: u16| dy % (self.cell_h + 1) == 0;

        for dy in 0..h {
            for dx in 0..w {
                let (v, hz) = (col_sep(dx), row_sep(dy));
                if !v && !hz {
                    continue;
                }
                let top = dy == 0;
                let bottom = dy == h - 1;
                let left = dx == 0;
                let right = dx == w - 1;
                let ch = match (top, bottom, left, right) {
                    (true, _, true, _) => '┌',
                    (true, _, _, true) => '┐',
                    (_, true, true, _) => '└',
                    (_, true, _, true) => '┘',
                    (true, _, _, _) if v => '┬',
                    (_, true, _, _) if v => '┴',
                    (_, _, true, _) if hz => '├',
                    (_, _, _, true) if hz => '┤',
                    _ if v && hz => '┼',
                    _ if v => '│',
                    _ => '─',
                };
                fb.put_char(x + dx, y + dy, ch, style);
            }
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        snap: &GameSnapshot,
        index: usize,
        under_cursor: bool,
    ) {
        let winning = snap.is_winning_cell(index);
        let bg = if winning {
            Rgb::new(70, 20, 20)
        } else if under_cursor {
            Rgb::new(70, 70, 95)
        } else {
            GRID_BG
        };

        let (ch, style) = match snap.board[index] {
            Some(player) => {
                let fg = if winning {
                    Rgb::new(235, 60, 60)
                } else {
                    player_color(player)
                };
                (player_char(player), CellStyle::plain(fg, bg).bold())
            }
            None => {
                let hint = char::from_digit(index as u32 + 1, 10).unwrap_or(' ');
                (hint, CellStyle::plain(Rgb::new(90, 90, 100), bg).dim())
            }
        };

        let (x, y) = self.cell_origin(layout, index);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', CellStyle::plain(bg, bg));
        fb.put_char(x + self.cell_w / 2, y + self.cell_h / 2, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, panel: &PanelLayout) {
        fb.put_str_max(
            panel.x,
            panel.y,
            &snap.status,
            panel.width,
            status_style(snap.phase),
        );

        let dim = CellStyle::default().dim();
        let order = if snap.sort_descending {
            "Sort: descending"
        } else {
            "Sort: ascending"
        };
        fb.put_str_max(panel.x, panel.y + 1, order, panel.width, dim);

        let label = CellStyle::default().bold().underline();
        fb.put_str_max(panel.x, panel.y + 3, "MOVES", panel.width, label);

        let offset = scroll_offset(snap, panel.moves_rows);
        let value = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
        for (row, entry) in snap
            .moves
            .iter()
            .skip(offset)
            .take(panel.moves_rows as usize)
            .enumerate()
        {
            let y = panel.moves_y + row as u16;
            let style = if entry.selected {
                CellStyle::plain(Rgb::new(255, 255, 255), SCREEN_BG).bold()
            } else {
                value
            };
            let marker = if entry.selected { '>' } else { ' ' };
            let line = format!("{} {:>2}. {}", marker, entry.move_index, entry.label);
            fb.put_str_max(panel.x, y, &line, panel.width, style);
        }
    }
}

/// First move-list entry shown so the selected entry stays visible.
fn scroll_offset(snap: &GameSnapshot, rows: u16) -> usize {
    let rows = rows as usize;
    match snap.selected_row() {
        Some(sel) if rows > 0 && sel >= rows => sel + 1 - rows,
        _ => 0,
    }
}

fn status_style(phase: Phase) -> CellStyle {
    let fg = match phase {
        Phase::Won(_) => Rgb::new(235, 60, 60),
        Phase::Draw => Rgb::new(240, 200, 80),
        Phase::InProgress => Rgb::new(230, 230, 230),
    };
    CellStyle::plain(fg, SCREEN_BG).bold()
}

fn player_char(player: Player) -> char {
    match player {
        Player::X => 'X',
        Player::O => 'O',
    }
}

fn player_color(player: Player) -> Rgb {
    match player {
        Player::X => Rgb::new(80, 180, 240),
        Player::O => Rgb::new(240, 200, 80),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn narrow_viewport_drops_panel() {
        let view = GameView::default();
        let layout = view.layout(Viewport::new(30, 12));
        assert!(layout.panel.is_none());
        assert_eq!((layout.frame_w, layout.frame_h), (19, 7));
        assert_eq!(layout.board_x, 5);
    }

    #[test]
    fn narrow_viewport_shows_status_under_board() {
        let view = GameView::default();
        let snap = GameState::new().snapshot();
        let fb = view.render(&snap, None, Viewport::new(30, 12));
        let layout = view.layout(Viewport::new(30, 12));
        let row = fb.row_text(layout.board_y + layout.frame_h);
        assert!(row.contains("Next player: X"), "row was {:?}", row);
    }

    #[test]
    fn wide_viewport_places_panel_right_of_board() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let layout = view.layout(Viewport::new(80, 24));
        let panel = layout.panel.unwrap();
        assert_eq!(panel.width, PANEL_MAX_W);
        assert_eq!(panel.x, layout.board_x + layout.frame_w + PANEL_GAP);
        assert_eq!(panel.moves_y, PANEL_HEADER_ROWS);
        assert_eq!(panel.moves_rows, 24 - PANEL_HEADER_ROWS - 1);
    }

    #[test]
    fn scroll_keeps_selected_entry_visible() {
        let mut state = GameState::new();
        for c in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.apply_move(c);
        }
        let snap = state.snapshot();
        assert_eq!(snap.selected_row(), Some(9));
        assert_eq!(scroll_offset(&snap, 4), 6);
        assert_eq!(scroll_offset(&snap, 20), 0);
        assert_eq!(scroll_offset(&snap, 0), 0);
    }

    #[test]
    fn cell_hit_test_matches_origin() {
        let view = GameView::default();
        let snap = GameState::new().snapshot();
        let vp = Viewport::new(19, 7);
        let layout = view.layout(vp);
        for i in 0..BOARD_CELLS {
            let (x, y) = view.cell_origin(&layout, i);
            assert_eq!(view.hit_test(&snap, vp, x, y), Some(Intent::SelectCell(i)));
            assert_eq!(view.hit_test(&snap, vp, x + 4, y), Some(Intent::SelectCell(i)));
        }
        // Separators and borders are not cells.
        assert_eq!(view.hit_test(&snap, vp, 0, 0), None);
        assert_eq!(view.hit_test(&snap, vp, 6, 1), None);
        assert_eq!(view.hit_test(&snap, vp, 1, 2), None);
    }
}
