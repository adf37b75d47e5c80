use tui_blocks::core::{GameEngine, MemoryScoreStore, MenuSnapshot, NoScoreStore, SessionSnapshot};
use tui_blocks::term::{palette, FrameBuffer, GameView, Viewport};
use tui_blocks::types::Difficulty;

fn playing(difficulty: Difficulty) -> tui_blocks::core::GameSnapshot {
    GameEngine::new(difficulty, 1, NoScoreStore).snapshot()
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();

    // With 2 columns per cell: well = 20x20, plus border => 22x22
    let snap = SessionSnapshot::Playing(playing(Difficulty::Easy));
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = playing(Difficulty::Easy);
    snap.board[19][0] = 3;

    let fb = GameView::default().render(&SessionSnapshot::Playing(snap), Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    let left = fb.get(x0, y0).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(Some(left.style.fg), palette(3));
    assert_ne!(fb.get(x0 + 2, y0).unwrap().ch, '█');
}

#[test]
fn term_view_draws_current_piece() {
    let snap = playing(Difficulty::Medium);
    let current = snap.current;
    let fb = GameView::default().render(&SessionSnapshot::Playing(snap), Viewport::new(22, 22));

    for (x, y) in current.cells() {
        let glyph = fb.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(Some(glyph.style.fg), palette(current.color.index()));
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = playing(Difficulty::Hard);
    snap.score = 1234;
    snap.high_score = 5678;
    snap.lines = 10;

    let fb = GameView::default().render(&SessionSnapshot::Playing(snap), Viewport::new(60, 24));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("BEST"));
    assert!(all.contains("5678"));
    assert!(all.contains("LEVEL"));
    assert!(all.contains("Hard"));
    assert!(all.contains("LINES"));
    assert!(all.contains("NEXT"));
}

#[test]
fn term_view_omits_side_panel_on_narrow_viewports() {
    let fb = GameView::default().render(
        &SessionSnapshot::Playing(playing(Difficulty::Easy)),
        Viewport::new(24, 22),
    );
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_centers_board_on_tall_viewports() {
    let snap = SessionSnapshot::Playing(playing(Difficulty::Easy));
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_game_over_without_record() {
    let mut snap = playing(Difficulty::Easy);
    snap.game_over = true;

    let fb = GameView::default().render(&SessionSnapshot::Playing(snap), Viewport::new(60, 24));
    let all = screen_text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(!all.contains("NEW RECORD!"));
    assert!(all.contains("R restart"));
}

#[test]
fn term_view_renders_menu_with_bests() {
    let menu = MenuSnapshot::from_store(&MemoryScoreStore::with_bests([300, 4100, 0]));
    let fb = GameView::default().render(&SessionSnapshot::Menu(menu), Viewport::new(60, 20));
    let all = screen_text(&fb);

    assert!(all.contains("Select difficulty"));
    assert!(all.contains("Medium"));
    assert!(all.contains("4100"));
    assert!(all.contains("quit"));
    assert!(!all.contains('┌'));
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(
        &SessionSnapshot::Playing(playing(Difficulty::Easy)),
        Viewport::new(40, 22),
        &mut fb,
    );
    assert_eq!((fb.width(), fb.height()), (40, 22));
}
