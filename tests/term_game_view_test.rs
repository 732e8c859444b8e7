use blockfall::core::{Session, SessionConfig, Snapshot};
use blockfall::term::{cell_color, GameView, Viewport};
use blockfall::types::{Command, EMPTY};

fn snapshot(seed: u32) -> Snapshot {
    Session::new(SessionConfig::default().with_seed(seed)).snapshot()
}

fn screen_text(fb: &blockfall::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snapshot(1);
    let view = GameView::default();

    // cell_w=2, cell_h=1: 10x20 board => 20x20 interior, 22x22 with border.
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    assert_eq!(view.frame_origin(&snap, vp), (0, 0));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_in_its_color() {
    let mut snap = snapshot(1);
    snap.active = None;
    snap.board[19 * 10] = 3;

    let view = GameView::default();
    let vp = Viewport::new(40, 24);
    let fb = view.render(&snap, vp);

    let (x0, y0) = view.cell_origin(&snap, vp, 0, 19);
    for x in [x0, x0 + 1] {
        let glyph = fb.get(x, y0).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(Some(glyph.style.fg), cell_color(3));
    }
    let (ex, ey) = view.cell_origin(&snap, vp, 1, 19);
    assert_eq!(fb.get(ex, ey).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_over_board() {
    let snap = snapshot(8);
    let active = snap.active.clone().unwrap();
    let view = GameView::default();
    let vp = Viewport::new(40, 24);
    let fb = view.render(&snap, vp);

    for (dx, dy, v) in active.shape.occupied() {
        let (px, py) = view.cell_origin(
            &snap,
            vp,
            (active.x + dx as i16) as u16,
            (active.y + dy as i16) as u16,
        );
        let glyph = fb.get(px, py).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(Some(glyph.style.fg), cell_color(v));
    }
    assert!(snap.board.iter().all(|&c| c == EMPTY));
}

#[test]
fn term_view_draws_side_panel() {
    let mut snap = snapshot(1);
    snap.score = 1234;
    snap.lines_cleared = 17;

    let fb = GameView::default().render(&snap, Viewport::new(60, 24));
    let text = screen_text(&fb);

    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("LINES"));
    assert!(text.contains("17"));
    assert!(text.contains("NEXT"));
    assert!(!text.contains("PAUSED"));
}

#[test]
fn term_view_shows_pause_overlay() {
    let mut session = Session::new(SessionConfig::default().with_seed(1));
    session.apply(Command::TogglePause);

    let fb = GameView::default().render(&session.snapshot(), Viewport::new(60, 24));
    assert!(screen_text(&fb).contains("PAUSED"));
}

#[test]
fn term_view_follows_board_size() {
    let snap = Session::new(SessionConfig::default().with_size(6, 8).with_seed(1)).snapshot();
    let view = GameView::new(1, 1);
    let vp = Viewport::new(8, 10);
    let fb = view.render(&snap, vp);

    // 6x8 board with border is 8x10; the panel falls off the right edge.
    assert_eq!(view.frame_origin(&snap, vp), (0, 0));
    assert_eq!(fb.get(7, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
}
