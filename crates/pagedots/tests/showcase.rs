use pagedots::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pagedots::showcase::{map_terminal_event, Msg, Showcase, ShowcaseFlags};
use pagedots::testing::TestProgram;
use pagedots::widgets::pager::{Direction, Message};
use pagedots::widgets::{IndicatorConfig, ScrollState};
use pagedots::TerminalEvent;

fn animated_flags(pages: usize) -> ShowcaseFlags {
    ShowcaseFlags {
        pages,
        config: IndicatorConfig {
            animated: true,
            ..IndicatorConfig::default()
        },
        ..ShowcaseFlags::default()
    }
}

fn send(prog: &mut TestProgram<Showcase>, msg: Msg) {
    prog.send(msg);
    prog.drain_messages();
}

fn settle(prog: &mut TestProgram<Showcase>) {
    while prog.model().pager().state() == ScrollState::Settling {
        send(prog, Msg::Pager(Message::Tick));
    }
}

fn key(code: KeyCode) -> TerminalEvent {
    TerminalEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16) -> TerminalEvent {
    TerminalEvent::Mouse(MouseEvent {
        kind,
        column,
        row: 0,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn static_indicator_jumps_on_selection() {
    let mut prog = TestProgram::<Showcase>::new(ShowcaseFlags::default());
    assert_eq!(prog.model().indicator().total_pages(), 5);

    send(&mut prog, Msg::Pager(Message::Swipe(Direction::Forward)));
    // Selection arrives before the settle animation runs.
    assert_eq!(prog.model().indicator().displayed_position(), 1);
    assert_eq!(prog.model().indicator().current_page_offset(), 0.0);

    settle(&mut prog);
    assert_eq!(prog.model().pager().selected(), 1);
    assert_eq!(prog.model().indicator().displayed_position(), 1);
}

#[test]
fn animated_indicator_follows_drag() {
    let mut prog = TestProgram::<Showcase>::new(animated_flags(5));

    send(&mut prog, Msg::Pager(Message::DragBy(0.5)));
    let indicator = prog.model().indicator();
    assert_eq!(indicator.displayed_position(), 0);
    assert_eq!(indicator.current_page_offset(), 0.5);

    send(&mut prog, Msg::Pager(Message::Release));
    settle(&mut prog);
    let indicator = prog.model().indicator();
    assert_eq!(indicator.displayed_position(), 1);
    assert_eq!(indicator.current_page_offset(), 0.0);
}

#[test]
fn animated_indicator_stops_at_last_dot() {
    let mut prog = TestProgram::<Showcase>::new(animated_flags(3));
    send(&mut prog, Msg::Pager(Message::Select(2)));
    settle(&mut prog);

    let indicator = prog.model().indicator();
    assert_eq!(indicator.displayed_position(), 2);
    assert!(indicator.can_show_animation());
    assert_eq!(indicator.current_page_offset(), 0.0);
}

#[test]
fn mouse_drag_moves_pages() {
    let mut prog = TestProgram::<Showcase>::new(animated_flags(3));
    send(&mut prog, Msg::Resize(42, 20));

    send(&mut prog, Msg::MouseDown(30));
    send(&mut prog, Msg::MouseDrag(10));
    assert_eq!(prog.model().pager().scroll(), 0.5);
    assert_eq!(prog.model().pager().state(), ScrollState::Dragging);

    send(&mut prog, Msg::MouseUp);
    settle(&mut prog);
    assert_eq!(prog.model().pager().selected(), 1);
}

#[test]
fn mouse_drag_without_press_is_ignored() {
    let mut prog = TestProgram::<Showcase>::new(ShowcaseFlags::default());
    send(&mut prog, Msg::MouseDrag(10));
    send(&mut prog, Msg::MouseUp);
    assert_eq!(prog.model().pager().state(), ScrollState::Idle);
}

#[test]
fn toggles_flip_indicator_modes() {
    let mut prog = TestProgram::<Showcase>::new(ShowcaseFlags::default());
    send(&mut prog, Msg::ToggleAnimated);
    send(&mut prog, Msg::ToggleRtl);
    assert!(prog.model().indicator().is_animated());
    assert!(prog.model().indicator().is_rtl());
}

#[test]
fn rtl_with_dismiss_offset_clamps_to_first_dot() {
    let flags = ShowcaseFlags {
        rtl: true,
        page_index_offset: -1,
        ..ShowcaseFlags::default()
    };
    let prog = TestProgram::<Showcase>::new(flags);
    let indicator = prog.model().indicator();
    assert_eq!(indicator.position(), -1);
    assert_eq!(indicator.displayed_position(), 0);
}

#[test]
fn redraw_only_when_something_changed() {
    let mut prog = TestProgram::<Showcase>::new(ShowcaseFlags::default());
    prog.take_redraw();

    // Backward from the first page changes nothing.
    send(&mut prog, Msg::Pager(Message::Swipe(Direction::Backward)));
    assert!(!prog.take_redraw());

    send(&mut prog, Msg::Pager(Message::Swipe(Direction::Forward)));
    assert!(prog.take_redraw());
}

#[test]
fn quit_key_quits() {
    let mut prog = TestProgram::<Showcase>::new(ShowcaseFlags::default());
    let msg = map_terminal_event(key(KeyCode::Char('q'))).expect("q is bound");
    send(&mut prog, msg);
    assert!(prog.quit_requested());
}

#[test]
fn keys_and_mouse_map_to_messages() {
    assert_eq!(
        map_terminal_event(key(KeyCode::Right)),
        Some(Msg::Pager(Message::Swipe(Direction::Forward)))
    );
    assert_eq!(
        map_terminal_event(key(KeyCode::Char('3'))),
        Some(Msg::Pager(Message::Select(2)))
    );
    assert_eq!(
        map_terminal_event(mouse(MouseEventKind::Down(MouseButton::Left), 7)),
        Some(Msg::MouseDown(7))
    );
    assert_eq!(map_terminal_event(key(KeyCode::Char('z'))), None);
}

#[test]
fn render_shows_header_and_page() {
    let prog = TestProgram::<Showcase>::new(ShowcaseFlags::default());
    let screen = prog.render_string(60, 10);
    assert!(screen.contains("pagedots"));
    assert!(screen.contains("page 1/5"));
    assert!(screen.contains("Page 1"));
}
