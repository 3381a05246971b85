use nyan::app::{Message, Model, update};
use nyan::editor::{Cursor, Direction, LineBuffer, Loaded, persist};
use nyan::ui::layout::LayoutOutcome;

fn run(model: Model, messages: impl IntoIterator<Item = Message>) -> Model {
    messages.into_iter().fold(model, update)
}

fn typed(text: &str) -> Vec<Message> {
    text.chars()
        .map(|c| {
            if c == '\n' {
                Message::InsertNewline
            } else {
                Message::InsertChar(c)
            }
        })
        .collect()
}

#[test]
fn test_typed_session_saves_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poem.txt");

    let model = Model::open(Some(path.clone()), (80, 24));
    let mut model = run(model, typed("roses\nviolets\nnyan"));
    assert!(model.is_modified());
    assert!(model.save());
    assert!(!model.is_modified());

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "roses\nviolets\nnyan\n"
    );

    let reopened = Model::open(Some(path), (80, 24));
    assert_eq!(reopened.buffer.lines(), vec!["roses", "violets", "nyan"]);
    assert_eq!(reopened.buffer.cursor(), Cursor::at(0, 0));
    assert!(!reopened.is_modified());
}

#[test]
fn test_crlf_file_is_normalized_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dos.txt");
    std::fs::write(&path, "one\r\ntwo\r\n").unwrap();

    let mut buffer = persist::load(&path).unwrap().into_buffer();
    assert_eq!(buffer.lines(), vec!["one", "two"]);
    buffer.move_to(1, 3);
    buffer.insert_char('!');
    persist::save(&mut buffer, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo!\n");
}

#[test]
fn test_load_distinguishes_new_and_existing() {
    let dir = tempfile::tempdir().unwrap();
    let fresh = dir.path().join("fresh.txt");
    assert!(matches!(persist::load(&fresh), Ok(Loaded::NewFile(_))));

    std::fs::write(&fresh, "x\n").unwrap();
    assert!(matches!(persist::load(&fresh), Ok(Loaded::Existing(_))));
}

#[test]
fn test_newline_in_middle_of_document() {
    let mut buffer = LineBuffer::from_lines(&["abc", "de", "f"]);
    buffer.move_to(1, 2);
    buffer.insert_newline();
    assert_eq!(buffer.lines(), vec!["abc", "de", "", "f"]);
    assert_eq!(buffer.cursor(), Cursor::at(2, 0));
}

#[test]
fn test_backspace_until_empty() {
    let mut buffer = LineBuffer::from_lines(&["ab"]);
    buffer.move_to(0, 2);
    assert!(buffer.delete_backward());
    assert!(buffer.delete_backward());
    assert_eq!(buffer.lines(), vec![""]);
    assert_eq!(buffer.cursor(), Cursor::at(0, 0));
    assert!(!buffer.delete_backward());
}

#[test]
fn test_scroll_follows_cursor_through_long_document() {
    let lines: Vec<String> = (0..200).map(|i| format!("row {i}")).collect();
    let mut model = Model::new(LineBuffer::from_lines(&lines), None, (80, 30));
    let LayoutOutcome::Ready(geometry) = model.layout() else {
        panic!("80x30 should fit the chrome");
    };
    let text_rows = usize::from(geometry.text_rows());

    model = run(model, std::iter::repeat_n(Message::MoveCursor(Direction::Down), 150));
    let scroll = model.buffer.scroll();
    let row = model.buffer.cursor().row;
    assert_eq!(row, 150);
    assert!(scroll <= row && row < scroll + text_rows);

    model = run(model, std::iter::repeat_n(Message::MoveCursor(Direction::Up), 150));
    assert_eq!(model.buffer.scroll(), 0);
}

#[test]
fn test_growing_document_grows_editor_region() {
    let model = Model::new(LineBuffer::new(), None, (80, 40));
    let LayoutOutcome::Ready(before) = model.layout() else {
        panic!("80x40 should fit the chrome");
    };
    let model = run(model, typed("a\nb\nc\nd"));
    let LayoutOutcome::Ready(after) = model.layout() else {
        panic!("80x40 should fit the chrome");
    };
    assert_eq!(before.editor_height(), 6);
    assert_eq!(after.editor_height(), 9);
}
