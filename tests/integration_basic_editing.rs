use gim::repl::io::{MockEventStream, MockRenderStream, RenderCommand};
use gim::{
    AppController, CursorPosition, EditorMode, EditorState, ExitStatus, InputEvent, Viewport,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn load_state(contents: &str) -> EditorState {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    EditorState::from_lines(gim::source_file::load_lines(file.path()).unwrap())
}

fn keys(chunks: &[&[u8]]) -> Vec<InputEvent> {
    chunks.iter().map(InputEvent::data).collect()
}

/// Integration test for a short editing session
/// Sequence: Down => Right => Right => i => "i" => Esc => : => "wq" => Enter => Ctrl+C
#[tokio::test]
async fn test_basic_editing_workflow() {
    let state = load_state("Hello World!\r\nI am bob\r\n");
    let events = keys(&[
        b"\x1b[B",
        b"\x1b[C",
        b"\x1b[C",
        b"i",
        b"i",
        b"\x1b",
        b":",
        b"w",
        b"q",
        b"\r",
        b"\x03",
        b"never processed",
    ]);
    let stream = MockRenderStream::with_viewport(Viewport::new(100, 80));
    let history = stream.history();
    let mut controller =
        AppController::with_io_streams(state, MockEventStream::new(events), stream).unwrap();

    let status = controller.run().await.unwrap();

    assert_eq!(status, ExitStatus::Interrupted);
    assert_eq!(status.code(), 130);

    let state = controller.editor_state();
    assert_eq!(state.get_mode(), EditorMode::Normal);
    assert_eq!(state.get_cursor_position(), CursorPosition::new(4, 2));
    assert_eq!(state.buffer().line(1), Some(&b"Hello World!"[..]));
    assert_eq!(state.buffer().line(2), Some(&b"I iam bob"[..]));
    assert_eq!(state.get_ex_command_buffer(), "");

    let output = history.output_string();
    assert!(output.contains("\x1b[2;0HI iam bob\x1b[2;4H"));
    assert!(output.contains("\x1b[100;0H\x1b[2K:wq"));
    assert!(output.ends_with("\x1b[100;0H\x1b[2K\x1b[2;4H"));

    // Raw mode is on while editing and off after exit
    assert_eq!(history.commands()[0], RenderCommand::GetViewport);
    assert_eq!(history.commands()[1], RenderCommand::EnableRawMode);
    assert!(!history.raw_mode());
}

#[tokio::test]
async fn test_resize_repaints_before_next_key() {
    let state = load_state("one\ntwo\nthree\n");
    let events = vec![
        InputEvent::Resize(Viewport::new(3, 20)),
        InputEvent::data(b"\x1b[B"),
    ];
    let stream = MockRenderStream::with_viewport(Viewport::new(10, 20));
    let history = stream.history();
    let mut controller =
        AppController::with_io_streams(state, MockEventStream::new(events), stream).unwrap();

    assert_eq!(controller.run().await.unwrap(), ExitStatus::Ok);

    let output = history.output_string();
    let repaint = "\x1b[2J\x1b[Hone\ntwo\n\x1b[1;1H";
    let status = format!("\x1b[3;0H\x1b[2K{:<30}\x1b[2;1H", "> X: 1, Y: 2, Down");
    assert!(output.ends_with(&format!("{repaint}{status}")));
}
