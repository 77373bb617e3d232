//! Steps checking the editor after its input loop ended

use crate::common::world::{unescape, GimWorld};
use cucumber::then;
use gim::{CursorPosition, EditorMode};

#[then(regex = r"^the editor exits with status (\d+)$")]
async fn exits_with_status(world: &mut GimWorld, code: u8) {
    world.finish().await.expect("editor run failed");
    let status = world.exit_status.expect("exit status is set after the run");
    assert_eq!(status.code(), code);
}

#[then(regex = r"^the mode is (Normal|Insert|Command)$")]
async fn mode_is(world: &mut GimWorld, mode: String) {
    let expected = match mode.as_str() {
        "Normal" => EditorMode::Normal,
        "Insert" => EditorMode::Insert,
        _ => EditorMode::Command,
    };
    assert_eq!(world.state().await.get_mode(), expected);
}

#[then(regex = r"^the cursor is at column (\d+) row (\d+)$")]
async fn cursor_is_at(world: &mut GimWorld, x: usize, y: usize) {
    assert_eq!(
        world.state().await.get_cursor_position(),
        CursorPosition::new(x, y)
    );
}

#[then(regex = r#"^line (\d+) reads "(.*)"$"#)]
async fn line_reads(world: &mut GimWorld, row: usize, text: String) {
    let state = world.state().await;
    assert_eq!(state.buffer().line(row), Some(text.as_bytes()));
}

#[then(regex = r"^the buffer has (\d+) lines?$")]
async fn buffer_has_lines(world: &mut GimWorld, count: usize) {
    assert_eq!(world.state().await.buffer().line_count(), count);
}

#[then(regex = r#"^the pending command is "(.*)"$"#)]
async fn pending_command_is(world: &mut GimWorld, command: String) {
    assert_eq!(world.state().await.get_ex_command_buffer(), command);
}

#[then(regex = r#"^the output starts with "(.*)"$"#)]
async fn output_starts_with(world: &mut GimWorld, expected: String) {
    let output = world.output().await;
    let expected = unescape(&expected);
    assert!(
        output.starts_with(&expected),
        "output {output:?} does not start with {expected:?}"
    );
}

#[then(regex = r#"^the output ends with "(.*)"$"#)]
async fn output_ends_with(world: &mut GimWorld, expected: String) {
    let output = world.output().await;
    let expected = unescape(&expected);
    assert!(
        output.ends_with(&expected),
        "output {output:?} does not end with {expected:?}"
    );
}

/// The status text is padded to a fixed width before the cursor is restored
#[then(regex = r#"^the last status reads "(.*)"$"#)]
async fn last_status_reads(world: &mut GimWorld, text: String) {
    let rows = world.viewport.rows;
    let output = world.output().await;
    let position = world.state().await.get_cursor_position();
    let expected = format!(
        "\x1b[{rows};0H\x1b[2K{text:<30}\x1b[{};{}H",
        position.y, position.x
    );
    assert!(
        output.ends_with(&expected),
        "output {output:?} does not end with {expected:?}"
    );
}

#[then("no status update was written")]
async fn no_status_update(world: &mut GimWorld) {
    let rows = world.viewport.rows;
    let output = world.output().await;
    assert!(!output.contains(&format!("\x1b[{rows};0H")));
}

#[then(regex = r"^the screen was cleared (\d+) times?$")]
async fn screen_cleared(world: &mut GimWorld, count: usize) {
    assert_eq!(world.output().await.matches("\x1b[2J").count(), count);
}
