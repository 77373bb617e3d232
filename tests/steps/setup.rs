//! Steps describing the file and terminal the editor starts with

use crate::common::world::GimWorld;
use cucumber::given;
use gim::Viewport;

#[given(regex = r#"^the file contains the line "(.*)"$"#)]
fn file_contains_line(world: &mut GimWorld, line: String) {
    world.file_lines.push(line);
}

#[given("the file contains an empty line")]
fn file_contains_empty_line(world: &mut GimWorld) {
    world.file_lines.push(String::new());
}

#[given("an empty file")]
fn empty_file(world: &mut GimWorld) {
    world.file_lines.clear();
}

#[given(regex = r"^a terminal with (\d+) rows and (\d+) columns$")]
fn terminal_size(world: &mut GimWorld, rows: u16, columns: u16) {
    world.viewport = Viewport::new(rows, columns);
}
