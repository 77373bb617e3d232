//! Steps queueing input for the editor

use crate::common::world::{hex_bytes, key_bytes, GimWorld};
use cucumber::when;
use gim::{InputEvent, Viewport};

#[when(regex = r#"^I press "([^"]+)"$"#)]
fn press_key(world: &mut GimWorld, key: String) {
    world.send(key_bytes(&key));
}

#[when(regex = r#"^I press "([^"]+)" (\d+) times$"#)]
fn press_key_repeatedly(world: &mut GimWorld, key: String, count: usize) {
    for _ in 0..count {
        world.send(key_bytes(&key));
    }
}

/// One chunk per character, as a person typing would produce
#[when(regex = r#"^I type "([^"]*)"$"#)]
fn type_text(world: &mut GimWorld, text: String) {
    for ch in text.chars() {
        world.send(ch.to_string());
    }
}

#[when(regex = r#"^the terminal sends "([^"]*)" in one read$"#)]
fn send_chunk(world: &mut GimWorld, text: String) {
    world.send(text);
}

#[when(regex = r"^the terminal sends the bytes ([0-9A-Fa-f ]+)$")]
fn send_hex(world: &mut GimWorld, bytes: String) {
    world.send(hex_bytes(&bytes));
}

#[when(regex = r"^the terminal is resized to (\d+) rows and (\d+) columns$")]
fn resize(world: &mut GimWorld, rows: u16, columns: u16) {
    world.events.push(InputEvent::Resize(Viewport::new(rows, columns)));
}

#[when("the process receives SIGINT")]
fn sigint(world: &mut GimWorld) {
    world.events.push(InputEvent::Interrupt);
}

#[when("the process receives SIGTERM")]
fn sigterm(world: &mut GimWorld) {
    world.events.push(InputEvent::Terminate);
}
