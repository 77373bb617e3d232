use anyhow::Result;
use cucumber::World;
use std::io::Write;
use tempfile::NamedTempFile;

use gim::repl::io::{MockEventStream, MockRenderStream, RenderHistory};
use gim::{source_file, AppController, EditorState, ExitStatus, InputEvent, Viewport};

type Controller = AppController<MockEventStream, MockRenderStream>;

/// Scenario state: the file and terminal the editor starts with, the input
/// queued by `When` steps, and the finished controller once it has run.
#[derive(World)]
#[world(init = Self::new)]
pub struct GimWorld {
    /// Lines written to the temporary source file
    pub file_lines: Vec<String>,

    /// Terminal extent reported by the render stream
    pub viewport: Viewport,

    /// Input queued for the editor, in order
    pub events: Vec<InputEvent>,

    /// Controller after the input loop ended
    controller: Option<Controller>,

    /// Output captured from the render stream
    history: RenderHistory,

    /// How the input loop ended
    pub exit_status: Option<ExitStatus>,
}

impl std::fmt::Debug for GimWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GimWorld")
            .field("file_lines", &self.file_lines)
            .field("viewport", &self.viewport)
            .field("events", &self.events)
            .field("exit_status", &self.exit_status)
            .finish()
    }
}

impl GimWorld {
    pub fn new() -> Self {
        Self {
            file_lines: Vec::new(),
            viewport: Viewport::new(24, 80),
            events: Vec::new(),
            controller: None,
            history: RenderHistory::default(),
            exit_status: None,
        }
    }

    /// Queue one raw input chunk
    pub fn send(&mut self, bytes: impl AsRef<[u8]>) {
        self.events.push(InputEvent::data(bytes));
    }

    /// Write the file, load it the way the binary does and run the loop over the queued input.
    ///
    /// Runs at most once per scenario; later calls are no-ops.
    pub async fn finish(&mut self) -> Result<()> {
        if self.controller.is_some() {
            return Ok(());
        }

        let mut file = NamedTempFile::new()?;
        for line in &self.file_lines {
            writeln!(file, "{line}")?;
        }
        file.flush()?;
        let lines = source_file::load_lines(file.path())?;

        let stream = MockRenderStream::with_viewport(self.viewport);
        self.history = stream.history();
        let events = MockEventStream::new(std::mem::take(&mut self.events));
        let mut controller =
            AppController::with_io_streams(EditorState::from_lines(lines), events, stream)?;

        self.exit_status = Some(controller.run().await?);
        self.controller = Some(controller);
        Ok(())
    }

    /// Editor state after the run
    pub async fn state(&mut self) -> &EditorState {
        self.finish().await.expect("editor run failed");
        self.controller
            .as_ref()
            .expect("controller is set after finish")
            .editor_state()
    }

    /// Everything written to the terminal during the run
    pub async fn output(&mut self) -> String {
        self.finish().await.expect("editor run failed");
        self.history.output_string()
    }
}

impl Default for GimWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand `\e` and `\n` as written in feature files
pub fn unescape(text: &str) -> String {
    text.replace("\\e", "\x1b").replace("\\n", "\n")
}

/// Raw bytes a terminal sends for a named key
pub fn key_bytes(name: &str) -> &'static [u8] {
    match name {
        "Escape" => b"\x1b",
        "Up" => b"\x1b[A",
        "Down" => b"\x1b[B",
        "Right" => b"\x1b[C",
        "Left" => b"\x1b[D",
        "Enter" => b"\r",
        "Backspace" => b"\x7f",
        "Delete" => b"\x1b[3~",
        "Ctrl-C" => b"\x03",
        "Ctrl-H" => b"\x08",
        other => panic!("unknown key name: {other}"),
    }
}

/// Parse space-separated hex bytes such as `1B 4F 41`
pub fn hex_bytes(text: &str) -> Vec<u8> {
    text.split_whitespace()
        .map(|byte| u8::from_str_radix(byte, 16).expect("invalid hex byte"))
        .collect()
}
