//! # Application Controller
//!
//! Drains the ordered input queue, decodes each chunk into a key, hands it to
//! the editor state and lets the renderer draw whatever the state asked for.

use anyhow::Result;

use crate::exit_status::ExitStatus;
use crate::repl::{
    events::{decode, InputEvent, Viewport},
    io::{EventStream, RenderStream},
    view_models::{Dispatch, EditorState},
    views::{TerminalRenderer, ViewRenderer},
};

/// The input loop
pub struct AppController<ES: EventStream, RS: RenderStream> {
    editor_state: EditorState,
    view_renderer: TerminalRenderer<RS>,
    event_stream: ES,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create the controller, sizing the renderer from the render stream
    pub fn with_io_streams(
        editor_state: EditorState,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let view_renderer = TerminalRenderer::new(render_stream)?;
        tracing::debug!(viewport = ?view_renderer.viewport(), "controller created");
        Ok(Self {
            editor_state,
            view_renderer,
            event_stream,
        })
    }

    /// Run until input ends, a signal arrives or the user interrupts.
    ///
    /// The terminal is restored before returning, including on error.
    pub async fn run(&mut self) -> Result<ExitStatus> {
        let result = self.event_loop().await;
        let cleanup = self.view_renderer.cleanup();
        let status = result?;
        cleanup?;
        tracing::info!(?status, "input loop finished");
        Ok(status)
    }

    async fn event_loop(&mut self) -> Result<ExitStatus> {
        self.view_renderer.initialize()?;
        self.view_renderer.render_full(&self.editor_state)?;

        loop {
            let Some(event) = self.event_stream.next_event().await? else {
                return Ok(ExitStatus::Ok);
            };

            match event {
                InputEvent::Data(chunk) => {
                    if let Dispatch::Exit(status) = self.process_input(&chunk)? {
                        return Ok(status);
                    }
                }
                InputEvent::Resize(viewport) => self.handle_resize(viewport)?,
                InputEvent::Interrupt => return Ok(ExitStatus::Interrupted),
                InputEvent::Terminate => return Ok(ExitStatus::Terminated),
            }
        }
    }

    /// Decode and dispatch one input chunk, then render what it changed
    pub fn process_input(&mut self, chunk: &bytes::Bytes) -> Result<Dispatch> {
        let key = decode(chunk);
        tracing::debug!(?key, mode = %self.editor_state.get_mode(), "dispatching key");

        let dispatch = self.editor_state.dispatch(key);
        if dispatch == Dispatch::Continue {
            self.process_view_events()?;
        }
        Ok(dispatch)
    }

    fn handle_resize(&mut self, viewport: Viewport) -> Result<()> {
        tracing::info!(rows = viewport.rows, columns = viewport.columns, "terminal resized");
        self.view_renderer.update_viewport(viewport);
        self.view_renderer.render_full(&self.editor_state)?;
        if self.editor_state.is_command_mode() {
            self.view_renderer.render_command_line(&self.editor_state)?;
        }
        Ok(())
    }

    fn process_view_events(&mut self) -> Result<()> {
        let events = self.editor_state.collect_pending_view_events();
        for event in &events {
            self.view_renderer.handle_view_event(event, &self.editor_state)?;
        }
        Ok(())
    }

    pub fn editor_state(&self) -> &EditorState {
        &self.editor_state
    }

    pub fn viewport(&self) -> Viewport {
        self.view_renderer.viewport()
    }
}
