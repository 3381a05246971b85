use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, update};
use crate::editor::LineBuffer;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized or an I/O
    /// error occurs while drawing or reading input. File I/O failures are
    /// not errors here; they are reported on the message line.
    pub fn run(&self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; nyan requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(LineBuffer::new(), None, (size.width, size.height))
            .with_chrome(self.chrome)
            .with_status_ttl(self.status_ttl);
        model.load(self.file_path.clone());
        tracing::info!(
            file = %model.file_label(),
            lines = model.buffer.line_count(),
            "session started"
        );

        let result = Self::event_loop(&mut terminal, &mut model);

        // Restore terminal
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;

        loop {
            // Terminal size is re-queried every frame rather than cached.
            let size = terminal.size()?;
            model.set_terminal_size(size.width, size.height);
            model.sync_scroll();

            frame_idx += 1;
            terminal.draw(|frame| crate::ui::render(model, frame))?;
            tracing::trace!(frame = frame_idx, scroll = model.buffer.scroll(), "frame drawn");

            // One blocking read per iteration.
            let event = event::read().context("Failed to read terminal input")?;
            if let Some(msg) = Self::handle_event(&event, model) {
                tracing::debug!(frame = frame_idx, ?msg, "message");
                let side_msg = msg.clone();
                *model = update(std::mem::take(model), msg);
                Self::handle_message_side_effects(model, &side_msg);
            }

            if model.should_quit {
                tracing::info!(frames = frame_idx, "session ended");
                break;
            }
        }
        Ok(())
    }
}
