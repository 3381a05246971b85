use crate::app::Model;
use crate::app::model::PROMPT_TTL;
use crate::editor::Direction;

/// Answer to the "save modified buffer?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAnswer {
    /// Save, then exit if the save worked
    Yes,
    /// Exit without saving
    No,
    /// Stay in the editor
    Cancel,
}

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a character at the cursor
    InsertChar(char),
    /// Split line at cursor (Enter)
    InsertNewline,
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete key; recognized but does nothing
    DeleteForward,
    /// Move cursor
    MoveCursor(Direction),

    // File
    /// Save buffer to file
    Save,

    // Application
    /// Exit, asking first when the buffer is modified
    RequestExit,
    /// Resolve the exit prompt
    AnswerExit(ExitAnswer),
    /// Quit only if there is nothing to lose
    Quit,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,
}

/// Pure function that updates the model based on a message.
///
/// File writes (`Save`, `AnswerExit(Yes)`) happen in the side-effect pass
/// that runs after this.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::InsertChar(ch) => model.buffer.insert_char(ch),
        Message::InsertNewline => model.buffer.insert_newline(),
        Message::DeleteBackward => {
            model.buffer.delete_backward();
        }
        Message::DeleteForward => {
            model.buffer.delete_forward();
        }
        Message::MoveCursor(dir) => model.buffer.move_cursor(dir),

        Message::Save | Message::Redraw => {}

        Message::RequestExit => {
            if model.is_modified() {
                model.exit_prompt = true;
                model.status.set("Save modified buffer? (Y/n)", PROMPT_TTL);
            } else {
                model.should_quit = true;
            }
        }
        Message::AnswerExit(answer) => {
            model.exit_prompt = false;
            match answer {
                ExitAnswer::Yes => {}
                ExitAnswer::No => {
                    tracing::info!("exit without saving");
                    model.should_quit = true;
                }
                ExitAnswer::Cancel => model.show_status("Cancelled exit"),
            }
        }
        Message::Quit => {
            if model.is_modified() {
                model.show_status("Modified buffer exists! Use Ctrl+X to exit");
            } else {
                model.should_quit = true;
            }
        }

        Message::Resize(width, height) => model.set_terminal_size(width, height),
    }
    model.sync_scroll();
    model
}
