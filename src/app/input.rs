use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, ExitAnswer, Message, Model};
use crate::editor::Direction;
use crate::ui::layout::LayoutOutcome;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            Event::FocusGained => Some(Message::Redraw),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        // Below the size floor neither the text nor the prompt is on screen,
        // so keys are dropped until a resize makes room.
        if matches!(model.layout(), LayoutOutcome::TooSmall) {
            tracing::debug!(code = ?key.code, "key dropped, terminal too small");
            return None;
        }
        if model.exit_prompt {
            return Some(Message::AnswerExit(exit_answer(key)));
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            // Motion
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Home => Some(Message::MoveCursor(Direction::Home)),
            KeyCode::End => Some(Message::MoveCursor(Direction::End)),

            // Editing
            KeyCode::Enter => Some(Message::InsertNewline),
            KeyCode::Backspace => Some(Message::DeleteBackward),
            KeyCode::Delete => Some(Message::DeleteForward),

            // File / application
            KeyCode::Char('s') if ctrl => Some(Message::Save),
            KeyCode::Char('x' | 'c') if ctrl => Some(Message::RequestExit),
            KeyCode::Char('q') if ctrl => Some(Message::Quit),
            KeyCode::Char(c)
                if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) && !c.is_control() =>
            {
                Some(Message::InsertChar(c))
            }

            _ => None,
        }
    }
}

/// `y`/`Y`/Enter save, `n`/`N` discard, anything else cancels.
fn exit_answer(key: KeyEvent) -> ExitAnswer {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => ExitAnswer::Yes,
        KeyCode::Char('n' | 'N') => ExitAnswer::No,
        _ => ExitAnswer::Cancel,
    }
}
