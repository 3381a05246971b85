use crate::app::{App, ExitAnswer, Message, Model};

impl App {
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::Save => {
                model.save();
            }
            Message::AnswerExit(ExitAnswer::Yes) => {
                // A failed save keeps the session open; the error is on the
                // message line.
                if model.save() {
                    tracing::info!("saved and exiting");
                    model.should_quit = true;
                }
            }
            _ => {}
        }
    }
}
