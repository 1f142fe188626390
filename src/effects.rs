use teloxide::types::ReplyMarkup;

use crate::types::BotDialogState;

/// Something the transport has to do on behalf of the tracker.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Message to the chat that sent the update.
    Reply {
        text: String,
        markup: Option<ReplyMarkup>,
    },
    /// Ticket for the support chat.
    Ticket { text: String },
    /// Remove the incoming message from the user's chat.
    DeleteIncoming,
}

impl Effect {
    pub fn reply(text: String) -> Self {
        Effect::Reply { text, markup: None }
    }

    pub fn reply_with(text: String, markup: impl Into<ReplyMarkup>) -> Self {
        Effect::Reply {
            text,
            markup: Some(markup.into()),
        }
    }
}

/// Outcome of one wizard step: the state to store and what to send.
#[derive(Debug, Clone)]
pub struct Step {
    pub state: BotDialogState,
    pub effects: Vec<Effect>,
}

impl Step {
    pub fn new(state: BotDialogState, effects: Vec<Effect>) -> Self {
        Step { state, effects }
    }

    pub fn idle(effects: Vec<Effect>) -> Self {
        Step::new(BotDialogState::Idle, effects)
    }
}
