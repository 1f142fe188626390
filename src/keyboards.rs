use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, KeyboardRemove,
};

use crate::{
    actions::Action,
    types::{IssueType, Network, Token},
};

pub const CANCEL: &str = "Cancel";

fn button(text: &str, action: Action) -> Vec<InlineKeyboardButton> {
    vec![InlineKeyboardButton::callback(text, action.to_string())]
}

pub fn get_welcome_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![button("🛠 Report an Issue", Action::ReportIssue)])
}

pub fn get_issue_keyboard() -> InlineKeyboardMarkup {
    let keyboard = IssueType::ALL
        .into_iter()
        .map(|issue| button(issue.button(), Action::Issue(issue)))
        .collect::<Vec<_>>();

    InlineKeyboardMarkup::new(keyboard)
}

pub fn get_network_keyboard() -> InlineKeyboardMarkup {
    let keyboard = Network::ALL
        .into_iter()
        .map(|network| button(network.button(), Action::Network(network)))
        .collect::<Vec<_>>();

    InlineKeyboardMarkup::new(keyboard)
}

pub fn get_token_keyboard() -> InlineKeyboardMarkup {
    let keyboard = Token::ALL
        .into_iter()
        .map(|token| button(token.button(), Action::Token(token)))
        .collect::<Vec<_>>();

    InlineKeyboardMarkup::new(keyboard)
}

pub fn get_summary_keyboard() -> InlineKeyboardMarkup {
    let mut keyboard: Vec<Vec<InlineKeyboardButton>> = vec![];

    keyboard.push(button("➡️ Next", Action::Next));
    keyboard.push(button("🔄 Start Over", Action::Restart));

    InlineKeyboardMarkup::new(keyboard)
}

pub fn get_cancel_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![KeyboardButton::new(CANCEL)]])
        .resize_keyboard(true)
        .one_time_keyboard(true)
}

pub fn remove_keyboard() -> KeyboardRemove {
    KeyboardRemove::new()
}
