use tera::{Context, Tera};

use crate::{
    effects::{Effect, Step},
    keyboards::{get_cancel_keyboard, get_issue_keyboard},
    types::{BotDialogState, IssueType},
};

pub fn show_issue_menu(tera: &Tera) -> Result<Vec<Effect>, tera::Error> {
    let answer = tera.render("issue_menu.html", &Context::new())?;
    Ok(vec![Effect::reply_with(answer, get_issue_keyboard())])
}

/// Opens a session. Any earlier progress in the chat is replaced.
pub fn select_issue(tera: &Tera, issue: IssueType) -> Result<Step, tera::Error> {
    let answer = tera.render("wallet_prompt.html", &Context::new())?;
    Ok(Step::new(
        BotDialogState::AwaitingWalletAddress { issue },
        vec![Effect::reply_with(answer, get_cancel_keyboard())],
    ))
}
