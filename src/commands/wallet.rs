use tera::{Context, Tera};

use crate::{
    effects::{Effect, Step},
    keyboards::get_network_keyboard,
    types::{BotDialogState, IssueType},
    wallet::is_valid_address,
};

pub fn set_wallet_address(tera: &Tera, issue: IssueType, text: &str) -> Result<Step, tera::Error> {
    if !is_valid_address(text) {
        log::debug!("Rejected a malformed wallet address");
        let answer = tera.render("wallet_invalid.html", &Context::new())?;
        return Ok(Step::new(
            BotDialogState::AwaitingWalletAddress { issue },
            vec![Effect::reply(answer)],
        ));
    }

    let answer = tera.render("network_prompt.html", &Context::new())?;
    Ok(Step::new(
        BotDialogState::AwaitingNetwork {
            issue,
            wallet: text.to_string(),
        },
        vec![Effect::reply_with(answer, get_network_keyboard())],
    ))
}
