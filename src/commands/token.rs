use tera::{Context, Tera};

use crate::{
    effects::{Effect, Step},
    keyboards::get_summary_keyboard,
    types::{BotDialogState, IssueType, Network, Token},
};

pub fn select_token(
    tera: &Tera,
    issue: IssueType,
    wallet: String,
    network: Network,
    token: Token,
) -> Result<Step, tera::Error> {
    let mut context = Context::new();
    context.insert("issue", issue.title());
    context.insert("wallet", &wallet);
    context.insert("network", &network.label());
    context.insert("token", &token.label());
    let answer = tera.render("summary.html", &context)?;

    Ok(Step::new(
        BotDialogState::AwaitingConfirmation {
            issue,
            wallet,
            network,
            token,
        },
        vec![Effect::reply_with(answer, get_summary_keyboard())],
    ))
}
