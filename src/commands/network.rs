use tera::{Context, Tera};

use crate::{
    effects::{Effect, Step},
    keyboards::get_token_keyboard,
    types::{BotDialogState, IssueType, Network},
};

pub fn select_network(
    tera: &Tera,
    issue: IssueType,
    wallet: String,
    network: Network,
) -> Result<Step, tera::Error> {
    let mut context = Context::new();
    context.insert("network", &network.label());
    let selected = tera.render("network_selected.html", &context)?;
    let prompt = tera.render("token_prompt.html", &Context::new())?;

    Ok(Step::new(
        BotDialogState::AwaitingToken {
            issue,
            wallet,
            network,
        },
        vec![
            Effect::reply(selected),
            Effect::reply_with(prompt, get_token_keyboard()),
        ],
    ))
}
