use tera::{Context, Tera};
use teloxide::utils::command::BotCommands;

use crate::{
    effects::{Effect, Step},
    keyboards::{get_welcome_keyboard, remove_keyboard},
};

use super::Command;

fn welcome(tera: &Tera) -> Result<Effect, tera::Error> {
    let answer = tera.render("welcome.html", &Context::new())?;
    Ok(Effect::reply_with(answer, get_welcome_keyboard()))
}

pub fn show_start_info(tera: &Tera) -> Result<Step, tera::Error> {
    Ok(Step::idle(vec![welcome(tera)?]))
}

/// `/issue`: drop whatever was collected and offer a fresh report.
pub fn restart_issue(tera: &Tera) -> Result<Step, tera::Error> {
    let notice = tera.render("restarting.html", &Context::new())?;
    Ok(Step::idle(vec![
        Effect::reply_with(notice, remove_keyboard()),
        welcome(tera)?,
    ]))
}

pub fn start_over(tera: &Tera) -> Result<Step, tera::Error> {
    let notice = tera.render("starting_over.html", &Context::new())?;
    Ok(Step::idle(vec![
        Effect::reply_with(notice, remove_keyboard()),
        welcome(tera)?,
    ]))
}

pub fn cancel(tera: &Tera) -> Result<Step, tera::Error> {
    let answer = tera.render("canceled.html", &Context::new())?;
    Ok(Step::idle(vec![Effect::reply_with(answer, remove_keyboard())]))
}

pub fn show_help(tera: &Tera) -> Result<Vec<Effect>, tera::Error> {
    let mut context = Context::new();
    context.insert("commands", &Command::descriptions().to_string());
    Ok(vec![Effect::reply(tera.render("help.html", &context)?)])
}
