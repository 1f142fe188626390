use teloxide::utils::command::BotCommands;

pub mod issue;
pub mod network;
pub mod start;
pub mod ticket;
pub mod token;
pub mod wallet;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "open the helpdesk.")]
    Start,
    #[command(description = "restart the issue report.")]
    Issue,
    #[command(description = "display this text.")]
    Help,
}
