use std::{error::Error, sync::Arc};

use teloxide::{
    dispatching::{DefaultKey, UpdateHandler},
    prelude::*,
    types::{MessageId, ParseMode},
    utils::command::BotCommands,
    RequestError,
};

use crate::{
    actions::Action,
    commands::{ticket::Reporter, Command},
    config::Config,
    effects::Effect,
    tracker::Tracker,
};

pub type HandlerError = Box<dyn Error + Send + Sync>;
pub type HandlerResult = Result<(), HandlerError>;

/// Where effects for one update go.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub chat_id: ChatId,
    pub incoming: Option<MessageId>,
    pub support_chat_id: ChatId,
}

async fn perform(bot: &Bot, route: Route, effect: Effect) -> Result<(), RequestError> {
    match effect {
        Effect::Reply { text, markup } => {
            let request = bot
                .send_message(route.chat_id, text)
                .parse_mode(ParseMode::Html);
            match markup {
                Some(markup) => request.reply_markup(markup).await?,
                None => request.await?,
            };
        }
        Effect::Ticket { text } => {
            bot.send_message(route.support_chat_id, text)
                .parse_mode(ParseMode::Html)
                .disable_web_page_preview(true)
                .await?;
        }
        Effect::DeleteIncoming => {
            if let Some(message_id) = route.incoming {
                bot.delete_message(route.chat_id, message_id).await?;
            }
        }
    }
    Ok(())
}

/// Sends effects in order. A failed request is logged and the rest still go
/// out.
pub async fn deliver(bot: &Bot, route: Route, effects: Vec<Effect>) {
    for effect in effects {
        if let Err(err) = perform(bot, route, effect).await {
            log::error!("Can't deliver an update for chat {}: {}", route.chat_id, err);
        }
    }
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    command: Command,
    tracker: Arc<Tracker>,
    config: Arc<Config>,
) -> HandlerResult {
    log::debug!("Command {:?} in chat {}", command, msg.chat.id);
    let effects = tracker.handle_command(msg.chat.id, command).await?;
    let route = Route {
        chat_id: msg.chat.id,
        incoming: Some(msg.id),
        support_chat_id: config.support_chat_id,
    };
    deliver(&bot, route, effects).await;
    Ok(())
}

async fn handle_text(
    bot: Bot,
    msg: Message,
    tracker: Arc<Tracker>,
    config: Arc<Config>,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let effects = tracker.handle_text(msg.chat.id, text).await?;
    let route = Route {
        chat_id: msg.chat.id,
        incoming: Some(msg.id),
        support_chat_id: config.support_chat_id,
    };
    deliver(&bot, route, effects).await;
    Ok(())
}

async fn handle_callback(
    bot: Bot,
    query: CallbackQuery,
    tracker: Arc<Tracker>,
    config: Arc<Config>,
) -> HandlerResult {
    let Some(chat_id) = query.message.as_ref().map(|message| message.chat.id) else {
        bot.answer_callback_query(query.id).await?;
        return Ok(());
    };

    let action = match query.data.as_deref().unwrap_or_default().parse::<Action>() {
        Ok(action) => action,
        Err(err) => {
            log::warn!("Rejected a callback in chat {}: {}", chat_id, err);
            bot.answer_callback_query(query.id)
                .text("This button is no longer available. Send /start to begin again.")
                .await?;
            return Ok(());
        }
    };

    let reporter = Reporter {
        chat_id,
        username: query.from.username.clone(),
    };
    let effects = tracker.handle_action(&reporter, action).await?;
    let route = Route {
        chat_id,
        incoming: None,
        support_chat_id: config.support_chat_id,
    };
    deliver(&bot, route, effects).await;

    if let Err(err) = bot.answer_callback_query(query.id).await {
        log::error!("Can't answer a callback in chat {}: {}", chat_id, err);
    }
    Ok(())
}

pub fn schema() -> UpdateHandler<HandlerError> {
    let message_handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_map(|msg: Message| {
                    msg.text()
                        .and_then(|text| Command::parse(text, "").ok())
                })
                .endpoint(handle_command),
        )
        .branch(dptree::endpoint(handle_text));

    let callback_handler = Update::filter_callback_query().endpoint(handle_callback);

    dptree::entry()
        .branch(message_handler)
        .branch(callback_handler)
}

/// Updates of one chat are handled in order; chats run in parallel.
pub fn build_dispatcher(
    bot: Bot,
    tracker: Arc<Tracker>,
    config: Arc<Config>,
) -> Dispatcher<Bot, HandlerError, DefaultKey> {
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![tracker, config])
        .enable_ctrlc_handler()
        .build()
}
