use std::{error::Error, sync::Arc};

use teloxide::prelude::*;
use wallet_helpdesk::{config::Config, handlers, logging, tracker::Tracker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    log::info!("Starting...");
    let config = Config::from_env()?;
    log::info!("Initialized config...");
    let _sentry = logging::init_sentry(&config);

    let bot = Bot::new(&config.bot_token);
    let tracker = Arc::new(Tracker::init()?);

    log::info!("Started polling...");
    handlers::build_dispatcher(bot, tracker, Arc::new(config))
        .dispatch()
        .await;

    Ok(())
}
