use std::{error::Error, net::SocketAddr, sync::Arc};

use axum::routing::get;
use teloxide::{
    prelude::*,
    update_listeners::webhooks::{self, Options},
};
use wallet_helpdesk::{config::Config, handlers, logging, tracker::Tracker};

async fn liveness() -> &'static str {
    "Wallet helpdesk bot is running"
}

fn webhook_options(address: SocketAddr, config: &Config) -> Result<Options, Box<dyn Error>> {
    Ok(Options::new(address, config.webhook_url()?.parse()?))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    log::info!("Starting...");
    let config = Config::from_env()?;
    log::info!("Initialized config...");
    let _sentry = logging::init_sentry(&config);

    let bot = Bot::new(&config.bot_token);
    let tracker = Arc::new(Tracker::init()?);

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let options = webhook_options(address, &config)?;
    let (listener, stop_flag, router) = webhooks::axum_to_router(bot.clone(), options).await?;
    log::info!("Registered webhook...");

    let router = router.route("/", get(liveness));
    tokio::spawn(async move {
        let server = axum::Server::bind(&address)
            .serve(router.into_make_service())
            .with_graceful_shutdown(stop_flag);
        if let Err(err) = server.await {
            log::error!("Webhook server failed: {}", err);
        }
    });

    log::info!("Listening on {}...", address);
    handlers::build_dispatcher(bot, tracker, Arc::new(config))
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    Ok(())
}
