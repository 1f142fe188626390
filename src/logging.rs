use crate::config::Config;

/// Starts Sentry error reporting when `SENTRY_URL` is set. Keep the guard
/// alive for the life of the process.
pub fn init_sentry(config: &Config) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_url.as_deref()?;
    let guard = sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));
    log::info!("Initialized sentry...");
    Some(guard)
}
