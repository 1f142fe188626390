use tera::Tera;

macro_rules! template {
    ($name:literal) => {
        ($name, include_str!(concat!("../templates/", $name)))
    };
}

/// Builds the message templates. They are compiled into the binary so the
/// bot doesn't depend on its working directory.
pub fn init() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        template!("canceled.html"),
        template!("help.html"),
        template!("issue_menu.html"),
        template!("network_prompt.html"),
        template!("network_selected.html"),
        template!("restarting.html"),
        template!("secret_warning.html"),
        template!("starting_over.html"),
        template!("submitted.html"),
        template!("summary.html"),
        template!("ticket.html"),
        template!("token_prompt.html"),
        template!("wallet_invalid.html"),
        template!("wallet_prompt.html"),
        template!("welcome.html"),
    ])?;
    Ok(tera)
}
