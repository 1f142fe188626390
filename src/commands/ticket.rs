use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use teloxide::types::ChatId;
use tera::{Context, Tera};

use crate::{
    effects::{Effect, Step},
    keyboards::remove_keyboard,
    types::{IssueType, Network, Token},
};

/// Who filed the ticket, so support can reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reporter {
    pub chat_id: ChatId,
    pub username: Option<String>,
}

pub struct TicketFields<'a> {
    pub issue: IssueType,
    pub wallet: &'a str,
    pub network: Network,
    pub token: Token,
}

fn new_ticket_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}

pub fn submit_ticket(
    tera: &Tera,
    reporter: &Reporter,
    fields: TicketFields<'_>,
) -> Result<Step, tera::Error> {
    let ticket_id = new_ticket_id();

    let mut context = Context::new();
    context.insert("ticket_id", &ticket_id);
    context.insert("issue", fields.issue.title());
    context.insert("wallet", fields.wallet);
    context.insert("network", &fields.network.label());
    context.insert("token", &fields.token.label());
    context.insert("chat_id", &reporter.chat_id.0);
    context.insert("username", &reporter.username);
    context.insert(
        "submitted_at",
        &Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );

    let ticket = tera.render("ticket.html", &context)?;
    let answer = tera.render("submitted.html", &context)?;
    log::info!("Filed ticket {} for chat {}", ticket_id, reporter.chat_id);

    Ok(Step::idle(vec![
        Effect::Ticket { text: ticket },
        Effect::reply_with(answer, remove_keyboard()),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{templates, types::BotDialogState};

    #[test]
    fn ticket_ids_are_eight_upper_alphanumerics() {
        let id = new_ticket_id();
        assert_eq!(id.len(), 8);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn ticket_carries_every_field_and_reporter() {
        let tera = templates::init().unwrap();
        let reporter = Reporter {
            chat_id: ChatId(42),
            username: Some("alice".to_string()),
        };
        let step = submit_ticket(
            &tera,
            &reporter,
            TicketFields {
                issue: IssueType::WithdrawPerp,
                wallet: "0xAbC1234567890aBcDEF1234567890aBcDeF12345",
                network: Network::Arbitrum,
                token: Token::Usdc,
            },
        )
        .unwrap();

        assert_eq!(step.state, BotDialogState::Idle);
        let ticket = match &step.effects[0] {
            Effect::Ticket { text } => text,
            other => panic!("expected a ticket, got {other:?}"),
        };
        for expected in [
            "Withdrawal on Perp",
            "0xAbC1234567890aBcDEF1234567890aBcDeF12345",
            "ARBITRUM",
            "USDC",
            "@alice",
            "chat 42",
        ] {
            assert!(ticket.contains(expected), "{expected} missing from {ticket}");
        }
        assert!(matches!(step.effects[1], Effect::Reply { .. }));
    }
}
