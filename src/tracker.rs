use std::sync::Arc;

use teloxide::{
    dispatching::dialogue::{Dialogue, InMemStorageError},
    types::ChatId,
};
use tera::Tera;
use thiserror::Error;

use crate::{
    actions::Action,
    commands::{
        issue, network, start,
        ticket::{self, Reporter, TicketFields},
        token, wallet, Command,
    },
    effects::{Effect, Step},
    keyboards::CANCEL,
    templates,
    types::{BotDialogState, BotDialogue, SessionStore},
    wallet::looks_like_secret,
};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("session storage failed: {0}")]
    Storage(#[from] InMemStorageError),
    #[error("can't render a message: {0}")]
    Render(#[from] tera::Error),
}

/// Drives the wizard for every chat. Owns the session store; handlers get
/// a shared reference through the dispatcher's dependencies.
pub struct Tracker {
    sessions: Arc<SessionStore>,
    tera: Tera,
}

impl Tracker {
    pub fn new(sessions: Arc<SessionStore>, tera: Tera) -> Self {
        Tracker { sessions, tera }
    }

    pub fn init() -> Result<Self, tera::Error> {
        Ok(Tracker::new(
            crate::types::new_session_store(),
            templates::init()?,
        ))
    }

    fn dialogue(&self, chat_id: ChatId) -> BotDialogue {
        Dialogue::new(self.sessions.clone(), chat_id)
    }

    pub async fn session(&self, chat_id: ChatId) -> Result<BotDialogState, TrackerError> {
        Ok(self.dialogue(chat_id).get().await?.unwrap_or_default())
    }

    async fn apply(&self, chat_id: ChatId, step: Step) -> Result<Vec<Effect>, TrackerError> {
        let dialogue = self.dialogue(chat_id);
        match step.state {
            // Removing a missing dialogue is an error in the store
            BotDialogState::Idle => {
                if dialogue.get().await?.is_some() {
                    dialogue.exit().await?;
                }
            }
            state => dialogue.update(state).await?,
        }
        Ok(step.effects)
    }

    pub async fn handle_command(
        &self,
        chat_id: ChatId,
        command: Command,
    ) -> Result<Vec<Effect>, TrackerError> {
        match command {
            Command::Start => self.apply(chat_id, start::show_start_info(&self.tera)?).await,
            Command::Issue => self.apply(chat_id, start::restart_issue(&self.tera)?).await,
            Command::Help => Ok(start::show_help(&self.tera)?),
        }
    }

    pub async fn handle_action(
        &self,
        reporter: &Reporter,
        action: Action,
    ) -> Result<Vec<Effect>, TrackerError> {
        let chat_id = reporter.chat_id;
        let tera = &self.tera;

        let step = match (action, self.session(chat_id).await?) {
            (Action::ReportIssue, _) => return Ok(issue::show_issue_menu(tera)?),
            (Action::Restart, _) => start::start_over(tera)?,
            (Action::Issue(choice), _) => issue::select_issue(tera, choice)?,
            (Action::Network(choice), BotDialogState::AwaitingNetwork { issue, wallet }) => {
                network::select_network(tera, issue, wallet, choice)?
            }
            (
                Action::Token(choice),
                BotDialogState::AwaitingToken {
                    issue,
                    wallet,
                    network,
                },
            ) => token::select_token(tera, issue, wallet, network, choice)?,
            (
                Action::Next,
                BotDialogState::AwaitingConfirmation {
                    issue,
                    wallet,
                    network,
                    token,
                },
            ) => ticket::submit_ticket(
                tera,
                reporter,
                TicketFields {
                    issue,
                    wallet: &wallet,
                    network,
                    token,
                },
            )?,
            (action, state) => {
                log::debug!(
                    "Ignoring {} in chat {}: session is {}",
                    action,
                    chat_id,
                    step_name(&state)
                );
                return Ok(vec![]);
            }
        };

        self.apply(chat_id, step).await
    }

    pub async fn handle_text(
        &self,
        chat_id: ChatId,
        text: &str,
    ) -> Result<Vec<Effect>, TrackerError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(vec![]);
        }

        if text == CANCEL {
            return self.apply(chat_id, start::cancel(&self.tera)?).await;
        }

        if looks_like_secret(text) {
            log::warn!("Dropped a suspected wallet secret in chat {}", chat_id);
            let warning = self.tera.render("secret_warning.html", &tera::Context::new())?;
            return Ok(vec![Effect::DeleteIncoming, Effect::reply(warning)]);
        }

        match self.session(chat_id).await? {
            BotDialogState::AwaitingWalletAddress { issue } => {
                let step = wallet::set_wallet_address(&self.tera, issue, text)?;
                self.apply(chat_id, step).await
            }
            _ => Ok(vec![]),
        }
    }
}

fn step_name(state: &BotDialogState) -> &'static str {
    match state {
        BotDialogState::Idle => "idle",
        BotDialogState::AwaitingWalletAddress { .. } => "awaiting_wallet_address",
        BotDialogState::AwaitingNetwork { .. } => "awaiting_network_selection",
        BotDialogState::AwaitingToken { .. } => "awaiting_token_selection",
        BotDialogState::AwaitingConfirmation { .. } => "awaiting_confirmation",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IssueType, Network, Token};

    const WALLET: &str = "0xAbC1234567890aBcDEF1234567890aBcDeF12345";
    const CHAT: ChatId = ChatId(7);

    fn reporter() -> Reporter {
        Reporter {
            chat_id: CHAT,
            username: None,
        }
    }

    async fn tracker_at(state: BotDialogState) -> Tracker {
        let tracker = Tracker::init().unwrap();
        if state != BotDialogState::Idle {
            tracker.dialogue(CHAT).update(state).await.unwrap();
        }
        tracker
    }

    fn every_step() -> Vec<BotDialogState> {
        let issue = IssueType::DepositSpot;
        let wallet = WALLET.to_string();
        vec![
            BotDialogState::Idle,
            BotDialogState::AwaitingWalletAddress { issue },
            BotDialogState::AwaitingNetwork {
                issue,
                wallet: wallet.clone(),
            },
            BotDialogState::AwaitingToken {
                issue,
                wallet: wallet.clone(),
                network: Network::Solana,
            },
            BotDialogState::AwaitingConfirmation {
                issue,
                wallet,
                network: Network::Solana,
                token: Token::Sol,
            },
        ]
    }

    #[tokio::test]
    async fn start_and_issue_reset_from_any_step() {
        for command in [Command::Start, Command::Issue] {
            for state in every_step() {
                let tracker = tracker_at(state).await;
                let effects = tracker.handle_command(CHAT, command.clone()).await.unwrap();

                assert!(!effects.is_empty());
                assert_eq!(tracker.session(CHAT).await.unwrap(), BotDialogState::Idle);
            }
        }
    }

    #[tokio::test]
    async fn cancel_clears_any_step() {
        for state in every_step() {
            let tracker = tracker_at(state).await;
            let effects = tracker.handle_text(CHAT, "Cancel").await.unwrap();

            assert_eq!(effects.len(), 1);
            assert_eq!(tracker.session(CHAT).await.unwrap(), BotDialogState::Idle);
        }
    }

    #[tokio::test]
    async fn network_without_session_is_ignored() {
        let tracker = tracker_at(BotDialogState::Idle).await;
        let effects = tracker
            .handle_action(&reporter(), Action::Network(Network::Ethereum))
            .await
            .unwrap();

        assert!(effects.is_empty());
        assert_eq!(tracker.session(CHAT).await.unwrap(), BotDialogState::Idle);
    }

    #[tokio::test]
    async fn out_of_order_actions_leave_the_step_alone() {
        let state = BotDialogState::AwaitingWalletAddress {
            issue: IssueType::Transfer,
        };
        let tracker = tracker_at(state.clone()).await;

        for action in [
            Action::Network(Network::Bnb),
            Action::Token(Token::Btc),
            Action::Next,
        ] {
            let effects = tracker.handle_action(&reporter(), action).await.unwrap();
            assert!(effects.is_empty());
            assert_eq!(tracker.session(CHAT).await.unwrap(), state);
        }
    }

    #[tokio::test]
    async fn malformed_address_keeps_waiting() {
        let state = BotDialogState::AwaitingWalletAddress {
            issue: IssueType::Other,
        };
        let tracker = tracker_at(state.clone()).await;

        let effects = tracker.handle_text(CHAT, "not an address").await.unwrap();

        assert_eq!(effects.len(), 1);
        assert_eq!(tracker.session(CHAT).await.unwrap(), state);
    }

    #[tokio::test]
    async fn secrets_are_dropped_in_every_step() {
        let phrase = "abandon ability able about above absent absorb abstract absurd abuse access accident";
        for state in every_step() {
            let tracker = tracker_at(state.clone()).await;
            let effects = tracker.handle_text(CHAT, phrase).await.unwrap();

            assert!(matches!(effects[0], Effect::DeleteIncoming));
            assert!(effects
                .iter()
                .all(|effect| !matches!(effect, Effect::Ticket { .. })));
            assert!(effects.iter().all(|effect| match effect {
                Effect::Reply { text, .. } => !text.contains("abandon"),
                _ => true,
            }));
            assert_eq!(tracker.session(CHAT).await.unwrap(), state);
        }
    }

    #[tokio::test]
    async fn text_outside_a_session_is_ignored() {
        let tracker = tracker_at(BotDialogState::Idle).await;
        assert!(tracker.handle_text(CHAT, WALLET).await.unwrap().is_empty());
        assert!(tracker.handle_text(CHAT, "   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn chats_do_not_share_sessions() {
        let tracker = tracker_at(BotDialogState::Idle).await;
        tracker
            .handle_action(&reporter(), Action::Issue(IssueType::DepositPerp))
            .await
            .unwrap();

        assert_eq!(
            tracker.session(ChatId(8)).await.unwrap(),
            BotDialogState::Idle
        );
        assert_eq!(
            tracker.session(CHAT).await.unwrap(),
            BotDialogState::AwaitingWalletAddress {
                issue: IssueType::DepositPerp
            }
        );
    }
}
