use std::sync::Arc;

use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    DepositSpot,
    WithdrawSpot,
    DepositPerp,
    WithdrawPerp,
    Transfer,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 6] = [
        IssueType::DepositSpot,
        IssueType::WithdrawSpot,
        IssueType::DepositPerp,
        IssueType::WithdrawPerp,
        IssueType::Transfer,
        IssueType::Other,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            IssueType::DepositSpot => "deposit_spot",
            IssueType::WithdrawSpot => "withdraw_spot",
            IssueType::DepositPerp => "deposit_perp",
            IssueType::WithdrawPerp => "withdraw_perp",
            IssueType::Transfer => "transfer",
            IssueType::Other => "other",
        }
    }

    pub fn button(self) -> &'static str {
        match self {
            IssueType::DepositSpot => "💰 Deposit on Spot",
            IssueType::WithdrawSpot => "🏦 Withdrawal on Spot",
            IssueType::DepositPerp => "📈 Deposit on Perp",
            IssueType::WithdrawPerp => "📉 Withdrawal on Perp",
            IssueType::Transfer => "🔁 Spot/Perp Transfer",
            IssueType::Other => "❓ Other",
        }
    }

    /// Title shown in summaries and tickets.
    pub fn title(self) -> &'static str {
        match self {
            IssueType::DepositSpot => "Deposit on Spot",
            IssueType::WithdrawSpot => "Withdrawal on Spot",
            IssueType::DepositPerp => "Deposit on Perp",
            IssueType::WithdrawPerp => "Withdrawal on Perp",
            IssueType::Transfer => "Spot/Perp Transfer",
            IssueType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Ethereum,
    Bnb,
    Solana,
    Polygon,
    Arbitrum,
    Avalanche,
    Other,
}

impl Network {
    pub const ALL: [Network; 7] = [
        Network::Ethereum,
        Network::Bnb,
        Network::Solana,
        Network::Polygon,
        Network::Arbitrum,
        Network::Avalanche,
        Network::Other,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Network::Ethereum => "ethereum",
            Network::Bnb => "bnb",
            Network::Solana => "solana",
            Network::Polygon => "polygon",
            Network::Arbitrum => "arbitrum",
            Network::Avalanche => "avalanche",
            Network::Other => "other",
        }
    }

    pub fn button(self) -> &'static str {
        match self {
            Network::Ethereum => "Ethereum",
            Network::Bnb => "BNB Chain",
            Network::Solana => "Solana",
            Network::Polygon => "Polygon",
            Network::Arbitrum => "Arbitrum",
            Network::Avalanche => "Avalanche",
            Network::Other => "Other",
        }
    }

    pub fn label(self) -> String {
        self.slug().to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Usdc,
    Usdt,
    Usd1,
    Btc,
    Eth,
    Apx,
    Aster,
    Sol,
    Other,
}

impl Token {
    pub const ALL: [Token; 9] = [
        Token::Usdc,
        Token::Usdt,
        Token::Usd1,
        Token::Btc,
        Token::Eth,
        Token::Apx,
        Token::Aster,
        Token::Sol,
        Token::Other,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Token::Usdc => "usdc",
            Token::Usdt => "usdt",
            Token::Usd1 => "usd1",
            Token::Btc => "btc",
            Token::Eth => "eth",
            Token::Apx => "apx",
            Token::Aster => "aster",
            Token::Sol => "sol",
            Token::Other => "other",
        }
    }

    pub fn button(self) -> &'static str {
        match self {
            Token::Aster => "Aster",
            Token::Other => "Other",
            Token::Usdc => "USDC",
            Token::Usdt => "USDT",
            Token::Usd1 => "USD1",
            Token::Btc => "BTC",
            Token::Eth => "ETH",
            Token::Apx => "APX",
            Token::Sol => "SOL",
        }
    }

    pub fn label(self) -> String {
        self.slug().to_uppercase()
    }
}

/// Per-chat wizard progress. Each step carries exactly the fields collected
/// before it, so a session can't skip ahead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BotDialogState {
    #[default]
    Idle,
    AwaitingWalletAddress {
        issue: IssueType,
    },
    AwaitingNetwork {
        issue: IssueType,
        wallet: String,
    },
    AwaitingToken {
        issue: IssueType,
        wallet: String,
        network: Network,
    },
    AwaitingConfirmation {
        issue: IssueType,
        wallet: String,
        network: Network,
        token: Token,
    },
}

pub type SessionStore = InMemStorage<BotDialogState>;
pub type BotDialogue = Dialogue<BotDialogState, SessionStore>;

pub fn new_session_store() -> Arc<SessionStore> {
    InMemStorage::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_are_titles_with_an_icon() {
        for issue in IssueType::ALL {
            assert!(issue.button().ends_with(issue.title()));
        }
    }

    #[test]
    fn labels_are_upper_case_slugs() {
        assert_eq!(Network::Ethereum.label(), "ETHEREUM");
        assert_eq!(Network::Bnb.label(), "BNB");
        assert_eq!(Token::Usdt.label(), "USDT");
        assert_eq!(Token::Aster.label(), "ASTER");
    }
}
