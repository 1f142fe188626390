use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::types::{IssueType, Network, Token};

/// Everything an inline button can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ReportIssue,
    Issue(IssueType),
    Network(Network),
    Token(Token),
    Next,
    Restart,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown callback data: {0:?}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        match data {
            "report_issue" => return Ok(Action::ReportIssue),
            "next_step" => return Ok(Action::Next),
            "restart_bot" => return Ok(Action::Restart),
            _ => {}
        }

        let found = if let Some(slug) = data.strip_prefix("issue_") {
            IssueType::ALL
                .into_iter()
                .find(|issue| issue.slug() == slug)
                .map(Action::Issue)
        } else if let Some(slug) = data.strip_prefix("network_") {
            Network::ALL
                .into_iter()
                .find(|network| network.slug() == slug)
                .map(Action::Network)
        } else if let Some(slug) = data.strip_prefix("token_") {
            Token::ALL
                .into_iter()
                .find(|token| token.slug() == slug)
                .map(Action::Token)
        } else {
            None
        };

        found.ok_or_else(|| UnknownAction(data.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ReportIssue => f.write_str("report_issue"),
            Action::Issue(issue) => write!(f, "issue_{}", issue.slug()),
            Action::Network(network) => write!(f, "network_{}", network.slug()),
            Action::Token(token) => write!(f, "token_{}", token.slug()),
            Action::Next => f.write_str("next_step"),
            Action::Restart => f.write_str("restart_bot"),
        }
    }
}
