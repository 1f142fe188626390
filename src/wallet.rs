use once_cell::sync::Lazy;
use regex::Regex;

static EVM_ADDRESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap());
// Base58 alphabet, no 0/O/I/l
static SOLANA_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{32,44}$").unwrap());

static HEX_PRIVATE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0x)?[a-fA-F0-9]{64}$").unwrap());
static BASE58_KEYPAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{86,88}$").unwrap());
static MNEMONIC_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]{3,8}$").unwrap());

const MNEMONIC_LENGTHS: [usize; 5] = [12, 15, 18, 21, 24];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Evm,
    Solana,
}

pub fn address_kind(text: &str) -> Option<AddressKind> {
    if EVM_ADDRESS.is_match(text) {
        Some(AddressKind::Evm)
    } else if SOLANA_ADDRESS.is_match(text) {
        Some(AddressKind::Solana)
    } else {
        None
    }
}

pub fn is_valid_address(text: &str) -> bool {
    address_kind(text).is_some()
}

/// True for text shaped like a seed phrase or a raw private key. Such text
/// must never be stored or forwarded.
pub fn looks_like_secret(text: &str) -> bool {
    let text = text.trim();
    if HEX_PRIVATE_KEY.is_match(text) || BASE58_KEYPAIR.is_match(text) {
        return true;
    }

    let words = text.split_whitespace().collect::<Vec<_>>();
    MNEMONIC_LENGTHS.contains(&words.len())
        && words
            .iter()
            .all(|word| MNEMONIC_WORD.is_match(&word.to_lowercase()))
}
