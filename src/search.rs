use alloy::primitives::{Address, B256};

/// Represents the type of search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Blank input, nothing to do
    Empty,
    /// Decimal digits only, whatever the length
    BlockNumber(u64),
    /// 0x + 64 hex chars: a block hash or a transaction hash
    Hash(B256),
    /// 0x + 40 hex chars
    Address(Address),
    /// Invalid or unrecognized query
    Unrecognized(String),
}

impl SearchQuery {
    /// Parse a search string into a typed query
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Self::Empty;
        }

        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            // Pure decimal - treat as block number
            return match trimmed.parse::<u64>() {
                Ok(num) => Self::BlockNumber(num),
                Err(_) => Self::Unrecognized(format!("Block number too large: {trimmed}")),
            };
        }

        if let Some(hex_part) = trimmed.strip_prefix("0x") {
            if hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
                match hex_part.len() {
                    64 => {
                        if let Ok(hash) = hex_part.parse() {
                            return Self::Hash(hash);
                        }
                    }
                    40 => {
                        if let Ok(addr) = hex_part.parse() {
                            return Self::Address(addr);
                        }
                    }
                    _ => {}
                }
            }
        }

        Self::Unrecognized(format!("Unrecognized search input: {trimmed}"))
    }

    /// Returns a human-readable description of the query type
    pub fn description(&self) -> String {
        match self {
            Self::Empty => "Empty".to_string(),
            Self::BlockNumber(num) => format!("Block: {num}"),
            Self::Hash(hash) => format!("Hash: {hash:?}"),
            Self::Address(addr) => format!("Address: {addr:?}"),
            Self::Unrecognized(reason) => format!("Invalid: {reason}"),
        }
    }
}
