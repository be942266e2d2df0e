//! Display models built from already-fetched chain data.
//!
//! Nothing here performs I/O; the TUI and the plain-text CLI both draw from
//! these structures.

use alloy::primitives::{Address, B256};
use std::fmt::Write as _;

use crate::format::{format_eth, shorten, time_ago_at};
use crate::rpc::{AddressSummary, Block, Receipt, Transaction};

/// Prefix length kept when shortening hashes and addresses in lists
pub const SHORT_LEN: usize = 12;

/// Fetched entity shown in the detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Block(Block),
    Transaction {
        tx: Transaction,
        receipt: Option<Receipt>,
    },
    Address(AddressSummary),
}

/// Navigable target of a row or field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Block(u64),
    Transaction(B256),
    Address(Address),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRow {
    pub number: String,
    pub hash: String,
    pub tx_count: String,
    pub age: String,
    pub link: NavLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxRow {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub value: String,
    pub link: NavLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
    pub link: Option<NavLink>,
}

impl Field {
    fn plain(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            link: None,
        }
    }

    fn link(label: &'static str, value: impl Into<String>, link: NavLink) -> Self {
        Self {
            label,
            value: value.into(),
            link: Some(link),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Block,
    Transaction,
    Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub kind: DetailKind,
    pub title: String,
    pub fields: Vec<Field>,
    /// Transactions listed under a block
    pub rows: Vec<TxRow>,
}

impl DetailView {
    /// Field links first, then row links, in display order
    pub fn links(&self) -> Vec<NavLink> {
        self.fields
            .iter()
            .filter_map(|f| f.link)
            .chain(self.rows.iter().map(|r| r.link))
            .collect()
    }

    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);

        let width = self.fields.iter().map(|f| f.label.len()).max().unwrap_or(0);
        for field in &self.fields {
            let _ = writeln!(out, "  {:<width$}  {}", field.label, field.value);
        }

        if !self.rows.is_empty() {
            let _ = writeln!(out);
            for row in &self.rows {
                let _ = writeln!(
                    out,
                    "  {}  {} -> {}  {}",
                    row.hash, row.from, row.to, row.value
                );
            }
        }

        out
    }
}

// ============================================================================
// Lists
// ============================================================================

pub fn block_row(block: &Block, now: u64) -> BlockRow {
    BlockRow {
        number: format!("#{}", block.number),
        hash: shorten(&format!("{:?}", block.hash), SHORT_LEN),
        tx_count: format!("{} tx", block.transactions.len()),
        age: time_ago_at(block.timestamp, now),
        link: NavLink::Block(block.number),
    }
}

pub fn block_rows(blocks: &[Block], now: u64) -> Vec<BlockRow> {
    blocks.iter().map(|b| block_row(b, now)).collect()
}

pub fn tx_row(tx: &Transaction) -> TxRow {
    TxRow {
        hash: shorten(&format!("{:?}", tx.hash), SHORT_LEN),
        from: shorten(&format!("{:?}", tx.from), SHORT_LEN),
        to: tx
            .to
            .map(|to| shorten(&format!("{to:?}"), SHORT_LEN))
            .unwrap_or_else(|| "contract".to_string()),
        value: format_eth(tx.value),
        link: NavLink::Transaction(tx.hash),
    }
}

pub fn tx_rows(txs: &[Transaction]) -> Vec<TxRow> {
    txs.iter().map(tx_row).collect()
}

// ============================================================================
// Details
// ============================================================================

pub fn block_detail(block: &Block, now: u64) -> DetailView {
    DetailView {
        kind: DetailKind::Block,
        title: format!("Block #{}", block.number),
        fields: vec![
            Field::plain("Hash", format!("{:?}", block.hash)),
            Field::link(
                "Miner",
                format!("{:?}", block.miner),
                NavLink::Address(block.miner),
            ),
            Field::plain("Txs", block.transactions.len().to_string()),
            Field::plain("Gas Used", block.gas_used.to_string()),
            Field::plain("Gas Limit", block.gas_limit.to_string()),
            Field::plain("Time", time_ago_at(block.timestamp, now)),
        ],
        rows: tx_rows(block.transactions.txns()),
    }
}

pub fn tx_detail(tx: &Transaction, receipt: Option<&Receipt>) -> DetailView {
    let mut fields = vec![Field::plain("Hash", format!("{:?}", tx.hash))];

    fields.push(match tx.block_number {
        Some(number) => Field::link("Block", number.to_string(), NavLink::Block(number)),
        None => Field::plain("Block", "pending"),
    });
    fields.push(Field::link(
        "From",
        format!("{:?}", tx.from),
        NavLink::Address(tx.from),
    ));
    fields.push(match tx.to {
        Some(to) => Field::link("To", format!("{to:?}"), NavLink::Address(to)),
        None => Field::plain("To", "contract"),
    });
    fields.push(Field::plain("Value", format_eth(tx.value)));
    fields.push(Field::plain("Nonce", tx.nonce.to_string()));
    fields.push(Field::plain("Gas Limit", tx.gas.to_string()));

    if let Some(receipt) = receipt {
        fields.push(Field::plain("Gas Used", receipt.gas_used.to_string()));
    }

    let status = receipt.map(|r| r.status().as_str()).unwrap_or("Pending");
    fields.push(Field::plain("Status", status));

    DetailView {
        kind: DetailKind::Transaction,
        title: format!("Tx {}", shorten(&format!("{:?}", tx.hash), SHORT_LEN)),
        fields,
        rows: vec![],
    }
}

pub fn address_detail(summary: &AddressSummary) -> DetailView {
    let addr = format!("{:?}", summary.address);

    DetailView {
        kind: DetailKind::Address,
        title: format!("Address {}", shorten(&addr, SHORT_LEN)),
        fields: vec![
            Field::plain("Address", addr),
            Field::plain("Balance", format_eth(summary.balance)),
            Field::plain("Tx Count", summary.tx_count.to_string()),
        ],
        rows: vec![],
    }
}

pub fn detail(entity: &Entity, now: u64) -> DetailView {
    match entity {
        Entity::Block(block) => block_detail(block, now),
        Entity::Transaction { tx, receipt } => tx_detail(tx, receipt.as_ref()),
        Entity::Address(summary) => address_detail(summary),
    }
}
