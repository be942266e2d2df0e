use alloy::primitives::{Address, B256};
use futures::future::join_all;
use tracing::{info, warn};

use crate::error::{ExplorerError, Result};
use crate::rpc::{Block, HttpTransport, RpcClient, Transaction, Transport};
use crate::search::SearchQuery;
use crate::view::{Entity, NavLink};

/// Blocks shown in the block list
pub const LATEST_BLOCKS: usize = 12;

/// Bounds of the recent-transactions scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxScan {
    /// Most recent blocks to walk
    pub blocks: usize,
    /// Total transactions collected
    pub cap: usize,
    /// Trailing transactions taken from each block
    pub per_block: usize,
}

impl Default for TxScan {
    fn default() -> Self {
        Self {
            blocks: 15,
            cap: 20,
            per_block: 6,
        }
    }
}

/// Search dispatch and list loading on top of one shared [`RpcClient`]
pub struct Explorer<T = HttpTransport> {
    rpc: RpcClient<T>,
}

impl Explorer<HttpTransport> {
    pub fn connect(rpc_url: &str) -> Result<Self> {
        Ok(Self::new(RpcClient::new(rpc_url)?))
    }
}

impl<T: Transport> Explorer<T> {
    pub fn new(rpc: RpcClient<T>) -> Self {
        Self { rpc }
    }

    pub fn rpc(&self) -> &RpcClient<T> {
        &self.rpc
    }

    /// Classify free text and fetch what it names. `Ok(None)` for blank input.
    pub async fn dispatch(&self, raw: &str) -> Result<Option<Entity>> {
        self.open(SearchQuery::parse(raw)).await
    }

    pub async fn open(&self, query: SearchQuery) -> Result<Option<Entity>> {
        let entity = match query {
            SearchQuery::Empty => return Ok(None),
            SearchQuery::BlockNumber(number) => self.block(number).await?,
            SearchQuery::Hash(hash) => self.block_or_transaction(hash).await?,
            SearchQuery::Address(address) => self.address(address).await?,
            SearchQuery::Unrecognized(reason) => return Err(ExplorerError::Validation(reason)),
        };
        Ok(Some(entity))
    }

    /// Open a clicked row or field without reclassifying it
    pub async fn follow(&self, link: NavLink) -> Result<Entity> {
        match link {
            NavLink::Block(number) => self.block(number).await,
            NavLink::Transaction(hash) => self.transaction(hash).await,
            NavLink::Address(address) => self.address(address).await,
        }
    }

    pub async fn block(&self, number: u64) -> Result<Entity> {
        let block = self
            .rpc
            .block_by_number(number, true)
            .await?
            .ok_or_else(|| ExplorerError::NotFound(format!("Block #{number}")))?;
        Ok(Entity::Block(block))
    }

    /// Block and transaction hashes look the same, so ask the node whether a
    /// block exists before falling back to a transaction lookup
    pub async fn block_or_transaction(&self, hash: B256) -> Result<Entity> {
        if self.rpc.block_by_hash(hash, false).await?.is_none() {
            return self.transaction(hash).await;
        }

        let block = self
            .rpc
            .block_by_hash(hash, true)
            .await?
            .ok_or_else(|| ExplorerError::NotFound(format!("Block {hash:?}")))?;
        Ok(Entity::Block(block))
    }

    pub async fn transaction(&self, hash: B256) -> Result<Entity> {
        let tx = self
            .rpc
            .transaction(hash)
            .await?
            .ok_or_else(|| ExplorerError::NotFound(format!("Transaction {hash:?}")))?;
        let receipt = self.rpc.receipt(hash).await?;
        Ok(Entity::Transaction { tx, receipt })
    }

    pub async fn address(&self, address: Address) -> Result<Entity> {
        Ok(Entity::Address(self.rpc.address_summary(address).await?))
    }

    /// The latest `count` blocks, newest first, with hash-only transactions.
    ///
    /// Blocks are requested concurrently. If one fails, the blocks before it
    /// are returned and the rest dropped.
    pub async fn latest_blocks(&self, count: usize) -> Result<Vec<Block>> {
        let latest = self.rpc.latest_block_number().await?;
        let numbers: Vec<u64> = (0..count as u64)
            .map_while(|i| latest.checked_sub(i))
            .collect();

        let results = join_all(numbers.iter().map(|&n| self.rpc.block_by_number(n, false))).await;

        let mut blocks = Vec::with_capacity(numbers.len());
        for (number, result) in numbers.into_iter().zip(results) {
            match result {
                Ok(Some(block)) => blocks.push(block),
                Ok(None) => {
                    warn!(number, "block missing from node, keeping partial list");
                    break;
                }
                Err(e) => {
                    warn!(number, error = %e, "block fetch failed, keeping partial list");
                    break;
                }
            }
        }

        info!(latest, loaded = blocks.len(), "latest blocks loaded");
        Ok(blocks)
    }

    /// Trailing transactions of the most recent blocks, newest block first and
    /// in block order within each block.
    ///
    /// Full blocks are fetched one at a time so the scan can stop as soon as
    /// the cap is reached.
    pub async fn recent_transactions(&self, scan: TxScan) -> Result<Vec<Transaction>> {
        let latest = self.rpc.latest_block_number().await?;
        let mut found: Vec<Transaction> = Vec::with_capacity(scan.cap);

        for number in (0..scan.blocks as u64).map_while(|i| latest.checked_sub(i)) {
            if found.len() >= scan.cap {
                break;
            }

            let block = match self.rpc.block_by_number(number, true).await {
                Ok(Some(block)) => block,
                Ok(None) => {
                    warn!(number, "block missing from node, keeping partial list");
                    break;
                }
                Err(e) => {
                    warn!(number, error = %e, "block fetch failed, keeping partial list");
                    break;
                }
            };

            let txs = block.transactions.txns();
            let tail = &txs[txs.len().saturating_sub(scan.per_block)..];
            let room = scan.cap - found.len();
            found.extend(tail.iter().take(room).cloned());
        }

        info!(latest, loaded = found.len(), "recent transactions loaded");
        Ok(found)
    }
}
