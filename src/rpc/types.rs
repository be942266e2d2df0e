use alloy::{
    consensus::Transaction as TxTrait,
    network::TransactionResponse,
    primitives::{Address, B256, U256},
    rpc::types::BlockTransactions as RpcBlockTransactions,
};

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub number: u64,
    pub hash: B256,
    pub timestamp: u64,
    pub gas_used: u64,
    pub gas_limit: u64,
    pub miner: Address,
    pub transactions: BlockTransactions,
}

impl Block {
    pub fn from_block(block: &alloy::rpc::types::Block) -> Self {
        let transactions = match &block.transactions {
            RpcBlockTransactions::Full(txs) => {
                BlockTransactions::Full(txs.iter().map(Transaction::from_tx).collect())
            }
            RpcBlockTransactions::Hashes(hashes) => BlockTransactions::Hashes(hashes.clone()),
            // Uncle blocks carry no transaction list
            RpcBlockTransactions::Uncle => BlockTransactions::Hashes(Vec::new()),
        };

        Self {
            number: block.header.number,
            hash: block.header.hash,
            timestamp: block.header.timestamp,
            gas_used: block.header.gas_used,
            gas_limit: block.header.gas_limit,
            miner: block.header.beneficiary,
            transactions,
        }
    }
}

/// Transactions of a block: hashes when fetched with `full = false`, objects otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockTransactions {
    Hashes(Vec<B256>),
    Full(Vec<Transaction>),
}

impl BlockTransactions {
    pub fn len(&self) -> usize {
        match self {
            Self::Hashes(hashes) => hashes.len(),
            Self::Full(txs) => txs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full transaction objects, empty for a hash-only block
    pub fn txns(&self) -> &[Transaction] {
        match self {
            Self::Hashes(_) => &[],
            Self::Full(txs) => txs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub hash: B256,
    pub from: Address,
    /// `None` for contract creation
    pub to: Option<Address>,
    pub value: U256,
    /// `None` while pending
    pub block_number: Option<u64>,
    pub nonce: u64,
    pub gas: u64,
}

impl Transaction {
    pub fn from_tx(tx: &alloy::rpc::types::Transaction) -> Self {
        Self {
            hash: TransactionResponse::tx_hash(tx),
            from: TransactionResponse::from(tx),
            to: TxTrait::to(tx),
            value: TxTrait::value(tx),
            block_number: tx.block_number,
            nonce: TxTrait::nonce(tx),
            gas: TxTrait::gas_limit(tx),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Success,
    Fail,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Success => "Success",
            TxStatus::Fail => "Fail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub transaction_hash: B256,
    /// `None` for pre-Byzantium receipts, which carry a state root instead
    pub status: Option<u64>,
    pub gas_used: u64,
}

impl Receipt {
    pub fn from_receipt(receipt: &alloy::rpc::types::TransactionReceipt) -> Self {
        let status = receipt
            .inner
            .as_receipt()
            .and_then(|r| r.status.as_eip658())
            .map(u64::from);

        Self {
            transaction_hash: receipt.transaction_hash,
            status,
            gas_used: receipt.gas_used,
        }
    }

    pub fn status(&self) -> TxStatus {
        if self.status == Some(1) {
            TxStatus::Success
        } else {
            TxStatus::Fail
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSummary {
    pub address: Address,
    pub balance: U256,
    pub tx_count: u64,
}
