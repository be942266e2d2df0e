mod transport;
mod types;

pub use transport::{HttpTransport, JsonRpcRequest, JsonRpcResponse, Transport};
pub use types::*;

use alloy::primitives::{Address, B256, U256};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

use crate::error::{ExplorerError, Result};
use crate::format::{hex_to_int, parse_wei, to_quantity};

type RpcBlock = alloy::rpc::types::Block;
type RpcTransaction = alloy::rpc::types::Transaction;
type RpcReceipt = alloy::rpc::types::TransactionReceipt;

/// JSON-RPC 2.0 client for a single endpoint.
///
/// Request ids start at 1 and grow by one per call for the life of the client,
/// whatever the method or outcome. There is no batching, retry or timeout.
pub struct RpcClient<T = HttpTransport> {
    transport: T,
    next_id: AtomicU64,
}

impl RpcClient<HttpTransport> {
    pub fn new(rpc_url: &str) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(rpc_url)?))
    }
}

impl<T: Transport> RpcClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one request and return its `result` verbatim
    pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let request = JsonRpcRequest::new(id, method, &params);
        let body = serde_json::to_value(&request)
            .map_err(|e| ExplorerError::Transport(format!("Failed to encode {method}: {e}")))?;

        debug!(id, method, "rpc request");

        let raw = self.transport.send(body).await.inspect_err(|e| {
            warn!(id, method, error = %e, "rpc transport failure");
        })?;

        let response: JsonRpcResponse = serde_json::from_value(raw).map_err(|e| {
            ExplorerError::Transport(format!("Unexpected response to {method}: {e}"))
        })?;

        match (response.error, response.result) {
            (Some(error), _) => {
                warn!(id, method, code = error.code, message = %error.message, "rpc error");
                Err(ExplorerError::Rpc {
                    code: error.code,
                    message: error.message,
                })
            }
            (None, Some(result)) => Ok(result),
            (None, None) => {
                warn!(id, method, "rpc response without result or error");
                Err(ExplorerError::Malformed(format!(
                    "{method}: response has neither result nor error"
                )))
            }
        }
    }

    async fn call_typed<R: DeserializeOwned>(&self, method: &str, params: Vec<Value>) -> Result<R> {
        let value = self.call(method, params).await?;
        serde_json::from_value(value).map_err(|e| ExplorerError::Malformed(format!("{method}: {e}")))
    }

    pub async fn latest_block_number(&self) -> Result<u64> {
        let hex: String = self.call_typed("eth_blockNumber", vec![]).await?;
        hex_to_int(&hex).map_err(|e| ExplorerError::Malformed(format!("eth_blockNumber: {e}")))
    }

    pub async fn block_by_number(&self, number: u64, full: bool) -> Result<Option<Block>> {
        let block: Option<RpcBlock> = self
            .call_typed(
                "eth_getBlockByNumber",
                vec![json!(to_quantity(number)), json!(full)],
            )
            .await?;
        Ok(block.as_ref().map(Block::from_block))
    }

    pub async fn block_by_hash(&self, hash: B256, full: bool) -> Result<Option<Block>> {
        let block: Option<RpcBlock> = self
            .call_typed("eth_getBlockByHash", vec![json!(format!("{hash:?}")), json!(full)])
            .await?;
        Ok(block.as_ref().map(Block::from_block))
    }

    pub async fn transaction(&self, hash: B256) -> Result<Option<Transaction>> {
        let tx: Option<RpcTransaction> = self
            .call_typed("eth_getTransactionByHash", vec![json!(format!("{hash:?}"))])
            .await?;
        Ok(tx.as_ref().map(Transaction::from_tx))
    }

    /// `None` while the transaction is pending
    pub async fn receipt(&self, hash: B256) -> Result<Option<Receipt>> {
        let receipt: Option<RpcReceipt> = self
            .call_typed("eth_getTransactionReceipt", vec![json!(format!("{hash:?}"))])
            .await?;
        Ok(receipt.as_ref().map(Receipt::from_receipt))
    }

    pub async fn balance(&self, address: Address) -> Result<U256> {
        let hex: String = self
            .call_typed(
                "eth_getBalance",
                vec![json!(format!("{address:?}")), json!("latest")],
            )
            .await?;
        parse_wei(&hex).map_err(|e| ExplorerError::Malformed(format!("eth_getBalance: {e}")))
    }

    pub async fn tx_count(&self, address: Address) -> Result<u64> {
        let hex: String = self
            .call_typed(
                "eth_getTransactionCount",
                vec![json!(format!("{address:?}")), json!("latest")],
            )
            .await?;
        hex_to_int(&hex)
            .map_err(|e| ExplorerError::Malformed(format!("eth_getTransactionCount: {e}")))
    }

    /// Balance then nonce, one after the other
    pub async fn address_summary(&self, address: Address) -> Result<AddressSummary> {
        let balance = self.balance(address).await?;
        let tx_count = self.tx_count(address).await?;

        Ok(AddressSummary {
            address,
            balance,
            tx_count,
        })
    }
}
