//! # Contract Client
//!
//! Typed proxy over the exchange's three swap entry points and the ERC20
//! `allowance`/`approve` pair. [`DexClient`] encodes calldata with the
//! [`super::abi`] bindings and hands the transaction to a [`TxSigner`].
//!
//! Swap calls carry explicit gas limits (600k single hop, 800k token to token)
//! so the wallet does not run its own estimation against the exchange.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;

use super::abi::{IHoodsDex, IERC20};
use super::{PendingTx, TxRequest, TxSigner};
use crate::config::DexConfig;
use crate::error::ChainError;

/// Remote calls the swap workflow makes.
#[async_trait(?Send)]
pub trait ContractClient {
    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, ChainError>;

    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<PendingTx, ChainError>;

    /// Payable: `value` is sent as native coin.
    async fn eth_to_token(&self, token_out: Address, value: U256) -> Result<PendingTx, ChainError>;

    async fn token_to_eth(&self, token_in: Address, amount: U256) -> Result<PendingTx, ChainError>;

    async fn token_to_token(
        &self,
        token_in: Address,
        token_out: Address,
        amount: U256,
    ) -> Result<PendingTx, ChainError>;
}

/// Binds a freshly acquired signer into a contract client.
pub trait ClientFactory<S> {
    type Client: ContractClient;

    fn bind(&self, signer: S) -> Self::Client;
}

/// Exchange address and gas limits; the [`ClientFactory`] for [`DexClient`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DexBinding {
    pub exchange: Address,
    pub single_hop_gas: u64,
    pub multi_hop_gas: u64,
}

impl DexBinding {
    pub fn from_config(config: &DexConfig) -> Self {
        Self {
            exchange: config.dex_address,
            single_hop_gas: config.single_hop_gas_limit,
            multi_hop_gas: config.multi_hop_gas_limit,
        }
    }
}

impl<S: TxSigner + Clone + 'static> ClientFactory<S> for DexBinding {
    type Client = DexClient<S>;

    fn bind(&self, signer: S) -> DexClient<S> {
        DexClient::new(signer, *self)
    }
}

/// [`ContractClient`] backed by a real signer.
#[derive(Clone)]
pub struct DexClient<S> {
    signer: S,
    binding: DexBinding,
}

impl<S: TxSigner + Clone + 'static> DexClient<S> {
    pub fn new(signer: S, binding: DexBinding) -> Self {
        Self { signer, binding }
    }

    async fn submit(
        &self,
        to: Address,
        data: Vec<u8>,
        value: U256,
        gas: Option<u64>,
    ) -> Result<PendingTx, ChainError> {
        let tx = TxRequest {
            from: self.signer.address(),
            to,
            data: Bytes::from(data),
            value,
            gas,
        };
        let hash = self.signer.send(tx).await?;
        tracing::debug!(%hash, %to, "transaction submitted");
        Ok(PendingTx::new(hash, self.signer.clone()))
    }
}

#[async_trait(?Send)]
impl<S: TxSigner + Clone + 'static> ContractClient for DexClient<S> {
    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, ChainError> {
        let data = IERC20::allowanceCall { owner, spender }.abi_encode();
        let raw = self.signer.call(token, Bytes::from(data)).await?;
        let decoded = IERC20::allowanceCall::abi_decode_returns(&raw, true)
            .map_err(|e| ChainError::Decode(format!("allowance: {e}")))?;
        Ok(decoded._0)
    }

    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<PendingTx, ChainError> {
        let data = IERC20::approveCall { spender, amount }.abi_encode();
        self.submit(token, data, U256::ZERO, None).await
    }

    async fn eth_to_token(&self, token_out: Address, value: U256) -> Result<PendingTx, ChainError> {
        let data = IHoodsDex::ethToTokenCall { tokenOut: token_out }.abi_encode();
        self.submit(self.binding.exchange, data, value, Some(self.binding.single_hop_gas))
            .await
    }

    async fn token_to_eth(&self, token_in: Address, amount: U256) -> Result<PendingTx, ChainError> {
        let data = IHoodsDex::tokenToEthCall {
            tokenIn: token_in,
            amountIn: amount,
        }
        .abi_encode();
        self.submit(self.binding.exchange, data, U256::ZERO, Some(self.binding.single_hop_gas))
            .await
    }

    async fn token_to_token(
        &self,
        token_in: Address,
        token_out: Address,
        amount: U256,
    ) -> Result<PendingTx, ChainError> {
        let data = IHoodsDex::tokenToTokenCall {
            tokenIn: token_in,
            tokenOut: token_out,
            amountIn: amount,
        }
        .abi_encode();
        self.submit(self.binding.exchange, data, U256::ZERO, Some(self.binding.multi_hop_gas))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{ReceiptWatcher, TxReceipt};
    use alloy_primitives::{address, TxHash};
    use std::cell::RefCell;
    use std::rc::Rc;

    const OWNER: Address = address!("00000000000000000000000000000000000000aa");

    /// Records submitted transactions and answers `eth_call` with a fixed word.
    #[derive(Clone, Default)]
    struct RecordingSigner {
        sent: Rc<RefCell<Vec<TxRequest>>>,
        call_result: Bytes,
        mined_ok: bool,
    }

    #[async_trait(?Send)]
    impl ReceiptWatcher for RecordingSigner {
        async fn receipt(&self, hash: TxHash) -> Result<TxReceipt, ChainError> {
            Ok(TxReceipt {
                hash,
                success: self.mined_ok,
                block_number: Some(7),
            })
        }
    }

    #[async_trait(?Send)]
    impl TxSigner for RecordingSigner {
        fn address(&self) -> Address {
            OWNER
        }

        async fn call(&self, _to: Address, _data: Bytes) -> Result<Bytes, ChainError> {
            Ok(self.call_result.clone())
        }

        async fn send(&self, tx: TxRequest) -> Result<TxHash, ChainError> {
            self.sent.borrow_mut().push(tx);
            Ok(TxHash::repeat_byte(0x11))
        }
    }

    fn client(signer: RecordingSigner) -> DexClient<RecordingSigner> {
        DexBinding::from_config(&DexConfig::default()).bind(signer)
    }

    #[tokio::test]
    async fn test_swap_calls_target_exchange_with_gas_limits() {
        let signer = RecordingSigner {
            mined_ok: true,
            ..Default::default()
        };
        let sent = signer.sent.clone();
        let client = client(signer);
        let config = DexConfig::default();
        let amd = config.tokens.address_of("AMD").unwrap();
        let tsla = config.tokens.address_of("TSLA").unwrap();

        client.eth_to_token(tsla, U256::from(5u64)).await.unwrap();
        client.token_to_eth(amd, U256::from(6u64)).await.unwrap();
        client.token_to_token(amd, tsla, U256::from(7u64)).await.unwrap();

        let sent = sent.borrow();
        assert_eq!(sent.len(), 3);
        assert!(sent.iter().all(|tx| tx.to == config.dex_address && tx.from == OWNER));

        assert_eq!(sent[0].value, U256::from(5u64));
        assert_eq!(sent[0].gas, Some(600_000));
        assert_eq!(
            sent[0].data.as_ref(),
            IHoodsDex::ethToTokenCall { tokenOut: tsla }.abi_encode().as_slice()
        );

        assert_eq!(sent[1].value, U256::ZERO);
        assert_eq!(sent[1].gas, Some(600_000));

        assert_eq!(sent[2].gas, Some(800_000));
        let decoded = IHoodsDex::tokenToTokenCall::abi_decode(&sent[2].data, true).unwrap();
        assert_eq!(decoded.tokenIn, amd);
        assert_eq!(decoded.tokenOut, tsla);
        assert_eq!(decoded.amountIn, U256::from(7u64));
    }

    #[tokio::test]
    async fn test_approve_targets_token_without_gas_override() {
        let signer = RecordingSigner::default();
        let sent = signer.sent.clone();
        let client = client(signer);
        let token = address!("71178BAc73cBeb415514eB542a8995b82669778d");
        let spender = DexConfig::default().dex_address;

        client.approve(token, spender, U256::MAX).await.unwrap();

        let sent = sent.borrow();
        assert_eq!(sent[0].to, token);
        assert_eq!(sent[0].gas, None);
        let decoded = IERC20::approveCall::abi_decode(&sent[0].data, true).unwrap();
        assert_eq!(decoded.spender, spender);
        assert_eq!(decoded.amount, U256::MAX);
    }

    #[tokio::test]
    async fn test_allowance_decodes_word() {
        let word = U256::from(1_500u64).to_be_bytes::<32>();
        let signer = RecordingSigner {
            call_result: Bytes::copy_from_slice(&word),
            ..Default::default()
        };
        let client = client(signer);

        let allowance = client
            .allowance(Address::ZERO, OWNER, Address::ZERO)
            .await
            .unwrap();
        assert_eq!(allowance, U256::from(1_500u64));
    }

    #[tokio::test]
    async fn test_allowance_short_response_is_decode_error() {
        let signer = RecordingSigner {
            call_result: Bytes::from_static(&[0x01, 0x02]),
            ..Default::default()
        };
        let err = client(signer)
            .allowance(Address::ZERO, OWNER, Address::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, ChainError::Decode(_)));
    }

    #[tokio::test]
    async fn test_failed_receipt_becomes_revert() {
        let signer = RecordingSigner {
            mined_ok: false,
            ..Default::default()
        };
        let pending = client(signer)
            .token_to_eth(Address::ZERO, U256::from(1u64))
            .await
            .unwrap();
        let hash = pending.hash();
        assert_eq!(
            pending.wait().await,
            Err(ChainError::Reverted { hash, reason: None })
        );
    }
}
