//! The boundary between the deployment runner and the chain.

use {
    alloy::{
        network::{EthereumWallet, ReceiptResponse, TransactionBuilder},
        primitives::{Address, B256, Bytes},
        providers::{DynProvider, Provider, ProviderBuilder},
        rpc::{client::ClientBuilder, types::TransactionRequest},
        signers::local::PrivateKeySigner,
    },
    anyhow::{Context, Result, ensure},
    url::Url,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployOptions {
    pub gas_limit: u64,
}

/// Everything needed to submit a single contract creation transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    /// Human readable contract name, only used for logging.
    pub name: String,
    pub from: Address,
    /// Creation bytecode including the encoded constructor arguments.
    pub code: Bytes,
    pub options: DeployOptions,
}

impl DeploymentRequest {
    fn transaction(&self) -> TransactionRequest {
        TransactionRequest::default()
            .from(self.from)
            .with_deploy_code(self.code.clone())
            .gas_limit(self.options.gas_limit)
    }
}

/// A contract instance created on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub name: String,
    pub address: Address,
    pub transaction_hash: B256,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

impl Deployment {
    /// Fails for reverted transactions and receipts without a created
    /// contract.
    fn from_receipt(name: String, receipt: &impl ReceiptResponse) -> Result<Self> {
        ensure!(
            receipt.status(),
            "deployment transaction reverted: {:?}",
            receipt.transaction_hash()
        );
        let address = receipt
            .contract_address()
            .context("deployment receipt is missing the contract address")?;
        Ok(Self {
            name,
            address,
            transaction_hash: receipt.transaction_hash(),
            block_number: receipt.block_number(),
            gas_used: receipt.gas_used(),
        })
    }
}

/// Submits contract creation transactions on behalf of a single account.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ContractDeployer: Send + Sync {
    /// The account paying for and signing the deployments.
    fn address(&self) -> Address;

    /// Sends the creation transaction and waits until it got mined.
    ///
    /// Fails if the transaction could not be sent, reverted or the receipt
    /// does not contain the address of the created contract.
    async fn deploy(&self, request: DeploymentRequest) -> Result<Deployment>;
}

/// Builds an HTTP provider that signs every transaction with `signer`.
pub fn provider(url: &Url, signer: PrivateKeySigner) -> DynProvider {
    let rpc = ClientBuilder::default().http(url.clone());
    ProviderBuilder::new()
        .wallet(EthereumWallet::new(signer))
        .connect_client(rpc)
        .erased()
}

pub struct OnchainDeployer {
    provider: DynProvider,
    address: Address,
}

impl OnchainDeployer {
    /// `address` has to be an account the provider's wallet can sign for.
    pub fn new(provider: DynProvider, address: Address) -> Self {
        Self { provider, address }
    }
}

#[async_trait::async_trait]
impl ContractDeployer for OnchainDeployer {
    fn address(&self) -> Address {
        self.address
    }

    async fn deploy(&self, request: DeploymentRequest) -> Result<Deployment> {
        tracing::info!(
            name = %request.name,
            from = ?request.from,
            gas_limit = request.options.gas_limit,
            code_size = request.code.len(),
            "deploying contract"
        );

        let pending = self
            .provider
            .send_transaction(request.transaction())
            .await
            .context("failed to send deployment transaction")?;
        tracing::debug!(tx_hash = ?pending.tx_hash(), "deployment transaction sent");

        let receipt = pending
            .get_receipt()
            .await
            .context("failed to get deployment receipt")?;
        let deployment = Deployment::from_receipt(request.name, &receipt)?;

        tracing::info!(
            name = %deployment.name,
            address = ?deployment.address,
            tx_hash = ?deployment.transaction_hash,
            block = ?deployment.block_number,
            gas_used = deployment.gas_used,
            "contract deployed"
        );
        Ok(deployment)
    }
}
