//! Needs a dev node (anvil or `geth --dev`) with funded default accounts
//! listening on `NODE_HOST`. Run with `cargo test -- --ignored`.

use {
    alloy::{
        primitives::Address,
        providers::Provider,
        signers::local::PrivateKeySigner,
    },
    deploy_contracts::{
        artifact::Artifact,
        deployer::{self, OnchainDeployer},
        run,
    },
};

const NODE_HOST: &str = "http://127.0.0.1:8545";
const PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const ANSWER: &str = r#"{
    "abi": [{"type":"function","name":"answer","inputs":[],"outputs":[{"name":"","type":"uint256","internalType":"uint256"}],"stateMutability":"view"}],
    "bytecode": {"object":"0x600a600c600039600a6000f3602a60005260206000f3"}
}"#;

fn local_deployer(private_key: &str) -> OnchainDeployer {
    observe::tracing::initialize_reentrant(
        &observe::Config::default().with_env_filter("warn,deploy_contracts=debug"),
    );
    let signer: PrivateKeySigner = private_key.parse().unwrap();
    let address = signer.address();
    OnchainDeployer::new(deployer::provider(&NODE_HOST.parse().unwrap(), signer), address)
}

#[tokio::test]
#[ignore]
async fn local_node_deploy() {
    let deployer = local_deployer(PRIVATE_KEY);
    let artifact = Artifact::from_json(ANSWER).unwrap();

    let deployment = run::deploy("Answer", artifact, &deployer).await.unwrap();

    assert_ne!(deployment.address, Address::ZERO);
    assert!(deployment.gas_used <= run::GAS_LIMIT);
    let provider = deployer::provider(
        &NODE_HOST.parse().unwrap(),
        PRIVATE_KEY.parse().unwrap(),
    );
    let code = provider.get_code_at(deployment.address).await.unwrap();
    assert_eq!(code.len(), 10);
}

#[tokio::test]
#[ignore]
async fn local_node_unfunded_signer() {
    // Never funded on a fresh dev node.
    let deployer = local_deployer(&format!("0x{}", "11".repeat(32)));
    let artifact = Artifact::from_json(ANSWER).unwrap();

    let result = run::deploy("Answer", artifact, &deployer).await;

    assert_eq!(run::exit_code(&result), 1);
}
