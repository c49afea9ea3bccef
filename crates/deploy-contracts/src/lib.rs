//! Deploys a single compiled contract from a build artifact.

pub mod arguments;
pub mod artifact;
pub mod deployer;
pub mod factory;
pub mod run;

use {
    crate::{
        artifact::Artifact,
        deployer::{Deployment, OnchainDeployer},
    },
    anyhow::Result,
};

/// Loads the configured artifact and deploys it with the configured account.
pub async fn run(args: arguments::Arguments) -> Result<Deployment> {
    let name = args.contract_name();
    let artifact = Artifact::load(&args.artifact)?;
    tracing::debug!(
        %name,
        artifact = %args.artifact.display(),
        code_size = artifact.bytecode().len(),
        "loaded artifact"
    );

    let address = args.private_key.address();
    let provider = deployer::provider(&args.node_url, args.private_key);
    let deployer = OnchainDeployer::new(provider, address);

    run::deploy(&name, artifact, &deployer).await
}
