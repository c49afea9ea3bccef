use {
    crate::{
        artifact::Artifact,
        deployer::{ContractDeployer, DeployOptions, Deployment},
        factory::ContractFactory,
    },
    anyhow::{Context, Result},
};

/// Gas limit attached to every deployment, independent of the bytecode size.
pub const GAS_LIMIT: u64 = 1_000_000;

/// Deploys `artifact` without constructor arguments from the account of
/// `deployer`. Submits exactly one transaction and never retries.
pub async fn deploy(
    name: &str,
    artifact: Artifact,
    deployer: &dyn ContractDeployer,
) -> Result<Deployment> {
    let factory = ContractFactory::new(artifact, deployer.address());
    let request = factory.deploy_request(
        name,
        &[],
        DeployOptions {
            gas_limit: GAS_LIMIT,
        },
    )?;
    deployer
        .deploy(request)
        .await
        .with_context(|| format!("failed to deploy {name}"))
}

/// Process exit code for the outcome of a run.
pub fn exit_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
