use {
    crate::{
        artifact::Artifact,
        deployer::{DeployOptions, DeploymentRequest},
    },
    alloy::{
        dyn_abi::{DynSolValue, JsonAbiExt},
        primitives::{Address, Bytes},
    },
    anyhow::{Context, Result, ensure},
};

/// Binds an [`Artifact`] to the account that sends its creation transaction.
#[derive(Debug, Clone)]
pub struct ContractFactory {
    artifact: Artifact,
    deployer: Address,
}

impl ContractFactory {
    pub fn new(artifact: Artifact, deployer: Address) -> Self {
        Self { artifact, deployer }
    }

    /// Creation bytecode followed by the ABI encoded constructor arguments.
    pub fn deploy_code(&self, args: &[DynSolValue]) -> Result<Bytes> {
        let mut code = self.artifact.bytecode().to_vec();
        match self.artifact.abi().constructor() {
            Some(constructor) => {
                let encoded = constructor
                    .abi_encode_input(args)
                    .context("constructor arguments do not match the abi")?;
                code.extend(encoded);
            }
            None => ensure!(
                args.is_empty(),
                "contract has no constructor but {} arguments were given",
                args.len()
            ),
        }
        Ok(code.into())
    }

    pub fn deploy_request(
        &self,
        name: &str,
        args: &[DynSolValue],
        options: DeployOptions,
    ) -> Result<DeploymentRequest> {
        Ok(DeploymentRequest {
            name: name.to_string(),
            from: self.deployer,
            code: self.deploy_code(args)?,
            options,
        })
    }
}
