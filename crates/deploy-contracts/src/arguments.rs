use {
    alloy::signers::local::PrivateKeySigner,
    std::{
        fmt::{self, Display, Formatter},
        path::PathBuf,
    },
    tracing::level_filters::LevelFilter,
    url::Url,
};

macro_rules! logging_args_with_default_filter {
    ($struct_name:ident ,$default_filter:literal) => {
        #[derive(clap::Parser)]
        pub struct $struct_name {
            /// Tracing filter directives. A filter that disables errors of
            /// `deploy_contracts` makes the failure report fall back to plain
            /// stderr output.
            #[clap(long, env, default_value = $default_filter)]
            pub log_filter: String,

            /// Events at this level or more severe are written to stderr,
            /// everything else to stdout.
            #[clap(long, env, default_value = "error")]
            pub log_stderr_threshold: LevelFilter,

            /// Emit log lines as JSON.
            #[clap(long, env)]
            pub log_json: bool,
        }

        impl ::std::fmt::Display for $struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let Self {
                    log_filter,
                    log_stderr_threshold,
                    log_json,
                } = self;

                writeln!(f, "log_filter: {}", log_filter)?;
                writeln!(f, "log_stderr_threshold: {}", log_stderr_threshold)?;
                writeln!(f, "log_json: {}", log_json)?;
                Ok(())
            }
        }
    };
}

logging_args_with_default_filter!(
    LoggingArguments,
    "warn,deploy_contracts=debug,observe=info"
);

#[derive(clap::Parser)]
#[clap(version)]
pub struct Arguments {
    #[clap(flatten)]
    pub logging: LoggingArguments,

    /// Path to the compiled contract artifact.
    #[clap(long, env, default_value = "out/Drain.sol/Drain.json")]
    pub artifact: PathBuf,

    /// Name of the contract used in logs. Defaults to the file name of the
    /// artifact without its extension.
    #[clap(long, env)]
    pub contract_name: Option<String>,

    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Hex encoded private key of the account that signs and pays for the
    /// deployment.
    #[clap(long, env, hide_env_values = true)]
    pub private_key: PrivateKeySigner,
}

impl Arguments {
    pub fn contract_name(&self) -> String {
        self.contract_name.clone().unwrap_or_else(|| {
            self.artifact
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "contract".to_string())
        })
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            logging,
            artifact,
            contract_name,
            node_url,
            private_key,
        } = self;

        write!(f, "{}", logging)?;
        writeln!(f, "artifact: {}", artifact.display())?;
        writeln!(f, "contract_name: {:?}", contract_name)?;
        writeln!(f, "node_url: {}", node_url)?;
        writeln!(f, "deployer: {}", private_key.address())?;
        writeln!(f, "private_key: SECRET")?;
        Ok(())
    }
}
