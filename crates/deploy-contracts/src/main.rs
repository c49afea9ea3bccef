use {clap::Parser, deploy_contracts::arguments::Arguments};

#[tokio::main]
async fn main() {
    // clap exits with 2 on invalid arguments, every failure of this tool is 1.
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };
    observe::tracing::initialize(&observe::Config::new(
        &args.logging.log_filter,
        args.logging.log_stderr_threshold,
        args.logging.log_json,
    ));
    tracing::info!("running deploy-contracts with validated arguments:\n{}", args);

    let result = deploy_contracts::run(args).await;
    if let Err(err) = &result {
        // The log filter is user supplied and might drop the event.
        if tracing::enabled!(tracing::Level::ERROR) {
            tracing::error!(?err, "deployment failed");
        } else {
            eprintln!("deployment failed: {err:?}");
        }
    }
    std::process::exit(deploy_contracts::run::exit_code(&result));
}
