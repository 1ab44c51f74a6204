use std::process::ExitCode;

use activationplot::catalog::catalog::Catalog;
use activationplot::configuration::Configuration;
use activationplot::server::appstate::AppState;
use activationplot::server::router;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Configuration::load(std::env::args().nth(1)) {
        Ok(config) => config,
        Err(error) => {
            log::error!("{}", error);
            return ExitCode::FAILURE;
        }
    };
    let state = AppState::new(Catalog::standard(), &config);

    match router::run(config, state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{}", error);
            ExitCode::FAILURE
        }
    }
}
