use std::io::IsTerminal;

use wayfarer_cli::presentation::THINKING;
use wayfarer_cli::{Config, SpinnerHook, TravelDesigner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let config = Config::from_env()?;
    log::debug!("{:?}", config);

    let designer = TravelDesigner::new(config.provider()?, &config)?;
    if std::io::stdout().is_terminal() {
        designer.add_hook(SpinnerHook::new(THINKING));
    }

    wayfarer_cli::run(&designer).await?;
    Ok(())
}
