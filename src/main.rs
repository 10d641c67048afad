use dotenv::dotenv;
use rand::Rng;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wumpus_agent::infra::{AgentConfig, CompositeObserver, DefaultObserver, ReplayObserver};
use wumpus_agent::session::Session;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wumpus_agent=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_logging();

    let config = AgentConfig::from_env();
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!("Replays folder: {:?}", config.replays_folder);

    let mut observer = CompositeObserver::new(Vec::new());
    observer.push(DefaultObserver::new(config.show_map));
    if let Some(folder) = &config.replays_folder {
        observer.push(ReplayObserver::new(folder));
    }

    let mut session = Session::with_observer(seed, observer);
    session.new_world(config.world_config());
    session.run(config.attempts, config.max_steps)?;

    Ok(())
}
