use anyhow::Result;
use problem_or::demo::{self, Demo, DemoConfig, DemoOperations};
use problem_or::{ProblemOr, Success};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = DemoConfig::from_env()?;
    tracing::info!(scenario = %config.scenario(), "running demo");

    let operations: Box<dyn DemoOperations> = Box::new(Demo::new(&config));

    if config.scenario().runs_success() {
        report("success", &operations.success()).await;
    }
    if config.scenario().runs_problem() {
        report("problem", &operations.problem()).await;
    }

    Ok(())
}

async fn report(operation: &str, outcome: &ProblemOr<Success>) {
    println!("{}", demo::describe(operation, outcome));

    let status = outcome
        .match_first_async(
            |_| async { 0 },
            |problem| async move {
                tokio::task::yield_now().await;
                problem.numeric_type()
            },
        )
        .await;
    tracing::debug!(operation, status, "outcome resolved");
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
