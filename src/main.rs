use anyhow::Context;
use story_spoiler::configuration::get_configuration;
use story_spoiler::startup::Suite;
use story_spoiler::telemetry::{get_subscriber, init_subscriber};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, the report to stdout
    let subscriber = get_subscriber("story_spoiler".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let suite = Suite::build(&configuration)
        .await
        .context("Failed to bootstrap the session.")?;
    let report = suite.run_until_finished().await;

    println!("{}", report);
    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
