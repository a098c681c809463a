use anyhow::Context;
use std::{fs::OpenOptions, sync::Mutex};
use subledger::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = get_configuration().context("Failed to read configuration")?;

    match &config.application.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file `{path}`"))?;
            init_subscriber(get_subscriber(
                "subledger".into(),
                "info".into(),
                Mutex::new(file),
            ));
        }
        None => init_subscriber(get_subscriber(
            "subledger".into(),
            "info".into(),
            std::io::stdout,
        )),
    }

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
