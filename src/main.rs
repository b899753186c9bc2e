use std::sync::Arc;

use anyhow::{Context, anyhow};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use mqdigest::clients::{MqRestClient, WatsonxClient};
use mqdigest::config::AppConfig;
use mqdigest::worker::{Processor, StdoutSink};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mqdigest::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow!("config error: {e}"))?;

    let mq = MqRestClient::new(&config).context("failed to build MQ client")?;
    mq.connect()
        .await
        .context("failed to connect to queue manager")?;

    let watsonx = WatsonxClient::new(&config)
        .await
        .context("failed to initialize watsonx client")?;

    let processor = Arc::new(Processor::new(
        Arc::new(mq),
        Arc::new(watsonx),
        config.mq_queue.clone(),
        Arc::new(StdoutSink),
    ));

    let mut worker = tokio::spawn({
        let processor = Arc::clone(&processor);
        async move { processor.run().await }
    });

    eprintln!("Press ENTER to stop...");
    let mut line = String::new();
    let mut stdin = BufReader::new(tokio::io::stdin());

    tokio::select! {
        _ = stdin.read_line(&mut line) => {
            info!("Stop requested; waiting for worker to finish");
            processor.signal_stop();
            let _ = (&mut worker).await;
        }
        _ = &mut worker => {
            info!("Worker stopped on its own");
        }
    }

    info!("Worker ended. Shutting down");
    Ok(())
}
