use anyhow::{Context, Result};
use tracing::info;

use crate::parser::task::Task;

/// Hand a parsed task to a local judge tool listening on `port`: a one-shot
/// JSON POST, the same protocol the browser-extension family speaks.
pub async fn send_task(client: &reqwest::Client, port: u16, task: &Task) -> Result<()> {
    let body = serde_json::to_string(task)?;
    let endpoint = format!("http://localhost:{port}/");

    let resp = client
        .post(&endpoint)
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .with_context(|| format!("POST to {endpoint} failed — is the judge tool listening?"))?;

    if !resp.status().is_success() {
        anyhow::bail!("Listener on port {} rejected the task: {}", port, resp.status());
    }

    info!("Delivered {} to port {}", task.name, port);
    Ok(())
}
