use tokio_cron_scheduler::{Job, JobScheduler};
use url::Url;

use crate::error::AppError;

/// Cron schedule of the keep-alive ping: every 5 minutes.
pub const KEEP_ALIVE_SCHEDULE: &str = "0 */5 * * * *";

/// Starts the keep-alive scheduler
///
/// Pings the bot's own public URL every 5 minutes so the hosting platform does not idle
/// the process. Ping failures are ignored; the next tick simply tries again.
///
/// The returned scheduler must be kept alive for as long as the job should run.
///
/// # Arguments
/// - `http_client`: HTTP client used for the pings
/// - `self_url`: Public URL of this process
pub async fn start_scheduler(
    http_client: reqwest::Client,
    self_url: Url,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(KEEP_ALIVE_SCHEDULE, move |_uuid, _lock| {
        let client = http_client.clone();
        let url = self_url.clone();

        Box::pin(async move {
            ping(&client, &url).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Keep-alive scheduler started");

    Ok(scheduler)
}

/// Sends one keep-alive GET request.
///
/// # Returns
/// - `true` - The URL answered with a success status
/// - `false` - The request failed or returned an error status
pub async fn ping(client: &reqwest::Client, url: &Url) -> bool {
    match client.get(url.clone()).send().await {
        Ok(response) => response.status().is_success(),
        Err(_) => false,
    }
}
