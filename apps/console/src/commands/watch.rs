//! Alert watch mode: hosts the recurring poller until interrupted.

use crate::context::AppContext;
use crate::error::ConsoleResult;

pub async fn run(ctx: &AppContext) -> ConsoleResult<()> {
    let handle = ctx.poller.spawn(ctx.config.poll_interval);
    ctx.session.attach_poller(handle).await;

    println!(
        "Watching for alerts every {}s. Press Ctrl-C to stop.",
        ctx.config.poll_interval.as_secs()
    );
    tokio::signal::ctrl_c().await?;

    ctx.session.shutdown_poller().await;
    println!("\nStopped. {} unread alert(s).", ctx.poller.unread_count());
    Ok(())
}
