//! Serving with a bounded shutdown drain.

use std::future::{Future, IntoFuture};
use std::io;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{info, warn};

/// Serves `app` until `signal` resolves, then drains in-flight requests.
///
/// The listener stops accepting as soon as `signal` resolves. Requests still
/// running after `grace` are dropped.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (fired_tx, fired_rx) = oneshot::channel();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            fired_tx.send(()).ok();
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => result,
        Ok(()) = fired_rx => {
            info!(
                timeout_secs = grace.as_secs(),
                "Waiting for in-flight requests to complete"
            );
            if let Ok(result) = tokio::time::timeout(grace, &mut server).await {
                result
            } else {
                warn!("Grace period elapsed, dropping remaining connections");
                Ok(())
            }
        }
    }
}
