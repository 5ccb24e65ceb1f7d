use crate::input::{InputAction, InputService};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Spawn a blocking thread that collects terminal input and forwards actions onto a channel.
///
/// The thread exits when `shutdown` is set, when the receiver is dropped, or when polling
/// the terminal fails.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let mut service = InputService::new();
        while !shutdown.load(Ordering::SeqCst) {
            match service.poll_actions(Some(poll_interval)) {
                Ok(actions) => {
                    for action in actions {
                        if tx.send(action).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    log::error!("input thread error: {}", err);
                    break;
                }
            }
        }
    })
}

/// Wait for the input thread on the blocking pool so the async runtime keeps running.
///
/// Returns `false` when the thread panicked or could not be joined.
pub async fn join_input_thread(handle: JoinHandle<()>) -> bool {
    match tokio::task::spawn_blocking(move || handle.join()).await {
        Ok(Ok(())) => true,
        Ok(Err(_)) => {
            log::error!("input thread panicked");
            false
        }
        Err(err) => {
            log::error!("failed to join input thread: {}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_join_leaves_runtime_free() {
        let (release_tx, release_rx) = std::sync::mpsc::channel::<()>();
        let handle = std::thread::spawn(move || {
            let _ = release_rx.recv();
        });

        // The thread only exits once this future runs on the same runtime thread
        let release = async move {
            tokio::task::yield_now().await;
            release_tx.send(()).unwrap();
        };

        let (joined, ()) = tokio::join!(join_input_thread(handle), release);
        assert!(joined);
    }

    #[tokio::test]
    async fn test_join_reports_panicked_thread() {
        let handle = std::thread::spawn(|| panic!("terminal went away"));
        assert!(!join_input_thread(handle).await);
    }

    #[tokio::test]
    async fn test_input_thread_stops_on_shutdown_flag() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(true));
        let handle = spawn_input_thread(tx, shutdown, Duration::from_millis(10));
        assert!(join_input_thread(handle).await);
    }
}
