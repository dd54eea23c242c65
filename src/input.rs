use tokio::io::AsyncBufReadExt;

/// Reads line-delimited JSON events from stdin and feeds them into the
/// run loop. Unparsable lines are logged and skipped.
pub async fn run(
    cancellation_token: tokio_util::sync::CancellationToken,
    sender: tokio::sync::mpsc::Sender<crate::event::Event>,
) {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancellation_token.cancelled() => break,

            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        if line.trim().is_empty() {
                            continue;
                        }

                        match serde_json::from_str::<crate::event::Event>(&line) {
                            Ok(event) => {
                                if sender.send(event).await.is_err() {
                                    tracing::error!("Event receiver closed");
                                    break;
                                }
                            }
                            Err(error) => {
                                tracing::warn!(?error, input = %line, "Ignoring unparsable event");
                            }
                        }
                    }

                    Ok(None) => {
                        tracing::debug!("stdin closed");
                        break;
                    }

                    Err(error) => {
                        tracing::error!(?error, "Failed to read from stdin");
                        break;
                    }
                }
            }
        }
    }
}
