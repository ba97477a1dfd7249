use tokio::signal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopSignal {
    Interrupt,
    Terminate,
}

impl StopSignal {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        }
    }
}

/// Future handed to `axum::serve`; resolves once the first stop signal arrives.
pub(crate) async fn shutdown_signal() {
    let received = wait_for_stop().await;
    tracing::info!(signal = received.as_str(), "Stop requested; finishing in-flight requests");
}

async fn wait_for_stop() -> StopSignal {
    tokio::select! {
        () = interrupt() => StopSignal::Interrupt,
        () = terminate() => StopSignal::Terminate,
    }
}

// A listener that cannot be installed never fires; the other one still can.
async fn interrupt() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::warn!(error = %err, "Interrupt listener unavailable");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use signal::unix::{signal as unix_signal, SignalKind};

    match unix_signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(err) => {
            tracing::warn!(error = %err, "Terminate listener unavailable");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

#[cfg(test)]
mod tests {
    use super::StopSignal;

    #[test]
    fn stop_signals_use_posix_names() {
        assert_eq!(StopSignal::Interrupt.as_str(), "SIGINT");
        assert_eq!(StopSignal::Terminate.as_str(), "SIGTERM");
    }
}
