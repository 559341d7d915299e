//! Analysis actor: runs service requests off the event loop

use tokio::sync::mpsc;

use super::client::EmailAnalyzer;
use super::types::{AnalysisResult, RequestToken};

/// Commands that can be sent to the analysis actor
#[derive(Debug)]
pub enum AnalysisCommand {
    /// Analyze an email; the token is echoed back in the resulting event
    Analyze {
        token: RequestToken,
        email_text: String,
    },
    /// Shutdown the actor
    Shutdown,
}

/// Events emitted by the analysis actor
#[derive(Debug, Clone)]
pub enum AnalysisEvent {
    Completed {
        token: RequestToken,
        result: AnalysisResult,
    },
    /// Request failed; `message` is ready for display
    Failed {
        token: RequestToken,
        message: String,
    },
}

impl AnalysisEvent {
    pub fn token(&self) -> RequestToken {
        match self {
            Self::Completed { token, .. } | Self::Failed { token, .. } => *token,
        }
    }
}

/// Handle for communicating with the analysis actor
pub struct AnalysisActorHandle {
    pub cmd_tx: mpsc::Sender<AnalysisCommand>,
    pub event_rx: mpsc::Receiver<AnalysisEvent>,
}

/// Spawn the analysis actor task
pub fn spawn_analysis_actor<A: EmailAnalyzer>(analyzer: A) -> AnalysisActorHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel(4);
    let (event_tx, event_rx) = mpsc::channel(8);

    tokio::spawn(analysis_actor_loop(analyzer, cmd_rx, event_tx));

    AnalysisActorHandle { cmd_tx, event_rx }
}

async fn analysis_actor_loop<A: EmailAnalyzer>(
    analyzer: A,
    mut cmd_rx: mpsc::Receiver<AnalysisCommand>,
    event_tx: mpsc::Sender<AnalysisEvent>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            AnalysisCommand::Analyze { token, email_text } => {
                tracing::info!("Analysis {} started", token);

                let event = match analyzer.analyze(&email_text).await {
                    Ok(result) => {
                        tracing::info!("Analysis {} complete: intent={}", token, result.intent);
                        AnalysisEvent::Completed { token, result }
                    }
                    Err(e) => {
                        tracing::warn!("Analysis {} failed: {}", token, e);
                        AnalysisEvent::Failed {
                            token,
                            message: e.user_message(),
                        }
                    }
                };

                if event_tx.send(event).await.is_err() {
                    tracing::warn!("Analysis actor: event receiver dropped");
                    break;
                }
            }

            AnalysisCommand::Shutdown => {
                break;
            }
        }
    }
}
