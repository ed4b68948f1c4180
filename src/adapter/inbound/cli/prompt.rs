//! Terminal transaction prompt.

use async_trait::async_trait;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use tracing::warn;

use crate::port::{TransactionPrompt, TransactionRequest};

/// Asks on the terminal before every transaction is signed.
///
/// A prompt that cannot be shown (no TTY, closed stdin) counts as declined.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

#[async_trait]
impl TransactionPrompt for TerminalPrompt {
    async fn confirm(&self, request: &TransactionRequest) -> bool {
        let question = format!("Sign transaction: {request}?");
        let answer = tokio::task::spawn_blocking(move || {
            Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(question)
                .default(false)
                .interact()
        })
        .await;

        match answer {
            Ok(Ok(approved)) => approved,
            Ok(Err(e)) => {
                warn!(error = %e, "Transaction prompt unavailable, declining");
                false
            }
            Err(e) => {
                warn!(error = %e, "Transaction prompt task failed, declining");
                false
            }
        }
    }
}
