//! Terminal confirmation port

use async_trait::async_trait;
use plugin_lifecycle::{ConfirmationPort, ModalOptions, ModalResponse};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tokio::sync::Mutex;
use tracing::debug;

/// Asks questions on a terminal, or accepts everything with `--yes`.
///
/// One buffered reader serves every question of a run, so answers piped in
/// ahead of time are consumed in order.
pub struct TerminalConfirm<R = BufReader<Stdin>, W = Stdout> {
    assume_yes: bool,
    io: Mutex<(R, W)>,
}

impl TerminalConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self::with_io(
            assume_yes,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        )
    }
}

impl<R, W> TerminalConfirm<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn with_io(assume_yes: bool, input: R, output: W) -> Self {
        Self {
            assume_yes,
            io: Mutex::new((input, output)),
        }
    }

    #[cfg(test)]
    pub fn into_io(self) -> (R, W) {
        self.io.into_inner()
    }
}

async fn say<W: AsyncWrite + Unpin>(output: &mut W, text: &str) {
    let written = match output.write_all(text.as_bytes()).await {
        Ok(()) => output.flush().await,
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        debug!(error = %e, "Failed to write prompt");
    }
}

#[async_trait]
impl<R, W> ConfirmationPort for TerminalConfirm<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn open_modal(&self, options: ModalOptions) -> ModalResponse {
        let mut io = self.io.lock().await;
        let (input, output) = &mut *io;

        say(output, &format!("{}: {}\n", options.title, options.body)).await;

        if !options.is_question() {
            return ModalResponse::accepted();
        }
        if self.assume_yes {
            debug!(title = %options.title, "Accepted by --yes");
            return ModalResponse::accepted();
        }

        let accept = options.accept.as_deref().unwrap_or("Yes");
        let decline = options.decline.as_deref().unwrap_or("No");
        say(output, &format!("[{}/{}] ", accept, decline)).await;

        let mut line = String::new();
        match input.read_line(&mut line).await {
            Ok(0) => ModalResponse::declined(),
            Err(e) => {
                debug!(error = %e, "Failed to read answer");
                ModalResponse::declined()
            }
            Ok(_) => ModalResponse {
                accept: is_affirmative(line.trim(), accept),
            },
        }
    }

    fn close_modal(&self) {}
}

/// `y`, `yes` or the accept label itself, ignoring case
pub fn is_affirmative(answer: &str, accept: &str) -> bool {
    ["y", "yes", accept]
        .iter()
        .any(|candidate| answer.eq_ignore_ascii_case(candidate))
}
