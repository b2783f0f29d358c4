use dnsnative_application::use_cases::HandleHostCommandUseCase;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

const BANG_COMMAND: &str = "!host";
const BARE_COMMAND: &str = "host";

/// Drops a leading `!host` / `host` word so chat-style lines and bare
/// argument lists are both accepted. Blank lines yield `None`.
///
/// `!host` alone is the empty command (help). A lone `host` is kept as the
/// name to look up.
pub fn strip_command_prefix(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) if first == BANG_COMMAND || first == BARE_COMMAND => Some(rest),
        None if trimmed == BANG_COMMAND => Some(""),
        _ => Some(trimmed),
    }
}

/// Answers one `host` command per input line until EOF, replies in order.
///
/// Lines that are not valid UTF-8 are decoded lossily and still answered.
pub async fn run_console<R, W>(
    use_case: Arc<HandleHostCommandUseCase>,
    mut input: R,
    mut output: W,
) -> std::io::Result<u64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Reading host commands from input");

    let mut buf = Vec::new();
    let mut handled = 0u64;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!(bytes = buf.len(), "Input line is not valid UTF-8, decoding lossily");
        }

        let Some(args) = strip_command_prefix(&line) else {
            continue;
        };

        debug!(args = %args, "Handling host command");
        for reply in use_case.execute(args).await {
            output.write_all(reply.as_bytes()).await?;
            output.write_all(b"\n").await?;
        }
        output.flush().await?;
        handled += 1;
    }

    info!(handled, "Input closed");
    Ok(handled)
}
