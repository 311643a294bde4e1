//! Line-oriented TCP front end for the reference queries
//!
//! Each connection gets a banner and the option list, then answers one option
//! number per line with `Output #n: <result>` until the client sends `quit` or
//! closes the connection.

use crate::config::ServerConfig;
use crate::graph::{GraphResult, RailNetwork};
use crate::menu::MenuOption;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

const RULE: &str = "----------------------------------------------------------------";
const PROMPT: &str = "Choose your option: ";

/// Longest input line accepted, newline included
pub const MAX_LINE: usize = 64;

/// Characters of rejected input echoed back to the client
const ECHO_LIMIT: usize = 16;

/// Pause after a failed accept before trying again
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Bind the configured address and serve until the task is cancelled
pub async fn serve(config: &ServerConfig, network: Arc<RailNetwork>) -> GraphResult<()> {
    let listener = TcpListener::bind(config.addr).await?;
    info!(addr = %listener.local_addr()?, "server listening");
    serve_listener(listener, network).await
}

/// Accept connections on an already bound listener
///
/// Failed accepts (aborted handshakes, descriptor exhaustion) are logged and
/// the loop keeps serving.
pub async fn serve_listener(listener: TcpListener, network: Arc<RailNetwork>) -> GraphResult<()> {
    loop {
        if !dispatch(listener.accept().await, &network) {
            tokio::time::sleep(ACCEPT_BACKOFF).await;
        }
    }
}

/// Start a session for an accepted connection; false when the accept failed
fn dispatch(accepted: std::io::Result<(TcpStream, SocketAddr)>, network: &Arc<RailNetwork>) -> bool {
    let (stream, peer) = match accepted {
        Ok(connection) => connection,
        Err(e) => {
            warn!(error = %e, "failed to accept connection");
            return false;
        }
    };

    let network = Arc::clone(network);
    info!(%peer, "client connected");
    tokio::spawn(async move {
        let (read_half, write_half) = stream.into_split();
        let reader = BufReader::new(read_half);
        match handle_session(reader, write_half, &network).await {
            Ok(answered) => info!(%peer, answered, "client disconnected"),
            Err(e) => warn!(%peer, error = %e, "session ended with error"),
        }
    });
    true
}

/// Reply to one input line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    /// A menu option was run
    Answered(String),
    /// The input was not a menu option
    Unknown(String),
    /// The option ran but the query failed
    Failed(String),
}

impl Reply {
    fn text(&self) -> &str {
        match self {
            Reply::Answered(text) | Reply::Unknown(text) | Reply::Failed(text) => text,
        }
    }

    fn is_answer(&self) -> bool {
        matches!(self, Reply::Answered(_))
    }
}

/// Run one interactive session; returns the number of options answered
///
/// A line longer than [`MAX_LINE`] ends the session without being echoed.
pub async fn handle_session<R, W>(
    mut reader: R,
    mut writer: W,
    network: &RailNetwork,
) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(banner().as_bytes()).await?;
    writer.write_all(PROMPT.as_bytes()).await?;
    writer.flush().await?;

    let mut answered = 0;
    let mut line = String::new();
    loop {
        line.clear();
        let read = (&mut reader).take(MAX_LINE as u64).read_line(&mut line).await?;
        if read == 0 {
            break;
        }
        if read >= MAX_LINE && !line.ends_with('\n') {
            warn!(limit = MAX_LINE, "input line too long, closing session");
            writer
                .write_all(format!("\nLine too long (limit {MAX_LINE} bytes)\n").as_bytes())
                .await?;
            writer.flush().await?;
            return Ok(answered);
        }

        let input = line.trim();
        debug!(input, "received option");

        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }
        if !input.is_empty() {
            let reply = answer(input, network);
            if reply.is_answer() {
                answered += 1;
            }
            writer.write_all(reply.text().as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;
    }

    writer
        .write_all(format!("\n{RULE}\n Thanks for using our service!\n{RULE}\n").as_bytes())
        .await?;
    writer.flush().await?;
    Ok(answered)
}

fn banner() -> String {
    let mut text = format!("{RULE}\n Welcome to the railnet route service\n{RULE}\n");
    for option in MenuOption::ALL {
        text.push_str(&option.to_string());
        text.push('\n');
    }
    text.push_str("[quit] - close the session\n");
    text
}

/// Render the reply for one input line
fn answer(input: &str, network: &RailNetwork) -> Reply {
    let Some(option) = input.parse::<u8>().ok().and_then(MenuOption::from_number) else {
        let mut shown: String = input.chars().take(ECHO_LIMIT).collect();
        if shown.len() < input.len() {
            shown.push_str("...");
        }
        return Reply::Unknown(format!("Unknown option: {shown}"));
    };

    match option.run(network) {
        Ok(outcome) => {
            info!(option = option.number(), %outcome, "answered option");
            Reply::Answered(format!("Output #{}: {}", option.number(), outcome))
        }
        Err(e) => {
            warn!(option = option.number(), error = %e, "option failed");
            Reply::Failed(format!("Error #{}: {}", option.number(), e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::test_support::canonical_network;

    #[test]
    fn test_answer_known_option() {
        let network = canonical_network();
        assert_eq!(answer("1", &network), Reply::Answered("Output #1: 9".to_string()));
        assert_eq!(
            answer("5", &network),
            Reply::Answered("Output #5: NO SUCH ROUTE".to_string())
        );
    }

    #[test]
    fn test_answer_unknown_option() {
        let network = canonical_network();
        assert_eq!(answer("42", &network), Reply::Unknown("Unknown option: 42".to_string()));
        assert!(!answer("abc", &network).is_answer());
    }

    #[test]
    fn test_unknown_option_echo_is_truncated() {
        let network = canonical_network();
        let reply = answer(&"x".repeat(50), &network);

        assert_eq!(reply.text(), format!("Unknown option: {}...", "x".repeat(ECHO_LIMIT)));
    }

    #[test]
    fn test_answer_reports_query_errors() {
        let network = RailNetwork::new();
        let reply = answer("6", &network);

        assert!(matches!(reply, Reply::Failed(_)));
        assert!(reply.text().starts_with("Error #6: Invalid argument"));
    }

    #[test]
    fn test_banner_lists_every_option() {
        let text = banner();
        for option in MenuOption::ALL {
            assert!(text.contains(&option.to_string()));
        }
    }

    #[tokio::test]
    async fn test_session_over_in_memory_stream() {
        let network = canonical_network();
        let input: &[u8] = b"9\n\nbogus\n10\nquit\n";
        let mut output = Vec::new();

        let answered = handle_session(input, &mut output, &network).await.unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(answered, 2);
        assert!(text.contains("Output #9: 9"));
        assert!(text.contains("Unknown option: bogus"));
        assert!(text.contains("Output #10: 7"));
        assert!(text.ends_with(&format!("{RULE}\n")));
    }

    #[tokio::test]
    async fn test_oversized_line_ends_session_with_bounded_output() {
        let network = canonical_network();
        let mut input = b"1\n".to_vec();
        input.extend(std::iter::repeat(b'7').take(1 << 20));
        input.extend_from_slice(b"\n2\n");
        let mut output = Vec::new();

        let answered = handle_session(&input[..], &mut output, &network).await.unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(answered, 1);
        assert!(text.contains("Output #1: 9"));
        assert!(text.contains("Line too long"));
        assert!(!text.contains("Output #2"));
        assert!(text.len() < banner().len() + 256);
    }

    #[tokio::test]
    async fn test_failed_accept_keeps_serving() {
        let network = Arc::new(canonical_network());
        let aborted = std::io::Error::from(std::io::ErrorKind::ConnectionAborted);

        assert!(!dispatch(Err(aborted), &network));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let client = tokio::spawn(async move { TcpStream::connect(addr).await.unwrap() });
        let accepted = listener.accept().await;
        let _client = client.await.unwrap();

        assert!(dispatch(accepted, &network));
    }
}
