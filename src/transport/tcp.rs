use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

use crate::transport::{WireReader, WireWriter};

/// Buffered line reader over the inbound half of a TCP stream.
pub struct TcpWireReader {
    lines: Lines<BufReader<OwnedReadHalf>>,
}

/// Writer over the outbound half of a TCP stream.
pub struct TcpWireWriter {
    half: OwnedWriteHalf,
}

/// Split a freshly accepted stream into its two wire halves.
pub fn split(stream: TcpStream) -> (TcpWireReader, TcpWireWriter) {
    let (read, write) = stream.into_split();
    (
        TcpWireReader {
            lines: BufReader::new(read).lines(),
        },
        TcpWireWriter { half: write },
    )
}

#[async_trait::async_trait]
impl WireReader for TcpWireReader {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        self.lines.next_line().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::ConnectionReset {
                anyhow::anyhow!("connection reset by peer")
            } else {
                anyhow::anyhow!("read error: {}", e)
            }
        })
    }
}

#[async_trait::async_trait]
impl WireWriter for TcpWireWriter {
    async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        let write_op = async {
            self.half.write_all(line.as_bytes()).await?;
            self.half.write_all(b"\n").await?;
            self.half.flush().await
        };
        write_op.await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::BrokenPipe
                || e.kind() == std::io::ErrorKind::ConnectionReset
            {
                anyhow::anyhow!("connection closed by peer")
            } else {
                anyhow::anyhow!("write error: {}", e)
            }
        })
    }
}
