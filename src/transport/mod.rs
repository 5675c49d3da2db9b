//! Wire abstraction over one side of a connection. The server is
//! full-duplex — the read loop and the outbound writer task run
//! independently — so the seam is split into a reader half and a writer
//! half rather than one duplex transport.

#[async_trait::async_trait]
pub trait WireReader: Send {
    /// Next inbound line, without its newline. `Ok(None)` means the peer
    /// closed the connection cleanly.
    async fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

#[async_trait::async_trait]
pub trait WireWriter: Send {
    /// Write one line; the newline is appended here.
    async fn send_line(&mut self, line: &str) -> anyhow::Result<()>;
}

pub mod in_memory;
pub mod tcp;
