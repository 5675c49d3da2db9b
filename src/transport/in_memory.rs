use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::transport::{WireReader, WireWriter};

/// Queue-backed wire endpoint pair for tests. Each queue has exactly two
/// handles, its reader and its writer; a reader that finds its queue empty
/// with the writer gone reports EOF, like a closed socket.
pub struct InMemoryWireReader {
    queue: Arc<Mutex<VecDeque<String>>>,
}

pub struct InMemoryWireWriter {
    queue: Arc<Mutex<VecDeque<String>>>,
}

/// Two connected line pipes: what one side's writer sends, the other
/// side's reader receives.
pub fn pair() -> (
    (InMemoryWireReader, InMemoryWireWriter),
    (InMemoryWireReader, InMemoryWireWriter),
) {
    let q1 = Arc::new(Mutex::new(VecDeque::new()));
    let q2 = Arc::new(Mutex::new(VecDeque::new()));
    (
        (
            InMemoryWireReader { queue: q1.clone() },
            InMemoryWireWriter { queue: q2.clone() },
        ),
        (
            InMemoryWireReader { queue: q2 },
            InMemoryWireWriter { queue: q1 },
        ),
    )
}

#[async_trait::async_trait]
impl WireReader for InMemoryWireReader {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            // Observe the writer's liveness before popping: once the
            // writer is gone nothing more can be pushed, so an empty
            // queue after that observation is a true EOF rather than a
            // race with the writer's final push.
            let writer_gone = Arc::strong_count(&self.queue) == 1;
            if let Some(line) = {
                let mut queue = self.queue.lock().unwrap();
                queue.pop_front()
            } {
                return Ok(Some(line));
            }
            if writer_gone {
                return Ok(None);
            }
            yield_now().await;
        }
    }
}

#[async_trait::async_trait]
impl WireWriter for InMemoryWireWriter {
    async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        if Arc::strong_count(&self.queue) == 1 {
            return Err(anyhow::anyhow!("channel closed"));
        }
        let mut queue = self.queue.lock().unwrap();
        queue.push_back(line.to_string());
        Ok(())
    }
}
