//! Per-connection plumbing: one read loop and one outbound writer task
//! per player. The read loop decodes commands, calls into the shared
//! match engine, and fans resulting events out to the per-connection
//! queues; it never performs socket I/O while holding the engine lock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::common::{Mark, MatchStatus};
use crate::engine::MatchEngine;
use crate::protocol::{self, Command, Event};
use crate::transport::{WireReader, WireWriter};

/// One accepted connection, greeted but not yet playing: its mark, its
/// inbound wire half and the sender side of its outbound event queue. The
/// writer task draining that queue is already running, so the welcome
/// lines reach the client while the opponent is still being awaited.
pub struct Seat<R> {
    pub mark: Mark,
    pub(crate) reader: R,
    pub(crate) events: UnboundedSender<Event>,
}

impl<R: WireReader> Seat<R> {
    /// Take ownership of a connection's wire halves, start its writer
    /// task and send the greeting the reference server sends at accept
    /// time.
    pub fn new<W: WireWriter + 'static>(mark: Mark, reader: R, writer: W) -> Self {
        let (events, queue) = mpsc::unbounded_channel();
        spawn_writer(writer, queue);
        let _ = events.send(Event::Welcome(mark));
        let _ = events.send(Event::Message(
            "Hold on while we find you an opponent!".into(),
        ));
        Seat {
            mark,
            reader,
            events,
        }
    }
}

/// Drain one connection's event queue onto its socket. Exits when every
/// sender is gone (both channels have torn down) or the peer stops
/// accepting writes.
pub(crate) fn spawn_writer<W: WireWriter + 'static>(
    mut writer: W,
    mut queue: UnboundedReceiver<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = queue.recv().await {
            if let Err(e) = writer.send_line(&event.to_string()).await {
                debug!("writer task stopping: {}", e);
                break;
            }
        }
    })
}

/// The read loop for one bound player. Holds the shared engine, its own
/// and the opponent's outbound queues, and the opponent's shutdown flag;
/// the engine itself never sees a socket.
pub struct PlayerChannel<R> {
    mark: Mark,
    engine: Arc<Mutex<MatchEngine>>,
    events: UnboundedSender<Event>,
    opponent: UnboundedSender<Event>,
    shutdown: watch::Receiver<bool>,
    shutdown_opponent: watch::Sender<bool>,
    reader: R,
    idle_timeout: Option<Duration>,
}

impl<R: WireReader> PlayerChannel<R> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mark: Mark,
        engine: Arc<Mutex<MatchEngine>>,
        events: UnboundedSender<Event>,
        opponent: UnboundedSender<Event>,
        shutdown: watch::Receiver<bool>,
        shutdown_opponent: watch::Sender<bool>,
        reader: R,
        idle_timeout: Option<Duration>,
    ) -> Self {
        Self {
            mark,
            engine,
            events,
            opponent,
            shutdown,
            shutdown_opponent,
            reader,
            idle_timeout,
        }
    }

    /// Read commands until the connection ends, the peer abandons the
    /// match, or the client quits. Dropping the channel closes the read
    /// half; the writer task follows once the queues drain.
    pub async fn run(mut self) {
        loop {
            let line = tokio::select! {
                _ = self.shutdown.changed() => {
                    debug!("player {}: match torn down by peer", self.mark);
                    return;
                }
                read = next_line(&mut self.reader, self.idle_timeout) => match read {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        info!("player {} disconnected", self.mark);
                        break;
                    }
                    Err(e) => {
                        info!("player {} connection lost: {}", self.mark, e);
                        break;
                    }
                },
            };

            match protocol::decode(&line) {
                Ok(Command::Move { column, .. }) => self.handle_move(column),
                Ok(Command::MouseMove { x, y }) => self.handle_mouse(x, y),
                Ok(Command::Quit) => {
                    info!("player {} quit", self.mark);
                    break;
                }
                Err(e) => {
                    warn!("player {}: {}: {:?}", self.mark, e, line);
                    let _ = self.events.send(Event::Message("?".into()));
                }
            }
        }
        self.teardown();
    }

    /// Submit a drop to the engine and notify both sides from the
    /// returned snapshot. The row the client sent is ignored; only the
    /// engine knows where the chip lands.
    fn handle_move(&self, column: i32) {
        let result = {
            let mut engine = self.engine.lock().unwrap();
            let result = engine.submit_move(self.mark, column);
            if let Ok(res) = &result {
                debug!(
                    "player {} dropped into column {}, landed in row {}\n{}",
                    self.mark,
                    res.column,
                    res.row,
                    engine.board()
                );
            }
            result
        };
        match result {
            Ok(res) => {
                let _ = self.events.send(Event::ValidMove);
                let _ = self.events.send(mover_epilogue(res.status));
                let _ = self.opponent.send(Event::OpponentMoved {
                    row: res.row,
                    column: res.column,
                });
                let _ = self.opponent.send(opponent_epilogue(res.status));
                if res.status.is_terminal() {
                    info!("match over: {:?}", res.status);
                }
            }
            Err(e) => {
                debug!("player {} move rejected: {}", self.mark, e);
                let _ = self.events.send(Event::Message("Wait Your Turn!".into()));
            }
        }
    }

    fn handle_mouse(&self, x: i32, y: i32) {
        let relay = self.engine.lock().unwrap().relay_cursor(self.mark, x, y);
        let _ = self.opponent.send(Event::OpponentMouse {
            x: relay.x,
            y: relay.y,
        });
    }

    /// This side's connection is done for a local reason (quit, EOF, read
    /// error or idle timeout): record the disconnect, tell the opponent
    /// and signal their channel to close.
    fn teardown(&self) {
        let outcome = self.engine.lock().unwrap().disconnect(self.mark);
        debug!(
            "player {} gone, notifying {} and closing their connection",
            self.mark, outcome.notify
        );
        let _ = self
            .opponent
            .send(Event::Disconnect("Your opponent disconnected.".into()));
        let _ = self.shutdown_opponent.send(true);
    }
}

/// The status line sent to the mover right after `VALID_MOVE`.
fn mover_epilogue(status: MatchStatus) -> Event {
    match status {
        MatchStatus::Won(_) => Event::Victory,
        MatchStatus::Tied => Event::Tie,
        _ => Event::Continue,
    }
}

/// The status line sent to the opponent right after `OPPONENT_MOVED`.
fn opponent_epilogue(status: MatchStatus) -> Event {
    match status {
        MatchStatus::Won(_) => Event::Defeat,
        MatchStatus::Tied => Event::Tie,
        _ => Event::Continue,
    }
}

/// One blocking read, bounded by the configured idle timeout when there
/// is one. The default is no timeout: a silent peer stalls its opponent
/// indefinitely, as in the reference server.
async fn next_line<R: WireReader>(
    reader: &mut R,
    idle_timeout: Option<Duration>,
) -> anyhow::Result<Option<String>> {
    match idle_timeout {
        Some(limit) => match timeout(limit, reader.next_line()).await {
            Ok(read) => read,
            Err(_) => Err(anyhow::anyhow!("no input for {:?}", limit)),
        },
        None => reader.next_line().await,
    }
}
