//! Pairs incoming connections into matches: first arrival of each pair
//! takes purple and the first turn, the second takes yellow.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::info;
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::watch;

use crate::channel::{PlayerChannel, Seat};
use crate::common::Mark;
use crate::engine::MatchEngine;
use crate::protocol::Event;
use crate::transport::tcp::{self, TcpWireReader};
use crate::transport::WireReader;

pub struct MatchDirector {
    listener: TcpListener,
    idle_timeout: Option<Duration>,
}

impl MatchDirector {
    /// Bind the listening socket. `idle_timeout` of `None` reproduces the
    /// reference behavior of never timing out a silent peer.
    pub async fn bind<A: ToSocketAddrs>(
        addr: A,
        idle_timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            idle_timeout,
        })
    }

    /// Actual bound address, for callers that bound port 0.
    pub fn local_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever, two at a time in arrival order. Each
    /// pair becomes one independent match running on its own tasks; no
    /// state is shared across matches and there is no cap on how many run
    /// at once.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let first = self.accept_seat(Mark::Purple).await?;
            let second = self.accept_seat(Mark::Yellow).await?;
            start_match(first, second, self.idle_timeout);
        }
    }

    async fn accept_seat(&self, mark: Mark) -> anyhow::Result<Seat<TcpWireReader>> {
        let (stream, addr) = self.listener.accept().await?;
        info!("player {} connected from {}", mark, addr);
        let (reader, writer) = tcp::split(stream);
        Ok(Seat::new(mark, reader, writer))
    }
}

/// Wire two greeted seats into one match and set both read loops running.
/// The engine is shared by exactly these two channels and dropped once
/// both have torn down.
pub fn start_match<R1, R2>(first: Seat<R1>, second: Seat<R2>, idle_timeout: Option<Duration>)
where
    R1: WireReader + 'static,
    R2: WireReader + 'static,
{
    info!("pairing players {} and {}", first.mark, second.mark);
    let engine = Arc::new(Mutex::new(MatchEngine::new()));

    let _ = first
        .events
        .send(Event::Message("All Players Ready for Battle".into()));
    let _ = second
        .events
        .send(Event::Message("All Players Ready for Battle".into()));
    let _ = first.events.send(Event::Message("Your move".into()));

    let (first_shutdown_tx, first_shutdown_rx) = watch::channel(false);
    let (second_shutdown_tx, second_shutdown_rx) = watch::channel(false);

    let purple = PlayerChannel::new(
        first.mark,
        engine.clone(),
        first.events.clone(),
        second.events.clone(),
        first_shutdown_rx,
        second_shutdown_tx,
        first.reader,
        idle_timeout,
    );
    let yellow = PlayerChannel::new(
        second.mark,
        engine,
        second.events,
        first.events,
        second_shutdown_rx,
        first_shutdown_tx,
        second.reader,
        idle_timeout,
    );

    tokio::spawn(purple.run());
    tokio::spawn(yellow.run());
}
