// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Control socket: accept loop and controller session.
//!
//! The station serves exactly one controller at a time:
//! - `Listening`: the next accepted connection becomes the controller
//! - `Established`: further connections are accepted and closed at once
//! - `Finished`: the session task saw EOF or an error; the accept loop drops
//!   the controller on its next pass and goes back to `Listening`
//!
//! The accept loop wakes at least every `poll_interval` so that recycling and
//! shutdown are noticed promptly. The session task owns the socket; the
//! station lock is never held while reading from or writing to it.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use sdrrc_core::{Reply, StationStatus};

use crate::dispatch::dispatch_line;
use crate::error::Result;
use crate::state::{Station, StationRuntime};

/// Longest line kept from a controller, newline included. Excess bytes of a
/// longer line are discarded.
pub const LINE_BUFFER_SIZE: usize = 192;

/// Pending-connection backlog of the listening socket.
const LISTEN_BACKLOG: u32 = 16;

/// Bind the control socket on all IPv4 interfaces.
pub fn bind(port: u16) -> Result<TcpListener> {
    bind_addr(SocketAddr::from(([0, 0, 0, 0], port)))
}

/// Bind the control socket on a specific address.
pub fn bind_addr(addr: SocketAddr) -> Result<TcpListener> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;
    Ok(socket.listen(LISTEN_BACKLOG)?)
}

/// Run the accept loop until `shutdown` is cancelled.
pub async fn run(
    listener: TcpListener,
    runtime: StationRuntime,
    poll_interval: Duration,
    shutdown: CancellationToken,
) -> Result<()> {
    runtime.lock().await.set_status(StationStatus::Listening);
    info!("Listening on: tcp/{}", listener.local_addr()?);

    while !shutdown.is_cancelled() {
        if let Some(mut station) = runtime.try_lock() {
            recycle(&mut station);
        }

        tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => admit(&runtime, stream, peer).await,
                Err(e) => warn!("failed to accept connection: {}", e),
            },
            _ = tokio::time::sleep(poll_interval) => {}
        }
    }

    info!("accept loop stopped");
    Ok(())
}

/// Close a finished controller session and reopen the slot.
fn recycle(station: &mut Station) {
    if station.status != StationStatus::Finished {
        return;
    }
    if let Some(peer) = station.controller.take() {
        info!("Closing controller connection {}", peer);
    }
    station.set_status(StationStatus::Listening);
}

/// Attach a new connection as the controller, or turn it away.
async fn admit(runtime: &StationRuntime, stream: TcpStream, peer: SocketAddr) {
    let mut station = runtime.lock().await;
    recycle(&mut station);

    if station.status != StationStatus::Listening {
        warn!(
            "Already got a controller. Dropping incoming connection from {}",
            peer
        );
        drop(stream);
        return;
    }

    info!("New controller connection from: {}", peer);
    station.controller = Some(peer);
    station.set_status(StationStatus::Established);
    drop(station);

    let (reader, writer) = stream.into_split();
    let runtime = runtime.clone();
    tokio::spawn(async move {
        serve_controller(reader, writer, peer, runtime).await;
    });
}

/// Read and execute controller lines until the connection goes away.
async fn serve_controller(
    reader: OwnedReadHalf,
    mut writer: OwnedWriteHalf,
    peer: SocketAddr,
    runtime: StationRuntime,
) {
    let mut reader = BufReader::new(reader);

    while runtime.status().await == StationStatus::Established {
        match read_line(&mut reader, LINE_BUFFER_SIZE).await {
            Ok(Some(bytes)) => {
                let line = String::from_utf8_lossy(&bytes);
                let replies = dispatch_line(&runtime, line.trim()).await;
                if let Err(e) = write_replies(&mut writer, &replies).await {
                    warn!("failed to send reply to {}: {}", peer, e);
                    break;
                }
            }
            Ok(None) => {
                info!("Controller {} disconnected", peer);
                break;
            }
            Err(e) => {
                warn!("read error from {}: {}", peer, e);
                break;
            }
        }
    }

    runtime.lock().await.set_status(StationStatus::Finished);
}

/// Write reply lines in order and flush them.
pub async fn write_replies<W>(writer: &mut W, replies: &[Reply]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    if replies.is_empty() {
        return Ok(());
    }
    for reply in replies {
        writer.write_all(reply.to_line().as_bytes()).await?;
    }
    writer.flush().await
}

/// Read one newline-terminated line, keeping at most `limit - 1` bytes.
///
/// The rest of an over-long line is consumed and discarded. Returns `None`
/// at end of stream when nothing was read; a final unterminated line is
/// returned as is.
pub async fn read_line<R>(reader: &mut R, limit: usize) -> io::Result<Option<Vec<u8>>>
where
    R: AsyncBufRead + Unpin,
{
    let keep = limit.saturating_sub(1);
    let mut line = Vec::new();
    let mut read_any = false;

    loop {
        let buf = reader.fill_buf().await?;
        if buf.is_empty() {
            return Ok(read_any.then_some(line));
        }
        read_any = true;

        let (used, done) = match buf.iter().position(|&b| b == b'\n') {
            Some(i) => (i + 1, true),
            None => (buf.len(), false),
        };
        let room = keep.saturating_sub(line.len()).min(used);
        line.extend_from_slice(&buf[..room]);
        reader.consume(used);

        if done {
            return Ok(Some(line));
        }
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
