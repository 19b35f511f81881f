//! Line-oriented helpers for decoding AIS feeds from files and sockets.

use crate::errors::Status;
use crate::fields::Payload;
use crate::sentence;
use std::error::Error as StdError;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{TcpStream, UdpSocket};

/// Renders the usable fields of one sentence on a single line.
///
/// Always shows the message type and MMSI; position, speed, course, name
/// and callsign follow whenever their status permits.
pub fn summarize(line: &[u8]) -> Result<String, Status> {
    let payload = sentence::extract_payload(line)?;
    let payload = Payload::new(payload);
    let msg_id = payload.msg_id();
    if msg_id.status.is_error() {
        return Err(msg_id.status);
    }
    let mut out = format!("type {:>2}  mmsi {:>9}", msg_id.value, payload.mmsi().value);
    let lat = payload.latitude();
    let lon = payload.longitude();
    if lat.usable() && lon.usable() {
        out.push_str(&format!("  pos ({:.5}, {:.5})", lat.value, lon.value));
    }
    let sog = payload.speed_over_ground();
    if sog.usable() {
        out.push_str(&format!("  sog {:.1}", sog.value));
    }
    let cog = payload.course_over_ground();
    if cog.usable() {
        out.push_str(&format!("  cog {:.1}", cog.value));
    }
    let name = payload.ship_name();
    if name.usable() {
        out.push_str(&format!("  name {}", name.value));
    }
    let callsign = payload.callsign();
    if callsign.usable() {
        out.push_str(&format!("  callsign {}", callsign.value));
    }
    Ok(out)
}

async fn decode_line(line: &[u8]) {
    match summarize(line) {
        Ok(summary) => println!("{}", summary),
        Err(status) => eprintln!("{}\t{}", String::from_utf8_lossy(line), status),
    }
}

/// Binds `address` and decodes incoming UDP datagrams forever.
pub async fn decode_from_udp(address: &str) -> Result<(), Box<dyn StdError>> {
    let socket = UdpSocket::bind(address).await?;
    let mut buf = [0; 1024];

    loop {
        let (len, _) = socket.recv_from(&mut buf).await?;
        decode_line(&buf[..len]).await;
    }
}

/// Connects to `address` and decodes lines until the peer closes.
pub async fn decode_from_tcp(address: &str) -> Result<(), Box<dyn StdError>> {
    let stream = TcpStream::connect(address).await?;
    let mut reader = BufReader::new(stream);
    let mut line = Vec::new();

    while reader.read_until(b'\n', &mut line).await? != 0 {
        while line.last().is_some_and(|&b| b == b'\n' || b == b'\r') {
            line.pop();
        }
        decode_line(&line).await;
        line.clear();
    }

    Ok(())
}

/// Decodes a file of AIS sentences, one per line.
pub async fn decode_from_file(path: &str) -> Result<(), Box<dyn StdError>> {
    let file = File::open(path).await?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        decode_line(line.as_bytes()).await;
    }

    Ok(())
}
