use aisfield::stream;
use clap::{Arg, Command};
use std::io::BufRead;

fn cli() -> Command {
    Command::new("aisfield")
        .about("Decode AIS sentences into per-field summaries")
        .arg(
            Arg::new("file")
                .long("file")
                .value_name("PATH")
                .help("Read sentences from a file instead of stdin"),
        )
        .arg(
            Arg::new("tcp")
                .long("tcp")
                .value_name("ADDR")
                .help("Connect to a TCP feed (host:port)"),
        )
        .arg(
            Arg::new("udp")
                .long("udp")
                .value_name("ADDR")
                .help("Bind a UDP feed (host:port)"),
        )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    if let Some(path) = matches.get_one::<String>("file") {
        return stream::decode_from_file(path).await;
    }
    if let Some(address) = matches.get_one::<String>("tcp") {
        return stream::decode_from_tcp(address).await;
    }
    if let Some(address) = matches.get_one::<String>("udp") {
        return stream::decode_from_udp(address).await;
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().split(b'\n') {
        let line = line?;
        match stream::summarize(&line) {
            Ok(summary) => println!("{}", summary),
            Err(status) => eprintln!("{}\t{}", String::from_utf8_lossy(&line), status),
        }
    }
    Ok(())
}
