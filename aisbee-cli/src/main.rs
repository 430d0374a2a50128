use std::{
    path::PathBuf,
    pin::Pin,
};

use aisbee_ais::{
    Message,
    Payload,
};
use aisbee_nmea::{
    Reader,
    Reassembler,
};
use clap::{
    Parser,
    Subcommand,
};
use color_eyre::eyre::Error;
use futures_util::{
    StreamExt,
    pin_mut,
};
use tokio::{
    io::AsyncRead,
    net::TcpStream,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let output = Output { json: args.json };

    match args.command {
        Command::Decode {
            payloads,
            fill_bits,
        } => {
            for armored in &payloads {
                match decode(armored, fill_bits) {
                    Ok(message) => output.print(&message)?,
                    Err(error) => tracing::warn!(%armored, %error, "can't decode payload"),
                }
            }
        }
        Command::Sentences { file } => {
            let input: Pin<Box<dyn AsyncRead>> = match &file {
                Some(file) => Box::pin(tokio::fs::File::open(file).await?),
                None => Box::pin(tokio::io::stdin()),
            };
            output.print_sentences(input).await?;
        }
        Command::Listen { address } => {
            let stream = TcpStream::connect(&address).await?;
            tracing::info!(%address, "connected");
            output.print_sentences(stream).await?;
        }
        Command::Reencode {
            payload,
            fill_bits,
        } => {
            let message = decode(&payload, fill_bits)?;
            let (armored, fill_bits) = message.encode()?.to_armored();
            println!("{armored},{fill_bits}");
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
struct Args {
    /// Print messages as JSON
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode armored payloads
    Decode {
        #[clap(required = true)]
        payloads: Vec<String>,

        #[clap(short, long, default_value = "0")]
        fill_bits: u8,
    },
    /// Decode `!AIVDM` sentences from a file
    ///
    /// Reads from stdin if no file is given.
    Sentences { file: Option<PathBuf> },
    /// Connect to a TCP feed of `!AIVDM` sentences
    Listen {
        #[clap(short, long, env = "AISBEE_ADDRESS")]
        address: String,
    },
    /// Decode a payload and encode it again
    Reencode {
        payload: String,

        #[clap(short, long, default_value = "0")]
        fill_bits: u8,
    },
}

fn decode(armored: &str, fill_bits: u8) -> Result<Message, Error> {
    let payload = Payload::from_armored_with_fill_bits(armored, fill_bits)?;
    Ok(Message::decode(&payload)?)
}

#[derive(Clone, Copy, Debug)]
struct Output {
    json: bool,
}

impl Output {
    fn print(&self, message: &Message) -> Result<(), Error> {
        if self.json {
            println!("{}", serde_json::to_string(message)?);
        }
        else {
            println!("{message:#?}");
        }
        Ok(())
    }

    async fn print_sentences<R: AsyncRead>(&self, input: R) -> Result<(), Error> {
        let reader = Reader::new(input);
        pin_mut!(reader);

        let mut reassembler = Reassembler::new();

        while let Some(result) = reader.next().await {
            let payload = match result.and_then(|sentence| reassembler.push(&sentence)) {
                Ok(Some(payload)) => payload,
                Ok(None) => continue,
                Err(aisbee_nmea::Error::Io(error)) => return Err(error.into()),
                Err(error) => {
                    tracing::warn!(%error, "skipping sentence");
                    continue;
                }
            };

            match Message::decode(&payload) {
                Ok(message) => self.print(&message)?,
                Err(error) => tracing::warn!(%error, "can't decode message"),
            }
        }

        Ok(())
    }
}
