mod cli;

use ::clap::App;
use ::multitouch_decoder::{changes, DecoderError, EventDecoder};
use ::std::fmt::Display;
use ::std::thread;
use ::tracing::info;
use ::tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, PartialEq)]
pub struct ErrorString(pub String);

impl From<String> for ErrorString {
    fn from(error: String) -> Self {
        ErrorString(error)
    }
}

impl From<&str> for ErrorString {
    fn from(error: &str) -> Self {
        ErrorString(error.to_string())
    }
}

impl From<DecoderError> for ErrorString {
    fn from(error: DecoderError) -> Self {
        ErrorString(describe(&error))
    }
}

// includes the chain of sources, e.g. "can't open input device /dev/input/event1: No such file or directory"
fn describe(error: &dyn ::std::error::Error) -> String {
    match error.source() {
        None => error.to_string(),
        Some(source) => format!("{}: {}", error, describe(source)),
    }
}

pub trait AddMessage<T> {
    fn add_message(self, message: String) -> Result<T, ErrorString>;
}

impl<T, E: Display> AddMessage<T> for Result<T, E> {
    fn add_message(self, message: String) -> Result<T, ErrorString> {
        self.map_err(|e| ErrorString(format!("{} ({})", message, e)))
    }
}

fn init_logging(level: &str) -> Result<(), ErrorString> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).add_message(format!("invalid log level: {}", level))?,
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(::std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .add_message("can't install logger".to_string())?;
    Ok(())
}

fn main() -> Result<(), ErrorString> {
    let args = cli::parse(App::new("mt-slots"))?;
    init_logging(&args.log_level)?;
    let mut decoder = EventDecoder::open(&args.device, args.grab)?;
    info!(device = %args.device.display(), "waiting for touches");
    loop {
        if decoder.fetch_events()? {
            for change in changes(decoder.previous_slots_state(), decoder.slots_state()) {
                println!("{}", change);
            }
        }
        thread::sleep(args.interval);
    }
}
