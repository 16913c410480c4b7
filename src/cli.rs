use crate::ErrorString;
use ::clap::{App, Arg, ArgMatches};
use ::std::fmt::Display;
use ::std::path::PathBuf;
use ::std::str::FromStr;
use ::std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub device: PathBuf,
    pub grab: bool,
    pub interval: Duration,
    pub log_level: String,
}

pub fn parse<'a, 'b>(app: App<'a, 'b>) -> Result<Args, ErrorString> {
    from_matches(&configure(app).get_matches())
}

fn configure<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
    app.version("0.1.0")
        .author("Sönke Hahn <soenkehahn@gmail.com>")
        .about("prints the touch contacts of a multi-touch device")
        .arg(
            Arg::with_name("device")
                .long("device")
                .value_name("PATH")
                .help("input device to read from (default: /dev/input/event1)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("grab")
                .long("grab")
                .help("grabs the device, so no other client receives its events (default: false)")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("interval")
                .long("interval")
                .value_name("MS")
                .help("polling interval in milliseconds (default: 10)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("log level, overridden by RUST_LOG (default: info)")
                .takes_value(true),
        )
}

fn from_matches(matches: &ArgMatches) -> Result<Args, ErrorString> {
    let device = PathBuf::from(matches.value_of("device").unwrap_or("/dev/input/event1"));
    let grab = matches.is_present("grab");
    let interval: u64 = parse_with_default(matches.value_of("interval"), 10)?;
    let log_level = matches.value_of("log-level").unwrap_or("info").to_string();
    Ok(Args {
        device,
        grab,
        interval: Duration::from_millis(interval),
        log_level,
    })
}

fn parse_with_default<N>(input: Option<&str>, default: N) -> Result<N, ErrorString>
where
    N: FromStr,
    <N as FromStr>::Err: Display,
{
    match input {
        None => Ok(default),
        Some(string) => string
            .parse()
            .map_err(|e| ErrorString::from(format!("{}: {}", string, e))),
    }
}
