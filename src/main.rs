use clap::{builder::NonEmptyStringValueParser, builder::PossibleValue, Parser, ValueEnum};
use log::{debug, error};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::any::Any;
use std::io::{self, BufWriter};
use std::{panic, process};

use hello_info::*;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogTarget {
    Stderr,
    Stdout,
}

impl From<LogTarget> for TerminalMode {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Stderr => TerminalMode::Stderr,
            LogTarget::Stdout => TerminalMode::Stdout,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct LevelFilterArg(LevelFilter);

impl ValueEnum for LevelFilterArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self(LevelFilter::Off),
            Self(LevelFilter::Error),
            Self(LevelFilter::Warn),
            Self(LevelFilter::Info),
            Self(LevelFilter::Debug),
            Self(LevelFilter::Trace),
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self.0 {
            LevelFilter::Off => Some(PossibleValue::new("OFF")),
            LevelFilter::Error => Some(PossibleValue::new("ERROR")),
            LevelFilter::Warn => Some(PossibleValue::new("WARN")),
            LevelFilter::Info => Some(PossibleValue::new("INFO")),
            LevelFilter::Debug => Some(PossibleValue::new("DEBUG")),
            LevelFilter::Trace => Some(PossibleValue::new("TRACE")),
        }
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    max_term_width = 100,
    about = "A script that says hello.",
    help_template = "\
{before-help}{name}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
struct Opt {
    /// the name to say hello
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    name: String,
    /// The age of the person
    #[arg(short, long, allow_negative_numbers = true)]
    age: i64,
    /// Set where to log (stderr or stdout). Defaults to 'stderr'.
    #[arg(long, value_name = "LOG", default_value = "stderr", value_enum)]
    log: LogTarget,
    /// Set the log level.
    #[arg(long, value_name = "LEVEL", default_value = "ERROR", value_enum)]
    log_level: LevelFilterArg,
}

fn panic_cause(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("<cause unknown>")
}

fn main() {
    let opt = Opt::parse();

    let _ = TermLogger::init(
        opt.log_level.0,
        Config::default(),
        opt.log.into(),
        ColorChoice::Auto,
    );

    panic::set_hook(Box::new(|panic_info| {
        let (filename, line) = panic_info
            .location()
            .map(|loc| (loc.file(), loc.line()))
            .unwrap_or(("<unknown>", 0));
        error!(
            "A panic occurred at {}:{}: {}",
            filename,
            line,
            panic_cause(panic_info.payload())
        );
    }));

    let record = PersonRecord::new(opt.name, opt.age);
    debug!("Collected {:?}", record);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    if let Err(e) = output_report(&mut writer, &record) {
        error!("Unable to write the report: {}", e);
        process::exit(1);
    }
}
