use clap::Parser;
use ip_binary::output::{build_report, render_report};
use ip_binary::IpAddress;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::PathBuf;

/// Show what an IP address is: its forms, reserved blocks and CIDR network.
#[derive(Parser, Debug)]
#[command(name = "ipinfo", version, about)]
struct Args {
    /// Address in dotted-decimal or colon-hex notation.
    address: String,

    /// Prefix length for network/broadcast and range checks.
    #[arg(short, long, allow_negative_numbers = true)]
    cidr: Option<i32>,

    /// Second address to compare against.
    #[arg(short, long)]
    other: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// log4rs YAML configuration, replaces the default stderr logger.
    #[arg(long)]
    log_config: Option<PathBuf>,
}

fn init_logging(args: &Args) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &args.log_config {
        log4rs::init_file(path, Default::default())?;
        return Ok(());
    }
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    init_logging(&args)?;
    log::debug!("#Start main() {:?}", args);

    let address = IpAddress::parse(&args.address)?;
    let other = args.other.as_deref().map(IpAddress::parse).transpose()?;
    let report = build_report(&address, args.cidr, other.as_ref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in render_report(&report) {
            println!("{line}");
        }
    }
    Ok(())
}
