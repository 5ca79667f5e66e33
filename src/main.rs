// SPDX-License-Identifier: MPL-2.0
use iced_showreel::app::{self, Flags};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: iced_showreel [--config PATH] [--paused] [--unmuted] <media>...

Options:
  --config PATH   Read settings from PATH instead of the default location
  --paused        Do not autoplay videos
  --unmuted       Start videos with sound
  -h, --help      Show this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let config_path: Option<PathBuf> = args.opt_value_from_os_str("--config", |s| {
        Ok::<_, std::convert::Infallible>(PathBuf::from(s))
    })?;
    let paused = args.contains("--paused");
    let unmuted = args.contains("--unmuted");
    let media = args.finish().into_iter().map(PathBuf::from).collect();

    Ok(Some(Flags {
        config_path,
        paused,
        unmuted,
        media,
    }))
}

fn main() -> iced::Result {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_showreel=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            error!(error = %err, "invalid arguments");
            eprint!("{USAGE}");
            std::process::exit(2);
        }
    };

    info!(sources = flags.media.len(), "launching");
    app::run(flags)
}
