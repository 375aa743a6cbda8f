// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::app::{self, Flags};
use iced_lightbox::ui::gallery::InteractionMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedLightbox

USAGE:
  iced_lightbox [OPTIONS] [MANIFEST]

ARGS:
  MANIFEST              Photo manifest (TOML); defaults to collection.toml
                        in the config directory

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --cloud-name <NAME>   CDN account name
  --cdn-host <HOST>     CDN host
  --route <ROUTE>       Starting route (/p/3 or /?photoId=3)
  --photo <INDEX>       Photo to open when the route names none
  --mode <MODE>         loupe | pinch-zoom
  --full                Full-page presentation
  -h, --help            Print help
";

fn parse_mode(value: &str) -> Result<InteractionMode, String> {
    match value {
        "loupe" => Ok(InteractionMode::Loupe),
        "pinch-zoom" => Ok(InteractionMode::PinchZoom),
        other => Err(format!("unknown mode '{other}'")),
    }
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        cloud_name: args.opt_value_from_str("--cloud-name")?,
        cdn_host: args.opt_value_from_str("--cdn-host")?,
        route: args.opt_value_from_str("--route")?,
        photo: args.opt_value_from_str("--photo")?,
        interaction: args.opt_value_from_fn("--mode", parse_mode)?,
        full: args.contains("--full"),
        manifest: args.opt_free_from_str()?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unused arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
