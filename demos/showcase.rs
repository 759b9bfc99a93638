//! # Showcase
//!
//! A pager with a page indicator underneath. Swipe with the arrow keys, drag
//! with `,`/`.` or the mouse, and watch the highlighted dot follow.
//!
//! ```text
//! cargo run --example showcase -- [--pages N] [--animated] [--rtl]
//!     [--index-offset N] [--style FILE.toml] [--log FILE]
//! ```

use pagedots::showcase::{Showcase, ShowcaseFlags};
use pagedots::widgets::IndicatorConfig;
use pagedots::{log_to_file, ProgramOptions};
use std::path::PathBuf;
use std::sync::Mutex;

const HELP: &str = "\
showcase -- page indicator demo

USAGE:
  showcase [OPTIONS]

OPTIONS:
  --pages N            Number of pages (default: 5)
  --animated           Slide the highlight while dragging
  --rtl                Right-to-left clamping
  --index-offset N     Bias added to pager positions (default: 0)
  --style FILE         TOML style file for the indicator
  --log FILE           Write tracing output to FILE
  -h, --help           Print this help
";

struct Args {
    pages: usize,
    animated: bool,
    rtl: bool,
    index_offset: i32,
    style: Option<PathBuf>,
    log: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let args = Args {
        pages: pargs.opt_value_from_str("--pages")?.unwrap_or(5),
        animated: pargs.contains("--animated"),
        rtl: pargs.contains("--rtl"),
        index_offset: pargs.opt_value_from_str("--index-offset")?.unwrap_or(0),
        style: pargs.opt_value_from_os_str("--style", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        log: pargs.opt_value_from_os_str("--log", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
    };

    let rest = pargs.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(args))
}

#[pagedots::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    if let Some(path) = &args.log {
        let file = log_to_file(path)?;
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    let mut config = match &args.style {
        Some(path) => IndicatorConfig::load(path)?,
        None => IndicatorConfig::default(),
    };
    config.animated |= args.animated;

    let flags = ShowcaseFlags {
        pages: args.pages,
        config,
        rtl: args.rtl,
        page_index_offset: args.index_offset,
    };
    let options = ProgramOptions {
        mouse_capture: true,
        title: Some("pagedots".into()),
        ..ProgramOptions::default()
    };

    let model = pagedots::run_with::<Showcase>(flags, options).await?;
    tracing::info!(page = model.pager().selected(), "showcase finished");
    Ok(())
}
