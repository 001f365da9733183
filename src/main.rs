mod app;
mod logging;

use app::{App, Args};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.verbose)?;
    App::new(args).run()
}
