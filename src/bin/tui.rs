use anyhow::Result;
use eventline::cli::{self, Command};
use eventline::config::Config;
use eventline::context::StandardContext;
use eventline::logging;
use eventline::storage::LocalStorage;
use eventline::store::EventStore;
use std::env;

fn main() -> Result<()> {
    let args = cli::parse_args(env::args().skip(1))?;
    let ctx = StandardContext::new(args.root);

    if args.command == Command::Help {
        cli::print_help("eventline");
        return Ok(());
    }

    // A malformed config is reported instead of silently replaced with defaults.
    let cfg = match Config::load_or_default(&ctx) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration:\n{}", e);
            std::process::exit(1);
        }
    };

    match args.command {
        // CLI Command: eventline print
        Command::Print { date, width } => {
            logging::init_stderr_logging(cfg.log_level_filter())?;
            let axis = cfg.timeline_axis()?;
            let mut store = EventStore::new(cfg.priority_table());
            store.insert(LocalStorage::load(&ctx)?);
            print!("{}", cli::render_print(&store, &axis, date, width));
            Ok(())
        }
        Command::Tui => {
            logging::init_file_logging(&ctx, cfg.log_level_filter())?;
            eventline::tui::run(&ctx, &cfg)
        }
        Command::Help => Ok(()),
    }
}
