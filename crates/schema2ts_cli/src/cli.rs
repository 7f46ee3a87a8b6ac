use clap::Parser;
use log::error;
use schema2ts_cli::{Cli, utils};

fn main() {
    let cli = Cli::parse();
    utils::logger::init_logger(cli.quiet, cli.verbose);

    if let Err(e) = cli.handle() {
        error!("{e:#}");
        std::process::exit(1);
    }
}
