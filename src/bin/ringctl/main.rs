use anyhow::Context;
use clap::Parser;

use ringbuff::core::config::{compose_config, BufferConfig};

use crate::actions::{run_dedup, run_demo};
use crate::args::{Commands, RingCtlArgs};
use crate::command::execute_command;

mod actions;
mod args;
mod command;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: RingCtlArgs = RingCtlArgs::parse();

    let loaded: BufferConfig = compose_config(&args.config, "ringbuff")
        .context("Error loading configuration")?;
    let buffer_config = args.override_config(loaded);

    match args.subcommand {
        Commands::Demo => {
            execute_command(args.out_format, || run_demo(&buffer_config));
        }
        Commands::Dedup(dedup_args) => {
            execute_command(args.out_format, || run_dedup(&buffer_config, dedup_args.input.as_deref()));
        }
    }
    Ok(())
}
