//! # Proportio CLI Application
//!
//! Command-line frontend for the proportio_core calculation engine. Plays
//! two roles: a form-style interactive surface for humans and a tool
//! dispatcher surface (`tools`, `call`) for agents.

mod cli;
mod commands;
mod logging;

use std::process;

use clap::Parser;
use proportio_core::CalcError;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        eprintln!("Error: {e:#}");

        // Echo the structured error for LLM/API consumers
        if let Some(calc_err) = e.downcast_ref::<CalcError>() {
            if let Ok(json) = serde_json::to_string_pretty(calc_err) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{json}");
            }
        }
        process::exit(1);
    }
}
