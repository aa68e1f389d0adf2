//! Command implementations for all syllabus commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use syllabus_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Init(args) => commands::init::execute(ctx, args),
            Commands::Render(args) => commands::render::execute(ctx, args),
            Commands::Export(args) => commands::export::execute(ctx, args),
            Commands::Check(args) => commands::check::execute(ctx, args),
            Commands::References(args) => commands::references::execute(ctx, args),
            Commands::Edit(args) => commands::edit::execute(ctx, args),
        };
        if ctx.cli.verbose {
            tracing::debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        }
        result
    }
}
