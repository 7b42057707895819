use brandmark::cli::{self, Cli, Commands, Context};
use brandmark::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let Cli {
        command,
        config,
        out,
    } = Cli::parse();
    let printer = Printer::new();

    // Completions never need the config.
    let load = || Context::from_cwd(config.as_deref(), out.as_deref());

    match command {
        Commands::Completions(args) => cli::completions::run(args)?,
        Commands::Mark => cli::mark::run(&load()?, &printer)?,
        Commands::Og => cli::og::run(&load()?, &printer)?,
        Commands::All => cli::all::run(&load()?, &printer)?,
        Commands::Optimize(args) => cli::optimize::run(args, &load()?, &printer)?,
        Commands::Scene(args) => cli::scene::run(args, &load()?)?,
        Commands::Check => cli::check::run(&load()?, &printer)?,
    }

    Ok(())
}
