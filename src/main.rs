use anyhow::Result;
use autocompare::cli::{setup, Cli, Commands};
use autocompare::commands;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup::init_logging(cli.verbosity)?;

    match cli.command {
        Commands::Compare {
            first,
            second,
            render,
        } => commands::compare::handle_compare_command(&first, &second, &render),
        Commands::Lookup {
            catalog,
            first,
            second,
            render,
        } => commands::lookup::handle_lookup_command(&catalog, &first, &second, &render),
        Commands::Demo { render } => commands::demo::handle_demo_command(&render),
        Commands::Project {
            price,
            depreciation,
            years,
            annual_km,
            current_km,
            base_year,
            render,
        } => commands::project::handle_project_command(
            commands::project::ProjectArgs {
                price,
                depreciation,
                years,
                annual_km,
                current_km,
                base_year,
            },
            &render,
        ),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
