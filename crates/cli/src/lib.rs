mod input;
mod refs;
mod render;
mod schema;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "typewriter",
    version,
    about = "Render Java type expressions with the shortest unambiguous names",
    long_about = "Reads a type expression tree as JSON, plans the imports it needs and renders it \
                  as Java source text. Use `typewriter schema` to see the accepted JSON shape."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a type expression as Java source
    Render {
        /// Type expression JSON, or `-` to read from stdin
        #[arg(value_name = "TYPE_JSON")]
        input: String,

        /// Planner configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Package of the generated unit (overrides the configuration file)
        #[arg(short, long)]
        package: Option<String>,

        /// Skip import planning and print the fully qualified form
        #[arg(long)]
        qualified: bool,
    },
    /// List the classes a type expression references
    Refs {
        /// Type expression JSON, or `-` to read from stdin
        #[arg(value_name = "TYPE_JSON")]
        input: String,
    },
    /// Print the JSON schema of type expressions
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = match typewriter_core::logging::init_logging("cli", false) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };

    match cli.command {
        Commands::Render {
            input,
            config,
            package,
            qualified,
        } => render::run(
            &input,
            render::RenderOptions {
                config: config.as_deref(),
                package,
                qualified,
            },
        ),
        Commands::Refs { input } => refs::run(&input),
        Commands::Schema => schema::run(),
    }
}
