use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "hoopdle backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print today's target player (admin/debug, spoils the answer)
    Today,
    /// Print a summary of the loaded player catalog
    Catalog,
}
