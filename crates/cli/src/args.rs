use clap::{Parser, Subcommand};

/// Track job applications stored behind the jobs REST API.
#[derive(Parser, Debug)]
#[command(name = "jobtrack")]
#[command(version, about = "Track job applications", long_about = None)]
pub struct Cli {
    /// Base URL of the jobs API
    #[arg(short = 'u', long = "api-url", env = "JOBS_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Print JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Enable debug logging (overridden by `RUST_LOG`)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List applications, optionally filtered
    List {
        /// `all`, or one of Applied, Interview, Offer, Rejected
        #[arg(short = 's', long = "status", default_value = "all")]
        status: String,

        /// Only applications made on this day (YYYY-MM-DD)
        #[arg(short = 'd', long = "date", default_value = "")]
        date: String,
    },

    /// Record a new application
    Add {
        #[arg(long = "company")]
        company: String,

        #[arg(long = "role")]
        role: String,

        /// Application date (YYYY-MM-DD)
        #[arg(long = "date")]
        date: String,

        /// Initial status (default: Applied)
        #[arg(long = "status", default_value = "")]
        status: String,

        /// Link to the job posting
        #[arg(long = "link", default_value = "")]
        link: String,
    },

    /// Change the status of an application
    Status {
        /// Application id
        id: String,

        /// New status: Applied, Interview, Offer or Rejected
        status: String,
    },

    /// Delete an application
    Delete {
        /// Application id
        id: String,
    },
}
