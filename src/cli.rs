use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "entraperm",
    version,
    about = "Microsoft Entra ID permissions inspector"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Settings file (TOML); defaults to ./entraperm.toml when present"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Directory API base URL (default https://graph.microsoft.com/beta)"
    )]
    pub graph_url: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Token file holding an accessToken (default .roadtools_auth)"
    )]
    pub auth_file: Option<PathBuf>,
    #[arg(long, global = true, help = "Directory the output files are written to")]
    pub output_dir: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Directory holding the bundled catalog and default_results.csv"
    )]
    pub data_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log filter for diagnostics on stderr"
    )]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Collect all namespaces/actions")]
    Collect,
    #[command(about = "Check collected permissions")]
    Check {
        #[arg(long, help = "Path to collected JSON")]
        collected: Option<PathBuf>,
        #[arg(long, help = "Filter namespace")]
        namespace: Option<String>,
        #[arg(
            long,
            help = "Filter a specific action (will ignore --namespace if specified)"
        )]
        action: Option<String>,
        #[arg(
            long,
            default_value = "/",
            help = "Scope to use: users, devices, /oid1 or \"/oid1,/oid2\""
        )]
        scope: String,
        #[arg(
            long,
            default_value_t = false,
            help = "Only test actions where default result is not invalidAction"
        )]
        valid: bool,
    },
}
