// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// CLI argument definitions for bvc
//
// Separated from main.rs so that build.rs can include this file
// to generate the man page via clap_mangen.

use clap::Parser;

/// CLI argument parser
#[derive(Parser)]
#[command(name = "bvc", version, about = "Browser Version Check")]
pub struct Cli {
    /// Browser to look up (currently only firefox)
    #[arg(value_name = "BROWSER")]
    pub browser: Option<String>,

    /// Operating system whose installer to inspect [default: windows]
    #[arg(short = 'o', long = "os", value_name = "OS")]
    pub os: Option<String>,

    /// Locale of the release to look up [default: en]
    #[arg(short = 'l', long = "language", value_name = "LANG")]
    pub language: Option<String>,

    /// Release mirror host to query
    #[arg(long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// Connection and listing timeout in seconds
    #[arg(short = 't', long = "timeout", value_name = "SECONDS", default_value_t = 30)]
    pub timeout: u64,

    /// Print the result as a JSON object
    #[arg(long = "json")]
    pub json: bool,

    /// Make the operation more talkative
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion script (only bash is supported currently)
    #[arg(long = "completion", value_name = "SHELL", value_parser = parse_completion_shell)]
    pub completion: Option<String>,
}

fn parse_completion_shell(s: &str) -> Result<String, String> {
    match s.to_lowercase().as_str() {
        "bash" => Ok(s.to_lowercase()),
        _ => Err(format!("unsupported shell: {s} (only 'bash' is supported)")),
    }
}
