// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Browser Version Check (bvc) - Main Application
//!
//! Command line front end for the lookup library. Prints the latest released
//! version of a browser for a chosen operating system and locale, as plain
//! text or as a JSON object.

use std::error::Error;
use std::process::exit;
use std::time::Duration;

use clap::Parser;
use serde::Serialize;

use bvc::{Mirror, VersionQuery, resolve_latest};

mod cli;
use cli::Cli;

/// Result row printed by --json
#[derive(Serialize)]
struct Report<'a> {
    browser: &'a str,
    os: &'a str,
    language: &'a str,
    version: String,
}

/// Main application entry point
///
/// Parses command line arguments, runs the lookup and prints the result.
/// Errors go to stderr with a non-zero exit status.
fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Handle completion generation first (exits immediately)
    if cli.completion.is_some() {
        print_bash_completion();
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let Some(browser) = cli.browser.as_deref() else {
        return Err("bvc: missing browser\nTry 'bvc --help' for more information.".into());
    };

    // Validation runs before any socket is opened.
    let query = VersionQuery::validate(browser, cli.os.as_deref(), cli.language.as_deref())?;

    let mut mirror = Mirror::default();
    if let Some(host) = &cli.host {
        mirror.host = host.clone();
    }
    mirror.timeout = Duration::from_secs(cli.timeout);

    if cli.verbose {
        eprintln!(
            "Querying {} for {} on {} ({})",
            mirror.host,
            query.browser.label(),
            query.os.label(),
            query.language
        );
    }

    let version = resolve_latest(&mirror, &query)?;

    if cli.json {
        let report = Report {
            browser: query.browser.label(),
            os: query.os.label(),
            language: query.language.as_str(),
            version: version.to_string(),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{version}");
    }

    Ok(())
}

/// Print bash completion script
fn print_bash_completion() {
    print!(
        r#"# bash completion for bvc

_bvc_completions() {{
    local cur
    COMPREPLY=()
    cur="${{COMP_WORDS[COMP_CWORD]}}"

    if [[ "${{cur}}" == -* ]]; then
        local options=(
            "--completion    (Generate shell completion script)"
            "-h              (Print help)"
            "--help          (Print help)"
            "--host          (Release mirror host to query)"
            "--json          (Print the result as a JSON object)"
            "-l              (Locale of the release to look up)"
            "--language      (Locale of the release to look up)"
            "-o              (Operating system whose installer to inspect)"
            "--os            (Operating system whose installer to inspect)"
            "-t              (Connection and listing timeout in seconds)"
            "--timeout       (Connection and listing timeout in seconds)"
            "-v              (Make the operation more talkative)"
            "--verbose       (Make the operation more talkative)"
            "--version       (Print version)"
        )

        local IFS=$'\n'
        local opt name padded
        local width=$((COLUMNS - 1))
        for opt in "${{options[@]}}"; do
            name="${{opt%%  *}}"
            if [[ "$name" == "${{cur}}"* ]]; then
                printf -v padded "%-${{width}}s" "$opt"
                COMPREPLY+=("$padded")
            fi
        done

        if ((${{#COMPREPLY[@]}} == 1)); then
            COMPREPLY[0]="${{COMPREPLY[0]%%  *}}"
        fi
    else
        COMPREPLY=($(compgen -W "firefox" -- "${{cur}}"))
    fi
}}

complete -o nosort -F _bvc_completions bvc
"#
    );
}
