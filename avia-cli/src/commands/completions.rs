//! Shell completion script generation.

use std::io;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Binary name as installed (the package is avia-cli, the binary is avia)
const BIN_NAME: &str = "avia";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Installation hints per shell, emitted as comments on stderr so the
/// script itself stays pipeable.
fn install_hints(shell: Shell) -> &'static [&'static str] {
    match shell {
        Shell::Bash => &[
            "#   avia completions bash > ~/.local/share/bash-completion/completions/avia",
            "# or in ~/.bashrc:",
            "#   eval \"$(avia completions bash)\"",
        ],
        Shell::Zsh => &[
            "#   avia completions zsh > ~/.zsh/completions/_avia",
            "#   (with ~/.zsh/completions on $fpath)",
        ],
        Shell::Fish => &["#   avia completions fish > ~/.config/fish/completions/avia.fish"],
        Shell::PowerShell => {
            &["#   avia completions powershell | Out-String | Invoke-Expression"]
        }
        _ => &[],
    }
}

impl CompletionsCommand {
    /// Writes the completion script for the requested shell to stdout.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let hints = install_hints(self.shell);
        if !hints.is_empty() {
            eprintln!("# To install {} completions:", self.shell);
            for hint in hints {
                eprintln!("{hint}");
            }
            eprintln!();
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
