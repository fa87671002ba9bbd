//! # Shell Completion Module
//!
//! Completion script generation for MoodSync:
//! - Standard clap completions for bash, zsh, fish, PowerShell and elvish
//! - Enhanced bash/fish scripts that also complete mood and language values
//!
//! ## Usage
//!
//! ```bash
//! # Generate bash completions
//! moodsync completion bash > ~/.local/share/bash-completion/completions/moodsync
//!
//! # Generate zsh completions
//! moodsync completion zsh > ~/.config/zsh/completions/_moodsync
//! ```

use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io;

use crate::track::{Mood, LANGUAGES};

/// Generate shell completions for the given shell
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Convert our Shell enum to clap_complete's Shell enum
pub fn shell_to_completion_shell(shell: &crate::cli::Shell) -> CompletionShell {
    match shell {
        crate::cli::Shell::Bash => CompletionShell::Bash,
        crate::cli::Shell::Zsh => CompletionShell::Zsh,
        crate::cli::Shell::Fish => CompletionShell::Fish,
        crate::cli::Shell::PowerShell => CompletionShell::PowerShell,
        crate::cli::Shell::Elvish => CompletionShell::Elvish,
    }
}

fn mood_words() -> String {
    Mood::ALL
        .iter()
        .map(|mood| mood.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn language_words() -> String {
    let mut words = vec!["Any"];
    words.extend(LANGUAGES);
    words.join(" ")
}

/// Generate enhanced bash completion script with mood and language completion
pub fn generate_enhanced_bash_completion() {
    let moods = mood_words();
    let languages = language_words();
    println!(
        r#"#!/bin/bash
# Enhanced MoodSync completion script with mood and language completion
# Install with: moodsync completion-enhanced bash > ~/.local/share/bash-completion/completions/moodsync

_moodsync() {{
    local cur prev words cword
    _init_completion || return

    case "${{prev}}" in
        recommend)
            COMPREPLY=($(compgen -W "{moods}" -- "${{cur}}"))
            return 0
            ;;
        --language|-l)
            COMPREPLY=($(compgen -W "{languages}" -- "${{cur}}"))
            return 0
            ;;
        --emin|--emax|--energy|-e)
            COMPREPLY=($(compgen -W "1 2 3 4 5" -- "${{cur}}"))
            return 0
            ;;
        --data-file)
            _filedir
            return 0
            ;;
        completion|completion-enhanced)
            COMPREPLY=($(compgen -W "bash zsh fish power-shell elvish" -- "${{cur}}"))
            return 0
            ;;
    esac

    local subcommands="init recommend list surprise add completion completion-enhanced help"

    if [[ $cword -eq 1 ]]; then
        COMPREPLY=($(compgen -W "$subcommands --help --version" -- "${{cur}}"))
    elif [[ $cword -eq 3 ]] && [[ "${{words[1]}}" == "add" ]]; then
        # Second positional of `add` is the mood
        COMPREPLY=($(compgen -W "{moods}" -- "${{cur}}"))
    else
        case "${{words[1]}}" in
            init)
                COMPREPLY=($(compgen -W "--min-per-language --data-file --help" -- "${{cur}}"))
                ;;
            recommend)
                COMPREPLY=($(compgen -W "--language -l --query -q --emin --emax --data-file --help" -- "${{cur}}"))
                ;;
            surprise)
                COMPREPLY=($(compgen -W "--seed --data-file --help" -- "${{cur}}"))
                ;;
            add)
                COMPREPLY=($(compgen -W "--artist -a --energy -e --language -l --link --data-file --help" -- "${{cur}}"))
                ;;
            *)
                COMPREPLY=($(compgen -W "$subcommands" -- "${{cur}}"))
                ;;
        esac
    fi
}} &&
complete -F _moodsync moodsync

# ex: filetype=sh
"#
    );
}

/// Generate enhanced fish completion script with mood and language completion
pub fn generate_enhanced_fish_completion() {
    let moods = mood_words();
    let languages = language_words();
    println!(
        r#"# Enhanced MoodSync completion script for Fish shell
# Install with: moodsync completion-enhanced fish > ~/.config/fish/completions/moodsync.fish

# Clear existing completions to avoid conflicts
complete -c moodsync -e

# Global options
complete -c moodsync -s h -l help -d 'Print help information'
complete -c moodsync -s V -l version -d 'Print version information'
complete -c moodsync -l data-file -d 'Path to the catalog CSV file' -r

# Main commands
complete -c moodsync -f -n '__fish_is_first_token' -a 'init' -d 'Bootstrap the catalog and verify coverage'
complete -c moodsync -f -n '__fish_is_first_token' -a 'recommend' -d 'Recommend tracks for a mood'
complete -c moodsync -f -n '__fish_is_first_token' -a 'list' -d 'List the whole catalog'
complete -c moodsync -f -n '__fish_is_first_token' -a 'surprise' -d 'Show a surprise mix'
complete -c moodsync -f -n '__fish_is_first_token' -a 'add' -d 'Add a new track to the catalog'
complete -c moodsync -f -n '__fish_is_first_token' -a 'completion' -d 'Generate shell completions'
complete -c moodsync -f -n '__fish_is_first_token' -a 'completion-enhanced' -d 'Generate enhanced shell completions'
complete -c moodsync -f -n '__fish_is_first_token' -a 'help' -d 'Print help for commands'

# init command
complete -c moodsync -f -n '__fish_seen_subcommand_from init' -l min-per-language -d 'Minimum tracks per tracked language' -r

# recommend command - complete with moods and languages
complete -c moodsync -f -n '__fish_seen_subcommand_from recommend' -a '{moods}' -d 'Mood'
complete -c moodsync -f -n '__fish_seen_subcommand_from recommend' -s l -l language -d 'Language filter' -ra '{languages}'
complete -c moodsync -f -n '__fish_seen_subcommand_from recommend' -s q -l query -d 'Title/artist substring' -r
complete -c moodsync -f -n '__fish_seen_subcommand_from recommend' -l emin -d 'Minimum energy (1-5)' -ra '1 2 3 4 5'
complete -c moodsync -f -n '__fish_seen_subcommand_from recommend' -l emax -d 'Maximum energy (1-5)' -ra '1 2 3 4 5'

# surprise command
complete -c moodsync -f -n '__fish_seen_subcommand_from surprise' -l seed -d 'Seed for the random pick' -r

# add command - complete with moods and languages
complete -c moodsync -f -n '__fish_seen_subcommand_from add' -a '{moods}' -d 'Mood'
complete -c moodsync -f -n '__fish_seen_subcommand_from add' -s a -l artist -d 'Artist name' -r
complete -c moodsync -f -n '__fish_seen_subcommand_from add' -s e -l energy -d 'Energy rating (1-5)' -ra '1 2 3 4 5'
complete -c moodsync -f -n '__fish_seen_subcommand_from add' -s l -l language -d 'Language' -ra '{languages}'
complete -c moodsync -f -n '__fish_seen_subcommand_from add' -l link -d 'Link to the track' -r

# completion commands - complete with shell types
complete -c moodsync -f -n '__fish_seen_subcommand_from completion' -a 'bash zsh fish power-shell elvish' -d 'Shell'
complete -c moodsync -f -n '__fish_seen_subcommand_from completion-enhanced' -a 'bash fish' -d 'Shell'
"#
    );
}
