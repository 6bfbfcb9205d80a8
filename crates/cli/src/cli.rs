//! Command-line argument definitions

use std::ffi::OsString;

use clap::{Args, Parser, Subcommand};
use todo_core::task::TaskId;

use crate::config::OutputFormat;

/// In-memory todo tracker
#[derive(Parser, Debug)]
#[command(
    name = "todo",
    version,
    about = "Todo App - Command Line Interface",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn", env = "TODO_LOG")]
    pub log_level: String,

    /// Output format for command results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// One line typed into the interactive shell
#[derive(Parser, Debug)]
#[command(
    name = "todo",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new todo with the specified title
    Add {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// List all todos
    List(ListArgs),

    /// Show the details of the todo with specified ID
    Show {
        #[arg(allow_negative_numbers = true)]
        id: TaskId,
    },

    /// Mark the todo with specified ID as completed
    Complete {
        #[arg(allow_negative_numbers = true)]
        id: TaskId,
    },

    /// Mark the todo with specified ID as pending again
    Reopen {
        #[arg(allow_negative_numbers = true)]
        id: TaskId,
    },

    /// Delete the todo with specified ID
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: TaskId,
    },

    /// Update the title of the todo with specified ID
    Update {
        #[arg(allow_negative_numbers = true)]
        id: TaskId,
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// Remove every todo and restart numbering
    Clear,

    /// Read commands interactively, keeping todos between lines
    Shell,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Only show completed todos
    #[arg(long, conflicts_with = "pending")]
    pub completed: bool,

    /// Only show pending todos
    #[arg(long)]
    pub pending: bool,
}

/// Global options that consume the following argument as their value
const VALUE_OPTIONS: &[&str] = &["--log-level", "--format"];

/// Lowercase the command word so `ADD` and `Add` select `add`
///
/// Scanning starts at `skip` (1 for process arguments, 0 for shell lines)
/// and passes over global options and their values. Only the first
/// positional argument is touched; titles keep their case. Scanning stops
/// at `--` or at an argument that is not valid UTF-8.
pub fn lowercase_command_word<I, T>(args: I, skip: usize) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let mut index = skip;
    while let Some(arg) = args.get(index) {
        let Some(text) = arg.to_str() else { break };
        if text == "--" {
            break;
        }
        if VALUE_OPTIONS.contains(&text) {
            index += 2;
            continue;
        }
        if text.starts_with('-') {
            index += 1;
            continue;
        }
        args[index] = text.to_lowercase().into();
        break;
    }
    args
}

/// Join title words the way they were typed, separated by single spaces
pub fn join_title(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("todo").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_add_joins_words() {
        let cli = parse(&["add", "Buy", "milk"]).unwrap();
        match cli.command {
            Command::Add { title } => assert_eq!(join_title(&title), "Buy milk"),
            other => panic!("Expected add, got: {:?}", other),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_add_keeps_hyphenated_words() {
        let cli = parse(&["add", "fix", "-v", "flag"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Add {
                title: vec!["fix".into(), "-v".into(), "flag".into()]
            }
        );
    }

    #[test]
    fn test_parse_add_requires_title() {
        let err = parse(&["add"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_rejects_non_integer_id() {
        let err = parse(&["complete", "abc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["delete", "1.5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_parse_accepts_negative_id() {
        let cli = parse(&["delete", "-3"]).unwrap();
        assert_eq!(cli.command, Command::Delete { id: -3 });
    }

    #[test]
    fn test_parse_update() {
        let cli = parse(&["update", "2", "New", "title"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Update {
                id: 2,
                title: vec!["New".into(), "title".into()]
            }
        );

        let err = parse(&["update", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_list_filters_conflict() {
        let cli = parse(&["list", "--pending"]).unwrap();
        assert_eq!(
            cli.command,
            Command::List(ListArgs {
                completed: false,
                pending: true
            })
        );

        let err = parse(&["list", "--pending", "--completed"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = parse(&["list", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_parse_unknown_and_missing_command() {
        let err = parse(&["frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);

        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_parse_global_options_after_command() {
        let cli = parse(&["list", "--format", "json", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_command_word_is_case_insensitive() {
        let args = lowercase_command_word(["todo", "ADD", "Buy", "Milk"], 1);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(
            cli.command,
            Command::Add {
                title: vec!["Buy".into(), "Milk".into()]
            }
        );

        let args = lowercase_command_word(["todo", "Complete", "2"], 1);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.command, Command::Complete { id: 2 });
    }

    #[test]
    fn test_command_word_skips_global_options() {
        let args = lowercase_command_word(
            ["todo", "--format", "json", "--log-level=debug", "LIST", "--Pending"],
            1,
        );
        assert_eq!(
            args,
            ["todo", "--format", "json", "--log-level=debug", "list", "--Pending"]
                .map(OsString::from)
        );
    }

    #[test]
    fn test_command_word_stops_at_separator() {
        let args = lowercase_command_word(["todo", "--", "ADD"], 1);
        assert_eq!(args, ["todo", "--", "ADD"].map(OsString::from));
    }

    #[test]
    fn test_shell_line_has_no_binary_name() {
        let line = ShellLine::try_parse_from(["complete", "4"]).unwrap();
        assert_eq!(line.command, Command::Complete { id: 4 });
    }
}
