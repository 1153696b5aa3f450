use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "adfmark")]
#[command(version)]
#[command(about = "Convert lightly marked-up text to rich-text documents or plain text")]
#[command(long_about = "
adfmark reads text containing headings (# / ##), bullet items (- ),
**bold** spans and escaped line breaks (\\n), and prints either the
rich-text document JSON used by issue-tracker fields or a flattened
plain-text version for titles.

Example usage:
  adfmark doc notes.txt --pretty
  echo '**Fix** login' | adfmark plain
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the document JSON for the input text
    Doc(DocArgs),

    /// Print the input text with markup stripped
    Plain {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct DocArgs {
    /// Input file; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Emit one paragraph of plain text instead of parsing blocks
    #[arg(long)]
    pub single_paragraph: bool,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// File with acceptance criteria to append under a heading
    #[arg(long, value_name = "FILE")]
    pub criteria: Option<PathBuf>,

    /// Heading placed above the acceptance criteria
    #[arg(long, value_name = "TEXT")]
    pub criteria_heading: Option<String>,

    /// Maximum number of escaped line-break unescaping passes
    #[arg(long, value_name = "N")]
    pub max_unescape_passes: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_doc_flags() {
        let cli = Cli::try_parse_from([
            "adfmark",
            "doc",
            "in.txt",
            "--pretty",
            "--single-paragraph",
            "--criteria-heading",
            "Done when",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Doc(args) = cli.command else {
            panic!("expected doc command");
        };
        assert_eq!(args.file, Some(PathBuf::from("in.txt")));
        assert!(args.pretty);
        assert!(args.single_paragraph);
        assert_eq!(args.criteria_heading.as_deref(), Some("Done when"));
    }

    #[test]
    fn test_parse_plain_from_stdin() {
        let cli = Cli::try_parse_from(["adfmark", "plain"]).unwrap();
        assert!(matches!(cli.command, Commands::Plain { file: None }));
    }

    #[test]
    fn test_command_required() {
        assert!(Cli::try_parse_from(["adfmark"]).is_err());
    }
}
