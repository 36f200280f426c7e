use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "geekbot-mcp")]
#[command(version)]
#[command(about = "An MCP server for reading Geekbot standups and reports")]
#[command(long_about = "
geekbot-mcp is an MCP (Model Context Protocol) server that gives an agent
read-only access to Geekbot standups and reports. It needs a Geekbot API key
in the GB_API_KEY environment variable.

Example usage:
  geekbot-mcp serve                  # Run as MCP server
  geekbot-mcp standups               # Print what fetch_standups returns
  geekbot-mcp reports --standup-id 1 # Print what fetch_reports returns
  geekbot-mcp prompt                 # Print the weekly rollup prompt
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs geekbot-mcp as an MCP server over stdio. This is the default mode when
invoked without a subcommand by an MCP client. The server exposes:

- fetch_standups: every standup visible to the API key
- fetch_reports: submitted reports, filtered by standup, member or dates
- weekly_rollup_report: a prompt for turning a week of reports into a rollup

Example:
  GB_API_KEY=... geekbot-mcp serve
")]
    Serve,
    /// Print the rendered standup list
    Standups,
    /// Print rendered reports
    #[command(long_about = "
Fetches reports and prints them exactly as the fetch_reports tool returns
them. Dates use the YYYY-MM-DD format and are taken at local midnight.

Examples:
  geekbot-mcp reports --standup-id 101
  geekbot-mcp reports --after 2024-01-01 --before 2024-01-08
  geekbot-mcp reports --user-id U100 --limit 5
")]
    Reports {
        /// Only reports of this standup
        #[arg(long)]
        standup_id: Option<i64>,

        /// Only reports of this member
        #[arg(long)]
        user_id: Option<String>,

        /// Only reports submitted after this date (YYYY-MM-DD)
        #[arg(long)]
        after: Option<String>,

        /// Only reports submitted before this date (YYYY-MM-DD)
        #[arg(long)]
        before: Option<String>,

        /// Only answers to this question (repeatable)
        #[arg(long = "question-id")]
        question_ids: Vec<i64>,

        /// Maximum number of reports (default: GB_REPORTS_LIMIT or 30)
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Print the weekly rollup report prompt
    Prompt {
        /// Standup to summarize
        #[arg(long)]
        standup_id: Option<i64>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    #[allow(dead_code)]
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_help_works() {
        let result = Cli::try_parse_from_args(["geekbot-mcp", "--help"]);
        assert!(result.is_err()); // Help exits with error code but that's expected

        let error = result.unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_version_works() {
        let result = Cli::try_parse_from_args(["geekbot-mcp", "--version"]);
        assert!(result.is_err());

        let error = result.unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from_args(["geekbot-mcp"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.debug);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_serve_subcommand() {
        let cli = Cli::try_parse_from_args(["geekbot-mcp", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }

    #[test]
    fn test_cli_reports_with_filters() {
        let cli = Cli::try_parse_from_args([
            "geekbot-mcp",
            "reports",
            "--standup-id",
            "101",
            "--user-id",
            "U100",
            "--after",
            "2024-01-01",
            "--question-id",
            "1",
            "--question-id",
            "2",
            "--limit",
            "5",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Reports {
                standup_id,
                user_id,
                after,
                before,
                question_ids,
                limit,
            }) => {
                assert_eq!(standup_id, Some(101));
                assert_eq!(user_id.as_deref(), Some("U100"));
                assert_eq!(after.as_deref(), Some("2024-01-01"));
                assert_eq!(before, None);
                assert_eq!(question_ids, vec![1, 2]);
                assert_eq!(limit, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_reports_rejects_non_numeric_standup() {
        let result = Cli::try_parse_from_args(["geekbot-mcp", "reports", "--standup-id", "daily"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_prompt_subcommand() {
        let cli =
            Cli::try_parse_from_args(["geekbot-mcp", "--quiet", "prompt", "--standup-id", "7"])
                .unwrap();
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Some(Commands::Prompt {
                standup_id: Some(7)
            })
        ));
    }
}
