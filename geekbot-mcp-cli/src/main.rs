use clap::CommandFactory;
use geekbot_mcp::Config;
use geekbot_mcp_cli::cli::{Cli, Commands};
use geekbot_mcp_cli::commands::{self, ReportsArgs};
use geekbot_mcp_cli::error::{handle_cli_result, CliResult};
use geekbot_mcp_cli::exit_codes::{EXIT_SUCCESS, EXIT_WARNING};
use geekbot_mcp_cli::logging;
use is_terminal::IsTerminal;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    let stdin_is_terminal = std::io::stdin().is_terminal();

    // Without a subcommand an MCP client is expected on stdin; a person gets help
    let command = match cli.command {
        Some(command) => command,
        None if stdin_is_terminal => {
            let _ = Cli::command().print_help();
            process::exit(EXIT_SUCCESS);
        }
        None => Commands::Serve,
    };

    let is_mcp_mode = matches!(command, Commands::Serve) && !stdin_is_terminal;
    let log_level = logging::log_level(is_mcp_mode, cli.quiet, cli.debug, cli.verbose);
    logging::init(log_level, is_mcp_mode);

    let exit_code = match command {
        Commands::Serve => {
            tracing::info!("Starting MCP server");
            run_server().await
        }
        Commands::Standups => {
            tracing::debug!("Running standups command");
            handle_cli_result(print_output(run_standups().await))
        }
        Commands::Reports {
            standup_id,
            user_id,
            after,
            before,
            question_ids,
            limit,
        } => {
            tracing::debug!("Running reports command");
            let args = ReportsArgs {
                standup_id,
                user_id,
                after,
                before,
                question_ids,
                limit,
            };
            handle_cli_result(print_output(run_reports(args).await))
        }
        Commands::Prompt { standup_id } => {
            tracing::debug!("Running prompt command");
            handle_cli_result(print_output(commands::run_prompt(standup_id)))
        }
    };

    process::exit(exit_code);
}

async fn run_standups() -> CliResult<String> {
    let config = Config::from_env()?;
    commands::run_standups(&config).await
}

async fn run_reports(args: ReportsArgs) -> CliResult<String> {
    let config = Config::from_env()?;
    commands::run_reports(&config, args).await
}

fn print_output(result: CliResult<String>) -> CliResult<()> {
    let output = result?;
    println!("{output}");
    Ok(())
}

async fn run_server() -> i32 {
    use geekbot_mcp::mcp::McpServer;
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => return handle_cli_result::<()>(Err(e.into())),
    };

    let server = McpServer::new(&config);
    tracing::info!(
        "MCP server ready with tools: {}",
        server.list_tool_names().join(", ")
    );

    // Set up cancellation token
    let ct = CancellationToken::new();
    let ct_clone = ct.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for ctrl+c: {}", e);
            return;
        }

        tracing::info!("Shutdown signal received");
        ct_clone.cancel();
    });

    // Start the rmcp SDK server with stdio transport
    match serve_server(server, stdio()).await {
        Ok(running_service) => {
            tracing::info!("MCP server started successfully");

            tokio::select! {
                _ = ct.cancelled() => {}
                quit = running_service.waiting() => {
                    if let Err(e) = quit {
                        tracing::error!("MCP server task failed: {}", e);
                        return EXIT_WARNING;
                    }
                }
            }

            tracing::info!("MCP server exited successfully");
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            EXIT_WARNING
        }
    }
}
