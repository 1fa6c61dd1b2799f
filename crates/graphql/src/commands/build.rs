use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct BuildCmd {
    #[arg(
        help="Print a `{\"query\":\"...\"}` JSON request body instead of the \
             bare GraphQL text.",
        long,
    )]
    request_body: bool,

    #[arg(
        help="Path to a JSON file describing the operation, or `-` to read \
             the description from stdin.",
        name="FILE",
    )]
    input: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for BuildCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let operation = match super::load_operation(&self.input).await {
            Ok(operation) => operation,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        log::debug!(
            "Serializing {} operation with {} top-level selections{}...",
            operation.kind(),
            operation.selections().len(),
            if self.request_body { " as a request body" } else { "" },
        );
        let output =
            if self.request_body {
                operation.to_request_body()
            } else {
                operation.to_graphql_string()
            };

        match output {
            Ok(text) => CommandResult::stdout(format_args!("{text}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        }
    }
}
