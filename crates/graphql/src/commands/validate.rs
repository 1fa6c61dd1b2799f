use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        help="Path to a JSON file describing the operation, or `-` to read \
             the description from stdin.",
        name="FILE",
    )]
    input: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let operation = match super::load_operation(&self.input).await {
            Ok(operation) => operation,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        if let Err(e) = operation.validate() {
            log::trace!("Validation failed: {e:?}");
            return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} Operation validated successfully:\n",
                "  * Kind: {}\n",
                "  * Name: {}\n",
                "  * Validated {} top-level selections ({} in total).",
            ),
            output_utils::GREEN_CHECK,
            operation.kind().to_ascii_lowercase(),
            operation.name().unwrap_or("<anonymous>"),
            operation.selections().len(),
            operation.arena().len(),
        ))
    }
}
