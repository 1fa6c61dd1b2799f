mod build;
mod validate;

use crate::Cli;
use crate::CommandResult;
use crate::description::OperationDescription;
use anyhow::Context;
use build::BuildCmd;
use libgraphql_query_builder::Operation;
use std::path::Path;
use tokio::io::AsyncReadExt;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Build an operation from a JSON description and print it.
    Build(Box<BuildCmd>),

    /// Build an operation from a JSON description and check it without
    /// printing it.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Build(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

/// Read an operation description from `input` (or stdin when `input` is
/// `-`) and assemble it into an [`Operation`].
///
/// The returned operation has not been validated yet.
pub(crate) async fn load_operation(input: &Path) -> anyhow::Result<Operation> {
    let source = if input == Path::new("-") {
        log::debug!("Reading operation description from stdin...");
        let mut source = String::new();
        tokio::io::stdin()
            .read_to_string(&mut source)
            .await
            .context("failed to read operation description from stdin")?;
        source
    } else {
        log::debug!("Reading operation description from {input:#?}...");
        tokio::fs::read_to_string(input)
            .await
            .with_context(|| format!("failed to read {input:#?}"))?
    };
    log::trace!("Read {} bytes of operation description.", source.len());

    let description: OperationDescription = serde_json::from_str(&source)
        .context("malformed operation description")?;
    Ok(description.into_operation()?)
}
