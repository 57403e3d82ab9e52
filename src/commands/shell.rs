//! Interactive pod shell flow - the four prompts plus the handoff

use crate::client::{create_client, list_contexts, KubeQueries};
use crate::commands::exec::run_exec;
use crate::error::Result;
use crate::prompt::TermPrompt;
use crate::wizard::{choose_context, choose_target};

/// Walk the four selection stages, then hand the terminal to the shell
pub async fn run_shell(shell: &str) -> Result<()> {
    let prompt = TermPrompt;

    let contexts = list_contexts()?;
    let context = choose_context(&prompt, &contexts)?;

    let client = create_client(&context).await?;
    let queries = KubeQueries::new(client);

    let selection = choose_target(&prompt, &queries, context).await?;

    run_exec(&selection, shell)
}
