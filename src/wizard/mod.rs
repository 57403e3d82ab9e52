//! Cascading selection wizard: context -> namespace -> pod -> container

use crate::client::ClusterQueries;
use crate::error::{PodctlError, Result};
use crate::prompt::{confirm, SelectPrompt};
use tracing::debug;

/// The four choices a completed wizard run produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub context: String,
    pub namespace: String,
    pub pod: String,
    pub container: String,
}

/// First stage: pick a kubeconfig context
pub fn choose_context(prompt: &dyn SelectPrompt, contexts: &[String]) -> Result<String> {
    choose(prompt, "Cluster", "contexts", contexts)
}

/// Remaining stages: namespace, pod, container, each scoped by the
/// selections before it. Issues one list call per stage, in order.
pub async fn choose_target(
    prompt: &dyn SelectPrompt,
    queries: &dyn ClusterQueries,
    context: String,
) -> Result<Selection> {
    let namespaces = queries.list_namespaces().await?;
    let namespace = choose(prompt, "Namespace", "namespaces", &namespaces)?;

    let pods = queries.list_pods(&namespace).await?;
    let pod = choose(prompt, "Pod", "pods", &pods)?;

    let containers = queries.list_containers(&namespace, &pod).await?;
    let container = choose(prompt, "Container", "containers", &containers)?;

    debug!(%context, %namespace, %pod, %container, "selection complete");

    Ok(Selection {
        context,
        namespace,
        pod,
        container,
    })
}

/// Run one selection stage over a fixed option list
fn choose(
    prompt: &dyn SelectPrompt,
    title: &str,
    kind: &'static str,
    options: &[String],
) -> Result<String> {
    if options.is_empty() {
        return Err(PodctlError::NoOptions { kind });
    }

    let chosen = prompt.select(title, options)?;
    confirm(&chosen);
    Ok(chosen)
}
