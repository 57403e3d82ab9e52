//! Shell handoff - delegate the terminal to kubectl exec

use crate::error::{PodctlError, Result};
use crate::wizard::Selection;
use std::process::{Command, Stdio};
use tracing::debug;

/// Build the kubectl argument vector for an interactive exec session
pub fn exec_args(selection: &Selection, shell: &str) -> Vec<String> {
    vec![
        "exec".to_string(),
        "-it".to_string(),
        selection.pod.clone(),
        "-c".to_string(),
        selection.container.clone(),
        format!("--context={}", selection.context),
        "-n".to_string(),
        selection.namespace.clone(),
        "--".to_string(),
        shell.to_string(),
    ]
}

/// Hand the terminal to kubectl exec for the selected container
pub fn run_exec(selection: &Selection, shell: &str) -> Result<()> {
    run_exec_with("kubectl", &exec_args(selection, shell), selection)
}

/// Spawn a program bound to this process's own streams and wait for the
/// session to end. Closing stdin ends the session normally; only a
/// non-zero exit from the program is a failure, and its code is carried
/// in the error.
pub fn run_exec_with(program: &str, args: &[String], selection: &Selection) -> Result<()> {
    debug!(program, ?args, "spawning exec session");

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        let code = status.code().unwrap_or(1);
        return Err(PodctlError::ShellExit { code });
    }

    println!(
        "Exited out of \"{} / {}\"",
        selection.pod, selection.container
    );
    Ok(())
}
