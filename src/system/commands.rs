use async_trait::async_trait;
use std::error::Error;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command as TokioCommand;
use tokio::time;

use crate::zfs::ZfsError;

pub type CommandResult = Result<String, Box<dyn Error + Send + Sync>>;

/// Abstraction for command execution to enable testing without real commands
#[async_trait]
pub trait CommandExecutor {
    async fn execute(&self, command: &str, args: &[&str]) -> CommandResult;
    async fn execute_with_timeout(
        &self,
        command: &str,
        args: &[&str],
        timeout_duration: Duration,
    ) -> CommandResult;
}

/// Real command executor backed by tokio::process
pub struct RealCommandExecutor;

#[async_trait]
impl CommandExecutor for RealCommandExecutor {
    async fn execute(&self, command: &str, args: &[&str]) -> CommandResult {
        let output = TokioCommand::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;

        if output.status.success() {
            Ok(String::from_utf8(output.stdout)?)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(format!("Command failed: {}", stderr.trim()).into())
        }
    }

    async fn execute_with_timeout(
        &self,
        command: &str,
        args: &[&str],
        timeout_duration: Duration,
    ) -> CommandResult {
        let result = time::timeout(timeout_duration, self.execute(command, args)).await;
        match result {
            Ok(output) => output,
            Err(_) => Err(Box::new(ZfsError::timeout_error(command, timeout_duration))),
        }
    }
}

/// Demo command executor that returns predefined responses
pub struct DemoCommandExecutor;

impl DemoCommandExecutor {
    fn get_demo_response(&self, command: &str, args: &[&str]) -> Option<&'static str> {
        match (command, args) {
            ("modinfo" | "/sbin/modinfo", ["-F", "parm", "zfs"]) => {
                Some(include_str!("../demo/modinfo_parm.txt"))
            }
            _ => None,
        }
    }
}

#[async_trait]
impl CommandExecutor for DemoCommandExecutor {
    async fn execute(&self, command: &str, args: &[&str]) -> CommandResult {
        if let Some(response) = self.get_demo_response(command, args) {
            Ok(response.to_string())
        } else {
            Err(format!("Demo: Command not mocked: {} {:?}", command, args).into())
        }
    }

    async fn execute_with_timeout(
        &self,
        command: &str,
        args: &[&str],
        _timeout: Duration,
    ) -> CommandResult {
        self.execute(command, args).await
    }
}
