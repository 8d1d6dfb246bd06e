use std::io::{BufRead, BufReader, Error, ErrorKind};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::cmd::command::CommandError::{ExecutionError, ExitStatusError, TimeoutError};

use derivative::Derivative;
use itertools::Itertools;
use timeout_readwrite::TimeoutReader;

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("Error while executing command")]
    ExecutionError(#[from] Error),

    #[error("Command terminated with a non success exit status code: {0}")]
    ExitStatusError(ExitStatus),

    #[error("Command killed due to timeout: {0}")]
    TimeoutError(String),
}

/// External binary invocation (kubectl) with its arguments and environment.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct ToolCommand {
    binary: String,
    args: Vec<String>,
    /// may carry AWS profile or credentials, never printed
    #[derivative(Debug = "ignore")]
    envs: Vec<(String, String)>,
}

impl ToolCommand {
    pub fn new<P: AsRef<Path>>(binary: P, args: &[&str], envs: &[(&str, &str)]) -> ToolCommand {
        ToolCommand {
            binary: binary.as_ref().to_string_lossy().to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            envs: envs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }

    fn kill(cmd_handle: &mut Child) {
        let _ = cmd_handle
            .kill()
            .map(|_| cmd_handle.wait())
            .map_err(|err| error!("Cannot kill process {:?} {}", cmd_handle, err));
    }

    /// Runs the command, sending each stdout and stderr line to the given callbacks.
    /// The process is killed once `timeout` is elapsed.
    pub fn exec_with_timeout<STDOUT, STDERR>(
        &self,
        stdout_output: &mut STDOUT,
        stderr_output: &mut STDERR,
        timeout: Duration,
    ) -> Result<(), CommandError>
    where
        STDOUT: FnMut(String),
        STDERR: FnMut(String),
    {
        info!("command: {} {}", self.binary, self.args.iter().join(" "));
        let started_at = Instant::now();
        let has_timed_out = || started_at.elapsed() >= timeout;

        let mut command = Command::new(&self.binary);
        command.args(&self.args);
        self.envs.iter().for_each(|(k, v)| {
            command.env(k, v);
        });

        let mut cmd_handle = command
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(ExecutionError)?;

        let stdout = cmd_handle
            .stdout
            .take()
            .ok_or_else(|| ExecutionError(Error::new(ErrorKind::BrokenPipe, "Cannot get stdout for command")))?;
        let mut stdout_reader = BufReader::new(TimeoutReader::new(stdout, Duration::from_secs(1))).lines();

        let stderr = cmd_handle
            .stderr
            .take()
            .ok_or_else(|| ExecutionError(Error::new(ErrorKind::BrokenPipe, "Cannot get stderr for command")))?;
        // don't block on stderr
        let mut stderr_reader = BufReader::new(TimeoutReader::new(stderr, Duration::from_secs(0))).lines();

        let mut stdout_closed = false;
        let mut stderr_closed = false;
        while (!stdout_closed || !stderr_closed) && !has_timed_out() {
            while !stdout_closed && !has_timed_out() {
                match stdout_reader.next() {
                    None => stdout_closed = true,
                    Some(Err(ref err)) if err.kind() == ErrorKind::TimedOut => break,
                    Some(Ok(line)) => stdout_output(line),
                    Some(Err(err)) => {
                        error!("Error on stdout of cmd {}: {:?}", self.binary, err);
                        stdout_closed = true;
                    }
                }
            }

            while !stderr_closed && !has_timed_out() {
                match stderr_reader.next() {
                    None => stderr_closed = true,
                    Some(Err(ref err)) if err.kind() == ErrorKind::TimedOut => break,
                    Some(Ok(line)) => stderr_output(line),
                    Some(Err(err)) => {
                        error!("Error on stderr of cmd {}: {:?}", self.binary, err);
                        stderr_closed = true;
                    }
                }
            }
        }

        let exit_status = loop {
            match cmd_handle.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if has_timed_out() => {
                    let msg = format!(
                        "Killing process {} due to timeout {}s reached",
                        self.binary,
                        timeout.as_secs()
                    );
                    warn!("{}", msg);
                    Self::kill(&mut cmd_handle);
                    return Err(TimeoutError(msg));
                }
                Ok(None) => std::thread::sleep(Duration::from_millis(100)),
                Err(err) => return Err(ExecutionError(err)),
            }
        };

        if !exit_status.success() {
            debug!(
                "command: {} terminated with error exit status {:?}",
                self.binary, exit_status
            );
            return Err(ExitStatusError(exit_status));
        }

        Ok(())
    }
}
