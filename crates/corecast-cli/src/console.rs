use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::SessionError;

/// Line-oriented operator boundary.
///
/// The session only ever talks to the operator through this trait, so the
/// same control flow runs against a terminal or a scripted test harness.
pub trait Console {
    /// Show `prompt` (no newline) and read one line without its line ending.
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Read a line, treating end of input as an interrupt.
pub fn ask<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<String, SessionError> {
    console.read_line(prompt)?.ok_or(SessionError::Interrupted)
}

/// Read lines until one is exactly `sentinel`, joining the rest with `\n`.
pub fn read_block<C: Console + ?Sized>(
    console: &mut C,
    sentinel: &str,
) -> Result<String, SessionError> {
    let mut lines = Vec::new();
    loop {
        let line = ask(console, "")?;
        if line == sentinel {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Console over the process's stdin and stdout.
pub struct StdConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !prompt.is_empty() {
            let mut out = self.stdout.lock();
            out.write_all(prompt.as_bytes())?;
            out.flush()?;
        }

        let mut buf = String::new();
        if self.stdin.lock().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.stdout.lock(), "{line}")
    }
}

/// Console fed from a fixed list of input lines. Everything written,
/// prompts included, is captured for inspection.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !prompt.is_empty() {
            self.output.push(prompt.to_string());
        }
        Ok(self.inputs.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}
