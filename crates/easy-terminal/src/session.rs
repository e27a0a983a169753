//! Read-eval-print loop around a [`CommandRegistry`].

use std::io::{self, BufRead, Write};

use easy_types::error::ErrorKind;

use crate::interpreter::{CommandRegistry, Dispatch, Environment};

/// Router lifecycle. `Terminated` is reached only through the quit verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    Running,
    Terminated,
}

/// An interactive session: one line in, one result out.
pub struct Session<'r> {
    registry: &'r CommandRegistry,
    state: RouterState,
}

impl<'r> Session<'r> {
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self {
            registry,
            state: RouterState::Running,
        }
    }

    pub fn state(&self) -> RouterState {
        self.state
    }

    /// Dispatch one line and write its result to `out`.
    pub fn handle_line<W: Write>(
        &mut self,
        line: &str,
        env: &Environment<'_>,
        out: &mut W,
    ) -> io::Result<RouterState> {
        if self.state == RouterState::Terminated {
            return Ok(self.state);
        }
        match self.registry.dispatch(line, env) {
            Dispatch::Empty => {},
            Dispatch::Quit => {
                writeln!(out, "{}", env.config.farewell)?;
                self.state = RouterState::Terminated;
            },
            Dispatch::Completed(Ok(output)) => {
                if let Some(text) = output.render() {
                    writeln!(out, "{text}")?;
                }
            },
            Dispatch::Completed(Err(e)) => {
                if e.kind() == ErrorKind::Collaborator {
                    log::warn!("{}: {e}", line.trim());
                }
                writeln!(out, "{e}")?;
            },
        }
        Ok(self.state)
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
        env: &Environment<'_>,
    ) -> io::Result<()> {
        writeln!(out, "{}", env.config.banner)?;
        let mut line = String::new();
        while self.state == RouterState::Running {
            write!(out, "{}", env.config.prompt)?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                log::info!("end of input, leaving session");
                writeln!(out)?;
                break;
            }
            self.handle_line(&line, env, &mut out)?;
        }
        out.flush()
    }
}
