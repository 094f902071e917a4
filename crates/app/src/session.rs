//! Session: owns the store and the ports, and drives commands through the
//! dispatcher, either interactively or from a script.

use std::fmt::Display;
use std::io::Write;

use homedex_domain::error::HomeDexError;

use crate::ports::{CommandInput, DeviceReader, Loaded, RecordSource, ScriptSource};
use crate::store::DeviceStore;

/// What the caller should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// `exit` was requested; stop reading commands.
    Exit,
}

/// One user session: a device store plus everything it talks to.
///
/// - `S` persists the collection ([`RecordSource`])
/// - `R` produces new device records ([`DeviceReader`])
/// - `X` resolves script files ([`ScriptSource`])
/// - `O` receives every reply and error line
pub struct Session<S, R, X, O> {
    pub(crate) store: DeviceStore,
    pub(crate) source: S,
    pub(crate) reader: R,
    pub(crate) scripts: X,
    out: O,
    running_scripts: Vec<String>,
}

impl<S, R, X, O> Session<S, R, X, O>
where
    S: RecordSource,
    R: DeviceReader,
    X: ScriptSource,
    O: Write,
{
    /// Create a session around an existing store.
    pub fn new(store: DeviceStore, source: S, reader: R, scripts: X, out: O) -> Self {
        Self {
            store,
            source,
            reader,
            scripts,
            out,
            running_scripts: Vec::new(),
        }
    }

    #[must_use]
    pub fn store(&self) -> &DeviceStore {
        &self.store
    }

    #[must_use]
    pub fn output(&self) -> &O {
        &self.out
    }

    /// Replace the store contents with whatever the record source holds.
    ///
    /// A missing data file and a corrupt one both leave the store empty; the
    /// session keeps running in either case.
    #[tracing::instrument(skip(self))]
    pub fn load(&mut self) {
        let location = self.source.describe();
        match self.source.load() {
            Ok(Loaded::Missing) => {
                tracing::info!(%location, "no data file, starting empty");
                self.store.clear();
                self.emit(format_args!(
                    "no data file found at {location}, starting with an empty collection"
                ));
            }
            Ok(Loaded::Records(devices)) => {
                let report = self.store.load(devices);
                tracing::info!(%location, loaded = report.loaded, skipped = report.skipped, "loaded collection");
                self.emit(format_args!("loaded {} device(s) from {location}", report.loaded));
                if report.skipped > 0 {
                    self.emit(format_args!(
                        "skipped {} record(s) with an already used id",
                        report.skipped
                    ));
                }
            }
            Err(err) => {
                tracing::warn!(%location, error = %err, "failed to load collection");
                self.store.clear();
                self.emit(format_args!(
                    "error: could not load {location}: {err}; starting with an empty collection"
                ));
            }
        }
    }

    /// Read and dispatch command lines until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns the error raised by the command input itself; command failures
    /// are reported on the output and never end the loop.
    pub fn run_interactive(&mut self) -> Result<(), HomeDexError>
    where
        R: CommandInput,
    {
        while let Some(line) = self.reader.read_command()? {
            if line.trim().is_empty() {
                continue;
            }
            if self.dispatch(&line) == Flow::Exit {
                tracing::info!("exit requested");
                return Ok(());
            }
        }
        tracing::info!("input closed");
        Ok(())
    }

    /// Replay the script `name` line by line through the dispatcher.
    ///
    /// Blank lines and `#` comments are skipped, every executed line is
    /// echoed first, and a failing line does not stop the ones after it. An
    /// `exit` line stops the script and is handed back to the caller.
    #[tracing::instrument(skip(self))]
    pub fn run_script(&mut self, name: &str) -> Flow {
        let key = self.scripts.canonical_name(name);
        if self.running_scripts.contains(&key) {
            self.report(&HomeDexError::RecursiveScript(name.to_string()));
            return Flow::Continue;
        }

        let lines = match self.scripts.read_script(name) {
            Ok(Some(lines)) => lines,
            Ok(None) => {
                self.emit(format_args!("error: script file '{name}' not found"));
                return Flow::Continue;
            }
            Err(err) => {
                self.report(&err);
                return Flow::Continue;
            }
        };

        self.running_scripts.push(key);
        let mut flow = Flow::Continue;
        for line in &lines {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.emit(format_args!("$ {line}"));
            if self.dispatch(line) == Flow::Exit {
                flow = Flow::Exit;
                break;
            }
        }
        self.running_scripts.pop();
        flow
    }

    pub(crate) fn emit(&mut self, text: impl Display) {
        if let Err(err) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %err, "failed to write session output");
        }
    }

    pub(crate) fn report(&mut self, err: &HomeDexError) {
        tracing::debug!(error = %err, "command failed");
        self.emit(format_args!("error: {err}"));
    }
}
