//! Command dispatcher: execute one parsed command against the session.

use std::io::Write;

use homedex_domain::error::{HomeDexError, NotFoundError};
use homedex_domain::id::DeviceId;

use crate::command::{COMMANDS, Command};
use crate::ports::{DeviceReader, RecordSource, ScriptSource};
use crate::session::{Flow, Session};

impl<S, R, X, O> Session<S, R, X, O>
where
    S: RecordSource,
    R: DeviceReader,
    X: ScriptSource,
    O: Write,
{
    /// Parse and execute one line.
    ///
    /// Every parse or execution error is written to the output as a single
    /// `error: ...` line; only `exit` yields [`Flow::Exit`].
    pub fn dispatch(&mut self, line: &str) -> Flow {
        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command),
            None => Ok(Flow::Continue),
        });
        match result {
            Ok(flow) => flow,
            Err(err) => {
                self.report(&err);
                Flow::Continue
            }
        }
    }

    /// Execute an already parsed command.
    ///
    /// # Errors
    ///
    /// Propagates the error of the failing store, reader, or source call.
    #[tracing::instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> Result<Flow, HomeDexError> {
        match command {
            Command::Help => self.help(),
            Command::Info => self.info(),
            Command::Show => self.show(),
            Command::Insert => self.insert()?,
            Command::Update(id) => self.update(id)?,
            Command::RemoveKey(id) => {
                self.store.remove_by_id(id)?;
                self.emit(format_args!("device {id} removed"));
            }
            Command::Clear => {
                let count = self.store.clear();
                self.emit(format_args!("collection cleared, {count} device(s) removed"));
            }
            Command::Save => self.save()?,
            Command::ExecuteScript(name) => return Ok(self.run_script(&name)),
            Command::RemoveGreaterKey(id) => {
                let count = self.store.remove_greater_than(id);
                self.emit(format_args!("removed {count} device(s) with id greater than {id}"));
            }
            Command::RemoveLowerKey(id) => {
                let count = self.store.remove_lower_than(id);
                self.emit(format_args!("removed {count} device(s) with id lower than {id}"));
            }
            Command::PrintUniqueField(name) => self.print_unique_field(&name)?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn help(&mut self) {
        let width = COMMANDS.iter().map(|(form, _)| form.len()).max().unwrap_or(0);
        let lines = COMMANDS
            .iter()
            .map(|(form, description)| format!("  {form:<width$}  {description}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.emit(format_args!("available commands:\n{lines}"));
    }

    fn info(&mut self) {
        let text = format!(
            "collection:     devices ordered by id\n\
             initialized at: {}\n\
             devices:        {}\n\
             next id:        {}\n\
             data file:      {}",
            self.store.initialized_at().to_rfc3339(),
            self.store.len(),
            self.store.next_id(),
            self.source.describe(),
        );
        self.emit(text);
    }

    fn show(&mut self) {
        if self.store.is_empty() {
            self.emit("collection is empty");
            return;
        }
        let text = self
            .store
            .list_ordered_by_id()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n");
        self.emit(text);
    }

    fn insert(&mut self) -> Result<(), HomeDexError> {
        let draft = self.reader.read_device()?;
        let device = self.store.create(draft);
        let id = self.store.insert(device)?;
        tracing::info!(%id, "device inserted");
        self.emit(format_args!("device inserted with id {id}"));
        Ok(())
    }

    fn update(&mut self, id: DeviceId) -> Result<(), HomeDexError> {
        if !self.store.contains(id) {
            return Err(NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into());
        }
        let draft = self.reader.read_device()?;
        self.store.update(id, draft)?;
        tracing::info!(%id, "device updated");
        self.emit(format_args!("device {id} updated"));
        Ok(())
    }

    fn save(&mut self) -> Result<(), HomeDexError> {
        let devices = self.store.snapshot();
        self.source.save(&devices)?;
        let location = self.source.describe();
        tracing::info!(count = devices.len(), %location, "collection saved");
        self.emit(format_args!("saved {} device(s) to {location}", devices.len()));
        Ok(())
    }

    fn print_unique_field(&mut self, name: &str) -> Result<(), HomeDexError> {
        let field = Command::parse_field(name)?;
        let values = self.store.distinct_values(field);
        if values.is_empty() {
            self.emit(format_args!("no {field} values, the collection is empty"));
            return Ok(());
        }
        let lines = values
            .iter()
            .map(|value| format!("  {value}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.emit(format_args!("distinct {field} values:\n{lines}"));
        Ok(())
    }
}
