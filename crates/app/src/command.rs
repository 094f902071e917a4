//! Command parsing: turn one text line into a typed [`Command`].

use homedex_domain::error::{HomeDexError, UsageError};
use homedex_domain::field::DeviceField;
use homedex_domain::id::DeviceId;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Info,
    Show,
    Insert,
    Update(DeviceId),
    RemoveKey(DeviceId),
    Clear,
    Save,
    ExecuteScript(String),
    RemoveGreaterKey(DeviceId),
    RemoveLowerKey(DeviceId),
    /// Field names are validated when the command runs, so an unsupported
    /// field reports the list of valid choices rather than a usage line.
    PrintUniqueField(String),
    Exit,
}

/// Name, argument form, and description of every command, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "show this list of commands"),
    ("info", "print information about the collection"),
    ("show", "print every device, ordered by id"),
    ("insert", "read a new device and add it to the collection"),
    ("update <id>", "replace the device with the given id by a newly read one"),
    ("remove_key <id>", "remove the device with the given id"),
    ("clear", "remove every device"),
    ("save", "write the collection to the data file"),
    ("execute_script <file_name>", "run the commands listed in a script file"),
    ("remove_greater_key <id>", "remove every device whose id is greater than <id>"),
    ("remove_lower_key <id>", "remove every device whose id is lower than <id>"),
    (
        "print_unique_field <field_name>",
        "print the distinct values of devicetype, room, protocol, or manufacturer",
    ),
    ("exit", "leave without saving"),
];

impl Command {
    /// Parse one line. Tokens are separated by any whitespace; the command
    /// name is case-insensitive; tokens after the expected arguments are
    /// ignored.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDexError::UnknownCommand`] for an unrecognised name and
    /// [`HomeDexError::Usage`] when a required argument is missing or is not
    /// a valid id.
    pub fn parse(line: &str) -> Result<Option<Self>, HomeDexError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let arg = tokens.next();

        let command = match name.to_ascii_lowercase().as_str() {
            "help" => Self::Help,
            "info" => Self::Info,
            "show" => Self::Show,
            "insert" => Self::Insert,
            "update" => Self::Update(id_arg(arg, "update <id>")?),
            "remove_key" => Self::RemoveKey(id_arg(arg, "remove_key <id>")?),
            "clear" => Self::Clear,
            "save" => Self::Save,
            "execute_script" => {
                Self::ExecuteScript(text_arg(arg, "execute_script <file_name>")?)
            }
            "remove_greater_key" => {
                Self::RemoveGreaterKey(id_arg(arg, "remove_greater_key <id>")?)
            }
            "remove_lower_key" => Self::RemoveLowerKey(id_arg(arg, "remove_lower_key <id>")?),
            "print_unique_field" => Self::PrintUniqueField(text_arg(
                arg,
                "print_unique_field <field_name>, where field_name is one of: devicetype, room, protocol, manufacturer",
            )?),
            "exit" => Self::Exit,
            _ => return Err(HomeDexError::UnknownCommand(name.to_string())),
        };
        Ok(Some(command))
    }

    /// Resolve the field argument of [`Command::PrintUniqueField`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeDexError::UnsupportedField`] for names outside the
    /// whitelist.
    pub fn parse_field(name: &str) -> Result<DeviceField, HomeDexError> {
        Ok(name.parse::<DeviceField>()?)
    }
}

fn id_arg(arg: Option<&str>, usage: &'static str) -> Result<DeviceId, HomeDexError> {
    arg.and_then(|token| token.parse().ok())
        .ok_or_else(|| UsageError { usage }.into())
}

fn text_arg(arg: Option<&str>, usage: &'static str) -> Result<String, HomeDexError> {
    arg.map(str::to_string)
        .ok_or_else(|| UsageError { usage }.into())
}
