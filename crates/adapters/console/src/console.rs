//! Console: prompt-and-read over any `BufRead`/`Write` pair.

use std::io::{BufRead, Write};
use std::str::FromStr;

use homedex_app::ports::{CommandInput, DeviceReader};
use homedex_domain::device::{ConnectionProtocol, DeviceDraft, DeviceType, Room};
use homedex_domain::error::{HomeDexError, ValidationError};
use homedex_domain::manufacturer::{Country, Manufacturer};
use homedex_domain::power::Power;
use homedex_domain::time::{DATE_FORMAT, Date};
use rust_decimal::Decimal;

use crate::error::ConsoleError;

const COMMAND_PROMPT: &str = "> ";

/// Interactive terminal adapter.
///
/// Every field is asked for until a valid answer arrives; only the end of
/// input aborts a record.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and return the trimmed answer, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] when the terminal cannot be read or written.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until `parse` accepts the answer.
    fn field<T>(
        &mut self,
        label: &'static str,
        parse: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, ConsoleError> {
        let question = format!("{label}: ");
        loop {
            let answer = self.ask(&question)?.ok_or(ConsoleError::Closed(label))?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(field = label, error = %err, "rejected console input");
                    writeln!(self.output, "  {err}, please try again")?;
                }
            }
        }
    }

    fn read_draft(&mut self) -> Result<DeviceDraft, ConsoleError> {
        let name = self.field("name", non_empty)?;

        let maker_name = self.field("manufacturer name", non_empty)?;
        let country = self.field("manufacturer country", choice::<Country>)?;
        let founded: i32 = self.field("foundation year", |s| number(s, "foundation year"))?;
        let employees: i64 = self.field("employee count", |s| number(s, "employee count"))?;
        let website = self.field("website (blank for none)", |s| Ok(s.to_string()))?;
        let manufacturer =
            Manufacturer::new(maker_name, country, founded, employees).with_website(website);

        let device_type = self.field("device type", choice::<DeviceType>)?;
        let room = self.field("room", choice::<Room>)?;
        let power = self.field("power consumption (W)", |s| {
            Power::new(number(s, "power consumption")?)
        })?;
        let price = self.field("price", |s| number::<Decimal>(s, "price"))?;
        let warranty_years: u32 = self.field("warranty (years)", |s| number(s, "warranty"))?;
        let protocol = self.field("connection protocol", choice::<ConnectionProtocol>)?;
        let installed_on = self.field("installation date (YYYY-MM-DD)", date)?;
        let active = self.field("active (yes/no)", flag)?;

        let mut builder = DeviceDraft::builder()
            .name(name)
            .manufacturer(manufacturer)
            .device_type(device_type)
            .room(room)
            .power(power)
            .price(price)
            .warranty_years(warranty_years)
            .protocol(protocol)
            .installed_on(installed_on)
            .active(active);

        writeln!(self.output, "features, one per line (blank line to finish)")?;
        loop {
            match self.ask("  feature: ")? {
                Some(feature) if !feature.is_empty() => builder = builder.feature(feature),
                _ => break,
            }
        }

        Ok(builder.build()?)
    }
}

impl<R: BufRead, W: Write> DeviceReader for Console<R, W> {
    fn read_device(&mut self) -> Result<DeviceDraft, HomeDexError> {
        Ok(self.read_draft()?)
    }
}

impl<R: BufRead, W: Write> CommandInput for Console<R, W> {
    fn read_command(&mut self) -> Result<Option<String>, HomeDexError> {
        Ok(self.ask(COMMAND_PROMPT)?)
    }
}

fn non_empty(input: &str) -> Result<String, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(input.to_string())
}

fn choice<T>(input: &str) -> Result<T, ValidationError>
where
    T: FromStr<Err = ValidationError>,
{
    input.parse()
}

fn number<T: FromStr>(input: &str, field: &'static str) -> Result<T, ValidationError> {
    input.parse().map_err(|_| ValidationError::InvalidValue {
        field,
        value: input.to_string(),
        expected: "a number",
    })
}

fn date(input: &str) -> Result<Date, ValidationError> {
    Date::parse_from_str(input, DATE_FORMAT).map_err(|_| ValidationError::InvalidValue {
        field: "installation date",
        value: input.to_string(),
        expected: "a date formatted as YYYY-MM-DD",
    })
}

fn flag(input: &str) -> Result<bool, ValidationError> {
    match input.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        _ => Err(ValidationError::InvalidValue {
            field: "active flag",
            value: input.to_string(),
            expected: "yes or no",
        }),
    }
}
