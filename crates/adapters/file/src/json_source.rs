//! JSON record source: the whole collection in one pretty-printed document.
//!
//! ```json
//! { "devices": [ { "id": 1, "name": "Hue Bulb", ... } ] }
//! ```

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use homedex_app::ports::{Loaded, RecordSource};
use homedex_domain::device::Device;
use homedex_domain::error::HomeDexError;
use serde::{Deserialize, Serialize};

use crate::error::FileError;

#[derive(Deserialize)]
struct Document {
    devices: Vec<Device>,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    devices: &'a [Device],
}

/// [`RecordSource`] backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling file the new contents are written to before replacing the target.
    fn staging_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> FileError {
        FileError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read(&self) -> Result<Loaded, FileError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Loaded::Missing),
            Err(err) => return Err(self.io_error(err)),
        };
        let document: Document =
            serde_json::from_str(&content).map_err(|source| FileError::Decode {
                path: self.path.clone(),
                source,
            })?;
        Ok(Loaded::Records(document.devices))
    }

    fn write(&self, devices: &[Device]) -> Result<(), FileError> {
        let mut content = serde_json::to_string_pretty(&DocumentRef { devices }).map_err(
            |source| FileError::Encode {
                path: self.path.clone(),
                source,
            },
        )?;
        content.push('\n');

        let staging = self.staging_path();
        fs::write(&staging, content).map_err(|err| self.io_error(err))?;
        if let Err(err) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(self.io_error(err));
        }
        Ok(())
    }
}

impl RecordSource for JsonFileSource {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Loaded, HomeDexError> {
        let loaded = self.read()?;
        if let Loaded::Records(devices) = &loaded {
            tracing::debug!(count = devices.len(), "decoded data file");
        }
        Ok(loaded)
    }

    #[tracing::instrument(skip(self, devices), fields(path = %self.path.display(), count = devices.len()))]
    fn save(&self, devices: &[Device]) -> Result<(), HomeDexError> {
        self.write(devices)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use homedex_domain::device::{ConnectionProtocol, DeviceDraft, DeviceType, Room};
    use homedex_domain::id::DeviceId;
    use homedex_domain::manufacturer::{Country, Manufacturer};
    use homedex_domain::power::Power;
    use homedex_domain::time::{self, Date};
    use rust_decimal::Decimal;

    use super::*;

    fn device(id: u64, name: &str, website: Option<&str>) -> Device {
        let mut manufacturer = Manufacturer::new("Netatmo", Country::Usa, 2011, 250);
        if let Some(website) = website {
            manufacturer = manufacturer.with_website(website);
        }
        let draft = DeviceDraft::builder()
            .name(name)
            .manufacturer(manufacturer)
            .device_type(DeviceType::Thermostat)
            .room(Room::LivingRoom)
            .power(Power::new(1.25).unwrap())
            .price(Decimal::from_str("179.00").unwrap())
            .warranty_years(3)
            .protocol(ConnectionProtocol::Thread)
            .installed_on(Date::from_ymd_opt(2023, 11, 2).unwrap())
            .active(false)
            .feature("schedule")
            .feature("eco")
            .feature("schedule")
            .build()
            .unwrap();
        Device::from_draft(DeviceId::from_u64(id), draft, time::now())
    }

    #[test]
    fn should_report_missing_when_file_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("devices.json"));
        assert_eq!(source.load().unwrap(), Loaded::Missing);
    }

    #[test]
    fn should_reproduce_saved_collection_field_for_field() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("devices.json"));
        let devices = vec![
            device(1, "Living room thermostat", Some("https://netatmo.com")),
            device(4, "Hall thermostat", None),
        ];

        source.save(&devices).unwrap();

        assert_eq!(source.load().unwrap(), Loaded::Records(devices));
    }

    #[test]
    fn should_reload_full_precision_power_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("devices.json"));
        let mut precise = device(1, "Heat pump", None);
        precise.power = Power::new(911.676_072_677_620_1).unwrap();
        let devices = vec![precise];

        source.save(&devices).unwrap();

        assert_eq!(source.load().unwrap(), Loaded::Records(devices));
    }

    #[test]
    fn should_overwrite_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("devices.json"));
        source.save(&[device(1, "Old", None)]).unwrap();

        source.save(&[]).unwrap();

        assert_eq!(source.load().unwrap(), Loaded::Records(Vec::new()));
        assert!(!source.staging_path().exists());
    }

    #[test]
    fn should_encode_deterministically() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("devices.json"));
        let devices = vec![device(2, "Thermostat", None)];

        source.save(&devices).unwrap();
        let first = fs::read_to_string(&source.path).unwrap();
        let Loaded::Records(decoded) = source.load().unwrap() else {
            panic!("expected records");
        };
        source.save(&decoded).unwrap();
        let second = fs::read_to_string(&source.path).unwrap();

        assert_eq!(first, second);
        assert!(first.contains("\"device_type\": \"THERMOSTAT\""));
    }

    #[test]
    fn should_return_storage_error_when_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devices.json");
        fs::write(&path, "{ \"devices\": [ { \"id\": 1 ").unwrap();

        let result = JsonFileSource::new(&path).load();

        assert!(matches!(result, Err(HomeDexError::Storage(_))));
    }

    #[test]
    fn should_reject_negative_power_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("devices.json"));
        source.save(&[device(1, "Thermostat", None)]).unwrap();
        let content = fs::read_to_string(&source.path)
            .unwrap()
            .replace("\"power\": 1.25", "\"power\": -1.25");
        fs::write(&source.path, content).unwrap();

        let err = source.load().unwrap_err();

        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn should_report_io_error_when_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("nested").join("devices.json"));

        let err = source.save(&[]).unwrap_err();

        assert!(err.to_string().starts_with("cannot access "));
    }

    #[test]
    fn should_describe_itself_by_path() {
        let source = JsonFileSource::new("data/devices.json");
        assert_eq!(source.describe(), "data/devices.json");
    }
}
