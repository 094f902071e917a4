//! In-memory port implementations shared by the unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::str::FromStr;

use homedex_domain::device::{ConnectionProtocol, Device, DeviceDraft, DeviceType, Room};
use homedex_domain::error::HomeDexError;
use homedex_domain::manufacturer::{Country, Manufacturer};
use homedex_domain::power::Power;
use homedex_domain::time::Date;
use rust_decimal::Decimal;

use crate::ports::{CommandInput, DeviceReader, Loaded, RecordSource, ScriptSource};
use crate::session::Session;
use crate::store::DeviceStore;

pub type TestSession = Session<InMemorySource, ScriptedReader, InMemoryScripts, Vec<u8>>;

#[derive(Default)]
pub struct InMemorySource {
    pub stored: RefCell<Option<Vec<Device>>>,
    pub corrupt: bool,
    pub read_only: bool,
}

impl RecordSource for InMemorySource {
    fn load(&self) -> Result<Loaded, HomeDexError> {
        if self.corrupt {
            return Err(HomeDexError::Storage("unexpected end of data".into()));
        }
        Ok(match self.stored.borrow().clone() {
            Some(devices) => Loaded::Records(devices),
            None => Loaded::Missing,
        })
    }

    fn save(&self, devices: &[Device]) -> Result<(), HomeDexError> {
        if self.read_only {
            return Err(HomeDexError::Storage("read-only file system".into()));
        }
        *self.stored.borrow_mut() = Some(devices.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[derive(Default)]
pub struct ScriptedReader {
    pub drafts: VecDeque<DeviceDraft>,
    pub commands: VecDeque<String>,
}

impl DeviceReader for ScriptedReader {
    fn read_device(&mut self) -> Result<DeviceDraft, HomeDexError> {
        self.drafts
            .pop_front()
            .ok_or_else(|| HomeDexError::Storage("input closed while reading a device".into()))
    }
}

impl CommandInput for ScriptedReader {
    fn read_command(&mut self) -> Result<Option<String>, HomeDexError> {
        Ok(self.commands.pop_front())
    }
}

#[derive(Default)]
pub struct InMemoryScripts {
    pub files: HashMap<String, Vec<String>>,
}

impl InMemoryScripts {
    pub fn with(mut self, name: &str, lines: &[&str]) -> Self {
        self.files.insert(
            name.to_string(),
            lines.iter().map(ToString::to_string).collect(),
        );
        self
    }
}

impl ScriptSource for InMemoryScripts {
    fn read_script(&self, name: &str) -> Result<Option<Vec<String>>, HomeDexError> {
        Ok(self.files.get(name).cloned())
    }
}

pub fn draft(name: &str, protocol: ConnectionProtocol) -> DeviceDraft {
    DeviceDraft::builder()
        .name(name)
        .manufacturer(Manufacturer::new("Aqara", Country::China, 2016, 1_000))
        .device_type(DeviceType::Sensor)
        .room(Room::Bedroom)
        .power(Power::new(0.5).unwrap())
        .price(Decimal::from_str("29.90").unwrap())
        .protocol(protocol)
        .installed_on(Date::from_ymd_opt(2024, 6, 1).unwrap())
        .feature("motion")
        .build()
        .unwrap()
}

pub fn session(drafts: Vec<DeviceDraft>, scripts: InMemoryScripts) -> TestSession {
    Session::new(
        DeviceStore::new(),
        InMemorySource::default(),
        ScriptedReader {
            drafts: drafts.into(),
            commands: VecDeque::new(),
        },
        scripts,
        Vec::new(),
    )
}

pub fn output(session: &TestSession) -> String {
    String::from_utf8(session.output().clone()).unwrap()
}
