//! Collection store: the in-memory, id-indexed set of devices.

use std::collections::BTreeMap;

use homedex_domain::device::{ConnectionProtocol, Device, DeviceDraft, DeviceType, Room};
use homedex_domain::error::{DuplicateError, HomeDexError, NotFoundError};
use homedex_domain::field::DeviceField;
use homedex_domain::id::DeviceId;
use homedex_domain::time::{self, Timestamp};

const ENTITY: &str = "Device";

/// Outcome of replacing the store contents with decoded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Records now held by the store.
    pub loaded: usize,
    /// Records dropped because an earlier record had the same id.
    pub skipped: usize,
}

/// Owns every device of a session and the counter that names new ones.
///
/// Members are keyed by [`Device::key`]; iteration is always ascending by id.
#[derive(Debug)]
pub struct DeviceStore {
    devices: BTreeMap<DeviceId, Device>,
    next_id: DeviceId,
    initialized_at: Timestamp,
}

impl Default for DeviceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceStore {
    /// Create an empty store whose first assigned id is [`DeviceId::FIRST`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            devices: BTreeMap::new(),
            next_id: DeviceId::FIRST,
            initialized_at: time::now(),
        }
    }

    /// Turn a draft into a device with the next id and the current time.
    ///
    /// The counter advances on every call, whether or not the device is
    /// inserted afterwards.
    pub fn create(&mut self, draft: DeviceDraft) -> Device {
        let id = self.next_id;
        self.next_id = id.next();
        tracing::debug!(%id, "assigned device id");
        Device::from_draft(id, draft, time::now())
    }

    /// Add a device.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDexError::Duplicate`] when a member already has the same
    /// id; the store is left unchanged.
    #[tracing::instrument(skip(self, device), fields(id = %device.key()))]
    pub fn insert(&mut self, device: Device) -> Result<DeviceId, HomeDexError> {
        let id = device.key();
        if self.devices.contains_key(&id) {
            return Err(DuplicateError {
                entity: ENTITY,
                id: id.to_string(),
            }
            .into());
        }
        self.devices.insert(id, device);
        Ok(id)
    }

    /// Replace the member `id` with new data, keeping its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDexError::NotFound`] when no member has `id`; the store
    /// is left unchanged.
    #[tracing::instrument(skip(self, draft))]
    pub fn update(&mut self, id: DeviceId, draft: DeviceDraft) -> Result<&Device, HomeDexError> {
        let old = self.devices.remove(&id).ok_or_else(|| not_found(id))?;
        let device = Device::from_draft(id, draft, old.created_at);
        Ok(self.devices.entry(id).or_insert(device))
    }

    /// Remove the member `id`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDexError::NotFound`] when no member has `id`.
    #[tracing::instrument(skip(self))]
    pub fn remove_by_id(&mut self, id: DeviceId) -> Result<Device, HomeDexError> {
        self.devices.remove(&id).ok_or_else(|| not_found(id))
    }

    /// Remove every member, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.devices.len();
        self.devices.clear();
        tracing::debug!(count, "cleared store");
        count
    }

    /// Remove every member whose id is strictly greater than `id`.
    #[tracing::instrument(skip(self))]
    pub fn remove_greater_than(&mut self, id: DeviceId) -> usize {
        if id.as_u64() == u64::MAX {
            return 0;
        }
        let removed = self.devices.split_off(&id.next());
        removed.len()
    }

    /// Remove every member whose id is strictly lower than `id`.
    #[tracing::instrument(skip(self))]
    pub fn remove_lower_than(&mut self, id: DeviceId) -> usize {
        let kept = self.devices.split_off(&id);
        let removed = std::mem::replace(&mut self.devices, kept);
        removed.len()
    }

    /// Iterate over every member in ascending id order.
    ///
    /// The iterator borrows the store; call again to restart.
    pub fn list_ordered_by_id(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }

    /// Distinct values of `field` across all members.
    ///
    /// Enumerated fields come back in declaration order of their vocabulary;
    /// manufacturer names in first-seen order walking members by ascending id.
    #[must_use]
    pub fn distinct_values(&self, field: DeviceField) -> Vec<String> {
        match field {
            DeviceField::DeviceType => {
                present_in_order(DeviceType::ALL, |t| self.any(|d| d.device_type == t))
            }
            DeviceField::Room => present_in_order(Room::ALL, |r| self.any(|d| d.room == r)),
            DeviceField::Protocol => {
                present_in_order(ConnectionProtocol::ALL, |p| self.any(|d| d.protocol == p))
            }
            DeviceField::Manufacturer => {
                let mut names: Vec<String> = Vec::new();
                for device in self.list_ordered_by_id() {
                    let name = field.value_of(device);
                    if !names.contains(&name) {
                        names.push(name);
                    }
                }
                names
            }
        }
    }

    /// Replace the contents with decoded records.
    ///
    /// Stored ids are kept verbatim; later records repeating an id are
    /// skipped. The counter is raised past the highest loaded id so that new
    /// records never collide with loaded ones.
    #[tracing::instrument(skip(self, devices), fields(count = devices.len()))]
    pub fn load(&mut self, devices: Vec<Device>) -> LoadReport {
        self.devices.clear();
        let mut report = LoadReport::default();
        for device in devices {
            let id = device.key();
            if self.devices.contains_key(&id) {
                tracing::warn!(%id, "skipping duplicate device id in loaded records");
                report.skipped += 1;
                continue;
            }
            if id >= self.next_id {
                self.next_id = id.next();
            }
            self.devices.insert(id, device);
            report.loaded += 1;
        }
        report
    }

    /// Clone every member, ascending by id.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Device> {
        self.devices.values().cloned().collect()
    }

    #[must_use]
    pub fn get(&self, id: DeviceId) -> Option<&Device> {
        self.devices.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: DeviceId) -> bool {
        self.devices.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// The id the next [`create`](Self::create) call will assign.
    #[must_use]
    pub fn next_id(&self) -> DeviceId {
        self.next_id
    }

    #[must_use]
    pub fn initialized_at(&self) -> Timestamp {
        self.initialized_at
    }

    fn any(&self, predicate: impl Fn(&Device) -> bool) -> bool {
        self.devices.values().any(predicate)
    }
}

fn not_found(id: DeviceId) -> HomeDexError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

fn present_in_order<T: Copy + ToString>(all: &[T], present: impl Fn(T) -> bool) -> Vec<String> {
    all.iter()
        .copied()
        .filter(|value| present(*value))
        .map(|value| value.to_string())
        .collect()
}
