//! Active-device store.
//!
//! Holds the latest daemon status and which device the UI is pointed at.
//! Writes come from one place (the daemon session), reads from anywhere.
//! Consumers that need to react to changes subscribe explicitly; nothing is
//! re-run behind their back.

use std::fmt;

use log::{debug, info};
use serde_json::Value;

use crate::capability::ActiveDeviceSource;
use crate::device::DeviceType;
use crate::error::StatusError;
use crate::status::{DaemonStatus, DeviceStatus};

/// Change notification delivered to subscribers after the store is updated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    /// A new status document was installed (full replace or patch).
    StatusReplaced,
    /// The active device changed identity or hardware variant.
    ActiveDeviceChanged {
        /// Serial active before the change
        previous: Option<String>,
        /// Serial active after the change
        current: Option<String>,
    },
}

/// Handle returned by [`DeviceStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Shared state container for daemon status and the active device.
#[derive(Default)]
pub struct DeviceStore {
    status: DaemonStatus,
    // Document exactly as the daemon sent it; patches address its paths
    raw: Option<Value>,
    active: Option<String>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl DeviceStore {
    /// Create an empty store with no active device.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status document.
    pub fn status(&self) -> &DaemonStatus {
        &self.status
    }

    /// All known devices, in daemon order.
    pub fn devices(&self) -> &[DeviceStatus] {
        &self.status.devices
    }

    /// Serial of the active device.
    pub fn active_serial(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Borrow the active device.
    pub fn active(&self) -> Option<&DeviceStatus> {
        self.active
            .as_deref()
            .and_then(|serial| self.status.device(serial))
    }

    /// Install an already typed status document.
    pub fn replace_status(&mut self, status: DaemonStatus) {
        self.raw = None;
        self.install(status);
    }

    /// Install a status document as received from the daemon.
    ///
    /// The raw JSON is kept so later patches can address fields the typed
    /// view doesn't model. On a parse failure the store is unchanged.
    pub fn replace_document(&mut self, document: Value) -> Result<(), StatusError> {
        let status = DaemonStatus::from_value(document.clone())?;
        self.raw = Some(document);
        self.install(status);
        Ok(())
    }

    /// Apply a daemon JSON patch to the current document.
    ///
    /// The patch is applied to a copy; on any failure the store is unchanged.
    pub fn apply_patch(&mut self, patch: &json_patch::Patch) -> Result<(), StatusError> {
        let mut doc = match &self.raw {
            Some(raw) => raw.clone(),
            None => self.status.to_value()?,
        };
        json_patch::patch(&mut doc, patch)?;
        self.replace_document(doc)
    }

    /// Make the device with `serial` the active one.
    pub fn select(&mut self, serial: &str) -> Result<(), StatusError> {
        if self.status.device(serial).is_none() {
            return Err(StatusError::UnknownDevice(serial.to_string()));
        }
        if self.active.as_deref() == Some(serial) {
            return Ok(());
        }

        let previous = self.active.replace(serial.to_string());
        info!("Active device changed to {}", serial);
        self.notify(&StoreEvent::ActiveDeviceChanged {
            previous,
            current: Some(serial.to_string()),
        });
        Ok(())
    }

    /// Register a listener; it is called after every store change.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn install(&mut self, status: DaemonStatus) {
        let previous = self.active.clone();
        let previous_type = self.active().map(DeviceStatus::device_type);

        self.status = status;
        self.active = self.reselect();

        let current_type: Option<DeviceType> = self.active().map(DeviceStatus::device_type);
        debug!(
            "Status replaced: {} device(s), active {:?}",
            self.status.devices.len(),
            self.active
        );

        self.notify(&StoreEvent::StatusReplaced);
        if previous != self.active || previous_type != current_type {
            self.notify(&StoreEvent::ActiveDeviceChanged {
                previous,
                current: self.active.clone(),
            });
        }
    }

    // Keep the current selection if it survived, otherwise fall back to the
    // first device.
    fn reselect(&self) -> Option<String> {
        match self.active.as_deref() {
            Some(serial) if self.status.device(serial).is_some() => Some(serial.to_string()),
            _ => self.status.devices.first().map(|d| d.serial.clone()),
        }
    }

    fn notify(&mut self, event: &StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

impl ActiveDeviceSource for DeviceStore {
    fn active_device(&self) -> Option<DeviceStatus> {
        self.active().cloned()
    }
}

impl fmt::Debug for DeviceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceStore")
            .field("status", &self.status)
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde_json::json;

    use super::*;
    use crate::status::fixtures::status;

    fn recorder(store: &mut DeviceStore) -> Rc<RefCell<Vec<StoreEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        store.subscribe(move |ev| sink.borrow_mut().push(ev.clone()));
        events
    }

    #[test]
    fn test_empty_store_has_no_active_device() {
        let store = DeviceStore::new();
        assert!(store.active().is_none());
        assert!(store.active_device().is_none());
        assert!(store.devices().is_empty());
    }

    #[test]
    fn test_first_device_becomes_active() {
        let mut store = DeviceStore::new();
        store.replace_status(status(&[("A", DeviceType::Full), ("B", DeviceType::Mini)]));
        assert_eq!(store.active_serial(), Some("A"));
    }

    #[test]
    fn test_selection_survives_update() {
        let mut store = DeviceStore::new();
        store.replace_status(status(&[("A", DeviceType::Full), ("B", DeviceType::Mini)]));
        store.select("B").unwrap();
        store.replace_status(status(&[("A", DeviceType::Full), ("B", DeviceType::Mini)]));
        assert_eq!(store.active_serial(), Some("B"));
    }

    #[test]
    fn test_selection_falls_back_when_device_leaves() {
        let mut store = DeviceStore::new();
        store.replace_status(status(&[("A", DeviceType::Full), ("B", DeviceType::Mini)]));
        store.select("B").unwrap();
        store.replace_status(status(&[("A", DeviceType::Full)]));
        assert_eq!(store.active_serial(), Some("A"));

        store.replace_status(DaemonStatus::default());
        assert_eq!(store.active_serial(), None);
    }

    #[test]
    fn test_select_unknown_serial() {
        let mut store = DeviceStore::new();
        store.replace_status(status(&[("A", DeviceType::Full)]));
        assert!(matches!(
            store.select("Z"),
            Err(StatusError::UnknownDevice(s)) if s == "Z"
        ));
        assert_eq!(store.active_serial(), Some("A"));
    }

    #[test]
    fn test_events_on_replace_and_select() {
        let mut store = DeviceStore::new();
        let events = recorder(&mut store);

        store.replace_status(status(&[("A", DeviceType::Full), ("B", DeviceType::Mini)]));
        store.select("B").unwrap();
        // Selecting the already active device is silent
        store.select("B").unwrap();

        assert_eq!(
            *events.borrow(),
            vec![
                StoreEvent::StatusReplaced,
                StoreEvent::ActiveDeviceChanged {
                    previous: None,
                    current: Some("A".into())
                },
                StoreEvent::ActiveDeviceChanged {
                    previous: Some("A".into()),
                    current: Some("B".into())
                },
            ]
        );
    }

    #[test]
    fn test_same_status_does_not_change_active_device() {
        let mut store = DeviceStore::new();
        store.replace_status(status(&[("A", DeviceType::Full)]));
        let events = recorder(&mut store);
        store.replace_status(status(&[("A", DeviceType::Full)]));
        assert_eq!(*events.borrow(), vec![StoreEvent::StatusReplaced]);
    }

    #[test]
    fn test_variant_change_is_reported() {
        let mut store = DeviceStore::new();
        store.replace_status(status(&[("A", DeviceType::Full)]));
        let events = recorder(&mut store);
        store.replace_status(status(&[("A", DeviceType::Mini)]));
        assert!(events.borrow().contains(&StoreEvent::ActiveDeviceChanged {
            previous: Some("A".into()),
            current: Some("A".into()),
        }));
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = DeviceStore::new();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.replace_status(status(&[("A", DeviceType::Full)]));
        let seen = *count.borrow();
        assert!(seen > 0);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.replace_status(status(&[("B", DeviceType::Full)]));
        assert_eq!(*count.borrow(), seen);
    }

    #[test]
    fn test_apply_patch_changes_device_type() {
        let mut store = DeviceStore::new();
        store.replace_status(status(&[("A", DeviceType::Full)]));

        let patch: json_patch::Patch = serde_json::from_value(json!([
            { "op": "replace", "path": "/devices/0/hardware/device_type", "value": "Mini" }
        ]))
        .unwrap();
        store.apply_patch(&patch).unwrap();

        assert_eq!(store.active().unwrap().device_type(), DeviceType::Mini);
    }

    #[test]
    fn test_failed_patch_leaves_store_unchanged() {
        let mut store = DeviceStore::new();
        store.replace_status(status(&[("A", DeviceType::Full)]));
        let before = store.status().clone();

        let missing_field: json_patch::Patch = serde_json::from_value(json!([
            { "op": "replace", "path": "/devices/0/hardware/device_type", "value": "Mini" },
            { "op": "remove", "path": "/devices/0/hardware/firmware" }
        ]))
        .unwrap();
        assert!(matches!(
            store.apply_patch(&missing_field),
            Err(StatusError::Json(_))
        ));

        let bad_path: json_patch::Patch = serde_json::from_value(json!([
            { "op": "remove", "path": "/devices/7" }
        ]))
        .unwrap();
        assert!(matches!(
            store.apply_patch(&bad_path),
            Err(StatusError::Patch(_))
        ));

        assert_eq!(store.status(), &before);
        assert_eq!(store.active_serial(), Some("A"));
    }

    fn daemon_document() -> Value {
        json!({
            "devices": [{
                "serial": "A",
                "hardware": {
                    "serial": "A",
                    "manufacture_date": "2021-06-01",
                    "device_type": "Full",
                    "firmware": {"firmware": [1,4,2,107], "fpga_count": 21, "dice": [1,0,0,0]}
                },
                "config": { "device": { "volume": 10 } }
            }],
            "paths": { "profile_directory": "/tmp" }
        })
    }

    #[test]
    fn test_patch_touching_unmodelled_fields() {
        let mut store = DeviceStore::new();
        store.replace_document(daemon_document()).unwrap();

        let patch: json_patch::Patch = serde_json::from_value(json!([
            { "op": "replace", "path": "/devices/0/config/device/volume", "value": 20 },
            { "op": "replace", "path": "/devices/0/hardware/device_type", "value": "Mini" },
            { "op": "replace", "path": "/paths/profile_directory", "value": "/var" }
        ]))
        .unwrap();
        store.apply_patch(&patch).unwrap();

        assert_eq!(store.active().unwrap().device_type(), DeviceType::Mini);

        // Later patches still see the fields changed above
        let follow_up: json_patch::Patch = serde_json::from_value(json!([
            { "op": "test", "path": "/devices/0/config/device/volume", "value": 20 },
            { "op": "replace", "path": "/devices/0/hardware/device_type", "value": "Full" }
        ]))
        .unwrap();
        store.apply_patch(&follow_up).unwrap();
        assert_eq!(store.active().unwrap().device_type(), DeviceType::Full);
    }

    #[test]
    fn test_rejected_document_leaves_store_unchanged() {
        let mut store = DeviceStore::new();
        store.replace_document(daemon_document()).unwrap();

        let mut broken = daemon_document();
        broken["devices"][0]["hardware"]
            .as_object_mut()
            .unwrap()
            .remove("serial");
        assert!(store.replace_document(broken).is_err());

        // The raw document is still the one patches apply to
        let patch: json_patch::Patch = serde_json::from_value(json!([
            { "op": "replace", "path": "/devices/0/config/device/volume", "value": 11 }
        ]))
        .unwrap();
        store.apply_patch(&patch).unwrap();
        assert_eq!(store.active_serial(), Some("A"));
    }
}
