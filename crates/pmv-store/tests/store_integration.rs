use std::cell::Cell;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use chrono::TimeDelta;
use pmv_core::{ConnectionType, Stage};
use pmv_store::{BoxedValue, PmvConfig, PmvError, ValuePrinter, VariableStore, EMPTY_LABEL};

struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

impl ValuePrinter for DropCounter {
    fn print_value(&self) -> String {
        format!("drops={}", self.0.get())
    }
}

fn small_store(max: usize) -> VariableStore {
    let mut config = PmvConfig::new();
    config.max_variables = max;
    VariableStore::new(config)
}

#[test]
fn clear_destroys_every_payload_once() {
    let drops = Rc::new(Cell::new(0));
    let mut store = VariableStore::default();
    store.set("a", DropCounter(drops.clone())).unwrap();
    store.set("b", 42i64).unwrap();
    store.set("c", DropCounter(drops.clone())).unwrap();
    store.set("d", Stage::Verifying).unwrap();
    assert_eq!(drops.get(), 0);

    store.clear();
    assert!(store.is_empty());
    assert_eq!(drops.get(), 2);
}

#[test]
fn replacing_destroys_old_value_only() {
    let old = Rc::new(Cell::new(0));
    let new = Rc::new(Cell::new(0));
    let mut store = VariableStore::default();
    store.set("x", DropCounter(old.clone())).unwrap();
    store.set("x", DropCounter(new.clone())).unwrap();

    assert_eq!(old.get(), 1);
    assert_eq!(new.get(), 0);
    assert_eq!(store.len(), 1);

    drop(store);
    assert_eq!(new.get(), 1);
    assert_eq!(old.get(), 1);
}

#[test]
fn removed_box_outlives_store() {
    let drops = Rc::new(Cell::new(0));
    let mut store = VariableStore::default();
    store.set("x", DropCounter(drops.clone())).unwrap();

    let removed = store.remove("x").expect("x was stored");
    drop(store);
    assert_eq!(drops.get(), 0);
    assert_eq!(removed.to_string(), "drops=0");
    drop(removed);
    assert_eq!(drops.get(), 1);
    assert!(VariableStore::default().remove("x").is_none());
}

#[test]
fn limit_applies_to_new_names_only() {
    let mut store = small_store(2);
    store.set("a", 1u8).unwrap();
    store.set("b", 2u8).unwrap();
    assert!(matches!(store.set("c", 3u8), Err(PmvError::StoreFull(2))));
    assert!(matches!(store.slot("c"), Err(PmvError::StoreFull(2))));

    store.set("a", 10u8).unwrap();
    assert_eq!(store.render("a").unwrap(), "10");
}

#[test]
fn slot_starts_empty_and_can_be_filled() {
    let mut store = VariableStore::default();
    {
        let slot = store.slot("later").unwrap();
        assert!(slot.as_ptr().is_null());
    }
    assert!(matches!(store.render("later"), Err(PmvError::EmptyBox)));
    assert!(matches!(store.get::<u8>("later"), Err(PmvError::EmptyBox)));

    let mut incoming = BoxedValue::new(TimeDelta::seconds(12345));
    store.slot("later").unwrap().assign(&mut incoming);
    assert!(incoming.is_empty());
    assert_eq!(store.render("later").unwrap(), "3h25m45s");
}

#[test]
fn snapshot_is_key_ordered() {
    let mut store = VariableStore::default();
    let set: BTreeSet<ConnectionType> =
        [ConnectionType::Wimax, ConnectionType::Ethernet].into_iter().collect();
    store.set("zeta", set).unwrap();
    store.set("alpha", u64::MAX).unwrap();
    store.slot("mid").unwrap();

    assert_eq!(store.names().collect::<Vec<_>>(), vec!["alpha", "mid", "zeta"]);
    assert_eq!(
        store.snapshot(),
        vec![
            ("alpha".to_string(), "18446744073709551615".to_string()),
            ("mid".to_string(), EMPTY_LABEL.to_string()),
            ("zeta".to_string(), "Ethernet,Wimax".to_string()),
        ]
    );
}

#[test]
fn persist_snapshot_writes_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.txt");

    let mut store = VariableStore::default();
    store.set("connection", ConnectionType::Wifi).unwrap();
    store.set("stage", Stage::UpdatedNeedReboot).unwrap();
    store.persist_snapshot(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "connection: Wifi\nstage: Updated, Need Reboot\n");
}

#[test]
fn persist_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/snapshot.txt");
    let store = VariableStore::default();
    assert!(matches!(store.persist_snapshot(&path), Err(PmvError::Io(_))));
}

// Collects formatted log output for the duration of `f`.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn rejected_insert_is_not_logged_as_set() {
    let mut store = small_store(1);
    store.set("a", 1u8).unwrap();
    let logs = captured_logs(|| {
        assert!(matches!(store.set("b", 2u8), Err(PmvError::StoreFull(1))));
    });
    assert!(!logs.contains("set variable"), "unexpected log: {}", logs);
    assert_eq!(store.len(), 1);
}

#[test]
fn storing_empty_box_logs_placeholder() {
    let mut store = VariableStore::default();
    let logs = captured_logs(|| {
        store.set_boxed("pending", BoxedValue::empty()).unwrap();
    });
    assert!(logs.contains("set variable"), "missing log: {}", logs);
    assert!(logs.contains(EMPTY_LABEL), "missing placeholder: {}", logs);
    assert!(!logs.contains("formatting an empty boxed value"), "unexpected warning: {}", logs);
    assert!(matches!(store.render("pending"), Err(PmvError::EmptyBox)));
}
