//! End-to-end settings flows over real store implementations.

use std::sync::Arc;

use roadpilot_settings::params::{
    FileParamStore, MemoryParamStore, ParamStore, ParamWriter, StoreHandle,
};
use roadpilot_settings::settings::catalog::SettingEntry;
use roadpilot_settings::settings::{SettingsCatalog, UnitSystem, SETTINGS_UPDATED_KEY};

fn entry(catalog: &SettingsCatalog, key: &str) -> SettingEntry {
    *catalog.find(key).expect("catalog entry")
}

#[test]
fn test_stepping_a_catalog_setting_persists_and_flags() {
    let store = MemoryParamStore::new();
    let session = MemoryParamStore::new();
    let catalog = SettingsCatalog::build(UnitSystem::Imperial);

    let SettingEntry::Bounded(follow) = entry(&catalog, "AggressiveFollow") else {
        panic!("AggressiveFollow should be a bounded setting");
    };

    // Unset value starts from the parse fallback and clamps to the floor.
    assert_eq!(follow.current(&store), follow.min);

    follow.increment(&store, &session);
    follow.increment(&store, &session);
    assert_eq!(store.get_int("AggressiveFollow"), follow.min + 2 * follow.step);
    assert!(session.get_bool(SETTINGS_UPDATED_KEY));

    // Render tracks the store with no staleness.
    assert_eq!(
        follow.render(&store, catalog.units),
        format!("{} sec", (follow.min + 2 * follow.step) as f64 / 10.0)
    );
}

#[test]
fn test_conditional_speed_bound_depends_on_unit_system() {
    let store = MemoryParamStore::new();
    let session = MemoryParamStore::new();

    let imperial = SettingsCatalog::build(UnitSystem::Imperial);
    let SettingEntry::Bounded(speed) = entry(&imperial, "ConditionalSpeed") else {
        panic!("ConditionalSpeed should be a bounded setting");
    };
    store.put_int(speed.key, 98);
    speed.increment(&store, &session);
    speed.increment(&store, &session);
    assert_eq!(store.get_int(speed.key), 99);
    assert_eq!(speed.render(&store, imperial.units), "99 mph");

    let metric = SettingsCatalog::build(UnitSystem::Metric);
    let SettingEntry::Bounded(speed) = entry(&metric, "ConditionalSpeed") else {
        panic!("ConditionalSpeed should be a bounded setting");
    };
    store.put_int(speed.key, 149);
    speed.increment(&store, &session);
    speed.increment(&store, &session);
    assert_eq!(store.get_int(speed.key), 150);
    assert_eq!(speed.render(&store, metric.units), "150 km/h");
}

#[test]
fn test_offset_titles_follow_unit_system() {
    let imperial = SettingsCatalog::build(UnitSystem::Imperial);
    let metric = SettingsCatalog::build(UnitSystem::Metric);

    let SettingEntry::Bounded(mph) = entry(&imperial, "SpeedLimitOffset1") else {
        panic!("offset should be bounded");
    };
    let SettingEntry::Bounded(kmh) = entry(&metric, "SpeedLimitOffset1") else {
        panic!("offset should be bounded");
    };

    assert!(mph.title.contains("mph"));
    assert!(kmh.title.contains("km/h"));
}

#[test]
fn test_toggle_flip_through_writer_lands_in_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store: StoreHandle = Arc::new(FileParamStore::open(dir.path()).expect("open store"));
    let session = MemoryParamStore::new();
    let writer = ParamWriter::spawn(store.clone());

    let catalog = SettingsCatalog::build(UnitSystem::Imperial);
    let SettingEntry::Toggle(ldw) = entry(&catalog, "IsLdwEnabled") else {
        panic!("IsLdwEnabled should be a toggle");
    };

    ldw.set(&writer, &session, true);
    writer.flush();

    assert!(store.get_bool("IsLdwEnabled"));
    assert!(session.get_bool(SETTINGS_UPDATED_KEY));
}

#[test]
fn test_experimental_mode_toggle_requires_confirmation() {
    let catalog = SettingsCatalog::build(UnitSystem::Imperial);
    let SettingEntry::Toggle(experimental) = entry(&catalog, "ExperimentalMode") else {
        panic!("ExperimentalMode should be a toggle");
    };
    assert!(experimental.confirm);

    let SettingEntry::Toggle(metric) = entry(&catalog, "IsMetric") else {
        panic!("IsMetric should be a toggle");
    };
    assert!(!metric.confirm);
}

#[test]
fn test_every_catalog_key_is_unique() {
    let catalog = SettingsCatalog::build(UnitSystem::Metric);

    let mut keys: Vec<&str> = catalog
        .toggles
        .iter()
        .chain(catalog.driving.iter().flat_map(|c| c.entries.iter()))
        .chain(catalog.display.iter())
        .map(|entry| entry.key())
        .collect();
    let total = keys.len();
    keys.sort_unstable();
    keys.dedup();

    assert_eq!(keys.len(), total, "duplicate store keys in the catalog");
}
