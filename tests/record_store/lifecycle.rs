//! Lifecycle Tests
//!
//! - init validates the device and geometry before mounting
//! - init is safe to repeat
//! - clear erases, and access fails until the next init

use super::*;
use recstore::{medium_category, same_category, Errc, ErrorCode, Geometry, MediumErrc, MediumOp};

#[test]
fn test_init_on_ready_device() {
    let store = mounted_store();
    assert_eq!(store.medium().stats().mounts, 1);
    assert!(store.medium().mounted().is_some());
}

#[test]
fn test_init_not_ready_reports_medium_category() {
    let mut store = fresh_store();
    store.medium_mut().set_ready(false);

    let err = store.init().unwrap_err();
    assert!(same_category(err.category(), medium_category()));
    assert_eq!(err, ErrorCode::from(MediumErrc::DeviceNotReady));
    assert_eq!(err.message(), "Device is not ready");
}

#[test]
fn test_init_without_geometry() {
    let mut store = fresh_store();
    store.medium_mut().set_geometry_available(false);

    let err = store.init().unwrap_err();
    assert_eq!(err, ErrorCode::from(MediumErrc::GeometryUnavailable));
    assert!(store.medium().mounted().is_none());
}

#[test]
fn test_init_retry_after_transient_mount_failure() {
    let mut store = fresh_store();
    store.medium_mut().inject_fault(MediumOp::Mount, -11);

    let err = store.init().unwrap_err();
    assert!(err.matches(Errc::OPERATION_WOULD_BLOCK));

    store.init().unwrap();
    store.write(1, &1u8).unwrap();
}

#[test]
fn test_partition_beyond_device_is_rejected_by_medium() {
    init_tracing();
    let config = StoreConfig::new()
        .with_partition_offset(6 * 4096)
        .with_sector_count(4);
    let mut store = RecordStore::with_config(MemoryMedium::new(), config).unwrap();

    let err = store.init().unwrap_err();
    assert_eq!(err, ErrorCode::from(Errc::InvalidArgument));
}

#[test]
fn test_testing_config_geometry() {
    let store = mounted_testing_store();
    assert_eq!(
        store.medium().mounted(),
        Some(Geometry {
            offset: 4096,
            sector_size: 4096,
            sector_count: 4,
        })
    );
}

#[test]
fn test_records_survive_reinit() {
    let mut store = mounted_store();
    store.write(3, &0xDEAD_BEEFu32).unwrap();

    store.init().unwrap();
    store.init().unwrap();
    assert_eq!(store.read::<u32>(3).unwrap(), 0xDEAD_BEEF);
}

#[test]
fn test_post_clear_access_fails_until_init() {
    let mut store = mounted_store();
    for key in 0..4u16 {
        store.write(key, &u64::from(key)).unwrap();
    }

    store.clear().unwrap();
    for key in 0..4u16 {
        let err = store.read::<u64>(key).unwrap_err();
        assert_eq!(err, ErrorCode::from(Errc::PermissionDenied));
    }
    assert!(store.write(0, &1u64).is_err());
}

#[test]
fn test_post_clear_reinit_has_no_stale_values() {
    let mut store = mounted_store();
    store.write(1, &42u32).unwrap();
    store.write_bytes(2, b"hello").unwrap();

    store.clear().unwrap();
    store.init().unwrap();

    assert_eq!(
        store.read::<u32>(1).unwrap_err(),
        ErrorCode::from(Errc::NoSuchFileOrDirectory)
    );
    let mut buf = [0u8; 8];
    assert!(store.read_bytes(2, &mut buf).is_err());
    assert!(store.medium().is_empty());
}

#[test]
fn test_clear_before_init_fails() {
    let mut store = fresh_store();
    let err = store.clear().unwrap_err();
    assert_eq!(err, ErrorCode::from(Errc::PermissionDenied));
}

#[test]
fn test_out_of_space_surfaces_as_generic_condition() {
    let mut store = mounted_store();
    let chunk = [0x11u8; 1000];
    let mut last = Ok(());
    for key in 0..8u16 {
        last = store.write_bytes(key, &chunk);
        if last.is_err() {
            break;
        }
    }

    let err = last.unwrap_err();
    assert!(err.matches(Errc::NoSpaceOnDevice));
}
