//! Message Tests
//!
//! The boot counter scenario: a `RuntimeStatistics { boot_count }` message
//! stored under key 1, read back, incremented, and written again, plus the
//! failure paths of each stage.

use super::*;
use recstore::{
    message_category, same_category, BincodeCodec, Errc, ErrorCode, MediumOp, Message,
    MessageErrc, CHECKSUM_LEN,
};
use serde::{Deserialize, Serialize};

const RUNTIME_STATISTICS_KEY: u16 = 1;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct RuntimeStatistics {
    boot_count: u32,
}

static RUNTIME_STATISTICS: BincodeCodec<RuntimeStatistics> =
    BincodeCodec::new("RuntimeStatistics");

/// `u32` payload plus checksum.
type RuntimeStatisticsMessage<'d> = Message<'d, RuntimeStatistics, 8>;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct DeviceName {
    name: String,
}

static DEVICE_NAME: BincodeCodec<DeviceName> = BincodeCodec::new("DeviceName");

type DeviceNameMessage<'d> = Message<'d, DeviceName, 24>;

/// One boot: load the counter (default on any failure), bump it, store it.
fn boot(store: &mut RecordStore<MemoryMedium>) -> u32 {
    let mut stats = RuntimeStatisticsMessage::new(&RUNTIME_STATISTICS);
    if store
        .read_message(RUNTIME_STATISTICS_KEY, &mut stats)
        .is_err()
    {
        *stats.data_mut() = RuntimeStatistics::default();
    }

    stats.data_mut().boot_count += 1;
    store
        .write_message(RUNTIME_STATISTICS_KEY, &stats)
        .expect("store runtime statistics");
    stats.data().boot_count
}

#[test]
fn test_message_roundtrip() {
    let mut store = mounted_store();
    let source = RuntimeStatisticsMessage::with_value(
        &RUNTIME_STATISTICS,
        RuntimeStatistics { boot_count: 5 },
    );
    store.write_message(RUNTIME_STATISTICS_KEY, &source).unwrap();

    let mut target = RuntimeStatisticsMessage::new(&RUNTIME_STATISTICS);
    store
        .read_message(RUNTIME_STATISTICS_KEY, &mut target)
        .unwrap();
    assert_eq!(target.data().boot_count, 5);
    assert_eq!(
        store.medium().record(RUNTIME_STATISTICS_KEY).map(<[u8]>::len),
        Some(4 + CHECKSUM_LEN)
    );
}

#[test]
fn test_boot_counter_across_remounts() {
    let mut store = mounted_store();
    assert_eq!(boot(&mut store), 1);

    store.init().unwrap();
    assert_eq!(boot(&mut store), 2);

    store.init().unwrap();
    assert_eq!(boot(&mut store), 3);
}

#[test]
fn test_boot_counter_restarts_after_clear() {
    let mut store = mounted_store();
    boot(&mut store);
    boot(&mut store);

    store.clear().unwrap();
    store.init().unwrap();
    assert_eq!(boot(&mut store), 1);
}

#[test]
fn test_missing_record_is_read_error_not_decode_error() {
    let store = mounted_store();
    let mut stats = RuntimeStatisticsMessage::new(&RUNTIME_STATISTICS);

    let err = store
        .read_message(RUNTIME_STATISTICS_KEY, &mut stats)
        .unwrap_err();
    assert!(!same_category(err.category(), message_category()));
    assert!(err.matches(Errc::NoSuchFileOrDirectory));
}

#[test]
fn test_read_fault_skips_decode() {
    let mut store = mounted_store();
    let source = RuntimeStatisticsMessage::with_value(
        &RUNTIME_STATISTICS,
        RuntimeStatistics { boot_count: 5 },
    );
    store.write_message(RUNTIME_STATISTICS_KEY, &source).unwrap();
    store.medium_mut().inject_fault(MediumOp::Read, -16);

    let mut target = RuntimeStatisticsMessage::with_value(
        &RUNTIME_STATISTICS,
        RuntimeStatistics { boot_count: 77 },
    );
    let err = store
        .read_message(RUNTIME_STATISTICS_KEY, &mut target)
        .unwrap_err();
    assert_eq!(err, ErrorCode::from(Errc::DeviceOrResourceBusy));
    assert_eq!(target.data().boot_count, 77);
}

#[test]
fn test_corrupted_record_is_decode_failure() {
    let mut store = mounted_store();
    let source = RuntimeStatisticsMessage::with_value(
        &RUNTIME_STATISTICS,
        RuntimeStatistics { boot_count: 5 },
    );
    store.write_message(RUNTIME_STATISTICS_KEY, &source).unwrap();

    for index in 0..4 + CHECKSUM_LEN {
        assert!(store.medium_mut().corrupt(RUNTIME_STATISTICS_KEY, index));

        let mut target = RuntimeStatisticsMessage::new(&RUNTIME_STATISTICS);
        let err = store
            .read_message(RUNTIME_STATISTICS_KEY, &mut target)
            .unwrap_err();
        assert!(same_category(err.category(), message_category()));
        assert_eq!(err, ErrorCode::from(MessageErrc::DecodeFailure));
        assert_eq!(target.data().boot_count, 0);

        // Restore the byte before corrupting the next one
        assert!(store.medium_mut().corrupt(RUNTIME_STATISTICS_KEY, index));
    }
}

#[test]
fn test_record_larger_than_maximum_is_decode_failure() {
    let mut store = mounted_store();
    store
        .write_bytes(RUNTIME_STATISTICS_KEY, &[0u8; 32])
        .unwrap();

    let mut stats = RuntimeStatisticsMessage::new(&RUNTIME_STATISTICS);
    let err = store
        .read_message(RUNTIME_STATISTICS_KEY, &mut stats)
        .unwrap_err();
    assert_eq!(err, ErrorCode::from(MessageErrc::DecodeFailure));
}

#[test]
fn test_valid_frame_followed_by_extra_bytes_is_decode_failure() {
    let mut store = mounted_store();
    let source = RuntimeStatisticsMessage::with_value(
        &RUNTIME_STATISTICS,
        RuntimeStatistics { boot_count: 5 },
    );
    let mut frame = [0u8; 8];
    let encoded = source.encode(&mut frame).unwrap();

    let mut record = encoded.to_vec();
    record.extend_from_slice(&[0xAA; 20]);
    store.write_bytes(RUNTIME_STATISTICS_KEY, &record).unwrap();

    let mut stats = RuntimeStatisticsMessage::new(&RUNTIME_STATISTICS);
    let err = store
        .read_message(RUNTIME_STATISTICS_KEY, &mut stats)
        .unwrap_err();
    assert_eq!(err, ErrorCode::from(MessageErrc::DecodeFailure));
    assert_eq!(stats.data().boot_count, 0);
}

#[test]
fn test_encode_too_large_never_touches_medium() {
    let mut store = mounted_store();
    let writes_before = store.medium().stats().writes;

    // 8-byte length prefix + 21 bytes + checksum exceeds 24
    let message = DeviceNameMessage::with_value(
        &DEVICE_NAME,
        DeviceName {
            name: "kitchen-sensor-node-7".to_string(),
        },
    );
    let err = store.write_message(2, &message).unwrap_err();

    assert_eq!(err, ErrorCode::from(MessageErrc::EncodeFailure));
    assert_eq!(err.message(), "Encode failure");
    assert_eq!(store.medium().stats().writes, writes_before);
    assert!(store.medium().record(2).is_none());
}

#[test]
fn test_encode_within_maximum_is_stored() {
    let mut store = mounted_store();
    let message = DeviceNameMessage::with_value(
        &DEVICE_NAME,
        DeviceName {
            name: "hall".to_string(),
        },
    );
    store.write_message(2, &message).unwrap();

    let mut loaded = DeviceNameMessage::new(&DEVICE_NAME);
    store.read_message(2, &mut loaded).unwrap();
    assert_eq!(loaded.data().name, "hall");
}
