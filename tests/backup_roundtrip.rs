//! Backup integration tests
//!
//! Exercises the backup engine against a real database file: timestamped
//! naming with a fixed clock, byte-identical copies, directory creation,
//! and the missing-source failure path.

mod common;

use chrono::{Local, TimeZone};
use common::{client_with_cedula, TestContext};
use simetric_gym_lib::backup::{backup_file_name, create_backup, BackupError};
use std::fs;

#[test]
fn test_backup_of_live_database_is_byte_identical() {
    let ctx = TestContext::new().unwrap();
    ctx.db.add_client(&client_with_cedula("V-123")).unwrap();
    drop(ctx.db);

    let stamp = Local.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
    let dest_dir = ctx.temp_dir.path().join("SimetricGym_Backups");
    let dest = create_backup(&ctx.db_path, &dest_dir, stamp).unwrap();

    assert_eq!(
        dest.file_name().unwrap().to_str().unwrap(),
        "backup_simetricdb_2024-01-05_09-30.sqlite"
    );
    assert_eq!(fs::read(&dest).unwrap(), fs::read(&ctx.db_path).unwrap());
}

#[test]
fn test_backup_is_a_usable_database() {
    let ctx = TestContext::new().unwrap();
    ctx.db.add_client(&client_with_cedula("V-001")).unwrap();
    ctx.db.add_client(&client_with_cedula("V-002")).unwrap();
    drop(ctx.db);

    let stamp = Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let dest_dir = ctx.temp_dir.path().join("backups");
    let dest = create_backup(&ctx.db_path, &dest_dir, stamp).unwrap();

    // The artifact opens as a database holding the same roster
    let restored = simetric_gym_lib::db::Database::open(&dest).unwrap();
    restored.initialize().unwrap();
    assert_eq!(restored.count_clients().unwrap(), 2);
}

#[test]
fn test_missing_destination_dir_created_then_reused() {
    let ctx = TestContext::new().unwrap();
    drop(ctx.db);

    let stamp = Local.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
    let dest_dir = ctx.temp_dir.path().join("not").join("yet").join("there");
    assert!(!dest_dir.exists());

    create_backup(&ctx.db_path, &dest_dir, stamp).unwrap();
    assert!(dest_dir.is_dir());

    let later = Local.with_ymd_and_hms(2024, 1, 5, 9, 31, 0).unwrap();
    create_backup(&ctx.db_path, &dest_dir, later).unwrap();

    assert!(dest_dir.join(backup_file_name(stamp)).exists());
    assert!(dest_dir.join(backup_file_name(later)).exists());
}

#[test]
fn test_missing_source_reports_failure_without_artifact() {
    let ctx = TestContext::new().unwrap();
    let bogus = ctx.temp_dir.path().join("no-such.sqlite");
    let dest_dir = ctx.temp_dir.path().join("backups");

    let stamp = Local.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
    let result = create_backup(&bogus, &dest_dir, stamp);

    assert!(matches!(result, Err(BackupError::SourceMissing(_))));
    assert!(!dest_dir.join(backup_file_name(stamp)).exists());
}
