// ═══════════════════════════════════════════════════════════════════
// Storage Tests: StorageManager byte/file round-trips, export/import
// payload validation
// ═══════════════════════════════════════════════════════════════════

use chrono::{NaiveDate, TimeZone, Utc};
use subscription_tracker_core::errors::CoreError;
use subscription_tracker_core::models::book::SubscriptionBook;
use subscription_tracker_core::models::rate::ExchangeRate;
use subscription_tracker_core::models::subscription::{
    BillingCycle, Category, Currency, ExpenseType, Subscription,
};
use subscription_tracker_core::storage::export::{
    export_to_json, import_from_json, ExportPayload, EXPORT_VERSION,
};
use subscription_tracker_core::storage::manager::StorageManager;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample_book() -> SubscriptionBook {
    let mut book = SubscriptionBook::new();
    book.subscriptions.push(
        Subscription::new(
            "Netflix",
            Category::Streaming,
            17000.0,
            Currency::Krw,
            BillingCycle::Monthly,
            d(2024, 1, 15),
        )
        .with_description("4K plan"),
    );
    book.subscriptions.push(
        Subscription::new(
            "GitHub",
            Category::Software,
            4.0,
            Currency::Usd,
            BillingCycle::Monthly,
            d(2023, 11, 2),
        )
        .with_expense_type(ExpenseType::Company),
    );
    book.cached_rate = Some(ExchangeRate::new(
        1390.25,
        Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap(),
    ));
    book
}

// ═══════════════════════════════════════════════════════════════════
//  StorageManager
// ═══════════════════════════════════════════════════════════════════

mod manager {
    use super::*;

    #[test]
    fn bytes_roundtrip_preserves_book() {
        let book = sample_book();
        let bytes = StorageManager::save_to_bytes(&book).unwrap();
        let loaded = StorageManager::load_from_bytes(&bytes).unwrap();
        assert_eq!(loaded.subscriptions, book.subscriptions);
        assert_eq!(loaded.cached_rate, book.cached_rate);
    }

    #[test]
    fn saved_bytes_are_json() {
        let bytes = StorageManager::save_to_bytes(&sample_book()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"subscriptions\""));
        assert!(text.contains("\"Netflix\""));
    }

    #[test]
    fn load_rejects_garbage() {
        let err = StorageManager::load_from_bytes(b"not json at all").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn load_rejects_wrong_shape() {
        let err = StorageManager::load_from_bytes(b"{\"subscriptions\": 42}").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        let path = path.to_str().unwrap();

        let book = sample_book();
        StorageManager::save_to_file(&book, path).unwrap();
        let loaded = StorageManager::load_from_file(path).unwrap();
        assert_eq!(loaded.subscriptions, book.subscriptions);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = StorageManager::load_from_file("/nonexistent/book.json").unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Export
// ═══════════════════════════════════════════════════════════════════

mod export {
    use super::*;

    #[test]
    fn payload_carries_version_and_count() {
        let book = sample_book();
        let when = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let json = export_to_json(&book.subscriptions, when).unwrap();
        let payload: ExportPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(payload.version, EXPORT_VERSION);
        assert_eq!(payload.total_count, 2);
        assert_eq!(payload.export_date, when);
        assert_eq!(payload.subscriptions.len(), 2);
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let book = sample_book();
        let when = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let json = export_to_json(&book.subscriptions, when).unwrap();
        assert!(json.contains("\"exportDate\""));
        assert!(json.contains("\"totalCount\""));
        assert!(json.contains("\"billingCycle\""));
    }

    #[test]
    fn exporting_empty_collection_is_fine() {
        let when = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let json = export_to_json(&[], when).unwrap();
        let payload: ExportPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(payload.total_count, 0);
        assert!(payload.subscriptions.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Import
// ═══════════════════════════════════════════════════════════════════

mod import {
    use super::*;

    #[test]
    fn roundtrip_through_export() {
        let book = sample_book();
        let when = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let json = export_to_json(&book.subscriptions, when).unwrap();
        let imported = import_from_json(&json).unwrap();
        assert_eq!(imported, book.subscriptions);
    }

    #[test]
    fn rejects_non_object_payload() {
        assert!(matches!(
            import_from_json("[]").unwrap_err(),
            CoreError::InvalidImport(_)
        ));
    }

    #[test]
    fn rejects_subscriptions_not_an_array() {
        let json = r#"{
            "version": "1.0.0",
            "exportDate": "2025-03-01T12:00:00Z",
            "subscriptions": {"oops": true},
            "totalCount": 1
        }"#;
        assert!(matches!(
            import_from_json(json).unwrap_err(),
            CoreError::InvalidImport(_)
        ));
    }

    #[test]
    fn rejects_record_missing_price() {
        let json = r#"{
            "version": "1.0.0",
            "exportDate": "2025-03-01T12:00:00Z",
            "subscriptions": [{
                "id": "7b0e9d8a-3d5f-4a7e-9b1c-2f6d8e4a1c3b",
                "name": "No price",
                "billingCycle": "monthly",
                "startDate": "2024-01-01"
            }],
            "totalCount": 1
        }"#;
        assert!(matches!(
            import_from_json(json).unwrap_err(),
            CoreError::InvalidImport(_)
        ));
    }

    #[test]
    fn rejects_record_with_empty_name() {
        let json = r#"{
            "version": "1.0.0",
            "exportDate": "2025-03-01T12:00:00Z",
            "subscriptions": [{
                "id": "7b0e9d8a-3d5f-4a7e-9b1c-2f6d8e4a1c3b",
                "name": "   ",
                "price": 9900,
                "billingCycle": "monthly",
                "startDate": "2024-01-01"
            }],
            "totalCount": 1
        }"#;
        assert!(matches!(
            import_from_json(json).unwrap_err(),
            CoreError::InvalidImport(_)
        ));
    }

    #[test]
    fn rejects_duplicate_ids_wholesale() {
        let json = r#"{
            "version": "1.0.0",
            "exportDate": "2025-03-01T12:00:00Z",
            "subscriptions": [
                {
                    "id": "7b0e9d8a-3d5f-4a7e-9b1c-2f6d8e4a1c3b",
                    "name": "First",
                    "price": 9900,
                    "billingCycle": "monthly",
                    "startDate": "2024-01-01"
                },
                {
                    "id": "7b0e9d8a-3d5f-4a7e-9b1c-2f6d8e4a1c3b",
                    "name": "Second",
                    "price": 4900,
                    "billingCycle": "monthly",
                    "startDate": "2024-02-01"
                }
            ],
            "totalCount": 2
        }"#;
        assert!(matches!(
            import_from_json(json).unwrap_err(),
            CoreError::InvalidImport(_)
        ));
    }

    // Only the subscriptions array is required; version and count
    // metadata are informational.
    #[test]
    fn accepts_payload_without_metadata() {
        let json = r#"{
            "subscriptions": [{
                "id": "7b0e9d8a-3d5f-4a7e-9b1c-2f6d8e4a1c3b",
                "name": "Netflix",
                "price": 17000,
                "billingCycle": "monthly",
                "startDate": "2024-01-15"
            }]
        }"#;
        let imported = import_from_json(json).unwrap();
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].name, "Netflix");
    }

    // Legacy backups omit the fields added later; they normalize on load.
    #[test]
    fn accepts_legacy_records_with_defaults() {
        let json = r#"{
            "version": "1.0.0",
            "exportDate": "2025-03-01T12:00:00Z",
            "subscriptions": [{
                "id": "7b0e9d8a-3d5f-4a7e-9b1c-2f6d8e4a1c3b",
                "name": "Melon",
                "category": "music",
                "price": 10900,
                "billingCycle": "monthly",
                "startDate": "2023-04-02"
            }],
            "totalCount": 1
        }"#;
        let imported = import_from_json(json).unwrap();
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].expense_type, ExpenseType::Personal);
        assert_eq!(imported[0].currency, Currency::Krw);
    }
}
