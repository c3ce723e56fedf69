//! Cursor integration tests

use sundry::{Cursor, cursor::CursorError};

#[test]
fn test_total_pages_uses_floor_division() {
    assert_eq!(Cursor::new(1, 10, 100).total_pages(), Ok(10));
    assert_eq!(Cursor::new(1, 10, 109).total_pages(), Ok(10));
    assert_eq!(Cursor::new(1, 10, 9).total_pages(), Ok(0));
}

#[test]
fn test_total_pages_follows_setters() {
    let mut cursor = Cursor::new(1, 10, 100);
    cursor.set_page_size(25).set_total_records(200).set_current_page(3);
    assert_eq!(cursor.total_pages(), Ok(8));
    assert_eq!(cursor.current_page(), 3);
    assert_eq!(cursor.page_size(), 25);
    assert_eq!(cursor.total_records(), 200);
}

#[test]
fn test_zero_page_size_is_an_error() {
    let err = Cursor::new(1, 0, 100).total_pages().unwrap_err();
    assert_eq!(err, CursorError::ZeroPageSize);

    let err: sundry::Error = err.into();
    assert!(err.is_pagination_error());
    assert_eq!(err.module(), "cursor");
}

#[test]
fn test_default_cursor() {
    let cursor = Cursor::default();
    assert_eq!(cursor, Cursor::new(1, 1, 0));
    assert_eq!(cursor.total_pages(), Ok(0));
}

#[test]
fn test_json_round_trip_recomputes_pages() {
    let json = serde_json::to_value(Cursor::new(4, 20, 410)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"currentPage": 4, "pageSize": 20, "totalRecords": 410, "totalPages": 20})
    );

    let mut tampered = json;
    tampered["totalPages"] = serde_json::json!(1);
    let cursor: Cursor = serde_json::from_value(tampered).unwrap();
    assert_eq!(cursor.total_pages(), Ok(20));
}
