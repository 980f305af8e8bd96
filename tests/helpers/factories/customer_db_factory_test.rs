use crate::test_helpers::factory::Factory;
use rusqlite::Connection;

#[test]
fn test_customer_db_factory() {
    let db = Factory::customer_db()
        .with_customer("M", 30, 100)
        .with_customer("F", 25, 50)
        .create();

    assert!(db.path().exists());
    let conn = Connection::open(db.path()).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM T_CUSTOMER", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 2);
}

#[test]
fn test_customer_db_factory_custom_table() {
    let db = Factory::customer_db().with_table("T_OTHER").create();
    let conn = Connection::open(db.path()).unwrap();
    let columns: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('T_OTHER')",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(columns, 3);
}
