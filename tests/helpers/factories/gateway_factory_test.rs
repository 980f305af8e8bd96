use crate::engine::errors::ReportError;
use crate::engine::store::DatabaseGateway;
use crate::test_helpers::factory::Factory;

#[test]
fn test_gateway_factory_rows() {
    let gateway = Factory::gateway()
        .with_row(&["1", "2"])
        .with_rows(&[&["3", "4"]])
        .create();

    let rows = gateway.execute("SELECT 1").unwrap();
    assert_eq!(rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    assert_eq!(gateway.executed(), vec!["SELECT 1"]);
}

#[test]
fn test_gateway_factory_failing() {
    let gateway = Factory::gateway().failing("boom").create();
    let err = gateway.execute("SELECT 1").unwrap_err();
    assert!(matches!(err, ReportError::DataAccess { .. }));
    assert!(err.to_string().contains("boom"));
}
