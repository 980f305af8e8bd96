use crate::shared::config::LineEnding;
use crate::test_helpers::factory::Factory;

#[test]
fn test_report_config_factory() {
    let config = Factory::report_config()
        .with_output_dir("/tmp/reports")
        .with_file_prefix("Spend")
        .with_line_ending(LineEnding::Crlf)
        .labelled()
        .create();

    assert_eq!(config.output_dir, "/tmp/reports");
    assert_eq!(config.file_prefix, "Spend");
    assert_eq!(config.table, "T_CUSTOMER");
    assert_eq!(config.line_ending, LineEnding::Crlf);
    assert!(config.label_groups);
    assert!(config.validate().is_ok());
}
