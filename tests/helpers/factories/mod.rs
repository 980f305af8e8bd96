pub mod customer_db_factory;
pub mod gateway_factory;
pub mod registry_factory;
pub mod report_config_factory;

pub use customer_db_factory::{CustomerDb, CustomerDbFactory};
pub use gateway_factory::{GatewayFactory, StubGateway};
pub use registry_factory::RegistryFactory;
pub use report_config_factory::ReportConfigFactory;

#[cfg(test)]
mod customer_db_factory_test;
#[cfg(test)]
mod gateway_factory_test;
#[cfg(test)]
mod report_config_factory_test;
