pub use super::factories::{
    CustomerDbFactory, GatewayFactory, RegistryFactory, ReportConfigFactory,
};

pub struct Factory;

impl Factory {
    pub fn registry() -> RegistryFactory {
        RegistryFactory::new()
    }

    pub fn gateway() -> GatewayFactory {
        GatewayFactory::new()
    }

    pub fn customer_db() -> CustomerDbFactory {
        CustomerDbFactory::new()
    }

    pub fn report_config() -> ReportConfigFactory {
        ReportConfigFactory::new()
    }
}
