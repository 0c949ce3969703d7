//! Configuration: one struct per subsystem, aggregated by [`A11yConfig`].

pub mod a11y_config;
pub mod defaults;
pub mod enrichment_config;
pub mod observability_config;
pub mod pipeline_config;

pub use a11y_config::A11yConfig;
pub use enrichment_config::EnrichmentConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
