pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::pipelines::commission_pipeline::CommissionPipeline;
pub use crate::config::{cli::LocalStorage, ConverterConfig};
pub use crate::core::{catalog::CommissionCatalog, etl::EtlEngine};
pub use crate::domain::model::{CommissionRecord, ConversionOutcome};
pub use crate::utils::error::{EtlError, Result};
