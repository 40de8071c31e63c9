pub mod catalog;
pub mod etl;
pub mod filter;
pub mod numeric;
pub mod report;

pub use crate::domain::model::{
    CommissionRecord, ConversionOutcome, ConversionResult, RawRow, RejectReason, RejectStats,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
