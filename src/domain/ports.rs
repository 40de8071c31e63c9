use crate::domain::model::{ConversionResult, RawRow};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn spot_check_subject(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<RawRow>>;
    fn transform(&self, rows: Vec<RawRow>) -> Result<ConversionResult>;
    fn load(&self, result: &ConversionResult) -> Result<String>;
}
