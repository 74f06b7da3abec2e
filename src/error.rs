use crate::mapping::MapperError;
use crate::types::SettingsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("mapper error: {0}")]
    Mapper(#[from] MapperError),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
}
