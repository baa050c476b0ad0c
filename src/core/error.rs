use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Read error: {0}")]
    Read(std::io::Error),

    #[error("Write error: {0}")]
    Write(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Read(_) => "READ_ERROR",
            Error::Write(_) => "WRITE_ERROR",
        }
    }
}
