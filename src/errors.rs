use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum TeaRobotError {
    UnsupportedVariant(String),
    OutOfStock(String),
    TemperatureNotInCatalog(String),
    FileReaderError(String),
    InputError,
}

impl fmt::Display for TeaRobotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeaRobotError::UnsupportedVariant(tea) => write!(f, "Sorry, we don't have {} tea", tea),
            TeaRobotError::OutOfStock(tea) => write!(f, "{} tea is not available", tea),
            TeaRobotError::TemperatureNotInCatalog(tea) => {
                write!(f, "No ideal temperature registered for {} tea", tea)
            }
            TeaRobotError::FileReaderError(reason) => write!(f, "Could not read catalog: {}", reason),
            TeaRobotError::InputError => write!(f, "Error while reading orders"),
        }
    }
}

impl std::error::Error for TeaRobotError {}

impl From<std::io::Error> for TeaRobotError {
    fn from(error: std::io::Error) -> Self {
        TeaRobotError::FileReaderError(error.to_string())
    }
}

impl From<serde_json::Error> for TeaRobotError {
    fn from(error: serde_json::Error) -> Self {
        TeaRobotError::FileReaderError(error.to_string())
    }
}
