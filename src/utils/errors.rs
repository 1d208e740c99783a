use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Interface error: {message}")]
    Interface { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    pub fn interface<S: Into<String>>(message: S) -> Self {
        Self::Interface {
            message: message.into(),
        }
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_error() {
        let error = GameError::interface("selection failed");
        assert!(matches!(error, GameError::Interface { .. }));
        assert_eq!(error.to_string(), "Interface error: selection failed");
    }

    #[test]
    fn test_configuration_error() {
        let error = GameError::configuration("bad value");
        assert!(matches!(error, GameError::Configuration { .. }));
        assert_eq!(error.to_string(), "Configuration error: bad value");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = GameError::from(io_error);
        assert!(matches!(error, GameError::Io(_)));
    }
}
