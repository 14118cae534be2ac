use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_format(element: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                element: element.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_operation(name: impl Into<String>) -> Error {
        Error(ErrorKind::InvalidOperation { name: name.into() }.into())
    }

    pub fn unsupported_data_type(dtype: impl Into<String>, context: impl Into<String>) -> Error {
        Error(
            ErrorKind::UnsupportedDataType {
                dtype: dtype.into(),
                context: context.into(),
            }
            .into(),
        )
    }

    pub fn flatbuffer(element: impl Into<String>, source: planus::Error) -> Error {
        Error(
            ErrorKind::InvalidFlatBuffer {
                element: element.into(),
                source,
            }
            .into(),
        )
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid operation {name}")]
    InvalidOperation { name: String },

    #[error("checksum mismatch for '{element}'")]
    ChecksumMismatch { element: String },

    #[error("invalid message format for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("invalid FlatBuffers format for '{element}': {source}")]
    InvalidFlatBuffer {
        element: String,
        source: planus::Error,
    },

    #[error("data type {dtype} is not supported for {context}")]
    UnsupportedDataType { dtype: String, context: String },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<planus::Error> for Error {
    fn from(e: planus::Error) -> Self {
        Error::flatbuffer("", e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(_: std::convert::Infallible) -> Self {
        Error::invalid_operation("conversion")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_roundtrip() {
        let err = Error::invalid_arg("shape", "negative dimension");
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
        assert_eq!(
            err.to_string(),
            "invalid argument shape: negative dimension"
        );
        assert!(matches!(
            err.into_kind(),
            ErrorKind::InvalidArgument { name, .. } if name == "shape"
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: Error = io.into();
        assert!(matches!(err.kind(), ErrorKind::Io { .. }));
    }

    #[test]
    fn test_unsupported_data_type_message() {
        let err = Error::unsupported_data_type("QInt8", "element access");
        assert_eq!(
            err.to_string(),
            "data type QInt8 is not supported for element access"
        );
    }
}
