use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Returns `InvalidArgument` for `$name` from the enclosing function unless `$cond` holds.
///
/// The reported message is the failed condition, e.g. ``expected `len >= 8` ``.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $cond:expr) => {
        if !$cond {
            return Err($crate::result::failed_arg_check(stringify!($name), stringify!($cond)).into());
        }
    };
}

/// Returns `InvalidFormat` for `$name` from the enclosing function unless `$cond` holds.
///
/// Used for conditions on decoded message content rather than on caller input.
#[macro_export]
macro_rules! verify_data {
    ($name:expr, $cond:expr) => {
        if !$cond {
            return Err($crate::result::failed_data_check(stringify!($name), stringify!($cond)).into());
        }
    };
}

#[doc(hidden)]
#[cold]
pub fn failed_arg_check(name: &str, cond: &str) -> Error {
    Error::invalid_arg(name, format!("expected `{cond}`"))
}

#[doc(hidden)]
#[cold]
pub fn failed_data_check(element: &str, cond: &str) -> Error {
    Error::invalid_format(element, format!("expected `{cond}`"))
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    fn check_message_len(len: usize) -> super::Result<()> {
        verify_arg!(len, len >= 8);
        Ok(())
    }

    fn check_payload_len(payload_len: usize, available: usize) -> super::Result<()> {
        verify_data!(payload_len, payload_len <= available);
        Ok(())
    }

    #[test]
    fn test_verify_arg_reports_failed_condition() {
        assert!(check_message_len(8).is_ok());
        let err = check_message_len(3).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "len");
                assert_eq!(message, "expected `len >= 8`");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn test_verify_data_reports_format_error() {
        assert!(check_payload_len(4, 4).is_ok());
        let err = check_payload_len(5, 4).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidFormat { element, message } => {
                assert_eq!(element, "payload_len");
                assert_eq!(message, "expected `payload_len <= available`");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}
