pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    fn checked_len(len: usize) -> super::Result<usize> {
        verify_arg!(len, len < 10);
        Ok(len)
    }

    #[test]
    fn test_verify_arg() {
        assert_eq!(checked_len(3).unwrap(), 3);
        let err = checked_len(12).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "len");
                assert_eq!(message, "len < 10");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}
