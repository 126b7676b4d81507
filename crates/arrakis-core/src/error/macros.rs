//! Error macros for arrakis

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::ArrakisError::invalid_value($context, $value))
    };
}

/// Macro for creating invalid map errors
#[macro_export]
macro_rules! bail_invalid_map {
    ($($arg:tt)*) => {
        return Err($crate::error::ArrakisError::invalid_map(format!($($arg)*)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::ArrakisError::UsageError($msg.to_string()))
    };
}
