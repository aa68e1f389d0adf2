//! Error macros for the syllabus generator

/// Macro for returning usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::SyllabusError::UsageError($msg.to_string()))
    };
}

/// Macro for returning out-of-range errors
#[macro_export]
macro_rules! bail_out_of_range {
    ($context:expr, $index:expr, $len:expr) => {
        return Err($crate::error::SyllabusError::out_of_range(
            $context, $index, $len,
        ))
    };
}
