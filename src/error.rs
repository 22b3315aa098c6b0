//! Macros for terminating the command line program on fatal errors.
//!
//! Calculation errors are not recoverable: the message is printed to standard
//! error and the program exits with status code 1. With the `for-testing`
//! feature the macros panic instead, so that failures can be asserted in tests.

/// Prints the formatted message to standard error and exits with status code 1.
#[cfg(not(feature = "for-testing"))]
#[macro_export]
macro_rules! exit_with_error {
    ($($print_arg:tt)*) => {{
        eprintln!($($print_arg)*);
        quit::with_code(1);
    }};
}

/// Panics with the formatted message.
#[cfg(feature = "for-testing")]
#[macro_export]
macro_rules! exit_with_error {
    ($($print_arg:tt)*) => {{
        panic!($($print_arg)*);
    }};
}

/// Unwraps the given `Result`, or exits with the formatted message, where the
/// last format argument is the error.
#[macro_export]
macro_rules! exit_on_error {
    ($result:expr, $($print_arg:tt)*) => {
        match $result {
            Ok(value) => value,
            Err(err) => {
                $crate::exit_with_error!($($print_arg)*, err)
            }
        }
    };
}

/// Exits with the formatted message unless the given condition holds.
#[macro_export]
macro_rules! exit_on_false {
    ($logic:expr, $($print_arg:tt)*) => {
        if !$logic {
            $crate::exit_with_error!($($print_arg)*)
        }
    };
}

/// Unwraps the given `Option`, or exits with the formatted message.
#[macro_export]
macro_rules! exit_on_none {
    ($option:expr, $($print_arg:tt)*) => {
        $option.unwrap_or_else(|| $crate::exit_with_error!($($print_arg)*))
    };
}
