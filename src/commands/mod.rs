//! Command implementations

/// Print a one-line status message unless `--quiet` is set
macro_rules! status {
    ($cli:expr, $($arg:tt)*) => {
        if !$cli.quiet {
            println!($($arg)*);
        }
    };
}

pub(crate) use status;

pub mod check;
pub mod dispatch;
pub mod edit;
pub mod export;
pub mod init;
pub mod references;
pub mod render;
