pub mod config;
pub mod error;
pub mod spec_tree;

pub use error::{Error, Result};
pub use spec_tree::{SpecNode, SpecTree};

#[macro_export]
macro_rules! exit {
    ($err:expr, $($arg:tt)*) => {
        {
            tracing::error!($($arg)*);
            anyhow::bail!($err)
        }
    };
}
