pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TasksConfig;

pub use self::core::{
    palindrome::is_palindrome,
    runner::TaskRunner,
    second_largest::{second_largest, second_largest_distinct, second_largest_with},
};
pub use domain::model::SecondLargestMode;
pub use utils::error::{Result, TaskError};
