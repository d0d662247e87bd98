pub mod palindrome;
pub mod runner;
pub mod second_largest;

pub use crate::domain::model::{
    Case, CaseOutcome, ExpectedError, Expectation, RunReport, SecondLargestMode,
};
pub use crate::domain::ports::{CaseSource, InMemoryCases};
pub use crate::utils::error::Result;
