use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 第二大值的計算方式
///
/// `Literal` 取遞減排序後索引 1 的元素（最大值重複時不略過），
/// `Distinct` 取第二大的「相異」值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SecondLargestMode {
    #[default]
    Literal,
    Distinct,
}

impl SecondLargestMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecondLargestMode::Literal => "literal",
            SecondLargestMode::Distinct => "distinct",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedError {
    InvalidArgument,
    NoSecondDistinct,
}

impl ExpectedError {
    pub const ALL: [ExpectedError; 2] = [
        ExpectedError::InvalidArgument,
        ExpectedError::NoSecondDistinct,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpectedError::InvalidArgument => "invalid_argument",
            ExpectedError::NoSecondDistinct => "no_second_distinct",
        }
    }
}

impl FromStr for ExpectedError {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|kind| kind.as_str()).collect();
                format!("unknown error kind '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation<T> {
    Value(T),
    Error(ExpectedError),
}

impl<T: fmt::Display> fmt::Display for Expectation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Value(v) => write!(f, "{}", v),
            Expectation::Error(e) => write!(f, "error({})", e.as_str()),
        }
    }
}

/// 單一字面測試案例
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Case {
    SecondLargest {
        name: String,
        values: Vec<i64>,
        expect: Expectation<i64>,
    },
    Palindrome {
        name: String,
        input: String,
        expect: bool,
    },
}

impl Case {
    pub fn name(&self) -> &str {
        match self {
            Case::SecondLargest { name, .. } | Case::Palindrome { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub mode: SecondLargestMode,
    pub outcomes: Vec<CaseOutcome>,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}
