use crate::core::{Case, CaseSource, ExpectedError, Expectation, SecondLargestMode};
use crate::utils::error::{Result, TaskError};
use crate::utils::validation::{validate_min_count, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TasksConfig {
    pub settings: Option<SettingsConfig>,
    #[serde(default)]
    pub second_largest: Vec<SecondLargestCaseConfig>,
    #[serde(default)]
    pub palindrome: Vec<PalindromeCaseConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsConfig {
    pub name: Option<String>,
    pub second_largest_mode: Option<SecondLargestMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecondLargestCaseConfig {
    pub name: Option<String>,
    pub values: Vec<i64>,
    pub expect: Option<i64>,
    pub expect_error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PalindromeCaseConfig {
    pub name: Option<String>,
    pub input: String,
    pub expect: bool,
}

impl TasksConfig {
    /// 從 TOML 檔案載入案例
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析案例；解析後才替換字串欄位中的環境變數
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| TaskError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.substitute_env_vars()?;
        Ok(config)
    }

    /// 替換 name 與 input 欄位中的 ${VAR}；未設定的變數保持原樣
    fn substitute_env_vars(&mut self) -> Result<()> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TaskError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;
        let expand = |value: &mut String| {
            let replaced = re.replace_all(value.as_str(), |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            });
            *value = replaced.into_owned();
        };

        if let Some(name) = self.settings.as_mut().and_then(|s| s.name.as_mut()) {
            expand(name);
        }
        for case in &mut self.second_largest {
            if let Some(name) = case.name.as_mut() {
                expand(name);
            }
        }
        for case in &mut self.palindrome {
            if let Some(name) = case.name.as_mut() {
                expand(name);
            }
            expand(&mut case.input);
        }

        Ok(())
    }

    pub fn case_count(&self) -> usize {
        self.second_largest.len() + self.palindrome.len()
    }

    pub fn name(&self) -> &str {
        self.settings
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .unwrap_or("tasks")
    }

    pub fn second_largest_mode(&self) -> SecondLargestMode {
        self.settings
            .as_ref()
            .and_then(|s| s.second_largest_mode)
            .unwrap_or_default()
    }

    /// 命令列指定的模式優先於檔案設定
    pub fn override_mode(&mut self, mode: SecondLargestMode) {
        self.settings.get_or_insert_with(SettingsConfig::default).second_largest_mode = Some(mode);
    }

    fn second_largest_expectation(
        index: usize,
        case: &SecondLargestCaseConfig,
    ) -> Result<Expectation<i64>> {
        let field = format!("second_largest[{}]", index);
        match (case.expect, case.expect_error.as_deref()) {
            (Some(value), None) => Ok(Expectation::Value(value)),
            (None, Some(kind)) => {
                kind.parse::<ExpectedError>()
                    .map(Expectation::Error)
                    .map_err(|reason| TaskError::InvalidConfigValueError {
                        field: format!("{}.expect_error", field),
                        value: kind.to_string(),
                        reason,
                    })
            }
            (Some(_), Some(_)) => Err(TaskError::ValidationError {
                message: format!("{}: set either 'expect' or 'expect_error', not both", field),
            }),
            (None, None) => Err(TaskError::ValidationError {
                message: format!("{}: missing 'expect' or 'expect_error'", field),
            }),
        }
    }

    /// 轉換為領域案例；未命名的案例以類型與索引命名
    pub fn to_cases(&self) -> Result<Vec<Case>> {
        let mut cases = Vec::with_capacity(self.case_count());

        for (index, case) in self.second_largest.iter().enumerate() {
            cases.push(Case::SecondLargest {
                name: case
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("second_largest[{}]", index)),
                values: case.values.clone(),
                expect: Self::second_largest_expectation(index, case)?,
            });
        }

        for (index, case) in self.palindrome.iter().enumerate() {
            cases.push(Case::Palindrome {
                name: case
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("palindrome[{}]", index)),
                input: case.input.clone(),
                expect: case.expect,
            });
        }

        Ok(cases)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(name) = self.settings.as_ref().and_then(|s| s.name.as_deref()) {
            validate_non_empty_string("settings.name", name)?;
        }

        validate_min_count("cases", self.case_count(), 1)?;

        self.to_cases().map(|_| ())
    }
}

impl CaseSource for TasksConfig {
    fn cases(&self) -> Result<Vec<Case>> {
        self.to_cases()
    }

    fn mode(&self) -> SecondLargestMode {
        self.second_largest_mode()
    }
}

impl Validate for TasksConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
