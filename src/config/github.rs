use crate::core::ActionHost;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Workflow host backed by the runner environment: inputs arrive as
/// `INPUT_<NAME>` variables, outputs are appended to the file named by
/// `GITHUB_OUTPUT`, and diagnostics go to stdout as workflow commands.
#[derive(Debug, Clone)]
pub struct GithubHost {
    inputs: HashMap<String, String>,
    output_path: Option<PathBuf>,
    debug_enabled: bool,
}

impl GithubHost {
    pub fn from_env() -> Self {
        let inputs = env::vars()
            .filter_map(|(key, value)| {
                key.strip_prefix("INPUT_")
                    .map(|name| (name.to_ascii_lowercase(), value))
            })
            .collect();

        Self {
            inputs,
            output_path: env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
            debug_enabled: env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1"),
        }
    }

    pub fn new(
        inputs: HashMap<String, String>,
        output_path: Option<PathBuf>,
        debug_enabled: bool,
    ) -> Self {
        let inputs = inputs
            .into_iter()
            .map(|(name, value)| (Self::normalize(&name), value))
            .collect();

        Self {
            inputs,
            output_path,
            debug_enabled,
        }
    }

    pub fn override_input(&mut self, name: &str, value: &str) {
        self.inputs
            .insert(Self::normalize(name), value.to_string());
    }

    pub fn is_debug(&self) -> bool {
        self.debug_enabled
    }

    // Input names map to env variables uppercased with spaces as
    // underscores; stored keys are the lowercase form.
    fn normalize(name: &str) -> String {
        name.replace(' ', "_").to_ascii_lowercase()
    }
}

impl ActionHost for GithubHost {
    fn get_input(&self, name: &str) -> Option<String> {
        self.inputs
            .get(&Self::normalize(name))
            .map(|value| value.trim().to_string())
    }

    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match &self.output_path {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                if value.contains('\n') {
                    writeln!(file, "{}<<__OUTPUT__\n{}\n__OUTPUT__", name, value)?;
                } else {
                    writeln!(file, "{}={}", name, value)?;
                }
            }
            // Runners old enough to lack GITHUB_OUTPUT still accept the
            // legacy stdout command.
            None => println!("::set-output name={}::{}", name, value),
        }
        Ok(())
    }

    fn debug(&self, message: &str) {
        if self.debug_enabled {
            println!("::debug::{}", message);
        }
    }

    fn set_failed(&self, message: &str) {
        println!("::error::{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_with(name: &str, value: &str) -> GithubHost {
        let mut inputs = HashMap::new();
        inputs.insert(name.to_string(), value.to_string());
        GithubHost::new(inputs, None, false)
    }

    #[test]
    fn test_get_input_is_case_insensitive() {
        let host = host_with("MILLISECONDS", "100");
        assert_eq!(host.get_input("milliseconds").unwrap(), "100");
        assert_eq!(host.get_input("MILLISECONDS").unwrap(), "100");
    }

    #[test]
    fn test_get_input_trims_value() {
        let host = host_with("milliseconds", "  100  ");
        assert_eq!(host.get_input("milliseconds").unwrap(), "100");
    }

    #[test]
    fn test_get_input_maps_spaces_to_underscores() {
        let host = host_with("retry_count", "3");
        assert_eq!(host.get_input("retry count").unwrap(), "3");
    }

    #[test]
    fn test_get_input_missing() {
        let host = GithubHost::new(HashMap::new(), None, false);
        assert!(host.get_input("milliseconds").is_none());
    }

    #[test]
    fn test_set_output_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");
        let host = GithubHost::new(HashMap::new(), Some(path.clone()), false);

        host.set_output("time", "14:30:05 GMT+0000").unwrap();
        host.set_output("other", "value").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "time=14:30:05 GMT+0000\nother=value\n");
    }

    #[test]
    fn test_set_output_multiline_uses_heredoc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");
        let host = GithubHost::new(HashMap::new(), Some(path.clone()), false);

        host.set_output("report", "line one\nline two").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "report<<__OUTPUT__\nline one\nline two\n__OUTPUT__\n");
    }
}
