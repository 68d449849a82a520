//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::InferenceConfig;
use crate::document::DocumentBuilder;
use crate::error::{Result, ResultExt};
use crate::loader::{load_value, load_value_from_reader, InputFormat};
use crate::schema::SchemaInferrer;
use crate::tree::Tree;
use serde_json::Value;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{}", output.trim_end());
        Ok(())
    }

    /// Run the CLI command and return the rendered output
    pub fn execute(&self) -> Result<String> {
        let value = match &self.cli.command {
            Commands::Schema { input, strategy } => {
                self.schema(input.as_deref(), strategy.as_deref())?
            }
            Commands::Document {
                input,
                strategy,
                format,
                name,
                no_example,
            } => self.document(
                input.as_deref(),
                strategy.as_deref(),
                format.as_deref(),
                name.as_deref(),
                *no_example,
            )?,
            Commands::Example { input } => self.example(input.as_deref())?,
        };

        self.render(&value)
    }

    /// Infer the bare schema
    fn schema(&self, input: Option<&Path>, strategy: Option<&str>) -> Result<Value> {
        let mut config = self.load_config()?;
        if let Some(strategy) = strategy {
            config.strategy = strategy.parse()?;
        }

        let value = Self::load_input(input)?;
        let tree = Tree::new(&value);
        let schema = SchemaInferrer::new(config.strategy).infer_tree(&tree)?;

        Ok(schema.to_json())
    }

    /// Build a named schema document
    fn document(
        &self,
        input: Option<&Path>,
        strategy: Option<&str>,
        format: Option<&str>,
        name: Option<&str>,
        no_example: bool,
    ) -> Result<Value> {
        let mut config = self.load_config()?;
        if let Some(strategy) = strategy {
            config.strategy = strategy.parse()?;
        }
        if let Some(format) = format {
            config.format = format.parse()?;
        }
        if let Some(name) = name {
            config.name = Some(name.to_string());
        }
        if no_example {
            config.example = false;
        }

        let value = Self::load_input(input)?;
        let tree = Tree::new(&value);

        DocumentBuilder::from_config(&config).build(&tree)
    }

    /// Generate an example value
    fn example(&self, input: Option<&Path>) -> Result<Value> {
        let value = Self::load_input(input)?;
        Ok(Tree::new(&value).example())
    }

    /// Load the config file, if one was given
    fn load_config(&self) -> Result<InferenceConfig> {
        match &self.cli.config {
            Some(path) => InferenceConfig::from_file(path),
            None => Ok(InferenceConfig::default()),
        }
    }

    /// Load the input payload from a file or stdin
    fn load_input(input: Option<&Path>) -> Result<Value> {
        match input {
            Some(path) if path != Path::new("-") => load_value(path),
            _ => load_value_from_reader(std::io::stdin().lock(), InputFormat::Json)
                .context("Failed to read input from stdin"),
        }
    }

    /// Render a value in the selected output format
    fn render(&self, value: &Value) -> Result<String> {
        let rendered = match self.cli.output {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
        };
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::Parser;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn input_file(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn execute(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        Runner::new(cli).execute()
    }

    #[test]
    fn test_schema_command() {
        let file = input_file(r#"[{"a": 1, "b": "x"}, {"a": 2}]"#, ".json");
        let path = file.path().to_str().unwrap();

        let output = execute(&["derek", "-o", "json", "schema", path, "-s", "inner_join"]).unwrap();
        let schema: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            schema,
            json!({
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {"a": {"type": "integer"}, "b": {"type": "string"}},
                    "required": ["a"]
                }
            })
        );
    }

    #[test]
    fn test_schema_command_rejects_unknown_strategy() {
        let file = input_file("[1]", ".json");
        let path = file.path().to_str().unwrap();

        let err = execute(&["derek", "schema", path, "--strategy", "outer_join"]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedStrategy { .. }));
    }

    #[test]
    fn test_document_command_with_config() {
        let config = input_file("strategy: restricted\nname: from_config\n", ".yaml");
        let file = input_file("a: 1\nb: [true]\n", ".yaml");

        let output = execute(&[
            "derek",
            "--config",
            config.path().to_str().unwrap(),
            "--output",
            "json",
            "document",
            file.path().to_str().unwrap(),
            "--format",
            "OAS2",
        ])
        .unwrap();
        let document: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            document,
            json!({
                "from_config": {
                    "type": "object",
                    "properties": {
                        "a": {"type": "integer"},
                        "b": {"type": "array", "items": {"type": "boolean"}}
                    },
                    "example": {"a": 1, "b": [true]}
                }
            })
        );
    }

    #[test]
    fn test_document_flags_override_config() {
        let config = input_file("name: from_config\nexample: true\n", ".yaml");
        let file = input_file("[1, 2]", ".json");

        let output = execute(&[
            "derek",
            "-C",
            config.path().to_str().unwrap(),
            "-o",
            "json",
            "document",
            file.path().to_str().unwrap(),
            "--name",
            "flag",
            "--no-example",
        ])
        .unwrap();
        let document: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            document,
            json!({"flag": {"type": "array", "items": {"type": "integer"}}})
        );
    }

    #[test]
    fn test_document_rejects_unknown_format() {
        let file = input_file("1", ".json");
        let err = execute(&[
            "derek",
            "document",
            file.path().to_str().unwrap(),
            "--format",
            "swagger",
        ])
        .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_example_command_yaml_output() {
        let file = input_file(r#"{"tags": ["a", "b"], "n": 1}"#, ".json");

        let output = execute(&["derek", "-o", "yaml", "example", file.path().to_str().unwrap()])
            .unwrap();
        let example: Value = serde_yaml::from_str(&output).unwrap();

        assert_eq!(example, json!({"tags": ["a"], "n": 1}));
    }

    #[test]
    fn test_missing_input_file() {
        let err = execute(&["derek", "example", "/no/such/input.json"]).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
