use crate::io::FileOrStdin;
use anyhow::{Context, Result};
use clap::ValueEnum;
use sepjoin::{
    join::Strategy,
    parsing::{Value, parse_list},
    style::{Style, Terminator},
};
use std::{fs, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One value per line, blank lines are skipped
    Lines,

    /// Single list literal, e.g. `[1, 2.5, "text"]`
    List,

    /// JSON array of numbers and strings
    Json,
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// File to read values from, `-` for standard input
    #[arg(long, default_value = "-")]
    input: FileOrStdin,

    /// List literal to use instead of reading --input
    #[arg(long, allow_hyphen_values = true)]
    list: Option<String>,

    #[arg(long, value_enum, default_value_t = InputFormat::Lines)]
    format: InputFormat,
}

impl InputArgs {
    pub fn read(&self) -> Result<Vec<Value>> {
        if let Some(list) = &self.list {
            return parse_values(list, InputFormat::List);
        }

        let text = self
            .input
            .read_to_string()
            .with_context(|| format!("Could not read input from '{}'", self.input))?;
        let values = parse_values(&text, self.format)?;
        log::debug!("Read {} values from '{}'", values.len(), self.input);
        Ok(values)
    }
}

pub fn parse_values(text: &str, format: InputFormat) -> Result<Vec<Value>> {
    match format {
        InputFormat::Lines => Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.parse::<Value>()
                    .unwrap_or_else(|_| Value::Text(line.to_owned()))
            })
            .collect()),
        InputFormat::List => parse_list(text).context("Could not parse list literal"),
        InputFormat::Json => serde_json::from_str(text).context("Could not parse JSON array"),
    }
}

#[derive(clap::Args, Debug, Default)]
pub struct StyleArgs {
    /// JSON file with rendering style, flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Written between adjacent values [default: ", "]
    #[arg(long, allow_hyphen_values = true)]
    delimiter: Option<String>,

    /// Written before the first value
    #[arg(long, allow_hyphen_values = true)]
    open: Option<String>,

    /// Written after the last value
    #[arg(long, allow_hyphen_values = true)]
    close: Option<String>,

    /// boundary-flag or peel-first
    #[arg(long)]
    strategy: Option<Strategy>,

    /// none, always or non-empty [default: non-empty]
    #[arg(long)]
    terminator: Option<Terminator>,
}

impl StyleArgs {
    pub fn resolve(&self) -> Result<Style> {
        let mut style = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Could not read config '{}'", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Invalid style in '{}'", path.display()))?
            }
            None => Style::default().terminator(Terminator::NonEmpty),
        };

        if let Some(delimiter) = &self.delimiter {
            style.delimiter.clone_from(delimiter);
        }
        if let Some(open) = &self.open {
            style.open.clone_from(open);
        }
        if let Some(close) = &self.close {
            style.close.clone_from(close);
        }
        if let Some(strategy) = self.strategy {
            style.strategy = strategy;
        }
        if let Some(terminator) = self.terminator {
            style.terminator = terminator;
        }
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_format() {
        let values = parse_values("1\n\n  2.2 \nhello world\n<END>\n", InputFormat::Lines).unwrap();
        assert_eq!(
            values,
            vec![
                Value::int(1),
                Value::float(2.2),
                Value::Text("hello world".into()),
                Value::Text("<END>".into()),
            ]
        );
    }

    #[test]
    fn lines_keep_number_text() {
        let values = parse_values("007\n1.50\n", InputFormat::Lines).unwrap();
        assert_eq!(
            sepjoin::join::format_joined(&values, " , ").unwrap(),
            "007 , 1.50"
        );
    }

    #[test]
    fn list_format() {
        let values = parse_values("[1, 2, 3]\n", InputFormat::List).unwrap();
        assert_eq!(values, vec![Value::int(1), Value::int(2), Value::int(3)]);
        assert!(parse_values("[1, 2", InputFormat::List).is_err());
    }

    #[test]
    fn json_format() {
        let values = parse_values(r#"[1, 1.5, "x"]"#, InputFormat::Json).unwrap();
        assert_eq!(
            values,
            vec![Value::int(1), Value::float(1.5), Value::Text("x".into())]
        );
        assert!(parse_values(r#"{"a": 1}"#, InputFormat::Json).is_err());
    }

    #[test]
    fn literal_takes_precedence() {
        let args = InputArgs {
            input: FileOrStdin::FilePath("/nonexistent/values.txt".into()),
            list: Some("[<END>]".into()),
            format: InputFormat::Lines,
        };
        assert_eq!(args.read().unwrap(), vec![Value::Text("<END>".into())]);
    }

    #[test]
    fn missing_input_file() {
        let args = InputArgs {
            input: FileOrStdin::FilePath("/nonexistent/values.txt".into()),
            list: None,
            format: InputFormat::Lines,
        };
        let err = args.read().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/values.txt"));
    }

    #[test]
    fn default_style() {
        let style = StyleArgs::default().resolve().unwrap();
        assert_eq!(style, Style::new(", ").terminator(Terminator::NonEmpty));
    }

    #[test]
    fn flags_override_config() {
        let path = std::env::temp_dir().join(format!("sepjoin-style-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"delimiter": " , ", "open": "[", "close": "]", "strategy": "peel-first"}"#,
        )
        .unwrap();

        let args = StyleArgs {
            config: Some(path.clone()),
            close: Some(">".into()),
            ..StyleArgs::default()
        };
        let style = args.resolve().unwrap();
        fs::remove_file(path).unwrap();

        assert_eq!(
            style,
            Style::new(" , ")
                .enclosed("[", ">")
                .strategy(Strategy::PeelFirst)
                .terminator(Terminator::None)
        );
    }

    #[test]
    fn invalid_config() {
        let path = std::env::temp_dir().join(format!("sepjoin-bad-{}.json", std::process::id()));
        fs::write(&path, r#"{"separator": ","}"#).unwrap();
        let args = StyleArgs {
            config: Some(path.clone()),
            ..StyleArgs::default()
        };
        let result = args.resolve();
        fs::remove_file(path).unwrap();
        assert!(result.is_err());
    }
}
