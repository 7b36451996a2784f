use crate::core::{Accessor, DemoSettings, Line, Sequence, Step};
use crate::utils::error::{DemoError, Result};
use serde::Serialize;
use std::io::Write;

pub const OUT_OF_RANGE_MESSAGE: &str = "exception thrown: index out of range";

pub const DEFAULT_EXPECTED: &str = "a";
pub const DEFAULT_SAFE_INDEX: i64 = 0;
pub const DEFAULT_UNSAFE_INDEX: i64 = 25;
pub const DEFAULT_DIRECT_INDEX: i64 = 32;
pub const DEFAULT_DIRECT_EQUAL_INDEX: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probes {
    pub expected: String,
    pub safe_index: i64,
    pub unsafe_index: i64,
    pub direct_index: i64,
    pub direct_equal_index: i64,
}

impl Default for Probes {
    fn default() -> Self {
        Self {
            expected: DEFAULT_EXPECTED.to_string(),
            safe_index: DEFAULT_SAFE_INDEX,
            unsafe_index: DEFAULT_UNSAFE_INDEX,
            direct_index: DEFAULT_DIRECT_INDEX,
            direct_equal_index: DEFAULT_DIRECT_EQUAL_INDEX,
        }
    }
}

pub struct AccessDemo {
    letters: Sequence<String>,
    probes: Probes,
    format: OutputFormat,
}

impl AccessDemo {
    pub fn new(letters: Sequence<String>, probes: Probes) -> Self {
        Self {
            letters,
            probes,
            format: OutputFormat::Text,
        }
    }

    pub fn from_settings<S: DemoSettings>(settings: &S) -> Self {
        let probes = Probes {
            expected: settings.expected().to_string(),
            safe_index: settings.safe_index(),
            unsafe_index: settings.unsafe_index(),
            direct_index: settings.direct_index(),
            direct_equal_index: settings.direct_equal_index(),
        };
        Self::new(Sequence::new(settings.elements().to_vec()), probes)
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn letters(&self) -> &Sequence<String> {
        &self.letters
    }

    /// 依序執行每個步驟，每步輸出一行並回傳所有結果
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<Line>> {
        let expected = self.probes.expected.as_str();
        let mut lines = Vec::with_capacity(6);

        let safe = self.letters.get(self.probes.safe_index).map(String::as_str) == Some(expected);
        self.emit(out, &mut lines, Line::new(Step::SafeGet, safe.to_string()))?;

        let safe = self.letters.get(self.probes.safe_index).map(String::as_str) == Some(expected);
        self.emit(out, &mut lines, Line::new(Step::SafeGetRepeat, safe.to_string()))?;

        let fetched = self.fetch_or_report(self.probes.unsafe_index)?;
        self.emit(out, &mut lines, Line::new(Step::UnsafeGet, fetched))?;

        let slot = self.letters.direct(self.probes.direct_index);
        self.emit(out, &mut lines, Line::new(Step::DirectIndex, slot.to_string()))?;

        self.emit(out, &mut lines, Line::new(Step::LiteralFalse, false.to_string()))?;

        let x = self.letters.direct(self.probes.direct_equal_index).into_option();
        let equal = x.map(String::as_str) == Some(expected);
        self.emit(out, &mut lines, Line::new(Step::DirectEqual, equal.to_string()))?;

        Ok(lines)
    }

    fn fetch_or_report(&self, index: i64) -> Result<String> {
        match self.letters.get_exn(index) {
            Ok(value) => Ok(value.clone()),
            Err(DemoError::IndexOutOfRange { index, len }) => {
                tracing::debug!(index, len, "caught out-of-range fault");
                Ok(OUT_OF_RANGE_MESSAGE.to_string())
            }
            Err(other) => Err(other),
        }
    }

    fn emit<W: Write>(&self, out: &mut W, lines: &mut Vec<Line>, line: Line) -> Result<()> {
        tracing::debug!(step = ?line.step, output = %line.output, "step finished");
        match self.format {
            OutputFormat::Text => writeln!(out, "{}", line.output)?,
            OutputFormat::Json => writeln!(out, "{}", render_json(&line)?)?,
        }
        lines.push(line);
        Ok(())
    }
}

impl Default for AccessDemo {
    fn default() -> Self {
        Self::new(Sequence::letters(), Probes::default())
    }
}

fn render_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.output.as_str()).collect()
    }

    #[test]
    fn test_default_run_output() {
        let demo = AccessDemo::default();
        let mut buf = Vec::new();
        let lines = demo.run(&mut buf).unwrap();

        assert_eq!(
            outputs(&lines),
            vec!["true", "true", OUT_OF_RANGE_MESSAGE, "undefined", "false", "true"]
        );
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "true\ntrue\nexception thrown: index out of range\nundefined\nfalse\ntrue\n"
        );
    }

    #[test]
    fn test_in_range_unsafe_index_prints_value() {
        let probes = Probes {
            unsafe_index: 1,
            ..Probes::default()
        };
        let demo = AccessDemo::new(Sequence::letters(), probes);
        let lines = demo.run(&mut std::io::sink()).unwrap();
        assert_eq!(lines[2].step, Step::UnsafeGet);
        assert_eq!(lines[2].output, "b");
    }

    #[test]
    fn test_in_range_direct_index_prints_value() {
        let probes = Probes {
            direct_index: 2,
            ..Probes::default()
        };
        let demo = AccessDemo::new(Sequence::letters(), probes);
        let lines = demo.run(&mut std::io::sink()).unwrap();
        assert_eq!(lines[3].output, "\"c\"");
    }

    #[test]
    fn test_mismatched_expectation_prints_false() {
        let probes = Probes {
            expected: "z".to_string(),
            ..Probes::default()
        };
        let demo = AccessDemo::new(Sequence::letters(), probes);
        let lines = demo.run(&mut std::io::sink()).unwrap();
        assert_eq!(lines[0].output, "false");
        assert_eq!(lines[1].output, "false");
        assert_eq!(lines[5].output, "false");
    }

    #[test]
    fn test_direct_equal_uses_its_own_index() {
        let probes = Probes {
            safe_index: 1,
            ..Probes::default()
        };
        let demo = AccessDemo::new(Sequence::letters(), probes);
        let lines = demo.run(&mut std::io::sink()).unwrap();
        assert_eq!(lines[0].output, "false");
        assert_eq!(lines[5].step, Step::DirectEqual);
        assert_eq!(lines[5].output, "true");

        let probes = Probes {
            direct_equal_index: 7,
            ..Probes::default()
        };
        let demo = AccessDemo::new(Sequence::letters(), probes);
        let lines = demo.run(&mut std::io::sink()).unwrap();
        assert_eq!(lines[0].output, "true");
        assert_eq!(lines[5].output, "false");
    }

    #[test]
    fn test_json_format() {
        let demo = AccessDemo::default().with_format(OutputFormat::Json);
        let mut buf = Vec::new();
        demo.run(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(first["step"], "safe_get");
        assert_eq!(first["output"], "true");
        assert_eq!(text.lines().count(), 6);
    }
}
