extern crate log;

use crate::meta::MetaData;
use log::debug;
use std::{error::Error as StdError, fmt};

/// An input file joined with its expected output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub id: i64,
    pub name: String,
    pub input_path: String,
    /// Empty when the problem stores no expected output for this case.
    pub output_path: String,
    pub custom: bool,
}

impl TestCase {
    pub fn has_output(&self) -> bool {
        !self.output_path.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound(pub i64);

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown test case with id {}", self.0)
    }
}
impl StdError for NotFound {}

/// Finds the first input with `id`, then attaches the path of the first
/// output sharing its name.
pub fn resolve(meta: &MetaData, id: i64) -> Result<TestCase, NotFound> {
    let input = meta
        .inputs
        .iter()
        .find(|input| input.id == id)
        .ok_or(NotFound(id))?;
    let output_path = meta
        .outputs
        .iter()
        .find(|output| output.name == input.name)
        .map(|output| output.path.clone())
        .unwrap_or_default();
    debug!(
        "Resolved test case {} ({}): input {:?} output {:?}",
        id, input.name, input.path, output_path
    );
    Ok(TestCase {
        id: input.id,
        name: input.name.clone(),
        input_path: input.path.clone(),
        output_path,
        custom: input.custom,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{InputFile, OutputFile};

    fn input(id: i64, name: &str, path: &str, custom: bool) -> InputFile {
        InputFile {
            id,
            name: name.to_string(),
            path: path.to_string(),
            custom,
        }
    }
    fn output(name: &str, path: &str) -> OutputFile {
        OutputFile {
            name: name.to_string(),
            path: path.to_string(),
            custom: false,
        }
    }
    fn meta(inputs: Vec<InputFile>, outputs: Vec<OutputFile>) -> MetaData {
        MetaData {
            inputs,
            outputs,
            ..MetaData::default()
        }
    }

    #[test]
    fn matched_pair() {
        let meta = meta(vec![input(1, "t1", "in1", false)], vec![output("t1", "out1")]);
        assert_eq!(
            resolve(&meta, 1),
            Ok(TestCase {
                id: 1,
                name: "t1".to_string(),
                input_path: "in1".to_string(),
                output_path: "out1".to_string(),
                custom: false,
            })
        );
    }

    #[test]
    fn missing_output_is_empty() {
        let meta = meta(vec![input(1, "t1", "in1", false)], vec![]);
        let case = resolve(&meta, 1).unwrap();
        assert_eq!(case.output_path, "");
        assert!(!case.has_output());
    }

    #[test]
    fn no_inputs() {
        let meta = meta(vec![], vec![output("t1", "out1")]);
        assert_eq!(resolve(&meta, 1), Err(NotFound(1)));
    }

    #[test]
    fn absent_id_ignores_outputs() {
        let meta = meta(
            vec![input(0, "t0", "in0", false), input(2, "t2", "in2", false)],
            vec![output("t1", "out1"), output("t0", "out0")],
        );
        assert_eq!(resolve(&meta, 1), Err(NotFound(1)));
        assert_eq!(NotFound(1).to_string(), "Unknown test case with id 1");
    }

    #[test]
    fn first_duplicate_id_wins() {
        let meta = meta(
            vec![input(3, "first", "a.in", true), input(3, "second", "b.in", false)],
            vec![output("second", "b.ans"), output("first", "a.ans")],
        );
        let case = resolve(&meta, 3).unwrap();
        assert_eq!(case.name, "first");
        assert_eq!(case.input_path, "a.in");
        assert_eq!(case.output_path, "a.ans");
        assert!(case.custom);
    }

    #[test]
    fn first_duplicate_name_wins() {
        let meta = meta(
            vec![input(0, "t", "in", false)],
            vec![output("t", "one.ans"), output("t", "two.ans")],
        );
        assert_eq!(resolve(&meta, 0).unwrap().output_path, "one.ans");
    }

    #[test]
    fn outputs_join_by_name_not_position() {
        let meta = meta(
            vec![input(0, "alpha", "a.in", false), input(1, "beta", "b.in", false)],
            vec![output("beta", "b.ans"), output("alpha", "a.ans")],
        );
        assert_eq!(resolve(&meta, 0).unwrap().output_path, "a.ans");
        assert_eq!(resolve(&meta, 1).unwrap().output_path, "b.ans");
    }

    #[test]
    fn resolve_is_repeatable() {
        let meta = meta(vec![input(5, "t5", "in5", true)], vec![output("t5", "out5")]);
        assert_eq!(resolve(&meta, 5), resolve(&meta, 5));
    }
}
