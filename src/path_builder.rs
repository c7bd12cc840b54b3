//! Builder: a path assembled one step at a time.
//!
//! ```
//! use pattern_gallery::PathBuilder;
//!
//! let path = PathBuilder::new().up().up().left().end().left();
//! assert_eq!(path.to_string(), "S > UP > UP > LEFT > E\n");
//! ```

use crate::error::Error;
use itertools::Itertools;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

const SEPARATOR: &str = " > ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Start,
    Up,
    Down,
    Left,
    Right,
    End,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Step::Start => "S",
            Step::Up => "UP",
            Step::Down => "DOWN",
            Step::Left => "LEFT",
            Step::Right => "RIGHT",
            Step::End => "E",
        };
        f.write_str(token)
    }
}

impl FromStr for Step {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Step::Start),
            "up" => Ok(Step::Up),
            "down" => Ok(Step::Down),
            "left" => Ok(Step::Left),
            "right" => Ok(Step::Right),
            "end" => Ok(Step::End),
            _ => Err(Error::UnknownStep(s.to_string())),
        }
    }
}

/// Always starts with [`Step::Start`]. Once [`Step::End`] is appended the
/// path is frozen and every further step is dropped.
#[must_use = "a path does nothing until it is rendered"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathBuilder {
    steps: Vec<Step>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            steps: vec![Step::Start],
        }
    }

    pub fn up(mut self) -> Self {
        self.step(Step::Up);
        self
    }

    pub fn down(mut self) -> Self {
        self.step(Step::Down);
        self
    }

    pub fn left(mut self) -> Self {
        self.step(Step::Left);
        self
    }

    pub fn right(mut self) -> Self {
        self.step(Step::Right);
        self
    }

    pub fn end(mut self) -> Self {
        self.step(Step::End);
        self
    }

    /// Appends `step` unless the path has ended. A second `Start` is ignored.
    pub fn step(&mut self, step: Step) -> &mut Self {
        if self.is_ended() {
            tracing::trace!(%step, "path already ended, step ignored");
        } else if step == Step::Start {
            tracing::trace!("path already started, start ignored");
        } else {
            self.steps.push(step);
        }
        self
    }

    pub fn is_ended(&self) -> bool {
        self.steps.last() == Some(&Step::End)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Step> for PathBuilder {
    fn extend<I: IntoIterator<Item = Step>>(&mut self, iter: I) {
        for step in iter {
            self.step(step);
        }
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.steps.iter().join(SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_with_start_token() {
        let path = PathBuilder::new();
        assert_eq!(path.steps(), &[Step::Start]);
        assert_eq!(path.render(), "S\n");
        assert!(!path.is_ended());
    }

    #[test]
    fn steps_after_end_are_ignored() {
        let path = PathBuilder::new().up().up().left().end().left();
        assert_eq!(path.to_string(), "S > UP > UP > LEFT > E\n");
        assert!(path.is_ended());
    }

    #[test]
    fn repeated_end_is_a_noop() {
        let path = PathBuilder::new().down().end().end().right().end();
        assert_eq!(path.len(), 3);
        assert_eq!(path.render(), "S > DOWN > E\n");
    }

    #[test]
    fn original_driver_path() {
        let path = PathBuilder::new()
            .up()
            .up()
            .left()
            .up()
            .right()
            .end()
            .left();
        assert_eq!(path.render(), "S > UP > UP > LEFT > UP > RIGHT > E\n");
    }

    #[test]
    fn second_start_is_ignored() {
        let mut path = PathBuilder::new();
        path.step(Step::Start).step(Step::Up);
        assert_eq!(path.steps(), &[Step::Start, Step::Up]);
    }

    #[test]
    fn parses_step_names() {
        assert_eq!("up".parse::<Step>().unwrap(), Step::Up);
        assert_eq!(" RIGHT ".parse::<Step>().unwrap(), Step::Right);
        assert!(matches!(
            "sideways".parse::<Step>(),
            Err(Error::UnknownStep(name)) if name == "sideways"
        ));
    }

    fn moves() -> impl Strategy<Value = Step> {
        prop_oneof![
            Just(Step::Up),
            Just(Step::Down),
            Just(Step::Left),
            Just(Step::Right),
        ]
    }

    proptest! {
        #[test]
        fn renders_steps_in_order(steps in prop::collection::vec(moves(), 0..20)) {
            let mut path = PathBuilder::new();
            path.extend(steps.iter().copied());

            let expected = std::iter::once("S".to_string())
                .chain(steps.iter().map(Step::to_string))
                .join(" > ");
            prop_assert_eq!(path.render(), format!("{expected}\n"));
        }

        #[test]
        fn tail_after_end_has_no_effect(
            head in prop::collection::vec(moves(), 0..10),
            tail in prop::collection::vec(moves(), 0..10),
        ) {
            let mut ended = PathBuilder::new();
            ended.extend(head.iter().copied());
            ended.step(Step::End);
            let before = ended.render();

            ended.extend(tail.iter().copied());
            ended.step(Step::End);
            prop_assert_eq!(ended.render(), before);
        }
    }
}
