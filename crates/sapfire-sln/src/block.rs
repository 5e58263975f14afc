//! Block grammar and the line scanner shared by every composite block.
//!
//! A solution file is a tree of delimited regions. Each composite block
//! (root, project, global) scans its own body one line at a time and is
//! always in one of two states: scanning its own lines, or accumulating the
//! body of exactly one open child. When the child's end token arrives the
//! accumulated body is handed to the child's [`Block::parse`], which repeats
//! the same scan one level down.
//!
//! A body holds the child's opening line followed by every line up to, but
//! not including, the end token. Children that need their header (project
//! entries, global sections) read it from the first body line.

use crate::error::{Result, SlnError};

/// One whitespace-trimmed line with its 1-based line number in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number in the solution file.
    pub number: usize,
    /// Line contents with surrounding whitespace removed.
    pub text: &'a str,
}

/// The accumulated text of a block, anchored to its first line in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    text: String,
    first_line: usize,
}

impl Body {
    /// Create a body whose first line sits on `first_line` of the file.
    pub fn new(text: impl Into<String>, first_line: usize) -> Self {
        Self {
            text: text.into(),
            first_line,
        }
    }

    /// The raw body text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// File line number of the first body line.
    pub fn first_line(&self) -> usize {
        self.first_line
    }

    /// Iterate trimmed, numbered lines.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        self.text.lines().enumerate().map(move |(i, text)| Line {
            number: self.first_line + i,
            text: text.trim(),
        })
    }

    fn push(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }
}

/// A region of a solution file that can build itself from its body.
pub trait Block: Sized {
    /// Parse a block from its body text.
    fn parse(body: &Body) -> Result<Self>;
}

/// The parent side of a scan: which children may open at this level, and
/// where a finished child goes.
pub(crate) trait Container {
    /// Kind tag for a child that has been opened.
    type Child;

    /// Every end token a child at this level can close with.
    const END_TOKENS: &'static [&'static str];

    /// Return the child kind if `line` opens one.
    fn open(&self, line: Line<'_>) -> Result<Option<Self::Child>>;

    /// End token that closes `child`.
    fn end_token(child: &Self::Child) -> &'static str;

    /// Human-readable block name used in errors.
    fn block_name(child: &Self::Child) -> &'static str;

    /// Parse the finished child from `body` and attach it.
    fn close(&mut self, child: Self::Child, body: Body) -> Result<()>;

    /// A line outside any child that is not a start or end token.
    fn scalar(&mut self, _line: Line<'_>) -> Result<()> {
        Ok(())
    }
}

struct OpenChild<C> {
    child: C,
    body: Body,
}

/// Run the two-state scan over `lines`, feeding `container`.
pub(crate) fn scan<'a, C: Container>(
    lines: impl Iterator<Item = Line<'a>>,
    container: &mut C,
) -> Result<()> {
    let mut open: Option<OpenChild<C::Child>> = None;

    for line in lines {
        let Some(mut current) = open.take() else {
            if let Some(child) = container.open(line)? {
                let mut body = Body::new(String::new(), line.number);
                body.push(line.text);
                open = Some(OpenChild { child, body });
            } else if let Some(token) = C::END_TOKENS.iter().find(|t| **t == line.text) {
                return Err(SlnError::UnmatchedEndToken {
                    token: *token,
                    line: line.number,
                });
            } else {
                container.scalar(line)?;
            }
            continue;
        };

        if line.text == C::end_token(&current.child) {
            container.close(current.child, current.body)?;
        } else if C::END_TOKENS.iter().any(|t| *t == line.text) {
            // A sibling's end token: the open child never got its own.
            return Err(SlnError::UnterminatedBlock {
                block: C::block_name(&current.child),
                line: current.body.first_line,
            });
        } else if let Some(nested) = container.open(line)? {
            return Err(SlnError::UnexpectedNesting {
                block: C::block_name(&nested),
                line: line.number,
            });
        } else {
            current.body.push(line.text);
            open = Some(current);
        }
    }

    match open {
        Some(current) => Err(SlnError::UnterminatedBlock {
            block: C::block_name(&current.child),
            line: current.body.first_line,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects `Begin`/`End` children and records scalar lines.
    #[derive(Default)]
    struct Recorder {
        children: Vec<Body>,
        scalars: Vec<String>,
    }

    impl Container for Recorder {
        type Child = ();
        const END_TOKENS: &'static [&'static str] = &["End"];

        fn open(&self, line: Line<'_>) -> Result<Option<()>> {
            Ok(line.text.starts_with("Begin(").then_some(()))
        }

        fn end_token(_: &()) -> &'static str {
            "End"
        }

        fn block_name(_: &()) -> &'static str {
            "Begin"
        }

        fn close(&mut self, _: (), body: Body) -> Result<()> {
            self.children.push(body);
            Ok(())
        }

        fn scalar(&mut self, line: Line<'_>) -> Result<()> {
            self.scalars.push(line.text.to_string());
            Ok(())
        }
    }

    fn run(text: &str) -> Result<Recorder> {
        let body = Body::new(text, 1);
        let mut recorder = Recorder::default();
        scan(body.lines(), &mut recorder)?;
        Ok(recorder)
    }

    #[test]
    fn lines_are_trimmed_and_numbered() {
        let body = Body::new("  a  \n\tb\n", 10);
        let lines: Vec<_> = body.lines().collect();
        assert_eq!(
            lines,
            vec![
                Line { number: 10, text: "a" },
                Line { number: 11, text: "b" },
            ]
        );
    }

    #[test]
    fn child_body_includes_opening_line_only() {
        let rec = run("head\nBegin(x)\n  inner = 1\nEnd\ntail\n").unwrap();
        assert_eq!(rec.children.len(), 1);
        assert_eq!(rec.children[0].text(), "Begin(x)\ninner = 1\n");
        assert_eq!(rec.children[0].first_line(), 2);
        assert_eq!(rec.scalars, vec!["head", "tail"]);
    }

    #[test]
    fn consecutive_children() {
        let rec = run("Begin(a)\nEnd\nBegin(b)\nEnd\n").unwrap();
        assert_eq!(rec.children.len(), 2);
        assert_eq!(rec.children[1].first_line(), 3);
    }

    #[test]
    fn unterminated_child_is_an_error() {
        let err = run("Begin(a)\nstuff\n").err().unwrap();
        assert!(matches!(
            err,
            SlnError::UnterminatedBlock { block: "Begin", line: 1 }
        ));
    }

    #[test]
    fn nested_sibling_is_an_error() {
        let err = run("Begin(a)\nBegin(b)\nEnd\n").err().unwrap();
        assert!(matches!(err, SlnError::UnexpectedNesting { line: 2, .. }));
    }

    #[test]
    fn stray_end_token_is_an_error() {
        let err = run("x\nEnd\n").err().unwrap();
        assert!(matches!(
            err,
            SlnError::UnmatchedEndToken { token: "End", line: 2 }
        ));
    }

    #[test]
    fn empty_input_is_fine() {
        let rec = run("").unwrap();
        assert!(rec.children.is_empty());
        assert!(rec.scalars.is_empty());
    }
}
