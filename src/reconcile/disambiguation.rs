//! Operator-driven disambiguation of additions against removals.
//!
//! When the sources gained identifiers and the reference catalog lost some,
//! each addition may be a genuinely new string or an edited version of a
//! removed one. A [`DisambiguationSession`] asks the operator, candidate by
//! candidate, and records confirmed renames so existing translations can be
//! carried over instead of being dropped and recreated.

use std::collections::BTreeMap;
use std::io::{
    self,
    BufRead,
    Write,
};
use std::str::FromStr;

/// Additions, removals and confirmed renames of one run.
///
/// An identifier matched by a rename leaves both lists and appears only in
/// the update map (old identifier → new identifier).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    additions: Vec<String>,
    removals: Vec<String>,
    updates: BTreeMap<String, String>,
}

impl Reconciliation {
    #[must_use]
    pub const fn new(additions: Vec<String>, removals: Vec<String>) -> Self {
        Self { additions, removals, updates: BTreeMap::new() }
    }

    #[must_use]
    pub fn additions(&self) -> &[String] {
        &self.additions
    }

    #[must_use]
    pub fn removals(&self) -> &[String] {
        &self.removals
    }

    /// Confirmed renames, old identifier → new identifier.
    #[must_use]
    pub const fn updates(&self) -> &BTreeMap<String, String> {
        &self.updates
    }

    /// True when some addition could still be a rename of some removal.
    #[must_use]
    pub fn needs_disambiguation(&self) -> bool {
        !self.additions.is_empty() && !self.removals.is_empty()
    }

    /// Turns the addition at `candidate_index` into a rename of the removal
    /// at `removal_index`. Returns the `(old, new)` pair, or `None` when
    /// either index is out of range.
    fn record_update(
        &mut self,
        candidate_index: usize,
        removal_index: usize,
    ) -> Option<(String, String)> {
        if candidate_index >= self.additions.len() || removal_index >= self.removals.len() {
            return None;
        }

        let old_id = self.removals.remove(removal_index);
        let new_id = self.additions.remove(candidate_index);
        self.updates.insert(old_id.clone(), new_id.clone());
        Some((old_id, new_id))
    }
}

/// Operator answer to "is this string new or updated?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    New,
    Updated,
    Exit,
}

/// 入力文字列から `Classification` への変換エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid response: {0:?}")]
pub struct ParseClassificationError(String);

impl FromStr for Classification {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "upd" | "updated" => Ok(Self::Updated),
            "exit" => Ok(Self::Exit),
            _ => Err(ParseClassificationError(s.trim().to_string())),
        }
    }
}

/// How a disambiguation session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisambiguationOutcome {
    /// Every candidate was classified, or no removals were left to match.
    Resolved,
    /// The operator asked to exit, or input ended.
    Aborted,
}

/// Terminal state of one candidate's prompt cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    New,
    Updated { removal_index: usize },
    Exit,
}

/// Result of asking for the number of the previous translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Chosen(usize),
    Rejected,
    EndOfInput,
}

/// Interactive classification of additions over a borrowed [`Reconciliation`].
#[derive(Debug)]
pub struct DisambiguationSession<'s, R, W> {
    state: &'s mut Reconciliation,
    input: R,
    output: W,
}

impl<'s, R: BufRead, W: Write> DisambiguationSession<'s, R, W> {
    pub const fn new(state: &'s mut Reconciliation, input: R, output: W) -> Self {
        Self { state, input, output }
    }

    /// Prompts for each addition until all are classified or no removal is
    /// left to match against.
    ///
    /// # Errors
    /// Returns an error when writing a prompt or reading an answer fails.
    pub fn run(mut self) -> io::Result<DisambiguationOutcome> {
        let mut index = 0;

        // Once removals run out, the remaining candidates are plain additions.
        while !self.state.removals.is_empty() {
            let Some(candidate) = self.state.additions.get(index).cloned() else {
                break;
            };

            match self.resolve_candidate(&candidate)? {
                Resolution::New => {
                    tracing::debug!(%candidate, "Accepted as a new string");
                    index += 1;
                }
                Resolution::Updated { removal_index } => {
                    // The next candidate shifts into `index`.
                    if let Some((old_id, new_id)) = self.state.record_update(index, removal_index) {
                        tracing::debug!(%old_id, %new_id, "Recorded update");
                    }
                }
                Resolution::Exit => {
                    writeln!(self.output, "Canceling fixup")?;
                    self.output.flush()?;
                    return Ok(DisambiguationOutcome::Aborted);
                }
            }
        }

        Ok(DisambiguationOutcome::Resolved)
    }

    /// Runs the prompt cycle for one candidate until it reaches a terminal answer.
    fn resolve_candidate(&mut self, candidate: &str) -> io::Result<Resolution> {
        loop {
            writeln!(
                self.output,
                "Is the string \"{candidate}\" a new or updated string? [new/upd/exit]"
            )?;
            self.output.flush()?;

            let Some(answer) = self.read_answer()? else {
                tracing::warn!("Input closed during disambiguation");
                return Ok(Resolution::Exit);
            };

            match answer.parse::<Classification>() {
                Ok(Classification::New) => return Ok(Resolution::New),
                Ok(Classification::Exit) => return Ok(Resolution::Exit),
                Ok(Classification::Updated) => match self.select_removal()? {
                    Selection::Chosen(removal_index) => {
                        return Ok(Resolution::Updated { removal_index });
                    }
                    Selection::Rejected => {}
                    Selection::EndOfInput => {
                        tracing::warn!("Input closed during disambiguation");
                        return Ok(Resolution::Exit);
                    }
                },
                Err(_) => writeln!(self.output, "Invalid response.")?,
            }
        }
    }

    /// Lists the removals and reads a 1-based choice.
    fn select_removal(&mut self) -> io::Result<Selection> {
        writeln!(self.output, "Select the number for the previous translation:")?;
        for (index, removed) in self.state.removals.iter().enumerate() {
            writeln!(self.output, "\t{}. {removed}", index + 1)?;
        }
        self.output.flush()?;

        let Some(answer) = self.read_answer()? else {
            return Ok(Selection::EndOfInput);
        };

        let selection = match answer.parse::<usize>() {
            Ok(number) if (1..=self.state.removals.len()).contains(&number) => {
                Selection::Chosen(number - 1)
            }
            _ => Selection::Rejected,
        };
        Ok(selection)
    }

    /// Reads one trimmed line; `None` at end of input.
    ///
    /// A line that is not valid UTF-8 reads as an empty answer.
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(Some(String::new())),
            Err(e) => Err(e),
        }
    }
}
