use crate::areas::workbench::Workbench;
use crate::artifacts::cleanup::semantic::cleanup_semantic;
use crate::artifacts::diff::edit::{Edit, Operation, levenshtein};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Post-processing applied to the raw script before printing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Cleanup {
    /// Fold trivial equalities and align edits to word boundaries
    #[default]
    Semantic,
    /// Fold equalities cheaper to rewrite than to keep
    Efficiency,
    /// Print the script exactly as the engine produced it
    None,
}

impl Workbench {
    pub fn diff(
        &self,
        old: &Path,
        new: &Path,
        cleanup: Cleanup,
        line_mode: bool,
        stats: bool,
    ) -> anyhow::Result<()> {
        let text1 = self.read_text(old)?;
        let text2 = self.read_text(new)?;

        let mut diffs = self.differ().diff_main(&text1, &text2, line_mode);
        match cleanup {
            Cleanup::Semantic => cleanup_semantic(&mut diffs),
            Cleanup::Efficiency => self.differ().cleanup_efficiency(&mut diffs),
            Cleanup::None => {}
        }

        for edit in &diffs {
            self.print_edit(edit)?;
        }

        if stats {
            let (deleted, inserted) = diffs.iter().fold((0, 0), |(deleted, inserted), edit| {
                match edit.operation {
                    Operation::Delete => (deleted + edit.len(), inserted),
                    Operation::Insert => (deleted, inserted + edit.len()),
                    Operation::Equal => (deleted, inserted),
                }
            });
            writeln!(
                self.writer(),
                "{}",
                format!(
                    "{} edits, {deleted} chars deleted, {inserted} chars inserted, levenshtein {}",
                    diffs.len(),
                    levenshtein(&diffs)
                )
                .bold()
            )?;
        }

        Ok(())
    }

    /// Print an edit one line at a time, each line prefixed with the edit's marker
    fn print_edit(&self, edit: &Edit) -> anyhow::Result<()> {
        for line in edit.text.split_inclusive('\n') {
            let line = format!(
                "{}{}",
                edit.operation.marker(),
                line.strip_suffix('\n').unwrap_or(line)
            );
            match edit.operation {
                Operation::Delete => writeln!(self.writer(), "{}", line.red())?,
                Operation::Insert => writeln!(self.writer(), "{}", line.green())?,
                Operation::Equal => writeln!(self.writer(), "{}", line)?,
            }
        }

        Ok(())
    }
}
