use crate::areas::workbench::Workbench;
use crate::artifacts::delta::codec::from_delta;
use crate::artifacts::diff::edit::text2;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Workbench {
    /// Rebuild the new text from `old` and a delta file, printing it verbatim
    pub fn apply_delta(&self, old: &Path, delta_file: &Path) -> anyhow::Result<()> {
        let text1 = self.read_text(old)?;
        let delta = self.read_text(delta_file)?;
        // Deltas are written one per line.
        let delta = delta.strip_suffix('\n').unwrap_or(&delta);

        let diffs = from_delta(&text1, delta).with_context(|| {
            format!(
                "cannot apply {} to {}",
                delta_file.display(),
                old.display()
            )
        })?;

        write!(self.writer(), "{}", text2(&diffs))?;
        self.writer().flush()?;
        Ok(())
    }
}
