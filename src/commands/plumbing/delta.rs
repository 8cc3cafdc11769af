use crate::areas::workbench::Workbench;
use crate::artifacts::delta::codec::to_delta;
use std::io::Write;
use std::path::Path;

impl Workbench {
    /// Print the delta turning `old` into `new`
    pub fn delta(&self, old: &Path, new: &Path) -> anyhow::Result<()> {
        let text1 = self.read_text(old)?;
        let text2 = self.read_text(new)?;

        let diffs = self.differ().diff(&text1, &text2);
        log::debug!("encoding {} edits as a delta", diffs.len());

        writeln!(self.writer(), "{}", to_delta(&diffs))?;
        Ok(())
    }
}
