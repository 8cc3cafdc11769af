use crate::areas::options::DiffOptions;
use crate::artifacts::diff::differ::Differ;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// One command-line session: the configured differ plus the sink its output goes to
pub struct Workbench {
    differ: Differ,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Workbench {
    pub fn new(options: DiffOptions, writer: Box<dyn std::io::Write>) -> Self {
        Workbench {
            differ: Differ::new(options),
            writer: RefCell::new(writer),
        }
    }

    pub fn differ(&self) -> &Differ {
        &self.differ
    }

    pub fn options(&self) -> &DiffOptions {
        self.differ.options()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Read a whole text file, naming it in the error if that fails
    pub fn read_text(&self, path: &Path) -> anyhow::Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}
