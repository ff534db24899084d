// Prototype Pattern - Copying Documents with Clone
// `Clone` produces an independent copy and cannot fail, so there is no error
// path to model.

use crate::console::Console;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    content: String,
}

impl Document {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

fn show(original: &Document, copy: &Document, console: &mut Console) -> Result<()> {
    console.line(format!("Original Document Content: {}", original.content()))?;
    console.line(format!("Cloned Document Content: {}", copy.content()))?;
    Ok(())
}

pub fn demo(console: &mut Console) -> Result<()> {
    let original = Document::new("This is the original document.");
    let mut copy = original.clone();
    show(&original, &copy, console)?;

    copy.set_content("This is the modified cloned document.");

    console.line("After modifying the cloned document:")?;
    show(&original, &copy, console)
}
