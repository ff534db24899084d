// Composite Pattern - Files and Folders
// Leaves and folders share one interface, so clients size and print a whole
// tree without caring which kind of node they hold.

use crate::console::Console;
use crate::error::Result;
use std::rc::Rc;

const INDENT: &str = "    ";

pub trait FileSystemComponent {
    fn name(&self) -> &str;

    /// Size in KB. Folders recompute it from their children on every call.
    fn size(&self) -> u64;

    fn show_details(&self, indent: &str, console: &mut Console) -> Result<()>;
}

// ============================================================================
// Leaf
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl FileSystemComponent for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn show_details(&self, indent: &str, console: &mut Console) -> Result<()> {
        console.line(format!("{indent}📄 {} ({} KB)", self.name, self.size))?;
        Ok(())
    }
}

// ============================================================================
// Composite
// ============================================================================

/// Ordered children, duplicates allowed. A folder may be shared by several
/// parents through `Rc`; nothing prevents a node from appearing twice.
pub struct Folder {
    name: String,
    children: Vec<Rc<dyn FileSystemComponent>>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, component: Rc<dyn FileSystemComponent>) {
        self.children.push(component);
    }

    /// Removes the first child that is the same node as `component`.
    pub fn remove(&mut self, component: &Rc<dyn FileSystemComponent>) -> bool {
        match self
            .children
            .iter()
            .position(|child| Rc::ptr_eq(child, component))
        {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn children(&self) -> &[Rc<dyn FileSystemComponent>] {
        &self.children
    }
}

impl FileSystemComponent for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.children.iter().map(|child| child.size()).sum()
    }

    fn show_details(&self, indent: &str, console: &mut Console) -> Result<()> {
        console.line(format!("{indent}📁 {} ({} KB total)", self.name, self.size()))?;
        let nested = format!("{indent}{INDENT}");
        for child in &self.children {
            child.show_details(&nested, console)?;
        }
        Ok(())
    }
}

pub fn demo(console: &mut Console) -> Result<()> {
    let mut documents = Folder::new("Documents");
    documents.add(Rc::new(File::new("document.txt", 10)));
    documents.add(Rc::new(File::new("notes.txt", 2)));

    let mut images = Folder::new("Images");
    images.add(Rc::new(File::new("image.png", 250)));

    let mut videos = Folder::new("Videos");
    videos.add(Rc::new(File::new("video.mp4", 1500)));

    let mut media = Folder::new("Media");
    media.add(Rc::new(images));
    media.add(Rc::new(videos));
    media.add(Rc::new(File::new("music.mp3", 5)));

    let documents = Rc::new(documents);
    let media = Rc::new(media);

    let mut root = Folder::new("Root");
    root.add(documents.clone());
    root.add(media.clone());

    console.heading("File System Structure")?;
    root.show_details("", console)?;
    console.blank()?;

    console.heading("Folder Sizes")?;
    console.line(format!("Documents folder size: {} KB", documents.size()))?;
    console.line(format!("Media folder size: {} KB", media.size()))?;
    console.line(format!("Total root size: {} KB", root.size()))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
