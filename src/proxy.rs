// Proxy Pattern - Lazy Image Loading
// A ProxyImage stands in for a RealImage and only pays the load cost the first
// time the image is actually displayed.

use crate::console::Console;
use crate::error::Result;
use std::cell::OnceCell;
use tracing::debug;

pub trait Image {
    fn display(&self, console: &mut Console) -> Result<()>;
}

#[derive(Debug)]
pub struct RealImage {
    filename: String,
}

impl RealImage {
    /// Loading is the expensive step and announces itself.
    pub fn load(filename: impl Into<String>, console: &mut Console) -> Result<Self> {
        let filename = filename.into();
        console.line(format!("Loading image {filename}"))?;
        Ok(Self { filename })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl Image for RealImage {
    fn display(&self, console: &mut Console) -> Result<()> {
        console.line(format!("Displaying image {}", self.filename))?;
        Ok(())
    }
}

pub struct ProxyImage {
    filename: String,
    real: OnceCell<RealImage>,
}

impl ProxyImage {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            real: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.get().is_some()
    }

    fn real(&self, console: &mut Console) -> Result<&RealImage> {
        if let Some(image) = self.real.get() {
            return Ok(image);
        }
        debug!(filename = %self.filename, "loading image on first display");
        let image = RealImage::load(self.filename.as_str(), console)?;
        Ok(self.real.get_or_init(|| image))
    }
}

impl Image for ProxyImage {
    fn display(&self, console: &mut Console) -> Result<()> {
        self.real(console)?.display(console)
    }
}

pub fn demo(console: &mut Console) -> Result<()> {
    let image = ProxyImage::new("photo_1.png");
    console.line("Proxy created, nothing loaded yet")?;

    image.display(console)?;
    console.blank()?;
    image.display(console)?;
    Ok(())
}
