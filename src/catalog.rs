// Every demo in the crate, addressable by name.

use crate::console::Console;
use crate::error::{PatternError, Result};
use crate::{
    adapter, builder, composite, decorator, observer, prototype, proxy, strategy, template_method,
};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Adapter,
    Builder,
    Composite,
    Decorator,
    Observer,
    Prototype,
    Proxy,
    Strategy,
    TemplateMethod,
}

impl Demo {
    pub const ALL: [Demo; 9] = [
        Demo::Adapter,
        Demo::Builder,
        Demo::Composite,
        Demo::Decorator,
        Demo::Observer,
        Demo::Prototype,
        Demo::Proxy,
        Demo::Strategy,
        Demo::TemplateMethod,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Adapter => "adapter",
            Demo::Builder => "builder",
            Demo::Composite => "composite",
            Demo::Decorator => "decorator",
            Demo::Observer => "observer",
            Demo::Prototype => "prototype",
            Demo::Proxy => "proxy",
            Demo::Strategy => "strategy",
            Demo::TemplateMethod => "template-method",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Adapter => "Adapter Pattern",
            Demo::Builder => "Builder Pattern",
            Demo::Composite => "Composite Pattern",
            Demo::Decorator => "Decorator Pattern",
            Demo::Observer => "Observer Pattern",
            Demo::Prototype => "Prototype Pattern",
            Demo::Proxy => "Proxy Pattern",
            Demo::Strategy => "Strategy Pattern",
            Demo::TemplateMethod => "Template Method Pattern",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|demo| demo.name()).collect()
    }

    pub fn run(self, console: &mut Console) -> Result<()> {
        match self {
            Demo::Adapter => adapter::demo(console),
            Demo::Builder => builder::demo(console),
            Demo::Composite => composite::demo(console),
            Demo::Decorator => decorator::demo(console),
            Demo::Observer => observer::demo(console),
            Demo::Prototype => prototype::demo(console),
            Demo::Proxy => proxy::demo(console),
            Demo::Strategy => strategy::demo(console),
            Demo::TemplateMethod => template_method::demo(console),
        }
    }
}

impl FromStr for Demo {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|demo| demo.name() == wanted)
            .ok_or_else(|| PatternError::UnknownDemo(s.to_string()))
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
