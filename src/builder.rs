// Builder Pattern - Fluent User Construction
// `User` has no public constructor; every instance comes out of a builder.

use crate::console::Console;
use crate::error::Result;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    age: u32,
    email: Option<String>,
    active: bool,
}

impl User {
    pub fn builder() -> UserBuilder {
        UserBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, Age: {}, Email: {}, Active: {}",
            self.name,
            self.age,
            self.email.as_deref().unwrap_or("none"),
            self.active
        )
    }
}

/// Unset fields fall back to an empty name, age 0, no email and inactive.
#[derive(Debug, Clone, Default)]
pub struct UserBuilder {
    name: Option<String>,
    age: Option<u32>,
    email: Option<String>,
    active: bool,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn build(self) -> User {
        User {
            name: self.name.unwrap_or_default(),
            age: self.age.unwrap_or(0),
            email: self.email,
            active: self.active,
        }
    }
}

pub fn demo(console: &mut Console) -> Result<()> {
    let user = User::builder()
        .name("John Doe")
        .age(30)
        .email("john.doe@email.com")
        .active(true)
        .build();
    console.line(format!("User created: {user}"))?;

    let guest = User::builder().name("Guest").build();
    console.line(format!("User created: {guest}"))?;
    Ok(())
}
