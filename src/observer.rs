// Observer Pattern - News Agency
// Subscribers register with the agency and are notified synchronously, in
// subscription order, every time news is published.

use crate::console::Console;
use crate::error::Result;
use std::rc::Rc;
use tracing::debug;

pub trait Observer {
    fn update(&self, news: &str, console: &mut Console) -> Result<()>;
}

/// Subscribers are compared by identity, not by value.
pub trait Subject {
    fn subscribe(&mut self, observer: Rc<dyn Observer>, console: &mut Console) -> Result<()>;

    /// Returns whether `observer` was subscribed.
    fn unsubscribe(&mut self, observer: &Rc<dyn Observer>, console: &mut Console)
        -> Result<bool>;

    fn notify_observers(&self, console: &mut Console) -> Result<()>;
}

// ============================================================================
// Concrete subject
// ============================================================================

#[derive(Default)]
pub struct NewsAgency {
    observers: Vec<Rc<dyn Observer>>,
    latest_news: Option<String>,
}

impl NewsAgency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish_news(&mut self, news: impl Into<String>, console: &mut Console) -> Result<()> {
        self.latest_news = Some(news.into());
        console.blank()?;
        console.line("--- Breaking News Published ---")?;
        self.notify_observers(console)
    }

    pub fn latest_news(&self) -> Option<&str> {
        self.latest_news.as_deref()
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}

impl Subject for NewsAgency {
    fn subscribe(&mut self, observer: Rc<dyn Observer>, console: &mut Console) -> Result<()> {
        self.observers.push(observer);
        debug!(subscribers = self.observers.len(), "subscriber added");
        console.line("New subscriber added!")?;
        Ok(())
    }

    fn unsubscribe(
        &mut self,
        observer: &Rc<dyn Observer>,
        console: &mut Console,
    ) -> Result<bool> {
        let Some(index) = self
            .observers
            .iter()
            .position(|existing| Rc::ptr_eq(existing, observer))
        else {
            debug!("unsubscribe ignored, observer was not subscribed");
            return Ok(false);
        };

        self.observers.remove(index);
        debug!(subscribers = self.observers.len(), "subscriber removed");
        console.line("Subscriber removed!")?;
        Ok(true)
    }

    fn notify_observers(&self, console: &mut Console) -> Result<()> {
        let Some(news) = self.latest_news.as_deref() else {
            return Ok(());
        };
        for observer in &self.observers {
            observer.update(news, console)?;
        }
        Ok(())
    }
}

// ============================================================================
// Concrete observers
// ============================================================================

pub struct EmailSubscriber {
    email: String,
}

impl EmailSubscriber {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl Observer for EmailSubscriber {
    fn update(&self, news: &str, console: &mut Console) -> Result<()> {
        console.line(format!("Email sent to {}: {news}", self.email))?;
        Ok(())
    }
}

pub struct SmsSubscriber {
    phone_number: String,
}

impl SmsSubscriber {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }
}

impl Observer for SmsSubscriber {
    fn update(&self, news: &str, console: &mut Console) -> Result<()> {
        console.line(format!("SMS sent to {}: {news}", self.phone_number))?;
        Ok(())
    }
}

pub struct AppNotificationSubscriber {
    username: String,
}

impl AppNotificationSubscriber {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl Observer for AppNotificationSubscriber {
    fn update(&self, news: &str, console: &mut Console) -> Result<()> {
        console.line(format!(
            "Push notification to {}'s app: {news}",
            self.username
        ))?;
        Ok(())
    }
}

pub fn demo(console: &mut Console) -> Result<()> {
    let mut agency = NewsAgency::new();

    let email: Rc<dyn Observer> = Rc::new(EmailSubscriber::new("john@email.com"));
    let sms: Rc<dyn Observer> = Rc::new(SmsSubscriber::new("+1234567890"));
    let app: Rc<dyn Observer> = Rc::new(AppNotificationSubscriber::new("john_doe"));

    agency.subscribe(email, console)?;
    agency.subscribe(sms.clone(), console)?;
    agency.subscribe(app, console)?;

    agency.publish_news("Design Patterns are awesome!", console)?;

    agency.unsubscribe(&sms, console)?;

    agency.publish_news("Observer Pattern implemented successfully!", console)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged(&'static str);

    impl Observer for Tagged {
        fn update(&self, news: &str, console: &mut Console) -> Result<()> {
            console.line(format!("{}:{news}", self.0))?;
            Ok(())
        }
    }

    fn tagged(tag: &'static str) -> Rc<dyn Observer> {
        Rc::new(Tagged(tag))
    }

    fn agency_with(observers: &[Rc<dyn Observer>]) -> NewsAgency {
        let mut agency = NewsAgency::new();
        let mut console = Console::memory();
        for observer in observers {
            agency.subscribe(observer.clone(), &mut console).unwrap();
        }
        agency
    }

    fn notifications(console: &Console) -> Vec<String> {
        console
            .transcript()
            .iter()
            .filter(|line| line.contains(':'))
            .cloned()
            .collect()
    }

    #[test]
    fn test_publish_reaches_all_in_order() {
        let observers = [tagged("a"), tagged("b"), tagged("c")];
        let mut agency = agency_with(&observers);

        let mut console = Console::memory();
        agency.publish_news("hello", &mut console).unwrap();

        assert_eq!(
            console.transcript(),
            ["", "--- Breaking News Published ---", "a:hello", "b:hello", "c:hello"]
        );
        assert_eq!(agency.latest_news(), Some("hello"));
    }

    #[test]
    fn test_unsubscribe_skips_only_that_observer() {
        let observers = [tagged("a"), tagged("b"), tagged("c"), tagged("d")];
        let mut agency = agency_with(&observers);

        let mut console = Console::memory();
        assert!(agency.unsubscribe(&observers[2], &mut console).unwrap());
        assert_eq!(console.transcript(), ["Subscriber removed!"]);

        console.clear();
        agency.publish_news("news", &mut console).unwrap();
        assert_eq!(notifications(&console), ["a:news", "b:news", "d:news"]);
        assert_eq!(agency.subscriber_count(), 3);
    }

    #[test]
    fn test_unsubscribe_unknown_observer() {
        let mut agency = agency_with(&[tagged("a")]);
        let mut console = Console::memory();

        assert!(!agency.unsubscribe(&tagged("a"), &mut console).unwrap());
        assert!(console.transcript().is_empty());
        assert_eq!(agency.subscriber_count(), 1);
    }

    #[test]
    fn test_double_subscription_notifies_twice() {
        let a = tagged("a");
        let mut agency = agency_with(&[a.clone(), a.clone()]);
        let mut console = Console::memory();

        agency.publish_news("x", &mut console).unwrap();
        assert_eq!(notifications(&console), ["a:x", "a:x"]);

        agency.unsubscribe(&a, &mut console).unwrap();
        console.clear();
        agency.publish_news("y", &mut console).unwrap();
        assert_eq!(notifications(&console), ["a:y"]);
    }

    #[test]
    fn test_notify_before_any_news_is_silent() {
        let agency = agency_with(&[tagged("a")]);
        let mut console = Console::memory();
        agency.notify_observers(&mut console).unwrap();
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn test_demo_output() {
        let mut console = Console::memory();
        demo(&mut console).unwrap();

        let lines = console.transcript();
        assert_eq!(
            lines.iter().filter(|l| l.starts_with("SMS sent")).count(),
            1
        );
        assert!(lines.contains(&"Push notification to john_doe's app: Observer Pattern implemented successfully!".to_string()));
        assert!(lines.contains(&"Email sent to john@email.com: Design Patterns are awesome!".to_string()));
    }
}
