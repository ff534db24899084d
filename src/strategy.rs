// Strategy Pattern - Payment Methods
// The cart knows how to check out; how the money moves is a strategy that can
// be swapped at any time.

use crate::console::Console;
use crate::error::Result;

pub trait PaymentStrategy {
    fn pay(&self, amount: u32, console: &mut Console) -> Result<()>;
    fn method(&self) -> &str;
}

pub struct CreditCardPayment {
    card_number: String,
    holder: String,
}

impl CreditCardPayment {
    pub fn new(card_number: impl Into<String>, holder: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
            holder: holder.into(),
        }
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u32, console: &mut Console) -> Result<()> {
        console.line(format!(
            "{amount}$ paid with credit card: {}",
            self.card_number
        ))?;
        Ok(())
    }

    fn method(&self) -> &str {
        "credit card"
    }
}

pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: u32, console: &mut Console) -> Result<()> {
        console.line(format!("{amount}$ paid using PayPal account: {}", self.email))?;
        Ok(())
    }

    fn method(&self) -> &str {
        "PayPal"
    }
}

pub struct CashPayment;

impl PaymentStrategy for CashPayment {
    fn pay(&self, amount: u32, console: &mut Console) -> Result<()> {
        console.line(format!("{amount}$ paid in cash"))?;
        Ok(())
    }

    fn method(&self) -> &str {
        "cash"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkout {
    Paid { method: String, amount: u32 },
    NoPaymentMethod,
}

#[derive(Default)]
pub struct ShoppingCart {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn checkout(&self, amount: u32, console: &mut Console) -> Result<Checkout> {
        let Some(strategy) = &self.strategy else {
            console.warn("Please select a payment method!")?;
            return Ok(Checkout::NoPaymentMethod);
        };

        strategy.pay(amount, console)?;
        Ok(Checkout::Paid {
            method: strategy.method().to_string(),
            amount,
        })
    }
}

pub fn demo(console: &mut Console) -> Result<()> {
    let mut cart = ShoppingCart::new();
    cart.checkout(10, console)?;

    cart.set_payment_strategy(Box::new(CreditCardPayment::new(
        "1234-5678-9012-3456",
        "John Doe",
    )));
    cart.checkout(100, console)?;

    cart.set_payment_strategy(Box::new(PayPalPayment::new("john.doe@email.com")));
    cart.checkout(250, console)?;

    cart.set_payment_strategy(Box::new(CashPayment));
    cart.checkout(50, console)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_without_strategy() {
        let cart = ShoppingCart::new();
        let mut console = Console::memory();

        let outcome = cart.checkout(42, &mut console).unwrap();
        assert_eq!(outcome, Checkout::NoPaymentMethod);
        assert_eq!(console.transcript(), ["Please select a payment method!"]);
    }

    #[test]
    fn test_switching_strategies() {
        let mut cart = ShoppingCart::new();
        let mut console = Console::memory();

        cart.set_payment_strategy(Box::new(CreditCardPayment::new("1111", "Ann")));
        let first = cart.checkout(100, &mut console).unwrap();

        cart.set_payment_strategy(Box::new(CashPayment));
        let second = cart.checkout(5, &mut console).unwrap();

        assert_eq!(
            first,
            Checkout::Paid {
                method: "credit card".to_string(),
                amount: 100
            }
        );
        assert_eq!(
            second,
            Checkout::Paid {
                method: "cash".to_string(),
                amount: 5
            }
        );
        assert_eq!(
            console.transcript(),
            ["100$ paid with credit card: 1111", "5$ paid in cash"]
        );
    }

    #[test]
    fn test_paypal() {
        let mut console = Console::memory();
        PayPalPayment::new("me@example.com")
            .pay(250, &mut console)
            .unwrap();
        assert_eq!(
            console.transcript(),
            ["250$ paid using PayPal account: me@example.com"]
        );
    }

    #[test]
    fn test_card_holder_is_kept() {
        let card = CreditCardPayment::new("4242", "John Doe");
        assert_eq!(card.holder(), "John Doe");
        assert_eq!(card.method(), "credit card");
    }
}
