// Decorator Pattern - Condiment Chains
// Each layer owns exactly one inner coffee and adds its label and price on top
// of whatever the inner coffee reports. Layers are fixed at construction.

use crate::console::Console;
use crate::error::Result;

pub const SIMPLE_COFFEE_COST: f64 = 2.00;

// ============================================================================
// Component interface and concrete component
// ============================================================================

pub trait Coffee {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        SIMPLE_COFFEE_COST
    }
}

// Lets runtime-built chains be wrapped again.
impl Coffee for Box<dyn Coffee> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> f64 {
        (**self).cost()
    }
}

// ============================================================================
// Decorators
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condiment {
    Milk,
    Sugar,
    WhippedCream,
    Vanilla,
}

impl Condiment {
    pub const ALL: [Condiment; 4] = [
        Condiment::Milk,
        Condiment::Sugar,
        Condiment::WhippedCream,
        Condiment::Vanilla,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Condiment::Milk => "Milk",
            Condiment::Sugar => "Sugar",
            Condiment::WhippedCream => "Whipped Cream",
            Condiment::Vanilla => "Vanilla",
        }
    }

    pub fn price(self) -> f64 {
        match self {
            Condiment::Milk => 0.50,
            Condiment::Sugar => 0.25,
            Condiment::WhippedCream => 0.75,
            Condiment::Vanilla => 0.60,
        }
    }
}

/// One layer of the chain. Owns its inner coffee for its whole life.
#[derive(Debug, Clone)]
pub struct Topping<C> {
    condiment: Condiment,
    inner: C,
}

impl<C: Coffee> Topping<C> {
    pub fn new(condiment: Condiment, inner: C) -> Self {
        Self { condiment, inner }
    }

    pub fn condiment(&self) -> Condiment {
        self.condiment
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Coffee> Coffee for Topping<C> {
    fn description(&self) -> String {
        format!("{}, {}", self.inner.description(), self.condiment.label())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + self.condiment.price()
    }
}

pub trait CoffeeExt: Coffee + Sized {
    /// Wrap `self` in one more layer.
    fn with(self, condiment: Condiment) -> Topping<Self> {
        Topping::new(condiment, self)
    }
}

impl<C: Coffee> CoffeeExt for C {}

/// Chain built at runtime. The first condiment is the innermost layer.
pub fn decorate(base: Box<dyn Coffee>, condiments: &[Condiment]) -> Box<dyn Coffee> {
    condiments
        .iter()
        .fold(base, |coffee, &condiment| -> Box<dyn Coffee> {
            Box::new(Topping::new(condiment, coffee))
        })
}

fn receipt(coffee: &dyn Coffee) -> String {
    format!("{} = ${:.2}", coffee.description(), coffee.cost())
}

pub fn demo(console: &mut Console) -> Result<()> {
    console.heading("Coffee Shop")?;

    let coffee = SimpleCoffee;
    console.line(receipt(&coffee))?;

    let with_milk = SimpleCoffee.with(Condiment::Milk);
    console.line(receipt(&with_milk))?;

    let milk_and_sugar = SimpleCoffee.with(Condiment::Milk).with(Condiment::Sugar);
    console.line(receipt(&milk_and_sugar))?;

    // Same nesting as Vanilla(WhippedCream(Sugar(Milk(Simple)))), built from a list.
    let fancy = decorate(Box::new(SimpleCoffee), &Condiment::ALL);
    console.line(receipt(fancy.as_ref()))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
