// Template Method Pattern - Beverage Recipe
// `prepare` fixes the order of the steps. Beverages only supply the step that
// varies, and since `prepare` is a free function no beverage can reorder it.

use crate::console::Console;
use crate::error::Result;

pub trait Beverage {
    fn name(&self) -> &str;
    fn add_ingredient(&self, console: &mut Console) -> Result<()>;
}

pub fn prepare(beverage: &dyn Beverage, console: &mut Console) -> Result<()> {
    boil_water(console)?;
    beverage.add_ingredient(console)?;
    serve(beverage, console)
}

fn boil_water(console: &mut Console) -> Result<()> {
    console.line("Boiling water")?;
    Ok(())
}

fn serve(beverage: &dyn Beverage, console: &mut Console) -> Result<()> {
    console.line(format!("Serving the {}", beverage.name()))?;
    Ok(())
}

pub struct Tea;

impl Beverage for Tea {
    fn name(&self) -> &str {
        "tea"
    }

    fn add_ingredient(&self, console: &mut Console) -> Result<()> {
        console.line("Steeping the tea bag")?;
        Ok(())
    }
}

pub struct Coffee;

impl Beverage for Coffee {
    fn name(&self) -> &str {
        "coffee"
    }

    fn add_ingredient(&self, console: &mut Console) -> Result<()> {
        console.line("Brewing the ground coffee")?;
        Ok(())
    }
}

pub fn demo(console: &mut Console) -> Result<()> {
    let beverages: [&dyn Beverage; 2] = [&Tea, &Coffee];
    for (i, beverage) in beverages.into_iter().enumerate() {
        if i > 0 {
            console.blank()?;
        }
        prepare(beverage, console)?;
    }
    Ok(())
}
