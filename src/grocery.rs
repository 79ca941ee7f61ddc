use std::fmt;

use serde::{Deserialize, Serialize};

use crate::declare_storage;
use crate::store::StoreKey;

/// Shared shape of everything sold in the grocery store.
pub trait Grocery {
    fn price(&self) -> f64;
    fn set_price(&mut self, price: f64);
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub price: f64,
    pub name: String,
    /// 1 - 10
    pub sweetness: u8,
}

impl Fruit {
    pub fn new(name: impl Into<String>, price: f64, sweetness: u8) -> Self {
        Self {
            price,
            name: name.into(),
            sweetness,
        }
    }
}

impl Grocery for Fruit {
    fn price(&self) -> f64 {
        self.price
    }

    fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is {}/10 sweet and costs {}",
            self.name, self.sweetness, self.price
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vegetable {
    pub price: f64,
    pub name: String,
    pub has_carbs: bool,
}

impl Vegetable {
    pub fn new(name: impl Into<String>, price: f64, has_carbs: bool) -> Self {
        Self {
            price,
            name: name.into(),
            has_carbs,
        }
    }
}

impl Grocery for Vegetable {
    fn price(&self) -> f64 {
        self.price
    }

    fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Vegetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let carbs = if self.has_carbs { "carbs" } else { "no carbs" };
        write!(f, "{} has {} and costs {}", self.name, carbs, self.price)
    }
}

/// Any grocery that can be kept in [`GroceriesListStorage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GroceryItem {
    Fruit(Fruit),
    Vegetable(Vegetable),
}

impl Grocery for GroceryItem {
    fn price(&self) -> f64 {
        match self {
            GroceryItem::Fruit(fruit) => fruit.price(),
            GroceryItem::Vegetable(veg) => veg.price(),
        }
    }

    fn set_price(&mut self, price: f64) {
        match self {
            GroceryItem::Fruit(fruit) => fruit.set_price(price),
            GroceryItem::Vegetable(veg) => veg.set_price(price),
        }
    }

    fn name(&self) -> &str {
        match self {
            GroceryItem::Fruit(fruit) => fruit.name(),
            GroceryItem::Vegetable(veg) => veg.name(),
        }
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroceryItem::Fruit(fruit) => fmt::Display::fmt(fruit, f),
            GroceryItem::Vegetable(veg) => fmt::Display::fmt(veg, f),
        }
    }
}

impl From<Fruit> for GroceryItem {
    fn from(fruit: Fruit) -> Self {
        GroceryItem::Fruit(fruit)
    }
}

impl From<Vegetable> for GroceryItem {
    fn from(veg: Vegetable) -> Self {
        GroceryItem::Vegetable(veg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroceryKey {
    #[serde(rename = "fruits")]
    Fruits,
    #[serde(rename = "veggies")]
    Vegetables,
}

impl StoreKey for GroceryKey {
    const ALL: &'static [Self] = &[GroceryKey::Fruits, GroceryKey::Vegetables];

    fn as_str(&self) -> &'static str {
        match self {
            GroceryKey::Fruits => "fruits",
            GroceryKey::Vegetables => "veggies",
        }
    }
}

declare_storage! {
    /// Process-wide grocery inventory.
    pub struct GroceriesListStorage: GroceryKey => GroceryItem;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fruit_description() {
        let banana = Fruit::new("Banana", 0.90, 8);
        assert_eq!(banana.to_string(), "Banana is 8/10 sweet and costs 0.9");
    }

    #[test]
    fn vegetable_description() {
        let cucumber = Vegetable::new("Cucumber", 0.40, false);
        assert_eq!(cucumber.to_string(), "Cucumber has no carbs and costs 0.4");

        let potato = Vegetable::new("Potato", 0.25, true);
        assert_eq!(potato.to_string(), "Potato has carbs and costs 0.25");
    }

    #[test]
    fn grocery_item_forwards_shared_fields() {
        let mut item = GroceryItem::from(Fruit::new("Kiwi", 1.30, 8));
        assert_eq!(item.name(), "Kiwi");
        item.set_price(1.10);
        assert_eq!(item.price(), 1.10);
        assert_eq!(item.to_string(), "Kiwi is 8/10 sweet and costs 1.1");
    }

    #[test]
    fn keys_serialize_as_raw_names() {
        for key in GroceryKey::ALL {
            let json = serde_json::to_string(key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
            assert_eq!(serde_json::from_str::<GroceryKey>(&json).unwrap(), *key);
        }
        assert_eq!(GroceryKey::Vegetables.as_str(), "veggies");
    }

    #[test]
    fn grocery_item_json_is_tagged() {
        let item = GroceryItem::from(Vegetable::new("Cucumber", 0.40, false));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "vegetable");
        assert_eq!(json["has_carbs"], false);

        let back: GroceryItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
