use tracing::{debug, warn};

use crate::domain::{Cents, FoodItem, QuantityLedger};

use super::AppError;

pub type Menu = QuantityLedger<FoodItem>;
pub type FoodCart = QuantityLedger<FoodItem>;

/// A restaurant and the portions it has on offer.
#[derive(Debug, Clone)]
pub struct Restaurant {
    name: String,
    menu: Menu,
}

impl Restaurant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            menu: Menu::new(),
        }
    }

    /// Fixed at construction so registered names stay unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn add_to_menu(&mut self, item: &FoodItem, quantity: i64) -> Result<(), AppError> {
        self.menu.add(item.clone(), quantity)?;
        Ok(())
    }

    pub fn remove_from_menu(&mut self, item: &FoodItem, quantity: i64) -> Result<(), AppError> {
        self.menu.remove(item, quantity)?;
        Ok(())
    }

    /// Value of every portion currently on the menu.
    pub fn total_revenue(&self) -> Cents {
        self.menu.total_value()
    }
}

#[derive(Debug, Clone)]
pub struct DeliveryCustomer {
    pub name: String,
    pub address: String,
    cart: FoodCart,
}

impl DeliveryCustomer {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            cart: FoodCart::new(),
        }
    }

    pub fn cart(&self) -> &FoodCart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, item: &FoodItem, quantity: i64) -> Result<(), AppError> {
        self.cart.add(item.clone(), quantity)?;
        Ok(())
    }

    pub fn remove_from_cart(&mut self, item: &FoodItem, quantity: i64) -> Result<(), AppError> {
        self.cart.remove(item, quantity)?;
        Ok(())
    }

    pub fn cart_total(&self) -> Cents {
        self.cart.total_value()
    }
}

/// Registry of restaurants, looked up by exact name.
#[derive(Debug, Clone, Default)]
pub struct DeliveryService {
    restaurants: Vec<Restaurant>,
}

impl DeliveryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_restaurant(&mut self, restaurant: Restaurant) -> Result<(), AppError> {
        if self.find_restaurant_by_name(&restaurant.name).is_some() {
            warn!(restaurant = %restaurant.name, "restaurant already registered");
            return Err(AppError::RestaurantAlreadyExists(restaurant.name));
        }
        debug!(restaurant = %restaurant.name, "registering restaurant");
        self.restaurants.push(restaurant);
        Ok(())
    }

    pub fn find_restaurant_by_name(&self, name: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.name == name)
    }

    pub fn find_restaurant_mut(&mut self, name: &str) -> Result<&mut Restaurant, AppError> {
        self.restaurants
            .iter_mut()
            .find(|r| r.name == name)
            .ok_or_else(|| AppError::RestaurantNotFound(name.to_string()))
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }
}
