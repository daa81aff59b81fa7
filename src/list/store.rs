//! Ordered in-memory item store.
//!
//! Items keep insertion order for display. Quantities are always positive:
//! any change that would leave an item at zero or below removes it instead.

use crate::error::{BasketError, BasketResult};
use crate::list::quantity::QuantityExpr;

/// One line of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub quantity: i64,
}

/// Outcome of [`ItemStore::adjust`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Item kept with the new quantity.
    Updated(i64),
    /// Quantity reached zero or below and the item was removed.
    Removed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `name`, inserting it if absent.
    ///
    /// Returns the quantity after the add. An item already at `i64::MAX`
    /// is left untouched and reported as an invalid quantity.
    pub fn add(&mut self, name: &str) -> BasketResult<i64> {
        if name.trim().is_empty() {
            return Err(BasketError::EmptyName);
        }

        if let Some(item) = self.find_mut(name) {
            let quantity = item
                .quantity
                .checked_add(1)
                .ok_or_else(|| BasketError::invalid_quantity("+1"))?;
            item.quantity = quantity;
            tracing::debug!(item = %name, quantity, "item quantity incremented");
            return Ok(quantity);
        }

        self.items.push(Item {
            name: name.to_string(),
            quantity: 1,
        });
        tracing::debug!(item = %name, "item added");
        Ok(1)
    }

    pub fn remove(&mut self, name: &str) -> BasketResult<()> {
        let index = self
            .position(name)
            .ok_or_else(|| BasketError::not_found(name))?;
        self.items.remove(index);
        tracing::debug!(item = %name, "item removed");
        Ok(())
    }

    /// Apply a quantity expression to an existing item.
    pub fn adjust(&mut self, name: &str, expr: QuantityExpr) -> BasketResult<Adjustment> {
        let index = self
            .position(name)
            .ok_or_else(|| BasketError::not_found(name))?;

        let current = self.items[index].quantity;
        let next = expr
            .apply_to(current)
            .ok_or_else(|| BasketError::invalid_quantity(expr.to_string()))?;

        if next <= 0 {
            self.items.remove(index);
            tracing::debug!(item = %name, ?expr, "item removed by quantity change");
            return Ok(Adjustment::Removed);
        }

        self.items[index].quantity = next;
        tracing::debug!(item = %name, ?expr, from = current, to = next, "quantity changed");
        Ok(Adjustment::Updated(next))
    }

    /// Rename in place; the item keeps its position in the list.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> BasketResult<()> {
        let index = self
            .position(old_name)
            .ok_or_else(|| BasketError::not_found(old_name))?;

        if new_name.trim().is_empty() {
            return Err(BasketError::EmptyName);
        }
        if old_name == new_name {
            return Ok(());
        }
        if self.contains(new_name) {
            return Err(BasketError::duplicate(new_name));
        }

        self.items[index].name = new_name.to_string();
        tracing::debug!(from = %old_name, to = %new_name, "item renamed");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.quantity)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities, or `None` if it does not fit in `i64`.
    pub fn total_quantity(&self) -> Option<i64> {
        self.items
            .iter()
            .try_fold(0i64, |total, item| total.checked_add(item.quantity))
    }

    /// Items in display order.
    pub fn snapshot(&self) -> &[Item] {
        &self.items
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.name == name)
    }
}
