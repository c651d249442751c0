use crate::error::{EstateError, EstateResult};

use super::person::Similar;

/// A list in which no two entries are similar. Order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    entity: &'static str,
    items: Vec<T>,
}

impl<T: Similar + PartialEq + Clone> UniqueList<T> {
    /// `entity` names the element kind in error messages ("buyer", "seller").
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            items: Vec::new(),
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    pub fn contains_similar(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.is_similar(item))
    }

    pub fn add(&mut self, item: T) -> EstateResult<()> {
        if self.contains_similar(&item) {
            return Err(self.duplicate());
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, item: &T) -> EstateResult<()> {
        let pos = self.position(item)?;
        self.items.remove(pos);
        Ok(())
    }

    /// Replaces `target` with `edited` in place. `edited` may be similar to `target`
    /// but to no other entry.
    pub fn set(&mut self, target: &T, edited: T) -> EstateResult<()> {
        let pos = self.position(target)?;
        let clashes = self
            .items
            .iter()
            .enumerate()
            .any(|(i, existing)| i != pos && existing.is_similar(&edited));
        if clashes {
            return Err(self.duplicate());
        }
        self.items[pos] = edited;
        Ok(())
    }

    /// Replaces the whole contents. Fails without changes if `items` holds similar entries.
    pub fn set_all(&mut self, items: Vec<T>) -> EstateResult<()> {
        if !all_distinct(&items) {
            return Err(EstateError::DuplicateInData {
                entity: self.entity.to_string(),
            });
        }
        self.items = items;
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, item: &T) -> EstateResult<usize> {
        self.items
            .iter()
            .position(|existing| existing == item)
            .ok_or_else(|| EstateError::NotFound {
                entity: self.entity.to_string(),
            })
    }

    fn duplicate(&self) -> EstateError {
        EstateError::Duplicate {
            entity: self.entity.to_string(),
        }
    }
}

fn all_distinct<T: Similar>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, a)| items[i + 1..].iter().all(|b| !a.is_similar(b)))
}
