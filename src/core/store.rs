//! # List Store
//!
//! All to-do lists in one place, in the order they were created.
//!
//! ```text
//! Store
//! └── lists: Vec<TodoList>      // insertion order, names unique
//!     ├── name: String
//!     └── items: Vec<Item>      // insertion order
//!         ├── text: String
//!         └── completed: bool
//! ```
//!
//! On disk the store is a single JSON object keyed by list name, so the
//! (de)serialization here is hand-written to keep list order stable across
//! a save/load round-trip.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
    pub completed: bool,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// A named, ordered sequence of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    pub name: String,
    pub items: Vec<Item>,
}

impl TodoList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicateListName(String),
    ListNotFound(String),
    ItemOutOfRange { list: String, index: usize, len: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateListName(name) => write!(f, "List name already exists: {name}"),
            StoreError::ListNotFound(name) => write!(f, "No list named {name}"),
            StoreError::ItemOutOfRange { list, index, len } => write!(
                f,
                "Item {index} is out of range for list {list} ({len} items)"
            ),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    lists: Vec<TodoList>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn lists(&self) -> impl Iterator<Item = &TodoList> {
        self.lists.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.lists.iter().map(|list| list.name.clone()).collect()
    }

    pub fn list(&self, name: &str) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.lists.iter().position(|list| list.name == name)
    }

    fn list_mut(&mut self, name: &str) -> Result<&mut TodoList, StoreError> {
        self.lists
            .iter_mut()
            .find(|list| list.name == name)
            .ok_or_else(|| StoreError::ListNotFound(name.to_string()))
    }

    fn check_index(list: &TodoList, index: usize) -> Result<(), StoreError> {
        if index < list.items.len() {
            Ok(())
        } else {
            Err(StoreError::ItemOutOfRange {
                list: list.name.clone(),
                index,
                len: list.items.len(),
            })
        }
    }

    /// Append a new, empty list. Names are compared exactly.
    pub fn create_list(&mut self, name: &str) -> Result<(), StoreError> {
        if self.contains(name) {
            return Err(StoreError::DuplicateListName(name.to_string()));
        }
        self.lists.push(TodoList::new(name));
        Ok(())
    }

    /// Remove a list with all of its items, returning what was removed.
    pub fn delete_list(&mut self, name: &str) -> Result<TodoList, StoreError> {
        let pos = self
            .position(name)
            .ok_or_else(|| StoreError::ListNotFound(name.to_string()))?;
        Ok(self.lists.remove(pos))
    }

    /// Append an item with the trimmed `text`.
    ///
    /// Returns `Ok(false)` without touching the list when the text is blank.
    pub fn add_item(&mut self, list: &str, text: &str) -> Result<bool, StoreError> {
        let list = self.list_mut(list)?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        list.items.push(Item::new(text));
        Ok(true)
    }

    pub fn remove_item(&mut self, list: &str, index: usize) -> Result<Item, StoreError> {
        let list = self.list_mut(list)?;
        Self::check_index(list, index)?;
        Ok(list.items.remove(index))
    }

    /// Flip the completion flag and return its new value.
    pub fn toggle_item(&mut self, list: &str, index: usize) -> Result<bool, StoreError> {
        let list = self.list_mut(list)?;
        Self::check_index(list, index)?;
        let item = &mut list.items[index];
        item.completed = !item.completed;
        Ok(item.completed)
    }

    /// Drop every completed item, keeping the rest in order. Returns how many went.
    pub fn clear_completed(&mut self, list: &str) -> Result<usize, StoreError> {
        let list = self.list_mut(list)?;
        let before = list.items.len();
        list.items.retain(|item| !item.completed);
        Ok(before - list.items.len())
    }
}

impl Serialize for Store {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.lists.len()))?;
        for list in &self.lists {
            map.serialize_entry(&list.name, &list.items)?;
        }
        map.end()
    }
}

struct StoreVisitor;

impl<'de> Visitor<'de> for StoreVisitor {
    type Value = Store;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping list names to arrays of items")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut store = Store::new();
        while let Some((name, items)) = access.next_entry::<String, Vec<Item>>()? {
            // A repeated key replaces the earlier entry in place
            match store.position(&name) {
                Some(pos) => store.lists[pos].items = items,
                None => store.lists.push(TodoList { name, items }),
            }
        }
        Ok(store)
    }
}

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StoreVisitor)
    }
}
