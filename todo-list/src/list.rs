//! An ordered collection of [`Todo`] handles.
//!
//! A [`TodoList`] keeps its todos in insertion order and supports indexed
//! access, bulk marking, removal from either end or from the middle, and
//! filtering into a new list. The list stores handles, so changes made to a
//! todo through any accessor are visible through the list, and through any
//! list produced by [`TodoList::select`].

use crate::error::{Result, TodoListError};
use crate::todo::Todo;
use log::debug;
use std::fmt;

/// Width of the centred header line produced by the `Display` impl.
pub const HEADER_WIDTH: usize = 30;

/// A titled, ordered list of todos.
///
/// Cloning a list copies the sequence of handles, not the todos themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    title: String,
    items: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Appends a todo to the end of the list.
    ///
    /// Only todos can be added:
    ///
    /// ```compile_fail
    /// use todo_list::TodoList;
    ///
    /// let mut list = TodoList::new("Today's todos");
    /// list.add(0);
    /// ```
    pub fn add(&mut self, todo: Todo) -> &mut Self {
        debug!("Adding {:?} to {:?}", todo.title(), self.title);
        self.items.push(todo);
        self
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&Todo> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&Todo> {
        self.items.last()
    }

    /// Returns the todo at a zero-based index
    pub fn item_at(&self, index: usize) -> Result<&Todo> {
        self.items.get(index).ok_or(TodoListError::IndexOutOfRange {
            index,
            size: self.size(),
        })
    }

    /// Returns the first todo whose title matches `title` exactly
    pub fn find_by_title(&self, title: &str) -> Option<&Todo> {
        self.items.iter().find(|item| item.has_title(title))
    }

    pub fn mark_done_at(&self, index: usize) -> Result<()> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    pub fn mark_undone_at(&self, index: usize) -> Result<()> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    /// Marks the first todo titled `title` as done
    pub fn mark_done(&self, title: &str) -> Result<()> {
        let todo = self
            .find_by_title(title)
            .ok_or_else(|| TodoListError::NotFound {
                title: title.to_string(),
            })?;
        todo.mark_done();
        Ok(())
    }

    pub fn mark_all_done(&self) {
        debug!("Marking all {} todos in {:?} done", self.size(), self.title);
        self.each(Todo::mark_done);
    }

    pub fn mark_all_undone(&self) {
        debug!("Marking all {} todos in {:?} undone", self.size(), self.title);
        self.each(Todo::mark_undone);
    }

    /// Returns true when every todo is done, including when there are none
    pub fn is_all_done(&self) -> bool {
        self.items.iter().all(Todo::is_done)
    }

    /// Removes and returns the first todo
    pub fn shift(&mut self) -> Option<Todo> {
        if self.items.is_empty() {
            return None;
        }
        let todo = self.items.remove(0);
        debug!("Shifted {:?} off {:?}", todo.title(), self.title);
        Some(todo)
    }

    /// Removes and returns the last todo
    pub fn pop(&mut self) -> Option<Todo> {
        let todo = self.items.pop()?;
        debug!("Popped {:?} off {:?}", todo.title(), self.title);
        Some(todo)
    }

    /// Removes and returns the todo at `index`, shifting later todos left
    pub fn remove_at(&mut self, index: usize) -> Result<Todo> {
        if index >= self.size() {
            return Err(TodoListError::IndexOutOfRange {
                index,
                size: self.size(),
            });
        }
        let todo = self.items.remove(index);
        debug!("Removed {:?} at {} from {:?}", todo.title(), index, self.title);
        Ok(todo)
    }

    /// Calls `visitor` once for every todo, in order, and returns the list.
    ///
    /// ```
    /// use todo_list::{Todo, TodoList};
    ///
    /// let mut list = TodoList::new("Today's todos");
    /// list.add(Todo::new("Buy milk")).add(Todo::new("clean room"));
    ///
    /// let mut titles = Vec::new();
    /// list.each(|todo| titles.push(todo.title()))
    ///     .each(|todo| todo.mark_done());
    ///
    /// assert_eq!(titles, ["Buy milk", "clean room"]);
    /// assert!(list.is_all_done());
    /// ```
    pub fn each<F>(&self, mut visitor: F) -> &Self
    where
        F: FnMut(&Todo),
    {
        let mut index = 0;
        while index < self.size() {
            visitor(&self.items[index]);
            index += 1;
        }
        self
    }

    /// Builds a new list with the same title holding the todos that satisfy
    /// `predicate`, in their original order.
    ///
    /// The new list shares todos with this one but has its own sequence:
    /// adding to or removing from it leaves this list untouched.
    pub fn select<P>(&self, mut predicate: P) -> TodoList
    where
        P: FnMut(&Todo) -> bool,
    {
        let mut selection = TodoList::new(self.title.clone());
        self.each(|item| {
            if predicate(item) {
                selection.items.push(item.clone());
            }
        });
        debug!(
            "Selected {} of {} todos from {:?}",
            selection.size(),
            self.size(),
            self.title
        );
        selection
    }

    pub fn all_done(&self) -> TodoList {
        self.select(Todo::is_done)
    }

    pub fn all_not_done(&self) -> TodoList {
        self.select(|item| !item.is_done())
    }

    /// Returns a copy of the current sequence of handles
    pub fn to_vec(&self) -> Vec<Todo> {
        self.items.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }
}

impl Extend<Todo> for TodoList {
    fn extend<I: IntoIterator<Item = Todo>>(&mut self, iter: I) {
        for todo in iter {
            self.add(todo);
        }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:-^width$}\n", self.title, width = HEADER_WIDTH)?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
