use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Marker rendered between the brackets of a finished todo.
pub const DONE_MARKER: char = 'X';
/// Marker rendered between the brackets of an unfinished todo.
pub const UNDONE_MARKER: char = ' ';

#[derive(Debug, Default, Eq, PartialEq, Clone)]
struct Record {
    title: String,
    description: String,
    done: bool,
}

/// A single task: a title, a description and a done flag.
///
/// `Todo` is a handle. Cloning it yields another reference to the same
/// task, so a todo marked done through one handle reads as done through
/// every other, including the one stored in a [`TodoList`](crate::TodoList).
/// Equality is identity: two handles are equal only when they point at
/// the same task.
///
/// ```
/// use todo_list::Todo;
///
/// let todo = Todo::new("Buy milk");
/// let alias = todo.clone();
/// alias.mark_done();
///
/// assert!(todo.is_done());
/// assert_eq!(todo.to_string(), "[X] Buy milk");
/// ```
#[derive(Clone)]
pub struct Todo {
    record: Rc<RefCell<Record>>,
}

impl Todo {
    /// Creates an unfinished todo with an empty description
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_description(title, "")
    }

    /// Creates an unfinished todo with the given description
    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            record: Rc::new(RefCell::new(Record {
                title: title.into(),
                description: description.into(),
                done: false,
            })),
        }
    }

    pub fn title(&self) -> String {
        self.record.borrow().title.clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.record.borrow_mut().title = title.into();
    }

    pub fn description(&self) -> String {
        self.record.borrow().description.clone()
    }

    pub fn set_description(&self, description: impl Into<String>) {
        self.record.borrow_mut().description = description.into();
    }

    pub fn set_done(&self, done: bool) {
        self.record.borrow_mut().done = done;
    }

    pub fn mark_done(&self) {
        self.set_done(true);
    }

    pub fn mark_undone(&self) {
        self.set_done(false);
    }

    pub fn is_done(&self) -> bool {
        self.record.borrow().done
    }

    /// Returns true when the title equals `title` exactly
    pub fn has_title(&self, title: &str) -> bool {
        self.record.borrow().title == title
    }
}

impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.record, &other.record)
    }
}

impl Eq for Todo {}

impl fmt::Debug for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record.borrow();
        f.debug_struct("Todo")
            .field("title", &record.title)
            .field("description", &record.description)
            .field("done", &record.done)
            .finish()
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record.borrow();
        let marker = if record.done {
            DONE_MARKER
        } else {
            UNDONE_MARKER
        };
        write!(f, "[{}] {}", marker, record.title)
    }
}
