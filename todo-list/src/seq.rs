//! Generic reduction and selection over slices.

/// Folds `f` over `items` from left to right, starting from `init`.
///
/// ```
/// use todo_list::seq::reduce;
///
/// let numbers = [1, 2, 3, 4, 5];
/// assert_eq!(reduce(&numbers, 0, |acc, n| acc + n), 15);
/// assert_eq!(reduce(&numbers, 10, |acc, n| acc + n), 25);
/// ```
pub fn reduce<T, A, F>(items: &[T], init: A, mut f: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut acc = init;
    for item in items {
        acc = f(acc, item);
    }
    acc
}

/// Returns clones of the items for which `predicate` holds, in order.
pub fn select<T, P>(items: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut selection = Vec::new();
    let mut index = 0;
    while index < items.len() {
        let item = &items[index];
        if predicate(item) {
            selection.push(item.clone());
        }
        index += 1;
    }
    selection
}
