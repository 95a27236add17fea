use alloc::vec::Vec;

/// Clones `items` with the element at `index` swapped for `element`, or returns `None` if `index` is out of bounds.
#[inline]
pub(crate) fn replaced<T: Clone>(items: &[T], index: usize, element: T) -> Option<Vec<T>> {
    if index >= items.len() {
        return None;
    }
    let mut result = Vec::with_capacity(items.len());
    result.extend_from_slice(&items[..index]);
    result.push(element);
    result.extend_from_slice(&items[index + 1..]);
    Some(result)
}

/// Clones `items` with `element` inserted before the element at `index`. Inserting at `items.len()` appends; anything past that returns `None`.
#[inline]
pub(crate) fn inserted<T: Clone>(items: &[T], index: usize, element: T) -> Option<Vec<T>> {
    if index > items.len() {
        return None;
    }
    let mut result = Vec::with_capacity(items.len() + 1);
    result.extend_from_slice(&items[..index]);
    result.push(element);
    result.extend_from_slice(&items[index..]);
    Some(result)
}

/// Splits `items` into the elements before `index`, the element at `index` and the elements after it.
#[inline]
pub(crate) fn split_around<T: Clone>(items: &[T], index: usize) -> Option<(Vec<T>, T, Vec<T>)> {
    let element = items.get(index)?.clone();
    Some((items[..index].to_vec(), element, items[index + 1..].to_vec()))
}

/// Joins `left`, `middle` and `right` into one list, the inverse of `split_around`.
#[inline]
pub(crate) fn spliced<T: Clone>(left: &[T], middle: T, right: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len() + 1);
    result.extend_from_slice(left);
    result.push(middle);
    result.extend_from_slice(right);
    result
}
