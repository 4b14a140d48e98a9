/// A Vec kept sorted on every insertion.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct OrderedList<T> {
    container: Vec<T>,
}

impl<T> AsRef<[T]> for OrderedList<T> {
    fn as_ref(&self) -> &[T] {
        &self.container
    }
}

impl<T: Ord> From<Vec<T>> for OrderedList<T> {
    fn from(mut container: Vec<T>) -> Self {
        container.sort();
        OrderedList { container }
    }
}

impl<T: Ord> OrderedList<T> {
    pub fn insert(&mut self, element: T) {
        let index = self.container.partition_point(|item| item <= &element);
        self.container.insert(index, element)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.container.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.container
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut list = OrderedList::from(vec![5, 1, 3]);
        list.insert(2);
        list.insert(5);
        list.insert(0);
        assert_eq!(list.as_ref(), &[0, 1, 2, 3, 5, 5]);
        assert_eq!(list.iter().rev().next(), Some(&5));
        assert_eq!(list.into_vec(), vec![0, 1, 2, 3, 5, 5]);
    }
}
