use std::ops::Index;

/// A read-only list of nodes returned by a query.
///
/// A query with no matches yields an empty list; emptiness is a normal
/// result, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeList<N> {
    items: Vec<N>,
}

impl<N> NodeList<N> {
    pub(crate) fn new(items: Vec<N>) -> Self {
        NodeList { items }
    }

    /// The number of nodes in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The node at index `i`, if any.
    pub fn item(&self, i: usize) -> Option<&N> {
        self.items.get(i)
    }

    /// The first node, if any.
    pub fn first(&self) -> Option<&N> {
        self.items.first()
    }

    /// The last node, if any.
    pub fn last(&self) -> Option<&N> {
        self.items.last()
    }

    /// Iterate over the nodes in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.items.iter()
    }
}

impl<N> IntoIterator for NodeList<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a NodeList<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<N> Index<usize> for NodeList<N> {
    type Output = N;

    fn index(&self, i: usize) -> &N {
        &self.items[i]
    }
}
