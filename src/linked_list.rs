//! Doubly linked list backed by a node table.
//!
//! Nodes live in one `Vec` owned by the list and link to each other through [`NodeId`] handles
//! instead of pointers. Moving a node from one chain to another only rewrites handles, it never
//! allocates or copies the value. The natural merge sort uses this to cut runs out of the source
//! list and relink them into merged runs.
//!
//! Removed or popped nodes stay in the table until the list is dropped.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Error, Result};

/// Handle of a node inside the table of one [`DoublyLinkedList`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

/// Head, tail and length of one sequence of linked nodes. Several chains may share a node table,
/// as long as every node is part of at most one of them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Chain {
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl Chain {
    pub(crate) fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Links a node that is not part of any chain at the tail.
    pub(crate) fn push_node<T>(&mut self, nodes: &mut [Node<T>], id: NodeId) {
        nodes[id.0].prev = self.tail;
        // The node might still point into the chain it was cut from.
        nodes[id.0].next = None;

        match self.tail {
            Some(tail) => nodes[tail.0].next = Some(id),
            None => self.head = Some(id),
        }

        self.tail = Some(id);
        self.len += 1;
    }

    /// Unlinks the head node and returns it with both links cleared.
    pub(crate) fn pop_head<T>(&mut self, nodes: &mut [Node<T>]) -> Option<NodeId> {
        let head = self.head?;
        let next = nodes[head.0].next;

        match next {
            Some(next) => nodes[next.0].prev = None,
            None => self.tail = None,
        }

        nodes[head.0].next = None;
        nodes[head.0].prev = None;

        self.head = next;
        self.len -= 1;

        Some(head)
    }

    /// Detaches the first `len` nodes, ending with `last`, as one chain.
    pub(crate) fn split_front<T>(
        &mut self,
        nodes: &mut [Node<T>],
        last: NodeId,
        len: usize,
    ) -> Self {
        debug_assert!(len >= 1 && len <= self.len);

        let rest = nodes[last.0].next;
        nodes[last.0].next = None;

        match rest {
            Some(rest) => nodes[rest.0].prev = None,
            None => self.tail = None,
        }

        let front = Self {
            head: self.head,
            tail: Some(last),
            len,
        };

        self.head = rest;
        self.len -= len;

        front
    }

    /// Moves all nodes of `other` behind the tail of `self`.
    pub(crate) fn append_chain<T>(&mut self, nodes: &mut [Node<T>], other: Self) {
        let Some(other_head) = other.head else {
            return;
        };

        match self.tail {
            Some(tail) => {
                nodes[tail.0].next = Some(other_head);
                nodes[other_head.0].prev = Some(tail);
            }
            None => self.head = Some(other_head),
        }

        self.tail = other.tail;
        self.len += other.len;
    }

    fn unlink<T>(&mut self, nodes: &mut [Node<T>], id: NodeId) {
        let (prev, next) = (nodes[id.0].prev, nodes[id.0].next);

        match prev {
            Some(prev) => nodes[prev.0].next = next,
            None => self.head = next,
        }

        match next {
            Some(next) => nodes[next.0].prev = prev,
            None => self.tail = prev,
        }

        nodes[id.0].prev = None;
        nodes[id.0].next = None;
        self.len -= 1;
    }
}

pub struct DoublyLinkedList<T> {
    nodes: Vec<Node<T>>,
    chain: Chain,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            chain: Chain::default(),
        }
    }

    /// Number of linked nodes.
    pub fn len(&self) -> usize {
        self.chain.len
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Adds a new node holding `value` at the tail.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            prev: None,
            next: None,
        });
        self.chain.push_node(&mut self.nodes, id);

        id
    }

    /// Re-attaches a node of this list's table at the tail, e.g. one obtained from
    /// [`pop_front`](Self::pop_front).
    ///
    /// The node must not currently be linked, otherwise the list is corrupted.
    pub fn append_node(&mut self, id: NodeId) {
        debug_assert!(
            self.chain.head != Some(id) && self.nodes[id.0].prev.is_none(),
            "node {id:?} is still linked"
        );

        self.chain.push_node(&mut self.nodes, id);
    }

    /// Detaches the head node. Returns `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<NodeId> {
        self.chain.pop_head(&mut self.nodes)
    }

    pub fn front(&self) -> Option<&T> {
        self.chain.head.map(|id| self.value(id))
    }

    pub fn back(&self) -> Option<&T> {
        self.chain.tail.map(|id| self.value(id))
    }

    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    pub fn value(&self, id: NodeId) -> &T {
        &self.nodes[id.0].value
    }

    /// Walks `position` nodes from the head.
    pub fn node_at(&self, position: usize) -> Result<NodeId> {
        if position >= self.len() {
            return Err(Error::OutOfRange {
                position,
                len: self.len(),
            });
        }

        let mut current = self.chain.head;
        for _ in 0..position {
            current = current.and_then(|id| self.nodes[id.0].next);
        }

        current.ok_or(Error::OutOfRange {
            position,
            len: self.len(),
        })
    }

    /// Value at `position`, counted from the head.
    pub fn get(&self, position: usize) -> Result<&T> {
        self.node_at(position).map(|id| self.value(id))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.chain.head,
            remaining: self.chain.len,
        }
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node<T>] {
        &mut self.nodes
    }

    /// Takes the whole linked sequence out, leaving the list empty but keeping the node table.
    pub(crate) fn take_chain(&mut self) -> Chain {
        std::mem::take(&mut self.chain)
    }

    pub(crate) fn set_chain(&mut self, chain: Chain) {
        debug_assert!(self.chain.is_empty());
        self.chain = chain;
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Unlinks the first node holding `value`. Returns whether a node was found.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut current = self.chain.head;

        while let Some(id) = current {
            if self.nodes[id.0].value == *value {
                self.chain.unlink(&mut self.nodes, id);
                return true;
            }

            current = self.nodes[id.0].next;
        }

        false
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);

        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Head to tail traversal of a [`DoublyLinkedList`].
#[derive(Clone)]
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.next?.0];
        self.next = node.next;
        self.remaining -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
