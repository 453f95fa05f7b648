//! An unsafe, unbalanced BST. Every node keeps a raw pointer to its parent so removal can
//! relink the tree in place.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting an element that's already present does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.size(), 1);
//!
//! // Removing an element hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::trace;

use crate::traversal::{self, Order, Rendered};
use crate::util::Descent;
use crate::{Result, Search, Side, TreeError};

/// An unbalanced Binary Search Tree holding distinct elements. This can be used for
/// inserting, finding, and removing elements and for walking them in order.
pub struct OrderedTree<T> {
    // This is a `Link` instead of an `Option<Node>` so that it can be moved around with the
    // `OrderedTree` without the children's parent pointers breaking.
    root: Link<T>,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Ord + Clone,
{
    fn clone(&self) -> Self {
        // Every node is inserted after all of its ancestors so the copy has the same shape.
        let mut tree = Self::new();
        for elem in self.pre_order() {
            tree.insert(elem.clone());
        }
        tree
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("root", &self.root())
            .finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            marker: PhantomData,
        }
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// The number of elements in the tree. This walks every node, so it's `O(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for elem in [3, 1, 3, 2] {
    ///     tree.insert(elem);
    /// }
    ///
    /// assert_eq!(tree.size(), 3);
    /// ```
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<_> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a lone root a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }
        height
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.get()
    }

    /// The smallest element in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.elem())
    }

    /// The largest element in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.elem())
    }

    /// Removes every element from the tree.
    pub fn clear(&mut self) {
        let mut pending: Vec<_> = self.root.take().0.into_iter().collect();
        let mut released = 0usize;
        while let Some(node) = pending.pop() {
            // SAFETY: Every node was allocated with `Box::new` in `Link::new_leaf` and is
            // referenced by exactly one owning link. That link was either `self.root`, which we
            // just emptied, or a child link of a node freed earlier in this loop. So this is the
            // last pointer to the node and it is freed exactly once.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            pending.extend(node.left.0);
            pending.extend(node.right.0);
            released += 1;
        }

        if released > 0 {
            trace!(released, "cleared tree");
        }
    }

    /// The elements in sorted order.
    pub fn in_order(&self) -> Vec<&T> {
        self.traverse(Order::In)
    }

    /// The elements with every node before its subtrees, left subtree first.
    pub fn pre_order(&self) -> Vec<&T> {
        self.traverse(Order::Pre)
    }

    /// The elements with every node after its subtrees, left subtree first.
    pub fn post_order(&self) -> Vec<&T> {
        self.traverse(Order::Post)
    }

    /// The elements in the given traversal order.
    pub fn traverse(&self, order: Order) -> Vec<&T> {
        traversal::walk(self.root(), order)
    }

    /// A space separated rendering of the elements in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// for elem in [2, 3, 1] {
    ///     tree.insert(elem);
    /// }
    ///
    /// assert_eq!(tree.rendered(Order::In).to_string(), "1 2 3");
    /// assert_eq!(tree.rendered(Order::Pre).to_string(), "2 1 3");
    /// assert_eq!(tree.rendered(Order::Post).to_string(), "1 3 2");
    /// ```
    pub fn rendered(&self, order: Order) -> Rendered<'_, T> {
        Rendered::new(self.root(), order)
    }

    /// Finds the node holding `elem` or, if there isn't one, the node `elem` would be inserted
    /// under. Compare the returned node's element against `elem` (or use
    /// [`search`](Self::search)) to tell the two apart.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree has no root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.find(&2).unwrap_err(), TreeError::EmptyTree);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.find(&2).map(|n| *n.elem()), Ok(2));
    ///
    /// // 1 isn't here, so we get the node it would hang off of.
    /// assert_eq!(tree.find(&1).map(|n| *n.elem()), Ok(2));
    /// ```
    pub fn find(&self, elem: &T) -> Result<&Node<T>>
    where
        T: Ord,
    {
        self.search(elem).map(|search| search.node())
    }

    /// Like [`find`](Self::find) but says whether `elem` was actually found and, if not, which
    /// side of the insertion point it belongs on.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree has no root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, Search, Side};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    ///
    /// assert!(tree.search(&2).unwrap().is_found());
    /// match tree.search(&3).unwrap() {
    ///     Search::Vacant { parent, side } => {
    ///         assert_eq!(parent.elem(), &2);
    ///         assert_eq!(side, Side::Right);
    ///     }
    ///     Search::Found(_) => unreachable!(),
    /// }
    /// ```
    pub fn search(&self, elem: &T) -> Result<Search<'_, T>>
    where
        T: Ord,
    {
        // SAFETY: `locate` only returns live nodes of this tree. The references borrow `self` so
        // the tree can't be mutated (or dropped) while they exist.
        let search = match self.locate(elem).ok_or(TreeError::EmptyTree)? {
            Descent::Found(node) => Search::Found(unsafe { node.as_ref() }),
            Descent::Vacant(parent, side) => Search::Vacant {
                parent: unsafe { parent.as_ref() },
                side,
            },
        };
        Ok(search)
    }

    /// Whether the tree holds `elem`. Unlike [`find`](Self::find) this is fine to call on an
    /// empty tree.
    pub fn contains(&self, elem: &T) -> bool
    where
        T: Ord,
    {
        matches!(self.locate(elem), Some(Descent::Found(_)))
    }

    /// Inserts `elem` as a new leaf. If an equal element is already present nothing changes and
    /// `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.elem(), &2);
    /// assert_eq!(root.left().map(|n| *n.elem()), Some(1));
    /// assert_eq!(root.right().map(|n| *n.elem()), Some(3));
    /// ```
    pub fn insert(&mut self, elem: T) -> bool
    where
        T: Ord,
    {
        match self.locate(&elem) {
            None => {
                trace!("inserting root");
                self.root = Link::new_leaf(elem, Link(None));
                true
            }
            Some(Descent::Found(_)) => {
                trace!("element already present, skipping insert");
                false
            }
            Some(Descent::Vacant(mut parent, side)) => {
                trace!(?side, "inserting leaf");
                let leaf = Link::new_leaf(elem, Link(Some(parent)));
                // SAFETY: `parent` is a live node of this tree and we hold `&mut self` so no other
                // reference to it exists.
                let parent = unsafe { parent.as_mut() };
                *parent.child_mut(side) = leaf;

                if cfg!(debug_assertions) {
                    parent.assert_children_linked();
                }
                true
            }
        }
    }

    /// Removes the element equal to `elem` and returns it. If the tree has no such element
    /// nothing happens and `None` is returned.
    ///
    /// A node with two children is replaced by the smallest node of its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for elem in [8, 5, 6, 3] {
    ///     tree.insert(elem);
    /// }
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.remove(&5), None);
    /// assert_eq!(tree.in_order(), vec![&3, &6, &8]);
    /// ```
    pub fn remove(&mut self, elem: &T) -> Option<T>
    where
        T: Ord,
    {
        let target = match self.locate(elem)? {
            Descent::Found(node) => node,
            Descent::Vacant(..) => {
                trace!("element not present, skipping remove");
                return None;
            }
        };

        // SAFETY: All pointers below are live nodes of this tree and we hold `&mut self`, so no
        // references into the tree exist while we relink. Each `as_ref`/`as_mut` is a short-lived
        // temporary that ends before the next one is created. Once `target` is transplanted out
        // no link in the tree points at it, so reclaiming its `Box` frees it exactly once.
        unsafe {
            let (left, right) = {
                let node = target.as_ref();
                (node.left.0, node.right.0)
            };
            match (left, right) {
                (None, None) => {
                    trace!("removing leaf");
                    self.transplant(target, Link(None));
                }
                (Some(child), None) | (None, Some(child)) => {
                    trace!("removing node with one child");
                    self.transplant(target, Link(Some(child)));
                }
                (Some(mut left), Some(mut right)) => {
                    trace!("removing node with two children");
                    let mut successor = Self::leftmost(right);
                    if successor != right {
                        // The successor has no left child. Its right subtree takes its place.
                        let successor_right = successor.as_ref().right;
                        self.transplant(successor, successor_right);
                        successor.as_mut().right = Link(Some(right));
                        right.as_mut().parent = Link(Some(successor));
                    }
                    successor.as_mut().left = Link(Some(left));
                    left.as_mut().parent = Link(Some(successor));
                    self.transplant(target, Link(Some(successor)));

                    if cfg!(debug_assertions) {
                        successor.as_ref().assert_children_linked();
                    }
                }
            }

            let Node { elem, .. } = *Box::from_raw(target.as_ptr());
            Some(elem)
        }
    }

    /// Descends from the root towards `elem`. `None` means the tree is empty.
    fn locate(&self, elem: &T) -> Option<Descent<T>>
    where
        T: Ord,
    {
        let mut current = self.root.0?;
        loop {
            // SAFETY: Every pointer reachable from `self.root` is a live node of this tree and we
            // hold `&self` so nothing is mutating it.
            let node = unsafe { current.as_ref() };
            let (next, side) = match elem.cmp(&node.elem) {
                Ordering::Equal => return Some(Descent::Found(current)),
                Ordering::Less => (node.left.0, Side::Left),
                Ordering::Greater => (node.right.0, Side::Right),
            };
            match next {
                Some(next) => current = next,
                None => return Some(Descent::Vacant(current, side)),
            }
        }
    }

    /// The node reached by following left children from `node`.
    ///
    /// # Safety
    ///
    /// `node` must be a live node of this tree.
    unsafe fn leftmost(mut node: NonNull<Node<T>>) -> NonNull<Node<T>> {
        while let Some(left) = node.as_ref().left.0 {
            node = left;
        }
        node
    }

    /// Puts `replacement` into the slot `node` occupies (its parent's child link, or the root)
    /// and hands it `node`'s parent. `node`'s own links are left untouched.
    ///
    /// # Safety
    ///
    /// `node` and `replacement` must be live nodes of this tree and the caller must not hold
    /// references to either.
    unsafe fn transplant(&mut self, node: NonNull<Node<T>>, replacement: Link<T>) {
        let parent = node.as_ref().parent;
        match parent.0 {
            None => self.root = replacement,
            Some(mut parent) => {
                let parent = parent.as_mut();
                if parent.left.0 == Some(node) {
                    parent.left = replacement;
                } else {
                    parent.right = replacement;
                }
            }
        }
        if let Some(mut replacement) = replacement.0 {
            replacement.as_mut().parent = parent;
        }
    }
}

/// A possibly empty pointer to a node. Child links own the node they point to; parent links
/// don't.
struct Link<T>(Option<NonNull<Node<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    fn new_leaf(elem: T, parent: Link<T>) -> Self {
        let node = Box::new(Node {
            elem,
            left: Link(None),
            right: Link(None),
            parent,
        });
        Link(Some(NonNull::from(Box::leak(node))))
    }

    fn get(&self) -> Option<&Node<T>> {
        // SAFETY: If the pointer is not `None` then it is a live `Node`. Nodes are only mutated
        // through `&mut OrderedTree`, and this borrow is derived from a shared borrow of the tree,
        // so nothing can mutate or free the node while the reference lives.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }
}

/// A node of an [`OrderedTree`]. It holds one element and links to its children and parent.
pub struct Node<T> {
    elem: T,
    left: Link<T>,
    right: Link<T>,
    parent: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("elem", &self.elem)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Node<T> {
    /// The element stored in this node.
    pub fn elem(&self) -> &T {
        &self.elem
    }

    /// The root of the subtree of smaller elements.
    pub fn left(&self) -> Option<&Self> {
        self.left.get()
    }

    /// The root of the subtree of larger elements.
    pub fn right(&self) -> Option<&Self> {
        self.right.get()
    }

    /// The node this one is a child of. Only the root has no parent.
    pub fn parent(&self) -> Option<&Self> {
        self.parent.get()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.0.is_none() && self.right.0.is_none()
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn assert_children_linked(&self)
    where
        T: Ord,
    {
        let self_ptr = NonNull::from(self);
        if let Some(left) = self.left() {
            assert!(left.elem < self.elem);
            assert_eq!(left.parent.0, Some(self_ptr));
        }
        if let Some(right) = self.right() {
            assert!(self.elem < right.elem);
            assert_eq!(right.parent.0, Some(self_ptr));
        }
    }
}
