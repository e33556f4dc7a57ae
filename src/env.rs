//! Lexical scopes.
//!
//! A scope borrows its parent, so scopes form a tree rooted at the global scope and a parent
//! can't be changed while any of its children are alive.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::node::Node;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Binding {
    pub id: Box<str>,
    pub value: Node,
}

#[derive(Debug, Default)]
pub struct Environment<'parent> {
    parent: Option<&'parent Environment<'parent>>,
    /// Every binding made in this scope, oldest first.
    bindings: Vec<Binding>,
    /// Name to the index of its newest binding in `bindings`.
    lookup: FxHashMap<Box<str>, usize>,
}

impl Environment<'static> {
    pub fn root() -> Self {
        Self::default()
    }
}

impl<'parent> Environment<'parent> {
    /// Open a new, empty scope nested inside this one.
    pub fn child_scope(&self) -> Environment<'_> {
        trace!(depth = self.depth() + 1, "entering scope");
        Environment {
            parent: Some(self),
            bindings: Vec::new(),
            lookup: FxHashMap::default(),
        }
    }

    pub fn parent(&self) -> Option<&Environment<'parent>> {
        self.parent
    }

    /// Number of scopes above this one.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut scope = self.parent;
        while let Some(env) = scope {
            depth += 1;
            scope = env.parent;
        }
        depth
    }

    /// Bind `id` to `value` in this scope. A later binding of the same name shadows this one.
    pub fn bind(&mut self, id: impl Into<Box<str>>, value: Node) -> &mut Self {
        let id = id.into();
        trace!(id = %id, value = %value, "bind");
        self.lookup.insert(id.clone(), self.bindings.len());
        self.bindings.push(Binding { id, value });
        self
    }

    /// Find the newest binding of `id`, searching this scope and then each parent in turn.
    pub fn lookup(&self, id: &str) -> Option<&Node> {
        let mut scope = Some(self);
        while let Some(env) = scope {
            if let Some(&index) = env.lookup.get(id) {
                return Some(&env.bindings[index].value);
            }
            scope = env.parent;
        }
        None
    }

    pub fn contains_local(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    /// Bindings made in this scope, in the order they were made. Shadowed ones included.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }
}
