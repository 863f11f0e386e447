use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::object::Object;
use crate::token::Token;

/// A lexical scope: a name → value map plus a link to the enclosing scope.
///
/// Environments are shared through `Rc<RefCell<..>>` because closures keep
/// the scope they captured alive after the block that created it returns.
/// The chain is walked either dynamically (`get`/`assign`, used for
/// globals) or by a statically resolved hop count (`get_at`/`assign_at`).
#[derive(Debug, Default)]
pub struct Environment {
    enclosing: Option<Rc<RefCell<Environment>>>,
    values: HashMap<String, Object>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn with_enclosing(enclosing: Rc<RefCell<Environment>>) -> Self {
        Environment {
            enclosing: Some(enclosing),
            values: HashMap::new(),
        }
    }

    /// Binds a name in this scope, shadowing any previous binding.
    pub fn define(&mut self, name: &str, value: Object) {
        self.values.insert(name.to_string(), value);
    }

    /// Looks a name up through the whole chain.
    pub fn get(&self, name: &Token) -> Result<Object, RuntimeError> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow().get(name);
        }

        Err(RuntimeError::new(name, format!("Undefined variable '{}'.", name.lexeme)))
    }

    /// Reassigns an existing name, searching through the whole chain.
    pub fn assign(&mut self, name: &Token, value: Object) -> Result<(), RuntimeError> {
        if self.values.contains_key(&name.lexeme) {
            self.values.insert(name.lexeme.clone(), value);
            return Ok(());
        }

        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow_mut().assign(name, value);
        }

        Err(RuntimeError::new(name, format!("Undefined variable '{}'.", name.lexeme)))
    }

    /// Reads a name from the scope exactly `distance` hops up the chain.
    pub fn get_at(&self, distance: usize, name: &str) -> Option<Object> {
        if distance == 0 {
            self.values.get(name).cloned()
        } else {
            self.ancestor(distance).borrow().values.get(name).cloned()
        }
    }

    /// Writes a name into the scope exactly `distance` hops up the chain.
    pub fn assign_at(&mut self, distance: usize, name: &Token, value: Object) {
        if distance == 0 {
            self.values.insert(name.lexeme.clone(), value);
        } else {
            self.ancestor(distance).borrow_mut().values.insert(name.lexeme.clone(), value);
        }
    }

    /// Walks `distance` links up the chain. The resolver guarantees the
    /// chain is at least that deep.
    fn ancestor(&self, distance: usize) -> Rc<RefCell<Environment>> {
        let mut environment = Rc::clone(
            self.enclosing.as_ref().expect("scope chain to be deeper than resolved distance"),
        );

        for _ in 1..distance {
            let enclosing = Rc::clone(
                environment.borrow().enclosing.as_ref()
                    .expect("scope chain to be deeper than resolved distance"),
            );
            environment = enclosing;
        }

        environment
    }
}
