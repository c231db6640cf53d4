use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::parser::Expression;

/// Frames are shared: a parent is referenced by every child frame and by
/// every closure created inside it.
pub type Env = Rc<Environment>;

/// One scope level. The parent link is fixed at construction; only the
/// frame's own bindings change afterwards.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: RefCell<Vec<(String, Expression)>>,
    parent: Option<Env>,
}

impl Environment {
    /// An empty frame without a parent.
    pub fn root() -> Env {
        Rc::new(Self::default())
    }

    /// Binds `params` to `args` by position in a fresh frame below `parent`.
    pub fn new(params: &[String], args: Vec<Expression>, parent: Option<Env>) -> Result<Env> {
        if params.len() != args.len() {
            return Err(Error::ArityMismatch {
                expected: params.len(),
                found: args.len(),
            });
        }
        let env = Self {
            bindings: RefCell::new(vec![]),
            parent,
        };
        for (name, value) in params.iter().zip(args) {
            env.insert(name, value);
        }
        Ok(Rc::new(env))
    }

    pub fn parent(&self) -> Option<&Env> {
        self.parent.as_ref()
    }

    /// The innermost frame in the chain whose own bindings contain `name`.
    pub fn find(self: &Rc<Self>, name: &str) -> Result<Env> {
        let mut frame = self;
        loop {
            if frame.contains(name) {
                return Ok(Rc::clone(frame));
            }
            match frame.parent() {
                Some(parent) => frame = parent,
                None => return Err(Error::UnboundSymbol(name.to_string())),
            }
        }
    }

    pub fn lookup(self: &Rc<Self>, name: &str) -> Result<Expression> {
        let frame = self.find(name)?;
        frame
            .get(name)
            .ok_or_else(|| Error::UnboundSymbol(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.borrow().iter().any(|(key, _)| key == name)
    }

    /// Reads a binding of this frame only.
    pub fn get(&self, name: &str) -> Option<Expression> {
        self.bindings
            .borrow()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    /// Adds a binding to this frame, overwriting an existing one in place.
    pub fn insert(&self, name: &str, value: Expression) {
        let mut bindings = self.bindings.borrow_mut();
        match bindings.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value,
            None => bindings.push((name.to_string(), value)),
        }
    }
}
