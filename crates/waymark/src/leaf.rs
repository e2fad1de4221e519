//! Per-node method table.

use waymark_core::{DynHandler, Method, RouteError};

/// Fixed-capacity handler table, one slot per supported method.
///
/// Created lazily the first time a handler is bound at a trie position and
/// never shared between positions.
pub(crate) struct Leaf {
    slots: [Option<DynHandler>; Method::COUNT],
}

impl Leaf {
    pub(crate) fn new() -> Self {
        Self {
            slots: [const { None }; Method::COUNT],
        }
    }

    /// Binds a handler for `method`. Fails if the slot is occupied.
    pub(crate) fn set(&mut self, method: Method, handler: DynHandler) -> Result<(), RouteError> {
        let slot = &mut self.slots[method.index()];
        if slot.is_some() {
            return Err(RouteError::AlreadyBound(method));
        }
        *slot = Some(handler);
        Ok(())
    }

    /// Removes the binding for `method`. Fails if nothing was bound.
    pub(crate) fn unset(&mut self, method: Method) -> Result<(), RouteError> {
        match self.slots[method.index()].take() {
            Some(_) => Ok(()),
            None => Err(RouteError::NoHandler(method)),
        }
    }

    /// The handler bound for `method`, if any.
    pub(crate) fn get(&self, method: Method) -> Option<&DynHandler> {
        self.slots[method.index()].as_ref()
    }
}
