//! The two transition callback slots.

use std::fmt;

use crate::state::CarouselState;

pub type TransitionHook = Box<dyn FnMut(&CarouselState)>;

/// Pre- and post-transition callbacks, each handed the full state
#[derive(Default)]
pub struct TransitionHooks {
    pre: Option<TransitionHook>,
    post: Option<TransitionHook>,
}

impl TransitionHooks {
    pub fn set_pre(&mut self, hook: TransitionHook) {
        self.pre = Some(hook);
    }

    pub fn set_post(&mut self, hook: TransitionHook) {
        self.post = Some(hook);
    }

    pub(crate) fn fire_pre(&mut self, state: &CarouselState) {
        if let Some(hook) = self.pre.as_mut() {
            hook(state);
        }
    }

    pub(crate) fn fire_post(&mut self, state: &CarouselState) {
        if let Some(hook) = self.post.as_mut() {
            hook(state);
        }
    }
}

impl fmt::Debug for TransitionHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionHooks")
            .field("pre", &self.pre.is_some())
            .field("post", &self.post.is_some())
            .finish()
    }
}
