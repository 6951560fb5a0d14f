/// The document-level event target that delivers move/end events during a gesture.
///
/// Touch start is listened for on the scroll container for the lifetime of the view; move and end
/// are only listened for at the root while a gesture is active. The [`crate::Controller`] calls
/// `attach_gesture_listeners` once when a gesture starts and `detach_gesture_listeners` once when
/// it ends (or when the controller is dropped mid-gesture).
///
/// Hosts that route all events through [`crate::Controller::dispatch`] can use `()`.
pub trait EventRoot {
    fn attach_gesture_listeners(&mut self);

    fn detach_gesture_listeners(&mut self);
}

impl EventRoot for () {
    fn attach_gesture_listeners(&mut self) {}

    fn detach_gesture_listeners(&mut self) {}
}

/// Tracks whether the root listeners are attached, so attach/detach stay paired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ListenerScope {
    attached: bool,
}

impl ListenerScope {
    pub(crate) fn is_attached(&self) -> bool {
        self.attached
    }

    pub(crate) fn acquire<E: EventRoot + ?Sized>(&mut self, root: &mut E) {
        debug_assert!(!self.attached, "ListenerScope: acquired twice");
        if self.attached {
            return;
        }
        self.attached = true;
        root.attach_gesture_listeners();
    }

    pub(crate) fn release<E: EventRoot + ?Sized>(&mut self, root: &mut E) {
        if !self.attached {
            return;
        }
        self.attached = false;
        root.detach_gesture_listeners();
    }
}
