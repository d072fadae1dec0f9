use crate::theme::manager::Theme;
use std::fmt;
use std::sync::Arc;

/// A component that has to react when the active skin is replaced.
pub trait ThemeListener: Send + Sync {
    /// Called synchronously after the theme changed. `theme` already holds
    /// the new styles.
    fn theme_changed(&self, theme: &Theme);
}

/// Shared handle to a listener. Identity is the allocation the `Arc` points
/// to, so keep a clone around to unregister later.
pub type ListenerHandle = Arc<dyn ThemeListener>;

/// Listeners in registration order.
///
/// Registering the same handle twice makes it fire twice. A panicking
/// listener is not caught: the panic propagates out of [`notify_all`], since
/// there is no way to recover a component that failed to restyle.
///
/// [`notify_all`]: ListenerRegistry::notify_all
#[derive(Default, Clone)]
pub struct ListenerRegistry {
    listeners: Vec<ListenerHandle>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: ListenerHandle) {
        self.listeners.push(listener);
        log::debug!("Theme listener registered ({} total)", self.listeners.len());
    }

    /// Remove the first registration of `listener`. Unknown listeners are ignored.
    pub fn remove(&mut self, listener: &ListenerHandle) {
        match self
            .listeners
            .iter()
            .position(|registered| Arc::ptr_eq(registered, listener))
        {
            Some(index) => {
                self.listeners.remove(index);
                log::debug!("Theme listener removed ({} left)", self.listeners.len());
            }
            None => log::debug!("Ignoring removal of an unregistered theme listener"),
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify_all(&self, theme: &Theme) {
        for (index, listener) in self.listeners.iter().enumerate() {
            log::debug!("Notifying theme listener #{index}");
            listener.theme_changed(theme);
        }
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
