/// Exclusive owner of the window and its drawing surface.
///
/// Acquired window first, surface second; released in reverse, exactly once.
/// Works for partial acquisition: a window whose surface failed to come up is
/// still released.
#[derive(Debug)]
pub struct Resources<W, S> {
    window: Option<W>,
    surface: Option<S>,
    released: bool,
}

impl<W, S> Default for Resources<W, S> {
    fn default() -> Self {
        Self {
            window: None,
            surface: None,
            released: false,
        }
    }
}

impl<W, S> Resources<W, S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of the window. Ignored once released.
    pub fn set_window(&mut self, window: W) {
        if !self.released {
            self.window = Some(window);
        }
    }

    /// Take ownership of the surface. Ignored once released.
    pub fn set_surface(&mut self, surface: S) {
        if !self.released {
            self.surface = Some(surface);
        }
    }

    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Both resources are held.
    pub fn is_ready(&self) -> bool {
        self.window.is_some() && self.surface.is_some()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Drop the surface, then the window. Returns `false` if already released.
    pub fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.released = true;
        if self.surface.take().is_some() {
            tracing::debug!("surface released");
        }
        if self.window.take().is_some() {
            tracing::debug!("window released");
        }
        true
    }
}

impl<W, S> Drop for Resources<W, S> {
    fn drop(&mut self) {
        self.release();
    }
}
