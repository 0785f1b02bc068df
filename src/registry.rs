/// Ordered set of behaviors to hand to the scene framework at startup.
pub struct Registrar<D> {
    entries: Vec<(&'static str, D)>,
}

impl<D> Default for Registrar<D> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<D> Registrar<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repeated name keeps the first definition.
    pub fn with(mut self, name: &'static str, definition: D) -> Self {
        if self.entries.iter().any(|(n, _)| *n == name) {
            log::warn!("[registry] {} already registered; ignoring duplicate", name);
        } else {
            self.entries.push((name, definition));
        }
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(n, _)| *n).collect()
    }

    /// Consume the registrar, calling `register` once per behavior in insertion order.
    /// Returns how many registrations succeeded; failures are logged and skipped.
    pub fn register_all<E: std::fmt::Display>(
        self,
        mut register: impl FnMut(&str, D) -> Result<(), E>,
    ) -> usize {
        let mut registered = 0;
        for (name, definition) in self.entries {
            log::info!("[registry] registering {}", name);
            match register(name, definition) {
                Ok(()) => registered += 1,
                Err(e) => log::error!("[registry] {} not registered: {}", name, e),
            }
        }
        registered
    }
}
