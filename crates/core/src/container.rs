//! Counter container discovery
//!
//! A reaction control sits inside some container that also holds the pair of
//! counters it updates. Page templates differ in which container that is, so
//! discovery is an ordered list of rules: the first rule that matches an
//! ancestor of the clicked control wins.

/// One container lookup, expressed as a selector matched against the
/// control's closest ancestor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRule {
    pub selector: String,
}

impl ContainerRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

/// Ordered container resolution rules
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerStrategy {
    rules: Vec<ContainerRule>,
}

impl ContainerStrategy {
    pub const fn new(rules: Vec<ContainerRule>) -> Self {
        Self { rules }
    }

    pub fn from_selectors<S: AsRef<str>>(selectors: &[S]) -> Self {
        Self::new(
            selectors
                .iter()
                .map(|s| ContainerRule::new(s.as_ref()))
                .collect(),
        )
    }

    pub fn rules(&self) -> &[ContainerRule] {
        &self.rules
    }

    /// Try each rule in order with `closest` and return the first match.
    ///
    /// `closest` answers "nearest ancestor matching this selector"; in the
    /// browser that is `Element::closest`, in tests any lookup table.
    pub fn resolve<T, F>(&self, mut closest: F) -> Option<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        self.rules.iter().find_map(|rule| closest(&rule.selector))
    }
}
