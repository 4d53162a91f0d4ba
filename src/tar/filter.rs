use log::trace;

/// Consume-once set of requested member names.
///
/// An empty filter selects every member. Otherwise each match removes one
/// requested entry. Once the last request is consumed the filter is empty
/// again, so every member after it is selected too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    names: Vec<String>,
}

impl MemberFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// True when no request is left, i.e. select-all mode.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Decide whether `name` is selected, consuming the request on a match.
    ///
    /// With duplicate requests, the last matching entry is the one removed.
    pub fn is_selected(&mut self, name: &str) -> bool {
        if self.names.is_empty() {
            return true;
        }
        match self.names.iter().rposition(|n| n == name) {
            Some(index) => {
                trace!("{name}: matched request #{index}");
                self.names.remove(index);
                true
            }
            None => false,
        }
    }

    /// Requests still unmatched, in command-line order.
    pub fn remaining(&self) -> &[String] {
        &self.names
    }

    /// Remove and yield every unmatched request.
    pub fn drain_remaining(&mut self) -> std::vec::Drain<'_, String> {
        self.names.drain(..)
    }
}
