//! Loading state of the contact form while a submission is in flight.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Sending { original_label: String },
}

impl Submission {
    pub fn is_sending(&self) -> bool {
        matches!(self, Submission::Sending { .. })
    }

    /// Enters the sending state, remembering the button label. Returns
    /// `false` without changing anything if a send is already in flight.
    pub fn begin(&mut self, label: impl Into<String>) -> bool {
        if self.is_sending() {
            return false;
        }
        *self = Submission::Sending {
            original_label: label.into(),
        };
        true
    }

    /// Back to idle. Yields the label to restore on the button.
    pub fn finish(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Submission::Sending { original_label } => Some(original_label),
            Submission::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_submit_keeps_first_label() {
        let mut submission = Submission::default();
        assert!(submission.begin("<span>Send</span>"));
        assert!(!submission.begin("Sending..."));
        assert_eq!(submission.finish().as_deref(), Some("<span>Send</span>"));
        assert!(!submission.is_sending());
    }

    #[test]
    fn finish_when_idle_is_none() {
        let mut submission = Submission::Idle;
        assert_eq!(submission.finish(), None);
    }
}
