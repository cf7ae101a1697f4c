//! Opening-hours parse errors.

/// Why opening-hours text could not be turned into slots.
///
/// The line-level variants are reported by [`parse_line`](super::parse_line).
/// [`parse_entry`](super::parse_entry) tolerates bad lines and only fails
/// with [`ParseError::NoSlots`] when nothing at all could be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A line names days but does not carry an open and close time for them.
    #[error("missing open/close times in line {line:?}")]
    MissingTimes { line: String },

    /// A line names more days in a row than a single day or a range.
    #[error("{count} days named together in line {line:?}; expected a day or a range")]
    TooManyDays { line: String, count: usize },

    /// A token shaped like a time holds an impossible value.
    #[error("invalid time {token:?} in line {line:?}")]
    InvalidTime { line: String, token: String },

    /// No line of the text produced a slot.
    #[error("failed to read opening times from {text:?}")]
    NoSlots {
        text: String,
        /// Line-level failures met along the way.
        rejected: Vec<ParseError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ParseError::MissingTimes {
            line: "tuesday 11.00".into(),
        };
        assert_eq!(
            err.to_string(),
            "missing open/close times in line \"tuesday 11.00\""
        );

        let err = ParseError::TooManyDays {
            line: "mon tue wed".into(),
            count: 3,
        };
        assert_eq!(
            err.to_string(),
            "3 days named together in line \"mon tue wed\"; expected a day or a range"
        );

        let err = ParseError::InvalidTime {
            line: "friday 25.00 - 26.00".into(),
            token: "25.00".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid time \"25.00\" in line \"friday 25.00 - 26.00\""
        );

        let err = ParseError::NoSlots {
            text: "by appointment".into(),
            rejected: vec![],
        };
        assert_eq!(
            err.to_string(),
            "failed to read opening times from \"by appointment\""
        );
    }
}
