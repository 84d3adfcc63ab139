#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// `metrics` or `for` was missing from the request
    MissingRequired,

    /// A `metrics` entry other than count or sum
    UnknownMetric(String),

    /// `for` does not name a numeric field
    UnknownTargetField(String),

    /// `by` does not name a numeric field
    UnknownGroupField(String),

    /// `filter_feat` does not name a filterable field
    UnknownFilterField(String),

    /// `filter_feat` and `filter_val` were not passed together
    IncompleteFilter,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingRequired => {
                write!(
                    f,
                    "Request must include query parameters: [metrics, for]. More than one \
                     metric may be passed, but only one for field is accepted"
                )
            }
            ParseError::UnknownMetric(m) => {
                write!(
                    f,
                    "Metric value can only be one or both values from [count, sum], got '{}'",
                    m
                )
            }
            ParseError::UnknownTargetField(name) => {
                write!(
                    f,
                    "The query parameter: for does not map to an available numerical field in \
                     the db, got '{}'",
                    name
                )
            }
            ParseError::UnknownGroupField(name) => {
                write!(
                    f,
                    "The by query parameter must be a numerical field that exists in the \
                     policies database, got '{}'",
                    name
                )
            }
            ParseError::UnknownFilterField(name) => {
                write!(
                    f,
                    "The filter_feat query parameter must be a filterable field in the \
                     policies database, got '{}'",
                    name
                )
            }
            ParseError::IncompleteFilter => {
                write!(
                    f,
                    "If a feature name filter is passed, then a value must also be passed \
                     with it"
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
