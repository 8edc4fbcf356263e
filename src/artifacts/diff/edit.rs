/// Kind of a single edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Equal,
    /// Present only in the new text
    Insert,
    /// Present only in the old text
    Delete,
}

impl Operation {
    /// Prefix used for this operation in unified hunks.
    pub fn marker(&self) -> char {
        match self {
            Operation::Equal => ' ',
            Operation::Insert => '+',
            Operation::Delete => '-',
        }
    }

    pub fn inverse(&self) -> Self {
        match self {
            Operation::Equal => Operation::Equal,
            Operation::Insert => Operation::Delete,
            Operation::Delete => Operation::Insert,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn operation(&self) -> Operation {
        match self {
            Edit::Delete { .. } => Operation::Delete,
            Edit::Insert { .. } => Operation::Insert,
            Edit::Equal { .. } => Operation::Equal,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }
}

/// Output of a sequence alignment: the dense per-token edit script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<T> {
    pub edits: Vec<Edit<T>>,
    /// Set when the complexity guard replaced the real alignment with the
    /// trivial delete-all/insert-all script.
    pub degraded: bool,
}

pub trait DiffAlgorithm<'d, T> {
    type Table;

    fn compute_table(&self) -> Self::Table;
    fn backtrack(&self, table: &Self::Table) -> Vec<Edit<T>>;
    fn diff(&self) -> Alignment<T>;
}
