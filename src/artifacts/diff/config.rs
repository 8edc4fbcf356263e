use bitflags::bitflags;

pub const DEFAULT_CONTEXT_RADIUS: usize = 3;
pub const DEFAULT_COMPLEXITY_GUARD_THRESHOLD: usize = 1_200_000;

/// Unit of comparison used by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Granularity {
    /// One token per line, split on `\r?\n`
    #[default]
    Line,
    /// Maximal runs of non-whitespace or whitespace
    Word,
    /// One token per Unicode code point
    Char,
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Granularity::Line => write!(f, "line"),
            Granularity::Word => write!(f, "word"),
            Granularity::Char => write!(f, "char"),
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Normalization: u32 {
        const IGNORE_CASE = 0b0001;
        const IGNORE_WHITESPACE = 0b0010;
    }
}

impl Normalization {
    /// Parses a compact letter form: `c` for case, `w` for whitespace.
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut normalization = Self::empty();

        for c in s.chars() {
            match c {
                'c' => normalization |= Self::IGNORE_CASE,
                'w' => normalization |= Self::IGNORE_WHITESPACE,
                _ => return None,
            }
        }

        Some(normalization)
    }

    pub fn from_switches(ignore_case: bool, ignore_whitespace: bool) -> Self {
        let mut normalization = Self::empty();
        normalization.set(Self::IGNORE_CASE, ignore_case);
        normalization.set(Self::IGNORE_WHITESPACE, ignore_whitespace);
        normalization
    }
}

/// Knobs for a single diff invocation
///
/// Out-of-range values are clamped by the `with_*` setters rather than
/// rejected: a negative context radius becomes `0`, a non-positive
/// complexity threshold becomes `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    pub granularity: Granularity,
    pub normalization: Normalization,
    pub context_radius: usize,
    pub collapse_unchanged: bool,
    pub complexity_guard_threshold: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Line,
            normalization: Normalization::empty(),
            context_radius: DEFAULT_CONTEXT_RADIUS,
            collapse_unchanged: true,
            complexity_guard_threshold: DEFAULT_COMPLEXITY_GUARD_THRESHOLD,
        }
    }
}

impl DiffConfig {
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_context_radius(mut self, radius: i64) -> Self {
        self.context_radius = usize::try_from(radius.max(0)).unwrap_or(usize::MAX);
        self
    }

    pub fn with_collapse_unchanged(mut self, collapse: bool) -> Self {
        self.collapse_unchanged = collapse;
        self
    }

    pub fn with_complexity_guard_threshold(mut self, threshold: i64) -> Self {
        self.complexity_guard_threshold = usize::try_from(threshold.max(1)).unwrap_or(usize::MAX);
        self
    }

    pub fn ignore_case(&self) -> bool {
        self.normalization.contains(Normalization::IGNORE_CASE)
    }

    pub fn ignore_whitespace(&self) -> bool {
        self.normalization.contains(Normalization::IGNORE_WHITESPACE)
    }
}
