//! Longest-common-subsequence alignment
//!
//! The table is filled backwards so that `table[i][j]` holds the LCS length
//! of the suffixes `a[i..]` and `b[j..]`, then walked forwards from `(0, 0)`.
//! When both neighbours give the same LCS length the walk consumes `a`
//! first, so deletions come before insertions in every changed region.
//! That tie-break decides which of several minimal scripts comes out and
//! must stay stable; hunk shapes downstream depend on it.
//!
//! Inputs whose `n * m` exceeds the complexity threshold are not aligned at
//! all: the result deletes all of `a`, inserts all of `b` and is flagged as
//! degraded.

use crate::artifacts::core::debug_log;
use crate::artifacts::diff::edit::{Alignment, DiffAlgorithm, Edit};
use derive_new::new;

/// Dense `(n + 1) * (m + 1)` table stored row-major in one buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    cells: Vec<usize>,
    width: usize,
}

impl LcsTable {
    fn zeroed(n: usize, m: usize) -> Self {
        Self {
            cells: vec![0; (n + 1) * (m + 1)],
            width: m + 1,
        }
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.width + j] = value;
    }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.get(0, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
    threshold: usize,
}

impl<'d, T: Eq + Clone> LcsDiff<'d, T> {
    /// Whether the alignment would need more table cells than allowed.
    pub fn exceeds_threshold(&self) -> bool {
        self.a
            .len()
            .checked_mul(self.b.len())
            .is_none_or(|cells| cells > self.threshold)
    }

    fn degraded(&self) -> Alignment<T> {
        let edits = self
            .a
            .iter()
            .map(|value| Edit::Delete {
                value: value.clone(),
            })
            .chain(self.b.iter().map(|value| Edit::Insert {
                value: value.clone(),
            }))
            .collect();

        Alignment {
            edits,
            degraded: true,
        }
    }
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for LcsDiff<'d, T> {
    type Table = LcsTable;

    fn compute_table(&self) -> Self::Table {
        let (n, m) = (self.a.len(), self.b.len());
        let mut table = LcsTable::zeroed(n, m);

        for i in (0..n).rev() {
            for j in (0..m).rev() {
                let value = if self.a[i] == self.b[j] {
                    table.get(i + 1, j + 1) + 1
                } else {
                    table.get(i + 1, j).max(table.get(i, j + 1))
                };
                table.set(i, j, value);
            }
        }

        table
    }

    fn backtrack(&self, table: &Self::Table) -> Vec<Edit<T>> {
        let (n, m) = (self.a.len(), self.b.len());
        let mut edits = Vec::with_capacity(n + m - table.lcs_len());
        let (mut i, mut j) = (0, 0);

        while i < n && j < m {
            if self.a[i] == self.b[j] {
                edits.push(Edit::Equal {
                    value: self.a[i].clone(),
                });
                i += 1;
                j += 1;
            } else if table.get(i + 1, j) >= table.get(i, j + 1) {
                // ties consume `a` first
                edits.push(Edit::Delete {
                    value: self.a[i].clone(),
                });
                i += 1;
            } else {
                edits.push(Edit::Insert {
                    value: self.b[j].clone(),
                });
                j += 1;
            }
        }

        edits.extend(self.a[i..].iter().map(|value| Edit::Delete {
            value: value.clone(),
        }));
        edits.extend(self.b[j..].iter().map(|value| Edit::Insert {
            value: value.clone(),
        }));

        edits
    }

    fn diff(&self) -> Alignment<T> {
        if self.exceeds_threshold() {
            debug_log!(
                "lcs: {}x{} exceeds threshold {}, degrading",
                self.a.len(),
                self.b.len(),
                self.threshold
            );
            return self.degraded();
        }

        let table = self.compute_table();
        debug_log!(
            "lcs: {}x{} table, common subsequence of {}",
            self.a.len(),
            self.b.len(),
            table.lcs_len()
        );

        Alignment {
            edits: self.backtrack(&table),
            degraded: false,
        }
    }
}
