//! Resolution of requested column names against a `#fields` declaration.
//!
//! Produces the ordered list of field indexes to output and the minimum
//! number of fields a line must carry for those indexes to exist.

/// The output columns derived from one `#fields` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection {
    /// One entry per output column, in output order. `None` marks a
    /// requested name that is not declared by the log.
    pub out_indexes: Vec<Option<usize>>,
    /// Highest resolved index plus one.
    pub idx_range: usize,
    /// Number of fields declared by the `#fields` header.
    pub num_fields: usize,
}

impl ColumnSelection {
    /// Resolve `requested` against the declared field names.
    ///
    /// - No requested columns: every declared field, in declared order.
    /// - Otherwise: each requested name maps to the index of its first
    ///   declaration, or `None` when undeclared. Duplicates resolve
    ///   independently.
    /// - With `negate`: every declared field whose name is not requested.
    pub fn resolve(declared: &[&[u8]], requested: &[String], negate: bool) -> Self {
        let num_fields = declared.len();

        if requested.is_empty() {
            return Self {
                out_indexes: (0..num_fields).map(Some).collect(),
                idx_range: num_fields,
                num_fields,
            };
        }

        let out_indexes: Vec<Option<usize>> = if negate {
            declared
                .iter()
                .enumerate()
                .filter(|(_, name)| !requested.iter().any(|r| r.as_bytes() == **name))
                .map(|(idx, _)| Some(idx))
                .collect()
        } else {
            requested
                .iter()
                .map(|r| declared.iter().position(|name| *name == r.as_bytes()))
                .collect()
        };

        // With nothing resolved the range stays at one field, so a line
        // still has to be non-empty to be considered well formed.
        let max_index = out_indexes.iter().flatten().copied().max().unwrap_or(0);

        Self {
            out_indexes,
            idx_range: max_index + 1,
            num_fields,
        }
    }

    /// Resolved indexes only, skipping undeclared names.
    pub fn resolved(&self) -> impl Iterator<Item = usize> + '_ {
        self.out_indexes.iter().flatten().copied()
    }
}
