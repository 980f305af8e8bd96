/// Report laid out one row per measure: the measure name followed by its
/// value for every group, in the order the database returned the groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransposedMatrix {
    rows: Vec<Vec<String>>,
}

impl TransposedMatrix {
    pub(crate) fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Label column plus one column per group.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Inverse rotation: the header labels and the per-group rows this matrix
    /// was built from.
    pub fn rotate_back(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let header = self.rows.iter().map(|r| r[0].clone()).collect();
        let groups = self.column_count().saturating_sub(1);
        let rows = (1..=groups)
            .map(|col| self.rows.iter().map(|r| r[col].clone()).collect())
            .collect();
        (header, rows)
    }
}
