use std::collections::HashSet;

use crate::core::column::{Column, ColumnData, ColumnKind};
use crate::error::{ChartError, ChartResult};

/// Row labels of a [`Table`]; the source of x-axis positions and categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub name: Option<String>,
    pub values: ColumnData,
}

impl Index {
    #[must_use]
    pub fn new(values: impl Into<ColumnData>) -> Self {
        Self {
            name: None,
            values: values.into(),
        }
    }

    /// Unnamed positional index `0..len`.
    #[must_use]
    pub fn range(len: usize) -> Self {
        Self::new(ColumnData::range(len))
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> ColumnKind {
        self.values.kind()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered, named columns sharing one [`Index`].
///
/// Every column has exactly as many values as the index.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    index: Index,
    columns: Vec<Column>,
}

impl Table {
    pub fn new(index: Index, columns: Vec<Column>) -> ChartResult<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.len() != index.len() {
                return Err(ChartError::InvalidData(format!(
                    "column `{}` has {} values but the index has {}",
                    column.name,
                    column.len(),
                    index.len()
                )));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate column name `{}`",
                    column.name
                )));
            }
        }
        Ok(Self { index, columns })
    }

    /// Builds a table over a default positional index.
    pub fn from_columns(columns: Vec<Column>) -> ChartResult<Self> {
        let len = columns.first().map_or(0, Column::len);
        Self::new(Index::range(len), columns)
    }

    #[must_use]
    pub fn index(&self) -> &Index {
        &self.index
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Removes column `name` and makes it the index, named after the column.
    pub fn set_index_from_column(&mut self, name: &str) -> ChartResult<()> {
        let position = self
            .columns
            .iter()
            .position(|column| column.name == name)
            .ok_or_else(|| ChartError::MissingColumn(name.to_owned()))?;
        let column = self.columns.remove(position);
        self.index = Index {
            name: Some(column.name),
            values: column.data,
        };
        Ok(())
    }

    /// Demotes the index to the first column and installs a positional index.
    ///
    /// The new column is named after the index, `index` when unnamed, or
    /// `level_0` when `index` is already taken. Fails without modifying the
    /// table when the chosen name is already a column.
    pub fn reset_index(&mut self) -> ChartResult<()> {
        let name = match &self.index.name {
            Some(name) => name.clone(),
            None if self.column("index").is_none() => "index".to_owned(),
            None => "level_0".to_owned(),
        };
        if self.column(&name).is_some() {
            return Err(ChartError::InvalidData(format!(
                "cannot demote index to column `{name}`: column already exists"
            )));
        }
        let len = self.len();
        let old = std::mem::replace(&mut self.index, Index::range(len));
        self.columns.insert(0, Column::new(name, old.values));
        Ok(())
    }

    /// Restricts the table to `names`, in that order.
    ///
    /// Names absent from the table yield all-missing float columns.
    #[must_use]
    pub fn select_columns(&self, names: &[String]) -> Self {
        let len = self.len();
        let columns = names
            .iter()
            .map(|name| match self.column(name) {
                Some(column) => column.clone(),
                None => Column::new(name.clone(), ColumnData::missing(len)),
            })
            .collect();
        Self {
            index: self.index.clone(),
            columns,
        }
    }

    /// Stable ascending reorder of all rows by index value.
    pub fn sort_by_index(&mut self) {
        let rows = self.index.values.sort_permutation();
        if rows.iter().enumerate().all(|(i, &row)| i == row) {
            return;
        }
        self.index.values = self.index.values.take(&rows);
        for column in &mut self.columns {
            column.data = column.data.take(&rows);
        }
    }
}
