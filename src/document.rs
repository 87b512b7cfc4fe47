//! In-memory document model.
//!
//! A [`Document`] is the structured view both extraction backends feed into
//! the wordlist pipeline: an ordered list of body paragraphs plus an ordered
//! list of tables. Tables are column-major because the glossary-table
//! detector reasons about first columns. All of it lives for a single
//! extraction call; nothing is cached across documents.

/// A single table column: the ordered cell texts from top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    /// Cell texts in row order.
    pub cells: Vec<String>,
}

impl Column {
    /// Create a column from cell texts.
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }
}

/// A table as an ordered sequence of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Columns in left-to-right order.
    pub columns: Vec<Column>,
}

impl Table {
    /// Build a column-major table from row-major cell text.
    ///
    /// Rows may be ragged (merged cells, malformed markup); shorter rows
    /// simply contribute nothing to the trailing columns.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut columns = Vec::with_capacity(width);
        for col in 0..width {
            let cells = rows
                .iter()
                .filter_map(|row| row.get(col))
                .cloned()
                .collect();
            columns.push(Column::new(cells));
        }
        Self { columns }
    }

    /// Iterate the cell texts of every column starting at `from_column`.
    pub fn cell_texts_from(&self, from_column: usize) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .skip(from_column)
            .flat_map(|column| column.cells.iter().map(String::as_str))
    }
}

/// A structured document: body paragraphs plus tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Body paragraph texts in reading order (table cell text excluded).
    pub paragraphs: Vec<String>,

    /// Tables in document order.
    pub tables: Vec<Table>,
}

impl Document {
    /// True when the document has neither paragraphs nor tables.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }

    /// The whole body text, paragraphs joined with newlines.
    pub fn body_text(&self) -> String {
        self.paragraphs.join("\n")
    }
}
