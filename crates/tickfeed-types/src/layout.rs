//! Column layout of a delimited feed file.

use serde::{Deserialize, Serialize};

use crate::LayoutError;

/// Delimiter and column positions of the four trade fields.
///
/// Indices are zero-based positions after splitting a line on the delimiter.
/// Extra columns are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLayout {
    /// Field delimiter byte (default: comma).
    pub delimiter: u8,
    /// Column holding the symbol.
    pub symbol: usize,
    /// Column holding the clock text.
    pub time: usize,
    /// Column holding the price.
    pub price: usize,
    /// Column holding the size.
    pub size: usize,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldLayout {
    /// Creates the default layout: `symbol,time,price,size`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: b',',
            symbol: 0,
            time: 1,
            price: 2,
            size: 3,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets all four column positions.
    #[must_use]
    pub const fn with_columns(
        mut self,
        symbol: usize,
        time: usize,
        price: usize,
        size: usize,
    ) -> Self {
        self.symbol = symbol;
        self.time = time;
        self.price = price;
        self.size = size;
        self
    }

    /// Returns the minimum number of fields a line must split into.
    #[must_use]
    pub fn required_fields(&self) -> usize {
        self.symbol.max(self.time).max(self.price).max(self.size) + 1
    }

    /// Checks that every field maps to its own column.
    ///
    /// # Errors
    ///
    /// Returns an error if two fields share a column index.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let columns = [
            ("symbol", self.symbol),
            ("time", self.time),
            ("price", self.price),
            ("size", self.size),
        ];

        for (i, &(first, index)) in columns.iter().enumerate() {
            if let Some(&(second, _)) = columns[i + 1..].iter().find(|(_, other)| *other == index) {
                return Err(LayoutError::DuplicateIndex {
                    index,
                    first,
                    second,
                });
            }
        }

        Ok(())
    }
}
