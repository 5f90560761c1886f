use std::fmt;

use jco_core::{jco_internals::bits_to_bytes, ByteVec, PadLimit};
use log::{debug, trace, warn};

use crate::{render, Rendered};

/// Number of columns in a rendered table
pub const N_COLUMNS: usize = 5;

/// Number of spaces added in front of the widest cell of each column
pub const PADDING: usize = 3;

/// The header row
pub const HEADER: [&str; N_COLUMNS] = ["FORMULA", "|", "DECIMAL", "HEXADECIMAL", "BINARY"];

/// Runtime configuration of a [Table]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// The declared bitwidth, which is rounded up to whole bytes
    pub bits: u64,
    /// Bounds the zero padding of values and operands
    pub pad_limit: PadLimit,
}

impl TableConfig {
    /// A configuration for `bits` with the default `PadLimit`
    pub fn new(bits: u64) -> Self {
        Self {
            bits,
            pad_limit: PadLimit::DEFAULT,
        }
    }

    /// Returns `self` with a different `PadLimit`
    pub fn with_pad_limit(self, pad_limit: PadLimit) -> Self {
        Self { pad_limit, ..self }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(32)
    }
}

/// A labeled and rendered value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    pub label: String,
    pub cells: Rendered,
}

impl Row {
    fn columns(&self) -> [&str; N_COLUMNS] {
        [
            &self.label,
            "|",
            &self.cells.dec,
            &self.cells.hex,
            &self.cells.bin,
        ]
    }
}

/// A table of values rendered under one declared width
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Row>,
    bytes: usize,
    pad_limit: PadLimit,
}

impl Table {
    /// Creates an empty table. The declared width in bytes is
    /// `ceil(config.bits / 8)`, capped to the `PadLimit` of `config`.
    pub fn new(config: TableConfig) -> Self {
        let bytes = usize::try_from(bits_to_bytes(config.bits)).unwrap_or(usize::MAX);
        if config.pad_limit.is_capped(bytes) {
            warn!(
                "width of {} bits exceeds the padding limit of {}, capping it",
                config.bits, config.pad_limit
            );
        }
        let bytes = config.pad_limit.clamp(bytes);
        debug!("new table with a width of {bytes} bytes");
        Self {
            rows: Vec::new(),
            bytes,
            pad_limit: config.pad_limit,
        }
    }

    /// Returns the declared width in bytes
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    /// Returns the `PadLimit` used for normalization
    pub fn pad_limit(&self) -> PadLimit {
        self.pad_limit
    }

    /// Returns the rows added so far, not including the header
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Normalizes `value` to the declared width and adds it as a row
    pub fn add(&mut self, label: impl Into<String>, value: &ByteVec) {
        let label = label.into();
        let cells = render(value, self.bytes, self.pad_limit);
        if cells.lossy {
            debug!("`{label}` = {value:#x} does not fit in {} bytes", self.bytes);
        }
        trace!("row `{label}`: {} {} {}", cells.dec, cells.hex, cells.bin);
        self.rows.push(Row { label, cells });
    }

    /// Zero pads an operand to the declared width so that complement and
    /// negation act on at least the displayed bits. Longer operands are kept
    /// as they are.
    pub(crate) fn widen_operand(&self, x: &ByteVec) -> ByteVec {
        if x.len() < self.bytes {
            x.prepend_zeros(self.bytes - x.len(), self.pad_limit)
        } else {
            x.clone()
        }
    }

    /// Writes the header and all rows with every column right aligned
    pub fn render<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        let mut widths = HEADER.map(str::len);
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.columns()) {
                *width = (*width).max(cell.len());
            }
        }
        let header = HEADER;
        for columns in std::iter::once(header).chain(self.rows.iter().map(Row::columns)) {
            for (width, cell) in widths.iter().zip(columns) {
                write!(w, "{cell:>width$}", width = width + PADDING)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(Table::new(TableConfig::new(1)).bytes(), 1);
        assert_eq!(Table::new(TableConfig::new(8)).bytes(), 1);
        assert_eq!(Table::new(TableConfig::new(9)).bytes(), 2);
        assert_eq!(Table::new(TableConfig::default()).bytes(), 4);
        let config = TableConfig::new(u64::MAX).with_pad_limit(PadLimit::new(16));
        assert_eq!(Table::new(config).bytes(), 16);
    }

    #[test]
    fn alignment() {
        let mut table = Table::new(TableConfig::new(8));
        table.add("x", &ByteVec::from([0x0c]));
        table.add("longer", &ByteVec::from([1, 0xff]));
        let s = table.to_string();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "   FORMULA   |   DECIMAL   HEXADECIMAL        BINARY"
        );
        assert_eq!(
            lines[1],
            "         x   |        12          0x0c    0b00001100"
        );
        assert_eq!(
            lines[2],
            "    longer   |      *255         *0xff   *0b11111111"
        );
    }
}
