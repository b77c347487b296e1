//! UI-agnostic view layer: field normalizers, the table model, and the
//! assembler that turns a snapshot into the three dashboard tables.
//! The TUI and the plain-text renderer both consume [`DashboardTables`].

pub mod assemble;
pub mod format;
pub mod table;
pub mod text;

pub use assemble::{DashboardTables, assemble};
pub use table::{Cell, CellKind, TableData};
