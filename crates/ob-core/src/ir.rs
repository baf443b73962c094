//! Textual IR output.

use std::fmt::{self, Display};

use crate::system::VOID_REPR;

/// Append-only IR text. Only procedures write into it: one header when a
/// procedure is declared, one `ret` line and a closing brace when it ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrBuffer {
    text: String,
}

impl IrBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer that starts with the `target triple` line.
    pub fn with_target(triple: &str) -> Self {
        Self {
            text: format!("target triple = \"{}\"\n\n", triple),
        }
    }

    pub fn define(&mut self, representation: &str, linkage_name: &str) {
        self.text.push_str(&format!(
            "define {} @{}() {{\nentry:\n",
            representation, linkage_name
        ));
    }

    pub fn ret(&mut self, representation: &str, value: i32) {
        self.text
            .push_str(&format!("\tret {} {}\n}}\n\n", representation, value));
    }

    pub fn ret_void(&mut self) {
        self.text.push_str(&format!("\tret {}\n}}\n\n", VOID_REPR));
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Display for IrBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
