//! Table formatting helpers for CLI output.

use comfy_table::{ContentArrangement, Table};

/// Create a styled table with the given headers.
pub fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_header(headers);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_renders_headers_and_rows() {
        let mut table = new_table(&["ID", "NAME"]);
        table.add_row(["42", "web"]);

        let rendered = table.to_string();
        assert!(rendered.contains("ID"));
        assert!(rendered.contains("web"));
    }
}
