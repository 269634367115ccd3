//! Output formatting module
//!
//! Handles table and JSON output for listed resources.

mod rows;

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// A resource that can be rendered as one table row
pub trait TableRow {
    /// Column headers, in row order
    fn headers() -> &'static [&'static str];
    /// Cell values for this resource
    fn row(&self) -> Vec<String>;
}

/// Render resources as a table string
pub fn render_table<T: TableRow>(items: &[T], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(T::headers().to_vec());
    }
    for item in items {
        table.add_row(item.row());
    }
    table.to_string()
}

/// Render any serializable value as pretty JSON
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print resources in the requested format
pub fn output_resources<T>(items: &[T], format: OutputFormat, no_header: bool) -> Result<()>
where
    T: TableRow + Serialize,
{
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                eprintln!("No resources found");
            } else {
                println!("{}", render_table(items, no_header));
            }
        }
        OutputFormat::Json => println!("{}", render_json(items)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        name: String,
        count: u32,
    }

    impl TableRow for Row {
        fn headers() -> &'static [&'static str] {
            &["Name", "Count"]
        }

        fn row(&self) -> Vec<String> {
            vec![self.name.clone(), self.count.to_string()]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "alpha".to_string(),
                count: 1,
            },
            Row {
                name: "beta".to_string(),
                count: 22,
            },
        ]
    }

    #[test]
    fn test_render_table_with_header() {
        let out = render_table(&rows(), false);
        assert!(out.contains("Name"));
        assert!(out.contains("alpha"));
        assert!(out.contains("22"));
    }

    #[test]
    fn test_render_table_without_header() {
        let out = render_table(&rows(), true);
        assert!(!out.contains("Name"));
        assert!(out.contains("beta"));
    }

    #[test]
    fn test_render_json_array() {
        let out = render_json(&rows()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[1]["name"], "beta");
        assert_eq!(parsed[1]["count"], 22);
    }
}
