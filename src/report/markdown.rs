// Thu May 7 2026 - Alex

use crate::layout::{LayoutError, ResolvedLayout};
use crate::report::LayoutReport;
use std::path::Path;

pub fn render(report: &LayoutReport) -> String {
    let mut md = String::new();

    md.push_str("# Type Layout Report\n\n");
    md.push_str(&format!("- **Version:** {}\n", report.version));
    md.push_str(&format!("- **Generated:** {}\n\n", report.generated_at));

    md.push_str("## Summary\n\n");
    md.push_str("| Metric | Value |\n");
    md.push_str("|--------|-------|\n");
    let stats = &report.statistics;
    md.push_str(&format!("| Types | {} |\n", stats.total_types));
    md.push_str(&format!("| Fields | {} |\n", stats.total_fields));
    md.push_str(&format!("| Padding Holes | {} |\n", stats.total_holes));
    md.push_str(&format!("| Total Bytes | {} |\n", stats.total_bytes));
    md.push_str(&format!("| Padding Bytes | {} |\n", stats.total_padding_bytes));
    md.push_str(&format!(
        "| Avg Padding | {:.1}% |\n\n",
        stats.average_padding_percentage
    ));

    md.push_str("## Types\n\n");
    for layout in &report.layouts {
        md.push_str(&render_layout(layout));
    }

    md
}

fn render_layout(layout: &ResolvedLayout) -> String {
    let mut md = String::new();

    md.push_str(&format!("### {} {}\n\n", layout.kind, layout.name));
    md.push_str(&format!(
        "- **Size:** {} bytes ({} bits), **Alignment:** {}\n",
        layout.size, layout.bit_size, layout.alignment
    ));
    if let Some(pack) = layout.pack {
        md.push_str(&format!("- **Pack:** {}\n", pack));
    }
    md.push_str(&format!(
        "- **Padding:** {} bytes ({:.1}%)\n\n",
        layout.total_padding(),
        layout.padding_percentage()
    ));

    md.push_str("| Field | Offset | Size | Type | Endian |\n");
    md.push_str("|-------|--------|------|------|--------|\n");
    for field in &layout.fields {
        md.push_str(&format!(
            "| {} | `0x{:x}` | {} | {} | {} |\n",
            field.name, field.offset, field.size, field.type_name, field.endian
        ));
    }
    for hole in &layout.holes {
        md.push_str(&format!(
            "| *(padding)* | `0x{:x}` | {} | | |\n",
            hole.offset, hole.size
        ));
    }
    md.push('\n');

    md
}

pub fn write_file(report: &LayoutReport, path: &Path) -> Result<(), LayoutError> {
    crate::report::write_string_to_file(path, &render(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::demo;

    #[test]
    fn test_markdown_report_content() {
        let report = LayoutReport::new(demo::layouts(&Config::default()).unwrap());
        let md = render(&report);

        assert!(md.starts_with("# Type Layout Report\n"));
        assert!(md.contains("| Types | 2 |"));
        assert!(md.contains("### struct S1\n"));
        assert!(md.contains("| field1 | `0x0` | 4 | u32 | little |"));
        assert!(md.contains("| *(padding)* | `0x5` | 3 | | |"));
        assert!(md.contains("### struct S2\n"));
        assert!(md.contains("| *(padding)* | `0x1` | 3 | | |"));
    }
}
