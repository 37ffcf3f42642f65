// Thu May 7 2026 - Alex

use crate::layout::{LayoutError, ResolvedLayout};
use crate::report::LayoutReport;
use std::path::Path;

const RULE: &str =
    "================================================================================";

pub fn render(report: &LayoutReport) -> String {
    let mut text = String::new();

    text.push_str(RULE);
    text.push('\n');
    text.push_str("                              TYPE LAYOUT REPORT\n");
    text.push_str(RULE);
    text.push('\n');
    text.push_str(&format!("Version: {}\n", report.version));
    text.push_str(&format!("Generated: {}\n", report.generated_at));
    text.push_str(RULE);
    text.push_str("\n\n");

    text.push_str("SUMMARY\n");
    text.push_str("-------\n");
    let stats = &report.statistics;
    text.push_str(&format!("Total Types:     {:>8}\n", stats.total_types));
    text.push_str(&format!("Total Fields:    {:>8}\n", stats.total_fields));
    text.push_str(&format!("Padding Holes:   {:>8}\n", stats.total_holes));
    text.push_str(&format!("Total Bytes:     {:>8}\n", stats.total_bytes));
    text.push_str(&format!("Padding Bytes:   {:>8}\n", stats.total_padding_bytes));
    text.push_str(&format!(
        "Avg Padding:     {:>8.2}%\n",
        stats.average_padding_percentage
    ));
    text.push('\n');

    text.push_str("TYPES\n");
    text.push_str("-----\n");
    for layout in &report.layouts {
        text.push_str(&render_layout(layout));
    }

    text
}

fn render_layout(layout: &ResolvedLayout) -> String {
    let mut text = String::new();

    let pack = match layout.pack {
        Some(pack) => format!(", pack: {}", pack),
        None => String::new(),
    };
    text.push_str(&format!(
        "\n{} {} (size: {}, align: {}{})\n",
        layout.kind, layout.name, layout.size, layout.alignment, pack
    ));

    for field in &layout.fields {
        text.push_str(&format!(
            "  +0x{:04x} {} ({}, {} bytes, {})\n",
            field.offset, field.name, field.type_name, field.size, field.endian
        ));
    }

    for hole in &layout.holes {
        text.push_str(&format!(
            "  +0x{:04x} <padding> ({} bytes)\n",
            hole.offset, hole.size
        ));
    }

    text.push_str(&format!(
        "  total padding: {} bytes ({:.1}%)\n",
        layout.total_padding(),
        layout.padding_percentage()
    ));

    text
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
    fn test_text_report_content() {
        let report = LayoutReport::new(demo::layouts(&Config::default()).unwrap());
        let text = render(&report);

        assert!(text.contains("TYPE LAYOUT REPORT"));
        assert!(text.contains("SUMMARY\n-------\n"));
        assert!(text.contains("struct S1 (size: 8, align: 4)"));
        assert!(text.contains("  +0x0000 field1 (u32, 4 bytes, little)"));
        assert!(text.contains("  +0x0005 <padding> (3 bytes)"));
        assert!(text.contains("struct S2 (size: 8, align: 4)"));
        assert!(text.contains("  +0x0001 <padding> (3 bytes)"));
        assert!(text.contains("total padding: 3 bytes (37.5%)"));
    }

    #[test]
    fn test_pack_shown_in_header() {
        use crate::layout::resolve_struct;
        use crate::model::{Primitive, Section, StructDef};

        let def = StructDef::builder("Tight")
            .field("word", Section::Prim(Primitive::u32()))
            .field("tag", Section::Prim(Primitive::u8()))
            .pack(1)
            .build();
        let report = LayoutReport::new(vec![resolve_struct(&def, &Config::default()).unwrap()]);
        let text = render(&report);
        assert!(text.contains("struct Tight (size: 5, align: 1, pack: 1)"));
    }
}
