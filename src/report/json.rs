// Thu May 7 2026 - Alex

use crate::config::Config;
use crate::layout::{LayoutError, ResolvedLayout};
use crate::report::{LayoutReport, ReportStatistics};
use serde_json::{json, to_string, to_string_pretty, Value};
use std::path::Path;

pub struct JsonReport {
    pretty_print: bool,
    sort_keys: bool,
    include_statistics: bool,
}

impl JsonReport {
    pub fn new() -> Self {
        Self {
            pretty_print: true,
            sort_keys: false,
            include_statistics: true,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            pretty_print: config.pretty_json,
            sort_keys: config.sort_keys,
            include_statistics: config.include_statistics,
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_sort_keys(mut self, sort: bool) -> Self {
        self.sort_keys = sort;
        self
    }

    pub fn with_statistics(mut self, include: bool) -> Self {
        self.include_statistics = include;
        self
    }

    pub fn serialize(&self, report: &LayoutReport) -> Result<String, LayoutError> {
        let value = self.build_json_value(report);
        if self.pretty_print {
            Ok(to_string_pretty(&value)?)
        } else {
            Ok(to_string(&value)?)
        }
    }

    pub fn serialize_to_file(&self, report: &LayoutReport, path: &Path) -> Result<(), LayoutError> {
        let text = self.serialize(report)?;
        crate::report::write_string_to_file(path, &text)
    }

    fn build_json_value(&self, report: &LayoutReport) -> Value {
        let mut root = serde_json::Map::new();
        root.insert("version".to_string(), json!(report.version));
        root.insert("generated_at".to_string(), json!(report.generated_at));

        let mut layouts: Vec<&ResolvedLayout> = report.layouts.iter().collect();
        if self.sort_keys {
            layouts.sort_by(|a, b| a.name.cmp(&b.name));
        }
        let types: Vec<Value> = layouts
            .iter()
            .map(|layout| self.serialize_layout(layout))
            .collect();
        root.insert("types".to_string(), Value::Array(types));

        if self.include_statistics {
            root.insert(
                "statistics".to_string(),
                self.serialize_statistics(&report.statistics),
            );
        }

        Value::Object(root)
    }

    fn serialize_layout(&self, layout: &ResolvedLayout) -> Value {
        let mut fields: Vec<_> = layout.fields.iter().collect();
        if self.sort_keys {
            fields.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let fields: Vec<Value> = fields
            .iter()
            .map(|field| {
                json!({
                    "name": field.name,
                    "type": field.type_name,
                    "offset": format!("0x{:x}", field.offset),
                    "size": field.size,
                    "alignment": field.alignment,
                    "endian": field.endian
                })
            })
            .collect();

        let holes: Vec<Value> = layout
            .holes
            .iter()
            .map(|hole| {
                json!({
                    "offset": format!("0x{:x}", hole.offset),
                    "size": hole.size
                })
            })
            .collect();

        json!({
            "name": layout.name,
            "kind": layout.kind,
            "size": layout.size,
            "alignment": layout.alignment,
            "bit_size": layout.bit_size,
            "pack": layout.pack,
            "fields": fields,
            "holes": holes,
            "padding_bytes": layout.total_padding(),
            "padding_percentage": layout.padding_percentage()
        })
    }

    fn serialize_statistics(&self, stats: &ReportStatistics) -> Value {
        json!({
            "total_types": stats.total_types,
            "total_fields": stats.total_fields,
            "total_holes": stats.total_holes,
            "total_bytes": stats.total_bytes,
            "total_padding_bytes": stats.total_padding_bytes,
            "average_padding_percentage": stats.average_padding_percentage
        })
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}
