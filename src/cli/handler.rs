// Fri May 8 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::defs;
use crate::demo;
use crate::layout::{resolve, ResolvedLayout};
use crate::model::AggregateDef;
use crate::report::{self, c_decl, markdown, text, JsonReport, LayoutReport, ReportStatistics};
use crate::utils::ScopedTimer;
use anyhow::Context;
use colored::Colorize;
use itertools::Itertools;

pub struct CommandHandler {
    config: Config,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn execute(&self, args: &Args) -> anyhow::Result<()> {
        self.config.validate().map_err(|e| anyhow::anyhow!(e))?;
        let defs = self.collect_defs(args)?;

        let layouts: Vec<ResolvedLayout> = {
            let _timer = ScopedTimer::new("layout");
            log::info!("Resolving {} type(s)", defs.len());
            defs.iter()
                .map(|def| resolve(def, &self.config))
                .collect::<Result<_, _>>()
                .context("Failed to resolve layouts")?
        };

        if args.detail {
            self.print_detail(&layouts);
        } else {
            for layout in &layouts {
                println!("{}", report::sizeof_line(&layout.name, layout.size));
            }
        }

        self.write_reports(args, &defs, &layouts)
    }

    fn collect_defs(&self, args: &Args) -> anyhow::Result<Vec<AggregateDef>> {
        match &args.input {
            Some(path) => {
                log::info!("Loading definitions from {}", path.display());
                let registry = defs::load_file(path, &self.config).with_context(|| {
                    format!("Failed to load definitions from {}", path.display())
                })?;
                log::debug!(
                    "Loaded {} definition(s): {}",
                    registry.len(),
                    registry.names().join(", ")
                );
                Ok(registry.iter().cloned().collect())
            }
            None => Ok(demo::records()
                .into_iter()
                .map(AggregateDef::Struct)
                .collect()),
        }
    }

    fn print_detail(&self, layouts: &[ResolvedLayout]) {
        for layout in layouts {
            let pack = match layout.pack {
                Some(pack) => format!("  pack {}", pack),
                None => String::new(),
            };
            println!(
                "{} {} {}  size {}  align {}{}",
                "[*]".blue(),
                layout.kind,
                layout.name.cyan().bold(),
                layout.size,
                layout.alignment,
                pack
            );

            for field in &layout.fields {
                println!(
                    "      0x{:04x}  {:<16} {:<14} {} bytes",
                    field.offset, field.name, field.type_name, field.size
                );
            }
            for hole in &layout.holes {
                println!(
                    "      {}",
                    format!("0x{:04x}  <padding> {} bytes", hole.offset, hole.size).yellow()
                );
            }
            println!(
                "      total padding {} bytes ({:.1}%)",
                layout.total_padding(),
                layout.padding_percentage()
            );
            println!();
        }

        let stats = ReportStatistics::compute(layouts);
        println!(
            "{} {} type(s), {} field(s), {} padding byte(s)",
            "[+]".green(),
            stats.total_types,
            stats.total_fields,
            stats.total_padding_bytes
        );
    }

    fn write_reports(
        &self,
        args: &Args,
        defs: &[AggregateDef],
        layouts: &[ResolvedLayout],
    ) -> anyhow::Result<()> {
        if args.output.is_none()
            && args.text_output.is_none()
            && args.markdown_output.is_none()
            && args.c_output.is_none()
        {
            return Ok(());
        }

        let report = LayoutReport::new(layouts.to_vec());

        if let Some(path) = &args.output {
            JsonReport::from_config(&self.config)
                .serialize_to_file(&report, path)
                .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
            println!(
                "{} JSON report saved to: {}",
                "[+]".green(),
                path.display()
            );
        }

        if let Some(path) = &args.text_output {
            match text::write_file(&report, path) {
                Ok(()) => println!(
                    "{} Text report saved to: {}",
                    "[+]".green(),
                    path.display()
                ),
                Err(e) => eprintln!("{} Failed to save text report: {}", "[!]".red(), e),
            }
        }

        if let Some(path) = &args.markdown_output {
            match markdown::write_file(&report, path) {
                Ok(()) => println!(
                    "{} Markdown report saved to: {}",
                    "[+]".green(),
                    path.display()
                ),
                Err(e) => eprintln!("{} Failed to save markdown report: {}", "[!]".red(), e),
            }
        }

        if let Some(path) = &args.c_output {
            match c_decl::write_file(defs, &self.config, path) {
                Ok(()) => println!(
                    "{} C declarations saved to: {}",
                    "[+]".green(),
                    path.display()
                ),
                Err(e) => eprintln!("{} Failed to save C declarations: {}", "[!]".red(), e),
            }
        }

        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
