/// Template Linter — validates template coverage and rendered lengths.
///
/// Usage: template_linter <templates.ron> [--overlay]
use clap::Parser;
use seed_writer::core::season::all_season_words;
use seed_writer::core::template::{TemplateSet, ARCHAIC_SUFFIX, MAX_CHARS, MIN_CHARS};
use seed_writer::Category;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Parser)]
#[command(name = "template_linter", about = "Check a template RON file")]
struct Args {
    /// Template file to check.
    path: PathBuf,
    /// Treat the file as an override merged over the built-in templates.
    #[arg(long)]
    overlay: bool,
}

fn main() {
    let args = Args::parse();

    let file_set = match TemplateSet::load_from_ron(&args.path) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("ERROR: Failed to load template file: {}", e);
            process::exit(1);
        }
    };

    let templates = if args.overlay {
        match TemplateSet::builtin() {
            Ok(mut base) => {
                base.merge(file_set);
                base
            }
            Err(e) => {
                eprintln!("ERROR: Built-in templates failed to load: {}", e);
                process::exit(1);
            }
        }
    } else {
        file_set
    };

    println!("Loaded templates for {} categories", templates.entries.len());

    let (errors, warnings) = lint_templates(&templates);

    println!("\n=== Template Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if !errors.is_empty() {
        process::exit(1);
    }
}

fn lint_templates(templates: &TemplateSet) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for category in templates.missing_categories() {
        errors.push(format!("No templates for category '{}'", category.key()));
    }

    for category in Category::ALL {
        let Some(entry) = templates.get(category) else {
            continue;
        };
        if !entry.merged.has_season() {
            warnings.push(format!(
                "Merged template for '{}' has no {{season}} placeholder",
                category.key()
            ));
        }

        // Raw lengths before clamping, so truncation is visible
        for season in all_season_words() {
            let name_only = entry.name_only.render(season).chars().count();
            let merged = entry.merged.render(season).chars().count();
            let archaic = merged + ARCHAIC_SUFFIX.chars().count();
            for (kind, len) in [("name_only", name_only), ("merged", merged), ("merged+archaic", archaic)] {
                if len > MAX_CHARS {
                    warnings.push(format!(
                        "'{}' {} with season '{}' is {} chars and will be cut to {}",
                        category.key(),
                        kind,
                        season,
                        len,
                        MAX_CHARS
                    ));
                } else if len < MIN_CHARS / 2 {
                    warnings.push(format!(
                        "'{}' {} with season '{}' is {} chars; more than half of the output will be filler",
                        category.key(),
                        kind,
                        season,
                        len
                    ));
                }
            }
        }
    }

    (errors, warnings)
}
