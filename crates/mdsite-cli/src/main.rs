use anyhow::Result;
use mdsite_config::Config;
use mdsite_engine::{io, site};
use std::{env, path::PathBuf, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let site_root;
    match args.len() {
        1 => site_root = env::current_dir()?,
        2 | 3 => site_root = PathBuf::from(&args[1]),
        _ => {
            eprintln!("Usage: {} [site-root] [base-path]", args[0]);
            process::exit(1);
        }
    }

    let mut config = match Config::load_for_site(&site_root) {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    // An explicit base path on the command line wins over the config file,
    // so deploy scripts can override it per target.
    if let Some(base_path) = args.get(2) {
        config.base_path = base_path.clone();
    }

    let resolve = |p: &PathBuf| {
        if p.is_absolute() {
            p.clone()
        } else {
            site_root.join(p)
        }
    };
    let content_dir = resolve(&config.content_dir);
    let static_dir = resolve(&config.static_dir);
    let template_path = resolve(&config.template_path);
    let output_dir = resolve(&config.output_dir);

    if let Err(e) = io::validate_content_dir(&content_dir) {
        eprintln!(
            "Error: Content directory '{}' is invalid: {e}",
            content_dir.display()
        );
        process::exit(1);
    }
    if !template_path.is_file() {
        eprintln!("Error: Template '{}' not found", template_path.display());
        process::exit(1);
    }

    println!("Building site from {}", site_root.display());
    let report = site::build_site(
        &content_dir,
        &static_dir,
        &template_path,
        &output_dir,
        &config.base_path,
    )?;

    for page in &report.pages {
        println!("Generated {}", page);
    }
    println!(
        "Site generation complete: {} pages, {} static assets -> {}",
        report.pages.len(),
        report.assets_copied,
        output_dir.display()
    );

    Ok(())
}
