//! pagedoc CLI - page content management and rendering tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagedoc::store::{sample_pages, JsonStore, PageStore, WithFallback};
use pagedoc::{
    detect_shape, extract_text, page_view, render_tree, tree_to_json, HtmlRenderer, PageDraft,
    RenderOptions, SiteExporter,
};

#[derive(Parser)]
#[command(name = "pagedoc")]
#[command(author)]
#[command(version)]
#[command(about = "Manage and render CMS page content documents", long_about = None)]
struct Cli {
    /// Page store file
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "pages.json",
        env = "PAGEDOC_STORE",
        global = true
    )]
    store: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or top up the store with the built-in sample site
    Init,

    /// List pages in the store
    #[command(alias = "ls")]
    List,

    /// Show one page's metadata and content statistics
    Show {
        /// Page slug
        slug: String,

        /// Print the raw page record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a page
    Add {
        /// Page title
        title: String,

        /// Plain-text body
        #[arg(short, long, value_name = "TEXT")]
        body: Option<String>,

        /// Read the body from a file
        #[arg(short, long, value_name = "FILE", conflicts_with = "body")]
        file: Option<PathBuf>,

        /// Explicit slug (derived from the title if omitted)
        #[arg(long)]
        slug: Option<String>,

        /// Excerpt shown in listings and link cards
        #[arg(long)]
        excerpt: Option<String>,

        /// Parent page slug
        #[arg(long)]
        parent: Option<String>,

        /// Featured image URL
        #[arg(long, value_name = "URL")]
        image: Option<String>,

        /// Publish immediately
        #[arg(short, long)]
        publish: bool,
    },

    /// Replace a page's body with plain text
    SetBody {
        /// Page slug
        slug: String,

        /// Plain-text body
        #[arg(short, long, value_name = "TEXT")]
        body: Option<String>,

        /// Read the body from a file
        #[arg(short, long, value_name = "FILE", conflicts_with = "body")]
        file: Option<PathBuf>,
    },

    /// Print a page's body as editable plain text
    Text {
        /// Page slug
        slug: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render a page's body to HTML
    Html {
        /// Page slug
        slug: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit a complete standalone page with breadcrumb and related links
        #[arg(long)]
        full: bool,

        /// Largest heading tag to emit (1-6)
        #[arg(long, default_value = "6")]
        heading_ceiling: u8,

        /// CSS class prefix for emitted elements
        #[arg(long, value_name = "PREFIX")]
        class_prefix: Option<String>,

        /// Put top-level elements on their own lines
        #[arg(long)]
        pretty: bool,
    },

    /// Dump a page's display tree as JSON
    Json {
        /// Page slug
        slug: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Delete a page
    Delete {
        /// Page slug
        slug: String,
    },

    /// Export every published page as static HTML
    Export {
        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "public")]
        output: PathBuf,

        /// Render pages in parallel
        #[arg(long)]
        parallel: bool,

        /// Put top-level elements on their own lines
        #[arg(long)]
        pretty: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let store_path = cli.store;

    let result = match cli.command {
        Some(Commands::Init) => cmd_init(&store_path),
        Some(Commands::List) => cmd_list(&store_path),
        Some(Commands::Show { slug, json }) => cmd_show(&store_path, &slug, json),
        Some(Commands::Add {
            title,
            body,
            file,
            slug,
            excerpt,
            parent,
            image,
            publish,
        }) => cmd_add(
            &store_path,
            &title,
            body,
            file.as_deref(),
            slug,
            excerpt,
            parent,
            image,
            publish,
        ),
        Some(Commands::SetBody { slug, body, file }) => {
            cmd_set_body(&store_path, &slug, body, file.as_deref())
        }
        Some(Commands::Text { slug, output }) => cmd_text(&store_path, &slug, output.as_deref()),
        Some(Commands::Html {
            slug,
            output,
            full,
            heading_ceiling,
            class_prefix,
            pretty,
        }) => cmd_html(
            &store_path,
            &slug,
            output.as_deref(),
            full,
            heading_ceiling,
            class_prefix,
            pretty,
        ),
        Some(Commands::Json {
            slug,
            output,
            compact,
        }) => cmd_json(&store_path, &slug, output.as_deref(), compact),
        Some(Commands::Delete { slug }) => cmd_delete(&store_path, &slug),
        Some(Commands::Export {
            output,
            parallel,
            pretty,
        }) => cmd_export(&store_path, &output, parallel, pretty),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: pagedoc <COMMAND>".yellow());
            println!("       pagedoc --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_init(store_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = JsonStore::open(store_path)?;
    let added = store.seed(sample_pages())?;

    if added == 0 {
        println!("{} all sample pages already present", "Nothing to do:".yellow());
    } else {
        println!(
            "{} {} sample pages in {}",
            "Seeded".green().bold(),
            added,
            store_path.display()
        );
    }
    Ok(())
}

fn cmd_list(store_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = WithFallback::new(JsonStore::open(store_path)?);
    let pages = store.list()?;

    println!("{}", format!("Pages ({})", store_path.display()).cyan().bold());
    println!("{}", "─".repeat(64).dimmed());

    for page in &pages {
        let status = if page.published {
            format!("{:<9}", "published").green()
        } else {
            format!("{:<9}", "draft").yellow()
        };
        println!(
            "{}  {:<20} {:<26} {}",
            status,
            page.slug,
            page.title,
            page.updated_at.format("%Y-%m-%d").to_string().dimmed()
        );
    }

    println!();
    println!("{} pages", pages.len());
    Ok(())
}

fn cmd_show(store_path: &Path, slug: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = WithFallback::new(JsonStore::open(store_path)?);
    let page = store.get(slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!("{}", "Page Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Slug".bold(), page.slug);
    println!("{}: {}", "Title".bold(), page.title);
    if let Some(ref excerpt) = page.excerpt {
        println!("{}: {}", "Excerpt".bold(), excerpt);
    }
    if let Some(ref parent) = page.parent {
        println!("{}: {}", "Parent".bold(), parent);
    }
    if let Some(ref image) = page.featured_image {
        println!("{}: {}", "Image".bold(), image);
    }
    if let Some(ref author) = page.created_by {
        println!("{}: {}", "Author".bold(), author);
    }
    println!(
        "{}: {}",
        "Published".bold(),
        if page.published { "Yes" } else { "No" }
    );
    println!("{}: {}", "Created".bold(), page.created_at.format("%Y-%m-%d %H:%M"));
    println!("{}: {}", "Updated".bold(), page.updated_at.format("%Y-%m-%d %H:%M"));

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = extract_text(&page.content);
    let words: usize = text.split_whitespace().count();
    let blocks = render_tree(&page.content).len();

    println!("{}: {}", "Shape".bold(), detect_shape(&page.content));
    println!("{}: {}", "Blocks".bold(), blocks);
    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), text.len());

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_add(
    store_path: &Path,
    title: &str,
    body: Option<String>,
    file: Option<&Path>,
    slug: Option<String>,
    excerpt: Option<String>,
    parent: Option<String>,
    image: Option<String>,
    publish: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = resolve_body(body, file)?.unwrap_or_default();

    let mut draft = PageDraft::new(title).with_body(body).with_published(publish);
    if let Some(slug) = slug {
        draft = draft.with_slug(slug);
    }
    if let Some(excerpt) = excerpt {
        draft = draft.with_excerpt(excerpt);
    }
    if let Some(parent) = parent {
        draft = draft.with_parent(parent);
    }
    if let Some(image) = image {
        draft = draft.with_featured_image(image);
    }

    let mut store = JsonStore::open(store_path)?;
    let record = store.insert(draft)?;

    println!(
        "{} '{}' ({})",
        "Created".green().bold(),
        record.slug,
        if record.published { "published" } else { "draft" }
    );
    Ok(())
}

fn cmd_set_body(
    store_path: &Path,
    slug: &str,
    body: Option<String>,
    file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(body) = resolve_body(body, file)? else {
        return Err("provide the new body with --body or --file".into());
    };

    let mut store = JsonStore::open(store_path)?;
    store.save_content(slug, &body)?;

    println!("{} '{}'", "Saved".green().bold(), slug);
    Ok(())
}

fn cmd_text(
    store_path: &Path,
    slug: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = WithFallback::new(JsonStore::open(store_path)?);
    let page = store.get(slug)?;
    let text = extract_text(&page.content);

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_html(
    store_path: &Path,
    slug: &str,
    output: Option<&Path>,
    full: bool,
    heading_ceiling: u8,
    class_prefix: Option<String>,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = RenderOptions::new()
        .with_heading_ceiling(heading_ceiling)
        .with_pretty(pretty);
    if let Some(prefix) = class_prefix {
        options = options.with_class_prefix(prefix);
    }

    let store = WithFallback::new(JsonStore::open(store_path)?);
    let html = if full {
        page_view(&store, slug, &options)?.to_html_document()
    } else {
        let page = store.get(slug)?;
        HtmlRenderer::with_options(options).render(&page.content)
    };

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_json(
    store_path: &Path,
    slug: &str,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = WithFallback::new(JsonStore::open(store_path)?);
    let page = store.get(slug)?;

    let tree = render_tree(&page.content);
    let json = tree_to_json(&tree, !compact)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_delete(store_path: &Path, slug: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = JsonStore::open(store_path)?;
    store.delete(slug)?;
    println!("{} '{}'", "Deleted".green().bold(), slug);
    Ok(())
}

fn cmd_export(
    store_path: &Path,
    output: &Path,
    parallel: bool,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = WithFallback::new(JsonStore::open(store_path)?);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Rendering pages...");

    let exporter = SiteExporter::new(output)
        .with_parallel(parallel)
        .with_render_options(RenderOptions::new().with_pretty(pretty));
    let summary = exporter.export(&store)?;
    log::debug!("export summary: {:?}", summary);

    pb.finish_and_clear();
    println!(
        "{} {} pages exported to {} ({} drafts skipped)",
        "Done!".green().bold(),
        summary.written,
        output.display(),
        summary.skipped
    );
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagedoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page content management and rendering tool");
    println!();
    println!("Repository: {}", "https://github.com/pagedoc/pagedoc".dimmed());
    println!("License: MIT");
}

/// Pick the body text from `--body` or `--file`.
fn resolve_body(
    body: Option<String>,
    file: Option<&Path>,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    match (body, file) {
        (Some(text), _) => Ok(Some(text)),
        (None, Some(path)) => Ok(Some(fs::read_to_string(path)?)),
        (None, None) => Ok(None),
    }
}
