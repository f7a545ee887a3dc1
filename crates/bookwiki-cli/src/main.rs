use anyhow::{Context, Result, anyhow};
use bookwiki_config::Config;
use bookwiki_engine::serializer::ReuseIds;
use bookwiki_engine::{
    Article, ArticleStore, InfoboxRenderer, JsonFileStore, find_subcategory, markdown_to_blocks,
    markdown_to_blocks_with, recent_articles, render_preview,
};
use chrono::Utc;
use std::{env, fs, path::PathBuf, process};

const USAGE: &str = "Usage: bookwiki-cli [--store <path>] <command>

Commands:
  preview <file.md>                 Print preview HTML for a markdown file
  blocks <file.md>                  Print the parsed block list as JSON
  list                              List stored articles
  show <article-id>                 Print an article as markdown
  save <article-id> <file.md> [--title <title>] [--keep-ids]
                                    Store a markdown file as an article
  delete <article-id>               Remove an article
  recent [limit]                    List the most recently modified articles
  categories                        List categories and their subcategories
  init <store-path>                 Write a config file pointing at a store";

const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, PartialEq)]
enum Command {
    Preview(PathBuf),
    Blocks(PathBuf),
    List,
    Show(String),
    Save {
        id: String,
        file: PathBuf,
        title: Option<String>,
        keep_ids: bool,
    },
    Delete(String),
    Recent(usize),
    Categories,
    Init(PathBuf),
}

#[derive(Debug, PartialEq)]
struct Cli {
    store: Option<PathBuf>,
    command: Command,
}

fn parse_args(args: &[String]) -> Result<Cli, String> {
    let mut store = None;
    let mut title = None;
    let mut keep_ids = false;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--store" => {
                let value = iter.next().ok_or("--store needs a path")?;
                store = Some(PathBuf::from(value));
            }
            "--title" => {
                let value = iter.next().ok_or("--title needs a value")?;
                title = Some(value.clone());
            }
            "--keep-ids" => keep_ids = true,
            _ => positional.push(arg.as_str()),
        }
    }

    let command = match positional.as_slice() {
        ["preview", file] => Command::Preview(PathBuf::from(file)),
        ["blocks", file] => Command::Blocks(PathBuf::from(file)),
        ["list"] => Command::List,
        ["show", id] => Command::Show(id.to_string()),
        ["save", id, file] => Command::Save {
            id: id.to_string(),
            file: PathBuf::from(file),
            title,
            keep_ids,
        },
        ["delete", id] => Command::Delete(id.to_string()),
        ["recent"] => Command::Recent(DEFAULT_RECENT_LIMIT),
        ["recent", limit] => Command::Recent(
            limit
                .parse()
                .map_err(|_| format!("invalid limit: {limit}"))?,
        ),
        ["categories"] => Command::Categories,
        ["init", store] => Command::Init(PathBuf::from(store)),
        [] => return Err("no command given".to_string()),
        [other, ..] => return Err(format!("unknown command or arguments: {other}")),
    };

    Ok(Cli { store, command })
}

/// Store path from the command line, falling back to the config file
fn resolve_store_path(store: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = store {
        return Ok(path);
    }
    match Config::load()? {
        Some(config) => {
            log::info!("Using store path from config: {}", config.store_path.display());
            Ok(config.store_path)
        }
        None => Err(anyhow!(
            "No store path provided and no config file found at {}",
            Config::config_path().display()
        )),
    }
}

fn open_store(store: Option<PathBuf>) -> Result<JsonFileStore> {
    let path = resolve_store_path(store)?;
    JsonFileStore::open(&path)
        .with_context(|| format!("Failed to open store at {}", path.display()))
}

fn infobox_renderer() -> Result<InfoboxRenderer> {
    Ok(Config::load()?
        .map(|c| InfoboxRenderer::with_title(c.infobox_title))
        .unwrap_or_default())
}

fn read_markdown(file: &PathBuf) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Preview(file) => {
            let html = render_preview(&read_markdown(&file)?, &infobox_renderer()?);
            print!("{html}");
        }
        Command::Blocks(file) => {
            let blocks = markdown_to_blocks(&read_markdown(&file)?);
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }
        Command::List => {
            for article in open_store(cli.store)?.list()? {
                println!("{}\t{}", article.id, article.title);
            }
        }
        Command::Show(id) => {
            let article = open_store(cli.store)?
                .get(&id)?
                .ok_or_else(|| anyhow!("No article with id {id}"))?;
            println!("{}", article.to_markdown());
        }
        Command::Save {
            id,
            file,
            title,
            keep_ids,
        } => {
            let markdown = read_markdown(&file)?;
            let mut store = open_store(cli.store)?;
            let article = save_article(&store, &id, &markdown, title, keep_ids)?;
            log::info!(
                "Saved article {} with {} block(s)",
                article.id,
                article.blocks.len()
            );
            store.put(article)?;
        }
        Command::Delete(id) => {
            if !open_store(cli.store)?.delete(&id)? {
                return Err(anyhow!("No article with id {id}"));
            }
            log::info!("Deleted article {id}");
        }
        Command::Recent(limit) => {
            for article in recent_articles(&open_store(cli.store)?, limit)? {
                println!("{}\t{}", article.id, article.title);
            }
        }
        Command::Categories => {
            let store = open_store(cli.store)?;
            print!("{}", describe_categories(&store)?);
        }
        Command::Init(store_path) => {
            let config = Config::new(store_path);
            config.save()?;
            log::info!(
                "Wrote config to {} (store: {})",
                Config::config_path().display(),
                config.store_path.display()
            );
        }
    }
    Ok(())
}

/// Category listing with article counts, subcategories and their tags
fn describe_categories(store: &impl ArticleStore) -> Result<String> {
    let articles = store.list()?;
    let mut out = String::new();
    for category in store.categories()? {
        let members = category.articles_in(&articles);
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            category.id,
            category.name,
            members.len()
        ));
        for sub in &category.subcategories {
            let count = members
                .iter()
                .filter(|a| find_subcategory(a, &category).is_some_and(|s| s.id == sub.id))
                .count();
            out.push_str(&format!(
                "  {}\t{}\t{}\t[{}]\n",
                sub.id,
                sub.name,
                count,
                sub.filter_tags.join(", ")
            ));
        }
    }
    Ok(out)
}

/// Build the article to store for `id` from edited markdown
fn save_article(
    store: &impl ArticleStore,
    id: &str,
    markdown: &str,
    title: Option<String>,
    keep_ids: bool,
) -> Result<Article> {
    let now = Utc::now();
    let mut article = match store.get(id)? {
        Some(existing) => existing,
        None => {
            let mut article = Article::new(title.clone().unwrap_or_else(|| id.to_string()), "");
            article.id = id.to_string();
            article
        }
    };

    if keep_ids {
        let blocks = markdown_to_blocks_with(markdown, &mut ReuseIds::new(&article.blocks));
        article.blocks = blocks;
        article.touch(now);
    } else {
        article.apply_markdown(markdown, now);
    }

    if let Some(title) = title {
        article.title = title;
    }
    Ok(article)
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
