use std::sync::mpsc;

use anyhow::{anyhow, bail, Context};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use typewriter_lib::{
    catalog::Catalog,
    config::CONFIG_FILE,
    filename,
    model::{Article, ArticleMeta, Localized, Page, Seo, Term},
    repository::{
        article::ARTICLES, ArticleRepository, Layout, ListPageRepository, PageRepository,
        SingletonPageRepository, TermKind, TermRepository, WebsiteRepository,
    },
    sitemap, watch, Config, Content, Stage,
};

#[derive(Parser, Debug)]
#[command(name = "typewriter")]
#[command(about = "Manage the front matter content of a multi-locale static site")]
struct Cli {
    /// Path to the project config
    #[arg(long, default_value = CONFIG_FILE, global = true)]
    config: Utf8PathBuf,

    /// Log debug output (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create stage directories and seed draft pages for every locale
    Setup,
    /// Load every collection, failing on the first malformed file
    Check {
        #[arg(long)]
        stage: Option<Stage>,
        /// Check again whenever a content file changes
        #[arg(long)]
        watch: bool,
    },
    /// Print a collection as JSON
    List {
        collection: Collection,
        #[arg(long)]
        stage: Option<Stage>,
        #[arg(long)]
        locale: Option<String>,
        /// Print the collection's base pages instead of its items
        #[arg(long)]
        base: bool,
    },
    /// Print one article file as JSON
    Show {
        file: Utf8PathBuf,
        #[arg(long)]
        stage: Option<Stage>,
    },
    /// Create a draft article
    NewArticle {
        slug: String,
        #[arg(long)]
        locale: Option<String>,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        /// Publication date, today if omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Move a draft to published
    Publish(Target),
    /// Move a published entry back to drafts
    Unpublish(Target),
    /// Remove an entry's file from one stage
    Delete {
        #[command(flatten)]
        target: Target,
        #[arg(long)]
        stage: Option<Stage>,
    },
    /// Change the slug of an article file, keeping its date and locale
    Rename {
        file: Utf8PathBuf,
        new_slug: String,
        #[arg(long)]
        stage: Option<Stage>,
    },
    /// Print the valid icon and color options
    Options,
    /// Print the sitemap as JSON
    Sitemap {
        #[arg(long)]
        stage: Option<Stage>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Collection {
    Home,
    Articles,
    Categories,
    Tags,
    Series,
    Website,
}

impl Collection {
    fn term_kind(self) -> Option<TermKind> {
        match self {
            Collection::Categories => Some(TermKind::Category),
            Collection::Tags => Some(TermKind::Tag),
            Collection::Series => Some(TermKind::Serie),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Collection::Home => "home",
            Collection::Articles => ARTICLES,
            Collection::Categories => TermKind::Category.collection(),
            Collection::Tags => TermKind::Tag.collection(),
            Collection::Series => TermKind::Serie.collection(),
            Collection::Website => "website",
        }
    }
}

/// One entry of a collection: the home page or a base page when `slug` is
/// omitted, an item otherwise.
#[derive(clap::Args, Debug)]
struct Target {
    collection: Collection,
    slug: Option<String>,
    /// Defaults to the configured default locale
    #[arg(long)]
    locale: Option<String>,
}

struct Repositories {
    layout: Layout,
    home: SingletonPageRepository,
    articles: ArticleRepository,
    website: WebsiteRepository,
    catalog: Catalog,
}

impl Repositories {
    fn new(config: &Config) -> Self {
        let layout = config.layout();
        Self {
            home: SingletonPageRepository::home(&layout),
            articles: ArticleRepository::new(&layout),
            website: WebsiteRepository::new(&layout),
            catalog: Catalog::default(),
            layout,
        }
    }

    fn terms(&self, kind: TermKind) -> TermRepository {
        TermRepository::new(&self.layout, kind, self.catalog.clone())
    }

    fn list_page(&self, collection: Collection) -> ListPageRepository {
        ListPageRepository::new(&self.layout, collection.name())
    }
}

/// A loaded entry together with the repository that owns it.
enum Entry {
    Page(Box<dyn PageRepository>, Page),
    Article(Article),
    Term(TermRepository, Term),
}

impl Entry {
    fn find(repos: &Repositories, config: &Config, target: &Target, stage: Stage) -> anyhow::Result<Self> {
        let locale = target.locale.as_deref().unwrap_or(&config.default_locale);
        let missing = || {
            let what = target.slug.as_deref().unwrap_or("page");
            anyhow!("No {what} in {} for locale `{locale}` ({stage})", target.collection.name())
        };

        let entry = match (target.collection, target.slug.as_deref()) {
            (Collection::Website, _) => bail!("Website files have no lifecycle, edit them directly"),
            (Collection::Home, Some(_)) => bail!("The home page has no slug"),
            (Collection::Home, None) => {
                let page = repos.home.by_locale(locale, stage)?.ok_or_else(missing)?;
                Entry::Page(Box::new(repos.home.clone()), page)
            }
            (collection, None) => {
                let repo = repos.list_page(collection);
                let page = repo.by_locale(locale, stage)?.ok_or_else(missing)?;
                Entry::Page(Box::new(repo), page)
            }
            (Collection::Articles, Some(slug)) => {
                Entry::Article(repos.articles.by_slug(slug, locale, stage)?.ok_or_else(missing)?)
            }
            (collection, Some(slug)) => {
                let kind = collection.term_kind().context("Not a taxonomy collection")?;
                let repo = repos.terms(kind);
                let term = repo.by_slug(slug, locale, stage)?.ok_or_else(missing)?;
                Entry::Term(repo, term)
            }
        };
        Ok(entry)
    }

    fn move_to(&self, repos: &Repositories, target: Stage) -> anyhow::Result<()> {
        match (self, target) {
            (Entry::Page(repo, page), Stage::Published) => repo.publish(page)?,
            (Entry::Page(repo, page), Stage::Drafts) => repo.unpublish(page)?,
            (Entry::Article(article), Stage::Published) => repos.articles.publish(article)?,
            (Entry::Article(article), Stage::Drafts) => repos.articles.unpublish(article)?,
            (Entry::Term(repo, term), Stage::Published) => repo.publish(term)?,
            (Entry::Term(repo, term), Stage::Drafts) => repo.unpublish(term)?,
        }
        Ok(())
    }

    fn delete(&self, repos: &Repositories, stage: Stage) -> anyhow::Result<()> {
        match self {
            Entry::Page(repo, page) => repo.delete(page, stage)?,
            Entry::Article(article) => repos.articles.delete(article, stage)?,
            Entry::Term(repo, term) => repo.delete(term, stage)?,
        }
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn for_locale<T: Localized>(entries: Vec<T>, locale: Option<&str>) -> Vec<T> {
    match locale {
        Some(locale) => entries.into_iter().filter(|e| e.locale() == locale).collect(),
        None => entries,
    }
}

fn setup(config: &Config) -> anyhow::Result<usize> {
    let repos = Repositories::new(config);
    repos.home.setup()?;
    repos.articles.setup()?;
    repos.website.setup()?;
    for kind in TermKind::ALL {
        repos.terms(kind).setup()?;
    }

    let mut seeded = 0;
    for locale in &config.supported_locales {
        seeded += usize::from(repos.home.force_file_creation(locale)?);
        for collection in [
            Collection::Articles,
            Collection::Categories,
            Collection::Tags,
            Collection::Series,
        ] {
            seeded += usize::from(repos.list_page(collection).setup(locale)?);
        }
    }
    info!("Setup complete, seeded {seeded} draft pages");
    Ok(seeded)
}

fn check(config: &Config, stage: Stage) -> anyhow::Result<()> {
    let content = Content::load_stage(config, stage)?;
    info!(
        "{stage} content is valid: {} articles, {} categories, {} tags, {} series",
        content.articles().entries.len(),
        content.terms(TermKind::Category).entries.len(),
        content.terms(TermKind::Tag).entries.len(),
        content.terms(TermKind::Serie).entries.len(),
    );
    Ok(())
}

fn check_on_change(config: &Config, stage: Stage) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::channel();
    let content_dir = config.layout().content_dir();
    let _watcher = watch::watch(&content_dir, move |change| {
        let _ = tx.send(change);
    })?;
    info!("Watching {content_dir} for changes");

    for change in &rx {
        debug!("{:?} {}", change.event, change.path);
        // Editors emit bursts of events for one save
        while rx.try_recv().is_ok() {}
        if let Err(err) = check(config, stage) {
            error!("{err:#}");
        }
    }
    Ok(())
}

fn list(config: &Config, collection: Collection, stage: Stage, locale: Option<&str>, base: bool) -> anyhow::Result<()> {
    let repos = Repositories::new(config);
    match collection {
        Collection::Home => print_json(&for_locale(repos.home.all(stage)?, locale)),
        Collection::Website => print_json(&for_locale(repos.website.all(stage)?, locale)),
        collection if base => print_json(&for_locale(repos.list_page(collection).all(stage)?, locale)),
        Collection::Articles => print_json(&for_locale(repos.articles.all(stage)?, locale)),
        collection => {
            let kind = collection.term_kind().context("Not a taxonomy collection")?;
            print_json(&for_locale(repos.terms(kind).all(stage)?, locale))
        }
    }
}

fn resolve_article_file(repos: &Repositories, file: &Utf8Path, stage: Stage) -> Utf8PathBuf {
    if file.is_file() {
        file.to_owned()
    } else {
        repos.articles.dir(stage).join(file)
    }
}

fn new_article(
    config: &Config,
    slug: String,
    locale: Option<String>,
    title: String,
    category: String,
    tags: Vec<String>,
    date: Option<NaiveDate>,
) -> anyhow::Result<Utf8PathBuf> {
    filename::validate_slug(&slug)?;
    let locale = locale.unwrap_or_else(|| config.default_locale.clone());
    if !config.supported_locales.contains(&locale) {
        bail!("Locale `{locale}` is not supported");
    }
    let repos = Repositories::new(config);
    for stage in [Stage::Drafts, Stage::Published] {
        if let Some(existing) = repos.articles.find(&slug, &locale, stage)? {
            bail!("Article `{slug}` ({locale}) already exists at {existing}");
        }
    }

    let published_at = date.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let article = Article {
        seo: Seo::mirror(&title, ""),
        title,
        catchline: String::new(),
        slug,
        locale,
        description: String::new(),
        published_at,
        updated_at: published_at,
        content: String::new(),
        meta: ArticleMeta {
            tags,
            category,
            serie: None,
        },
    };
    repos.articles.upsert(&article, Stage::Drafts)?;
    Ok(repos.articles.path(&article, Stage::Drafts))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(&cli.config).with_context(|| format!("Failed to load {}", cli.config))?;
    let stage_or_default = |stage: Option<Stage>| stage.unwrap_or(config.stage);

    match cli.command {
        Command::Setup => {
            setup(&config)?;
        }
        Command::Check { stage, watch } => {
            let stage = stage_or_default(stage);
            if watch {
                if let Err(err) = check(&config, stage) {
                    error!("{err:#}");
                }
                check_on_change(&config, stage)?;
            } else {
                check(&config, stage)?;
            }
        }
        Command::List {
            collection,
            stage,
            locale,
            base,
        } => list(&config, collection, stage_or_default(stage), locale.as_deref(), base)?,
        Command::Show { file, stage } => {
            let stage = stage_or_default(stage);
            let repos = Repositories::new(&config);
            let path = resolve_article_file(&repos, &file, stage);
            print_json(&repos.articles.read(&path, stage)?)?;
        }
        Command::NewArticle {
            slug,
            locale,
            title,
            category,
            tags,
            date,
        } => {
            let path = new_article(&config, slug, locale, title, category, tags, date)?;
            println!("{path}");
        }
        Command::Publish(target) => {
            let repos = Repositories::new(&config);
            Entry::find(&repos, &config, &target, Stage::Drafts)?.move_to(&repos, Stage::Published)?;
        }
        Command::Unpublish(target) => {
            let repos = Repositories::new(&config);
            Entry::find(&repos, &config, &target, Stage::Published)?.move_to(&repos, Stage::Drafts)?;
        }
        Command::Delete { target, stage } => {
            let stage = stage_or_default(stage);
            let repos = Repositories::new(&config);
            Entry::find(&repos, &config, &target, stage)?.delete(&repos, stage)?;
        }
        Command::Rename { file, new_slug, stage } => {
            let repos = Repositories::new(&config);
            let renamed = repos.articles.rename_slug(&file, &new_slug, stage_or_default(stage))?;
            println!("{renamed}");
        }
        Command::Options => print_json(&Catalog::default())?,
        Command::Sitemap { stage } => {
            let content = Content::load_stage(&config, stage_or_default(stage))?;
            let today = chrono::Utc::now().date_naive();
            print_json(&sitemap::build_all(&content, &config.default_locale, today)?)?;
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use camino::Utf8PathBuf;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use typewriter_lib::{
        repository::{ArticleRepository, PageRepository, SingletonPageRepository},
        Config, Stage,
    };

    use super::{new_article, setup, Cli, Collection, Command, Entry, Repositories, Target};

    const YAML: &str = r"
baseUrl: https://example.com
supportedLocales: [en, fr]
defaultLocale: en
home:
  label: { en: Home, fr: Accueil }
articles:
  segment: /articles
categories:
  segment: /categories
tags:
  segment: /tags
series:
  segment: /series
";

    fn project() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        let config = Config::from_yaml(YAML, &root).unwrap();
        (dir, config)
    }

    #[test]
    fn parses_targets() {
        let cli = Cli::try_parse_from(["typewriter", "publish", "articles", "hello", "--locale", "fr"]).unwrap();
        let Command::Publish(Target {
            collection,
            slug,
            locale,
        }) = cli.command
        else {
            panic!("expected publish");
        };
        assert_eq!(Collection::Articles, collection);
        assert_eq!(Some("hello".to_owned()), slug);
        assert_eq!(Some("fr".to_owned()), locale);
    }

    #[test]
    fn parses_stage_and_tags() {
        let cli = Cli::try_parse_from([
            "typewriter",
            "--config",
            "site/typewriter.yaml",
            "new-article",
            "hello",
            "--tags",
            "a,b",
        ])
        .unwrap();
        assert_eq!("site/typewriter.yaml", cli.config);
        assert!(matches!(cli.command, Command::NewArticle { ref tags, .. } if tags == &["a", "b"]));

        let cli = Cli::try_parse_from(["typewriter", "check", "--stage", "drafts", "--watch"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Check {
                stage: Some(Stage::Drafts),
                watch: true
            }
        ));
        assert!(Cli::try_parse_from(["typewriter", "check", "--stage", "archived"]).is_err());
    }

    #[test]
    fn setup_seeds_once() {
        let (_dir, config) = project();
        assert_eq!(10, setup(&config).unwrap());
        assert_eq!(0, setup(&config).unwrap());
        let home = SingletonPageRepository::home(&config.layout());
        assert_eq!(2, home.all(Stage::Drafts).unwrap().len());
    }

    #[test]
    fn article_lifecycle() {
        let (_dir, config) = project();
        let path = new_article(
            &config,
            "hello".to_owned(),
            None,
            "Hello".to_owned(),
            "news".to_owned(),
            vec!["a".to_owned()],
            None,
        )
        .unwrap();
        assert!(path.is_file());
        assert!(new_article(&config, "hello".to_owned(), None, String::new(), String::new(), vec![], None).is_err());

        let repos = Repositories::new(&config);
        let target = Target {
            collection: Collection::Articles,
            slug: Some("hello".to_owned()),
            locale: None,
        };
        Entry::find(&repos, &config, &target, Stage::Drafts)
            .unwrap()
            .move_to(&repos, Stage::Published)
            .unwrap();

        let articles = ArticleRepository::new(&config.layout());
        assert!(articles.all(Stage::Drafts).unwrap().is_empty());
        let published = articles.all(Stage::Published).unwrap();
        assert_eq!("Hello", published[0].title);
        assert_eq!(vec!["a"], published[0].meta.tags);
    }

    #[test]
    fn home_has_no_slug() {
        let (_dir, config) = project();
        let repos = Repositories::new(&config);
        let target = Target {
            collection: Collection::Home,
            slug: Some("index".to_owned()),
            locale: None,
        };
        assert!(Entry::find(&repos, &config, &target, Stage::Drafts).is_err());
    }
}
