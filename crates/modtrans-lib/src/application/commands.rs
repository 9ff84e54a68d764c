//! Command execution handlers
//!
//! Every handler receives a `&dyn Session` and reaches the outside world
//! only through its providers.

use crate::application::session::{CommandSession, Session};
use crate::application::{CliConfig, Commands, FilterArgs, ThemeChoice};
use crate::archive::{InputFile, MergeError, merge, output_file_name, validate_inputs};
use crate::catalog::{
    CardAction, CardView, CatalogLoader, CatalogOrigin, CatalogState, FilterState, Mod, ModLookup,
    Translation, card_action, card_matches, matching_translations,
};
use crate::networking::download_pair;
use crate::primitives::Theme;
use crate::storage::{resolve_theme, save_theme, stored_theme};
use anyhow::{Context, Result, anyhow, bail};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Where missing translations can be requested
pub const CONTRIBUTE_URL: &str = "https://github.com/halitflyn/ua/issues";

/// Execute CLI commands with a production session
pub async fn execute_command(config: CliConfig) -> Result<()> {
    let session = CommandSession::new(config.app_config)?;

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            session
                .display()
                .status()
                .message("modtrans - Ukrainian translations for Minecraft mods");
            session
                .display()
                .status()
                .subtle("Run 'modtrans --help' for usage information");
            return Ok(());
        }
    };

    execute_command_with_session(command, &session).await
}

/// Execute a specific command with a provided session (for testing)
pub async fn execute_command_with_session(command: Commands, session: &dyn Session) -> Result<()> {
    match command {
        Commands::List { search, filters } => handle_list(session, search, filters).await,
        Commands::Show { name, filters } => handle_show(session, &name, filters).await,
        Commands::Get {
            name,
            filters,
            pick,
            output,
        } => handle_get(session, &name, filters, pick, output).await,
        Commands::Filters => handle_filters(session).await,
        Commands::Refresh => handle_refresh(session).await,
        Commands::Merge {
            jar,
            translation,
            output,
        } => handle_merge(session, &jar, &translation, output).await,
        Commands::Theme { choice } => handle_theme(session, choice).await,
        Commands::Version => handle_version(session).await,
    }
}

fn catalog_loader(session: &dyn Session) -> CatalogLoader<'_> {
    let config = session.config().app_config();
    CatalogLoader::new(session.storage(), session.network(), &config.catalog_url)
        .with_window(config.cache_window())
}

async fn load_catalog(session: &dyn Session) -> Result<Arc<CatalogState>> {
    let mut loader = catalog_loader(session);
    let spinner = session.display().progress().spinner("Loading catalog");

    match loader.load().await {
        Ok(state) => {
            let source = match loader.origin() {
                Some(CatalogOrigin::Cache) => "cached",
                _ => "fetched",
            };
            spinner.finish(&format!("{} mods ({source})", state.len()));
            Ok(state)
        }
        Err(e) => {
            spinner.abandon("Catalog unavailable");
            session.display().status().error("catalog", &e.to_string());
            Err(anyhow!(e)).context("Failed to load catalog")
        }
    }
}

/// Resolves `name` against the catalog, reporting unknown or ambiguous names
fn resolve_mod<'s>(session: &dyn Session, state: &'s CatalogState, name: &str) -> Result<&'s Mod> {
    match state.find_by_name(name) {
        ModLookup::Found(id) => state
            .get(id)
            .ok_or_else(|| anyhow!("Mod '{name}' is no longer in the catalog")),
        ModLookup::NotFound => {
            session
                .display()
                .status()
                .error(name, "no mod with that name");
            bail!("Unknown mod: {name}")
        }
        ModLookup::Ambiguous(candidates) => {
            session
                .display()
                .status()
                .error(name, "matches several mods");
            let items: Vec<&str> = candidates.iter().map(String::as_str).collect();
            session.display().status().list(&items);
            bail!("Ambiguous mod name '{name}' ({} candidates)", candidates.len())
        }
    }
}

fn no_translations_message(filtered: bool) -> String {
    let mut message = String::from("No translations available");
    if filtered {
        message.push_str(" for the selected filters");
    }
    message
}

fn report_no_translations(session: &dyn Session, filter: &FilterState) {
    session
        .display()
        .status()
        .warning(&no_translations_message(filter.has_choice()));
    session.display().status().subtle(&format!(
        "Request or contribute a translation: {CONTRIBUTE_URL}"
    ));
}

fn translation_rows(translations: &[Translation<'_>]) -> Vec<Vec<String>> {
    translations
        .iter()
        .enumerate()
        .map(|(i, t)| {
            vec![
                (i + 1).to_string(),
                t.version.version.clone(),
                t.version.loader.clone(),
                t.version.author.clone(),
            ]
        })
        .collect()
}

fn show_translation_table(session: &dyn Session, translations: &[Translation<'_>]) {
    let rows = translation_rows(translations);
    let rows: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| row.iter().map(String::as_str).collect())
        .collect();
    session
        .display()
        .table()
        .table(&["#", "Version", "Loader", "Author"], &rows);
}

#[instrument(skip(session, filters))]
async fn handle_list(
    session: &dyn Session,
    search: Option<String>,
    filters: FilterArgs,
) -> Result<()> {
    let state = load_catalog(session).await?;
    if state.is_empty() {
        session
            .display()
            .status()
            .warning("The catalog is empty, nothing to show");
        return Ok(());
    }

    let filter = filters.to_filter_state(search.as_deref());
    let cards: Vec<CardView<'_>> = state
        .entries()
        .filter(|(_, m)| card_matches(m, &filter))
        .map(|(id, m)| CardView::build(id, m, &filter))
        .collect();

    if cards.is_empty() {
        session
            .display()
            .status()
            .info("No mods match the current filters");
        return Ok(());
    }

    for card in &cards {
        let m = card.mod_ref;
        session.display().status().emphasis(&m.name);
        if !m.description.is_empty() {
            session.display().status().message(&m.description);
        }

        let action = match &card.action {
            CardAction::Download(_) => "download",
            CardAction::Select(_) => "select",
        };
        let mut properties = vec![
            ("Versions", card.version_label.as_str()),
            ("Loaders", card.loaders_label.as_str()),
        ];
        if let Some(author) = card.author_label {
            properties.push(("Translation by", author));
        }
        if !m.modrinth_link.is_empty() {
            properties.push(("Modrinth", m.modrinth_link.as_str()));
        }
        properties.push(("Action", action));
        session.display().table().properties(&properties);
        session.display().status().message("");
    }

    session
        .display()
        .status()
        .subtle(&format!("{} of {} mods shown", cards.len(), state.len()));
    Ok(())
}

async fn handle_show(session: &dyn Session, name: &str, filters: FilterArgs) -> Result<()> {
    let state = load_catalog(session).await?;
    let m = resolve_mod(session, &state, name)?;
    let filter = filters.to_filter_state(None);
    let translations = matching_translations(m, &filter);

    session.display().status().section(&m.name);
    if translations.is_empty() {
        report_no_translations(session, &filter);
        return Ok(());
    }

    show_translation_table(session, &translations);
    Ok(())
}

/// Chooses one translation via `--pick` or a prompt
fn choose_translation<'a>(
    session: &dyn Session,
    translations: Vec<Translation<'a>>,
    pick: Option<usize>,
) -> Result<Translation<'a>> {
    if let Some(n) = pick {
        return n
            .checked_sub(1)
            .and_then(|i| translations.get(i).copied())
            .ok_or_else(|| {
                anyhow!(
                    "--pick {n} is out of range (1-{})",
                    translations.len()
                )
            });
    }

    let labels: Vec<String> = translations
        .iter()
        .map(|t| {
            format!(
                "{} {} ({})",
                t.version.version, t.version.loader, t.version.author
            )
        })
        .collect();

    match session
        .interactive()
        .select("Choose a translation", &labels)?
    {
        Some(i) => translations
            .get(i)
            .copied()
            .ok_or_else(|| anyhow!("Selection {i} is out of range")),
        None => {
            show_translation_table(session, &translations);
            bail!("Several translations match; pass --pick N to choose one")
        }
    }
}

#[instrument(skip(session, filters, output))]
async fn handle_get(
    session: &dyn Session,
    name: &str,
    filters: FilterArgs,
    pick: Option<usize>,
    output: Option<PathBuf>,
) -> Result<()> {
    let state = load_catalog(session).await?;
    let m = resolve_mod(session, &state, name)?;
    let filter = filters.to_filter_state(None);

    let translation = match card_action(matching_translations(m, &filter)) {
        CardAction::Download(single) => single,
        CardAction::Select(list) if list.is_empty() => {
            report_no_translations(session, &filter);
            bail!("No translations available for {}", m.name)
        }
        CardAction::Select(list) => choose_translation(session, list, pick)?,
    };
    debug!(
        version = %translation.version.version,
        loader = %translation.version.loader,
        author = %translation.version.author,
        "Selected translation"
    );

    let out_dir = match output {
        Some(dir) => dir,
        None => session.filesystem().current_dir()?,
    };
    let config = session.config().app_config();

    let spinner = session
        .display()
        .progress()
        .spinner(&format!("Downloading {}", m.name));
    let pair = match download_pair(
        session.network(),
        session.filesystem(),
        &translation.version.link,
        &translation.lang_file.url,
        &out_dir,
        config.download_delay(),
    )
    .await
    {
        Ok(pair) => {
            spinner.finish_clear();
            pair
        }
        Err(e) => {
            spinner.abandon("Download failed");
            session.display().status().error(&m.name, &e.to_string());
            return Err(anyhow!(e)).context(format!("Failed to download {}", m.name));
        }
    };

    let jar = pair.jar_path.display().to_string();
    let json = pair.json_path.display().to_string();
    session.display().status().success("mod", &jar);
    session.display().status().success("translation", &json);
    session.display().status().info(&format!(
        "Install the translation with: modtrans merge {jar} {json}"
    ));
    Ok(())
}

async fn handle_filters(session: &dyn Session) -> Result<()> {
    let state = load_catalog(session).await?;

    let lists = [
        ("Versions", state.versions()),
        ("Loaders", state.loaders()),
        ("Authors", state.authors()),
    ];
    for (title, values) in lists {
        session.display().status().section(title);
        let items: Vec<&str> = values.iter().map(String::as_str).collect();
        if items.is_empty() {
            session.display().status().subtle("(none)");
        } else {
            session.display().table().list(&items);
        }
    }
    Ok(())
}

async fn handle_refresh(session: &dyn Session) -> Result<()> {
    let mut loader = catalog_loader(session);
    let spinner = session.display().progress().spinner("Refreshing catalog");

    match loader.force_refresh().await {
        Ok(state) => {
            spinner.finish_clear();
            session
                .display()
                .status()
                .success("catalog", &format!("{} mods loaded", state.len()));
            Ok(())
        }
        Err(e) => {
            spinner.abandon("Refresh failed");
            session.display().status().error("catalog", &e.to_string());
            Err(anyhow!(e)).context("Failed to refresh catalog")
        }
    }
}

fn read_input(session: &dyn Session, path: &Path) -> Result<InputFile> {
    let contents = session.filesystem().read_bytes(path)?;
    Ok(InputFile::from_path(path, contents))
}

fn merge_failed(session: &dyn Session, package: &InputFile, error: MergeError) -> anyhow::Error {
    session.display().status().error(&package.name, &error.to_string());
    anyhow!(error).context("Failed to merge translation")
}

#[instrument(skip(session))]
async fn handle_merge(
    session: &dyn Session,
    jar: &Path,
    translation: &Path,
    output: Option<PathBuf>,
) -> Result<()> {
    let package = read_input(session, jar)?;
    let translation = read_input(session, translation)?;
    validate_inputs(Some(&package), Some(&translation))
        .map_err(|e| merge_failed(session, &package, e))?;

    let target = output.unwrap_or_else(|| jar.with_file_name(output_file_name(&package.name)));
    let prompt = format!(
        "Write {} with {} merged in?",
        target.display(),
        translation.name
    );
    if !session.interactive().confirm(&prompt, true)? {
        session.display().status().info("Merge cancelled");
        return Ok(());
    }

    let merged = merge(Some(&package), Some(&translation))
        .map_err(|e| merge_failed(session, &package, e))?;

    session.filesystem().write_bytes(&target, &merged.bytes)?;

    if merged.replaced {
        session
            .display()
            .status()
            .warning(&format!("Replaced existing {}", merged.entry_path));
    }
    session.display().status().success(
        &target.display().to_string(),
        &format!("{} -> {}", merged.mod_id, merged.entry_path),
    );
    Ok(())
}

async fn handle_theme(session: &dyn Session, choice: Option<ThemeChoice>) -> Result<()> {
    let store = session.storage();

    let theme = match choice {
        None => {
            match stored_theme(store)? {
                Some(theme) => session.display().status().info(&format!("Theme: {theme}")),
                None => session
                    .display()
                    .status()
                    .info("Theme: not set (following the terminal background)"),
            }
            return Ok(());
        }
        Some(ThemeChoice::Dark) => Theme::Dark,
        Some(ThemeChoice::Light) => Theme::Light,
        Some(ThemeChoice::Toggle) => {
            resolve_theme(store, session.config().terminal_prefers_dark())?.toggled()
        }
    };

    save_theme(store, theme).context("Failed to save theme preference")?;
    session.display().status().success("theme", theme.as_str());
    Ok(())
}

async fn handle_version(session: &dyn Session) -> Result<()> {
    let config = session.config().app_config();
    session
        .display()
        .status()
        .emphasis(&format!("modtrans {}", env!("CARGO_PKG_VERSION")));
    session
        .display()
        .status()
        .message("Ukrainian translations for Minecraft mods");
    session.display().status().message("");

    let cache = config
        .cache_dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "unavailable".to_string());
    let info = [
        ("Catalog", config.catalog_url.as_str()),
        ("Cache", cache.as_str()),
        ("Target", std::env::consts::ARCH),
    ];
    session.display().table().properties(&info);

    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
