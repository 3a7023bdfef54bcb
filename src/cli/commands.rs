//! Command dispatch
//!
//! Each edit command loads the outline file, applies one edit through an
//! `OutlineSession` and writes the result back. Unknown ids leave the file
//! untouched.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::{location_stem, GuidePlan, OutlineEdit, OutlineSession};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{OutlineIndex, OutlineRequest};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;
use crate::tree_traits::forest_tree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::New {
            location,
            days,
            budget,
            output: target,
        }) => cmd_new(&container, location, *days, budget.clone(), target),
        Some(Commands::Show { file }) => cmd_show(&container, file),
        Some(Commands::Rename { file, id, title }) => cmd_edit(
            &container,
            file,
            OutlineEdit::Rename {
                id: id.clone(),
                title: title.clone(),
            },
        ),
        Some(Commands::AddChild { file, id }) => cmd_edit(
            &container,
            file,
            OutlineEdit::InsertChild {
                parent_id: id.clone(),
            },
        ),
        Some(Commands::AddSibling { file, id }) => cmd_edit(
            &container,
            file,
            OutlineEdit::InsertSibling {
                anchor_id: id.clone(),
            },
        ),
        Some(Commands::AddTop { file }) => cmd_edit(&container, file, OutlineEdit::AppendTopLevel),
        Some(Commands::Delete { file, id }) => {
            cmd_edit(&container, file, OutlineEdit::Delete { id: id.clone() })
        }
        Some(Commands::Path { file, id }) => cmd_path(&container, file, id),
        Some(Commands::Validate { file }) => cmd_validate(&container, file),
        Some(Commands::Plan { file }) => cmd_plan(&container, file),
        Some(Commands::Render {
            file,
            id: Some(id),
            output: target,
        }) => cmd_render_section(&container, file, id, target.as_deref()),
        Some(Commands::Render {
            file,
            id: None,
            output: target,
        }) => cmd_render(&container, file, target.as_deref()),
        Some(Commands::Config) => cmd_config(&container),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::InvalidArgs(
            "no command given, see --help".to_string(),
        )),
    }
}

fn load_session(container: &ServiceContainer, file: &Path) -> CliResult<OutlineSession> {
    let doc = container.repository().load(file)?;
    Ok(OutlineSession::from_document(doc, container.store())?)
}

#[instrument(skip(container))]
fn cmd_new(
    container: &ServiceContainer,
    location: &str,
    days: Option<u32>,
    budget: Option<String>,
    target: &Path,
) -> CliResult<()> {
    let request = OutlineRequest {
        location: location.to_string(),
        days,
        budget,
    };
    let session = OutlineSession::start(container.provider.as_ref(), &request, container.store())?;
    container.repository().save(target, &session.to_document())?;
    output::success(&format!(
        "{} sections for {} written to {}",
        session.ids().len(),
        session.location(),
        target.display()
    ));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_show(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let session = load_session(container, file)?;
    output::info(&forest_tree(session.location(), session.forest()));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_edit(container: &ServiceContainer, file: &Path, edit: OutlineEdit) -> CliResult<()> {
    let mut session = load_session(container, file)?;
    if !session.resolves(&edit) {
        output::warning(&format!(
            "no section with id {} in {}, outline unchanged",
            edit.target().unwrap_or_default(),
            file.display()
        ));
        return Ok(());
    }

    let before: HashSet<String> = session.ids().into_iter().collect();
    let changed = session.apply(&edit);
    debug!(changed, "edit applied");
    if changed {
        container.repository().save(file, &session.to_document())?;
    }

    match &edit {
        OutlineEdit::Rename { id, title } => output::success(&format!("renamed {id} to {title:?}")),
        OutlineEdit::Delete { id } => output::success(&format!("deleted {id} and its subsections")),
        _ => {
            let added = session.ids().into_iter().find(|id| !before.contains(id));
            if let Some(id) = added {
                output::action("added", &id);
            }
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_path(container: &ServiceContainer, file: &Path, id: &str) -> CliResult<()> {
    let session = load_session(container, file)?;
    let index = OutlineIndex::build(session.forest());
    let crumbs = index.breadcrumb(id);
    if crumbs.is_empty() {
        output::warning(&format!("no section with id {id}"));
        return Ok(());
    }
    output::breadcrumb(&crumbs);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_validate(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    // load() rejects duplicate ids and level mismatches
    let doc = container.repository().load(file)?;
    let index = OutlineIndex::build(&doc.outline);
    output::success(&format!(
        "{}: {} sections, depth {}",
        file.display(),
        index.len(),
        index.depth()
    ));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_plan(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let session = load_session(container, file)?;
    let plan = GuidePlan::build(session.location(), session.forest());
    output::header(&format!("{} ({})", plan.location, plan.archive_name));
    for section in &plan.sections {
        output::section(section.level, &section.node_id, &section.filename);
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_render(container: &ServiceContainer, file: &Path, target: Option<&Path>) -> CliResult<()> {
    let session = load_session(container, file)?;
    let guide = session.render(&container.guide_service())?;

    // location comes from the file; keep the default target inside output_dir
    let target: PathBuf = match target {
        Some(path) => path.to_path_buf(),
        None => container
            .settings
            .output_dir
            .join(format!("{}_guide.html", location_stem(session.location()))),
    };
    write_html(container, &target, &guide.html_content())?;
    output::success(&format!(
        "{} sections rendered to {}",
        guide.sections.len(),
        target.display()
    ));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_render_section(
    container: &ServiceContainer,
    file: &Path,
    id: &str,
    target: Option<&Path>,
) -> CliResult<()> {
    let session = load_session(container, file)?;
    let Some(section) = session.render_section(&container.guide_service(), id)? else {
        output::warning(&format!("no section with id {id} in {}", file.display()));
        return Ok(());
    };

    let target: PathBuf = match target {
        Some(path) => path.to_path_buf(),
        None => container
            .settings
            .output_dir
            .join(Path::new(&section.filename).with_extension("html")),
    };
    write_html(container, &target, &section.anchored_html())?;
    output::section(1, &section.node_id, &target.display());
    output::detail(&format!("download: {}", section.download_url()));
    Ok(())
}

fn write_html(container: &ServiceContainer, target: &Path, html: &str) -> CliResult<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        container
            .fs
            .create_dir_all(parent)
            .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
    }
    container
        .fs
        .write(target, html)
        .map_err(|e| InfraError::io(format!("write {}", target.display()), e))?;
    Ok(())
}

fn cmd_config(container: &ServiceContainer) -> CliResult<()> {
    if let Some(path) = global_config_path() {
        output::header(&format!("# {}", path.display()));
    }
    output::info(&container.settings.to_toml()?);
    Ok(())
}
