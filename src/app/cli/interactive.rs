//! Interactive brainstorm session.

use std::io::{self, ErrorKind};
use std::path::PathBuf;

use chrono::Local;
use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::app::api::{HttpAppContext, current_context};
use crate::app::commands::{export, ideas, outline};
use crate::domain::{AppError, BrainstormRequest, SessionState, Tone};

const MENU_NEW_IDEAS: &str = "[new ideas]";
const MENU_QUIT: &str = "[quit]";

enum IdeaMenu {
    Select(usize),
    NewIdeas,
    Quit,
}

pub fn run_interactive() -> Result<(), AppError> {
    let ctx = current_context()?;
    let mut state = SessionState::new();

    println!("AI Blog Idea Brainstormer ✨");
    println!("Generate creative blog post ideas and detailed outlines with AI assistance.\n");

    loop {
        if state.batch().is_none() {
            let Some(next) = brainstorm(&ctx, &state)? else {
                return Ok(());
            };
            state = next;
        }

        match prompt_idea_menu(&state)? {
            IdeaMenu::Quit => return Ok(()),
            IdeaMenu::NewIdeas => {
                if let Some(next) = brainstorm(&ctx, &state)? {
                    state = next;
                }
            }
            IdeaMenu::Select(index) => {
                println!("Creating detailed outline for your selected idea...");
                match outline::select_idea(&ctx, &state, index) {
                    Ok(next) => {
                        state = next;
                        show_outline(&state)?;
                    }
                    Err(err) => report(err)?,
                }
            }
        }
    }
}

/// Collect the form and generate ideas until one attempt succeeds or the user
/// cancels. Returns `None` on cancel.
fn brainstorm(
    ctx: &HttpAppContext,
    state: &SessionState,
) -> Result<Option<SessionState>, AppError> {
    loop {
        let Some(request) = prompt_request()? else {
            return Ok(None);
        };

        println!("Generating creative blog ideas...");
        match ideas::generate_ideas(ctx, state, request) {
            Ok(next) => {
                println!("\n📝 Blog Ideas Generated!");
                println!("Select one idea below to create a detailed outline.\n");
                return Ok(Some(next));
            }
            Err(err) => report(err)?,
        }
    }
}

/// Print a recoverable error and continue, or propagate a fatal one.
fn report(err: AppError) -> Result<(), AppError> {
    if !err.is_recoverable() {
        return Err(err);
    }
    eprintln!("❌ {}", err);
    Ok(())
}

fn prompt_request() -> Result<Option<BrainstormRequest>, AppError> {
    loop {
        let Some(topic) =
            prompt_text("Blog Topic/Niche (e.g., travel, tech, fitness, cooking)", false)?
        else {
            return Ok(None);
        };
        let Some(audience) =
            prompt_text("Target Audience (e.g., beginners, professionals, parents)", false)?
        else {
            return Ok(None);
        };
        let Some(tone) = prompt_tone()? else {
            return Ok(None);
        };
        let Some(keywords) =
            prompt_text("Keywords or Goals (Optional, e.g., SEO, engagement, conversion)", true)?
        else {
            return Ok(None);
        };

        match BrainstormRequest::new(topic, audience, tone, Some(keywords)) {
            Ok(request) => return Ok(Some(request)),
            Err(err) => report(err)?,
        }
    }
}

fn prompt_text(prompt: &str, allow_empty: bool) -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt(prompt).allow_empty(allow_empty).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(prompt_failed(prompt, err)),
    }
}

fn prompt_failed(what: &str, err: DialoguerError) -> AppError {
    AppError::Io(io::Error::other(format!("Failed to read {}: {}", what, err)))
}

fn prompt_tone() -> Result<Option<Tone>, AppError> {
    let items: Vec<&str> = Tone::ALL.iter().map(|tone| tone.label()).collect();
    let selection = Select::new()
        .with_prompt("Writing Tone")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| prompt_failed("tone", err))?;

    Ok(selection.map(|index| Tone::ALL[index]))
}

fn prompt_idea_menu(state: &SessionState) -> Result<IdeaMenu, AppError> {
    let Some(batch) = state.batch() else {
        return Ok(IdeaMenu::NewIdeas);
    };

    let mut items = batch.ideas.numbered();
    let idea_count = items.len();
    items.push(MENU_NEW_IDEAS.to_string());
    items.push(MENU_QUIT.to_string());

    let default = state.selection().map(|selection| selection.index).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Select an idea to outline")
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|err| prompt_failed("idea selection", err))?;

    Ok(match selection {
        Some(index) if index < idea_count => IdeaMenu::Select(index),
        Some(index) if index == idea_count => IdeaMenu::NewIdeas,
        _ => IdeaMenu::Quit,
    })
}

fn show_outline(state: &SessionState) -> Result<(), AppError> {
    let Some(current) = state.outline() else {
        return Ok(());
    };

    println!("\n✅ Outline Created!\n");
    println!("{}\n", current.as_str());

    let save = Confirm::new()
        .with_prompt("Save the outline as .txt and .pdf files?")
        .default(false)
        .interact_opt()
        .map_err(|err| prompt_failed("save confirmation", err))?;
    if save != Some(true) {
        return Ok(());
    }

    let Some(dir) = prompt_save_dir()? else {
        return Ok(());
    };
    let timestamp = Local::now().naive_local();
    match export::export_outline(state, &dir, timestamp) {
        Ok(paths) => {
            for path in paths {
                println!("✅ Saved {}", path.display());
            }
            println!("Note: the .pdf file contains the same plain text as the .txt file.");
            Ok(())
        }
        Err(err) => report(err),
    }
}

fn prompt_save_dir() -> Result<Option<PathBuf>, AppError> {
    match Input::<String>::new().with_prompt("Directory").default(".".to_string()).interact_text() {
        Ok(value) => Ok(Some(PathBuf::from(value))),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(prompt_failed("directory", err)),
    }
}
