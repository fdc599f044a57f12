//! Scenario Console Entry Point

mod cli;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use scenario_console::{ApiClient, ApiError, ConsoleConfig, QuestionEditor, SaveReport, ScenarioDraft};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConsoleConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(url) = &cli.url {
        config.base_url = url.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = dir.clone();
    }

    rolling_logger::init_logger(&config.log_dir, &config.app_name).context("initializing logger")?;
    log::info!("using backend {}", config.api_base());

    let api = ApiClient::new(&config).context("building http client")?;

    let result = run(&api, &cli.command).await;
    if let Err(e) = &result {
        let _ = rolling_logger::error(&format!("{:#}", e));
    }
    result
}

async fn run(api: &ApiClient, command: &Command) -> Result<()> {
    match command {
        Command::Scenarios => {
            for scenario in api.list_scenarios().await.context("listing scenarios")? {
                let state = if scenario.is_active { "" } else { " (inactive)" };
                println!("{:>4}  {}{}", scenario.id, scenario.name, state);
            }
        }
        Command::Questions { scenario, json } => {
            let editor = open_editor(api, *scenario).await?;
            if *json {
                println!("{}", serde_json::to_string_pretty(editor.entries())?);
            } else {
                print_questions(&editor);
            }
        }
        Command::Add { scenario, text } => {
            let mut editor = open_editor(api, *scenario).await?;
            editor.add(text)?;
            save(&mut editor, *scenario).await?;
        }
        Command::Edit { scenario, index, text } => {
            let mut editor = open_editor(api, *scenario).await?;
            editor.update_text(position(*index)?, text.as_str())?;
            save(&mut editor, *scenario).await?;
        }
        Command::Move { scenario, from, to } => {
            let mut editor = open_editor(api, *scenario).await?;
            editor.begin_drag(position(*from)?)?;
            let moved = editor.drop_at(position(*to)?)?;
            editor.end_drag();
            if !moved {
                println!("Nothing to move");
                return Ok(());
            }
            save(&mut editor, *scenario).await?;
        }
        Command::Remove { scenario, index, yes } => {
            if !yes {
                bail!("deleting a question cannot be undone; pass --yes to confirm");
            }
            let mut editor = open_editor(api, *scenario).await?;
            let removed = editor.remove(position(*index)?).await?;
            println!("Removed: {}", removed.text());
            // Close the gap left in the stored order
            save(&mut editor, *scenario).await?;
        }
        Command::Copy { scenario } => {
            let copy = api
                .copy_scenario(*scenario)
                .await
                .with_context(|| format!("copying scenario {}", scenario))?;
            println!("Copied to scenario {}: {}", copy.id, copy.name);
        }
        Command::NewScenario {
            name,
            greeting,
            disclaimer,
            questions,
        } => {
            let mut draft = ScenarioDraft::new(name.as_str(), greeting.as_str());
            draft.disclaimer_text = disclaimer.clone();
            let scenario = api.create_scenario(&draft).await.context("creating scenario")?;
            println!("Created scenario {}: {}", scenario.id, scenario.name);

            if !questions.is_empty() {
                let mut editor = QuestionEditor::new(Arc::new(api.clone()));
                for text in questions {
                    editor.add(text)?;
                }
                save(&mut editor, scenario.id).await?;
            }
        }
        Command::Rename { scenario, name } => {
            let current = api
                .get_scenario(*scenario)
                .await
                .map_err(|e| missing_scenario(e, *scenario))?;
            let draft = ScenarioDraft {
                name: name.clone(),
                ..ScenarioDraft::from(&current)
            };
            let renamed = api.update_scenario(*scenario, &draft).await?;
            println!("Renamed scenario {}: {} -> {}", renamed.id, current.name, renamed.name);
        }
        Command::DeleteScenario { scenario, yes } => {
            if !yes {
                bail!("deleting a scenario removes its questions too; pass --yes to confirm");
            }
            api.delete_scenario(*scenario)
                .await
                .map_err(|e| missing_scenario(e, *scenario))?;
            println!("Deleted scenario {}", scenario);
        }
    }
    Ok(())
}

async fn open_editor(api: &ApiClient, scenario_id: u32) -> Result<QuestionEditor> {
    let repo = Arc::new(api.clone());
    QuestionEditor::open(repo, scenario_id)
        .await
        .with_context(|| format!("loading questions of scenario {}", scenario_id))
}

async fn save(editor: &mut QuestionEditor, scenario_id: u32) -> Result<()> {
    let report: SaveReport = editor.save(scenario_id).await?;
    for line in report.lines() {
        println!("{}", line);
    }
    println!("Saved ({} created, {} updated)", report.created(), report.updated());
    Ok(())
}

fn print_questions(editor: &QuestionEditor) {
    if editor.is_empty() {
        println!("No questions");
        return;
    }
    for entry in editor.entries() {
        let id = entry.id().map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
        println!("#{:<3} [{}] {}", entry.sort_order(), id, entry.text());
    }
}

fn missing_scenario(err: ApiError, scenario_id: u32) -> anyhow::Error {
    if err.is_not_found() {
        anyhow::anyhow!("scenario {} does not exist", scenario_id)
    } else {
        err.into()
    }
}

/// 1-based command-line index to a list index
fn position(index: usize) -> Result<usize> {
    match index.checked_sub(1) {
        Some(i) => Ok(i),
        None => bail!("question numbers start at 1"),
    }
}
