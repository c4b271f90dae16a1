//! Command execution.
//!
//! Every command resolves to one entity type (`list` always to tasks); [`run`] picks the concrete
//! snapshot type and hands off to a generic executor.

use crate::{CliError, Commands, Result as CliErrorResult, input::read_source};

use std::path::{Path, PathBuf};

use chrono::Utc;
use log::debug;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tm_config::Config;
use tm_core::{
    Entity, EntityKind, FieldKind, Label, MergeError, Task, TaskQuery, TaskStatus, UpdateRequest,
    User, ValidationRuleSet, build, merge, merge_tracked,
};
use uuid::Uuid;

/// One row of `tm schema` output
#[derive(Debug, Serialize)]
struct SchemaField {
    name: &'static str,
    kind: FieldKind,
    mutable: bool,
    required: bool,
    nullable: bool,
}

/// Resolve the config dir, then load and validate the config in it.
pub fn load_config(config_dir: Option<&Path>) -> CliErrorResult<(Config, PathBuf)> {
    let dir = match config_dir {
        Some(dir) => dir.to_path_buf(),
        None => Config::config_dir()?,
    };

    let config = Config::load_from(&dir)?;
    config.validate()?;

    Ok((config, dir))
}

/// Execute `command`, returning the JSON document to print on success.
pub fn run(command: &Commands, config: &Config) -> CliErrorResult<Value> {
    let kind = command.entity();
    let rules = kind.rules(&config.validation);

    debug!("Executing {:?} with {} rule(s)", command, rules.len());

    match kind {
        EntityKind::Task => execute::<Task>(command, &rules),
        EntityKind::TaskStatus => execute::<TaskStatus>(command, &rules),
        EntityKind::Label => execute::<Label>(command, &rules),
        EntityKind::User => execute::<User>(command, &rules),
    }
}

/// Stdout body for a validation rejection, `None` for any other failure.
pub fn error_body(err: &CliError) -> Option<Value> {
    let CliError::Merge(merge_err @ MergeError::Rejected { issues, .. }) = err else {
        return None;
    };

    Some(json!({
        "error": {
            "code": "VALIDATION_ERROR",
            "message": merge_err.to_string(),
            "issues": issues,
        }
    }))
}

fn execute<E>(command: &Commands, rules: &ValidationRuleSet) -> CliErrorResult<Value>
where
    E: Entity + Serialize + DeserializeOwned,
{
    match command {
        Commands::Merge {
            current, request, ..
        } => {
            let snapshot: E = read_snapshot(current)?;
            let request = read_request(request)?;

            let merged = merge(&request, &snapshot, rules)?;
            Ok(serde_json::to_value(merged)?)
        }

        Commands::Create { id, request, .. } => {
            let request = read_request(request)?;
            let id = id.unwrap_or_else(Uuid::new_v4);

            let created: E = build(&request, id, Utc::now(), rules)?;
            Ok(serde_json::to_value(created)?)
        }

        Commands::Diff {
            current, request, ..
        } => {
            let snapshot: E = read_snapshot(current)?;
            let request = read_request(request)?;

            let outcome = merge_tracked(&request, &snapshot, rules)?;
            Ok(serde_json::to_value(outcome.changes)?)
        }

        Commands::Schema { .. } => Ok(serde_json::to_value(schema_table::<E>(rules))?),

        Commands::List { tasks, params } => {
            let tasks: Vec<Task> = read_snapshot(tasks)?;
            let query = TaskQuery::from_params(
                params.iter().map(|(key, value)| (key.as_str(), value.as_str())),
            )
            .map_err(CliError::query)?;

            let page = query.apply(&tasks);
            debug!("Listed {} of {} matching task(s)", page.tasks.len(), page.total);
            Ok(serde_json::to_value(page)?)
        }
    }
}

fn read_snapshot<E: DeserializeOwned>(path: &Path) -> CliErrorResult<E> {
    let contents = read_source(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::json(path, e))
}

fn read_request(path: &Path) -> CliErrorResult<UpdateRequest> {
    let contents = read_source(path)?;
    UpdateRequest::from_json(&contents).map_err(|e| CliError::request(path, e))
}

fn schema_table<E: Entity>(rules: &ValidationRuleSet) -> Vec<SchemaField> {
    E::schema()
        .iter()
        .map(|spec| {
            let rule = rules.rule(spec.name);
            SchemaField {
                name: spec.name,
                kind: spec.kind,
                mutable: spec.mutable,
                required: rule.is_some_and(|rule| rule.required),
                nullable: rule.is_some_and(|rule| rule.nullable),
            }
        })
        .collect()
}
