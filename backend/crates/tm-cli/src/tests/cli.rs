use crate::{Cli, Commands};

use std::path::Path;

use clap::Parser;
use googletest::prelude::*;
use tm_core::EntityKind;

#[test]
fn given_merge_args_when_parsed_then_merge_command() {
    // When
    let cli = Cli::try_parse_from([
        "tm", "merge", "--entity", "task", "--current", "task.json", "--request", "-",
    ])
    .unwrap();

    // Then
    assert!(!cli.pretty);
    match cli.command {
        Commands::Merge {
            entity,
            current,
            request,
        } => {
            assert_eq!(entity, EntityKind::Task);
            assert_eq!(current, Path::new("task.json"));
            assert_eq!(request, Path::new("-"));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    // When
    let cli = Cli::try_parse_from([
        "tm",
        "schema",
        "--entity",
        "task-status",
        "--pretty",
        "--config-dir",
        "/tmp/tm",
    ])
    .unwrap();

    // Then
    assert!(cli.pretty);
    assert_eq!(cli.config_dir.as_deref(), Some(Path::new("/tmp/tm")));
    assert_eq!(cli.command.entity(), EntityKind::TaskStatus);
}

#[test]
fn given_unknown_entity_when_parsed_then_error_lists_entities() {
    // When
    let result = Cli::try_parse_from(["tm", "schema", "--entity", "sprint"]);

    // Then
    let message = result.unwrap_err().to_string();
    assert_that!(message, contains_substring("task_status"));
}

#[test]
fn given_create_without_id_when_parsed_then_id_none() {
    let cli = Cli::try_parse_from(["tm", "create", "--entity", "label", "--request", "l.json"])
        .unwrap();

    assert!(matches!(cli.command, Commands::Create { id: None, .. }));
}

#[test]
fn given_malformed_id_when_parsed_then_error() {
    let result = Cli::try_parse_from([
        "tm", "create", "--entity", "label", "--id", "nope", "--request", "l.json",
    ]);

    assert_that!(result, err(anything()));
}

#[test]
fn given_list_params_when_parsed_then_split_on_first_equals() {
    // When
    let cli = Cli::try_parse_from([
        "tm",
        "list",
        "--tasks",
        "tasks.json",
        "--param",
        "titleCont=a=b",
        "--param",
        "_end=4",
    ])
    .unwrap();

    // Then
    assert_eq!(cli.command.entity(), EntityKind::Task);
    match cli.command {
        Commands::List { tasks, params } => {
            assert_eq!(tasks, Path::new("tasks.json"));
            assert_eq!(
                params,
                vec![
                    ("titleCont".to_string(), "a=b".to_string()),
                    ("_end".to_string(), "4".to_string()),
                ]
            );
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn given_list_param_without_equals_when_parsed_then_error() {
    let result = Cli::try_parse_from(["tm", "list", "--tasks", "t.json", "--param", "status"]);

    assert_that!(result, err(anything()));
}
