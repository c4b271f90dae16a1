use std::path::PathBuf;
use std::str::FromStr;

use clap::Subcommand;
use tm_core::EntityKind;
use uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a partial update to an existing snapshot
    Merge {
        /// Entity type: task, task-status, label or user
        #[arg(long, value_parser = parse_entity)]
        entity: EntityKind,

        /// Current snapshot JSON file ('-' for stdin)
        #[arg(long)]
        current: PathBuf,

        /// Update request JSON file ('-' for stdin)
        #[arg(long)]
        request: PathBuf,
    },

    /// Build a new snapshot from a creation request
    Create {
        #[arg(long, value_parser = parse_entity)]
        entity: EntityKind,

        /// Id for the new entity (random if omitted)
        #[arg(long)]
        id: Option<Uuid>,

        /// Creation request JSON file ('-' for stdin)
        #[arg(long)]
        request: PathBuf,
    },

    /// List the fields an update would change
    Diff {
        #[arg(long, value_parser = parse_entity)]
        entity: EntityKind,

        #[arg(long)]
        current: PathBuf,

        #[arg(long)]
        request: PathBuf,
    },

    /// Print the field table and rule flags for an entity
    Schema {
        #[arg(long, value_parser = parse_entity)]
        entity: EntityKind,
    },

    /// Filter, sort and page a JSON array of tasks
    List {
        /// Task array JSON file ('-' for stdin)
        #[arg(long)]
        tasks: PathBuf,

        /// Query parameter, e.g. --param status=done --param _sort=index
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

impl Commands {
    pub fn entity(&self) -> EntityKind {
        match self {
            Commands::Merge { entity, .. }
            | Commands::Create { entity, .. }
            | Commands::Diff { entity, .. }
            | Commands::Schema { entity } => *entity,
            Commands::List { .. } => EntityKind::Task,
        }
    }
}

fn parse_entity(s: &str) -> Result<EntityKind, String> {
    EntityKind::from_str(s).map_err(|_| {
        let known: Vec<&str> = EntityKind::ALL.iter().map(EntityKind::as_str).collect();
        format!("unknown entity '{}', expected one of: {}", s, known.join(", "))
    })
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))
}
