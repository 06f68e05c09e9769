use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `board` binary.
#[derive(Debug, Parser)]
#[command(name = "board", version, about = "sprintboard - fetch demo API views")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the service (overrides config)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Flat lists and progressively nested detail views
    Sample1 {
        #[command(subcommand)]
        action: Sample1Action,
    },
    /// Team member views filtered by level
    Sample2 {
        #[command(subcommand)]
        action: Sample2Action,
    },
    /// Task views carrying ancestor-derived fields
    Sample3 {
        #[command(subcommand)]
        action: Sample3Action,
    },
    /// Team summaries with optional sub-trees
    Sample4 {
        #[command(subcommand)]
        action: Sample4Action,
    },
    /// Single-team page composition
    Sample5 {
        #[command(subcommand)]
        action: Sample5Action,
    },
    /// All-teams page composition
    Sample6 {
        #[command(subcommand)]
        action: Sample6Action,
    },
    /// Views over the reusable base schemas
    Sample7 {
        #[command(subcommand)]
        action: Sample7Action,
    },
    /// Story views with computed fields
    Demo {
        #[command(subcommand)]
        action: DemoAction,
    },
    /// Execute a GraphQL query
    Graphql {
        /// Query document, e.g. '{ user { id name } }'
        query: String,
        /// Operation name to execute, for multi-operation documents
        #[arg(long)]
        operation_name: Option<String>,
        /// Query variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },
    /// Print the GraphQL schema SDL
    Schema,
}

#[derive(Debug, Subcommand)]
pub enum Sample1Action {
    /// List every user
    Users,
    /// List every task
    Tasks,
    /// Tasks with users
    TasksWithDetail,
    /// Stories with tasks
    StoriesWithDetail,
    /// Sprints with stories
    SprintsWithDetail,
    /// Teams with sprints and members
    TeamsWithDetail,
    /// Same view via the alternative composition route
    TeamsWithDetail2,
}

#[derive(Debug, Subcommand)]
pub enum Sample2Action {
    /// Teams with senior members
    TeamsWithDetail,
    /// Teams with member lists at multiple levels
    TeamsWithDetailOfMultipleLevel,
}

#[derive(Debug, Subcommand)]
pub enum Sample3Action {
    /// Teams whose tasks carry ancestor-derived names
    TeamsWithDetail,
}

#[derive(Debug, Subcommand)]
pub enum Sample4Action {
    /// Team summaries with aggregate counts
    TeamsWithDetail,
}

#[derive(Debug, Subcommand)]
pub enum Sample5Action {
    /// Page payload for one team
    PageInfo {
        /// Team to fetch
        team_id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum Sample6Action {
    /// Page payload listing every team
    PageInfo,
}

#[derive(Debug, Subcommand)]
pub enum Sample7Action {
    /// Tasks with users
    Tasks,
    /// Teams a user participates in
    UserStat {
        /// User to fetch
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum DemoAction {
    /// Stories with tasks and assignees (POST)
    Stories {
        /// Payload name field
        #[arg(long)]
        name: String,
        /// Optional payload message
        #[arg(long)]
        message: Option<String>,
    },
    /// Stories with related users collected
    Stories1,
    /// Stories with task estimates summed
    Stories2,
    /// Stories with user-derived task names
    Stories3,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, Sample5Action};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_base_url_parses_before_subcommand() {
        let cli = Cli::try_parse_from([
            "board",
            "--base-url",
            "https://board.example.com",
            "sample1",
            "users",
        ])
        .expect("cli should parse");

        assert_eq!(cli.base_url.as_deref(), Some("https://board.example.com"));
        assert!(matches!(cli.command, Commands::Sample1 { .. }));
    }

    #[test]
    fn path_parameters_parse_as_integers() {
        let cli = Cli::try_parse_from(["board", "sample5", "page-info", "7"])
            .expect("cli should parse");

        match cli.command {
            Commands::Sample5 {
                action: Sample5Action::PageInfo { team_id },
            } => assert_eq!(team_id, 7),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn demo_stories_requires_name() {
        let result = Cli::try_parse_from(["board", "demo", "stories"]);
        assert!(result.is_err());
    }
}
