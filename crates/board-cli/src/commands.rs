//! Command dispatch: one endpoint call per subcommand, printed as JSON.

use anyhow::Context;
use board_client::ApiClient;
use board_client::models::{GraphQlRequest, Payload};

use crate::cli::{
    Commands, DemoAction, Sample1Action, Sample2Action, Sample3Action, Sample4Action,
    Sample5Action, Sample6Action, Sample7Action,
};
use crate::output::print_json;

pub async fn dispatch(command: Commands, client: &ApiClient) -> anyhow::Result<()> {
    match command {
        Commands::Sample1 { action } => sample_1(action, client).await,
        Commands::Sample2 { action } => sample_2(action, client).await,
        Commands::Sample3 { action } => match action {
            Sample3Action::TeamsWithDetail => {
                print_json(&client.sample_3().teams_with_detail().await?)
            }
        },
        Commands::Sample4 { action } => match action {
            Sample4Action::TeamsWithDetail => {
                print_json(&client.sample_4().teams_with_detail().await?)
            }
        },
        Commands::Sample5 { action } => match action {
            Sample5Action::PageInfo { team_id } => {
                print_json(&client.sample_5().page_info(team_id).await?)
            }
        },
        Commands::Sample6 { action } => match action {
            Sample6Action::PageInfo => print_json(&client.sample_6().page_info().await?),
        },
        Commands::Sample7 { action } => sample_7(action, client).await,
        Commands::Demo { action } => demo(action, client).await,
        Commands::Graphql {
            query,
            operation_name,
            variables,
        } => graphql(client, query, operation_name, variables).await,
        Commands::Schema => {
            let sdl = client.graphql().schema_sdl().await?;
            println!("{sdl}");
            Ok(())
        }
    }
}

async fn sample_1(action: Sample1Action, client: &ApiClient) -> anyhow::Result<()> {
    let ops = client.sample_1();
    match action {
        Sample1Action::Users => print_json(&ops.users().await?),
        Sample1Action::Tasks => print_json(&ops.tasks().await?),
        Sample1Action::TasksWithDetail => print_json(&ops.tasks_with_detail().await?),
        Sample1Action::StoriesWithDetail => print_json(&ops.stories_with_detail().await?),
        Sample1Action::SprintsWithDetail => print_json(&ops.sprints_with_detail().await?),
        Sample1Action::TeamsWithDetail => print_json(&ops.teams_with_detail().await?),
        Sample1Action::TeamsWithDetail2 => print_json(&ops.teams_with_detail2().await?),
    }
}

async fn sample_2(action: Sample2Action, client: &ApiClient) -> anyhow::Result<()> {
    let ops = client.sample_2();
    match action {
        Sample2Action::TeamsWithDetail => print_json(&ops.teams_with_detail().await?),
        Sample2Action::TeamsWithDetailOfMultipleLevel => {
            print_json(&ops.teams_with_detail_of_multiple_level().await?)
        }
    }
}

async fn sample_7(action: Sample7Action, client: &ApiClient) -> anyhow::Result<()> {
    let ops = client.sample_7();
    match action {
        Sample7Action::Tasks => print_json(&ops.tasks().await?),
        Sample7Action::UserStat { id } => print_json(&ops.user_stat(id).await?),
    }
}

async fn demo(action: DemoAction, client: &ApiClient) -> anyhow::Result<()> {
    let ops = client.demo();
    match action {
        DemoAction::Stories { name, message } => {
            let payload = Payload { message, name };
            print_json(&ops.stories(&payload).await?)
        }
        DemoAction::Stories1 => print_json(&ops.stories_1().await?),
        DemoAction::Stories2 => print_json(&ops.stories_2().await?),
        DemoAction::Stories3 => print_json(&ops.stories_3().await?),
    }
}

async fn graphql(
    client: &ApiClient,
    query: String,
    operation_name: Option<String>,
    variables: Option<String>,
) -> anyhow::Result<()> {
    let variables = variables
        .map(|raw| serde_json::from_str(&raw))
        .transpose()
        .context("--variables must be a JSON object")?;

    let request = GraphQlRequest {
        query,
        variables,
        operation_name,
    };
    print_json(&client.graphql().execute(&request).await?)
}
