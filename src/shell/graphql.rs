use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::activities::use_cases::list_activities::inbound::graphql::ListActivitiesQuery;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::graphql::SignUpForActivityMutation;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::graphql::UnregisterFromActivityMutation;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListActivitiesQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(SignUpForActivityMutation, UnregisterFromActivityMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
