use actix_web::{get, post, web, HttpRequest, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::{
    auth::AuthenticatedUser,
    graphql::Schema,
    middleware::{get_request_id, RequestId},
};

#[post("/graphql")]
async fn graphql(
    req: HttpRequest,
    schema: web::Data<Schema>,
    request: GraphQLRequest,
    auth: AuthenticatedUser,
) -> GraphQLResponse {
    let mut request = request.into_inner().data(auth.0);
    if let Some(request_id) = get_request_id(&req) {
        request = request.data(RequestId(request_id));
    }
    schema.execute(request).await.into()
}

#[get("/graphiql")]
async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/api/graphql").finish())
}
