use async_graphql::{Context, Object, Result, ResultExt};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::extract_claims_from_context,
    errors::AppError,
    middleware::RequestId,
    models::{domain::ExamDocument, dto::request::GenerateExamRequest},
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn generate_exam(
        &self,
        ctx: &Context<'_>,
        input: GenerateExamRequest,
    ) -> Result<ExamDocument> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).extend()?;

        input.validate().map_err(AppError::from).extend()?;
        let config = input.into_config();
        let request_id = ctx
            .data_opt::<RequestId>()
            .map(|id| id.0.as_str())
            .unwrap_or_default();
        log::info!(
            "[{}] '{}' requested an exam for {} via GraphQL",
            request_id,
            claims.username(),
            config.subject
        );

        state
            .exam_service
            .generate_exam(&config, request_id)
            .await
            .extend()
    }
}
