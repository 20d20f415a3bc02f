use async_graphql::{Context, Object, Result, ResultExt};

use crate::{
    app_state::AppState,
    auth::extract_claims_from_context,
    models::{
        domain::{GradeLevel, SchoolLevel, SchoolProfile, Semester, Subject},
        dto::response::CurriculumResponse,
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn schools(&self, ctx: &Context<'_>) -> Result<Vec<SchoolProfile>> {
        let state = ctx.data::<AppState>()?;
        extract_claims_from_context(ctx).extend()?;

        state.school_service.list_schools().await.extend()
    }

    async fn subjects(&self, ctx: &Context<'_>, level: Option<SchoolLevel>) -> Result<Vec<Subject>> {
        let state = ctx.data::<AppState>()?;
        extract_claims_from_context(ctx).extend()?;

        state.subject_service.list_subjects(level).await.extend()
    }

    /// Curriculum reference text for a grade and semester; empty when none.
    async fn curriculum(
        &self,
        ctx: &Context<'_>,
        grade: GradeLevel,
        semester: Semester,
    ) -> Result<CurriculumResponse> {
        let state = ctx.data::<AppState>()?;
        extract_claims_from_context(ctx).extend()?;

        Ok(CurriculumResponse {
            grade,
            semester,
            context: state.exam_service.curriculum_context(grade, semester),
        })
    }

    async fn grades(&self, level: SchoolLevel) -> Vec<GradeLevel> {
        GradeLevel::for_level(level).to_vec()
    }
}
