use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RootInfoDoc {
    #[schema(example = "Cheque App API")]
    pub message: String,
    #[schema(example = "running")]
    pub status: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}

#[derive(ToSchema)]
pub struct NewChequeDoc {
    #[schema(example = "CHQ-2026-001")]
    pub cheque_number: String,
    #[schema(example = true)]
    pub manager_approved: bool,
}

#[derive(ToSchema)]
pub struct ChequeDoc {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "CHQ-2026-001")]
    pub cheque_number: String,
    #[schema(example = true)]
    pub manager_approved: bool,
    #[schema(example = "2026-01-15T12:00:00Z")]
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct MessageDoc {
    #[schema(example = "Cheque deleted successfully")]
    pub message: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    #[schema(example = "Not Found")]
    pub error: String,
    #[schema(example = "Cheque not found")]
    pub detail: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Cheque Management API", description = "Create, list, fetch and delete cheques with manager approval tracking."),
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::cheques::create,
        crate::routes::cheques::list,
        crate::routes::cheques::clear,
        crate::routes::cheques::get,
        crate::routes::cheques::delete,
    ),
    components(
        schemas(
            HealthResponse,
            RootInfoDoc,
            NewChequeDoc,
            ChequeDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "cheques")
    )
)]
pub struct ApiDoc;
