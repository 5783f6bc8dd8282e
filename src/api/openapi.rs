//! OpenAPI documentation

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, equipment, events, feed, health, it_requests, news, reviews, travel, vacations};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR Feed API",
        version = "1.0.0",
        description = "Internal HR administration REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    modifiers(&SecurityAddon),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        // Feed
        feed::get_feed,
        // Vacations
        vacations::list_vacations,
        vacations::get_vacation,
        vacations::update_workflow_step,
        // Travel
        travel::list_travel,
        travel::get_travel,
        // IT requests
        it_requests::list_it_requests,
        it_requests::get_it_request,
        // Reviews
        reviews::review_vacation,
        reviews::review_travel,
        reviews::review_it_request,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::get_depreciation_schedule,
        // News
        news::list_news,
        news::create_news,
        news::update_news,
        news::delete_news,
        // Events
        events::subscribe,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            // Enums
            crate::models::enums::ReviewStatus,
            crate::models::enums::EquipmentModel,
            crate::models::enums::ApprovalState,
            crate::models::enums::SignatureState,
            crate::models::enums::EmailState,
            crate::models::enums::NewsType,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::equipment::DepreciationView,
            crate::models::equipment::ScheduleEntryView,
            crate::models::equipment::EquipmentWithDepreciation,
            equipment::EquipmentListResponse,
            equipment::DepreciationScheduleResponse,
            // Vacations
            crate::models::vacation::VacationRequest,
            crate::models::vacation::WorkflowStepUpdate,
            crate::workflow::WorkflowSummary,
            crate::workflow::WorkflowStatus,
            vacations::VacationsListResponse,
            vacations::VacationDetails,
            // Travel
            crate::models::travel::TravelNotification,
            travel::TravelListResponse,
            // IT requests
            crate::models::it_request::ItEquipmentRequest,
            it_requests::ItRequestsListResponse,
            // Reviews
            reviews::ReviewTransitionRequest,
            reviews::ReviewTransitionResponse,
            // News
            crate::models::news::NewsUpdate,
            crate::models::news::CreateNews,
            crate::models::news::UpdateNews,
            news::NewsListResponse,
            // Feed
            crate::models::feed::FeedItem,
            crate::models::feed::FeedKind,
            feed::FeedResponse,
            // Events
            crate::services::changes::ChangeEvent,
            crate::services::changes::ChangeOp,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Shared-password authentication"),
        (name = "feed", description = "Merged activity feed"),
        (name = "vacations", description = "Vacation requests and their workflow"),
        (name = "travel", description = "Travel notifications"),
        (name = "it-requests", description = "IT equipment requests"),
        (name = "reviews", description = "Review cycle transitions"),
        (name = "equipment", description = "IT equipment inventory and depreciation"),
        (name = "news", description = "News announcements"),
        (name = "events", description = "Change notifications")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
