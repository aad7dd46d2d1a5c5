use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::credits::models::{CreateCreditRequest, CreditCreatedResponse, CreditView};
use crate::modules::credits::services::CreditService;

/// Query parameter carried by both GET endpoints
#[derive(Debug, Deserialize)]
pub struct CustomerQuery {
    #[serde(rename = "customerId")]
    pub customer_id: i64,
}

/// Create a new credit
/// POST /credits
pub async fn create_credit(
    service: web::Data<Arc<CreditService>>,
    request: web::Json<CreateCreditRequest>,
) -> Result<HttpResponse, AppError> {
    let credit = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreditCreatedResponse::from(&credit)))
}

/// Get one credit by its code, scoped to the owning customer
/// GET /credits/{credit_code}?customerId=N
pub async fn get_credit(
    service: web::Data<Arc<CreditService>>,
    path: web::Path<Uuid>,
    query: web::Query<CustomerQuery>,
) -> Result<HttpResponse, AppError> {
    let credit = service
        .find_by_code(path.into_inner(), query.customer_id)
        .await?;

    Ok(HttpResponse::Ok().json(CreditView::from(&credit)))
}

/// List all credits of a customer
/// GET /credits?customerId=N
pub async fn list_credits(
    service: web::Data<Arc<CreditService>>,
    query: web::Query<CustomerQuery>,
) -> Result<HttpResponse, AppError> {
    let credits = service.list_by_customer(query.customer_id).await?;
    let views: Vec<CreditView> = credits.iter().map(CreditView::from).collect();

    Ok(HttpResponse::Ok().json(views))
}

/// Configure credit routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/credits")
            .route("", web::post().to(create_credit))
            .route("", web::get().to(list_credits))
            .route("/{credit_code}", web::get().to(get_credit)),
    );
}
