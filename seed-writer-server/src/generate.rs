//! `POST /v1/generate`.

use actix_web::{post, web};
use tracing::{info, warn};

use seed_writer::{GenerateError, GenerationRequest, SeedWriter};

use crate::dto::{Envelope, GenerateBody, GenerateData};
use crate::error::{wire_name, ApiError, ApiResult};

#[post("/v1/generate")]
pub async fn generate(
    writer: web::Data<SeedWriter>,
    body: web::Json<GenerateBody>,
) -> ApiResult<web::Json<Envelope<GenerateData>>> {
    let request = GenerationRequest::from(body.into_inner());
    match writer.generate(&request) {
        Ok(result) => {
            info!(
                type6_index = result.category_index,
                mode = ?request.output_mode,
                "generate ok"
            );
            Ok(web::Json(Envelope::ok(GenerateData::from(result))))
        }
        Err(GenerateError::Validation(v)) => {
            warn!(field = wire_name(v.field), reason = %v.reason, "generate rejected");
            Err(ApiError::from(GenerateError::Validation(v)))
        }
        Err(err) => Err(ApiError::from(err)),
    }
}
