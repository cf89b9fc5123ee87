use anyhow::anyhow;
use tracing::{info, instrument};

use na_meste_core::AppError;
use na_meste_db::{CollegeRepository, RepositoryError};
use na_meste_models::{College, CreateCollegeRequest};

pub struct CollegeService;

impl CollegeService {
    #[instrument(skip(colleges))]
    pub async fn create_college(
        colleges: &dyn CollegeRepository,
        dto: CreateCollegeRequest,
    ) -> Result<College, AppError> {
        let college = colleges.create(&dto.name).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                AppError::bad_request(anyhow!("College with this name already exists"))
            }
            e => AppError::internal_context(e, "Failed to create the college"),
        })?;

        info!(college_id = %college.id, "college has been successfully added");
        Ok(college)
    }
}
