//! Workout plan service

use crate::error::ApiError;
use crate::repositories::{WorkoutPlanInput, WorkoutPlanRecord, WorkoutPlanRepository};
use fitness_tracker_shared::types::{WorkoutPlanRequest, WorkoutPlanResponse};
use fitness_tracker_shared::validation::{
    check_field, validate_plan_description, validate_plan_name, ValidationError,
};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

const NOT_FOUND: &str = "Workout plan not found";

/// Workout plan service
pub struct WorkoutPlanService;

impl WorkoutPlanService {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        req: WorkoutPlanRequest,
    ) -> Result<WorkoutPlanResponse, ApiError> {
        let input = validate_plan(req)?;
        let record = WorkoutPlanRepository::create(db, user_id, input)
            .await
            .map_err(ApiError::Internal)?;

        metrics::counter!("workout_plans_created_total").increment(1);
        info!(%user_id, plan_id = %record.id, "Workout plan created");

        Ok(to_response(record))
    }

    pub async fn list(db: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutPlanResponse>, ApiError> {
        let records = WorkoutPlanRepository::list_for_user(db, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(to_response).collect())
    }

    pub async fn get(
        db: &PgPool,
        user_id: Uuid,
        plan_id: &str,
    ) -> Result<WorkoutPlanResponse, ApiError> {
        let id = parse_plan_id(plan_id)?;
        WorkoutPlanRepository::find_for_user(db, user_id, id)
            .await
            .map_err(ApiError::Internal)?
            .map(to_response)
            .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn replace(
        db: &PgPool,
        user_id: Uuid,
        plan_id: &str,
        req: WorkoutPlanRequest,
    ) -> Result<WorkoutPlanResponse, ApiError> {
        let id = parse_plan_id(plan_id)?;
        let input = validate_plan(req)?;

        WorkoutPlanRepository::replace(db, user_id, id, input)
            .await
            .map_err(ApiError::Internal)?
            .map(to_response)
            .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn delete(db: &PgPool, user_id: Uuid, plan_id: &str) -> Result<(), ApiError> {
        let id = parse_plan_id(plan_id)?;
        let deleted = WorkoutPlanRepository::delete(db, user_id, id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound(NOT_FOUND.to_string()));
        }

        info!(%user_id, plan_id = %id, "Workout plan deleted");
        Ok(())
    }
}

pub(crate) fn parse_plan_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest("Invalid workout plan id".to_string()))
}

fn validate_plan(req: WorkoutPlanRequest) -> Result<WorkoutPlanInput, ValidationError> {
    let name = req.name.trim().to_string();
    check_field("name", || validate_plan_name(&name))?;

    let description = req
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    if let Some(ref description) = description {
        check_field("description", || validate_plan_description(description))?;
    }

    Ok(WorkoutPlanInput {
        name,
        description,
        days: req.days,
    })
}

fn to_response(record: WorkoutPlanRecord) -> WorkoutPlanResponse {
    WorkoutPlanResponse {
        id: record.id.to_string(),
        name: record.name,
        description: record.description,
        days: record.days.0,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_tracker_shared::WorkoutDay;

    fn request(name: &str, description: Option<&str>) -> WorkoutPlanRequest {
        WorkoutPlanRequest {
            name: name.to_string(),
            description: description.map(str::to_string),
            days: vec![WorkoutDay {
                name: "Push".to_string(),
                exercises: vec![],
            }],
        }
    }

    #[test]
    fn test_validate_plan_trims_and_drops_blank_description() {
        let input = validate_plan(request("  Upper Body  ", Some("   "))).unwrap();
        assert_eq!(input.name, "Upper Body");
        assert_eq!(input.description, None);
        assert_eq!(input.days.len(), 1);
    }

    #[test]
    fn test_validate_plan_rejects_bad_fields() {
        assert_eq!(validate_plan(request("AB", None)).unwrap_err().field, "name");

        let long = "x".repeat(201);
        assert_eq!(
            validate_plan(request("Legs", Some(&long))).unwrap_err().field,
            "description"
        );
    }

    #[test]
    fn test_parse_plan_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_plan_id(&id.to_string()).unwrap(), id);
        assert!(matches!(parse_plan_id("42"), Err(ApiError::BadRequest(_))));
    }
}
