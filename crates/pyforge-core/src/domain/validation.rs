use crate::domain::{
    entities::{blueprint::ProjectBlueprint, project_plan::ProjectPlan},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_blueprint(blueprint: &ProjectBlueprint) -> Result<(), DomainError> {
        blueprint.validate()
    }

    pub fn validate_plan(plan: &ProjectPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
