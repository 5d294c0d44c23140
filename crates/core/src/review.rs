//! Review-request flow.
//!
//! Models the request flow as pure functions over a project's status flags
//! and metadata. A project already in review suppresses the flow entirely;
//! otherwise incomplete metadata produces a warning and complete metadata
//! produces the request form with its type choices.

use std::str::FromStr;

use crate::error::CoreError;
use crate::project::missing_metadata;

/* --------------------------------------------------------------------------
Review types
-------------------------------------------------------------------------- */

/// What the requester is asking the reviewer to approve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewType {
    ShippedApproval,
    ViralApproval,
    HoursApproval,
    Other,
}

impl ReviewType {
    /// The persisted wire form of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewType::ShippedApproval => "ShippedApproval",
            ReviewType::ViralApproval => "ViralApproval",
            ReviewType::HoursApproval => "HoursApproval",
            ReviewType::Other => "Other",
        }
    }
}

impl FromStr for ReviewType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ShippedApproval" => Ok(ReviewType::ShippedApproval),
            "ViralApproval" => Ok(ReviewType::ViralApproval),
            "HoursApproval" => Ok(ReviewType::HoursApproval),
            "Other" => Ok(ReviewType::Other),
            other => Err(CoreError::Validation(format!(
                "Unknown review type: {other}"
            ))),
        }
    }
}

/// Default type for a new request: hours approval once shipped, shipped
/// approval before that.
pub fn default_review_type(shipped: bool) -> ReviewType {
    if shipped {
        ReviewType::HoursApproval
    } else {
        ReviewType::ShippedApproval
    }
}

/// Types the requester may choose from, given the project's current flags.
/// Approvals already granted are not offered again; `Other` always is.
pub fn available_review_types(shipped: bool, viral: bool) -> Vec<ReviewType> {
    let mut types = Vec::new();
    if !shipped {
        types.push(ReviewType::ShippedApproval);
    }
    if !viral {
        types.push(ReviewType::ViralApproval);
    }
    if shipped {
        types.push(ReviewType::HoursApproval);
    }
    types.push(ReviewType::Other);
    types
}

/* --------------------------------------------------------------------------
Flow state
-------------------------------------------------------------------------- */

/// Where the request flow stands for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewFlowState {
    /// The project is already in review; the flow is suppressed until the
    /// review resolves externally.
    Suppressed,
    /// Required metadata is incomplete; the listed fields block the form.
    MetadataWarning { missing: Vec<&'static str> },
    /// The request form may be shown.
    RequestForm {
        default_type: ReviewType,
        available_types: Vec<ReviewType>,
    },
}

/// Resolve the flow state for a project. Suppression wins over the
/// metadata check, so an in-review project never surfaces the warning.
pub fn flow_state(
    in_review: bool,
    shipped: bool,
    viral: bool,
    code_url: &str,
    playable_url: &str,
    screenshot: &str,
) -> ReviewFlowState {
    if in_review {
        return ReviewFlowState::Suppressed;
    }
    let missing = missing_metadata(code_url, playable_url, screenshot);
    if !missing.is_empty() {
        return ReviewFlowState::MetadataWarning { missing };
    }
    ReviewFlowState::RequestForm {
        default_type: default_review_type(shipped),
        available_types: available_review_types(shipped, viral),
    }
}

/* --------------------------------------------------------------------------
Submission validation
-------------------------------------------------------------------------- */

/// Validate a submission against the project's current flags: the comment
/// must be non-empty after trimming and the type must be one the flow
/// currently offers.
pub fn validate_review_request(
    shipped: bool,
    viral: bool,
    review_type: ReviewType,
    comment: &str,
) -> Result<(), CoreError> {
    if comment.trim().is_empty() {
        return Err(CoreError::Validation(
            "Review request comment is required".to_string(),
        ));
    }
    if !available_review_types(shipped, viral).contains(&review_type) {
        return Err(CoreError::Validation(format!(
            "Review type {} is not available for this project",
            review_type.as_str()
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
