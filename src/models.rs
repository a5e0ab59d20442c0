use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentIdentity {
    pub name: String,
}

/// One row of the class listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub class_id: Option<String>,
    pub class_name: String,
    pub course_code: String,
    pub teacher_name: String,
    pub teacher_email: String,
    pub period: String,
    /// Grade text exactly as the portal shows it.
    pub grade_display: String,
    /// `None` when the grade text carries no number. Never coerced to zero.
    pub average: Option<f64>,
    pub has_grade: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentCategory {
    pub name: String,
    pub earned_points: String,
    pub max_points: String,
    pub percentage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub date_due: String,
    pub date_assigned: String,
    pub turned_in_date: String,
    pub name: String,
    pub category: String,
    pub score: String,
    pub weight: String,
    pub weighted_score: String,
    pub total_points: String,
    pub weighted_total_points: String,
    pub percentage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail {
    pub class_name: String,
    pub teacher_name: String,
    pub current_average: Option<f64>,
    pub last_updated_timestamp: String,
    pub assignments: Vec<Assignment>,
    pub categories: Vec<AssignmentCategory>,
    pub marking_period: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl CourseDetail {
    /// The populated-but-empty detail returned when a class cannot be found.
    pub fn not_found(class_name: &str, marking_period: u32) -> Self {
        Self {
            class_name: class_name.to_string(),
            marking_period,
            error: Some("Class not found".to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Transport,
    Authentication,
    Correlation,
}

/// What every public operation hands back. Failures still carry data, so the
/// caller can render an empty view without a second code path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome<T> {
    Ok {
        data: T,
    },
    Error {
        kind: FailureKind,
        error: String,
        data: T,
    },
}

impl<T> Outcome<T> {
    pub fn ok(data: T) -> Self {
        Outcome::Ok { data }
    }

    pub fn failed(kind: FailureKind, error: impl Into<String>, data: T) -> Self {
        Outcome::Error {
            kind,
            error: error.into(),
            data,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok { .. })
    }

    pub fn data(&self) -> &T {
        match self {
            Outcome::Ok { data } | Outcome::Error { data, .. } => data,
        }
    }

    pub fn into_data(self) -> T {
        match self {
            Outcome::Ok { data } | Outcome::Error { data, .. } => data,
        }
    }

    pub fn failure(&self) -> Option<(FailureKind, &str)> {
        match self {
            Outcome::Ok { .. } => None,
            Outcome::Error { kind, error, .. } => Some((*kind, error.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outcome_serializes_with_status_tag() {
        let ok = Outcome::ok(StudentIdentity {
            name: "Jane Doe".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"status": "ok", "data": {"name": "Jane Doe"}})
        );

        let failed: Outcome<Vec<CourseSummary>> =
            Outcome::failed(FailureKind::Authentication, "Login failed", Vec::new());
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({
                "status": "error",
                "kind": "authentication",
                "error": "Login failed",
                "data": []
            })
        );
    }

    #[test]
    fn missing_average_serializes_as_null() {
        let summary = CourseSummary {
            class_name: "Art I".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["average"], serde_json::Value::Null);
        assert_eq!(value["classId"], serde_json::Value::Null);
        assert_eq!(value["hasGrade"], json!(false));
    }

    #[test]
    fn not_found_detail_is_empty_with_marker() {
        let detail = CourseDetail::not_found("Chemistry", 2);
        assert!(detail.assignments.is_empty());
        assert!(detail.categories.is_empty());
        assert_eq!(detail.marking_period, 2);
        assert_eq!(detail.error.as_deref(), Some("Class not found"));
    }
}
