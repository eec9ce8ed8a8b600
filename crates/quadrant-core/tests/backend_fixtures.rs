//! Backend payloads captured from the sales agent service, checked against the
//! generated JSON Schemas and the typed records.

use schemars::schema_for;
use serde_json::json;

use quadrant_core::entities::*;
use quadrant_core::enums::ReportType;

fn schema_errors(schema: &serde_json::Value, instance: &serde_json::Value) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! conforms {
    ($name:ident, $ty:ty, $payload:expr) => {
        #[test]
        fn $name() {
            let payload = $payload;
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let errors = schema_errors(&schema, &payload);
            assert!(
                errors.is_empty(),
                "{} rejected by schema: {errors:?}",
                stringify!($ty)
            );
            serde_json::from_value::<$ty>(payload).expect("payload should deserialize");
        }
    };
}

conforms!(
    hunt_report_payload,
    HuntReport,
    json!({
        "domain_focus": "Cloud Computing",
        "location": "Austin",
        "opportunities_report": "## Opportunities\n1. Data platform migration"
    })
);

conforms!(
    analysis_report_payload,
    AnalysisReport,
    json!({
        "company_name": "Acme",
        "industry": "Manufacturing",
        "readiness_analysis": "High readiness for automation."
    })
);

conforms!(
    enhanced_listing_payload,
    EnhancedBookmarkList,
    json!({
        "bookmarks": [
            {
                "id": 12,
                "report_type": "hunt",
                "company_name": "Cloud Computing",
                "domain_focus": "Cloud Computing",
                "full_report_content": "...",
                "added_by": "Sales Rep",
                "reason": "Interesting opportunities found",
                "created_at": "2025-01-14T09:30:00"
            },
            {
                "id": 13,
                "report_type": "analysis",
                "company_name": "Acme",
                "industry": "Retail",
                "added_by": "Sales Rep"
            }
        ]
    })
);

conforms!(
    simple_listing_payload,
    BookmarkListing,
    json!([{
        "id": 1,
        "company_name": "Acme",
        "analysis_summary": "Expanding into EU",
        "added_by": "Sales Rep",
        "reason": "Warm lead"
    }])
);

conforms!(
    chat_reply_payload,
    ChatReply,
    json!({ "response": "They run Kubernetes on AWS." })
);

conforms!(
    acknowledgement_payload,
    Acknowledgement,
    json!({ "id": 44, "status": "success", "message": "Bookmark saved" })
);

#[test]
fn schema_rejects_unknown_report_type() {
    let schema = serde_json::to_value(schema_for!(EnhancedBookmark)).unwrap();
    let payload = json!({
        "id": 1,
        "report_type": "summary",
        "company_name": "Acme",
        "added_by": "Sales Rep"
    });
    assert!(!schema_errors(&schema, &payload).is_empty());
}

#[test]
fn schema_rejects_report_without_body() {
    let schema = serde_json::to_value(schema_for!(HuntReport)).unwrap();
    let payload = json!({ "domain_focus": "Cloud Computing" });
    assert!(!schema_errors(&schema, &payload).is_empty());
}

#[test]
fn bookmark_from_hunt_report_carries_type_in_file_name() {
    let report: HuntReport = serde_json::from_value(json!({
        "domain_focus": "Edge AI",
        "opportunities_report": "..."
    }))
    .unwrap();
    let request = report.to_bookmark("Sales Rep", HUNT_BOOKMARK_REASON);
    assert_eq!(
        report_file_name(&request.company_name, ReportType::Hunt),
        "Edge AI_hunt_report.docx"
    );
}
