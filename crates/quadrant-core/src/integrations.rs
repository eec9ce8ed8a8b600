//! Static catalog of third-party integrations shown on the dashboard.

use serde::Serialize;

use crate::enums::IntegrationStatus;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Integration {
    pub name: &'static str,
    pub description: &'static str,
    pub status: IntegrationStatus,
}

const CATALOG: &[Integration] = &[
    Integration {
        name: "Gemini AI",
        description: "AI-powered analysis and opportunity hunting",
        status: IntegrationStatus::Active,
    },
    Integration {
        name: "Microsoft Graph",
        description: "Email sending and calendar integration",
        status: IntegrationStatus::Active,
    },
    Integration {
        name: "Apollo Agent",
        description: "Lead enrichment and contact discovery",
        status: IntegrationStatus::Pending,
    },
    Integration {
        name: "Cerebricks",
        description: "Data integration and analytics",
        status: IntegrationStatus::Pending,
    },
    Integration {
        name: "Kaveri",
        description: "CRM synchronization",
        status: IntegrationStatus::Pending,
    },
];

#[must_use]
pub const fn catalog() -> &'static [Integration] {
    CATALOG
}
