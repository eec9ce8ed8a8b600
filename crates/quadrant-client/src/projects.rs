//! Project hunting and company analysis.

use quadrant_core::entities::{AnalysisQuery, AnalysisReport, HuntQuery, HuntReport};
use reqwest::Method;

use crate::routes::Endpoint;
use crate::{ClientError, RequestOptions, ServiceClient};

impl ServiceClient {
    /// Ask the backend to hunt for project opportunities.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::request`].
    pub async fn hunt_projects(&self, query: &HuntQuery) -> Result<HuntReport, ClientError> {
        let path = self.route(Endpoint::HuntProjects)?;
        tracing::info!(domain = ?query.domain_focus, "hunting projects");
        self.request(&path, RequestOptions::json(Method::POST, query)?)
            .await
    }

    /// Ask the backend for an outreach-readiness analysis of one company.
    ///
    /// # Errors
    ///
    /// See [`ServiceClient::request`].
    pub async fn analyze_company(
        &self,
        query: &AnalysisQuery,
    ) -> Result<AnalysisReport, ClientError> {
        let path = self.route(Endpoint::AnalyzeCompany)?;
        tracing::info!(company = ?query.company_name, "analyzing company");
        self.request(&path, RequestOptions::json(Method::POST, query)?)
            .await
    }
}
