//! Employee client - directory and record lookups

use crate::{
    ClientConfig, ClientError, ClientResult, Employee, EmployeeDirectory, EmployeeFields,
    RequestExecutor, ReqwestExecutor,
};
use reqwest::{Method, Request, Url};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

/// Separator for the `fields` query value
const FIELD_SEPARATOR: &str = ",";

/// Client for the BambooHR employee endpoints
///
/// Holds only the base URL and the executor; every call builds its own
/// request, so one client can be shared between tasks.
#[derive(Debug, Clone)]
pub struct EmployeeClient<E = ReqwestExecutor> {
    base_url: String,
    executor: E,
}

impl EmployeeClient<ReqwestExecutor> {
    /// Create a network client from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(&config.base_url, config.build_executor()?))
    }
}

impl<E: RequestExecutor> EmployeeClient<E> {
    pub fn new(base_url: &str, executor: E) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            executor,
        }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// List every employee in the directory
    ///
    /// `GET {base}/employees/directory`
    pub async fn employee_directory(
        &self,
        cancel: &CancellationToken,
    ) -> ClientResult<Vec<Employee>> {
        let request = self.get_request(&["employees", "directory"])?;
        let directory: EmployeeDirectory = self.send(cancel, request).await?;
        Ok(directory.employees)
    }

    /// Resolve a work email to an employee ID
    ///
    /// Returns `Ok(None)` when no directory entry has that exact email.
    pub async fn employee_id_by_email(
        &self,
        cancel: &CancellationToken,
        email: &str,
    ) -> ClientResult<Option<String>> {
        let directory = self.employee_directory(cancel).await?;
        Ok(find_id_by_email(&directory, email).map(str::to_string))
    }

    /// Fetch a full record by work email
    ///
    /// Two round trips: the directory to resolve the ID, then the record.
    /// Fails with `EmployeeNotFound` when no entry matches.
    pub async fn employee_by_email(
        &self,
        cancel: &CancellationToken,
        email: &str,
        fields: impl Into<EmployeeFields>,
    ) -> ClientResult<Employee> {
        let directory = self.employee_directory(cancel).await?;
        let id = find_id_by_email(&directory, email)
            .ok_or_else(|| ClientError::EmployeeNotFound(email.to_string()))?;

        self.employee(cancel, id, fields).await
    }

    /// Fetch one employee with the requested fields
    ///
    /// `GET {base}/employees/{id}?fields=...`; an empty field list requests
    /// the default set. The ID is not validated, only percent-encoded as a
    /// single path segment.
    pub async fn employee(
        &self,
        cancel: &CancellationToken,
        id: &str,
        fields: impl Into<EmployeeFields>,
    ) -> ClientResult<Employee> {
        let mut fields = fields.into();
        if fields.is_empty() {
            fields = EmployeeFields::default_set();
        }

        let mut request = self.get_request(&["employees", id])?;
        request
            .url_mut()
            .query_pairs_mut()
            .append_pair("fields", &fields.join(FIELD_SEPARATOR));

        self.send(cancel, request).await
    }

    /// GET request for `{base}/{segments...}`, each segment percent-encoded
    fn get_request(&self, segments: &[&str]) -> ClientResult<Request> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidRequest(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!("{}: cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(Request::new(Method::GET, url))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        request: Request,
    ) -> ClientResult<T> {
        tracing::debug!(url = %request.url(), "GET");
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ClientError::Cancelled),
            result = self.executor.execute(request) => result,
        }
    }
}

/// ID of the first directory entry whose work email matches exactly
///
/// Entries without an ID cannot be fetched and are skipped.
fn find_id_by_email<'a>(directory: &'a [Employee], email: &str) -> Option<&'a str> {
    directory
        .iter()
        .find(|employee| !employee.id.is_empty() && employee.has_work_email(email))
        .map(|employee| employee.id.as_str())
}
