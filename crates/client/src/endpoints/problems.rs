//! Problems API v2.

use serde_json::json;

use crate::endpoints::{decode, encode_path_segment};
use crate::error::Result;
use crate::http::{HttpClient, QueryParams};
use crate::models::{Problem, ProblemCloseResult};
use crate::pagination::PaginatedList;

#[derive(Debug, Clone, Default)]
pub struct ProblemListOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    /// e.g. `status("open")`
    pub problem_selector: Option<String>,
    pub entity_selector: Option<String>,
    pub fields: Vec<String>,
    pub sort: Option<String>,
    pub page_size: Option<usize>,
}

pub fn list_problems(http: &HttpClient, options: &ProblemListOptions) -> PaginatedList<Problem> {
    let mut params: QueryParams = vec![];
    crate::query_params! { params =>
        "from" => ref options.from,
        "to" => ref options.to,
        "problemSelector" => ref options.problem_selector,
        "entitySelector" => ref options.entity_selector,
        "fields" => join options.fields,
        "sort" => ref options.sort,
        "pageSize" => options.page_size,
    }
    PaginatedList::new(http.clone(), "/api/v2/problems", Some(params), None, "problems")
}

pub async fn get_problem(http: &HttpClient, problem_id: &str) -> Result<Problem> {
    let path = format!("/api/v2/problems/{}", encode_path_segment(problem_id));
    let response = http.get(&path, &[]).await?;
    decode(http, &response)
}

/// Close a problem, attaching `message` as the closing comment.
pub async fn close_problem(
    http: &HttpClient,
    problem_id: &str,
    message: &str,
) -> Result<ProblemCloseResult> {
    let path = format!("/api/v2/problems/{}/close", encode_path_segment(problem_id));
    let response = http.post_json(&path, json!({ "message": message })).await?;
    decode(http, &response)
}
