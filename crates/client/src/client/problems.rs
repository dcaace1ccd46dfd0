//! Problem API methods for [`Dynatrace`].

use crate::client::Dynatrace;
use crate::endpoints::{self, ProblemListOptions};
use crate::error::Result;
use crate::models::{Problem, ProblemCloseResult};
use crate::pagination::PaginatedList;

impl Dynatrace {
    pub fn list_problems(&self, options: &ProblemListOptions) -> PaginatedList<Problem> {
        endpoints::list_problems(&self.http, options)
    }

    pub async fn get_problem(&self, problem_id: &str) -> Result<Problem> {
        endpoints::get_problem(&self.http, problem_id).await
    }

    pub async fn close_problem(&self, problem_id: &str, message: &str) -> Result<ProblemCloseResult> {
        endpoints::close_problem(&self.http, problem_id, message).await
    }
}
