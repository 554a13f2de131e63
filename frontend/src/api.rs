use gloo_net::http::Request;
use shared::models::*;

const API_BASE: &str = "/api/agent";

pub async fn start_goal_agent(body: &RequestBody) -> Result<NewTasksResponse, gloo_net::Error> {
    Request::post(&format!("{}/start", API_BASE))
        .json(body)?
        .send()
        .await?
        .json()
        .await
}

pub async fn analyze_task_agent(body: &RequestBody) -> Result<Analysis, gloo_net::Error> {
    Request::post(&format!("{}/analyze", API_BASE))
        .json(body)?
        .send()
        .await?
        .json()
        .await
}

pub async fn execute_task_agent(body: &RequestBody) -> Result<ExecuteResponse, gloo_net::Error> {
    Request::post(&format!("{}/execute", API_BASE))
        .json(body)?
        .send()
        .await?
        .json()
        .await
}

pub async fn create_tasks_agent(body: &RequestBody) -> Result<NewTasksResponse, gloo_net::Error> {
    Request::post(&format!("{}/create", API_BASE))
        .json(body)?
        .send()
        .await?
        .json()
        .await
}
