use std::collections::VecDeque;

use shared::models::{Analysis, ApiModelSettings, RequestBody};
use uuid::Uuid;
use yew::prelude::*;

use crate::api;
use crate::store::StoreContext;

/// One executed step of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskResult {
    pub task: String,
    pub result: String,
}

/// Minimal agent console: take a goal, start a run with the current model
/// settings, then analyze and execute each queued task until the queue or
/// the loop budget runs out.
#[function_component(AgentStage)]
pub fn agent_stage() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    let goal = use_state(String::new);
    let pending = use_state(VecDeque::<String>::new);
    let completed = use_state(Vec::<TaskResult>::new);
    let is_running = use_state(|| false);

    let on_goal_input = {
        let goal = goal.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            goal.set(input.value());
        })
    };

    let on_deploy = {
        let store = store.clone();
        let goal = goal.clone();
        let pending = pending.clone();
        let completed = completed.clone();
        let is_running = is_running.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if goal.is_empty() || *is_running {
                return;
            }

            let max_loops = store.settings.custom_max_loops;
            let mut base =
                RequestBody::new(ApiModelSettings::from(&store.settings), (*goal).clone());
            base.run_id = Some(Uuid::new_v4());

            let pending = pending.clone();
            let completed = completed.clone();
            let is_running = is_running.clone();
            is_running.set(true);
            completed.set(Vec::new());
            wasm_bindgen_futures::spawn_local(async move {
                run_agent(base, max_loops, &pending, &completed).await;
                is_running.set(false);
            });
        })
    };

    html! {
        <div class="agent-stage">
            <div class="goal-row">
                <input type="text" class="form-input goal-input"
                    value={(*goal).clone()}
                    oninput={on_goal_input}
                    placeholder="What should the agent accomplish?"
                />
                <button class="btn btn-primary" disabled={*is_running} onclick={on_deploy}>
                    {if *is_running { "Working..." } else { "Deploy Agent" }}
                </button>
            </div>

            <ul class="task-list">
                {for completed.iter().map(|step| html! {
                    <li class="task-item task-done">
                        <span class="task-name">{&step.task}</span>
                        <p class="task-result">{&step.result}</p>
                    </li>
                })}
                {for pending.iter().map(|task| html! {
                    <li class="task-item">{task}</li>
                })}
            </ul>
        </div>
    }
}

/// Drive one run: start, then analyze → execute → create per task, stopping
/// at the loop budget. Endpoint failures end the run; they are logged, not
/// shown.
async fn run_agent(
    base: RequestBody,
    max_loops: u32,
    pending: &UseStateHandle<VecDeque<String>>,
    completed: &UseStateHandle<Vec<TaskResult>>,
) {
    let mut queue: VecDeque<String> = match api::start_goal_agent(&base).await {
        Ok(response) => response.new_tasks.into(),
        Err(err) => {
            tracing::warn!("failed to start agent run: {err}");
            return;
        }
    };
    pending.set(queue.clone());

    let mut done: Vec<TaskResult> = Vec::new();
    for _ in 0..max_loops {
        let Some(task) = queue.pop_front() else { break };

        let analysis = match api::analyze_task_agent(&analyze_request(&base, &task)).await {
            Ok(analysis) => analysis,
            Err(err) => {
                tracing::warn!("failed to analyze task {task:?}: {err}");
                break;
            }
        };

        let executed =
            match api::execute_task_agent(&execute_request(&base, &task, analysis)).await {
                Ok(executed) => executed,
                Err(err) => {
                    tracing::warn!("failed to execute task {task:?}: {err}");
                    break;
                }
            };

        done.push(TaskResult {
            task: task.clone(),
            result: executed.response.clone(),
        });
        completed.set(done.clone());

        let follow_up = create_request(&base, &queue, &task, &executed.response, &done);
        match api::create_tasks_agent(&follow_up).await {
            Ok(response) => queue.extend(response.new_tasks),
            Err(err) => tracing::warn!("failed to create follow-up tasks: {err}"),
        }
        pending.set(queue.clone());
    }
    pending.set(queue);
}

fn analyze_request(base: &RequestBody, task: &str) -> RequestBody {
    let mut body = base.clone();
    body.task = Some(task.to_owned());
    body
}

fn execute_request(base: &RequestBody, task: &str, analysis: Analysis) -> RequestBody {
    let mut body = base.clone();
    body.task = Some(task.to_owned());
    body.analysis = Some(analysis);
    body
}

fn create_request(
    base: &RequestBody,
    queue: &VecDeque<String>,
    last_task: &str,
    result: &str,
    done: &[TaskResult],
) -> RequestBody {
    let mut body = base.clone();
    body.tasks = Some(queue.iter().cloned().collect());
    body.last_task = Some(last_task.to_owned());
    body.result = Some(result.to_owned());
    body.completed_tasks = Some(done.iter().map(|step| step.task.clone()).collect());
    body
}
