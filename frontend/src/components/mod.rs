pub mod agent_stage;
pub mod chat_window_title;
pub mod settings_modal;
