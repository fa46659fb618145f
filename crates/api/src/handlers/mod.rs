pub mod auth;
pub mod client;
pub mod content_studio;
pub mod editing_task;
pub mod expense;
pub mod faq;
pub mod invoice;
pub mod lead;
pub mod notification;
pub mod performance;
pub mod project;
pub mod revenue;
pub mod script;
pub mod shoot;
pub mod task;
pub mod user;
