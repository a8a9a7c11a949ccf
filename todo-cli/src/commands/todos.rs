use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use shared::{
    controller::Event,
    models::{CreateTodoRequest, MAX_PRIORITY, Timestamp},
};
use uuid::Uuid;

use super::{CliController, finish, signed_in};
use crate::terminal::format_list;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// What needs to be done
    pub description: String,

    /// 0 (Normal) to 4 (Top)
    #[arg(long, short, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_PRIORITY)))]
    pub priority: u8,

    /// Due date as RFC 3339, e.g. 2025-06-01T17:00:00Z
    #[arg(long, short)]
    pub due: Option<String>,
}

fn print_todos(controller: &CliController) {
    let view = controller.state().todo_view(Utc::now());
    println!("{}", format_list(&view));
}

pub async fn list(controller: &CliController) -> Result<()> {
    signed_in(controller).await?;
    print_todos(controller);
    Ok(())
}

pub async fn add(controller: &CliController, args: AddArgs) -> Result<()> {
    let due_date = args
        .due
        .as_deref()
        .map(Timestamp::parse)
        .transpose()
        .context("invalid --due value; expected RFC 3339")?;
    signed_in(controller).await?;

    controller
        .dispatch(Event::AddTodoSubmitted(CreateTodoRequest::new(
            args.description,
            args.priority,
            due_date,
        )))
        .await;
    finish(controller)?;
    print_todos(controller);
    Ok(())
}

pub async fn complete(controller: &CliController, id: Uuid) -> Result<()> {
    signed_in(controller).await?;
    controller.dispatch(Event::CompleteRequested(id)).await;
    finish(controller)
}

pub async fn delete(controller: &CliController, id: Uuid) -> Result<()> {
    signed_in(controller).await?;
    controller.dispatch(Event::DeleteRequested(id)).await;
    finish(controller)
}
