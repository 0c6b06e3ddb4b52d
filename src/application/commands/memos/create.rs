// src/application/commands/memos/create.rs
use super::{MemoCommandService, validation};
use crate::{
    application::{
        dto::{AuthenticatedUser, ChoiceInput, MemoDto},
        error::ApplicationResult,
    },
    domain::memo::NewMemo,
};

/// Fields as submitted; presence and shape are checked by the service.
#[derive(Debug, Default)]
pub struct CreateMemoCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<ChoiceInput>,
    pub priority: Option<ChoiceInput>,
}

impl CreateMemoCommand {
    pub fn builder() -> CreateMemoCommandBuilder {
        CreateMemoCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateMemoCommandBuilder {
    command: CreateMemoCommand,
}

impl CreateMemoCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.command.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.command.content = Some(content.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.command.category = Some(ChoiceInput::Name(category.into()));
        self
    }

    pub fn priority(mut self, rank: i64) -> Self {
        self.command.priority = Some(ChoiceInput::Rank(rank));
        self
    }

    pub fn build(self) -> CreateMemoCommand {
        self.command
    }
}

impl MemoCommandService {
    pub async fn create_memo(
        &self,
        actor: &AuthenticatedUser,
        command: CreateMemoCommand,
    ) -> ApplicationResult<MemoDto> {
        let title = validation::title(
            validation::required("title", command.title)?,
            &self.settings.forbidden_words,
        )?;
        let content = validation::content(validation::required("content", command.content)?)?;
        let category = validation::category(command.category)?.unwrap_or_default();
        let priority = validation::priority(command.priority)?.unwrap_or_default();

        let _owner_guard = self.owner_locks.acquire(actor.id).await;

        let slug = self
            .slug_service
            .generate_unique_slug(&title, actor.id, None)
            .await?;
        let now = self.clock.now();

        let new_memo = NewMemo {
            owner_id: actor.id,
            title,
            slug,
            content,
            category,
            priority,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_memo).await?;
        tracing::info!(
            memo_id = i64::from(created.id),
            owner_id = %actor.id,
            slug = %created.slug,
            "memo created"
        );
        Ok(created.into())
    }
}
