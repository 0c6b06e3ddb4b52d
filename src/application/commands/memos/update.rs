// src/application/commands/memos/update.rs
use super::{MemoCommandService, validation};
use crate::{
    application::{
        dto::{AuthenticatedUser, ChoiceInput, MemoDto, MemoLocator},
        error::ApplicationResult,
        queries::memos::find_owned_memo,
    },
    domain::memo::MemoUpdate,
};

pub struct UpdateMemoCommand {
    pub target: MemoLocator,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<ChoiceInput>,
    pub priority: Option<ChoiceInput>,
    /// A full update requires title and content; a partial one takes any subset.
    pub partial: bool,
}

impl MemoCommandService {
    pub async fn update_memo(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateMemoCommand,
    ) -> ApplicationResult<MemoDto> {
        let memo = find_owned_memo(self.read_repo.as_ref(), actor, &command.target).await?;

        let UpdateMemoCommand {
            target: _,
            title,
            content,
            category,
            priority,
            partial,
        } = command;

        let (title, content) = if partial {
            (title, content)
        } else {
            (
                Some(validation::required("title", title)?),
                Some(validation::required("content", content)?),
            )
        };

        let title = title
            .map(|value| validation::title(value, &self.settings.forbidden_words))
            .transpose()?;
        let content = content.map(validation::content).transpose()?;
        let category = validation::category(category)?;
        let priority = validation::priority(priority)?;

        let mut update = MemoUpdate::new(memo.id, actor.id, self.clock.now());
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(content) = content {
            update = update.with_content(content);
        }
        if let Some(category) = category {
            update = update.with_category(category);
        }
        if let Some(priority) = priority {
            update = update.with_priority(priority);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            memo_id = i64::from(updated.id),
            owner_id = %actor.id,
            "memo updated"
        );
        Ok(updated.into())
    }
}
