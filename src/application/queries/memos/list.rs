use super::MemoQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, MemoDto, NumberedPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        memo::{Category, MemoFilter},
        pagination::Paginator,
    },
};

pub struct ListMemosQuery {
    pub category: Option<String>,
    pub page: Option<String>,
}

impl MemoQueryService {
    /// API listing: fixed page size, no orphans, and a page outside the
    /// listing is an error rather than a fallback.
    pub async fn list_memos(
        &self,
        actor: &AuthenticatedUser,
        query: ListMemosQuery,
    ) -> ApplicationResult<NumberedPage<MemoDto>> {
        let category = query
            .category
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(str::parse::<Category>)
            .transpose()?;
        let filter = MemoFilter { category };

        let paginator = Paginator::new(self.settings.api_page_size, 0)?;
        let count = self.read_repo.count(actor.id, filter).await?;
        let page = Paginator::parse_number(query.page.as_deref())
            .and_then(|number| paginator.page(number, count))
            .map_err(|err| ApplicationError::not_found(format!("invalid page: {err}")))?;

        let memos = self
            .read_repo
            .list_page(actor.id, filter, page.window)
            .await?;
        let results = memos.into_iter().map(Into::into).collect();

        Ok(NumberedPage::new(&page, results))
    }
}
