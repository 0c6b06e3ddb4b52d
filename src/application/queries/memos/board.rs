use super::MemoQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BoardPageDto, MemoDto},
        error::ApplicationResult,
    },
    domain::{
        memo::{Category, MemoFilter},
        pagination::{Page, PageWindow, Paginator},
    },
};

pub struct MemoBoardQuery {
    pub category: Option<String>,
    pub page: Option<String>,
}

impl MemoQueryService {
    /// Board listing: page size and orphans from settings; an unusable page
    /// number shows page 1 and an unknown category shows nothing.
    pub async fn memo_board(
        &self,
        actor: &AuthenticatedUser,
        query: MemoBoardQuery,
    ) -> ApplicationResult<BoardPageDto<MemoDto>> {
        let paginator = Paginator::new(
            self.settings.board_page_size,
            self.settings.board_page_orphans,
        )?;

        let category_param = query.category.filter(|value| !value.is_empty());
        let (page, items) = match category_param.as_deref().map(str::parse::<Category>) {
            Some(Err(_)) => (empty_page(), Vec::new()),
            parsed => {
                let filter = MemoFilter {
                    category: parsed.and_then(Result::ok),
                };
                let count = self.read_repo.count(actor.id, filter).await?;
                let page = paginator.page_or_first(query.page.as_deref(), count);
                let memos = self
                    .read_repo
                    .list_page(actor.id, filter, page.window)
                    .await?;
                (page, memos.into_iter().map(MemoDto::from).collect())
            }
        };

        let (owner, nickname) = match self.user_repo.find_by_id(actor.id).await? {
            Some(user) => (user.username.to_string(), user.nickname.as_str().to_string()),
            None => (actor.username.clone(), String::new()),
        };

        Ok(BoardPageDto {
            owner,
            nickname,
            category: category_param,
            page_number: page.number,
            num_pages: page.num_pages,
            count: page.count,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            has_other_pages: page.has_other_pages(),
            items,
        })
    }
}

fn empty_page() -> Page {
    Page {
        number: 1,
        num_pages: 1,
        count: 0,
        window: PageWindow {
            offset: 0,
            limit: 0,
        },
    }
}
