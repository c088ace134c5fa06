// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::NewArticle,
};

/// Fields accepted on creation. Anything else in the payload is ignored.
#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: Option<String>,
    pub body: Option<String>,
    pub status: Option<String>,
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let now = self.clock.now();

        let new_article = NewArticle::validate(command.title, command.body, command.status, now)
            .inspect_err(|err| tracing::debug!(error = %err, "article rejected"))?;

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = created.id.0, status = %created.status, "article created");
        Ok(created.into())
    }
}
