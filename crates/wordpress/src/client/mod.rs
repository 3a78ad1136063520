//! WPGraphQL client implementation.
//!
//! Uses `graphql_client` for type-safe queries with `reqwest` 0.13 for HTTP.
//! Read queries are cached with `moka` (TTL from config); the mutation path
//! is never cached.

mod cache;
mod conversions;

pub mod queries;

use std::sync::Arc;

use graphql_client::{GraphQLQuery, Response};
use moka::future::Cache;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::config::WordPressConfig;
use crate::error::{GraphQLError, GraphQLErrorLocation, WordPressError};
use crate::types::{
    CategoriaPortfolio, Celebridade, Comment, CommentInput, Depoimento, Loja, OffsetPageInfo,
    PageInfo, Projeto, ProjetoConnection, ProjetoPage,
};

use cache::{CacheKey, CacheValue};
use conversions::{
    convert_categorias, convert_celebridades, convert_comment, convert_depoimentos, convert_lojas,
    convert_portfolio_connection, convert_projeto, convert_projeto_page,
};
use queries::{
    CreateComment, GetCategoriasPortfolioHome, GetCelebridadesHome, GetDepoimentosHome,
    GetLojasHome, GetPortfolioHome, GetProjetoBySlug, GetProjetosPaged, create_comment,
    get_categorias_portfolio_home, get_celebridades_home, get_depoimentos_home, get_lojas_home,
    get_portfolio_home, get_projeto_by_slug, get_projetos_paged,
};

// =============================================================================
// WordPressClient
// =============================================================================

/// Client for the WPGraphQL API.
///
/// Provides type-safe access to the site's content: celebridades,
/// depoimentos, lojas and the portfolio. Read queries are cached.
#[derive(Clone)]
pub struct WordPressClient {
    inner: Arc<WordPressClientInner>,
}

struct WordPressClientInner {
    client: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
    cache: Cache<CacheKey, CacheValue>,
}

impl WordPressClient {
    /// Create a new WPGraphQL client.
    #[must_use]
    pub fn new(config: &WordPressConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(WordPressClientInner {
                client: reqwest::Client::new(),
                endpoint: config.endpoint.to_string(),
                auth_token: config.expose_auth_token(),
                cache,
            }),
        }
    }

    /// Execute a GraphQL operation.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, WordPressError>
    where
        Q::Variables: serde::Serialize,
    {
        let request_body = Q::build_query(variables);

        let mut request = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header("Content-Type", "application/json")
            .json(&request_body);

        // WPGraphQL is public by default; the bearer token is only needed for
        // preview content and locked-down hosts
        if let Some(token) = &self.inner.auth_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request.send().await?;

        let status = response.status();

        // Check for rate limiting (WAF / hosting layer in front of WordPress)
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(WordPressError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        // Check for non-success status codes
        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "WPGraphQL returned non-success status"
            );
            return Err(WordPressError::GraphQL(vec![GraphQLError {
                message: format!(
                    "HTTP {status}: {}",
                    response_text.chars().take(200).collect::<String>()
                ),
                locations: vec![],
                path: vec![],
            }]));
        }

        // Parse the response
        let response: Response<Q::ResponseData> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse WPGraphQL response"
                );
                return Err(WordPressError::Parse(e));
            }
        };

        // Check for GraphQL errors
        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            tracing::debug!(
                errors = ?errors,
                "GraphQL errors in response"
            );

            return Err(WordPressError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| GraphQLError {
                        message: e.message,
                        locations: e.locations.map_or_else(Vec::new, |locs| {
                            locs.into_iter()
                                .map(|l| GraphQLErrorLocation {
                                    line: i64::from(l.line),
                                    column: i64::from(l.column),
                                })
                                .collect()
                        }),
                        path: e.path.map_or_else(Vec::new, |p| {
                            p.into_iter()
                                .map(|fragment| match fragment {
                                    graphql_client::PathFragment::Key(s) => {
                                        serde_json::Value::String(s)
                                    }
                                    graphql_client::PathFragment::Index(i) => {
                                        serde_json::Value::Number(i.into())
                                    }
                                })
                                .collect()
                        }),
                    })
                    .collect(),
            ));
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                body = %response_text.chars().take(500).collect::<String>(),
                "WPGraphQL response has no data and no errors"
            );
            WordPressError::GraphQL(vec![GraphQLError {
                message: "No data in response".to_string(),
                locations: vec![],
                path: vec![],
            }])
        })
    }

    // =========================================================================
    // Home Page Methods
    // =========================================================================

    /// Get the home page celebrity list.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn celebridades_home(&self) -> Result<Vec<Celebridade>, WordPressError> {
        if let Some(CacheValue::Celebridades(celebridades)) =
            self.inner.cache.get(&CacheKey::CelebridadesHome).await
        {
            debug!("Cache hit for celebridades");
            return Ok(celebridades);
        }

        let data = self
            .execute::<GetCelebridadesHome>(get_celebridades_home::Variables {})
            .await?;

        let celebridades = data
            .celebridades
            .map(convert_celebridades)
            .unwrap_or_default();

        self.inner
            .cache
            .insert(
                CacheKey::CelebridadesHome,
                CacheValue::Celebridades(celebridades.clone()),
            )
            .await;

        Ok(celebridades)
    }

    /// Get the home page testimonial list.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn depoimentos_home(&self) -> Result<Vec<Depoimento>, WordPressError> {
        if let Some(CacheValue::Depoimentos(depoimentos)) =
            self.inner.cache.get(&CacheKey::DepoimentosHome).await
        {
            debug!("Cache hit for depoimentos");
            return Ok(depoimentos);
        }

        let data = self
            .execute::<GetDepoimentosHome>(get_depoimentos_home::Variables {})
            .await?;

        let depoimentos = data.depoimentos.map(convert_depoimentos).unwrap_or_default();

        self.inner
            .cache
            .insert(
                CacheKey::DepoimentosHome,
                CacheValue::Depoimentos(depoimentos.clone()),
            )
            .await;

        Ok(depoimentos)
    }

    /// Get the full store list.
    ///
    /// The query fetches up to 1000 stores in a single page; grouping by city
    /// or state happens client-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn lojas_home(&self) -> Result<Vec<Loja>, WordPressError> {
        if let Some(CacheValue::Lojas(lojas)) = self.inner.cache.get(&CacheKey::LojasHome).await {
            debug!("Cache hit for lojas");
            return Ok(lojas);
        }

        let data = self
            .execute::<GetLojasHome>(get_lojas_home::Variables {})
            .await?;

        let lojas = match data.lojas {
            Some(conn) => {
                if conn.page_info.has_next_page {
                    warn!("store list exceeds the 1000-item page; raise the page size");
                }
                convert_lojas(conn)
            }
            None => Vec::new(),
        };

        self.inner
            .cache
            .insert(CacheKey::LojasHome, CacheValue::Lojas(lojas.clone()))
            .await;

        Ok(lojas)
    }

    // =========================================================================
    // Portfolio Methods
    // =========================================================================

    /// Get the portfolio category terms.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn categorias_portfolio(&self) -> Result<Vec<CategoriaPortfolio>, WordPressError> {
        if let Some(CacheValue::Categorias(categorias)) =
            self.inner.cache.get(&CacheKey::CategoriasPortfolio).await
        {
            debug!("Cache hit for categorias");
            return Ok(categorias);
        }

        let data = self
            .execute::<GetCategoriasPortfolioHome>(get_categorias_portfolio_home::Variables {})
            .await?;

        let categorias = data
            .categorias_portfolio
            .map(convert_categorias)
            .unwrap_or_default();

        self.inner
            .cache
            .insert(
                CacheKey::CategoriasPortfolio,
                CacheValue::Categorias(categorias.clone()),
            )
            .await;

        Ok(categorias)
    }

    /// Get the portfolio grid (up to 1000 projects, newest first).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn portfolio_home(&self) -> Result<ProjetoConnection, WordPressError> {
        if let Some(CacheValue::Portfolio(connection)) =
            self.inner.cache.get(&CacheKey::PortfolioHome).await
        {
            debug!("Cache hit for portfolio");
            return Ok(connection);
        }

        let data = self
            .execute::<GetPortfolioHome>(get_portfolio_home::Variables {})
            .await?;

        let connection = data
            .projetos
            .map(convert_portfolio_connection)
            .unwrap_or_else(|| ProjetoConnection {
                projetos: Vec::new(),
                page_info: PageInfo {
                    has_next_page: false,
                    has_previous_page: false,
                    start_cursor: None,
                    end_cursor: None,
                },
                total: None,
            });

        self.inner
            .cache
            .insert(
                CacheKey::PortfolioHome,
                CacheValue::Portfolio(connection.clone()),
            )
            .await;

        Ok(connection)
    }

    /// Get one offset-paged window of the portfolio.
    ///
    /// Not cached: the caller drives the paging and the windows overlap too
    /// little to be worth keeping.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn projetos_paged(
        &self,
        offset: i64,
        size: i64,
    ) -> Result<ProjetoPage, WordPressError> {
        let data = self
            .execute::<GetProjetosPaged>(get_projetos_paged::Variables { offset, size })
            .await?;

        Ok(data
            .projetos
            .map(convert_projeto_page)
            .unwrap_or_else(|| ProjetoPage {
                projetos: Vec::new(),
                page: OffsetPageInfo {
                    has_more: false,
                    has_previous: false,
                    total: None,
                },
            }))
    }

    /// Get a project by its slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the project is not found or the API request fails.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn projeto_by_slug(&self, slug: &str) -> Result<Projeto, WordPressError> {
        let cache_key = CacheKey::Projeto(slug.to_string());

        if let Some(CacheValue::Projeto(projeto)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for projeto");
            return Ok(*projeto);
        }

        let variables = get_projeto_by_slug::Variables {
            slug: slug.to_string(),
        };

        let data = self.execute::<GetProjetoBySlug>(variables).await?;

        let projeto_data = data
            .projeto
            .ok_or_else(|| WordPressError::NotFound(format!("Projeto not found: {slug}")))?;

        let projeto = convert_projeto(projeto_data);

        self.inner
            .cache
            .insert(cache_key, CacheValue::Projeto(Box::new(projeto.clone())))
            .await;

        Ok(projeto)
    }

    // =========================================================================
    // Mutation Methods (not cached - mutable state)
    // =========================================================================

    /// Submit a comment.
    ///
    /// A fresh `clientMutationId` is generated per call and checked against
    /// the payload echo for request correlation.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission fails or the server rejects it.
    #[instrument(skip(self, input), fields(comment_on = input.comment_on))]
    pub async fn create_comment(&self, input: CommentInput) -> Result<Comment, WordPressError> {
        let client_mutation_id = Uuid::new_v4().to_string();

        let variables = create_comment::Variables {
            input: create_comment::CreateCommentInput {
                author: input.author,
                author_email: input.author_email.map(|e| e.as_str().to_string()),
                author_url: input.author_url,
                client_mutation_id: Some(client_mutation_id.clone()),
                comment_on: Some(input.comment_on),
                content: Some(input.content),
                parent: None,
                status: None,
            },
        };

        let data = self.execute::<CreateComment>(variables).await?;

        let Some(result) = data.create_comment else {
            return Err(WordPressError::UserError(
                "comment was not created".to_string(),
            ));
        };

        if result.client_mutation_id.as_deref() != Some(client_mutation_id.as_str()) {
            warn!(
                expected = %client_mutation_id,
                received = ?result.client_mutation_id,
                "clientMutationId echo mismatch"
            );
        }

        if result.success != Some(true) {
            return Err(WordPressError::UserError(
                "comment was rejected by the server".to_string(),
            ));
        }

        result.comment.map(convert_comment).ok_or_else(|| {
            WordPressError::UserError("comment created but not returned".to_string())
        })
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    /// Invalidate a cached project.
    pub async fn invalidate_projeto(&self, slug: &str) {
        self.inner
            .cache
            .invalidate(&CacheKey::Projeto(slug.to_string()))
            .await;
    }

    /// Invalidate the cached home page lists.
    pub async fn invalidate_home(&self) {
        for key in [
            CacheKey::CelebridadesHome,
            CacheKey::DepoimentosHome,
            CacheKey::LojasHome,
            CacheKey::CategoriasPortfolio,
            CacheKey::PortfolioHome,
        ] {
            self.inner.cache.invalidate(&key).await;
        }
    }

    /// Invalidate all cached data.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use url::Url;

    use super::*;

    fn test_config() -> WordPressConfig {
        WordPressConfig {
            endpoint: Url::parse("https://cms.example.com.br/graphql").unwrap(),
            auth_token: None,
            cache_ttl: Duration::from_secs(60),
            cache_capacity: 16,
        }
    }

    #[tokio::test]
    async fn test_client_construction_and_cache_management() {
        let client = WordPressClient::new(&test_config());

        // No network involved: these only touch the in-memory cache.
        client.invalidate_projeto("loja-conceito-sp").await;
        client.invalidate_home().await;
        client.invalidate_all().await;
    }

    #[test]
    fn test_client_is_cheaply_cloneable() {
        let client = WordPressClient::new(&test_config());
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.inner, &clone.inner));
    }
}
